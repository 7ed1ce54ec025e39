// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod dispatcher;
mod store;

pub use app::run;
