// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Application state controller: the single owner of the cached event
//! list, the session token, and the edit cursor.
//!
//! The cache is reconciled only from confirmed store responses; no
//! operation mutates it before the store acknowledges the change, so a
//! failed request leaves cache and session exactly as they were.

use std::error::Error;

use evman_client::{Event, EventContent, EventId, SessionToken, StoreClient, StoreConfig};

use crate::config::Config;
use crate::session::SessionStore;

/// The UI mode the application is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No session; only login is available.
    Unauthenticated,
    /// Authenticated, viewing the event list.
    Browsing,
    /// Authenticated, editing the identified event.
    Editing(EventId),
}

/// Staged field values for the event being created or edited.
///
/// `target` is `Some` exactly while the mode is [`Mode::Editing`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditCursor {
    /// The event under edit, if any.
    pub target: Option<EventId>,
    /// Draft name.
    pub name: String,
    /// Draft description.
    pub description: String,
}

impl EditCursor {
    fn clear(&mut self) {
        *self = Self::default();
    }

    fn content(&self) -> EventContent {
        EventContent::new(self.name.clone(), self.description.clone())
    }
}

/// Long-running application state machine over the UI mode.
#[derive(Debug)]
pub struct Controller {
    store_config: StoreConfig,
    client: StoreClient,
    sessions: SessionStore,
    token: Option<SessionToken>,
    events: Vec<Event>,
    mode: Mode,
    cursor: EditCursor,
}

impl Controller {
    /// Creates a controller, resuming a persisted session if one exists.
    ///
    /// No network call is made; a persisted token alone puts the
    /// machine in [`Mode::Browsing`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &Config, sessions: SessionStore) -> Result<Self, Box<dyn Error>> {
        let store_config = config.store.clone();
        let token = sessions.load();

        let (client, mode) = match &token {
            Some(token) => {
                let client = StoreClient::new(store_config.clone().with_token(token))?;
                (client, Mode::Browsing)
            }
            None => (StoreClient::new(store_config.clone())?, Mode::Unauthenticated),
        };

        Ok(Self {
            store_config,
            client,
            sessions,
            token,
            events: Vec::new(),
            mode,
            cursor: EditCursor::default(),
        })
    }

    /// The current UI mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether a session token is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The cached event list, in store order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The staged draft fields.
    #[must_use]
    pub const fn cursor(&self) -> &EditCursor {
        &self.cursor
    }

    /// Stages a draft name.
    pub fn set_name(&mut self, name: String) {
        self.cursor.name = name;
    }

    /// Stages a draft description.
    pub fn set_description(&mut self, description: String) {
        self.cursor.description = description;
    }

    /// Stages both draft fields at once.
    pub fn stage(&mut self, content: EventContent) {
        self.cursor.name = content.name;
        self.cursor.description = content.description;
    }

    /// Exchanges credentials for a session and persists the token.
    ///
    /// On any failure the machine stays in its current mode and nothing
    /// is persisted.
    ///
    /// # Errors
    ///
    /// Returns an error on rejected credentials, transport failure, or
    /// a session file that cannot be written.
    pub async fn login(&mut self, identifier: &str, password: &str) -> Result<(), Box<dyn Error>> {
        let token = self.client.login(identifier, password).await?;
        self.sessions.save(&token)?;

        self.client = StoreClient::new(self.store_config.clone().with_token(&token))?;
        self.token = Some(token);
        self.mode = Mode::Browsing;
        self.cursor.clear();
        Ok(())
    }

    /// Drops the session and clears the persisted token.
    ///
    /// Always reaches [`Mode::Unauthenticated`]; a session file that
    /// cannot be removed is logged, not fatal.
    pub fn logout(&mut self) {
        if let Err(e) = self.sessions.clear() {
            tracing::warn!(error = %e, "failed to clear persisted session");
        }

        // Drop any bearer auth, including one from the config file.
        match StoreClient::new(self.store_config.clone().without_auth()) {
            Ok(client) => self.client = client,
            Err(e) => tracing::warn!(error = %e, "failed to rebuild client without auth"),
        }
        self.token = None;
        self.mode = Mode::Unauthenticated;
        self.cursor.clear();
    }

    /// Replaces the cache with a fresh listing from the store.
    ///
    /// On failure the previously cached sequence is left untouched;
    /// there is no partial overwrite.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed body.
    pub async fn refresh(&mut self) -> Result<(), Box<dyn Error>> {
        let events = self.client.list_events().await?;
        self.events = events;
        Ok(())
    }

    /// Enters [`Mode::Editing`], staging the event's current fields.
    ///
    /// # Errors
    ///
    /// Returns an error unless the machine is browsing and the event is
    /// in the cache.
    pub fn begin_edit(&mut self, id: EventId) -> Result<(), Box<dyn Error>> {
        if self.mode != Mode::Browsing {
            return Err("An edit is only possible from the event list".into());
        }

        let event = self
            .events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| format!("No event #{id} in the list"))?;

        self.cursor = EditCursor {
            target: Some(id),
            name: event.name.clone(),
            description: event.description.clone(),
        };
        self.mode = Mode::Editing(id);
        Ok(())
    }

    /// Leaves [`Mode::Editing`] without submitting, dropping the drafts.
    pub fn cancel_edit(&mut self) {
        self.cursor.clear();
        if matches!(self.mode, Mode::Editing(_)) {
            self.mode = Mode::Browsing;
        }
    }

    /// Submits the staged fields: an update while editing, a create
    /// while browsing.
    ///
    /// On update success the cached entry is replaced in place, its
    /// position preserved; on create success the canonical event is
    /// appended. Either way the drafts are cleared and the machine is
    /// browsing. On failure cache, cursor, and mode are all unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error when unauthenticated or when the store rejects
    /// the operation.
    pub async fn submit(&mut self) -> Result<Event, Box<dyn Error>> {
        let content = self.cursor.content();
        match self.mode {
            Mode::Unauthenticated => Err(not_logged_in()),
            Mode::Editing(id) => {
                let event = self.client.update_event(id, &content).await?;
                if let Some(slot) = self.events.iter_mut().find(|e| e.id == id) {
                    *slot = event.clone();
                }
                self.cursor.clear();
                self.mode = Mode::Browsing;
                Ok(event)
            }
            Mode::Browsing => {
                let event = self.client.create_event(&content).await?;
                self.events.push(event.clone());
                self.cursor.clear();
                Ok(event)
            }
        }
    }

    /// Deletes an event, removing it from the cache on confirmation.
    ///
    /// The relative order of the remaining entries is preserved. If the
    /// deleted event was under edit, the cursor is dropped and the
    /// machine returns to browsing.
    ///
    /// # Errors
    ///
    /// Returns an error when unauthenticated or when the store rejects
    /// the deletion; the cache is then unchanged.
    pub async fn delete(&mut self, id: EventId) -> Result<(), Box<dyn Error>> {
        if self.mode == Mode::Unauthenticated {
            return Err(not_logged_in());
        }

        self.client.delete_event(id).await?;
        self.events.retain(|e| e.id != id);

        if self.mode == Mode::Editing(id) {
            self.cursor.clear();
            self.mode = Mode::Browsing;
        }
        Ok(())
    }
}

fn not_logged_in() -> Box<dyn Error> {
    "Not logged in; run `evman login <identifier> --password <secret>` first".into()
}
