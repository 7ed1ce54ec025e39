// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;
use evman_client::Event;

use crate::table::{Column, PaddingDirection, Table};

/// Formats the cached event list for terminal output.
#[derive(Debug, Clone, Copy)]
pub struct EventFormatter {
    json: bool,
}

impl EventFormatter {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Renders events in store order; never reorders.
    pub fn format(&self, events: &[Event]) -> String {
        if self.json {
            return match serde_json::to_string_pretty(events) {
                Ok(mut s) => {
                    s.push('\n');
                    s
                }
                Err(e) => format!("serialization error: {e}\n"),
            };
        }

        if events.is_empty() {
            return format!("{}\n", "No events".dimmed());
        }

        let table = Table {
            columns: vec![EventColumn::Id, EventColumn::Name, EventColumn::Description],
            separator: "  ".to_string(),
            data: events,
        };
        table.render()
    }
}

#[derive(Debug, Clone, Copy)]
enum EventColumn {
    Id,
    Name,
    Description,
}

impl Column<Event> for EventColumn {
    fn format(&self, event: &Event) -> String {
        match self {
            Self::Id => format!("#{}", event.id),
            Self::Name => event.name.clone(),
            Self::Description => event.description.clone(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Id => PaddingDirection::Right,
            Self::Name | Self::Description => PaddingDirection::Left,
        }
    }

    fn stylize(&self, _event: &Event, cell: String) -> String {
        match self {
            Self::Id => cell.cyan().to_string(),
            Self::Name => cell.bold().to_string(),
            Self::Description => cell.dimmed().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evman_client::EventId;

    fn sample() -> Vec<Event> {
        vec![
            Event {
                id: EventId::new(1),
                name: "A".to_string(),
                description: "first".to_string(),
            },
            Event {
                id: EventId::new(2),
                name: "B".to_string(),
                description: "second".to_string(),
            },
        ]
    }

    #[test]
    fn formatter_table_keeps_store_order() {
        colored::control::set_override(false);
        let out = EventFormatter::new(false).format(&sample());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("#1") && lines[0].contains("A"));
        assert!(lines[1].contains("#2") && lines[1].contains("second"));
    }

    #[test]
    fn formatter_json_is_parseable() {
        let out = EventFormatter::new(true).format(&sample());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[1]["name"], "B");
    }

    #[test]
    fn formatter_reports_empty_list() {
        colored::control::set_override(false);
        let out = EventFormatter::new(false).format(&[]);
        assert_eq!(out, "No events\n");
    }
}
