//! TUI rendering traits for enaptar types.
//!
//! Extension traits that add colored terminal rendering to enaptar-core types
//! using owo_colors.

use chrono::NaiveDate;
use enaptar_core::Event;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        format!("{}  {}", self.occurs_at.format("%H:%M").dimmed(), self.title)
    }
}

/// Read-only detail view of an event.
pub fn render_details(event: &Event) -> String {
    let mut lines = vec![
        format!("{} {}", "Title:".dimmed(), event.title.bold()),
        format!("{} {}", "Time: ".dimmed(), event.occurs_at.format("%Y-%m-%d %H:%M")),
    ];

    if !event.description.is_empty() {
        lines.push(String::new());
        lines.push(event.description.clone());
    }

    lines.join("\n")
}

/// Numbered event list for a day (rows start at 1).
pub fn render_day(events: &[Event]) -> String {
    if events.is_empty() {
        return format!("  {}", "No events".dimmed());
    }

    events
        .iter()
        .enumerate()
        .map(|(i, event)| format!("  {} {}", format!("{:>2}.", i + 1).dimmed(), event.render()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed May 1")
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    let label = match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    };

    format!("{} ({})", label, date.format("%Y-%m-%d"))
}
