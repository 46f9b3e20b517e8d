pub mod add;
pub mod config;
pub mod day;
pub mod delete;
pub mod interactive;
pub mod show;

use anyhow::Result;

use crate::app::App;

/// Resolve a 1-based row number from the command line to a list index.
pub fn resolve_row(app: &App, row: usize) -> Result<usize> {
    let count = app.listed().len();

    if row == 0 || row > count {
        anyhow::bail!(
            "No event #{} on {} ({} {}).",
            row,
            app.selected_day().format("%Y-%m-%d"),
            count,
            if count == 1 { "event" } else { "events" }
        );
    }

    Ok(row - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use enaptar_core::EventStore;

    #[test]
    fn rows_are_one_based() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::load(dir.path().join("events.json")).unwrap();
        let mut app = App::new(store, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        app.add_event("Coffee", "08:00", "").unwrap();
        app.add_event("Standup", "09:00", "").unwrap();

        assert_eq!(resolve_row(&app, 1).unwrap(), 0);
        assert_eq!(resolve_row(&app, 2).unwrap(), 1);
        assert!(resolve_row(&app, 0).is_err());
        assert!(resolve_row(&app, 3).is_err());
    }
}
