//! Presentation state: the selected day and the list shown for it.
//!
//! Rows handed back by the UI are indexes into `listed`, the result of the
//! last `events_on_day` query, so they always resolve against what the user
//! actually saw.

use chrono::{Duration, NaiveDate};
use enaptar_core::time::parse_time;
use enaptar_core::{EnaptarResult, Event, EventStore};

pub struct App {
    store: EventStore,
    selected: NaiveDate,
    listed: Vec<Event>,
}

impl App {
    pub fn new(store: EventStore, selected: NaiveDate) -> Self {
        let mut app = App {
            store,
            selected,
            listed: Vec::new(),
        };
        app.refresh();
        app
    }

    pub fn selected_day(&self) -> NaiveDate {
        self.selected
    }

    pub fn select_day(&mut self, day: NaiveDate) {
        self.selected = day;
        self.refresh();
    }

    /// Move the selection by `days`. Stays put at the ends of the calendar.
    pub fn shift_day(&mut self, days: i64) {
        if let Some(day) = self.selected.checked_add_signed(Duration::days(days)) {
            self.select_day(day);
        }
    }

    /// Events for the selected day, in display order.
    pub fn listed(&self) -> &[Event] {
        &self.listed
    }

    #[cfg(test)]
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    fn refresh(&mut self) {
        self.listed = self.store.events_on_day(self.selected);
    }

    /// Add an event on the selected day.
    ///
    /// Returns `Ok(None)` when the title is blank. A malformed time is an
    /// error and nothing is stored. Title and description are kept as typed.
    pub fn add_event(
        &mut self,
        title: &str,
        time: &str,
        description: &str,
    ) -> EnaptarResult<Option<Event>> {
        if title.trim().is_empty() {
            return Ok(None);
        }

        let time = parse_time(time)?;
        let event = Event::on(self.selected, time, title, description);

        self.store.add_event(event.clone())?;
        self.refresh();

        Ok(Some(event))
    }

    pub fn event_at(&self, row: Option<usize>) -> Option<&Event> {
        row.and_then(|i| self.listed.get(i))
    }

    /// Delete the event shown at `row`. No row (or a stale one) is ignored.
    pub fn delete_at(&mut self, row: Option<usize>) -> EnaptarResult<Option<Event>> {
        let Some(event) = self.event_at(row).cloned() else {
            return Ok(None);
        };

        self.store.remove_event(&event)?;
        self.refresh();

        Ok(Some(event))
    }
}
