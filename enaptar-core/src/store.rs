//! JSON-backed event store.
//!
//! The whole event list lives in memory and is rewritten to disk after every
//! mutation. There is no incremental format: the file is always a JSON array
//! of every event, in insertion order.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::error::{EnaptarError, EnaptarResult};
use crate::event::Event;

pub struct EventStore {
    path: PathBuf,
    events: Vec<Event>,
}

impl EventStore {
    /// Load events from `path`. A missing file means no events yet.
    pub fn load(path: impl Into<PathBuf>) -> EnaptarResult<Self> {
        let path = path.into();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "events file not found, starting empty");
            return Ok(EventStore {
                path,
                events: Vec::new(),
            });
        }

        let content = std::fs::read_to_string(&path)?;
        let events: Vec<Event> =
            serde_json::from_str(&content).map_err(|e| EnaptarError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), count = events.len(), "loaded events");

        Ok(EventStore { path, events })
    }

    /// Overwrite the events file with the full in-memory list.
    pub fn save(&self) -> EnaptarResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.events)
            .map_err(|e| EnaptarError::Serialization(e.to_string()))?;

        std::fs::write(&self.path, content)?;

        tracing::debug!(path = %self.path.display(), count = self.events.len(), "saved events");
        Ok(())
    }

    /// Events on `date`, earliest first. Events at the same time keep
    /// insertion order.
    pub fn events_on_day(&self, date: NaiveDate) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|e| e.date() == date)
            .cloned()
            .collect();

        events.sort_by_key(|e| e.occurs_at);
        events
    }

    pub fn add_event(&mut self, event: Event) -> EnaptarResult<()> {
        tracing::info!(title = %event.title, dt = %event.occurs_at, "adding event");
        self.events.push(event);

        if let Err(e) = self.save() {
            self.events.pop();
            return Err(e);
        }

        Ok(())
    }

    /// Remove the first event equal to `event`.
    pub fn remove_event(&mut self, event: &Event) -> EnaptarResult<()> {
        let index = self
            .events
            .iter()
            .position(|e| e == event)
            .ok_or_else(|| EnaptarError::EventNotFound(event.to_string()))?;

        tracing::info!(title = %event.title, dt = %event.occurs_at, "removing event");
        let removed = self.events.remove(index);

        if let Err(e) = self.save() {
            self.events.insert(index, removed);
            return Err(e);
        }

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
