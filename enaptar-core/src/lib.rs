//! Core types for enaptar.
//!
//! - `Event`: a titled, timestamped calendar entry
//! - `EventStore`: the in-memory event list and its JSON file
//! - `EnaptarConfig`: where the events file lives

pub mod config;
pub mod error;
pub mod event;
pub mod store;
pub mod time;

pub use config::EnaptarConfig;
pub use error::{EnaptarError, EnaptarResult};
pub use event::Event;
pub use store::EventStore;
