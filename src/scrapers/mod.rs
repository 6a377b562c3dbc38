//! Per-page record builders.
//!
//! Each builder fetches its page once (or loads the saved snapshot), keeps
//! the parsed [`Page`](crate::query::Page) for its whole lifetime and runs
//! fixed selector schemas against it.
//!
//! # Supported Pages
//!
//! | Page | Module | Records | Fallback snapshot |
//! |------|--------|---------|-------------------|
//! | Events & workshops | [`events`] | `EventEntry` per `li.event` | `EventCache.html` |
//! | Flora & Fauna Web | [`flora_fauna`] | plant/animal of the month, "did you know" facts | `FFWCache.html` |
//!
//! Selectors live in [`schema`] tables declared next to each builder, so a
//! site redesign only touches those tables.

pub mod events;
pub mod flora_fauna;
pub mod schema;
