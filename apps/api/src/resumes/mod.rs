// Resume persistence and read access.
// Only the extraction handler writes; nothing here updates or deletes.

pub mod handlers;
pub mod store;
