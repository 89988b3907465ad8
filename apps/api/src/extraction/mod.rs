// Resume extraction: turns pasted resume text into a structured record.
// Flow: build prompt -> generate -> normalize -> typed parse -> store.create.
// Nothing is persisted unless the typed parse succeeds.

pub mod handlers;
pub mod normalize;
pub mod prompts;
