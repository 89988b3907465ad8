// Text enhancement: rewrites a professional summary or a job description.
// Stateless: these endpoints call the AI client and never touch the store.

pub mod handlers;
pub mod prompts;
