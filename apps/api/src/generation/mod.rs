// Document generation: the closed set of kinds, the prompt catalog, and the
// pipeline that turns intake answers into a rendered, packaged document.
// All model calls go through llm_client trait objects; nothing here builds an HTTP client.

pub mod generator;
pub mod handlers;
pub mod kinds;
pub mod prompts;
