//! Client for the generative content provider.
//!
//! Exposes two stateless operations (content generation and clarity
//! scoring), each a fixed request/response schema pair. Provider output is
//! untrusted and is schema-validated before it reaches any caller; there is
//! no retrying, caching, or session state between calls.

pub mod client;
pub mod schema;

pub use client::{GenAiClient, GenAiConfig, GenAiError};
pub use schema::{ClarityRating, GeneratedContent};
