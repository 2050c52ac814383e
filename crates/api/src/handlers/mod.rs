pub mod ai;
pub mod auth;
pub mod packs;
pub mod profile;
pub mod prompts;
pub mod versions;
