pub mod pack;
pub mod prompt;
pub mod prompt_version;
pub mod session;
pub mod user;
