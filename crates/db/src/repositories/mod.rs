pub mod pack_repo;
pub mod prompt_repo;
pub mod prompt_version_repo;
pub mod session_repo;
pub mod user_repo;

pub use pack_repo::PackRepo;
pub use prompt_repo::PromptRepo;
pub use prompt_version_repo::PromptVersionRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
