mod user_prompt_repo;
mod user_repo;

pub use user_prompt_repo::UserPromptRepo;
pub use user_repo::UserRepo;
