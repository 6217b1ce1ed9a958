mod create;
mod delete;
mod service;
mod update;

pub use create::CreateProfileCommand;
pub use delete::DeleteProfileCommand;
pub use service::ProfileCommandService;
pub use update::UpdateProfileCommand;

pub(crate) const PROFILE_NOT_FOUND: &str = "Profile not found";
