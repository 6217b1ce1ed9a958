mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetProfileQuery;
pub use list::ListProfilesQuery;
pub use service::ProfileQueryService;
