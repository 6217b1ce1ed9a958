pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewProfile, Profile, ProfileUpdate};
pub use repository::ProfileRepository;
pub use value_objects::{ProfileId, ProfileName};
