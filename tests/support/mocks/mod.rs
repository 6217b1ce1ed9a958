// tests/support/mocks/mod.rs
pub mod repos;
pub mod time;

pub use repos::FailingCommentRepo;
pub use time::{FixedClock, SteppingClock, fixed_now};
