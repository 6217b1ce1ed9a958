// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of `createdAt`/`updatedAt` stamps. Tests pin it to a fixed instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
