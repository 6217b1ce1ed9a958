// src/domain/comment/value_objects.rs
use crate::domain::comment::entity::Comment;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(Uuid);

impl CommentId {
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for CommentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::validation(format!("invalid comment id: {s}")))
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for CommentId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<CommentId> for Uuid {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentText(String);

impl CommentText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("text cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CommentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Personality-system tag a comment is filed under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentType {
    Mbti,
    Enneagram,
    BigFive,
    Zodiac,
}

impl CommentType {
    pub const ALL: [Self; 4] = [Self::Mbti, Self::Enneagram, Self::BigFive, Self::Zodiac];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mbti => "MBTI",
            Self::Enneagram => "ENNEAGRAM",
            Self::BigFive => "BIG_FIVE",
            Self::Zodiac => "ZODIAC",
        }
    }
}

impl FromStr for CommentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "type must be one of [MBTI, ENNEAGRAM, BIG_FIVE, ZODIAC], got {s}"
                ))
            })
    }
}

impl fmt::Display for CommentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-empty set of tags, kept de-duplicated in enum order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTypes(Vec<CommentType>);

impl CommentTypes {
    pub fn new(values: impl IntoIterator<Item = CommentType>) -> DomainResult<Self> {
        let mut values: Vec<CommentType> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        if values.is_empty() {
            return Err(DomainError::validation("type must contain at least one value"));
        }
        Ok(Self(values))
    }

    /// Parses stored tag strings, e.g. a `TEXT[]` column.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> DomainResult<Self> {
        let parsed = raw
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<DomainResult<Vec<CommentType>>>()?;
        Self::new(parsed)
    }

    pub fn as_slice(&self) -> &[CommentType] {
        &self.0
    }

    pub fn contains(&self, value: CommentType) -> bool {
        self.0.contains(&value)
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|t| t.as_str().to_owned()).collect()
    }
}

/// Ordering facet for comment listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentSort {
    /// Most liked first.
    Best,
    /// Newest first.
    #[default]
    Recent,
}

impl CommentSort {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::Recent => "recent",
        }
    }

    /// Total order used when ranking comments. Ties on the primary key fall
    /// back to recency and then id so pages never overlap between requests.
    pub fn compare(&self, a: &Comment, b: &Comment) -> Ordering {
        let primary = match self {
            Self::Best => b.likes.cmp(&a.likes),
            Self::Recent => Ordering::Equal,
        };
        primary
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| a.id.cmp(&b.id))
    }

    /// `ORDER BY` clause for the `comments` table aliased as `c`.
    pub const fn order_by_sql(&self) -> &'static str {
        match self {
            Self::Best => "c.likes DESC, c.created_at DESC, c.id ASC",
            Self::Recent => "c.created_at DESC, c.id ASC",
        }
    }
}

impl FromStr for CommentSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best" => Ok(Self::Best),
            "recent" => Ok(Self::Recent),
            other => Err(DomainError::validation(format!(
                "sortBy must be one of [best, recent], got {other}"
            ))),
        }
    }
}
