// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentId, CommentText, CommentTypes};
use crate::domain::profile::ProfileId;
use chrono::{DateTime, Utc};

/// `likes` always equals `likes_by.len()`; both are only changed together.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub user_id: ProfileId,
    pub profile_id: ProfileId,
    pub types: CommentTypes,
    pub text: CommentText,
    pub likes: i64,
    pub likes_by: Vec<ProfileId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_liked_by(&self, user_id: ProfileId) -> bool {
        self.likes_by.contains(&user_id)
    }

    /// Adds `user_id` to the likers. Returns `false` (and changes nothing)
    /// when the user already liked the comment.
    pub fn like(&mut self, user_id: ProfileId, now: DateTime<Utc>) -> bool {
        if self.is_liked_by(user_id) {
            return false;
        }
        self.likes_by.push(user_id);
        self.likes += 1;
        self.updated_at = now;
        true
    }

    /// Removes `user_id` from the likers. Returns `false` (and changes nothing)
    /// when the user had not liked the comment.
    pub fn unlike(&mut self, user_id: ProfileId, now: DateTime<Utc>) -> bool {
        let Some(pos) = self.likes_by.iter().position(|id| *id == user_id) else {
            return false;
        };
        self.likes_by.remove(pos);
        self.likes -= 1;
        self.updated_at = now;
        true
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub user_id: ProfileId,
    pub profile_id: ProfileId,
    pub types: CommentTypes,
    pub text: CommentText,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewComment {
    pub fn into_comment(self, id: CommentId) -> Comment {
        Comment {
            id,
            user_id: self.user_id,
            profile_id: self.profile_id,
            types: self.types,
            text: self.text,
            likes: 0,
            likes_by: Vec::new(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommentUpdate {
    pub id: CommentId,
    pub text: Option<CommentText>,
    pub types: Option<CommentTypes>,
    pub updated_at: DateTime<Utc>,
}

impl CommentUpdate {
    pub const fn new(id: CommentId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: None,
            types: None,
            updated_at,
        }
    }

    pub fn with_text(mut self, text: CommentText) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_types(mut self, types: CommentTypes) -> Self {
        self.types = Some(types);
        self
    }

    pub fn apply_to(self, comment: &mut Comment) {
        if let Some(text) = self.text {
            comment.text = text;
        }
        if let Some(types) = self.types {
            comment.types = types;
        }
        comment.updated_at = self.updated_at;
    }
}
