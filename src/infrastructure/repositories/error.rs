// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_NO_SELF_COMMENT: &str = "comments_no_self_comment_chk";
const CNT_LIKES_MATCH: &str = "comments_likes_match_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_NO_SELF_COMMENT => {
                        DomainError::Validation("a profile cannot comment on itself".into())
                    }
                    CNT_LIKES_MATCH => {
                        DomainError::Conflict("likes out of sync with likers".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
