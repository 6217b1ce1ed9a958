// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use super::postgres_profile::ProfileRow;
use crate::domain::comment::{
    Comment, CommentId, CommentListQuery, CommentListing, CommentRepository, CommentText,
    CommentType, CommentTypes, CommentUpdate, CommentView, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::Paginated;
use crate::domain::profile::{Profile, ProfileId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};
use uuid::Uuid;

const COMMENT_COLUMNS: &str =
    "id, user_id, profile_id, types, text, likes, likes_by, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: Uuid,
    user_id: Uuid,
    profile_id: Uuid,
    types: Vec<String>,
    text: String,
    likes: i64,
    likes_by: Vec<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId::new(row.id),
            user_id: ProfileId::new(row.user_id),
            profile_id: ProfileId::new(row.profile_id),
            types: CommentTypes::parse(&row.types)?,
            text: CommentText::new(row.text)?,
            likes: row.likes,
            likes_by: row.likes_by.into_iter().map(ProfileId::new).collect(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentListRow {
    #[sqlx(flatten)]
    comment: CommentRow,
    liked_by_user: bool,
    user_details: Option<Json<ProfileRow>>,
    profile_details: Option<Json<ProfileRow>>,
}

impl TryFrom<CommentListRow> for CommentView {
    type Error = DomainError;

    fn try_from(row: CommentListRow) -> Result<Self, Self::Error> {
        let join = |details: Option<Json<ProfileRow>>| {
            details
                .map(|Json(profile)| Profile::try_from(profile))
                .transpose()
        };
        Ok(Self {
            comment: Comment::try_from(row.comment)?,
            liked_by_user: row.liked_by_user,
            user_details: join(row.user_details)?,
            profile_details: join(row.profile_details)?,
        })
    }
}

impl PostgresCommentRepository {
    /// One page of comments with the viewer flag and both profiles joined in.
    /// The join runs after the limit, so only the returned rows are expanded.
    async fn fetch_page(&self, query: &CommentListQuery) -> Result<Vec<CommentListRow>, sqlx::Error> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT c.id, c.user_id, c.profile_id, c.types, c.text, c.likes, c.likes_by, c.created_at, c.updated_at,
                    COALESCE(",
        );
        builder.push_bind(query.viewer.map(Uuid::from));
        builder.push(
            "::uuid = ANY(c.likes_by), FALSE) AS liked_by_user,
                    CASE WHEN a.id IS NULL THEN NULL ELSE to_jsonb(a) END AS user_details,
                    CASE WHEN p.id IS NULL THEN NULL ELSE to_jsonb(p) END AS profile_details
             FROM (SELECT * FROM comments WHERE profile_id = ",
        );
        builder.push_bind(Uuid::from(query.profile_id));
        builder.push(" ORDER BY ");
        builder.push(query.sort.order_by_sql().replace("c.", ""));
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(query.page.limit()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(query.page.offset()).unwrap_or(i64::MAX));
        builder.push(
            ") c
             LEFT JOIN profiles a ON a.id = c.user_id
             LEFT JOIN profiles p ON p.id = c.profile_id
             ORDER BY ",
        );
        builder.push(query.sort.order_by_sql());

        builder
            .build_query_as::<CommentListRow>()
            .fetch_all(&self.pool)
            .await
    }

    /// Every tag used on the profile, regardless of paging.
    async fn fetch_types(&self, profile_id: ProfileId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT t FROM comments, unnest(types) AS t WHERE profile_id = $1",
        )
        .bind(Uuid::from(profile_id))
        .fetch_all(&self.pool)
        .await
    }

    async fn count_for_profile(&self, profile_id: ProfileId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE profile_id = $1")
            .bind(Uuid::from(profile_id))
            .fetch_one(&self.pool)
            .await
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let sql = format!(
            "INSERT INTO comments (user_id, profile_id, types, text, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COMMENT_COLUMNS}"
        );

        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(Uuid::from(comment.user_id))
            .bind(Uuid::from(comment.profile_id))
            .bind(comment.types.to_strings())
            .bind(comment.text.as_str())
            .bind(comment.created_at)
            .bind(comment.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Option<Comment>> {
        let CommentUpdate {
            id,
            text,
            types,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE comments SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(text) = text {
            builder.push(", text = ");
            builder.push_bind(text.into_inner());
        }

        if let Some(types) = types {
            builder.push(", types = ");
            builder.push_bind(types.to_strings());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(format!(" RETURNING {COMMENT_COLUMNS}"));

        let row = builder
            .build_query_as::<CommentRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1");
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn is_liked(&self, id: CommentId, user_id: ProfileId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM comments WHERE id = $1 AND $2 = ANY(likes_by))",
        )
        .bind(Uuid::from(id))
        .bind(Uuid::from(user_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn like(
        &self,
        id: CommentId,
        user_id: ProfileId,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<Comment>> {
        let sql = format!(
            "UPDATE comments
             SET likes = likes + 1, likes_by = array_append(likes_by, $2), updated_at = $3
             WHERE id = $1 AND NOT ($2 = ANY(likes_by))
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(Uuid::from(id))
            .bind(Uuid::from(user_id))
            .bind(at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn unlike(
        &self,
        id: CommentId,
        user_id: ProfileId,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<Comment>> {
        let sql = format!(
            "UPDATE comments
             SET likes = likes - 1, likes_by = array_remove(likes_by, $2), updated_at = $3
             WHERE id = $1 AND $2 = ANY(likes_by)
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(Uuid::from(id))
            .bind(Uuid::from(user_id))
            .bind(at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_for_profile(&self, query: &CommentListQuery) -> DomainResult<CommentListing> {
        let (rows, raw_types, total) = tokio::try_join!(
            self.fetch_page(query),
            self.fetch_types(query.profile_id),
            self.count_for_profile(query.profile_id),
        )
        .map_err(map_sqlx)?;

        let docs = rows
            .into_iter()
            .map(CommentView::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        let mut types = raw_types
            .iter()
            .map(|raw| raw.parse::<CommentType>())
            .collect::<DomainResult<Vec<_>>>()
            .map_err(|err| DomainError::persistence(format!("stored comment type: {err}")))?;
        types.sort_unstable();

        Ok(CommentListing {
            types,
            page: Paginated::new(docs, u64::try_from(total).unwrap_or_default(), query.page),
        })
    }
}
