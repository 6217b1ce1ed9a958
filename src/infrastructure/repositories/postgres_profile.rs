// src/infrastructure/repositories/postgres_profile.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{PageRequest, Paginated};
use crate::domain::profile::{
    NewProfile, Profile, ProfileId, ProfileName, ProfileRepository, ProfileUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

pub(super) const PROFILE_COLUMNS: &str = "id, name, description, mbti, enneagram, variant, tritype, socionics, sloan, psyche, image, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Also decoded from `to_jsonb(profiles)` when joined into comment listings.
#[derive(Debug, FromRow, Deserialize)]
pub(super) struct ProfileRow {
    id: Uuid,
    name: String,
    description: String,
    mbti: Option<String>,
    enneagram: String,
    variant: String,
    tritype: Option<i64>,
    socionics: String,
    sloan: String,
    psyche: String,
    image: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProfileId::new(row.id),
            name: ProfileName::new(row.name)?,
            description: row.description,
            mbti: row.mbti,
            enneagram: row.enneagram,
            variant: row.variant,
            tritype: row.tritype,
            socionics: row.socionics,
            sloan: row.sloan,
            psyche: row.psyche,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn insert(&self, profile: NewProfile) -> DomainResult<Profile> {
        let sql = format!(
            "INSERT INTO profiles (name, description, mbti, enneagram, variant, tritype, socionics, sloan, psyche, image, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {PROFILE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ProfileRow>(&sql)
            .bind(profile.name.as_str())
            .bind(&profile.description)
            .bind(profile.mbti.as_deref())
            .bind(&profile.enneagram)
            .bind(&profile.variant)
            .bind(profile.tritype)
            .bind(&profile.socionics)
            .bind(&profile.sloan)
            .bind(&profile.psyche)
            .bind(&profile.image)
            .bind(profile.created_at)
            .bind(profile.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Profile::try_from(row)
    }

    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1");
        let row = sqlx::query_as::<_, ProfileRow>(&sql)
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }

    async fn update(&self, update: ProfileUpdate) -> DomainResult<Option<Profile>> {
        let ProfileUpdate {
            id,
            name,
            description,
            mbti,
            enneagram,
            variant,
            tritype,
            socionics,
            sloan,
            psyche,
            image,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE profiles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }
        for (column, value) in [
            ("description", description),
            ("mbti", mbti),
            ("enneagram", enneagram),
            ("variant", variant),
            ("socionics", socionics),
            ("sloan", sloan),
            ("psyche", psyche),
            ("image", image),
        ] {
            if let Some(value) = value {
                builder.push(format!(", {column} = "));
                builder.push_bind(value);
            }
        }
        if let Some(tritype) = tritype {
            builder.push(", tritype = ");
            builder.push_bind(tritype);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(format!(" RETURNING {PROFILE_COLUMNS}"));

        let row = builder
            .build_query_as::<ProfileRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }

    async fn delete(&self, id: ProfileId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_page(&self, request: PageRequest) -> DomainResult<Paginated<Profile>> {
        let sql = format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY created_at ASC, id ASC LIMIT $1 OFFSET $2"
        );
        let rows_fut = sqlx::query_as::<_, ProfileRow>(&sql)
            .bind(i64::from(request.limit()))
            .bind(i64::try_from(request.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool);
        let count_fut = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool);

        let (rows, total) = tokio::try_join!(rows_fut, count_fut).map_err(map_sqlx)?;

        let docs = rows
            .into_iter()
            .map(Profile::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Paginated::new(
            docs,
            u64::try_from(total).unwrap_or_default(),
            request,
        ))
    }
}
