use crate::domain::profile::Profile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mbti: Option<String>,
    pub enneagram: String,
    pub variant: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tritype: Option<i64>,
    pub socionics: String,
    pub sloan: String,
    pub psyche: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.into(),
            name: profile.name.into_inner(),
            description: profile.description,
            mbti: profile.mbti,
            enneagram: profile.enneagram,
            variant: profile.variant,
            tritype: profile.tritype,
            socionics: profile.socionics,
            sloan: profile.sloan,
            psyche: profile.psyche,
            image: profile.image,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
