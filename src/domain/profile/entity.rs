// src/domain/profile/entity.rs
use crate::domain::profile::value_objects::{ProfileId, ProfileName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: ProfileId,
    pub name: ProfileName,
    pub description: String,
    pub mbti: Option<String>,
    pub enneagram: String,
    pub variant: String,
    pub tritype: Option<i64>,
    pub socionics: String,
    pub sloan: String,
    pub psyche: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Optional text attributes default to empty strings, matching what clients
/// have always received for profiles created without them.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub name: ProfileName,
    pub description: String,
    pub mbti: Option<String>,
    pub enneagram: String,
    pub variant: String,
    pub tritype: Option<i64>,
    pub socionics: String,
    pub sloan: String,
    pub psyche: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewProfile {
    pub fn new(name: ProfileName, now: DateTime<Utc>) -> Self {
        Self {
            name,
            description: String::new(),
            mbti: None,
            enneagram: String::new(),
            variant: String::new(),
            tritype: None,
            socionics: String::new(),
            sloan: String::new(),
            psyche: String::new(),
            image: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_profile(self, id: ProfileId) -> Profile {
        Profile {
            id,
            name: self.name,
            description: self.description,
            mbti: self.mbti,
            enneagram: self.enneagram,
            variant: self.variant,
            tritype: self.tritype,
            socionics: self.socionics,
            sloan: self.sloan,
            psyche: self.psyche,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub id: ProfileId,
    pub name: Option<ProfileName>,
    pub description: Option<String>,
    pub mbti: Option<String>,
    pub enneagram: Option<String>,
    pub variant: Option<String>,
    pub tritype: Option<i64>,
    pub socionics: Option<String>,
    pub sloan: Option<String>,
    pub psyche: Option<String>,
    pub image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileUpdate {
    pub const fn new(id: ProfileId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            description: None,
            mbti: None,
            enneagram: None,
            variant: None,
            tritype: None,
            socionics: None,
            sloan: None,
            psyche: None,
            image: None,
            updated_at,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.mbti.is_none()
            && self.enneagram.is_none()
            && self.variant.is_none()
            && self.tritype.is_none()
            && self.socionics.is_none()
            && self.sloan.is_none()
            && self.psyche.is_none()
            && self.image.is_none()
    }

    /// Merge the supplied fields into `profile`; absent fields stay untouched.
    pub fn apply_to(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(description) = self.description {
            profile.description = description;
        }
        if let Some(mbti) = self.mbti {
            profile.mbti = Some(mbti);
        }
        if let Some(enneagram) = self.enneagram {
            profile.enneagram = enneagram;
        }
        if let Some(variant) = self.variant {
            profile.variant = variant;
        }
        if let Some(tritype) = self.tritype {
            profile.tritype = Some(tritype);
        }
        if let Some(socionics) = self.socionics {
            profile.socionics = socionics;
        }
        if let Some(sloan) = self.sloan {
            profile.sloan = sloan;
        }
        if let Some(psyche) = self.psyche {
            profile.psyche = psyche;
        }
        if let Some(image) = self.image {
            profile.image = image;
        }
        profile.updated_at = self.updated_at;
    }
}
