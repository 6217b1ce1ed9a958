// src/infrastructure/repositories/memory.rs
//! Process-local storage used when no database is configured, and by tests.
//!
//! Both repositories share one [`MemoryStore`] so comment listings can join
//! profiles the same way the SQL backend does. Rows keep insertion order.
use crate::domain::comment::{
    Comment, CommentId, CommentListQuery, CommentListing, CommentRepository, CommentUpdate,
    CommentView, NewComment,
};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, Paginated};
use crate::domain::profile::{NewProfile, Profile, ProfileId, ProfileRepository, ProfileUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    profiles: RwLock<Vec<Profile>>,
    comments: RwLock<Vec<Comment>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

fn page_of<T: Clone>(items: &[T], request: PageRequest) -> Vec<T> {
    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    items
        .iter()
        .skip(offset)
        .take(request.limit() as usize)
        .cloned()
        .collect()
}

#[derive(Clone)]
pub struct InMemoryProfileRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryProfileRepository {
    pub const fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn insert(&self, profile: NewProfile) -> DomainResult<Profile> {
        let profile = profile.into_profile(ProfileId::generate());
        self.store.profiles.write().await.push(profile.clone());
        Ok(profile)
    }

    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>> {
        let profiles = self.store.profiles.read().await;
        Ok(profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, update: ProfileUpdate) -> DomainResult<Option<Profile>> {
        let mut profiles = self.store.profiles.write().await;
        let Some(profile) = profiles.iter_mut().find(|p| p.id == update.id) else {
            return Ok(None);
        };
        update.apply_to(profile);
        Ok(Some(profile.clone()))
    }

    async fn delete(&self, id: ProfileId) -> DomainResult<bool> {
        let mut profiles = self.store.profiles.write().await;
        let before = profiles.len();
        profiles.retain(|p| p.id != id);
        Ok(profiles.len() < before)
    }

    async fn list_page(&self, request: PageRequest) -> DomainResult<Paginated<Profile>> {
        let mut profiles = self.store.profiles.read().await.clone();
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        let total = profiles.len() as u64;
        Ok(Paginated::new(page_of(&profiles, request), total, request))
    }
}

#[derive(Clone)]
pub struct InMemoryCommentRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryCommentRepository {
    pub const fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Applies `change` to the comment under the write lock; `None` when the
    /// comment is missing or `change` reports no effect.
    async fn modify(
        &self,
        id: CommentId,
        change: impl FnOnce(&mut Comment) -> bool + Send,
    ) -> Option<Comment> {
        let mut comments = self.store.comments.write().await;
        let comment = comments.iter_mut().find(|c| c.id == id)?;
        change(comment).then(|| comment.clone())
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let comment = comment.into_comment(CommentId::generate());
        self.store.comments.write().await.push(comment.clone());
        Ok(comment)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Option<Comment>> {
        Ok(self
            .modify(update.id, |comment| {
                update.apply_to(comment);
                true
            })
            .await)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let comments = self.store.comments.read().await;
        Ok(comments.iter().find(|c| c.id == id).cloned())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let mut comments = self.store.comments.write().await;
        let before = comments.len();
        comments.retain(|c| c.id != id);
        Ok(comments.len() < before)
    }

    async fn is_liked(&self, id: CommentId, user_id: ProfileId) -> DomainResult<bool> {
        let comments = self.store.comments.read().await;
        Ok(comments
            .iter()
            .any(|c| c.id == id && c.is_liked_by(user_id)))
    }

    async fn like(
        &self,
        id: CommentId,
        user_id: ProfileId,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<Comment>> {
        Ok(self.modify(id, |comment| comment.like(user_id, at)).await)
    }

    async fn unlike(
        &self,
        id: CommentId,
        user_id: ProfileId,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<Comment>> {
        Ok(self.modify(id, |comment| comment.unlike(user_id, at)).await)
    }

    async fn list_for_profile(&self, query: &CommentListQuery) -> DomainResult<CommentListing> {
        let mut matching: Vec<Comment> = self
            .store
            .comments
            .read()
            .await
            .iter()
            .filter(|c| c.profile_id == query.profile_id)
            .cloned()
            .collect();

        let types: BTreeSet<_> = matching
            .iter()
            .flat_map(|c| c.types.as_slice().iter().copied())
            .collect();

        matching.sort_by(|a, b| query.sort.compare(a, b));
        let total = matching.len() as u64;
        let page = page_of(&matching, query.page);

        let profiles = self.store.profiles.read().await;
        let lookup = |id: ProfileId| profiles.iter().find(|p| p.id == id).cloned();
        let docs = page
            .into_iter()
            .map(|comment| CommentView {
                liked_by_user: query.viewer.is_some_and(|v| comment.is_liked_by(v)),
                user_details: lookup(comment.user_id),
                profile_details: lookup(comment.profile_id),
                comment,
            })
            .collect();

        Ok(CommentListing {
            types: types.into_iter().collect(),
            page: Paginated::new(docs, total, query.page),
        })
    }
}
