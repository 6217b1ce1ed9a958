use std::sync::Arc;

use crate::domain::profile::ProfileRepository;

pub struct ProfileQueryService {
    pub(super) repo: Arc<dyn ProfileRepository>,
}

impl ProfileQueryService {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }
}
