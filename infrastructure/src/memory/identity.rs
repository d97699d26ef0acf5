//! In-memory identity directory.
//!
//! Stands in for the external identity/role provider in tests and
//! single-process deployments.

use async_trait::async_trait;
use confero_application::ports::identity::IdentityDirectory;
use confero_application::ports::paper_store::StoreError;
use confero_domain::{UserId, UserProfile};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryIdentityDirectory {
    users: RwLock<HashMap<UserId, UserProfile>>,
}

impl InMemoryIdentityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user profile.
    pub fn add_user(&self, profile: UserProfile) {
        self.users
            .write()
            .expect("identity lock poisoned")
            .insert(profile.id.clone(), profile);
    }
}

#[async_trait]
impl IdentityDirectory for InMemoryIdentityDirectory {
    async fn get_user(&self, id: &UserId) -> Result<Option<UserProfile>, StoreError> {
        let users = self.users.read().expect("identity lock poisoned");
        Ok(users.get(id).cloned())
    }
}
