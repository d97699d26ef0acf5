//! Port for the external identity/role provider.
//!
//! Read-only: the engine looks up roles for authorization checks and never
//! writes back.

use crate::ports::paper_store::StoreError;
use async_trait::async_trait;
use confero_domain::{UserId, UserProfile};

#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Look up a user's id, role, and affiliation.
    async fn get_user(&self, id: &UserId) -> Result<Option<UserProfile>, StoreError>;
}
