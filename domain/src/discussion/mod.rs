//! Discussion threads.
//!
//! Comments on a paper form two-level threads: root comments and direct
//! replies, never deeper. The flat comment list is the stored shape; the
//! thread view is built once at read time with a single grouping pass.

use crate::assignment::{Assignment, AssignmentStatus};
use crate::core::ids::{CommentId, PaperId, UserId};
use crate::identity::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment in a paper's discussion (Entity).
///
/// `parent` is `None` for root comments. Removing a root comment marks it
/// removed without touching its replies, which stay visible and attributed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionComment {
    pub id: CommentId,
    pub paper: PaperId,
    pub author: UserId,
    pub content: String,
    pub parent: Option<CommentId>,
    pub created_at: DateTime<Utc>,
    pub removed: bool,
}

impl DiscussionComment {
    pub fn new(
        paper: PaperId,
        author: UserId,
        content: impl Into<String>,
        parent: Option<CommentId>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CommentId::generate(),
            paper,
            author,
            content: content.into(),
            parent,
            created_at: now,
            removed: false,
        }
    }
}

/// A root comment together with its replies (read model).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionThread {
    pub root: DiscussionComment,
    pub replies: Vec<DiscussionComment>,
}

/// Group a flat comment list into two-level threads.
///
/// Roots keep their stored order; each reply is attached to its root.
/// A reply whose root is missing from the slice is dropped from the view
/// (cannot happen for comments created through the aggregate, which
/// validates parents).
pub fn build_threads(comments: &[DiscussionComment]) -> Vec<DiscussionThread> {
    let mut threads: Vec<DiscussionThread> = comments
        .iter()
        .filter(|c| c.parent.is_none())
        .map(|c| DiscussionThread {
            root: c.clone(),
            replies: Vec::new(),
        })
        .collect();

    for comment in comments.iter().filter(|c| c.parent.is_some()) {
        let parent = comment.parent.as_ref().unwrap();
        if let Some(thread) = threads.iter_mut().find(|t| t.root.id == *parent) {
            thread.replies.push(comment.clone());
        }
    }

    threads
}

/// Discussion visibility policy.
///
/// Anyone holding an ACCEPTED or COMPLETED assignment on the paper, or a
/// chair/admin role, may read and post. Authors never participate (blind
/// discussion). Enforcement is the caller's job; `post` itself does not
/// authorize.
pub fn can_participate(user: &UserId, role: Role, assignments: &[Assignment]) -> bool {
    if role.is_chair_or_admin() {
        return true;
    }
    assignments.iter().any(|a| {
        a.reviewer == *user
            && matches!(
                a.status,
                AssignmentStatus::Accepted | AssignmentStatus::Completed
            )
    })
}
