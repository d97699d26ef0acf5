//! Paper submissions: entities, lifecycle status, and the paper aggregate.

pub mod aggregate;
pub mod entities;
pub mod status;

pub use aggregate::PaperAggregate;
pub use entities::{CoAuthor, Paper};
pub use status::{PaperStatus, StatusEvent};
