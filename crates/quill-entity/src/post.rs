//! Post model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An append-only (author, body) record.
///
/// Posts carry no ownership link to a user; the author field is free
/// text and may be blank. Posts are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Display name entered at submission time; may be blank.
    pub author: String,
    /// Message body; required to be non-empty at submission.
    pub body: String,
}
