//! "Back of mind" note domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
pub type NoteId = Uuid;

/// Free-form text captured to get it out of the user's head.
///
/// The store keeps insertion order; recency ordering is a view concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    /// Epoch milliseconds.
    pub created_at: i64,
}
