//! Record model for the remote roster.

use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// One admin-manageable member, loaded verbatim from the remote JSON array.
/// Fields the endpoint sends beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Unique identifier, stable for the session.
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl MemberRecord {
    /// The interned form of the id, used as the key for selection and edit
    /// tracking.
    pub fn uid(&self) -> Ustr {
        Ustr::from(self.id.as_str())
    }

    /// Case-insensitive substring match over name, email, and role.
    /// `needle_lower` must already be lowercased.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.email.to_lowercase().contains(needle_lower)
            || self.role.to_lowercase().contains(needle_lower)
    }
}
