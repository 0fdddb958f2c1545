use serde::{Deserialize, Serialize};

// Registered account held in memory for the process lifetime.
// Emails are stored lowercased; comparisons rely on that.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub created_at: u64,
}
