use serde::{Deserialize, Serialize};

/// The session record cached in browser local storage. Overwritten wholesale
/// on every successful token exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredSession {
    pub user_id: String,
    pub access_token: String,
}
