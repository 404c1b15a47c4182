use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Payload of `GET /get_user_top_tracks`: a ready-made image prompt plus the
/// artist names it was built from, in listening-rank order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TopTracksResponse {
    pub prompt: String,
    #[serde(default)]
    pub artists: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaitlistRequest {
    pub email: String,
}

/// Error payload some backend routes attach to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub message: String,
}

/// How the backend answered a waitlist signup. 403 and 409 are ordinary
/// outcomes the landing page has copy for, not failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WaitlistOutcome {
    Joined,
    ListFull,
    AlreadyJoined,
}
