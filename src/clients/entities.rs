use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A playlist as exchanged with the catalog API.
///
/// Doubles as the request payload for create and update calls; the remote side
/// assigns the `id` of a created playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    // Playlists without a description come back with `null`
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    pub uri: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Playlist {
    /// Payload for a playlist that does not exist remotely yet
    pub fn draft(name: impl Into<String>, description: impl Into<String>) -> Self {
        Playlist {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub status: u16,
    pub message: String,
    /// Any other keys the API put next to `status` and `message`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `{"error": {"status", "message"}}` wrapper the API uses for failures.
///
/// Playlist updates also report success through it, see [`ErrorEnvelope::success`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ErrorEnvelope {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        ErrorEnvelope {
            error: ErrorDetail {
                status,
                message: message.into(),
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    /// Marker returned for an update the API accepted
    pub fn success() -> Self {
        ErrorEnvelope::new(200, "success")
    }

    pub fn is_success(&self) -> bool {
        self.error.status == 200
    }
}

/// Typed view over an update result envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Success,
    Failure { status: u16, message: String },
}

impl From<ErrorEnvelope> for UpdateOutcome {
    fn from(envelope: ErrorEnvelope) -> Self {
        if envelope.is_success() {
            UpdateOutcome::Success
        } else {
            UpdateOutcome::Failure {
                status: envelope.error.status,
                message: envelope.error.message,
            }
        }
    }
}
