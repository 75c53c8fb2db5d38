pub mod error;
pub mod optimistic;
pub mod tags;

/// Backend user id. Opaque string assigned by the server (`_id` on the wire).
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
