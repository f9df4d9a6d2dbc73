/// Response decoding helpers
pub mod codec;
/// Resource paths of the catalog API
pub mod endpoints;
/// Domain records and the error envelope
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Playlist resource client
pub mod playlist;
/// HTTP transport
pub mod transport;

pub use playlist::PlaylistClient;
pub use transport::{HttpTransport, Transport};
