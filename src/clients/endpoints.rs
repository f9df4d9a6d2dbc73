//! Paths of the catalog API resources, relative to the API base URL.

pub const USERS: &str = "users";
pub const PLAYLISTS: &str = "playlists";
pub const TRACKS: &str = "tracks";
pub const FOLLOWERS: &str = "followers";
pub const FEATURED_PLAYLISTS: &str = "browse/featured-playlists";

pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1/";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

pub fn user_playlists(user_id: &str) -> String {
    format!("{USERS}/{user_id}/{PLAYLISTS}")
}

pub fn playlist(playlist_id: &str) -> String {
    format!("{PLAYLISTS}/{playlist_id}")
}

pub fn playlist_tracks(playlist_id: &str) -> String {
    format!("{PLAYLISTS}/{playlist_id}/{TRACKS}")
}

// There is no delete endpoint, removing a playlist means unfollowing it
pub fn playlist_followers(playlist_id: &str) -> String {
    format!("{PLAYLISTS}/{playlist_id}/{FOLLOWERS}")
}
