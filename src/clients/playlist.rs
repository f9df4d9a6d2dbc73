use log::{debug, info};
use serde_json::{Value, json};

use crate::clients::{
    codec::{self, decode_playlist, decode_tree, lenient_string},
    endpoints,
    entities::{ErrorEnvelope, Playlist},
    errors::Result,
    transport::Transport,
};

/// Playlist operations of the catalog API, mapped onto domain records.
///
/// Every call issues its requests one after another and keeps nothing between calls.
pub struct PlaylistClient<T> {
    transport: T,
}

impl<T: Transport> PlaylistClient<T> {
    pub fn new(transport: T) -> Self {
        PlaylistClient { transport }
    }

    /// Playlists of the "featured" browse section. Only the first page is read.
    pub async fn list_featured_playlists(&self) -> Result<Vec<Playlist>> {
        let response = self
            .transport
            .get(endpoints::FEATURED_PLAYLISTS)
            .await?
            .expect_success()?;
        let tree = decode_tree(&response.body)?;
        let playlists = codec::field(&tree, "playlists")?;
        codec::parse_playlists(codec::items(playlists)?)
    }

    /// Playlists of one user, reduced to id, name, description and uri.
    ///
    /// The four fields are read leniently: a non-string value is kept as its JSON text.
    pub async fn list_playlists_for_user(&self, user_id: &str) -> Result<Vec<Playlist>> {
        let response = self
            .transport
            .get(&endpoints::user_playlists(user_id))
            .await?
            .expect_success()?;
        let tree = decode_tree(&response.body)?;

        codec::items(&tree)?
            .iter()
            .map(|item| -> Result<Playlist> {
                Ok(Playlist {
                    id: lenient_string(codec::field(item, "id")?),
                    name: lenient_string(codec::field(item, "name")?),
                    description: lenient_string(codec::field(item, "description")?),
                    uri: lenient_string(codec::field(item, "uri")?),
                })
            })
            .collect()
    }

    pub async fn get_playlist_by_id(&self, playlist_id: &str) -> Result<Playlist> {
        let response = self
            .transport
            .get(&endpoints::playlist(playlist_id))
            .await?
            .expect_success()?;
        decode_playlist(&response.body)
    }

    /// Raw `track` objects of a playlist's items.
    ///
    /// Items whose track was removed from the catalog keep a `null` track and are skipped.
    pub async fn get_playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Value>> {
        let response = self
            .transport
            .get(&endpoints::playlist_tracks(playlist_id))
            .await?
            .expect_success()?;
        let tree = decode_tree(&response.body)?;

        let mut tracks = Vec::new();
        for item in codec::items(&tree)? {
            match codec::field(item, "track")? {
                Value::Null => {}
                track => tracks.push(track.clone()),
            }
        }
        Ok(tracks)
    }

    /// Removes a playlist from the user's library by unfollowing it.
    pub async fn delete_playlist_by_id(&self, playlist_id: &str) -> Result<()> {
        self.transport
            .delete(&endpoints::playlist_followers(playlist_id))
            .await?
            .expect_success()?;
        debug!("Unfollowed playlist {playlist_id}");
        Ok(())
    }

    // Stops at the first failed delete, the remaining playlists are left alone
    pub async fn delete_all_playlists_for_user(&self, user_id: &str) -> Result<()> {
        let playlists = self.list_playlists_for_user(user_id).await?;
        info!("Deleting {} playlists of user {user_id} ...", playlists.len());
        for playlist in &playlists {
            self.delete_playlist_by_id(&playlist.id).await?;
        }
        Ok(())
    }

    /// Creates a playlist for `user_id`. The returned record carries the id the API assigned.
    pub async fn create_playlist(&self, user_id: &str, playlist: &Playlist) -> Result<Playlist> {
        let body = serde_json::to_value(playlist)?;
        let response = self
            .transport
            .post(&endpoints::user_playlists(user_id), &body)
            .await?
            .expect_success()?;
        decode_playlist(&response.body)
    }

    /// Appends track or episode URIs to a playlist.
    pub async fn add_items_to_playlist(&self, playlist_id: &str, items: &[String]) -> Result<()> {
        self.transport
            .post(&endpoints::playlist_tracks(playlist_id), &json!(items))
            .await?
            .expect_success()?;
        Ok(())
    }

    /// Updates a playlist's details and reports the result as an error envelope.
    ///
    /// A 200 yields [`ErrorEnvelope::success`] whatever the body holds. Any other
    /// status yields the envelope decoded from the response body, unknown keys
    /// included; a body without the envelope shape is a decode error.
    pub async fn update_playlist_details(
        &self,
        playlist_id: &str,
        updated: &Playlist,
    ) -> Result<ErrorEnvelope> {
        let body = serde_json::to_value(updated)?;
        let response = self
            .transport
            .put(&endpoints::playlist(playlist_id), &body)
            .await?;

        if response.status == 200 {
            return Ok(ErrorEnvelope::success());
        }
        debug!("Update of playlist {playlist_id} answered {}", response.status);
        Ok(serde_json::from_str(&response.body)?)
    }
}
