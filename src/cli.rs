use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{info, warn};
use playlist_client::{
    Config,
    clients::{
        HttpTransport, PlaylistClient,
        entities::{Playlist, UpdateOutcome},
        errors::Result,
    },
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "playlist-client")]
#[command(version, about = "Drive the catalog API's playlist resources", long_about = None)]
struct Cli {
    /// Properties file with client_id, client_secret, refresh_token and grant_type.
    /// Falls back to PLAYLIST_* environment variables when omitted.
    #[arg(long, global = true)]
    properties: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the playlists of the featured browse section
    Featured {},
    /// List the playlists of a user
    List { user_id: String },
    /// Show a single playlist
    Get { playlist_id: String },
    /// Show the tracks of a playlist
    Tracks { playlist_id: String },
    /// Unfollow a playlist
    Delete { playlist_id: String },
    /// Unfollow every playlist of a user
    DeleteAll { user_id: String },
    /// Create a playlist for a user
    Create {
        user_id: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Append track or episode URIs to a playlist
    AddItems {
        playlist_id: String,
        #[arg(required = true)]
        uris: Vec<String>,
    },
    /// Change the name and description of a playlist
    Update {
        playlist_id: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    info!("Building config ...");
    let config = match &cli.properties {
        Some(path) => Config::from_properties(path)?,
        None => Config::from_env()?,
    };
    info!("Authorizing client ...");
    let transport = HttpTransport::authorize(&config).await?;
    let client = PlaylistClient::new(transport);

    match cli.command {
        Commands::Featured {} => print_json(&client.list_featured_playlists().await?),
        Commands::List { user_id } => {
            print_json(&client.list_playlists_for_user(&user_id).await?)
        }
        Commands::Get { playlist_id } => {
            print_json(&client.get_playlist_by_id(&playlist_id).await?)
        }
        Commands::Tracks { playlist_id } => {
            print_json(&client.get_playlist_tracks(&playlist_id).await?)
        }
        Commands::Delete { playlist_id } => {
            client.delete_playlist_by_id(&playlist_id).await?;
            info!("Unfollowed playlist {playlist_id}");
            Ok(())
        }
        Commands::DeleteAll { user_id } => {
            client.delete_all_playlists_for_user(&user_id).await?;
            info!("Unfollowed all playlists of {user_id}");
            Ok(())
        }
        Commands::Create {
            user_id,
            name,
            description,
        } => {
            let created = client
                .create_playlist(&user_id, &Playlist::draft(name, description))
                .await?;
            print_json(&created)
        }
        Commands::AddItems { playlist_id, uris } => {
            client.add_items_to_playlist(&playlist_id, &uris).await?;
            info!("Added {} items to playlist {playlist_id}", uris.len());
            Ok(())
        }
        Commands::Update {
            playlist_id,
            name,
            description,
        } => {
            let updated = Playlist {
                id: playlist_id.clone(),
                ..Playlist::draft(name, description)
            };
            let envelope = client
                .update_playlist_details(&playlist_id, &updated)
                .await?;
            print_json(&envelope)?;
            if let UpdateOutcome::Failure { status, message } = UpdateOutcome::from(envelope) {
                warn!("Update of playlist {playlist_id} rejected ({status}): {message}");
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
