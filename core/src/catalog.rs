//! Loads the track metadata produced by the metadata extractor.
//!
//! The catalog is a JSON array of [`Track`] records, one per music file.

use std::{fs::File, io::BufReader, path::Path};

use log::{info, warn};
use melodeon_library::Track;

use crate::errors::CatalogError;

/// Read the catalog at `path`.
///
/// # Errors
///
/// Returns an error if the file can't be read or isn't a JSON array of tracks.
pub fn load_tracks(path: &Path) -> Result<Vec<Track>, CatalogError> {
    let reader = BufReader::new(File::open(path)?);
    let tracks: Vec<Track> = serde_json::from_reader(reader)?;
    info!("Loaded {} track records from {}", tracks.len(), path.display());
    warn_untagged(&tracks);
    Ok(tracks)
}

/// Parse a catalog that is already in memory.
///
/// # Errors
///
/// Returns an error if `json` isn't a JSON array of tracks.
pub fn parse_tracks(json: &str) -> Result<Vec<Track>, CatalogError> {
    let tracks: Vec<Track> = serde_json::from_str(json)?;
    warn_untagged(&tracks);
    Ok(tracks)
}

/// Tracks without an artist or album still get filed, under an empty name, but that's worth knowing about.
fn warn_untagged(tracks: &[Track]) {
    let untagged = tracks
        .iter()
        .filter(|track| track.artist.is_empty() || track.album.is_empty())
        .count();
    if untagged > 0 {
        warn!("{untagged} tracks are missing an artist or album tag");
    }
}
