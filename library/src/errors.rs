use std::sync::Arc;

use thiserror::Error;

use crate::{album::Album, track::Track};

/// Why a mutation of the library was refused.
///
/// A refused mutation never modifies anything, and whatever the caller tried to attach is handed back inside the
/// error so it can be routed somewhere else.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LibraryError {
    #[error("album {:?} by {:?} does not belong to artist {artist:?}", .album.name(), .album.artist_name())]
    AlbumOwnership { artist: Arc<str>, album: Box<Album> },
    #[error("track {:?} from {:?} by {:?} does not belong to album {album:?} by {artist:?}", .track.title, .track.album, .track.artist)]
    TrackOwnership {
        artist: Arc<str>,
        album: Arc<str>,
        track: Box<Track>,
    },
    #[error("no artist named {0:?}")]
    ArtistNotFound(Arc<str>),
    #[error("artist {artist:?} has no album named {album:?}")]
    AlbumNotFound { artist: Arc<str>, album: Arc<str> },
    #[error("album {album:?} by {artist:?} has no track {title:?}")]
    TrackNotFound {
        artist: Arc<str>,
        album: Arc<str>,
        title: Arc<str>,
    },
}

impl LibraryError {
    /// Something was attached to a parent it doesn't belong to.
    #[must_use]
    pub const fn is_ownership_mismatch(&self) -> bool {
        matches!(self, Self::AlbumOwnership { .. } | Self::TrackOwnership { .. })
    }

    /// Something that was asked for isn't there.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ArtistNotFound(_) | Self::AlbumNotFound { .. } | Self::TrackNotFound { .. }
        )
    }

    /// Take back the album that was refused.
    #[must_use]
    pub fn into_album(self) -> Option<Album> {
        match self {
            Self::AlbumOwnership { album, .. } => Some(*album),
            _ => None,
        }
    }

    /// Take back the track that was refused.
    #[must_use]
    pub fn into_track(self) -> Option<Track> {
        match self {
            Self::TrackOwnership { track, .. } => Some(*track),
            _ => None,
        }
    }
}
