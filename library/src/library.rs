//! The library as a whole: the sorted list of [`Artist`]s, and the mutations the UI issues against it.

use std::sync::Arc;

use log::{debug, info};
use tracing::instrument;

use crate::{
    album::Album,
    artist::{Artist, sort_key},
    errors::LibraryError,
    track::Track,
};

/// What happens to an album or artist that loses its last child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EmptyPolicy {
    /// Discard it.
    #[default]
    Prune,
    /// Keep it around, empty.
    Keep,
}

/// A brief representation of the library
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LibraryBrief {
    pub artists: usize,
    pub albums: usize,
    pub tracks: usize,
}

/// Every [`Artist`] in the library, ordered by [`Artist::compare`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Library {
    artists: Vec<Artist>,
    #[cfg_attr(feature = "serde", serde(skip))]
    policy: EmptyPolicy,
}

impl Library {
    #[must_use]
    pub const fn new(policy: EmptyPolicy) -> Self {
        Self {
            artists: Vec::new(),
            policy,
        }
    }

    /// Build the library from the tracks the metadata extractor found.
    #[instrument(skip_all)]
    pub fn from_tracks<I>(tracks: I, policy: EmptyPolicy) -> Self
    where
        I: IntoIterator<Item = Track>,
    {
        let library = Self {
            artists: Artist::build_from_tracks(tracks),
            policy,
        };
        let brief = library.brief();
        info!(
            "Library has {} artists, {} albums and {} tracks",
            brief.artists, brief.albums, brief.tracks
        );
        library
    }

    #[must_use]
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    #[must_use]
    pub fn into_artists(self) -> Vec<Artist> {
        self.artists
    }

    #[must_use]
    pub const fn policy(&self) -> EmptyPolicy {
        self.policy
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Find an artist by exact name.
    #[must_use]
    pub fn artist(&self, name: &str) -> Option<&Artist> {
        self.artists.iter().find(|artist| **artist.name() == *name)
    }

    /// Mutable access to an artist, which callers must not replace.
    #[must_use]
    pub(crate) fn artist_mut(&mut self, name: &str) -> Option<&mut Artist> {
        self.artists
            .iter_mut()
            .find(|artist| **artist.name() == *name)
    }

    /// Find an album by artist and album name.
    #[must_use]
    pub fn album(&self, artist: &str, album: &str) -> Option<&Album> {
        self.artist(artist).and_then(|artist| artist.album(album))
    }

    /// Counts of everything in the library.
    #[must_use]
    pub fn brief(&self) -> LibraryBrief {
        self.artists
            .iter()
            .fold(LibraryBrief::default(), |mut brief, artist| {
                brief.artists += 1;
                brief.albums += artist.albums().len();
                brief.tracks += artist.track_count();
                brief
            })
    }

    /// File a track, creating its artist and album if they don't exist yet.
    pub fn insert(&mut self, track: Track) {
        if let Some(artist) = self.artist_mut(&track.artist) {
            artist.insert_track(track);
            return;
        }

        debug!("New artist {:?}", track.artist);
        let mut artist = Artist::new(track.artist.clone());
        artist.insert_track(track);
        let key = sort_key(artist.name());
        let index = self
            .artists
            .partition_point(|a| sort_key(a.name()) <= key);
        self.artists.insert(index, artist);
    }

    /// Remove a single track.
    ///
    /// With [`EmptyPolicy::Prune`], an album left without tracks is discarded, and so is an artist left without
    /// albums.
    ///
    /// # Errors
    ///
    /// Returns the matching `NotFound` variant of [`LibraryError`] if the artist, the album, or the track itself
    /// is not in the library. Nothing is modified in that case.
    pub fn remove_track(&mut self, track: &Track) -> Result<Track, LibraryError> {
        let index = self.artist_index(&track.artist)?;
        let artist = &mut self.artists[index];

        let removed = artist.remove_track(track)?;

        if self.policy == EmptyPolicy::Prune
            && artist.album(&track.album).is_some_and(Album::is_empty)
        {
            debug!("Pruning emptied album {:?} by {:?}", track.album, track.artist);
            artist.remove(&track.album)?;
        }
        self.prune_artist(index);

        Ok(removed)
    }

    /// Remove an album.
    ///
    /// With [`EmptyPolicy::Prune`], an artist left without albums is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ArtistNotFound`] or [`LibraryError::AlbumNotFound`] if there is no such album.
    pub fn remove_album(&mut self, artist: &str, album: &str) -> Result<Album, LibraryError> {
        let index = self.artist_index(artist)?;
        let removed = self.artists[index].remove(album)?;
        self.prune_artist(index);
        Ok(removed)
    }

    /// Remove an artist and everything by them.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ArtistNotFound`] if there is no such artist.
    pub fn remove_artist(&mut self, name: &str) -> Result<Artist, LibraryError> {
        let index = self.artist_index(name)?;
        Ok(self.artists.remove(index))
    }

    fn artist_index(&self, name: &str) -> Result<usize, LibraryError> {
        self.artists
            .iter()
            .position(|artist| **artist.name() == *name)
            .ok_or_else(|| LibraryError::ArtistNotFound(Arc::from(name)))
    }

    fn prune_artist(&mut self, index: usize) {
        if self.policy == EmptyPolicy::Prune && self.artists[index].is_empty() {
            let artist = self.artists.remove(index);
            debug!("Pruning emptied artist {:?}", artist.name());
        }
    }
}
