#![allow(clippy::module_name_repetitions)]
//----------------------------------------------------------------------------------------- std lib
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;
//--------------------------------------------------------------------------------- other libraries
use log::{debug, trace};
//----------------------------------------------------------------------------------- local modules
use crate::{
    cover::{Cover, first_cover},
    errors::LibraryError,
    track::{Picture, Track},
};

/// This struct holds all the [`Track`]s of a particular [`Album`].
/// An [`Album`] is a collection of [`Track`]s owned by an [`crate::artist::Artist`].
///
/// The tracks are always ordered by disc number then track number, and `image` always holds the picture of the
/// first of them that has one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Album {
    /// Name of the [`crate::artist::Artist`] that owns this [`Album`].
    artist_name: Arc<str>,
    /// Title of the [`Album`].
    name: Arc<str>,
    tracks: Vec<Track>,
    image: Option<Arc<Picture>>,
}

impl Album {
    /// Create an empty [`Album`].
    #[must_use]
    pub fn new(artist_name: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        Self {
            artist_name: artist_name.into(),
            name: name.into(),
            tracks: Vec::new(),
            image: None,
        }
    }

    /// Create an empty [`Album`] that `track` belongs to.
    #[must_use]
    pub fn for_track(track: &Track) -> Self {
        Self::new(track.artist.clone(), track.album.clone())
    }

    /// Orders albums by title, ignoring case.
    ///
    /// Titles that only differ in case are ordered by their exact text, and identical titles (which only happens
    /// across artists) by artist name, so the ordering is total.
    #[must_use]
    pub fn compare(a: &Self, b: &Self) -> Ordering {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.artist_name.cmp(&b.artist_name))
    }

    /// Find the album in `albums` that `track` would be filed under.
    #[must_use]
    pub fn find_by_track<'a>(albums: &'a [Self], track: &Track) -> Option<&'a Self> {
        albums.iter().find(|album| album.name == track.album)
    }

    #[must_use]
    pub fn artist_name(&self) -> &Arc<str> {
        &self.artist_name
    }

    #[must_use]
    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[must_use]
    pub fn image(&self) -> Option<&Arc<Picture>> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Total runtime of this [`Album`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.tracks.iter().map(|track| track.duration).sum()
    }

    /// How many discs are in this [`Album`]?
    /// (Most will only have 1).
    ///
    /// Uses whichever is larger: the highest disc number seen, or the highest disc count any track reports.
    #[must_use]
    pub fn disc_count(&self) -> u32 {
        self.tracks
            .iter()
            .map(|track| track.disk.no.max(track.disk.of))
            .max()
            .unwrap_or_default()
    }

    /// The earliest release year of any of the tracks.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.tracks.iter().filter_map(|track| track.year).min()
    }

    /// Does `track` belong on this album?
    #[must_use]
    pub fn owns(&self, track: &Track) -> bool {
        track.belongs_to(&self.artist_name, &self.name)
    }

    /// Add a track to the album.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::TrackOwnership`] (containing the track) if the track's artist or album don't match
    /// this album. The album is left untouched in that case.
    pub fn add(&mut self, track: Track) -> Result<(), LibraryError> {
        if !self.owns(&track) {
            debug!(
                "Refusing track {:?} ({:?} by {:?}) for album {:?} by {:?}",
                track.title, track.album, track.artist, self.name, self.artist_name
            );
            return Err(LibraryError::TrackOwnership {
                artist: self.artist_name.clone(),
                album: self.name.clone(),
                track: Box::new(track),
            });
        }

        self.insert_sorted(track);
        self.update_image();
        Ok(())
    }

    /// Remove the first track equal to `track`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::TrackNotFound`] if no such track is on this album.
    pub fn remove(&mut self, track: &Track) -> Result<Track, LibraryError> {
        let Some(index) = self.tracks.iter().position(|t| t == track) else {
            return Err(LibraryError::TrackNotFound {
                artist: self.artist_name.clone(),
                album: self.name.clone(),
                title: track.title.clone(),
            });
        };

        let removed = self.tracks.remove(index);
        self.update_image();
        Ok(removed)
    }

    /// Recompute the cover from the tracks, in album order.
    pub fn update_image(&mut self) {
        self.image = first_cover(&self.tracks);
    }

    /// Insert a track that is already known to belong here, without refreshing the cover.
    ///
    /// Tracks at the same position keep the order they were added in.
    pub(crate) fn insert_sorted(&mut self, track: Track) {
        trace!("Filing {:?} under {:?}", track.title, self.name);
        let position = track.position();
        let index = self.tracks.partition_point(|t| t.position() <= position);
        self.tracks.insert(index, track);
    }

    /// Move all the tracks of `other` (an album with the same key) into this one.
    pub(crate) fn absorb(&mut self, other: Self) {
        debug_assert_eq!(self.artist_name, other.artist_name);
        debug_assert_eq!(self.name, other.name);

        self.tracks.extend(other.tracks);
        self.tracks.sort_by_key(Track::position);
        self.update_image();
    }
}

impl Cover for Album {
    fn cover(&self) -> Option<&Arc<Picture>> {
        self.image.as_ref()
    }
}
