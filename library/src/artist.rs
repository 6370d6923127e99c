#![allow(clippy::module_name_repetitions)]
//----------------------------------------------------------------------------------------- std lib
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
//--------------------------------------------------------------------------------- other libraries
use log::debug;
use tracing::instrument;
//----------------------------------------------------------------------------------- local modules
use crate::{
    album::Album,
    cover::{Cover, first_cover},
    errors::LibraryError,
    track::{Picture, Track},
};

/// The key artist names are sorted by: lowercased, with a leading "the " dropped.
///
/// "The Beatles" and "Beatles" share a key, so they sort next to each other.
#[must_use]
pub fn sort_key(name: &str) -> String {
    let name = name.to_lowercase();
    if let Some(stripped) = name.strip_prefix("the ") {
        return stripped.to_owned();
    }
    name
}

/// This struct holds all the [`Album`]s of a particular [`Artist`].
/// An [`Artist`] is a collection of [`Album`]s.
///
/// The albums are always ordered by [`Album::compare`], and `image` always holds the cover of the first of them
/// that has one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Artist {
    /// The [`Artist`]'s name.
    name: Arc<str>,
    albums: Vec<Album>,
    image: Option<Arc<Picture>>,
}

impl Artist {
    /// Create an [`Artist`] with no albums.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            albums: Vec::new(),
            image: None,
        }
    }

    /// Compare artists by name, ignoring case and a leading "the ".
    #[must_use]
    pub fn compare(a: &Self, b: &Self) -> Ordering {
        sort_key(&a.name).cmp(&sort_key(&b.name))
    }

    /// Group a flat list of tracks into artists and albums.
    ///
    /// Every distinct `artist` (compared exactly, so "ABBA" and "Abba" are two artists) becomes one [`Artist`], and
    /// every distinct `album` of that artist one [`Album`]. The albums of each artist are sorted by
    /// [`Album::compare`], and the returned artists by [`Artist::compare`].
    #[instrument(skip_all)]
    pub fn build_from_tracks<I>(tracks: I) -> Vec<Self>
    where
        I: IntoIterator<Item = Track>,
    {
        let mut artists: Vec<Self> = Vec::new();
        let mut artist_index: HashMap<Arc<str>, usize> = HashMap::new();
        // keyed by (index into `artists`, album name)
        let mut album_index: HashMap<(usize, Arc<str>), usize> = HashMap::new();
        let mut track_count = 0usize;

        for track in tracks {
            track_count += 1;

            let artist_idx = *artist_index.entry(track.artist.clone()).or_insert_with(|| {
                artists.push(Self::new(track.artist.clone()));
                artists.len() - 1
            });
            let artist = &mut artists[artist_idx];

            let album_idx = *album_index
                .entry((artist_idx, track.album.clone()))
                .or_insert_with(|| {
                    artist.albums.push(Album::for_track(&track));
                    artist.albums.len() - 1
                });

            artist.albums[album_idx].insert_sorted(track);
        }

        for artist in &mut artists {
            for album in &mut artist.albums {
                album.update_image();
            }
            artist.albums.sort_by(Album::compare);
            artist.update_image();
        }
        artists.sort_by_cached_key(|artist| sort_key(&artist.name));

        debug!(
            "Built {} artists with {} albums from {track_count} tracks",
            artists.len(),
            album_index.len(),
        );

        artists
    }

    /// Find the artist in `artists` that `track` would be filed under.
    #[must_use]
    pub fn find_by_track<'a>(artists: &'a [Self], track: &Track) -> Option<&'a Self> {
        artists.iter().find(|artist| artist.name == track.artist)
    }

    #[must_use]
    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    #[must_use]
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    #[must_use]
    pub fn image(&self) -> Option<&Arc<Picture>> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Find one of this artist's albums by name.
    #[must_use]
    pub fn album(&self, name: &str) -> Option<&Album> {
        self.albums.iter().find(|album| **album.name() == *name)
    }

    /// Mutable access to one of this artist's albums.
    ///
    /// Callers must not replace the album, and must call [`Artist::update_image`] when done.
    #[must_use]
    pub(crate) fn album_mut(&mut self, name: &str) -> Option<&mut Album> {
        self.albums
            .iter_mut()
            .find(|album| **album.name() == *name)
    }

    /// The number of tracks across all albums.
    #[must_use]
    pub fn track_count(&self) -> usize {
        self.albums.iter().map(Album::len).sum()
    }

    /// Total runtime.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.albums.iter().map(Album::duration).sum()
    }

    /// Does `album` belong to this artist?
    #[must_use]
    pub fn owns(&self, album: &Album) -> bool {
        *album.artist_name() == self.name
    }

    /// Add an album to the artist.
    ///
    /// If the artist already has an album with the same name, the tracks of `album` are merged into it.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::AlbumOwnership`] (containing the album) if the album belongs to another artist.
    /// The artist is left untouched in that case.
    pub fn add(&mut self, album: Album) -> Result<(), LibraryError> {
        if !self.owns(&album) {
            debug!(
                "Refusing album {:?} by {:?} for artist {:?}",
                album.name(),
                album.artist_name(),
                self.name
            );
            return Err(LibraryError::AlbumOwnership {
                artist: self.name.clone(),
                album: Box::new(album),
            });
        }

        if let Some(existing) = self.album_mut(album.name()) {
            existing.absorb(album);
        } else {
            let index = self
                .albums
                .partition_point(|a| Album::compare(a, &album).is_le());
            self.albums.insert(index, album);
        }

        self.update_image();
        Ok(())
    }

    /// Remove an album by name, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::AlbumNotFound`] if the artist has no album with that name.
    pub fn remove(&mut self, name: &str) -> Result<Album, LibraryError> {
        let Some(index) = self
            .albums
            .iter()
            .position(|album| **album.name() == *name)
        else {
            return Err(LibraryError::AlbumNotFound {
                artist: self.name.clone(),
                album: name.into(),
            });
        };

        let removed = self.albums.remove(index);
        self.update_image();
        Ok(removed)
    }

    /// File a track under the right album of this artist, creating the album if needed.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::TrackOwnership`] (containing the track) if the track is by someone else.
    pub fn add_track(&mut self, track: Track) -> Result<(), LibraryError> {
        if track.artist != self.name {
            return Err(LibraryError::TrackOwnership {
                artist: self.name.clone(),
                album: track.album.clone(),
                track: Box::new(track),
            });
        }

        self.insert_track(track);
        Ok(())
    }

    /// Remove a single track from the album that holds it, returning it.
    ///
    /// An album left without tracks stays, it's up to the caller to [`Artist::remove`] it.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::AlbumNotFound`] or [`LibraryError::TrackNotFound`] if the track isn't filed here.
    /// Nothing is modified in that case.
    pub fn remove_track(&mut self, track: &Track) -> Result<Track, LibraryError> {
        let artist = self.name.clone();
        let Some(album) = self.album_mut(&track.album) else {
            return Err(LibraryError::AlbumNotFound {
                artist,
                album: track.album.clone(),
            });
        };

        let removed = album.remove(track)?;
        self.update_image();
        Ok(removed)
    }

    /// Recompute the cover from the albums, in sorted order.
    pub fn update_image(&mut self) {
        self.image = first_cover(&self.albums);
    }

    /// File a track that is known to be by this artist.
    pub(crate) fn insert_track(&mut self, track: Track) {
        if let Some(album) = self.album_mut(&track.album) {
            album.insert_sorted(track);
            album.update_image();
        } else {
            let mut album = Album::for_track(&track);
            album.insert_sorted(track);
            album.update_image();
            let index = self
                .albums
                .partition_point(|a| Album::compare(a, &album).is_le());
            self.albums.insert(index, album);
        }
        self.update_image();
    }
}

impl Cover for Artist {
    fn cover(&self) -> Option<&Arc<Picture>> {
        self.image.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{album_with, picture, track};

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn names(artists: &[Artist]) -> Vec<&str> {
        artists.iter().map(|a| a.name().as_ref()).collect()
    }

    fn album_names(artist: &Artist) -> Vec<&str> {
        artist.albums().iter().map(|a| a.name().as_ref()).collect()
    }

    #[rstest]
    #[case("The Beatles", "Beatles", Ordering::Equal)]
    #[case("Abba", "The Beatles", Ordering::Less)]
    #[case("the beatles", "BEATLES", Ordering::Equal)]
    #[case("Queen", "abba", Ordering::Greater)]
    #[case("Them", "The Them", Ordering::Equal)]
    #[case("Theatre", "Abba", Ordering::Greater)]
    #[case("", "Abba", Ordering::Less)]
    fn test_compare(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(
            Artist::compare(&Artist::new(a), &Artist::new(b)),
            expected
        );
    }

    #[rstest]
    #[case("The Beatles", "beatles")]
    #[case("THE WHO", "who")]
    #[case("Theatre of Tragedy", "theatre of tragedy")]
    #[case("Band of the Year", "band of the year")]
    fn test_sort_key(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(sort_key(name), expected);
    }

    #[test]
    fn test_build_end_to_end() {
        let tracks = vec![
            track("A", "X", "1", 1, 2),
            track("A", "X", "2", 1, 1),
            track("B", "Y", "3", 1, 1),
        ];

        let artists = Artist::build_from_tracks(tracks);

        assert_eq!(names(&artists), vec!["A", "B"]);
        assert_eq!(album_names(&artists[0]), vec!["X"]);
        let titles: Vec<_> = artists[0].albums()[0]
            .tracks()
            .iter()
            .map(|t| t.title.as_ref())
            .collect();
        assert_eq!(titles, vec!["2", "1"]);
    }

    #[test]
    fn test_build_groups_exactly() {
        let tracks = vec![
            track("The Who", "Tommy", "1", 1, 1),
            track("Abba", "Arrival", "1", 1, 1),
            track("ABBA", "Arrival", "2", 1, 2),
            track("Abba", "Voulez-Vous", "1", 1, 1),
            track("Abba", "arrival", "3", 1, 3),
            track("", "", "orphan", 0, 0),
            track("Abba", "Arrival", "4", 1, 4),
        ];
        let total = tracks.len();

        let artists = Artist::build_from_tracks(tracks);

        assert_eq!(names(&artists), vec!["", "Abba", "ABBA", "The Who"]);
        let abba = &artists[1];
        assert_eq!(album_names(abba), vec!["Arrival", "arrival", "Voulez-Vous"]);
        assert_eq!(abba.album("Arrival").map(Album::len), Some(2));
        assert_eq!(abba.track_count(), 4);

        let filed: usize = artists.iter().map(Artist::track_count).sum();
        assert_eq!(filed, total);

        for artist in &artists {
            for album in artist.albums() {
                assert_eq!(album.artist_name(), artist.name());
                assert!(album.tracks().iter().all(|t| album.owns(t)));
            }
            assert!(
                artist
                    .albums()
                    .windows(2)
                    .all(|w| Album::compare(&w[0], &w[1]).is_le())
            );
        }
        assert!(
            artists
                .windows(2)
                .all(|w| Artist::compare(&w[0], &w[1]).is_le())
        );
    }

    #[test]
    fn test_build_nothing() {
        assert!(Artist::build_from_tracks(Vec::new()).is_empty());
    }

    #[test]
    fn test_build_derives_images() {
        let cover = picture(9);
        let mut pictured = track("A", "Y", "1", 1, 1);
        pictured.picture = Some(cover.clone());

        let artists = Artist::build_from_tracks(vec![
            track("A", "X", "1", 1, 1),
            pictured,
            track("B", "Z", "1", 1, 1),
        ]);

        assert_eq!(artists[0].albums()[0].image(), None);
        assert_eq!(artists[0].albums()[1].image(), Some(&cover));
        assert_eq!(artists[0].image(), Some(&cover));
        assert_eq!(artists[1].image(), None);
    }

    #[test]
    fn test_find_by_track() {
        let artists = vec![Artist::new("A"), Artist::new("B")];
        let found = Artist::find_by_track(&artists, &track("B", "X", "1", 1, 1));
        assert_eq!(found.map(|a| a.name().as_ref()), Some("B"));
        assert!(Artist::find_by_track(&artists, &track("b", "X", "1", 1, 1)).is_none());
    }

    #[test]
    fn test_add_sorts_and_updates_image() -> anyhow::Result<()> {
        let cover = picture(2);
        let mut artist = Artist::new("A");

        artist.add(album_with("A", "Zebra", None))?;
        assert_eq!(artist.image(), None);

        artist.add(album_with("A", "Middle", Some(cover.clone())))?;
        assert_eq!(artist.image(), Some(&cover));

        artist.add(album_with("A", "apple", Some(picture(3))))?;
        assert_eq!(album_names(&artist), vec!["apple", "Middle", "Zebra"]);
        assert_eq!(artist.image(), Some(&picture(3)));
        Ok(())
    }

    #[test]
    fn test_add_refuses_foreign_album() -> anyhow::Result<()> {
        let mut artist = Artist::new("A");
        artist.add(album_with("A", "X", None))?;
        let before = artist.clone();

        let foreign = album_with("B", "Y", Some(picture(1)));
        let error = artist.add(foreign.clone()).unwrap_err();

        assert!(error.is_ownership_mismatch());
        assert_eq!(error.into_album(), Some(foreign));
        assert_eq!(artist, before);
        assert_eq!(artist.albums().len(), 1);
        Ok(())
    }

    #[test]
    fn test_add_merges_albums_with_the_same_name() -> anyhow::Result<()> {
        let mut artist = Artist::new("A");
        let mut first = Album::new("A", "X");
        first.add(track("A", "X", "2", 1, 2))?;
        let mut second = Album::new("A", "X");
        second.add(track("A", "X", "1", 1, 1))?;

        artist.add(first)?;
        artist.add(second)?;

        assert_eq!(artist.albums().len(), 1);
        assert_eq!(artist.track_count(), 2);
        assert_eq!(artist.albums()[0].tracks()[0].title.as_ref(), "1");
        Ok(())
    }

    #[test]
    fn test_remove() -> anyhow::Result<()> {
        let first = picture(1);
        let second = picture(2);
        let mut artist = Artist::new("A");
        artist.add(album_with("A", "X", Some(first.clone())))?;
        artist.add(album_with("A", "Y", Some(second.clone())))?;
        assert_eq!(artist.image(), Some(&first));

        let before = artist.clone();
        let error = artist.remove("Z").unwrap_err();
        assert!(error.is_not_found());
        assert_eq!(artist, before);

        let removed = artist.remove("X")?;
        assert_eq!(removed.name().as_ref(), "X");
        assert_eq!(artist.albums().len(), 1);
        assert_eq!(artist.image(), Some(&second));

        artist.remove("Y")?;
        assert!(artist.is_empty());
        assert_eq!(artist.image(), None);
        Ok(())
    }

    #[test]
    fn test_update_image_after_out_of_band_change() -> anyhow::Result<()> {
        let cover = picture(5);
        let mut artist = Artist::new("A");
        artist.add(album_with("A", "X", None))?;
        assert_eq!(artist.image(), None);

        let mut pictured = track("A", "X", "late", 9, 9);
        pictured.picture = Some(cover.clone());
        artist
            .album_mut("X")
            .expect("album exists")
            .add(pictured)?;
        assert_eq!(artist.image(), None);

        artist.update_image();
        assert_eq!(artist.image(), Some(&cover));
        Ok(())
    }

    #[test]
    fn test_remove_track() -> anyhow::Result<()> {
        let cover = picture(4);
        let mut pictured = track("A", "X", "1", 1, 1);
        pictured.picture = Some(cover.clone());
        let mut artist = Artist::new("A");
        artist.add_track(pictured.clone())?;
        artist.add_track(track("A", "X", "2", 1, 2))?;
        assert_eq!(artist.image(), Some(&cover));

        let before = artist.clone();
        assert!(artist.remove_track(&track("A", "Y", "1", 1, 1)).unwrap_err().is_not_found());
        assert!(artist.remove_track(&track("A", "X", "3", 1, 3)).unwrap_err().is_not_found());
        assert_eq!(artist, before);

        assert_eq!(artist.remove_track(&pictured)?, pictured);
        assert_eq!(artist.image(), None);
        assert_eq!(artist.album("X").map(Album::len), Some(1));

        artist.remove_track(&track("A", "X", "2", 1, 2))?;
        assert_eq!(artist.album("X").map(Album::is_empty), Some(true));
        Ok(())
    }

    #[test]
    fn test_add_track() -> anyhow::Result<()> {
        let mut artist = Artist::new("A");
        artist.add_track(track("A", "Y", "1", 1, 1))?;
        artist.add_track(track("A", "X", "1", 1, 1))?;
        artist.add_track(track("A", "Y", "0", 0, 1))?;
        assert_eq!(album_names(&artist), vec!["X", "Y"]);
        assert_eq!(
            artist.album("Y").map(|a| a.tracks()[0].title.as_ref()),
            Some("0")
        );

        let foreign = track("B", "X", "1", 1, 1);
        let error = artist.add_track(foreign.clone()).unwrap_err();
        assert_eq!(error.into_track(), Some(foreign));
        assert_eq!(artist.track_count(), 3);
        Ok(())
    }

    #[test]
    fn test_duration() {
        let mut a = track("A", "X", "1", 1, 1);
        a.duration = Duration::from_secs(60);
        let mut b = track("A", "Y", "1", 1, 1);
        b.duration = Duration::from_secs(30);
        let artists = Artist::build_from_tracks(vec![a, b]);
        assert_eq!(artists[0].duration(), Duration::from_secs(90));
    }
}
