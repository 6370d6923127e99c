//! Helpers for building tracks and albums in tests.

use std::{sync::Arc, time::Duration};

use crate::{
    album::Album,
    track::{Picture, Position, Track},
};

/// A track with the given grouping keys and position, and nothing else filled in.
#[must_use]
pub fn track(artist: &str, album: &str, title: &str, disk: u32, number: u32) -> Track {
    Track {
        title: title.into(),
        artist: artist.into(),
        album: album.into(),
        track: Position::new(number, 0),
        disk: Position::new(disk, 0),
        year: None,
        genre: Vec::new(),
        picture: None,
        duration: Duration::from_secs(120),
    }
}

/// A small fake png, distinguishable by `tag`.
#[must_use]
pub fn picture(tag: u8) -> Arc<Picture> {
    Arc::new(Picture::new("png", vec![0x89, b'P', b'N', b'G', tag]))
}

/// An album holding a single track, which carries `cover`.
#[must_use]
pub fn album_with(artist: &str, name: &str, cover: Option<Arc<Picture>>) -> Album {
    let mut track = track(artist, name, "1", 1, 1);
    track.picture = cover;
    let mut album = Album::new(artist, name);
    album
        .add(track)
        .expect("the track was built for this album");
    album
}
