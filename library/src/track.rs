#![allow(clippy::module_name_repetitions)]
//----------------------------------------------------------------------------------------- std lib
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
//----------------------------------------------------------------------------------- local modules
use crate::cover::Cover;

/// A `no`/`of` pair, e.g. track 3 of 12 or disc 1 of 2.
///
/// Extractors report `0` for numbers they couldn't find.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    #[cfg_attr(feature = "serde", serde(default))]
    pub no: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub of: u32,
}

impl Position {
    #[must_use]
    pub const fn new(no: u32, of: u32) -> Self {
        Self { no, of }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.no, self.of)
    }
}

/// Cover art embedded in a music file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Picture {
    /// Format of the image, e.g. "jpg" or "png".
    pub format: Arc<str>,
    /// The raw image bytes.
    pub data: Arc<[u8]>,
}

impl Picture {
    #[must_use]
    pub fn new(format: impl Into<Arc<str>>, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            format: format.into(),
            data: data.into(),
        }
    }

    /// A picture without any bytes is treated the same as no picture at all.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}

/// The metadata of a single music file, as handed to us by the metadata extractor.
///
/// A [`Track`] never points back to the [`crate::album::Album`] or [`crate::artist::Artist`] it belongs to,
/// those are found by matching the `artist` and `album` fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    /// Title of the [`Track`].
    pub title: Arc<str>,
    /// Artist of the [`Track`], used as the grouping key for artists.
    #[cfg_attr(feature = "serde", serde(default))]
    pub artist: Arc<str>,
    /// Album title, used as the grouping key for albums.
    #[cfg_attr(feature = "serde", serde(default))]
    pub album: Arc<str>,
    /// The track number of this [`Track`] on its disc.
    #[cfg_attr(feature = "serde", serde(default))]
    pub track: Position,
    /// The disc number of this [`Track`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub disk: Position,
    /// the year the track was released
    ///
    /// Extractors report this either as a number or as text like `"2003-05-12"`. Only the year is kept.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de_year"))]
    pub year: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genre: Vec<Arc<str>>,
    /// Embedded cover art, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub picture: Option<Arc<Picture>>,
    /// Total runtime of this [`Track`].
    #[cfg_attr(feature = "serde", serde(default, with = "duration_secs"))]
    pub duration: Duration,
}

impl Track {
    /// The key tracks are ordered by inside an album: disc number first, then track number.
    #[must_use]
    pub const fn position(&self) -> (u32, u32) {
        (self.disk.no, self.track.no)
    }

    /// Does this track belong to the album `album` by `artist`?
    #[must_use]
    pub fn belongs_to(&self, artist: &str, album: &str) -> bool {
        *self.artist == *artist && *self.album == *album
    }
}

impl Cover for Track {
    fn cover(&self) -> Option<&Arc<Picture>> {
        self.picture.as_ref().filter(|picture| picture.has_data())
    }
}

#[cfg(feature = "serde")]
fn de_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(i32),
        Text(String),
    }

    Ok(
        match <Option<Year> as serde::Deserialize>::deserialize(deserializer)? {
            Some(Year::Number(year)) => Some(year),
            Some(Year::Text(text)) => parse_year(&text),
            None => None,
        },
    )
}

/// The year at the start of `text`, e.g. `2003` for `"2003-05-12"`.
///
/// Text that doesn't start with a number counts as no year at all.
#[cfg(feature = "serde")]
fn parse_year(text: &str) -> Option<i32> {
    let text = text.trim();
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

/// (de)serializes a [`Duration`] as fractional seconds, which is what extractors report.
#[cfg(feature = "serde")]
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
