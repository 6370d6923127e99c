//! The music library model: a flat list of [`track::Track`]s grouped into [`artist::Artist`]s and their
//! [`album::Album`]s, kept sorted, with the cover art each level shows.

pub mod album;
pub mod artist;
pub mod cover;
pub mod errors;
pub mod library;
pub mod track;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use album::Album;
pub use artist::Artist;
pub use errors::LibraryError;
pub use library::{EmptyPolicy, Library, LibraryBrief};
pub use track::{Picture, Position, Track};
