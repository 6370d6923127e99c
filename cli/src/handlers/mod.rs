pub mod implementations;
pub mod printing;
pub mod utils;


use clap::Subcommand;
use melodeon_library::Library;

pub trait CommandHandler {
    type Output;

    fn handle<W1: std::fmt::Write, W2: std::fmt::Write>(
        &self,
        library: &mut Library,
        stdout: &mut W1,
        stderr: &mut W2,
    ) -> Self::Output;
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Get brief library info
    Brief,
    /// Print every artist, album, and track
    Tree,
    /// List the artists
    Artists,
    /// List the albums of an artist
    Albums {
        /// The artist, spelled exactly as tagged
        artist: String,
    },
    /// List the tracks of an album
    Tracks {
        /// The artist, spelled exactly as tagged
        artist: String,
        /// The album, spelled exactly as tagged
        album: String,
    },
    /// Remove something from the loaded library and show what's left
    /// (the catalog file is not modified)
    Remove {
        #[clap(subcommand)]
        target: RemoveTarget,
    },
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum RemoveTarget {
    /// Remove an artist and all their albums
    Artist {
        /// The artist, spelled exactly as tagged
        name: String,
    },
    /// Remove a single album
    Album {
        /// The artist, spelled exactly as tagged
        artist: String,
        /// The album, spelled exactly as tagged
        album: String,
    },
}
