use melodeon_library::{Library, LibraryError};

use super::{Command, CommandHandler, RemoveTarget};
use crate::handlers::printing;

impl CommandHandler for Command {
    type Output = anyhow::Result<()>;

    fn handle<W1: std::fmt::Write, W2: std::fmt::Write>(
        &self,
        library: &mut Library,
        stdout: &mut W1,
        stderr: &mut W2,
    ) -> Self::Output {
        match self {
            Self::Brief => Ok(write!(stdout, "{}", printing::brief(&library.brief())?)?),
            Self::Tree => Ok(write!(stdout, "{}", printing::tree(library.artists())?)?),
            Self::Artists => Ok(write!(
                stdout,
                "{}",
                printing::artist_list("Artists", library.artists())?
            )?),
            Self::Albums { artist } => match library.artist(artist) {
                Some(found) => Ok(write!(
                    stdout,
                    "{}",
                    printing::album_list(&format!("Albums by \"{artist}\""), found.albums())?
                )?),
                None => Ok(writeln!(
                    stderr,
                    "{}",
                    LibraryError::ArtistNotFound(artist.as_str().into())
                )?),
            },
            Self::Tracks { artist, album } => {
                if library.artist(artist).is_none() {
                    return Ok(writeln!(
                        stderr,
                        "{}",
                        LibraryError::ArtistNotFound(artist.as_str().into())
                    )?);
                }
                match library.album(artist, album) {
                    Some(found) => Ok(write!(
                        stdout,
                        "{}",
                        printing::track_list(
                            &format!("Tracks on \"{album}\" by \"{artist}\""),
                            found.tracks()
                        )?
                    )?),
                    None => Ok(writeln!(
                        stderr,
                        "{}",
                        LibraryError::AlbumNotFound {
                            artist: artist.as_str().into(),
                            album: album.as_str().into(),
                        }
                    )?),
                }
            }
            Self::Remove { target } => target.handle(library, stdout, stderr),
        }
    }
}

impl CommandHandler for RemoveTarget {
    type Output = anyhow::Result<()>;

    fn handle<W1: std::fmt::Write, W2: std::fmt::Write>(
        &self,
        library: &mut Library,
        stdout: &mut W1,
        stderr: &mut W2,
    ) -> Self::Output {
        let removed = match self {
            Self::Artist { name } => library.remove_artist(name).map(|artist| {
                format!(
                    "Removed \"{}\" ({} albums, {} tracks)",
                    artist.name(),
                    artist.albums().len(),
                    artist.track_count()
                )
            }),
            Self::Album { artist, album } => {
                library.remove_album(artist, album).map(|album| {
                    format!(
                        "Removed \"{}\" by \"{}\" ({} tracks)",
                        album.name(),
                        album.artist_name(),
                        album.len()
                    )
                })
            }
        };

        match removed {
            Ok(message) => {
                writeln!(stdout, "{message}")?;
                write!(stdout, "{}", printing::brief(&library.brief())?)?;
            }
            Err(e) => writeln!(stderr, "{e}")?,
        }

        Ok(())
    }
}
