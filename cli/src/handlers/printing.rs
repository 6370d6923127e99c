//! Handles displaying the output of various commands in a human readable format.

use std::{fmt::Write, sync::Arc};

use melodeon_core::format_duration;
use melodeon_library::{Album, Artist, LibraryBrief, Picture, Track, cover::Cover};

fn cover(picture: Option<&Arc<Picture>>) -> String {
    picture.map_or_else(String::new, |picture| {
        format!(" [cover: {}]", picture.format)
    })
}

fn track_line(track: &Track) -> String {
    format!(
        "{}-{:02} \"{}\" ({})",
        track.disk.no,
        track.track.no,
        track.title,
        format_duration(&track.duration)
    )
}

pub fn brief(brief: &LibraryBrief) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    writeln!(output, "Library:")?;
    writeln!(output, "\tartists: {}", brief.artists)?;
    writeln!(output, "\talbums: {}", brief.albums)?;
    writeln!(output, "\ttracks: {}", brief.tracks)?;

    Ok(output)
}

pub fn artist_list(prefix: &str, artists: &[Artist]) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    writeln!(output, "{prefix}:")?;

    for artist in artists {
        writeln!(
            output,
            "\t\"{}\": {} albums, {} tracks{}",
            artist.name(),
            artist.albums().len(),
            artist.track_count(),
            cover(artist.image())
        )?;
    }

    Ok(output)
}

pub fn album_list(prefix: &str, albums: &[Album]) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    writeln!(output, "{prefix}:")?;

    for album in albums {
        let year = album
            .year()
            .map_or_else(|| String::from("----"), |year| year.to_string());
        writeln!(
            output,
            "\t\"{}\" ({year}): {} tracks, {}{}",
            album.name(),
            album.len(),
            format_duration(&album.duration()),
            cover(album.image())
        )?;
    }

    Ok(output)
}

pub fn track_list(prefix: &str, tracks: &[Track]) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    writeln!(output, "{prefix}:")?;

    for track in tracks {
        writeln!(output, "\t{}{}", track_line(track), cover(track.cover()))?;
    }

    Ok(output)
}

/// Every artist, with their albums and tracks nested underneath, in display order.
pub fn tree(artists: &[Artist]) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    for artist in artists {
        writeln!(output, "\"{}\"{}", artist.name(), cover(artist.image()))?;
        for album in artist.albums() {
            writeln!(output, "\t\"{}\"{}", album.name(), cover(album.image()))?;
            for track in album.tracks() {
                writeln!(output, "\t\t{}", track_line(track))?;
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use melodeon_library::test_utils::{picture, track};
    use pretty_assertions::assert_str_eq;

    #[test]
    fn test_track_list() {
        let mut pictured = track("A", "X", "Second", 2, 3);
        pictured.picture = Some(picture(1));
        let tracks = vec![track("A", "X", "First", 1, 12), pictured];

        assert_str_eq!(
            track_list("Tracks", &tracks).unwrap(),
            "Tracks:\n\t1-12 \"First\" (00:02:00.00)\n\t2-03 \"Second\" (00:02:00.00) [cover: png]\n"
        );
    }

    #[test]
    fn test_album_list_shows_year() {
        let mut dated = track("A", "X", "1", 1, 1);
        dated.year = Some(1977);
        let artists = Artist::build_from_tracks(vec![dated, track("A", "Y", "1", 1, 1)]);

        assert_str_eq!(
            album_list("Albums", artists[0].albums()).unwrap(),
            "Albums:\n\t\"X\" (1977): 1 tracks, 00:02:00.00\n\t\"Y\" (----): 1 tracks, 00:02:00.00\n"
        );
    }

    #[test]
    fn test_empty_lists() {
        assert_str_eq!(artist_list("Artists", &[]).unwrap(), "Artists:\n");
        assert_str_eq!(tree(&[]).unwrap(), "");
    }
}
