use crate::cli::DecorationStyle;
use crate::domain::emotion::Emotion;
use crate::services::render::{decorate, decoration};
use crate::services::tags::parse_emotion_tag;
use std::io::{self, BufRead, Write};

/// Decorates a leading emotion tag; anything else comes back unchanged.
pub fn process(input: &str, style: DecorationStyle) -> String {
    match parse_emotion_tag(input) {
        Some((emotion, rest)) => {
            tracing::debug!(%emotion, "recognized emotion tag");
            decorate(emotion, style, rest)
        }
        None => input.to_string(),
    }
}

/// Streams `reader` to `writer` a line at a time, flushing after each line so
/// a response being generated shows up as it arrives.
///
/// Only the first line can carry the tag, so the output equals
/// [`process`] applied to the whole input. Bytes that are not UTF-8 pass
/// through untouched; a tag in front of them is still decorated.
pub fn filter_stream<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    style: DecorationStyle,
) -> io::Result<Option<Emotion>> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }

    let emotion = match std::str::from_utf8(&line) {
        Ok(text) => match parse_emotion_tag(text) {
            Some((emotion, rest)) => {
                tracing::debug!(%emotion, "recognized emotion tag");
                writer.write_all(decorate(emotion, style, rest).as_bytes())?;
                Some(emotion)
            }
            None => {
                writer.write_all(&line)?;
                None
            }
        },
        // A tag is ASCII, so it can still be read off the valid prefix.
        Err(e) => {
            let (head, tail) = line.split_at(e.valid_up_to());
            let text = std::str::from_utf8(head).unwrap_or_default();
            match parse_emotion_tag(text) {
                Some((emotion, rest)) => {
                    tracing::debug!(%emotion, "recognized emotion tag before invalid UTF-8");
                    writer.write_all(decoration(emotion, style, false).as_bytes())?;
                    writer.write_all(rest.as_bytes())?;
                    writer.write_all(tail)?;
                    Some(emotion)
                }
                None => {
                    writer.write_all(&line)?;
                    None
                }
            }
        }
    };
    writer.flush()?;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        writer.write_all(&line)?;
        writer.flush()?;
    }
    Ok(emotion)
}
