use crate::domain::emotion::Emotion;
use crate::domain::models::EmotionEntry;
use regex::Regex;
use std::sync::LazyLock;

/// A leading `[word]` and the blanks after it on the same line.
static EMOTION_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\w+)\][ \t]*").expect("hardcoded regex pattern is valid"));

/// Splits a recognized leading tag off `input`.
///
/// Returns the emotion and the untouched remainder. `None` covers every
/// pass-through case: no tag, a malformed tag, or a tag outside the vocabulary.
pub fn parse_emotion_tag(input: &str) -> Option<(Emotion, &str)> {
    let captures = EMOTION_TAG_REGEX.captures(input)?;
    let emotion = Emotion::from_tag(captures.get(1)?.as_str())?;
    let consumed = captures.get(0)?.end();
    Some((emotion, input.get(consumed..)?))
}

pub fn list_emotions() -> Vec<EmotionEntry> {
    Emotion::ALL.into_iter().map(EmotionEntry::from).collect()
}
