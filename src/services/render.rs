use crate::cli::DecorationStyle;
use crate::domain::emotion::Emotion;

const BOX_INNER_WIDTH: usize = 21;

/// Framed banner: centered label, a rule, then the art. Ends with a newline.
///
/// Padding counts chars, not display columns, so wide glyphs in the art may
/// push the right border out by a cell.
pub fn format_emotion_box(emotion: Emotion) -> String {
    let rule = "─".repeat(BOX_INNER_WIDTH);
    let mut out = String::new();
    out.push_str(&format!("╭{rule}╮\n"));
    out.push_str(&format!(
        "│{:^width$}│\n",
        emotion.label(),
        width = BOX_INNER_WIDTH
    ));
    out.push_str(&format!("├{rule}┤\n"));
    for line in emotion.art().lines() {
        out.push_str(&format!(
            "│ {:<width$}│\n",
            line,
            width = BOX_INNER_WIDTH - 1
        ));
    }
    out.push_str(&format!("╰{rule}╯\n"));
    out
}

/// Puts the decoration for `emotion` in front of `remainder`, which is kept verbatim.
///
/// A remainder that already starts a new line (the tag sat alone on its line)
/// supplies its own break instead of getting a separator.
pub fn decorate(emotion: Emotion, style: DecorationStyle, remainder: &str) -> String {
    let own_line =
        remainder.is_empty() || remainder.starts_with('\n') || remainder.starts_with("\r\n");
    let mut out = decoration(emotion, style, own_line);
    out.push_str(remainder);
    out
}

/// The text that replaces the tag. With `own_line` false it ends in a
/// separator so the rest of the line can follow directly.
pub fn decoration(emotion: Emotion, style: DecorationStyle, own_line: bool) -> String {
    match style {
        DecorationStyle::Box if own_line => format_emotion_box(emotion),
        DecorationStyle::Box => format!("{}\n", format_emotion_box(emotion)),
        DecorationStyle::Compact if own_line => format!("{} {}", emotion.face(), emotion.label()),
        DecorationStyle::Compact => format!("{} {} » ", emotion.face(), emotion.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::{decorate, decoration, format_emotion_box};
    use crate::cli::DecorationStyle;
    use crate::domain::emotion::Emotion;

    #[test]
    fn box_has_frame_label_and_art() {
        let b = format_emotion_box(Emotion::Analytical);
        assert!(b.starts_with("╭─────────────────────╮\n"));
        assert!(b.contains("│     Analytical      │"));
        assert!(b.contains("├─────────────────────┤"));
        assert!(b.contains("( ･ω･)つ━☆"));
        assert!(b.ends_with("╰─────────────────────╯\n"));
    }

    #[test]
    fn box_has_one_row_per_art_line() {
        for e in Emotion::ALL {
            let rows = format_emotion_box(e).lines().count();
            assert_eq!(rows, e.art().lines().count() + 4, "{e}");
        }
    }

    #[test]
    fn box_style_keeps_remainder_after_banner() {
        let out = decorate(Emotion::Helpful, DecorationStyle::Box, "Test response");
        assert!(out.contains("Helpful"));
        assert!(out.ends_with("╯\n\nTest response"));
    }

    #[test]
    fn compact_style_is_single_line() {
        let out = decorate(Emotion::Curious, DecorationStyle::Compact, "Why?\n");
        assert_eq!(out, "( ･o･)? Curious » Why?\n");
    }

    #[test]
    fn tag_alone_on_its_line_reuses_the_line_break() {
        let out = decorate(Emotion::Apologetic, DecorationStyle::Compact, "\nSorry.\n");
        assert_eq!(out, "m(_ _)m Apologetic\nSorry.\n");
        let out = decorate(Emotion::Apologetic, DecorationStyle::Box, "\nSorry.");
        assert!(out.ends_with("╯\n\nSorry."));
        let out = decorate(Emotion::Apologetic, DecorationStyle::Compact, "");
        assert_eq!(out, "m(_ _)m Apologetic");
    }

    #[test]
    fn decoration_separator_depends_on_line_position() {
        let inline = decoration(Emotion::Excited, DecorationStyle::Compact, false);
        assert_eq!(inline, "(★ω★) Excited » ");
        let alone = decoration(Emotion::Excited, DecorationStyle::Compact, true);
        assert_eq!(alone, "(★ω★) Excited");
        let boxed = decoration(Emotion::Excited, DecorationStyle::Box, false);
        assert!(boxed.ends_with("╯\n\n"));
    }
}
