use serde::Serialize;

/// The closed vocabulary of emotion tags an assistant response may start with.
///
/// Declaration order is the listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Analytical,
    Helpful,
    Curious,
    Uncertain,
    Apologetic,
    Excited,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Analytical,
        Emotion::Helpful,
        Emotion::Curious,
        Emotion::Uncertain,
        Emotion::Apologetic,
        Emotion::Excited,
    ];

    /// Case-insensitive lookup of a bare tag (no brackets).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.tag().eq_ignore_ascii_case(tag))
    }

    pub fn tag(self) -> &'static str {
        match self {
            Emotion::Analytical => "analytical",
            Emotion::Helpful => "helpful",
            Emotion::Curious => "curious",
            Emotion::Uncertain => "uncertain",
            Emotion::Apologetic => "apologetic",
            Emotion::Excited => "excited",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Emotion::Analytical => "Analytical",
            Emotion::Helpful => "Helpful",
            Emotion::Curious => "Curious",
            Emotion::Uncertain => "Uncertain",
            Emotion::Apologetic => "Apologetic",
            Emotion::Excited => "Excited",
        }
    }

    /// Single-line kaomoji used by the compact style.
    pub fn face(self) -> &'static str {
        match self {
            Emotion::Analytical => "( ･ω･)つ━☆",
            Emotion::Helpful => "( ＾ω＾)b",
            Emotion::Curious => "( ･o･)?",
            Emotion::Uncertain => "(・_・;)",
            Emotion::Apologetic => "m(_ _)m",
            Emotion::Excited => "(★ω★)",
        }
    }

    /// Multi-line art drawn inside the box style banner.
    pub fn art(self) -> &'static str {
        match self {
            Emotion::Analytical => concat!(
                "  ∧_∧\n",
                "( ･ω･)つ━☆\n",
                "(つ　 /\n",
                " |  (⌒)\n",
                " し⌒",
            ),
            Emotion::Helpful => concat!(
                "  ∧_∧\n",
                "( ＾ω＾)b\n",
                "(つ　 /\n",
                " |  (⌒)\n",
                " し⌒",
            ),
            Emotion::Curious => concat!(
                "  ∧_∧\n",
                "( ･o･)?\n",
                "(つ　 /\n",
                " |  (⌒)\n",
                " し⌒",
            ),
            Emotion::Uncertain => concat!("(・_・;)\n", "  💧"),
            Emotion::Apologetic => concat!("  ∧_∧\n", "m(_ _)m"),
            Emotion::Excited => concat!(
                "  ∧_∧\n",
                "(★ω★)\n",
                "(つ　 /\n",
                " |  (⌒)\n",
                " し⌒",
            ),
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::Emotion;
    use std::collections::HashSet;

    #[test]
    fn from_tag_ignores_case() {
        assert_eq!(Emotion::from_tag("analytical"), Some(Emotion::Analytical));
        assert_eq!(Emotion::from_tag("HELPFUL"), Some(Emotion::Helpful));
        assert_eq!(Emotion::from_tag("Curious"), Some(Emotion::Curious));
    }

    #[test]
    fn from_tag_rejects_unknown_and_empty() {
        assert_eq!(Emotion::from_tag("bogus"), None);
        assert_eq!(Emotion::from_tag(""), None);
        assert_eq!(Emotion::from_tag("helpful "), None);
    }

    #[test]
    fn every_variant_round_trips_through_its_tag() {
        for e in Emotion::ALL {
            assert_eq!(Emotion::from_tag(e.tag()), Some(e));
            assert_eq!(e.to_string(), e.tag());
        }
    }

    #[test]
    fn labels_are_capitalized_tags_and_unique() {
        let mut seen = HashSet::new();
        for e in Emotion::ALL {
            let label = e.label();
            assert!(seen.insert(label), "duplicate label {label}");
            assert_eq!(label.to_ascii_lowercase(), e.tag());
            assert!(label.starts_with(|c: char| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn art_contains_the_face() {
        for e in Emotion::ALL {
            assert!(e.art().contains(e.face()), "{e} art lacks its face");
        }
    }
}
