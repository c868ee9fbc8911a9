//! Player-facing text
//!
//! Translations are for display only. Game logic always compares the
//! canonical [`Color`] tokens.

use crate::core::Color;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Language {
    #[default]
    En,
    De,
    Fr,
}

impl Language {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
        }
    }

    /// Look up a language by code, e.g. `"de"` or `"de-AT"`
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next()?.to_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Fixed messages shown around the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Won,
    Lost,
    SolutionWas,
    NewBestTime,
    BestTime,
    Score,
    GamesPlayed,
    Remaining,
    Suggestion,
    PlayAgain,
}

/// Display name of `color` in `language`
#[must_use]
pub const fn translate(color: Color, language: Language) -> &'static str {
    match language {
        Language::En => color.name(),
        Language::De => match color {
            Color::Red => "rot",
            Color::Blue => "blau",
            Color::Green => "grün",
            Color::Yellow => "gelb",
            Color::Purple => "lila",
            Color::Orange => "orange",
            Color::Pink => "rosa",
            Color::Cyan => "türkis",
            Color::Brown => "braun",
            Color::White => "weiß",
        },
        Language::Fr => match color {
            Color::Red => "rouge",
            Color::Blue => "bleu",
            Color::Green => "vert",
            Color::Yellow => "jaune",
            Color::Purple => "violet",
            Color::Orange => "orange",
            Color::Pink => "rose",
            Color::Cyan => "cyan",
            Color::Brown => "marron",
            Color::White => "blanc",
        },
    }
}

#[must_use]
pub const fn label(label: Label, language: Language) -> &'static str {
    match (label, language) {
        (Label::Won, Language::En) => "Congratulations, you cracked the code!",
        (Label::Won, Language::De) => "Glückwunsch, du hast den Code geknackt!",
        (Label::Won, Language::Fr) => "Bravo, vous avez trouvé le code !",
        (Label::Lost, Language::En) => "Game over!",
        (Label::Lost, Language::De) => "Spiel vorbei!",
        (Label::Lost, Language::Fr) => "Partie terminée !",
        (Label::SolutionWas, Language::En) => "The correct combination was",
        (Label::SolutionWas, Language::De) => "Die richtige Kombination war",
        (Label::SolutionWas, Language::Fr) => "La bonne combinaison était",
        (Label::NewBestTime, Language::En) => "New best time",
        (Label::NewBestTime, Language::De) => "Neue Bestzeit",
        (Label::NewBestTime, Language::Fr) => "Nouveau meilleur temps",
        (Label::BestTime, Language::En) => "Best time",
        (Label::BestTime, Language::De) => "Bestzeit",
        (Label::BestTime, Language::Fr) => "Meilleur temps",
        (Label::Score, Language::En) => "Score",
        (Label::Score, Language::De) => "Punkte",
        (Label::Score, Language::Fr) => "Score",
        (Label::GamesPlayed, Language::En) => "Games",
        (Label::GamesPlayed, Language::De) => "Spiele",
        (Label::GamesPlayed, Language::Fr) => "Parties",
        (Label::Remaining, Language::En) => "possible codes",
        (Label::Remaining, Language::De) => "mögliche Codes",
        (Label::Remaining, Language::Fr) => "codes possibles",
        (Label::Suggestion, Language::En) => "Try",
        (Label::Suggestion, Language::De) => "Versuche",
        (Label::Suggestion, Language::Fr) => "Essayez",
        (Label::PlayAgain, Language::En) => "Play again? (yes/no)",
        (Label::PlayAgain, Language::De) => "Nochmal spielen? (yes/no)",
        (Label::PlayAgain, Language::Fr) => "Rejouer ? (yes/no)",
    }
}

/// A code spelled out in `language`, e.g. "rot, blau, rot, gelb, weiß"
#[must_use]
pub fn translate_all(colors: &[Color], language: Language) -> String {
    colors
        .iter()
        .map(|&color| translate(color, language))
        .collect::<Vec<_>>()
        .join(", ")
}
