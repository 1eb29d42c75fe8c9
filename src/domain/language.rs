//! Display language selection.

use serde::{Deserialize, Serialize};

/// Languages offered on the first screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
    Bn,
    Ta,
    Te,
    Gu,
    Kn,
    Ml,
    Pa,
}

impl Language {
    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Mr => "mr",
            Self::Bn => "bn",
            Self::Ta => "ta",
            Self::Te => "te",
            Self::Gu => "gu",
            Self::Kn => "kn",
            Self::Ml => "ml",
            Self::Pa => "pa",
        }
    }

    /// English name of the language.
    #[must_use]
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "Hindi",
            Self::Mr => "Marathi",
            Self::Bn => "Bengali",
            Self::Ta => "Tamil",
            Self::Te => "Telugu",
            Self::Gu => "Gujarati",
            Self::Kn => "Kannada",
            Self::Ml => "Malayalam",
            Self::Pa => "Punjabi",
        }
    }

    /// Name in the language's own script.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिंदी",
            Self::Mr => "मराठी",
            Self::Bn => "বাংলা",
            Self::Ta => "தமிழ்",
            Self::Te => "తెలుగు",
            Self::Gu => "ગુજરાતી",
            Self::Kn => "ಕನ್ನಡ",
            Self::Ml => "മലയാളം",
            Self::Pa => "ਪੰਜਾਬੀ",
        }
    }

    /// Parses an ISO code, e.g. from the CLI.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        ALL_LANGUAGES.iter().copied().find(|l| l.code() == code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Every offered language, in the order shown on the selection grid.
pub const ALL_LANGUAGES: &[Language] = &[
    Language::En,
    Language::Hi,
    Language::Mr,
    Language::Bn,
    Language::Ta,
    Language::Te,
    Language::Gu,
    Language::Kn,
    Language::Ml,
    Language::Pa,
];
