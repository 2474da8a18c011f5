//! Theme enumeration

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three presentation modes of the site.
///
/// The string form (`minimal`, `dark`, `colorful`) is what lands in local
/// storage and in the root `data-theme` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Minimal,
    Dark,
    Colorful,
}

impl Theme {
    /// All themes in selector order
    pub const ALL: [Self; 3] = [Self::Minimal, Self::Dark, Self::Colorful];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Dark => "dark",
            Self::Colorful => "colorful",
        }
    }

    /// Label shown in the theme selector
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Theme 1 - Minimal",
            Self::Dark => "Theme 2 - Dark",
            Self::Colorful => "Theme 3 - Colorful",
        }
    }

    /// Resolve a value read back from storage, falling back to the default
    /// theme when it is absent or unrecognized.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<Self>) {
            Some(Ok(theme)) => theme,
            Some(Err(err)) => {
                tracing::warn!(%err, "ignoring stored theme");
                Self::default()
            }
            None => Self::default(),
        }
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| CoreError::invalid_theme(s))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exactly_the_three_names() {
        assert_eq!("minimal".parse::<Theme>(), Ok(Theme::Minimal));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("colorful".parse::<Theme>(), Ok(Theme::Colorful));

        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(CoreError::invalid_theme("Dark"))
        );
        assert!("".parse::<Theme>().is_err());
        assert!("\"dark\"".parse::<Theme>().is_err());
    }

    #[test]
    fn stored_value_falls_back_to_minimal() {
        assert_eq!(Theme::from_stored(None), Theme::Minimal);
        assert_eq!(Theme::from_stored(Some("neon")), Theme::Minimal);
        assert_eq!(Theme::from_stored(Some("colorful")), Theme::Colorful);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"colorful\"").unwrap();
        assert_eq!(theme, Theme::Colorful);
    }
}
