/// Named palette selected by `styles.theme`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Red accent on white.
    Security,
    /// Sky accent on a dark surface.
    Analytics,
    /// Violet accent on white.
    Testing,
    /// Slate accent on white; used for any unknown key.
    #[default]
    Default,
}

/// Token set supplying defaults when a screen or section omits explicit styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ThemeTokens {
    /// Screen/section surface color.
    pub surface: &'static str,
    /// Accent color (screen stroke).
    pub accent: &'static str,
    /// Gradient string for banners.
    pub gradient: &'static str,
}

impl Theme {
    /// Map a theme key to a theme. Keys match exactly; anything else gives [`Theme::Default`].
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("security") => Self::Security,
            Some("analytics") => Self::Analytics,
            Some("testing") => Self::Testing,
            _ => Self::Default,
        }
    }

    /// Fixed token triple for this theme.
    pub fn tokens(self) -> ThemeTokens {
        match self {
            Self::Security => ThemeTokens {
                surface: "#FFFFFF",
                accent: "#DC2626",
                gradient: "linear #FF6B6B → #4ECDC4",
            },
            Self::Analytics => ThemeTokens {
                surface: "#0B1120",
                accent: "#38BDF8",
                gradient: "linear #0EA5E9 → #22C55E",
            },
            Self::Testing => ThemeTokens {
                surface: "#FFFFFF",
                accent: "#7C3AED",
                gradient: "linear #6366F1 → #EC4899",
            },
            Self::Default => ThemeTokens {
                surface: "#FFFFFF",
                accent: "#0F172A",
                gradient: "linear #FF6B6B → #4ECDC4",
            },
        }
    }
}

/// Resolve a theme key straight to its token triple.
pub fn resolve_theme(key: Option<&str>) -> ThemeTokens {
    Theme::from_key(key).tokens()
}

#[cfg(test)]
#[path = "../../tests/unit/style/theme.rs"]
mod tests;
