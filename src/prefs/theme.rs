use serde::{Deserialize, Serialize};

use crate::error::DexError;

/// Color theme preference, persisted as the `dark-mode` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

enum_display_fromstr!(
    Theme,
    DexError::InvalidTheme,
    {
        Light => "light",
        Dark => "dark",
    }
);

impl Theme {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        Self::from_dark_mode(!self.is_dark())
    }
}
