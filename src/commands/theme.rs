use serde_json::json;

use super::{CommandOutput, open_prefs, palette};
use crate::error::Result;
use crate::prefs::Theme;

/// Show the theme, or set it to `dark`, `light` or `toggle`.
pub fn cmd_theme(value: Option<&str>, json: bool) -> Result<()> {
    let prefs = open_prefs();
    let current = prefs.theme();

    let next = match value {
        None => None,
        Some(v) if v.eq_ignore_ascii_case("toggle") => Some(current.toggled()),
        Some(v) => Some(v.parse::<Theme>()?),
    };

    let theme = match next {
        Some(theme) => {
            prefs.set_theme(theme)?;
            theme
        }
        None => current,
    };

    let text = match next {
        Some(_) => format!("Theme set to {}", palette(&prefs).heading(theme.as_str())),
        None => theme.to_string(),
    };

    CommandOutput::new(json!({
        "theme": theme,
        "dark_mode": theme.is_dark(),
        "changed": next.is_some_and(|t| t != current),
    }))
    .with_text(text)
    .print(json)
}
