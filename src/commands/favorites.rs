use serde_json::json;

use super::{CommandOutput, open_prefs, palette};
use crate::display::format_number;
use crate::error::Result;

/// Toggle `id` in the favorite set.
pub fn cmd_fav(id: u32, json: bool) -> Result<()> {
    let prefs = open_prefs();
    let now_favorite = prefs.toggle_favorite(id)?;
    let palette = palette(&prefs);

    let text = if now_favorite {
        format!("{} {} to favorites", palette.favorite("★ Added"), format_number(id))
    } else {
        format!("Removed {} from favorites", format_number(id))
    };

    CommandOutput::new(json!({
        "action": "favorite_toggled",
        "id": id,
        "favorite": now_favorite,
        "favorites": prefs.favorites(),
    }))
    .with_text(text)
    .print(json)
}

/// List favorite ids in the order they were added.
pub fn cmd_favs(json: bool) -> Result<()> {
    let prefs = open_prefs();
    let favorites = prefs.favorites();

    let text = if favorites.is_empty() {
        "No favorites yet. Add one with: dex fav <ID>".to_string()
    } else {
        favorites
            .ids()
            .iter()
            .map(|&id| format_number(id))
            .collect::<Vec<_>>()
            .join("\n")
    };

    CommandOutput::new(json!({ "favorites": favorites }))
        .with_text(text)
        .print(json)
}
