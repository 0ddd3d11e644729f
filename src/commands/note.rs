use serde_json::json;

use super::{CommandOutput, open_prefs, palette};
use crate::display::format_number;
use crate::error::Result;

/// Show, save or clear the note attached to `id`.
///
/// With no text the current note is printed. Saving blank text clears it.
pub fn cmd_note(id: u32, text: &[String], clear: bool, json: bool) -> Result<()> {
    let prefs = open_prefs();
    let palette = palette(&prefs);
    let number = format_number(id);

    if clear {
        let removed = prefs.remove_note(id)?;
        let message = if removed {
            format!("Cleared note for {number}")
        } else {
            format!("No note for {number}")
        };
        return CommandOutput::new(json!({
            "action": "note_cleared",
            "id": id,
            "removed": removed,
        }))
        .with_text(message)
        .print(json);
    }

    if !text.is_empty() {
        let joined = text.join(" ");
        prefs.save_note(id, &joined)?;
        let note = prefs.note(id);
        let message = match &note {
            Some(_) => format!("{} note for {number}", palette.success("Saved")),
            None => format!("Cleared note for {number}"),
        };
        return CommandOutput::new(json!({
            "action": "note_saved",
            "id": id,
            "note": note,
        }))
        .with_text(message)
        .print(json);
    }

    let note = prefs.note(id);
    let message = note
        .clone()
        .unwrap_or_else(|| palette.muted(&format!("No note for {number}")));
    CommandOutput::new(json!({ "id": id, "note": note }))
        .with_text(message)
        .print(json)
}
