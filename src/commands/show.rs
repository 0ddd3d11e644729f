use serde_json::json;

use super::{CommandOutput, load_failure, open_client, open_prefs, palette};
use crate::config::Config;
use crate::display::render_detail;
use crate::error::Result;
use crate::session::{DetailLoader, DetailState};

/// Display one entry with its stats, favorite status and note.
pub async fn cmd_show(id: u32, json: bool) -> Result<()> {
    let config = Config::load()?;
    let prefs = open_prefs();
    let loader = DetailLoader::new(open_client(&config)?);

    loader.open(id).await;

    match loader.state() {
        DetailState::Ready(entry) => {
            let favorite = prefs.is_favorite(entry.id);
            let note = prefs.note(entry.id);
            let text = render_detail(&entry, favorite, note.as_deref(), palette(&prefs));

            CommandOutput::new(json!({
                "entry": entry,
                "favorite": favorite,
                "note": note,
            }))
            .with_text(text)
            .print(json)
        }
        DetailState::Failed { error, .. } => {
            loader.dismiss();
            Err(load_failure(&error, &format!("dex show {id}")))
        }
        DetailState::Closed | DetailState::Loading { .. } => Ok(()),
    }
}
