use serde_json::json;

use super::{CommandOutput, load_failure, open_client};
use crate::config::Config;
use crate::error::Result;
use crate::session::TypeVocabulary;

/// Print every type name accepted by `dex list --type`.
pub async fn cmd_types(json: bool) -> Result<()> {
    let config = Config::load()?;
    let vocabulary = TypeVocabulary::new(open_client(&config)?);
    let types = vocabulary
        .get()
        .await
        .map_err(|e| load_failure(&e, "dex types"))?;

    let text = types
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    CommandOutput::new(json!({ "types": types }))
        .with_text(text)
        .print(json)
}
