//! History navigation over the persisted view state.
//!
//! - `url`: print the current query string
//! - `open`: navigate to a query string (pushes a history entry)
//! - `back` / `forward`: move through history without pushing

use serde_json::json;

use super::{CommandOutput, open_url_state};
use crate::error::Result;
use crate::view_state::{FileHistory, UrlState};

fn location_json(url_state: &UrlState<FileHistory>) -> serde_json::Value {
    json!({
        "query": url_state.query(),
        "state": url_state.state(),
    })
}

/// Print the encoded query string of the current view. Empty for the
/// default view.
pub fn cmd_url(json: bool) -> Result<()> {
    let url_state = open_url_state();
    CommandOutput::new(location_json(&url_state))
        .with_text(url_state.query())
        .print(json)
}

/// Replace the current view with the one encoded by `query`.
pub fn cmd_open(query: &str, json: bool) -> Result<()> {
    let mut url_state = open_url_state();
    url_state.navigate(query)?;
    CommandOutput::new(location_json(&url_state))
        .with_text(url_state.query())
        .print(json)
}

pub fn cmd_back(json: bool) -> Result<()> {
    step(json, |url_state| url_state.back(), "Already at the oldest view")
}

pub fn cmd_forward(json: bool) -> Result<()> {
    step(json, |url_state| url_state.forward(), "Already at the newest view")
}

fn step(
    json: bool,
    action: impl FnOnce(&mut UrlState<FileHistory>) -> Result<bool>,
    at_edge: &str,
) -> Result<()> {
    let mut url_state = open_url_state();
    let moved = action(&mut url_state)?;

    let mut output = location_json(&url_state);
    output["moved"] = json!(moved);

    let text = if moved {
        url_state.query()
    } else {
        at_edge.to_string()
    };
    CommandOutput::new(output).with_text(text).print(json)
}
