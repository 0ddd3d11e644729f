//! `dex list` and `dex search`.

use std::io::BufRead;

use owo_colors::OwoColorize;
use serde_json::json;
use tokio::sync::mpsc;

use super::{CommandOutput, load_failure, open_client, open_prefs, open_url_state, palette};
use crate::catalog::{CatalogEntry, PageResult};
use crate::config::Config;
use crate::display::{Palette, render_list, render_pagination};
use crate::engine::{
    VisibleListCache, compute_visible_list, empty_message, pagination_enabled, total_pages,
    visible_pages,
};
use crate::error::{DexError, Result};
use crate::prefs::{FileStore, Preferences};
use crate::session::{ListLoader, ListState, SearchDebouncer, TypeVocabulary};
use crate::view_state::{SortKey, ViewMode, ViewState, ViewStatePatch, encode};

/// Flags of `dex list`. Every flag that is set becomes part of one update.
#[derive(Debug, Default)]
pub struct ListOptions {
    pub search: Option<String>,
    pub type_filter: Option<String>,
    pub sort: Option<SortKey>,
    pub page: Option<u32>,
    pub view: Option<ViewMode>,
    pub reset: bool,
    pub json: bool,
}

impl ListOptions {
    fn patch(&self) -> ViewStatePatch {
        ViewStatePatch {
            search: self.search.clone(),
            type_filter: self.type_filter.clone(),
            sort: self.sort,
            page: self.page,
            view: self.view,
        }
        .resetting_page()
    }

    /// The invocation that reproduces these flags, for retry hints.
    fn command_line(&self) -> String {
        let mut line = String::from("dex list");
        if self.reset {
            line.push_str(" --reset");
        }
        if let Some(search) = &self.search {
            line.push_str(&format!(" --search {}", shell_quote(search)));
        }
        if let Some(type_filter) = &self.type_filter {
            line.push_str(&format!(" --type {}", shell_quote(type_filter)));
        }
        if let Some(sort) = self.sort {
            line.push_str(&format!(" --sort {sort}"));
        }
        if let Some(page) = self.page {
            line.push_str(&format!(" --page {page}"));
        }
        if let Some(view) = self.view {
            line.push_str(&format!(" --view {view}"));
        }
        line
    }
}

fn shell_quote(value: &str) -> String {
    if value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == '"') {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

/// Everything needed to print one rendering of the list.
struct ListView<'a> {
    state: &'a ViewState,
    page: &'a PageResult,
    visible: &'a [CatalogEntry],
    page_size: u32,
}

impl ListView<'_> {
    fn to_json(&self) -> serde_json::Value {
        let total = total_pages(self.page.total_count, self.page_size);
        json!({
            "query": encode(self.state),
            "state": self.state,
            "page": self.state.page,
            "total_pages": total,
            "total_count": self.page.total_count,
            "pagination": pagination_enabled(self.state).then(|| visible_pages(self.state.page, total)),
            "entries": self.visible,
        })
    }

    fn to_text(&self, prefs: &Preferences<FileStore>, palette: Palette) -> String {
        let total = total_pages(self.page.total_count, self.page_size);
        let mut text = String::new();

        let mut summary = format!("Page {} of {}, sorted by {}", self.state.page, total, self.state.sort);
        if !self.state.search.is_empty() {
            summary.push_str(&format!(", search \"{}\"", self.state.search));
        }
        if !self.state.type_filter.is_empty() {
            summary.push_str(&format!(", type {}", self.state.type_filter));
        }
        if self.state.view == ViewMode::Favorites {
            summary.push_str(", favorites only");
        }
        text.push_str(&palette.heading(&summary));
        text.push('\n');

        if self.visible.is_empty() {
            text.push_str(&format!("\n{}", empty_message(self.state)));
            return text;
        }

        text.push_str(&render_list(self.visible, &prefs.favorites(), &prefs.notes()));

        if pagination_enabled(self.state) {
            text.push_str(&format!("\n{}", render_pagination(self.state.page, total, palette)));
        }
        text
    }
}

/// Apply the given flags to the view state, then fetch and print the list.
pub async fn cmd_list(options: ListOptions) -> Result<()> {
    let config = Config::load()?;
    let client = open_client(&config)?;
    let prefs = open_prefs();
    let mut url_state = open_url_state();
    let retry_with = options.command_line();

    if let Some(type_filter) = options.type_filter.as_deref().filter(|t| !t.is_empty()) {
        let vocabulary = TypeVocabulary::new(client.clone());
        let known = vocabulary
            .get()
            .await
            .map_err(|e| load_failure(&e, &retry_with))?;
        if !known.iter().any(|t| t.name == type_filter) {
            let names: Vec<&str> = known.iter().map(|t| t.name.as_str()).collect();
            return Err(DexError::Other(format!(
                "unknown type '{type_filter}', expected one of: {}",
                names.join(", ")
            )));
        }
    }

    let state = if options.reset {
        url_state.reset(options.patch())?
    } else {
        url_state.update(options.patch())?
    }
    .clone();

    let loader = ListLoader::new(client, config.page_size());
    loader.load_page(state.page).await;

    match loader.state() {
        ListState::Ready { result, .. } => {
            let favorites = prefs.favorites();
            let visible = compute_visible_list(&result.entries, &state, &favorites);
            let view = ListView {
                state: &state,
                page: &result,
                visible: &visible,
                page_size: loader.page_size(),
            };
            CommandOutput::new(view.to_json())
                .with_text(view.to_text(&prefs, palette(&prefs)))
                .print(options.json)
        }
        ListState::Failed { error, .. } => Err(load_failure(&error, &retry_with)),
        ListState::Idle | ListState::Loading { .. } => Ok(()),
    }
}

/// Read search text from stdin, one line per keystroke burst, and re-list
/// after each quiet interval with the last text of the burst.
pub async fn cmd_search(json: bool) -> Result<()> {
    let config = Config::load()?;
    let client = open_client(&config)?;
    let prefs = open_prefs();
    let palette = palette(&prefs);
    let mut url_state = open_url_state();

    let (tx, mut rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line.trim().to_string()).is_err() {
                break;
            }
        }
    });

    let debouncer = SearchDebouncer::new(config.search_debounce());
    let loader = ListLoader::new(client, config.page_size());
    let mut cache = VisibleListCache::new();

    while let Some(text) = debouncer.next_burst(&mut rx).await {
        if text == url_state.state().search {
            continue;
        }
        let state = url_state
            .update(ViewStatePatch::new().search(text).resetting_page())?
            .clone();

        let loaded = matches!(loader.state(), ListState::Ready { page, .. } if page == state.page);
        if !loaded {
            loader.load_page(state.page).await;
        }

        match loader.state() {
            ListState::Ready {
                result, generation, ..
            } => {
                let favorites = prefs.favorites();
                let visible = cache.get(generation, &result.entries, &state, &favorites);
                let view = ListView {
                    state: &state,
                    page: &result,
                    visible,
                    page_size: loader.page_size(),
                };
                if json {
                    println!("{}", serde_json::to_string(&view.to_json())?);
                } else {
                    println!("{}\n", view.to_text(&prefs, palette));
                }
            }
            ListState::Failed { error, .. } => {
                eprintln!("{} {}", "error:".red(), load_failure(&error, "another search"));
            }
            ListState::Idle | ListState::Loading { .. } => {}
        }
    }

    Ok(())
}
