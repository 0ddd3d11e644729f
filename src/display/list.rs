use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::catalog::CatalogEntry;
use crate::engine::{PageLink, has_next, has_previous, visible_pages};
use crate::prefs::{FavoriteSet, NoteMap};

use super::{Palette, capitalize_first, format_measure, format_number};

/// A row in the list table
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "No.")]
    number: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Types")]
    types: String,
    #[tabled(rename = "Height")]
    height: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "")]
    marks: String,
}

impl EntryRow {
    fn new(entry: &CatalogEntry, favorites: &FavoriteSet, notes: &NoteMap) -> Self {
        let mut marks = String::new();
        if favorites.contains(entry.id) {
            marks.push('★');
        }
        if notes.contains_key(&entry.id) {
            marks.push('✎');
        }

        Self {
            number: format_number(entry.id),
            name: capitalize_first(&entry.name),
            types: entry
                .types
                .iter()
                .map(|t| capitalize_first(t))
                .collect::<Vec<_>>()
                .join(", "),
            height: format_measure(entry.height_m(), "m"),
            weight: format_measure(entry.weight_kg(), "kg"),
            marks,
        }
    }
}

/// Render the visible list as a table. Favorites are marked with `★`,
/// entries with a saved note with `✎`.
pub fn render_list(entries: &[CatalogEntry], favorites: &FavoriteSet, notes: &NoteMap) -> String {
    let rows: Vec<EntryRow> = entries
        .iter()
        .map(|e| EntryRow::new(e, favorites, notes))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Render the page-link window, e.g. `← 1 … 8 9 [10] 11 12 … 66 →`.
pub fn render_pagination(current: u32, total: u32, palette: Palette) -> String {
    let arrow = |symbol: &str, enabled: bool| {
        if enabled {
            symbol.to_string()
        } else {
            palette.muted(symbol)
        }
    };

    let mut parts = vec![arrow("←", has_previous(current))];
    parts.extend(visible_pages(current, total).into_iter().map(|link| match link {
        PageLink::Page(page) if page == current => format!("[{page}]"),
        PageLink::Page(page) => page.to_string(),
        PageLink::Gap => "…".to_string(),
    }));
    parts.push(arrow("→", has_next(current, total)));

    parts.join(" ")
}
