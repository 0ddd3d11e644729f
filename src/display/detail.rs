use std::fmt::Write;

use crate::catalog::CatalogEntry;

use super::{Palette, capitalize_first, format_measure, format_number};

/// Base stats cap at 255.
const MAX_STAT: u32 = 255;
const BAR_WIDTH: usize = 20;

fn stat_bar(value: u32) -> String {
    let filled = ((value.min(MAX_STAT) as usize) * BAR_WIDTH).div_ceil(MAX_STAT as usize);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Replace the first hyphen with a space ("special-attack" → "special attack").
fn humanize(name: &str) -> String {
    name.replacen('-', " ", 1)
}

/// Render the detail view of one entry.
pub fn render_detail(
    entry: &CatalogEntry,
    is_favorite: bool,
    note: Option<&str>,
    palette: Palette,
) -> String {
    let mut out = String::new();

    let title = format!("{} {}", capitalize_first(&entry.name), format_number(entry.id));
    let _ = write!(out, "{}", palette.heading(&title));
    if is_favorite {
        let _ = write!(out, "  {}", palette.favorite("★ favorite"));
    }
    out.push('\n');

    let types: Vec<String> = entry.types.iter().map(|t| palette.type_badge(t)).collect();
    let _ = writeln!(out, "{}", types.join(" "));
    if let Some(url) = &entry.image_url {
        let _ = writeln!(out, "{}", palette.muted(url));
    }

    let _ = writeln!(out, "\n{}", palette.heading("Physical Info"));
    let _ = writeln!(out, "  Height:          {}", format_measure(entry.height_m(), "m"));
    let _ = writeln!(out, "  Weight:          {}", format_measure(entry.weight_kg(), "kg"));
    let base_experience = entry
        .base_experience
        .map(|xp| xp.to_string())
        .unwrap_or_else(|| "-".to_string());
    let _ = writeln!(out, "  Base experience: {base_experience}");

    if !entry.stats.is_empty() {
        let _ = writeln!(out, "\n{}", palette.heading("Base Stats"));
        let width = entry
            .stats
            .iter()
            .map(|s| humanize(&s.name).chars().count())
            .max()
            .unwrap_or(0);
        for stat in &entry.stats {
            let _ = writeln!(
                out,
                "  {:<width$}  {:>3} {}",
                humanize(&stat.name),
                stat.base_value,
                stat_bar(stat.base_value),
            );
        }
    }

    if !entry.abilities.is_empty() {
        let _ = writeln!(out, "\n{}", palette.heading("Abilities"));
        let abilities: Vec<String> = entry
            .abilities
            .iter()
            .map(|a| {
                let name = capitalize_first(&humanize(&a.name));
                if a.hidden {
                    format!("{name} (Hidden)")
                } else {
                    name
                }
            })
            .collect();
        let _ = writeln!(out, "  {}", abilities.join(", "));
    }

    let _ = writeln!(out, "\n{}", palette.heading("Notes"));
    match note {
        Some(text) => {
            for line in text.lines() {
                let _ = writeln!(out, "  {line}");
            }
        }
        None => {
            let _ = writeln!(
                out,
                "  {}",
                palette.muted(&format!("No note yet. Add one with: dex note {} <text>", entry.id))
            );
        }
    }

    out
}
