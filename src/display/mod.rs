use owo_colors::{AnsiColors, OwoColorize, Stream};

use crate::prefs::Theme;

pub mod detail;
pub mod list;

pub use detail::render_detail;
pub use list::{render_list, render_pagination};

/// Upper-case the first character, as entry and type names are shown.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Catalog number, zero-padded to three digits.
pub fn format_number(id: u32) -> String {
    format!("#{id:03}")
}

/// Format a measurement without a trailing `.0`.
pub fn format_measure(value: f64, unit: &str) -> String {
    format!("{value} {unit}")
}

/// Colors for terminal output, chosen by the theme preference.
///
/// Colors are only emitted when stdout supports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    dark: bool,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            dark: theme.is_dark(),
        }
    }

    fn paint(&self, text: &str, color: AnsiColors) -> String {
        text.if_supports_color(Stream::Stdout, |t| t.color(color))
            .to_string()
    }

    pub fn heading(&self, text: &str) -> String {
        let color = if self.dark {
            AnsiColors::BrightCyan
        } else {
            AnsiColors::Blue
        };
        text.if_supports_color(Stream::Stdout, |t| t.color(color).bold().to_string())
            .to_string()
    }

    pub fn muted(&self, text: &str) -> String {
        text.if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string()
    }

    pub fn favorite(&self, text: &str) -> String {
        self.paint(text, AnsiColors::Red)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, AnsiColors::Green)
    }

    pub fn type_badge(&self, type_name: &str) -> String {
        self.paint(&capitalize_first(type_name), type_color(type_name, self.dark))
    }
}

fn type_color(type_name: &str, dark: bool) -> AnsiColors {
    let (normal, bright) = match type_name {
        "fire" | "fighting" => (AnsiColors::Red, AnsiColors::BrightRed),
        "water" | "ice" => (AnsiColors::Blue, AnsiColors::BrightBlue),
        "grass" | "bug" => (AnsiColors::Green, AnsiColors::BrightGreen),
        "electric" | "ground" | "rock" => (AnsiColors::Yellow, AnsiColors::BrightYellow),
        "psychic" | "poison" | "ghost" | "fairy" => (AnsiColors::Magenta, AnsiColors::BrightMagenta),
        "dragon" | "flying" => (AnsiColors::Cyan, AnsiColors::BrightCyan),
        "dark" => (AnsiColors::Black, AnsiColors::BrightBlack),
        _ => (AnsiColors::White, AnsiColors::BrightWhite),
    };
    if dark { bright } else { normal }
}
