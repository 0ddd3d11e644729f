use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::prefs::Theme;
use crate::view_state::{SortKey, ViewMode};

#[derive(Parser)]
#[command(name = "dex")]
#[command(about = "Browse, filter and bookmark the Pokémon catalog")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the current page, applying any given filters first
    #[command(visible_alias = "ls")]
    List {
        /// Search text (name substring or id digits); "" clears it
        #[arg(short = 'q', long = "search")]
        search: Option<String>,

        /// Only show entries of this type; "" clears it
        #[arg(short = 't', long = "type")]
        type_filter: Option<String>,

        /// Sort order: id, name, height, weight
        #[arg(short, long, value_parser = parse_sort)]
        sort: Option<SortKey>,

        /// Page number (1-based)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        page: Option<u32>,

        /// View: all, favorites
        #[arg(short, long, value_parser = parse_view)]
        view: Option<ViewMode>,

        /// Start from the default view before applying flags
        #[arg(long)]
        reset: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Type search text on stdin; the list refreshes once typing pauses
    Search {
        /// Output one JSON document per refresh
        #[arg(long)]
        json: bool,
    },

    /// Show one entry in detail
    #[command(visible_alias = "s")]
    Show {
        /// Catalog number
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add or remove a favorite
    Fav {
        /// Catalog number
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List favorites
    Favs {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show, save or clear the note for an entry
    Note {
        /// Catalog number
        id: u32,

        /// Note text (saved when given)
        text: Vec<String>,

        /// Remove the note
        #[arg(long, conflicts_with = "text")]
        clear: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the type vocabulary
    Types {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the query string of the current view
    Url {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Switch to the view encoded by a query string (e.g. "q=char&sort=name")
    Open {
        /// Query string, with or without a leading '?'
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Go back to the previous view
    Back {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Go forward to the next view
    Forward {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or set the color theme
    Theme {
        /// dark, light or toggle
        #[arg(value_parser = parse_theme_arg)]
        value: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Key (api.url, api.timeout, list.page_size, search.debounce_ms)
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Key (api.url, api.timeout, list.page_size, search.debounce_ms)
        key: String,
        /// Value to set
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            ListOptions, cmd_back, cmd_config_get, cmd_config_set, cmd_config_show, cmd_fav,
            cmd_favs, cmd_forward, cmd_list, cmd_note, cmd_open, cmd_search, cmd_show, cmd_theme,
            cmd_types, cmd_url,
        };

        match self {
            Commands::List {
                search,
                type_filter,
                sort,
                page,
                view,
                reset,
                json,
            } => {
                cmd_list(ListOptions {
                    search,
                    type_filter,
                    sort,
                    page,
                    view,
                    reset,
                    json,
                })
                .await
            }
            Commands::Search { json } => cmd_search(json).await,
            Commands::Show { id, json } => cmd_show(id, json).await,
            Commands::Fav { id, json } => cmd_fav(id, json),
            Commands::Favs { json } => cmd_favs(json),
            Commands::Note {
                id,
                text,
                clear,
                json,
            } => cmd_note(id, &text, clear, json),
            Commands::Types { json } => cmd_types(json).await,
            Commands::Url { json } => cmd_url(json),
            Commands::Open { query, json } => cmd_open(&query, json),
            Commands::Back { json } => cmd_back(json),
            Commands::Forward { json } => cmd_forward(json),
            Commands::Theme { value, json } => cmd_theme(value.as_deref(), json),
            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_sort(s: &str) -> Result<SortKey, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "sort",
        SortKey::ALL_STRINGS,
    )
}

fn parse_view(s: &str) -> Result<ViewMode, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "view",
        ViewMode::ALL_STRINGS,
    )
}

fn parse_theme_arg(s: &str) -> Result<String, String> {
    if s.eq_ignore_ascii_case("toggle") || s.parse::<Theme>().is_ok() {
        Ok(s.to_lowercase())
    } else {
        Err("Invalid theme. Must be one of: dark, light, toggle".to_string())
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "dex", &mut io::stdout());
}
