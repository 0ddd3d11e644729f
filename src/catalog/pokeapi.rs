//! PokeAPI v2 implementation of [`CatalogSource`].

use std::time::Duration;

use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{DexError, Result};

use super::error::ApiError;
use super::{Ability, CatalogEntry, CatalogSource, PageResult, Stat, TypeName};

/// Large enough to return every type in one request.
const TYPE_VOCABULARY_LIMIT: u32 = 100;

/// Catalog client backed by the public PokeAPI (or any server with its shape).
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client from the configured base URL and timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_url(), config.request_timeout())
    }

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .user_agent(concat!("dexplorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DexError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET `url` and decode the body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::with_status(url, status).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::from_reqwest(url, e))?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogSource for PokeApiClient {
    async fn fetch_page(&self, offset: u64, limit: u32) -> Result<PageResult> {
        let url = self.endpoint(&format!("pokemon?offset={offset}&limit={limit}"));
        let list: RawList = self.get_json(&url).await?;

        // Each summary only carries a name and a URL; dereference them all,
        // and drop the page if any one fails.
        let entries = try_join_all(
            list.results
                .iter()
                .map(|summary| self.get_json::<RawPokemon>(&summary.url)),
        )
        .await?
        .into_iter()
        .map(CatalogEntry::from)
        .collect();

        Ok(PageResult {
            entries,
            total_count: list.count,
        })
    }

    async fn fetch_type_vocabulary(&self) -> Result<Vec<TypeName>> {
        let url = self.endpoint(&format!("type?limit={TYPE_VOCABULARY_LIMIT}"));
        let list: RawList = self.get_json(&url).await?;
        Ok(list
            .results
            .into_iter()
            .map(|r| TypeName { name: r.name })
            .collect())
    }

    async fn fetch_entry_by_id(&self, id: u32) -> Result<CatalogEntry> {
        let url = self.endpoint(&format!("pokemon/{id}"));
        let raw: RawPokemon = self.get_json(&url).await?;
        Ok(raw.into())
    }
}

// Remote shapes. Only the fields we read are declared.

#[derive(Debug, Deserialize)]
struct RawList {
    #[serde(default)]
    count: u64,
    #[serde(default)]
    results: Vec<RawResource>,
}

#[derive(Debug, Deserialize)]
struct RawResource {
    name: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct RawPokemon {
    id: u32,
    name: String,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    base_experience: Option<u32>,
    #[serde(default)]
    types: Vec<RawTypeSlot>,
    #[serde(default)]
    sprites: RawSprites,
    #[serde(default)]
    stats: Vec<RawStat>,
    #[serde(default)]
    abilities: Vec<RawAbilitySlot>,
}

#[derive(Debug, Deserialize)]
struct RawTypeSlot {
    #[serde(default)]
    slot: u8,
    #[serde(rename = "type")]
    kind: RawResource,
}

#[derive(Debug, Default, Deserialize)]
struct RawSprites {
    front_default: Option<String>,
    #[serde(default)]
    other: Option<RawOtherSprites>,
}

#[derive(Debug, Deserialize)]
struct RawOtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<RawArtwork>,
}

#[derive(Debug, Deserialize)]
struct RawArtwork {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawStat {
    base_stat: u32,
    stat: RawResource,
}

#[derive(Debug, Deserialize)]
struct RawAbilitySlot {
    ability: RawResource,
    #[serde(default)]
    is_hidden: bool,
}

impl From<RawPokemon> for CatalogEntry {
    fn from(mut raw: RawPokemon) -> Self {
        raw.types.sort_by_key(|t| t.slot);

        let artwork = raw
            .sprites
            .other
            .and_then(|o| o.official_artwork)
            .and_then(|a| a.front_default);

        CatalogEntry {
            id: raw.id,
            name: raw.name,
            height_dm: raw.height,
            weight_hg: raw.weight,
            types: raw.types.into_iter().map(|t| t.kind.name).collect(),
            image_url: artwork.or(raw.sprites.front_default),
            stats: raw
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    base_value: s.base_stat,
                })
                .collect(),
            abilities: raw
                .abilities
                .into_iter()
                .map(|a| Ability {
                    name: a.ability.name,
                    hidden: a.is_hidden,
                })
                .collect(),
            base_experience: raw.base_experience,
        }
    }
}
