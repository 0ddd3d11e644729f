//! Remote catalog access.
//!
//! This module defines the typed records the rest of the crate works with
//! and the [`CatalogSource`] trait that fetches them. The PokeAPI
//! implementation lives in [`pokeapi`]; remote JSON shapes never leave it.

pub mod error;
pub mod pokeapi;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use pokeapi::PokeApiClient;

/// A fully hydrated catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    /// Height in decimetres
    pub height_dm: u32,
    /// Weight in hectograms
    pub weight_hg: u32,
    /// Type names in slot order
    pub types: Vec<String>,
    /// Official artwork, falling back to the default front sprite
    pub image_url: Option<String>,
    pub stats: Vec<Stat>,
    pub abilities: Vec<Ability>,
    pub base_experience: Option<u32>,
}

impl CatalogEntry {
    /// Minimal entry, mostly useful for tests and fixtures.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            height_dm: 0,
            weight_hg: 0,
            types: Vec::new(),
            image_url: None,
            stats: Vec::new(),
            abilities: Vec::new(),
            base_experience: None,
        }
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_size(mut self, height_dm: u32, weight_hg: u32) -> Self {
        self.height_dm = height_dm;
        self.weight_hg = weight_hg;
        self
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    pub fn height_m(&self) -> f64 {
        f64::from(self.height_dm) / 10.0
    }

    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight_hg) / 10.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub base_value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub hidden: bool,
}

/// One element of the type vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeName {
    pub name: String,
}

/// Outcome of one list fetch at a given offset and limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub entries: Vec<CatalogEntry>,
    pub total_count: u64,
}

/// Source of catalog data.
///
/// Implementations never cache and never touch visible state; supersession
/// of stale requests is handled by the caller (see `crate::session`).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of fully hydrated entries. Fails as a whole if any
    /// entry of the page cannot be hydrated.
    async fn fetch_page(&self, offset: u64, limit: u32) -> Result<PageResult>;

    /// Fetch every valid type name.
    async fn fetch_type_vocabulary(&self) -> Result<Vec<TypeName>>;

    /// Fetch a single entry, independent of pagination.
    async fn fetch_entry_by_id(&self, id: u32) -> Result<CatalogEntry>;
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for Arc<T> {
    async fn fetch_page(&self, offset: u64, limit: u32) -> Result<PageResult> {
        (**self).fetch_page(offset, limit).await
    }

    async fn fetch_type_vocabulary(&self) -> Result<Vec<TypeName>> {
        (**self).fetch_type_vocabulary().await
    }

    async fn fetch_entry_by_id(&self, id: u32) -> Result<CatalogEntry> {
        (**self).fetch_entry_by_id(id).await
    }
}
