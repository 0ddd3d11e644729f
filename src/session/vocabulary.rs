use tokio::sync::OnceCell;

use crate::catalog::{CatalogSource, TypeName};
use crate::error::Result;

/// Session-wide cache of the type vocabulary.
///
/// The first successful fetch is kept for the rest of the session. A failed
/// fetch is not cached, so calling [`TypeVocabulary::get`] again retries it.
pub struct TypeVocabulary<C> {
    source: C,
    cell: OnceCell<Vec<TypeName>>,
}

impl<C: CatalogSource> TypeVocabulary<C> {
    pub fn new(source: C) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Result<&[TypeName]> {
        let types = self
            .cell
            .get_or_try_init(|| self.source.fetch_type_vocabulary())
            .await?;
        Ok(types.as_slice())
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Whether `name` is a known type. Loads the vocabulary if needed.
    pub async fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.get().await?.iter().any(|t| t.name == name))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::session::testing::StaticCatalog;

    #[tokio::test]
    async fn test_loaded_once() {
        let catalog = Arc::new(StaticCatalog::starters());
        let vocabulary = TypeVocabulary::new(catalog.clone());

        assert!(!vocabulary.is_loaded());
        assert_eq!(vocabulary.get().await.unwrap().len(), 4);
        vocabulary.get().await.unwrap();
        assert!(vocabulary.contains("fire").await.unwrap());
        assert!(!vocabulary.contains("shadow").await.unwrap());

        assert_eq!(catalog.type_calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let catalog = Arc::new(StaticCatalog::starters());
        catalog.fail_next(1);
        let vocabulary = TypeVocabulary::new(catalog.clone());

        assert!(vocabulary.get().await.is_err());
        assert!(!vocabulary.is_loaded());

        assert!(vocabulary.get().await.is_ok());
        assert_eq!(catalog.type_calls(), 2);
    }
}
