use serde::{Deserialize, Serialize};

/// Favorite entry ids in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<u32>", into = "Vec<u32>")]
pub struct FavoriteSet(Vec<u32>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    /// Add `id` if absent, remove it if present. Returns whether it is now present.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.contains(id) {
            self.0.retain(|&existing| existing != id);
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn ids(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<u32> for FavoriteSet {
    /// Duplicates after the first occurrence are dropped.
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = FavoriteSet::new();
        for id in iter {
            if !set.contains(id) {
                set.0.push(id);
            }
        }
        set
    }
}

impl From<Vec<u32>> for FavoriteSet {
    fn from(ids: Vec<u32>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<FavoriteSet> for Vec<u32> {
    fn from(set: FavoriteSet) -> Self {
        set.0
    }
}
