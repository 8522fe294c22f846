//! In-memory catalog service
//!
//! The catalog is immutable after construction, so it is shared without locks.

use async_trait::async_trait;
use std::sync::Arc;

use artistly_shared::{Artist, ArtistId, Component, Taxonomy, component_info};
use crate::core::find_artist;
use crate::traits::CatalogSource;

#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    artists: Arc<[Artist]>,
    taxonomy: Arc<Taxonomy>,
}

impl InMemoryCatalog {
    /// Wrap a catalog; the published taxonomy is extended with its labels
    pub fn new(artists: Vec<Artist>) -> Self {
        let taxonomy = Taxonomy::standard().extended_with(&artists);
        component_info!(
            Component::Catalog,
            "📚 Catalog loaded: {} artists, {} locations, {} price ranges",
            artists.len(),
            taxonomy.locations.len(),
            taxonomy.price_ranges.len()
        );

        Self {
            artists: artists.into(),
            taxonomy: Arc::new(taxonomy),
        }
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new(artistly_shared::seed::mock_artists())
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn artists(&self) -> Vec<Artist> {
        self.artists.to_vec()
    }

    async fn artist(&self, id: &ArtistId) -> Option<Artist> {
        find_artist(&self.artists, id).cloned()
    }

    async fn taxonomy(&self) -> Taxonomy {
        self.taxonomy.as_ref().clone()
    }
}
