//! Catalog Service - read-side product cache
//!
//! The engine's repository collaborator: holds fully resolved product
//! definitions in memory and hands out shared references. The engine
//! only reads; admin-side writes happen elsewhere and re-warm the cache
//! wholesale.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::error::{CatalogError, CatalogResult};
use shared::models::Product;

/// In-memory product catalog
#[derive(Clone, Default)]
pub struct CatalogService {
    products: Arc<RwLock<HashMap<String, Arc<Product>>>>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let products_count = self.products.read().len();
        f.debug_struct("CatalogService")
            .field("products_count", &products_count)
            .finish()
    }
}

impl CatalogService {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Warm the cache from a JSON array of product definitions
    pub fn load_json(&self, payload: &str) -> CatalogResult<usize> {
        let products: Vec<Product> = serde_json::from_str(payload)?;
        let count = products.len();
        for product in products {
            self.insert(product)?;
        }
        tracing::info!("Catalog: loaded {} products", count);
        Ok(count)
    }

    /// Insert a product; duplicate ids are rejected
    pub fn insert(&self, product: Product) -> CatalogResult<()> {
        let mut cache = self.products.write();
        if cache.contains_key(&product.id) {
            return Err(CatalogError::duplicate(&product.id));
        }
        cache.insert(product.id.clone(), Arc::new(product));
        Ok(())
    }

    /// Get a product by id
    pub fn get(&self, id: &str) -> Option<Arc<Product>> {
        self.products.read().get(id).cloned()
    }

    /// Get a product by id, erroring when absent
    pub fn require(&self, id: &str) -> CatalogResult<Arc<Product>> {
        self.get(id).ok_or_else(|| CatalogError::not_found(id))
    }

    /// List all products, sorted by name for stable display
    pub fn list(&self) -> Vec<Arc<Product>> {
        let cache = self.products.read();
        let mut products: Vec<_> = cache.values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }
}
