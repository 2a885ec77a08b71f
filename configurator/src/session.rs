//! Configuration Session
//!
//! Ties one product to one buyer's current selection and the display
//! configuration. Selection changes go through [`ConfigSession::select`]
//! and every view recomputes in full from `(product, selection)` on each
//! call; nothing is cached. One session per buyer per product; a session
//! is not meant to be shared across concurrent consumers.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use shared::error::CatalogResult;
use shared::models::{Image, Product};

use crate::catalog::CatalogService;
use crate::config::Config;
use crate::features::{FeatureEntry, feature_list};
use crate::images::{effective_hero, effective_images};
use crate::overrides::resolve_overrides;
use crate::pricing::{PriceQuote, quote, total_price};
use crate::quickspec::{QuickSpecEntry, quick_specs};
use crate::selection::{Selection, has_variants};
use crate::spec_table::{GroupedSpecs, grouped_specs};

/// One buyer configuring one product
#[derive(Debug, Clone)]
pub struct ConfigSession {
    product: Arc<Product>,
    selection: Selection,
    config: Config,
}

impl ConfigSession {
    /// Start a session with the default selection seeded
    pub fn new(product: Arc<Product>, config: Config) -> Self {
        let selection = Selection::initialize(&product);
        Self {
            product,
            selection,
            config,
        }
    }

    /// Open a session for a catalog product
    pub fn open(catalog: &CatalogService, product_id: &str, config: Config) -> CatalogResult<Self> {
        Ok(Self::new(catalog.require(product_id)?, config))
    }

    /// The only mutation entry point: choose an option for a group
    pub fn select(&mut self, group_id: &str, option_id: &str) {
        self.selection.select(group_id, option_id);
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn has_variants(&self) -> bool {
        has_variants(&self.product)
    }

    pub fn total_price(&self) -> Decimal {
        total_price(&self.product, &self.selection)
    }

    pub fn quote(&self) -> PriceQuote {
        quote(&self.product, &self.selection)
    }

    pub fn overrides(&self) -> HashMap<String, String> {
        resolve_overrides(&self.product, &self.selection)
    }

    pub fn images(&self) -> &[Image] {
        effective_images(&self.product, &self.selection)
    }

    pub fn hero(&self) -> Option<&Image> {
        effective_hero(&self.product, &self.selection)
    }

    pub fn quick_specs(&self) -> Vec<QuickSpecEntry> {
        quick_specs(&self.product, &self.selection, &self.config)
    }

    pub fn grouped_specs(&self) -> GroupedSpecs {
        grouped_specs(&self.product, &self.selection, &self.config)
    }

    pub fn features(&self) -> Vec<FeatureEntry> {
        feature_list(&self.product, &self.config)
    }
}
