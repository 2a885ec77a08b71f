//! Product configuration resolution engine
//!
//! Given a product definition and the buyer's current variant selection,
//! computes the configured price, the effective gallery and hero image,
//! parameter override resolution, the quick-spec summary and the grouped
//! spec table. Every resolver is a pure function of `(product, selection)`
//! and recomputes in full on each call; only [`Selection`] is stateful,
//! mutated one group at a time.

pub mod audit;
pub mod catalog;
pub mod config;
pub mod features;
pub mod images;
pub mod overrides;
pub mod pricing;
pub mod quickspec;
pub mod selection;
pub mod session;
pub mod spec_table;

// Re-exports
pub use audit::{OverrideConflict, audit_overrides};
pub use catalog::CatalogService;
pub use config::Config;
pub use features::{FeatureEntry, feature_list};
pub use images::{effective_hero, effective_images};
pub use overrides::resolve_overrides;
pub use pricing::{PriceQuote, format_amount, quote, total_price};
pub use quickspec::{QuickSpecEntry, quick_specs};
pub use selection::{Selection, has_variants};
pub use session::ConfigSession;
pub use spec_table::{GroupedSpecs, SpecEntry, SpecGroup, grouped_specs};
