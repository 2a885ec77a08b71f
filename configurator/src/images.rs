//! Image Resolver
//!
//! The active gallery is the last selected option (in ascending group
//! order) that supplies a non-empty image set, falling back to the
//! product's own gallery. Hero resolution walks a three-tier chain:
//! flagged hero within the active gallery, then the product's designated
//! hero within the base gallery, then the first active image.

use shared::models::{Image, Product};

use crate::selection::Selection;

/// Active image gallery for the current selection
pub fn effective_images<'p>(product: &'p Product, selection: &Selection) -> &'p [Image] {
    let mut result: Option<&'p [Image]> = None;
    for group in product.groups_by_order() {
        if let Some(option) = selection.selected_option(group) {
            if !option.images.is_empty() {
                result = Some(&option.images);
            }
        }
    }
    result.unwrap_or(&product.images)
}

/// Hero image for the current selection.
///
/// Tier 2 deliberately consults `product.images`, not the active
/// gallery: a variant gallery takes priority for what to show, but the
/// base product's designated hero wins over "first of whatever gallery
/// is active".
pub fn effective_hero<'p>(product: &'p Product, selection: &Selection) -> Option<&'p Image> {
    let imgs = effective_images(product, selection);

    if let Some(hero) = imgs.iter().find(|i| i.is_hero) {
        return Some(hero);
    }

    if let Some(hero_id) = &product.hero_image_id {
        if let Some(hero) = product.images.iter().find(|i| &i.id == hero_id) {
            return Some(hero);
        }
    }

    imgs.first()
}
