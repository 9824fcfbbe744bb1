//! The design state store.
//!
//! Holds exactly one active [`SneakerConfiguration`] and the metadata of the
//! currently selected product. Fields are private: every mutation goes through
//! [`DesignStore::merge_update`], [`DesignStore::replace_all`],
//! [`DesignStore::select_product`] or [`DesignStore::reset`].
//!
//! The store does no validation. Callers check things like the contrast guard
//! before calling [`DesignStore::merge_update`].

use crate::configuration::{ConfigurationPatch, SneakerConfiguration};
use crate::product::Product;
use crate::types::{Price, ProductId};

/// Product name shown before any product has been loaded.
pub const FALLBACK_PRODUCT_NAME: &str = "Classic Runner";

/// Price shown before any product has been loaded, in cents.
pub const FALLBACK_PRICE_CENTS: i64 = 14_999;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveProduct {
    id: Option<ProductId>,
    name: String,
    base_price: Price,
}

/// Single-owner container for the active design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignStore {
    configuration: SneakerConfiguration,
    product: ActiveProduct,
}

impl DesignStore {
    /// A store holding the built-in default configuration and no product.
    #[must_use]
    pub fn new() -> Self {
        Self {
            configuration: SneakerConfiguration::builtin_default(),
            product: ActiveProduct {
                id: None,
                name: FALLBACK_PRODUCT_NAME.to_owned(),
                base_price: Price::from_cents(FALLBACK_PRICE_CENTS),
            },
        }
    }

    #[must_use]
    pub const fn configuration(&self) -> &SneakerConfiguration {
        &self.configuration
    }

    /// Owned copy of the active configuration, taken at save time.
    #[must_use]
    pub fn snapshot(&self) -> SneakerConfiguration {
        self.configuration.clone()
    }

    #[must_use]
    pub const fn product_id(&self) -> Option<ProductId> {
        self.product.id
    }

    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product.name
    }

    #[must_use]
    pub const fn base_price(&self) -> Price {
        self.product.base_price
    }

    /// Overlay the fields present in `patch`; everything else is kept.
    pub fn merge_update(&mut self, patch: ConfigurationPatch) {
        patch.apply_to(&mut self.configuration);
    }

    /// Discard the active configuration and install `configuration` verbatim.
    pub fn replace_all(&mut self, configuration: SneakerConfiguration) {
        self.configuration = configuration;
    }

    /// Switch product: metadata and configuration are replaced together.
    pub fn select_product(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        default_configuration: SneakerConfiguration,
    ) {
        self.product = ActiveProduct {
            id: Some(id),
            name: name.into(),
            base_price: price,
        };
        self.configuration = default_configuration;
    }

    /// Convenience for [`Self::select_product`] with a loaded [`Product`].
    pub fn select(&mut self, product: &Product) {
        self.select_product(
            product.id,
            product.name.clone(),
            product.base_price,
            product.default_config.clone(),
        );
    }

    /// Restore the built-in default configuration.
    ///
    /// This ignores the selected product's own defaults and leaves the
    /// product metadata as is.
    pub fn reset(&mut self) {
        self.configuration = SneakerConfiguration::builtin_default();
    }
}

impl Default for DesignStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::configuration::Part;
    use crate::types::{CustomText, HexColor, Material};

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    fn runner_defaults() -> SneakerConfiguration {
        SneakerConfiguration {
            sole: hex("#222222"),
            upper: hex("#ff6600"),
            laces: hex("#ffffff"),
            logo: hex("#000000"),
            material: Material::Shiny,
            custom_text: Some(CustomText::parse("RUN").unwrap()),
        }
    }

    #[test]
    fn test_new_store_has_fallback_product() {
        let store = DesignStore::new();
        assert_eq!(store.product_id(), None);
        assert_eq!(store.product_name(), "Classic Runner");
        assert_eq!(store.base_price().to_string(), "$149.99");
        assert_eq!(store.configuration(), &SneakerConfiguration::builtin_default());
    }

    #[test]
    fn test_merge_keeps_omitted_fields() {
        let mut store = DesignStore::new();
        store.replace_all(runner_defaults());

        store.merge_update(ConfigurationPatch::color(Part::Upper, hex("#0000FF")));

        let config = store.configuration();
        assert_eq!(config.upper.as_str(), "#0000FF");
        assert_eq!(config.sole.as_str(), "#222222");
        assert_eq!(config.laces.as_str(), "#ffffff");
        assert_eq!(config.logo.as_str(), "#000000");
        assert_eq!(config.material, Material::Shiny);
        assert_eq!(config.text(), "RUN");
    }

    #[test]
    fn test_merge_last_write_wins() {
        let mut store = DesignStore::new();
        store.merge_update(ConfigurationPatch::color(Part::Sole, hex("#111111")));
        store.merge_update(ConfigurationPatch::color(Part::Sole, hex("#222222")));
        assert_eq!(store.configuration().sole.as_str(), "#222222");
    }

    #[test]
    fn test_merge_every_subset_of_parts() {
        let base = runner_defaults();
        let replacement = hex("#abcdef");

        for mask in 0_u8..16 {
            let mut store = DesignStore::new();
            store.replace_all(base.clone());

            let pick = |bit: u8| (mask & (1 << bit) != 0).then(|| replacement.clone());
            store.merge_update(ConfigurationPatch {
                sole: pick(0),
                upper: pick(1),
                laces: pick(2),
                logo: pick(3),
                ..ConfigurationPatch::default()
            });

            for (bit, part) in Part::ALL.into_iter().enumerate() {
                let expected = if mask & (1 << bit) != 0 {
                    &replacement
                } else {
                    base.color(part)
                };
                assert_eq!(store.configuration().color(part), expected, "mask {mask:04b}");
            }
        }
    }

    #[test]
    fn test_replace_all_is_verbatim() {
        let mut store = DesignStore::new();
        store.replace_all(runner_defaults());
        assert_eq!(store.configuration(), &runner_defaults());
    }

    #[test]
    fn test_select_product_replaces_metadata_and_configuration() {
        let mut store = DesignStore::new();
        store.merge_update(ConfigurationPatch::color(Part::Logo, hex("#123456")));

        let id = ProductId::generate();
        store.select_product(id, "Trail Blazer", Price::from_cents(17_900), runner_defaults());

        assert_eq!(store.product_id(), Some(id));
        assert_eq!(store.product_name(), "Trail Blazer");
        assert_eq!(store.base_price(), Price::from_cents(17_900));
        assert_eq!(store.configuration(), &runner_defaults());
    }

    #[test]
    fn test_reset_ignores_product_defaults() {
        let mut store = DesignStore::new();
        let id = ProductId::generate();
        store.select_product(id, "Trail Blazer", Price::from_cents(17_900), runner_defaults());

        store.reset();

        assert_eq!(store.configuration(), &SneakerConfiguration::builtin_default());
        assert_eq!(store.product_id(), Some(id));
        assert_eq!(store.product_name(), "Trail Blazer");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = DesignStore::new();
        let snapshot = store.snapshot();
        store.merge_update(ConfigurationPatch::color(Part::Sole, hex("#999999")));
        assert_eq!(snapshot.sole.as_str(), "#1a1a1a");
    }
}
