//! Sneaker products offered for customization.

use serde::{Deserialize, Serialize};

use crate::configuration::SneakerConfiguration;
use crate::types::{Price, ProductId};

/// A purchasable sneaker template.
///
/// Immutable once loaded. Selecting a product replaces the active
/// configuration with `default_config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub base_price: Price,
    pub default_config: SneakerConfiguration,
}
