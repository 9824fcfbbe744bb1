//! Upper material finish.

use serde::{Deserialize, Serialize};

/// Surface finish applied to the whole sneaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    #[default]
    Matte,
    Shiny,
}

impl Material {
    /// Whether the preview should draw the gloss overlay.
    #[must_use]
    pub const fn is_shiny(self) -> bool {
        matches!(self, Self::Shiny)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matte => "matte",
            Self::Shiny => "shiny",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Material {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matte" => Ok(Self::Matte),
            "shiny" => Ok(Self::Shiny),
            _ => Err(format!("invalid material: {s}")),
        }
    }
}
