//! Sneaker configuration value object and partial updates.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{CustomText, HexColor, Material};

/// A colorable part of the sneaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    Sole,
    Upper,
    Laces,
    Logo,
}

impl Part {
    /// Every part, in sidebar order.
    pub const ALL: [Self; 4] = [Self::Sole, Self::Upper, Self::Laces, Self::Logo];

    /// JSON key used for this part.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sole => "sole",
            Self::Upper => "upper",
            Self::Laces => "laces",
            Self::Logo => "logo",
        }
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Part {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|part| part.key() == s)
            .ok_or_else(|| format!("invalid part: {s}"))
    }
}

/// One complete sneaker design: four part colors, a material and optional text.
///
/// This is also the JSON blob stored in the `configuration` column of saved
/// designs and the `default_config` column of products:
///
/// ```json
/// {"sole":"#1a1a1a","upper":"#ffffff","laces":"#000000","logo":"#00a8ff","material":"matte","customText":""}
/// ```
///
/// An empty or absent `customText` deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SneakerConfiguration {
    pub sole: HexColor,
    pub upper: HexColor,
    pub laces: HexColor,
    pub logo: HexColor,
    #[serde(default)]
    pub material: Material,
    #[serde(
        default,
        deserialize_with = "empty_text_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_text: Option<CustomText>,
}

impl SneakerConfiguration {
    /// The application's built-in starting design.
    #[must_use]
    pub fn builtin_default() -> Self {
        Self {
            sole: HexColor::known("#1a1a1a"),
            upper: HexColor::known("#ffffff"),
            laces: HexColor::known("#000000"),
            logo: HexColor::known("#00a8ff"),
            material: Material::Matte,
            custom_text: None,
        }
    }

    /// Color currently assigned to a part.
    #[must_use]
    pub const fn color(&self, part: Part) -> &HexColor {
        match part {
            Part::Sole => &self.sole,
            Part::Upper => &self.upper,
            Part::Laces => &self.laces,
            Part::Logo => &self.logo,
        }
    }

    /// Custom text, or `""` when none is set.
    #[must_use]
    pub fn text(&self) -> &str {
        self.custom_text.as_ref().map_or("", CustomText::as_str)
    }

    fn color_mut(&mut self, part: Part) -> &mut HexColor {
        match part {
            Part::Sole => &mut self.sole,
            Part::Upper => &mut self.upper,
            Part::Laces => &mut self.laces,
            Part::Logo => &mut self.logo,
        }
    }
}

impl Default for SneakerConfiguration {
    fn default() -> Self {
        Self::builtin_default()
    }
}

fn empty_text_as_none<'de, D>(deserializer: D) -> Result<Option<CustomText>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<CustomText>::deserialize(deserializer)?;
    Ok(text.filter(|t| !t.is_empty()))
}

/// A subset of configuration fields to overlay onto the current design.
///
/// Fields left as `None` are not touched. `custom_text` is doubly optional:
/// `Some(None)` clears the text, `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sole: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laces: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<Option<CustomText>>,
}

impl ConfigurationPatch {
    /// Patch a single part color.
    #[must_use]
    pub fn color(part: Part, color: HexColor) -> Self {
        let mut patch = Self::default();
        match part {
            Part::Sole => patch.sole = Some(color),
            Part::Upper => patch.upper = Some(color),
            Part::Laces => patch.laces = Some(color),
            Part::Logo => patch.logo = Some(color),
        }
        patch
    }

    #[must_use]
    pub const fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Set (or with `None`, clear) the custom text.
    #[must_use]
    pub fn with_custom_text(mut self, text: Option<CustomText>) -> Self {
        self.custom_text = Some(text.filter(|t| !t.is_empty()));
        self
    }

    /// Whether applying this patch would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sole.is_none()
            && self.upper.is_none()
            && self.laces.is_none()
            && self.logo.is_none()
            && self.material.is_none()
            && self.custom_text.is_none()
    }

    /// Overlay the present fields onto `target`.
    pub fn apply_to(self, target: &mut SneakerConfiguration) {
        let colors = [
            (Part::Sole, self.sole),
            (Part::Upper, self.upper),
            (Part::Laces, self.laces),
            (Part::Logo, self.logo),
        ];
        for (part, color) in colors {
            if let Some(color) = color {
                *target.color_mut(part) = color;
            }
        }
        if let Some(material) = self.material {
            target.material = material;
        }
        if let Some(text) = self.custom_text {
            target.custom_text = text;
        }
    }
}
