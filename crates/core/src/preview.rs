//! Static SVG rendering of a sneaker configuration.
//!
//! The drawing is a side profile on a 400x200 canvas. Part colors are used
//! as-is; custom text is escaped by the template and drawn on the quarter
//! panel. The markup lives in `templates/sneaker.svg`.

use askama::Template;

use crate::configuration::SneakerConfiguration;

/// Error returned when the preview template fails to render.
pub use askama::Error as RenderError;

const SOLE_PATH: &str = "M40 160 C40 160, 60 175, 200 175 C340 175, 360 160, 360 160 L360 150 \
     C360 150, 340 165, 200 165 C60 165, 40 150, 40 150 Z";

const UPPER_PATH: &str = "M50 150 C50 120, 70 80, 120 60 C170 40, 220 45, 280 55 \
     C340 65, 360 90, 360 120 L360 150 C360 150, 340 160, 200 160 C60 160, 50 150, 50 150 Z";

const LOGO_PATH: &str =
    "M100 130 C130 115, 200 95, 280 85 C260 95, 200 110, 130 125 C115 128, 105 130, 100 130 Z";

const TONGUE_PATH: &str = "M75 100 C70 85, 80 55, 115 45 L125 50 C95 60, 85 85, 88 98 Z";

const HEEL_TAB_PATH: &str = "M50 140 C50 130, 52 120, 55 115 L60 118 C58 123, 56 130, 56 138 Z";

const LACE_STROKES: [&str; 4] = [
    "M85 98 L125 78",
    "M90 92 L128 73",
    "M95 86 L130 68",
    "M100 80 L132 63",
];

const EYELETS: [(u16, u16); 4] = [(85, 98), (125, 78), (90, 92), (128, 73)];

/// SVG document template. Output is HTML-escaped, which covers XML.
#[derive(Template)]
#[template(path = "sneaker.svg", escape = "html")]
struct SneakerSvg<'a> {
    config: &'a SneakerConfiguration,
    text: Option<&'a str>,
    shiny: bool,
    sole_path: &'static str,
    upper_path: &'static str,
    logo_path: &'static str,
    tongue_path: &'static str,
    heel_tab_path: &'static str,
    lace_strokes: [&'static str; 4],
    eyelets: [(u16, u16); 4],
}

impl<'a> SneakerSvg<'a> {
    fn new(config: &'a SneakerConfiguration) -> Self {
        let text = config.text();
        Self {
            config,
            text: (!text.is_empty()).then_some(text),
            shiny: config.material.is_shiny(),
            sole_path: SOLE_PATH,
            upper_path: UPPER_PATH,
            logo_path: LOGO_PATH,
            tongue_path: TONGUE_PATH,
            heel_tab_path: HEEL_TAB_PATH,
            lace_strokes: LACE_STROKES,
            eyelets: EYELETS,
        }
    }
}

/// Render `config` as a standalone SVG document.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_svg(config: &SneakerConfiguration) -> Result<String, RenderError> {
    SneakerSvg::new(config).render()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{CustomText, HexColor, Material};

    #[test]
    fn test_default_render_uses_part_colors() {
        let svg = render_svg(&SneakerConfiguration::builtin_default()).unwrap();
        assert!(svg.starts_with(r#"<svg viewBox="0 0 400 200""#));
        assert!(svg.contains(r##"id="sole" d="M40 160"##));
        assert!(svg.contains(r##"fill="#1a1a1a""##));
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(svg.contains(r##"stroke="#000000""##));
        assert!(svg.contains(r##"fill="#00a8ff""##));
        assert_eq!(svg.matches("<circle").count(), 4);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_all_lace_strokes_present() {
        let svg = render_svg(&SneakerConfiguration::builtin_default()).unwrap();
        for stroke in LACE_STROKES {
            assert!(svg.contains(stroke), "missing {stroke}");
        }
    }

    #[test]
    fn test_matte_has_no_gloss() {
        let svg = render_svg(&SneakerConfiguration::builtin_default()).unwrap();
        assert!(!svg.contains("shinyGradient"));
    }

    #[test]
    fn test_shiny_adds_gloss_overlay() {
        let config = SneakerConfiguration {
            material: Material::Shiny,
            ..SneakerConfiguration::builtin_default()
        };
        let svg = render_svg(&config).unwrap();
        assert!(svg.contains(r#"<linearGradient id="shinyGradient""#));
        assert!(svg.contains(r#"fill="url(#shinyGradient)""#));
    }

    #[test]
    fn test_custom_text_is_escaped() {
        let config = SneakerConfiguration {
            custom_text: Some(CustomText::parse("<b>&\"x'").unwrap()),
            ..SneakerConfiguration::builtin_default()
        };
        let svg = render_svg(&config).unwrap();
        assert!(svg.contains(">&lt;b&gt;&amp;"));
        assert!(!svg.contains("<b>"));
        assert!(!svg.contains("&\"x'"));
    }

    #[test]
    fn test_no_text_element_without_text() {
        let svg = render_svg(&SneakerConfiguration::builtin_default()).unwrap();
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn test_colors_are_verbatim() {
        let config = SneakerConfiguration {
            upper: HexColor::parse("#ABCDEF").unwrap(),
            ..SneakerConfiguration::builtin_default()
        };
        assert!(render_svg(&config).unwrap().contains(r##"id="upper" d="M50 150"##));
        assert!(render_svg(&config).unwrap().contains(r##"fill="#ABCDEF""##));
    }

    #[test]
    fn test_plain_text_drawn_verbatim() {
        let config = SneakerConfiguration {
            custom_text: Some(CustomText::parse("RUN 24").unwrap()),
            ..SneakerConfiguration::builtin_default()
        };
        let svg = render_svg(&config).unwrap();
        assert!(svg.contains(r#"<text id="custom-text""#));
        assert!(svg.contains(">RUN 24</text>"));
    }
}
