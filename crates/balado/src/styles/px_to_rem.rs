//! Pixel-to-rem conversion over an allow-list of properties.
use std::convert::Infallible;

use lightningcss::{
    rules::CssRule,
    stylesheet::{ParserOptions, PrinterOptions, StyleSheet},
    traits::ToCss,
    values::length::LengthValue,
    visit_types,
    visitor::{Visit, VisitTypes, Visitor},
};

use crate::errors::StyleError;

/// Conversion options.
#[derive(Debug, Clone, PartialEq)]
pub struct PxToRemOptions {
    /// Pixels per rem.
    pub root_value: f32,
    /// Decimal places kept on converted values.
    pub unit_precision: u32,
    /// Properties whose pixel lengths are converted. Exact names.
    pub props: Vec<String>,
    /// Rules whose selector contains any of these fragments are skipped.
    pub selector_deny_list: Vec<String>,
    /// Convert lengths inside `@media` query parameters as well.
    pub media_query: bool,
    /// Pixel values below this magnitude are left alone.
    pub min_pixel_value: f32,
}

impl Default for PxToRemOptions {
    fn default() -> Self {
        Self {
            root_value: 16.0,
            unit_precision: 5,
            props: ["font", "font-size", "line-height", "letter-spacing"]
                .map(String::from)
                .to_vec(),
            selector_deny_list: Vec::new(),
            media_query: false,
            min_pixel_value: 0.0,
        }
    }
}

/// Convert pixel lengths to rem across a stylesheet.
pub fn apply(css: &str, options: &PxToRemOptions) -> Result<String, StyleError> {
    let mut stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|err| StyleError::Parse(err.to_string()))?;

    let mut visitor = PxToRem {
        options,
        in_converted_property: false,
    };
    let _ = stylesheet.visit(&mut visitor);

    let output = stylesheet
        .to_css(PrinterOptions::default())
        .map_err(|err| StyleError::Print(err.to_string()))?;

    Ok(output.code)
}

struct PxToRem<'a> {
    options: &'a PxToRemOptions,
    in_converted_property: bool,
}

impl PxToRem<'_> {
    fn convert(&self, px: f32) -> f32 {
        let factor = 10f32.powi(self.options.unit_precision as i32);
        (px / self.options.root_value * factor).round() / factor
    }

    fn is_denied(&self, selector: &str) -> bool {
        self.options
            .selector_deny_list
            .iter()
            .any(|fragment| selector.contains(fragment))
    }
}

impl<'i> Visitor<'i> for PxToRem<'_> {
    type Error = Infallible;

    fn visit_types(&self) -> VisitTypes {
        visit_types!(RULES | LENGTHS)
    }

    fn visit_rule(&mut self, rule: &mut CssRule<'i>) -> Result<(), Self::Error> {
        match rule {
            CssRule::Style(style) => {
                let selector = style
                    .selectors
                    .to_css_string(PrinterOptions::default())
                    .unwrap_or_default();
                if self.is_denied(&selector) {
                    return Ok(());
                }

                for property in style
                    .declarations
                    .declarations
                    .iter_mut()
                    .chain(style.declarations.important_declarations.iter_mut())
                {
                    let name = property.property_id().name().to_string();
                    self.in_converted_property =
                        self.options.props.iter().any(|prop| prop == &name);
                    property.visit_children(self)?;
                }
                self.in_converted_property = false;

                for nested in style.rules.0.iter_mut() {
                    self.visit_rule(nested)?;
                }
            }
            CssRule::Media(media) => {
                if self.options.media_query {
                    self.in_converted_property = true;
                    media.query.visit_children(self)?;
                    self.in_converted_property = false;
                }
                for nested in media.rules.0.iter_mut() {
                    self.visit_rule(nested)?;
                }
            }
            _ => rule.visit_children(self)?,
        }
        Ok(())
    }

    fn visit_length(&mut self, length: &mut LengthValue) -> Result<(), Self::Error> {
        if !self.in_converted_property {
            return Ok(());
        }
        if let LengthValue::Px(px) = *length {
            if px.abs() < self.options.min_pixel_value {
                return Ok(());
            }
            *length = LengthValue::Rem(self.convert(px));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(props: &[&str]) -> PxToRemOptions {
        PxToRemOptions {
            props: props.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn converts_listed_properties() {
        let out = apply("body { margin: 32px; }", &options(&["margin"])).unwrap();

        assert!(out.contains("2rem"), "{out}");
        assert!(!out.contains("32px"), "{out}");
    }

    #[test]
    fn leaves_unlisted_properties_alone() {
        let out = apply("body { border-width: 4px; }", &options(&["margin"])).unwrap();

        assert!(out.contains("4px"), "{out}");
    }

    #[test]
    fn rounds_to_the_configured_precision() {
        let opts = PxToRemOptions {
            root_value: 3.0,
            ..options(&["margin"])
        };
        let out = apply("body { margin: 1px; }", &opts).unwrap();

        assert!(out.contains(".33333rem"), "{out}");
    }

    #[test]
    fn respects_the_minimum_pixel_value() {
        let opts = PxToRemOptions {
            min_pixel_value: 2.0,
            ..options(&["margin"])
        };
        let out = apply("body { margin: 1px; }", &opts).unwrap();

        assert!(out.contains("1px"), "{out}");
    }

    #[test]
    fn media_query_params_stay_in_pixels_by_default() {
        let css = "@media (min-width: 768px) { p { margin: 16px; } }";
        let out = apply(css, &options(&["margin"])).unwrap();

        assert!(out.contains("768px"), "{out}");
        assert!(out.contains("1rem"), "{out}");
    }

    #[test]
    fn denied_selectors_are_skipped() {
        let opts = PxToRemOptions {
            selector_deny_list: vec![".raw".to_string()],
            ..options(&["margin"])
        };
        let out = apply(".raw { margin: 16px; } p { margin: 16px; }", &opts).unwrap();

        assert!(out.contains("16px"), "{out}");
        assert!(out.contains("1rem"), "{out}");
    }
}
