//! Style pipeline wiring: the transform list handed to the host bundler,
//! and the transforms themselves.
use log::debug;

use crate::errors::StyleError;

pub mod grid;
pub mod px_to_rem;

pub use px_to_rem::PxToRemOptions;

/// One CSS transform in the host's style pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleTransform {
    /// `lost-column` layout-grid syntax. No parameters.
    LayoutGrid,
    /// Pixel lengths to root-relative units.
    PxToRem(PxToRemOptions),
}

/// The host's mutable style pipeline configuration.
#[derive(Debug, Clone, Default)]
pub struct StylePipeline {
    transforms: Vec<StyleTransform>,
}

impl StylePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append transforms to the pipeline, preserving order.
    pub fn merge(&mut self, transforms: impl IntoIterator<Item = StyleTransform>) {
        self.transforms.extend(transforms);
    }

    pub fn transforms(&self) -> &[StyleTransform] {
        &self.transforms
    }

    /// Run the configured transforms over a stylesheet, in order.
    pub fn apply(&self, css: &str) -> Result<String, StyleError> {
        let mut css = css.to_string();
        for transform in &self.transforms {
            css = match transform {
                StyleTransform::LayoutGrid => grid::apply(&css)?,
                StyleTransform::PxToRem(options) => px_to_rem::apply(&css, options)?,
            };
        }
        Ok(css)
    }
}

/// Wire this site's transforms into the host pipeline.
///
/// Invoked by the host once at bundler setup. Grid syntax is expanded before
/// pixel lengths are converted, so gutters come out in rem like everything
/// else.
pub fn configure_styles(pipeline: &mut StylePipeline) {
    pipeline.merge([
        StyleTransform::LayoutGrid,
        StyleTransform::PxToRem(PxToRemOptions {
            root_value: 16.0,
            unit_precision: 5,
            props: [
                "font",
                "font-size",
                "line-height",
                "letter-spacing",
                "margin",
                "margin-top",
                "margin-left",
                "margin-bottom",
                "margin-right",
                "padding",
                "padding-top",
                "padding-left",
                "padding-bottom",
                "padding-right",
                "border-radius",
                "width",
                "max-width",
            ]
            .map(String::from)
            .to_vec(),
            selector_deny_list: Vec::new(),
            media_query: false,
            min_pixel_value: 0.0,
        }),
    ]);
    debug!(target: "styles", "style pipeline configured");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_styles_appends_both_transforms_in_order() {
        let mut pipeline = StylePipeline::new();
        configure_styles(&mut pipeline);

        assert_eq!(pipeline.transforms().len(), 2);
        assert_eq!(pipeline.transforms()[0], StyleTransform::LayoutGrid);
        let StyleTransform::PxToRem(options) = &pipeline.transforms()[1] else {
            panic!("second transform should convert px to rem");
        };
        assert_eq!(options.root_value, 16.0);
        assert_eq!(options.unit_precision, 5);
        assert_eq!(options.props.len(), 17);
        assert!(options.selector_deny_list.is_empty());
        assert!(!options.media_query);
        assert_eq!(options.min_pixel_value, 0.0);
    }

    #[test]
    fn pipeline_applies_transforms_in_sequence() {
        let mut pipeline = StylePipeline::new();
        configure_styles(&mut pipeline);

        let css = "div { lost-column: 1/2; margin-top: 32px; }";
        let out = pipeline.apply(css).unwrap();

        assert!(out.contains("margin-top: 2rem"), "{out}");
        assert!(out.contains("float: left"), "{out}");
        assert!(!out.contains("lost-column"), "{out}");
    }
}
