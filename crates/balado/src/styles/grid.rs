//! Layout-grid syntax: expands `lost-column` declarations into the width
//! calc, float and gutter margin they stand for.
use std::convert::Infallible;

use lightningcss::{
    properties::{
        Property, PropertyId,
        custom::{Function, Token, TokenList, TokenOrValue, UnparsedProperty},
    },
    rules::CssRule,
    stylesheet::{ParserOptions, PrinterOptions, StyleSheet},
    values::ident::Ident,
    values::length::LengthValue,
    visit_types,
    visitor::{Visit, VisitTypes, Visitor},
};

use crate::errors::StyleError;

const DEFAULT_GUTTER_PX: f32 = 30.0;

/// Expand grid declarations across a stylesheet.
pub fn apply(css: &str) -> Result<String, StyleError> {
    let mut stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|err| StyleError::Parse(err.to_string()))?;

    let _ = stylesheet.visit(&mut LayoutGrid);

    let output = stylesheet
        .to_css(PrinterOptions::default())
        .map_err(|err| StyleError::Print(err.to_string()))?;

    Ok(output.code)
}

struct LayoutGrid;

/// A parsed `lost-column: <n>/<d> [<gutter>px]` declaration.
struct Column {
    numerator: f32,
    denominator: f32,
    gutter_px: f32,
}

impl Column {
    /// `width: calc(99.9% * f - (g - g * f))`, constant-folded, plus the
    /// float and gutter margin.
    fn expand<'a>(&self) -> [Property<'a>; 3] {
        let fraction = self.numerator / self.denominator;
        let percent = 0.999 * fraction;
        let offset_px = self.gutter_px - self.gutter_px * fraction;

        [
            unparsed(
                PropertyId::Width,
                vec![TokenOrValue::Function(Function {
                    name: Ident("calc".into()),
                    arguments: TokenList(vec![
                        TokenOrValue::Token(Token::Percentage {
                            has_sign: false,
                            unit_value: percent,
                            int_value: None,
                        }),
                        TokenOrValue::Token(Token::WhiteSpace(" ".into())),
                        TokenOrValue::Token(Token::Delim('-')),
                        TokenOrValue::Token(Token::WhiteSpace(" ".into())),
                        TokenOrValue::Length(LengthValue::Px(offset_px)),
                    ]),
                })],
            ),
            unparsed(
                PropertyId::from("float"),
                vec![TokenOrValue::Token(Token::Ident("left".into()))],
            ),
            unparsed(
                PropertyId::MarginRight,
                vec![TokenOrValue::Length(LengthValue::Px(self.gutter_px))],
            ),
        ]
    }
}

fn unparsed<'a>(property_id: PropertyId<'a>, value: Vec<TokenOrValue<'a>>) -> Property<'a> {
    Property::Unparsed(UnparsedProperty {
        property_id,
        value: TokenList(value),
    })
}

fn parse_column(tokens: &TokenList) -> Option<Column> {
    let mut numbers: Vec<f32> = Vec::new();
    let mut saw_slash = false;
    let mut gutter_px = DEFAULT_GUTTER_PX;

    for token in &tokens.0 {
        match token {
            TokenOrValue::Token(Token::Number { value, .. }) => numbers.push(*value),
            TokenOrValue::Token(Token::Delim('/')) => saw_slash = true,
            TokenOrValue::Length(LengthValue::Px(px)) => gutter_px = *px,
            _ => {}
        }
    }

    if !saw_slash || numbers.len() < 2 || numbers[1] == 0.0 {
        return None;
    }

    Some(Column {
        numerator: numbers[0],
        denominator: numbers[1],
        gutter_px,
    })
}

impl<'i> Visitor<'i> for LayoutGrid {
    type Error = Infallible;

    fn visit_types(&self) -> VisitTypes {
        visit_types!(RULES)
    }

    fn visit_rule(&mut self, rule: &mut CssRule<'i>) -> Result<(), Self::Error> {
        if let CssRule::Style(style) = rule {
            let mut expanded = Vec::new();

            style.declarations.declarations.retain(|property| {
                if property.property_id().name() != "lost-column" {
                    return true;
                }
                let Property::Custom(custom) = property else {
                    return true;
                };
                match parse_column(&custom.value) {
                    Some(column) => {
                        expanded.push(column.expand());
                        false
                    }
                    None => true,
                }
            });

            for group in expanded {
                for property in group {
                    style.declarations.declarations.push(property);
                }
            }
        }
        rule.visit_children(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_lost_column_declarations() {
        let out = apply("div { lost-column: 1/2; }").unwrap();

        assert!(out.contains("width: calc(49.95% - 15px)"), "{out}");
        assert!(out.contains("float: left"), "{out}");
        assert!(out.contains("margin-right: 30px"), "{out}");
        assert!(!out.contains("lost-column"), "{out}");
    }

    #[test]
    fn a_custom_gutter_overrides_the_default() {
        let out = apply("div { lost-column: 1/3 12px; }").unwrap();

        assert!(out.contains("margin-right: 12px"), "{out}");
        assert!(!out.contains("lost-column"), "{out}");
    }

    #[test]
    fn malformed_columns_are_left_in_place() {
        let out = apply("div { lost-column: banana; }").unwrap();

        assert!(out.contains("lost-column"), "{out}");
    }

    #[test]
    fn other_declarations_pass_through() {
        let out = apply("div { color: red; }").unwrap();

        assert!(out.contains("color: red"), "{out}");
    }
}
