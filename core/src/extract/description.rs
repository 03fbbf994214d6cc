use crate::glass::{GlassPanelSpec, GlassType};
use serde::{Deserialize, Serialize};

/// Dimensions recovered from free-text product descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDimensions {
    /// Meters.
    pub length: f64,
    /// Meters.
    pub width: f64,
    /// Millimeters.
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Unit {
    Millimeters,
    Meters,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64, Option<Unit>),
    Cross,
    Colon,
    Word(String),
}

fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let starts_number =
            c.is_ascii_digit() || (c == '.' && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit()));
        if starts_number {
            let start = i;
            let mut seen_point = false;
            while i < chars.len() {
                if chars[i].is_ascii_digit() {
                    i += 1;
                } else if chars[i] == '.'
                    && !seen_point
                    && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit())
                {
                    seen_point = true;
                    i += 1;
                } else {
                    break;
                }
            }
            let literal: String = chars[start..i].iter().collect();
            let Ok(value) = literal.parse::<f64>() else {
                continue;
            };

            let mut j = i;
            while j < chars.len() && chars[j] == ' ' {
                j += 1;
            }
            let unit_start = j;
            while j < chars.len() && chars[j].is_alphabetic() {
                j += 1;
            }
            let word: String = chars[unit_start..j].iter().collect::<String>().to_lowercase();
            let unit = match word.as_str() {
                "mm" => Some(Unit::Millimeters),
                "m" => Some(Unit::Meters),
                _ => None,
            };
            if unit.is_some() {
                i = j;
            }
            tokens.push(Token::Number(value, unit));
        } else if c == '×' {
            tokens.push(Token::Cross);
            i += 1;
        } else if c == ':' {
            tokens.push(Token::Colon);
            i += 1;
        } else if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect::<String>().to_lowercase();
            if word == "x" {
                tokens.push(Token::Cross);
            } else {
                tokens.push(Token::Word(word));
            }
        } else {
            i += 1;
        }
    }

    tokens
}

fn to_meters(value: f64, unit: Option<Unit>) -> f64 {
    match unit {
        Some(Unit::Meters) => value,
        _ => value / 1000.0,
    }
}

/// `1200 x 800 x 24mm`, `1200mm x 800mm x 24mm`, `1.2m x 0.8m x 24mm`.
fn match_triple(tokens: &[Token]) -> Option<ExtractedDimensions> {
    tokens.windows(5).find_map(|window| match window {
        [Token::Number(a, ua), Token::Cross, Token::Number(b, ub), Token::Cross, Token::Number(t, Some(Unit::Millimeters))] =>
        {
            // A bare edge takes its unit from the other edge; two different
            // explicit units are not a recognisable size.
            let unit = match (ua, ub) {
                (Some(left), Some(right)) if left != right => return None,
                _ => ua.or(*ub),
            };
            Some(ExtractedDimensions {
                length: to_meters(*a, unit),
                width: to_meters(*b, unit),
                thickness: *t,
            })
        }
        _ => None,
    })
}

/// `1200 x 800 mm, 24mm thick`.
fn match_pair_with_thickness(tokens: &[Token]) -> Option<ExtractedDimensions> {
    let position = tokens.windows(3).position(|window| {
        matches!(
            window,
            [Token::Number(_, _), Token::Cross, Token::Number(_, unit)] if *unit != Some(Unit::Meters)
        )
    })?;
    let (Token::Number(a, _), Token::Number(b, _)) = (&tokens[position], &tokens[position + 2]) else {
        return None;
    };

    let thickness = tokens[position + 3..].windows(2).find_map(|window| match window {
        [Token::Number(t, Some(Unit::Millimeters)), Token::Word(word)] if word == "thick" => Some(*t),
        _ => None,
    })?;

    Some(ExtractedDimensions {
        length: a / 1000.0,
        width: b / 1000.0,
        thickness,
    })
}

/// `L: 1200mm W: 800mm T: 24mm`.
fn match_labelled(tokens: &[Token]) -> Option<ExtractedDimensions> {
    let labelled = |labels: &[&str]| {
        tokens.windows(3).find_map(|window| match window {
            [Token::Word(word), Token::Colon, Token::Number(value, unit)]
                if labels.contains(&word.as_str()) =>
            {
                Some((*value, *unit))
            }
            _ => None,
        })
    };

    // Every labelled value must carry its unit.
    let (length, length_unit) = labelled(&["l", "length"])?;
    let (width, width_unit) = labelled(&["w", "width"])?;
    let (thickness, thickness_unit) = labelled(&["t", "thickness"])?;
    if length_unit.is_none()
        || width_unit.is_none()
        || thickness_unit != Some(Unit::Millimeters)
    {
        return None;
    }

    Some(ExtractedDimensions {
        length: to_meters(length, length_unit),
        width: to_meters(width, width_unit),
        thickness,
    })
}

/// Pulls length, width (m) and thickness (mm) out of a product description.
pub fn extract_dimensions(description: &str) -> Option<ExtractedDimensions> {
    let tokens = tokenize(description);
    let dimensions = match_triple(&tokens)
        .or_else(|| match_labelled(&tokens))
        .or_else(|| match_pair_with_thickness(&tokens))?;

    (dimensions.length > 0.0 && dimensions.width > 0.0 && dimensions.thickness > 0.0)
        .then_some(dimensions)
}

pub fn is_glass_description(description: &str) -> bool {
    let lower = description.to_lowercase();
    ["glass", "glazing", "window", "panel"]
        .iter()
        .any(|keyword| lower.contains(keyword))
}

pub fn infer_glass_type(description: &str) -> GlassType {
    let lower = description.to_lowercase();
    if lower.contains("triple") {
        GlassType::TripleGlazed
    } else if lower.contains("double") {
        GlassType::DoubleGlazed
    } else if lower.contains("laminated") {
        GlassType::Laminated
    } else if lower.contains("toughened") || lower.contains("tempered") {
        GlassType::Toughened
    } else if lower.contains("low-e") || lower.contains("low e") {
        GlassType::LowE
    } else {
        GlassType::SingleGlazed
    }
}

/// Converts product descriptions into panel specs, skipping lines that are
/// not glass or carry no recognisable dimensions.
pub fn panels_from_descriptions<S: AsRef<str>>(descriptions: &[S]) -> Vec<GlassPanelSpec> {
    descriptions
        .iter()
        .enumerate()
        .filter_map(|(index, description)| {
            let description: &str = description.as_ref();
            if !is_glass_description(description) {
                return None;
            }
            let dimensions = extract_dimensions(description)?;
            Some(GlassPanelSpec::new(
                format!("Panel {}", index + 1),
                dimensions.length,
                dimensions.width,
                dimensions.thickness,
                infer_glass_type(description),
                1,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_dimensions(found: ExtractedDimensions, length: f64, width: f64, thickness: f64) {
        assert_relative_eq!(found.length, length, epsilon = 1e-12);
        assert_relative_eq!(found.width, width, epsilon = 1e-12);
        assert_relative_eq!(found.thickness, thickness, epsilon = 1e-12);
    }

    #[test]
    fn millimeter_triple() {
        let found = extract_dimensions("Double glazed unit 1200 x 800 x 24mm").unwrap();
        assert_dimensions(found, 1.2, 0.8, 24.0);

        let found = extract_dimensions("1200mm × 800mm × 28 mm").unwrap();
        assert_dimensions(found, 1.2, 0.8, 28.0);
    }

    #[test]
    fn compact_triple_without_spaces() {
        let found = extract_dimensions("Window 900x600x4mm").unwrap();
        assert_dimensions(found, 0.9, 0.6, 4.0);
    }

    #[test]
    fn meter_triple() {
        let found = extract_dimensions("Toughened glass 1.2m x 0.8m x 10mm").unwrap();
        assert_dimensions(found, 1.2, 0.8, 10.0);
    }

    #[test]
    fn pair_with_separate_thickness() {
        let found = extract_dimensions("Laminated panel 1500 x 1000 mm, 6.4mm thick").unwrap();
        assert_dimensions(found, 1.5, 1.0, 6.4);
    }

    #[test]
    fn labelled_dimensions() {
        let found = extract_dimensions("Glass L: 2000mm W: 1000mm T: 12mm").unwrap();
        assert_dimensions(found, 2.0, 1.0, 12.0);
    }

    #[test]
    fn mixed_explicit_units_are_not_a_size() {
        assert!(extract_dimensions("Glass 1200mm x 0.8m x 24mm").is_none());
        assert!(extract_dimensions("Glass 1.2m x 800mm x 24mm").is_none());
    }

    #[test]
    fn bare_edge_takes_the_unit_of_its_neighbour() {
        let found = extract_dimensions("Glass 1.2m x 0.8 x 10mm").unwrap();
        assert_dimensions(found, 1.2, 0.8, 10.0);

        let found = extract_dimensions("Glass 1200 x 800mm x 10mm").unwrap();
        assert_dimensions(found, 1.2, 0.8, 10.0);
    }

    #[test]
    fn labelled_values_need_units() {
        assert!(extract_dimensions("Glass L: 1200 W: 800 T: 24").is_none());
        assert!(extract_dimensions("Glass L: 1200mm W: 800mm T: 24").is_none());

        let found = extract_dimensions("Glass L: 1.2m W: 800mm T: 24mm").unwrap();
        assert_dimensions(found, 1.2, 0.8, 24.0);
    }

    #[test]
    fn text_without_dimensions_yields_none() {
        assert!(extract_dimensions("Aluminium window frame, white").is_none());
        assert!(extract_dimensions("1200 x 800").is_none());
        assert!(extract_dimensions("0 x 800 x 4mm").is_none());
    }

    #[test]
    fn glass_type_keywords() {
        assert_eq!(infer_glass_type("Triple glazed A-rated"), GlassType::TripleGlazed);
        assert_eq!(infer_glass_type("DOUBLE GLAZED"), GlassType::DoubleGlazed);
        assert_eq!(infer_glass_type("tempered panel"), GlassType::Toughened);
        assert_eq!(infer_glass_type("Low-E coated"), GlassType::LowE);
        assert_eq!(infer_glass_type("float glass"), GlassType::SingleGlazed);
    }

    #[test]
    fn descriptions_become_named_panels() {
        let lines = [
            "Double glazed window 1200 x 800 x 24mm",
            "Installation labour",
            "Glass splashback, size to be confirmed",
            "Laminated glass L: 1000mm W: 500mm T: 6.8mm",
        ];
        let panels = panels_from_descriptions(&lines);

        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].name, "Panel 1");
        assert_eq!(panels[0].glass_type, "DOUBLE_GLAZED");
        assert_eq!(panels[1].name, "Panel 4");
        assert_eq!(panels[1].glass_type, "LAMINATED");
        assert_eq!(panels[1].quantity, 1.0);
    }
}
