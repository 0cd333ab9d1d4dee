//! `Image:` directive parameters.
//!
//! ```text
//! Image: photos/harbour.jpg | width=5 | align=center | top=2.5
//! ```
//!
//! The first field is the path; the rest are `key=value` pairs separated by
//! `|`. Values that fail to parse keep their defaults and are reported.

use crate::{Align, ImageRef};

/// Outcome of parsing one `Image:` line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedImage {
    /// `None` when the line has no path.
    pub image: Option<ImageRef>,
    /// Human-readable problems with individual parameters.
    pub problems: Vec<String>,
}

fn parse_inches(key: &str, value: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("{} must be a number, got '{}'", key, value)),
    }
}

/// Parse the text after `Image:`.
pub fn parse_image(params: &str) -> ParsedImage {
    let mut parts = params.split('|').map(str::trim);
    let path = parts.next().unwrap_or_default();

    if path.is_empty() {
        return ParsedImage {
            image: None,
            problems: vec!["Image line has no path".to_string()],
        };
    }

    let mut image = ImageRef::new(path);
    let mut problems = Vec::new();

    for part in parts.filter(|p| !p.is_empty()) {
        let Some((key, value)) = part.split_once('=') else {
            problems.push(format!("Expected key=value, got '{}'", part));
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        let outcome = match key {
            "width" => parse_inches(key, value).and_then(|w| {
                if w > 0.0 {
                    image.width = w;
                    Ok(())
                } else {
                    Err(format!("width must be positive, got '{}'", value))
                }
            }),
            "left" => parse_inches(key, value).map(|v| image.left = Some(v)),
            "top" => parse_inches(key, value).map(|v| image.top = Some(v)),
            "align" => Align::parse(value)
                .map(|a| image.align = a)
                .ok_or_else(|| format!("align must be left, center or right, got '{}'", value)),
            _ => Err(format!("Unknown image parameter '{}'", key)),
        };

        if let Err(problem) = outcome {
            problems.push(problem);
        }
    }

    ParsedImage {
        image: Some(image),
        problems,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_only_uses_defaults() {
        let parsed = parse_image("diagram.png");
        let image = parsed.image.unwrap();
        assert_eq!(image.path, "diagram.png");
        assert_eq!(image.width, 4.0);
        assert_eq!(image.align, Align::Left);
        assert_eq!(image.left, None);
        assert!(parsed.problems.is_empty());
    }

    #[test]
    fn test_all_parameters() {
        let parsed = parse_image("img/harbour.jpg | width=5.5 | left=2 | top=3 | align=center");
        let image = parsed.image.unwrap();
        assert_eq!(image.width, 5.5);
        assert_eq!(image.left, Some(2.0));
        assert_eq!(image.top, Some(3.0));
        assert_eq!(image.align, Align::Center);
        assert!(parsed.problems.is_empty());
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let parsed = parse_image("a.png | width=wide | align=middle | depth=2 | loose");
        let image = parsed.image.unwrap();
        assert_eq!(image.width, 4.0);
        assert_eq!(image.align, Align::Left);
        assert_eq!(parsed.problems.len(), 4);
    }

    #[test]
    fn test_non_positive_width_rejected() {
        let parsed = parse_image("a.png | width=0");
        assert_eq!(parsed.image.unwrap().width, 4.0);
        assert_eq!(parsed.problems.len(), 1);
    }

    #[test]
    fn test_missing_path() {
        let parsed = parse_image(" | width=3");
        assert!(parsed.image.is_none());
        assert_eq!(parsed.problems.len(), 1);
    }
}
