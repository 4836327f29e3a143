use anyhow::{Context, Result};

/// Parse numbers separated by commas and/or whitespace.
///
/// Accepts anything `f32::from_str` does, including `nan`, `inf` and `-inf`.
pub fn parse_values(text: &str) -> Result<Vec<f32>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f32>()
                .with_context(|| format!("Invalid number '{token}'"))
        })
        .collect()
}
