//! Output schemas for the two provider operations, with strict parsing.
//!
//! The provider replies with a JSON object embedded in its message text.
//! Parsing is deliberately unforgiving: a rating of `11`, `7.5`, or `"7"`
//! is a schema failure, never clamped or coerced, and must not be persisted.

use serde::{Deserialize, Serialize};

use crate::client::GenAiError;

/// Inclusive rating bounds for clarity scores.
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 10;

/// Output of the content-generation operation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratedContent {
    pub generated_content: String,
}

/// Output of the clarity-scoring operation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClarityRating {
    pub rating: i32,
}

/// Parse and validate a generation response body.
///
/// The generated content must be a non-empty string.
pub fn parse_generated_content(raw: &str) -> Result<GeneratedContent, GenAiError> {
    let output: GeneratedContent = serde_json::from_str(raw)
        .map_err(|e| GenAiError::Schema(format!("malformed generation output: {e}")))?;
    if output.generated_content.trim().is_empty() {
        return Err(GenAiError::Schema(
            "provider returned empty generated content".to_string(),
        ));
    }
    Ok(output)
}

/// Parse and validate a clarity-scoring response body.
///
/// The rating must deserialize as an integer and lie in
/// [[`RATING_MIN`], [`RATING_MAX`]].
pub fn parse_clarity_rating(raw: &str) -> Result<ClarityRating, GenAiError> {
    let output: ClarityRating = serde_json::from_str(raw)
        .map_err(|e| GenAiError::Schema(format!("malformed rating output: {e}")))?;
    if !(RATING_MIN..=RATING_MAX).contains(&output.rating) {
        return Err(GenAiError::Schema(format!(
            "rating {} outside valid range {RATING_MIN}..={RATING_MAX}",
            output.rating
        )));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_valid_generation_output() {
        let out = parse_generated_content(r#"{"generated_content": "A better prompt."}"#)
            .expect("valid output must parse");
        assert_eq!(out.generated_content, "A better prompt.");
    }

    #[test]
    fn test_empty_generation_output_rejected() {
        let result = parse_generated_content(r#"{"generated_content": "   "}"#);
        assert_matches!(result, Err(GenAiError::Schema(_)));
    }

    #[test]
    fn test_valid_rating_bounds() {
        assert_eq!(parse_clarity_rating(r#"{"rating": 1}"#).unwrap().rating, 1);
        assert_eq!(parse_clarity_rating(r#"{"rating": 10}"#).unwrap().rating, 10);
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        assert_matches!(parse_clarity_rating(r#"{"rating": 0}"#), Err(GenAiError::Schema(_)));
        assert_matches!(parse_clarity_rating(r#"{"rating": 11}"#), Err(GenAiError::Schema(_)));
        assert_matches!(parse_clarity_rating(r#"{"rating": -3}"#), Err(GenAiError::Schema(_)));
    }

    #[test]
    fn test_non_integer_rating_rejected() {
        // Floats and strings are schema failures, not candidates for coercion.
        assert_matches!(parse_clarity_rating(r#"{"rating": 7.5}"#), Err(GenAiError::Schema(_)));
        assert_matches!(parse_clarity_rating(r#"{"rating": "7"}"#), Err(GenAiError::Schema(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert_matches!(parse_clarity_rating("not json"), Err(GenAiError::Schema(_)));
        assert_matches!(parse_clarity_rating(r#"{"score": 7}"#), Err(GenAiError::Schema(_)));
    }
}
