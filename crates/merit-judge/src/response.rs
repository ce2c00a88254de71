//! Parsing of the judge's reply.
//!
//! LLMs wrap JSON in Markdown fences or surround it with prose, return
//! numbers as strings, or put the scores under a `scores` key. All of that
//! is accepted. A missing or non-numeric score is not.

use merit_core::errors::{JudgeError, MeritResult};
use merit_core::models::{QualityAssessment, QualityScores};
use serde_json::{Map, Value};
use tracing::warn;

/// Parse a raw judge reply into a validated assessment.
///
/// Numeric scores are rounded and clamped into [1, 10]. The summary is
/// trimmed and cut to `summary_max_chars` characters.
///
/// # Errors
/// `MalformedResponse` when no JSON object can be found, `MissingScore` or
/// `NonNumericScore` when a dimension is absent or unusable.
pub fn parse_response(raw: &str, summary_max_chars: usize) -> MeritResult<QualityAssessment> {
    let object = extract_object(raw)?;
    let scores_obj = match object.get("scores") {
        Some(Value::Object(inner)) => inner,
        _ => &object,
    };

    let mut values = [0i64; 5];
    for (slot, dimension) in values.iter_mut().zip(QualityScores::DIMENSIONS) {
        *slot = read_score(scores_obj, dimension)?;
    }
    let [relevance, depth, evidence, constructiveness, tone] = values;

    let out_of_range = values.iter().filter(|v| !(1..=10).contains(*v)).count();
    if out_of_range > 0 {
        warn!(out_of_range, "judge returned scores outside [1, 10], clamping");
    }

    let summary = object
        .get("summary")
        .and_then(Value::as_str)
        .map(|s| truncate_chars(s.trim(), summary_max_chars))
        .unwrap_or_default();

    Ok(QualityAssessment {
        scores: QualityScores::clamped(relevance, depth, evidence, constructiveness, tone),
        summary,
    })
}

fn extract_object(raw: &str) -> MeritResult<Map<String, Value>> {
    let start = raw.find('{');
    let end = raw.rfind('}');
    let candidate = match (start, end) {
        (Some(s), Some(e)) if s < e => &raw[s..=e],
        _ => {
            return Err(JudgeError::MalformedResponse {
                reason: "no JSON object in reply".to_string(),
            }
            .into())
        }
    };

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(JudgeError::MalformedResponse {
            reason: "reply is not a JSON object".to_string(),
        }
        .into()),
        Err(e) => Err(JudgeError::MalformedResponse {
            reason: e.to_string(),
        }
        .into()),
    }
}

fn read_score(obj: &Map<String, Value>, dimension: &str) -> MeritResult<i64> {
    let non_numeric = || JudgeError::NonNumericScore {
        dimension: dimension.to_string(),
    };
    let value = match obj.get(dimension) {
        None | Some(Value::Null) => {
            return Err(JudgeError::MissingScore {
                dimension: dimension.to_string(),
            }
            .into())
        }
        Some(v) => v,
    };

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() => Ok(n.round() as i64),
        _ => Err(non_numeric().into()),
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
