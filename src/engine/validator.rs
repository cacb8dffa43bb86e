use serde::Serialize;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

/// A criterion score known to lie within `[MIN_SCORE, MAX_SCORE]`.
///
/// Only [`validate`] constructs these, so the range holds for every value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedScore {
    criterion: String,
    value: f64,
}

impl ValidatedScore {
    pub fn criterion(&self) -> &str {
        &self.criterion
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    Unparsable,
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub criterion: String,
    /// Cell text exactly as the judge entered it.
    pub raw: String,
    pub reason: RejectReason,
}

/// Classifies one raw cell. Out-of-range values are rejected, never clamped.
pub fn validate(raw: &str, criterion: &str) -> Result<ValidatedScore, Rejection> {
    let reject = |reason| Rejection {
        criterion: criterion.to_string(),
        raw: raw.to_string(),
        reason,
    };

    let value = match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return Err(reject(RejectReason::Unparsable)),
    };

    if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        return Err(reject(RejectReason::OutOfRange));
    }

    Ok(ValidatedScore {
        criterion: criterion.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_values_across_the_valid_domain() {
        for raw in ["0", "0.0", "3", "7.25", "9.99", "10", "10.0", " 8 "] {
            let score = validate(raw, "design").expect("value should validate");
            assert_eq!(score.value(), raw.trim().parse::<f64>().unwrap());
            assert_eq!(score.criterion(), "design");
        }
    }

    #[test]
    fn boundaries_are_valid() {
        assert_eq!(validate("0", "impact").map(|s| s.value()), Ok(0.0));
        assert_eq!(validate("10", "impact").map(|s| s.value()), Ok(10.0));
    }

    #[test]
    fn out_of_range_values_are_rejected_with_original_text() {
        for raw in ["-0.5", "-3", "10.01", "15", "1e3"] {
            let rejection = validate(raw, "impact").expect_err("value should be rejected");
            assert_eq!(rejection.reason, RejectReason::OutOfRange);
            assert_eq!(rejection.raw, raw);
            assert_eq!(rejection.criterion, "impact");
        }
    }

    #[test]
    fn empty_and_non_numeric_values_are_unparsable() {
        for raw in ["", "   ", "great", "8/10", "N/A", "NaN", "inf", "-inf"] {
            let rejection = validate(raw, "technical").expect_err("value should be rejected");
            assert_eq!(rejection.reason, RejectReason::Unparsable, "raw = {raw:?}");
        }
    }
}
