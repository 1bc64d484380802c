//! Prediction result enrichment
//!
//! Turns a raw engine probability into the caller-facing result: a rounded
//! probability, a churn/stay classification, and a recommendation tier.

use serde::Serialize;
use thiserror::Error;

/// Raised when a probability falls outside [0, 1]
///
/// A successful scoring call never produces one of these (the client checks
/// the range on its side), so seeing this error means an internal defect.
#[derive(Debug, Error)]
#[error("probability {0} is outside [0, 1]")]
pub struct EnrichError(pub f64);

/// Churn classification derived from the probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    #[serde(rename = "will-churn")]
    WillChurn,
    #[serde(rename = "will-stay")]
    WillStay,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WillChurn => "will-churn",
            Self::WillStay => "will-stay",
        }
    }
}

/// Caller-facing prediction result
///
/// Invariant: `probability` is in [0, 1] rounded to 2 decimals, and
/// `classification` is `WillChurn` exactly when `probability >= 0.5`.
/// Only [`enrich`] constructs this type.
#[derive(Debug, Clone, Serialize)]
pub struct ChurnResult {
    #[serde(rename = "prevision")]
    pub classification: Classification,
    #[serde(rename = "probabilidad")]
    pub probability: f64,
    #[serde(rename = "mensaje")]
    pub recommendation: String,
}

/// Enrich a raw probability into a [`ChurnResult`]
///
/// Rounds half-up to 2 decimals first, then classifies and tiers on the
/// rounded value so the result's invariant holds on the number the caller
/// actually sees.
pub fn enrich(probability: f64) -> Result<ChurnResult, EnrichError> {
    if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
        return Err(EnrichError(probability));
    }

    let rounded = (probability * 100.0).round() / 100.0;

    let classification = if rounded >= 0.5 {
        Classification::WillChurn
    } else {
        Classification::WillStay
    };

    Ok(ChurnResult {
        classification,
        probability: rounded,
        recommendation: recommendation_tier(rounded).to_string(),
    })
}

/// Discrete risk bucket for a probability already known to be in [0, 1]
fn recommendation_tier(probability: f64) -> &'static str {
    if probability >= 0.8 {
        "high risk, immediate retention contact"
    } else if probability >= 0.5 {
        "moderate risk, consider loyalty offers"
    } else if probability >= 0.3 {
        "low risk, monitor behavior"
    } else {
        "stable customer, low risk"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_matches_half_threshold() {
        assert_eq!(enrich(0.5).unwrap().classification, Classification::WillChurn);
        assert_eq!(enrich(0.49).unwrap().classification, Classification::WillStay);
        assert_eq!(enrich(1.0).unwrap().classification, Classification::WillChurn);
        assert_eq!(enrich(0.0).unwrap().classification, Classification::WillStay);
    }

    #[test]
    fn recommendation_tiers_at_boundaries() {
        assert_eq!(enrich(0.83).unwrap().recommendation, "high risk, immediate retention contact");
        assert_eq!(enrich(0.8).unwrap().recommendation, "high risk, immediate retention contact");
        assert_eq!(enrich(0.79).unwrap().recommendation, "moderate risk, consider loyalty offers");
        assert_eq!(enrich(0.5).unwrap().recommendation, "moderate risk, consider loyalty offers");
        assert_eq!(enrich(0.3).unwrap().recommendation, "low risk, monitor behavior");
        assert_eq!(enrich(0.29).unwrap().recommendation, "stable customer, low risk");
    }

    #[test]
    fn probability_rounds_half_up() {
        // 0.125 and 0.875 are exact in binary, so the half-up behavior is observable
        assert_eq!(enrich(0.125).unwrap().probability, 0.13);
        assert_eq!(enrich(0.875).unwrap().probability, 0.88);
        assert_eq!(enrich(0.834).unwrap().probability, 0.83);
    }

    #[test]
    fn classification_derives_from_rounded_value() {
        // 0.495 rounds up to 0.50, which must classify as churn to keep the
        // invariant on the visible probability
        let result = enrich(0.495).unwrap();
        assert_eq!(result.probability, 0.5);
        assert_eq!(result.classification, Classification::WillChurn);
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        assert!(enrich(-0.01).is_err());
        assert!(enrich(1.01).is_err());
        assert!(enrich(f64::NAN).is_err());
        assert!(enrich(f64::INFINITY).is_err());
    }

    #[test]
    fn enrich_is_deterministic() {
        let a = enrich(0.83).unwrap();
        let b = enrich(0.83).unwrap();
        assert_eq!(a.classification, b.classification);
        assert_eq!(a.probability, b.probability);
        assert_eq!(a.recommendation, b.recommendation);
    }

    #[test]
    fn wire_serialization() {
        let json = serde_json::to_value(enrich(0.83).unwrap()).unwrap();
        assert_eq!(json["prevision"], "will-churn");
        assert_eq!(json["probabilidad"], 0.83);
        assert_eq!(json["mensaje"], "high risk, immediate retention contact");
    }
}
