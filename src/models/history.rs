//! Append-only history projection of one prediction

use chrono::{DateTime, Utc};

use super::{ChurnRequest, ChurnResult};

/// One (request, result) pair as handed to the history store
///
/// The creation timestamp is stamped here, at construction, so the record is
/// complete before the store ever sees it. The store assigns the row id.
#[derive(Debug, Clone)]
pub struct HistoryRecord {
    pub created_at: DateTime<Utc>,
    pub tenure_months: u32,
    pub contract_type: &'static str,
    pub monthly_charges: f64,
    pub technical_support: &'static str,
    pub internet_service: &'static str,
    pub payment_method: &'static str,
    pub classification: &'static str,
    pub probability: f64,
    pub recommendation: String,
}

impl HistoryRecord {
    pub fn new(request: &ChurnRequest, result: &ChurnResult) -> Self {
        Self {
            created_at: Utc::now(),
            tenure_months: request.tenure_months,
            contract_type: request.contract_type.as_str(),
            monthly_charges: request.monthly_charges,
            technical_support: request.technical_support.as_str(),
            internet_service: request.internet_service.as_str(),
            payment_method: request.payment_method.as_str(),
            classification: result.classification.as_str(),
            probability: result.probability,
            recommendation: result.recommendation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{enrich, ContractType, InternetService, PaymentMethod, TechnicalSupport};

    #[test]
    fn record_snapshots_request_and_result() {
        let request = ChurnRequest {
            tenure_months: 24,
            contract_type: ContractType::OneYear,
            monthly_charges: 70.0,
            technical_support: TechnicalSupport::No,
            internet_service: InternetService::FiberOptic,
            payment_method: PaymentMethod::ElectronicCheck,
        };
        let result = enrich(0.83).unwrap();

        let record = HistoryRecord::new(&request, &result);
        assert_eq!(record.tenure_months, 24);
        assert_eq!(record.contract_type, "One year");
        assert_eq!(record.classification, "will-churn");
        assert_eq!(record.probability, 0.83);
        assert!(record.created_at <= Utc::now());
    }
}
