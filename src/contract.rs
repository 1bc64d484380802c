//! Input contract enforcement
//!
//! Validates an untyped inbound payload against the exact value domains the
//! scoring model was trained on. Textual fields are trimmed before the domain
//! check; numeric bounds are inclusive. A field that is missing and a field
//! that is present but out of domain produce the same per-field violation
//! message, and every violated field is reported, not just the first.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::models::{
    ChurnRequest, ContractType, InternetService, PaymentMethod, TechnicalSupport,
};

pub const TENURE_MIN: i64 = 0;
pub const TENURE_MAX: i64 = 72;
pub const CHARGES_MIN: f64 = 18.25;
pub const CHARGES_MAX: f64 = 118.75;

/// Untyped inbound payload, before contract enforcement
///
/// Every field is optional so that a missing field reaches the validator
/// instead of failing JSON deserialization with an opaque error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPrediction {
    pub antiguedad: Option<i64>,
    pub contrato: Option<String>,
    pub cargos_mensuales: Option<f64>,
    pub soporte_tecnico: Option<String>,
    pub servicio_internet: Option<String>,
    pub metodo_pago: Option<String>,
}

/// Field name to violation message, one entry per violated field
pub type Violations = BTreeMap<String, String>;

/// Enforce the input contract, producing a validated request or the full set
/// of field-level violations
pub fn validate(raw: RawPrediction) -> Result<ChurnRequest, Violations> {
    let mut violations = Violations::new();

    let tenure_months = match raw.antiguedad {
        Some(v) if (TENURE_MIN..=TENURE_MAX).contains(&v) => Some(v as u32),
        _ => {
            violations.insert(
                "antiguedad".to_string(),
                format!("must be an integer between {TENURE_MIN} and {TENURE_MAX} months"),
            );
            None
        }
    };

    let contract_type = parse_domain(
        &mut violations,
        "contrato",
        raw.contrato.as_deref(),
        ContractType::ALLOWED,
        ContractType::parse,
    );

    let monthly_charges = match raw.cargos_mensuales {
        Some(v) if v.is_finite() && (CHARGES_MIN..=CHARGES_MAX).contains(&v) => Some(v),
        _ => {
            violations.insert(
                "cargos_mensuales".to_string(),
                format!("must be a number between {CHARGES_MIN} and {CHARGES_MAX}"),
            );
            None
        }
    };

    let technical_support = parse_domain(
        &mut violations,
        "soporte_tecnico",
        raw.soporte_tecnico.as_deref(),
        TechnicalSupport::ALLOWED,
        TechnicalSupport::parse,
    );

    let internet_service = parse_domain(
        &mut violations,
        "servicio_internet",
        raw.servicio_internet.as_deref(),
        InternetService::ALLOWED,
        InternetService::parse,
    );

    let payment_method = parse_domain(
        &mut violations,
        "metodo_pago",
        raw.metodo_pago.as_deref(),
        PaymentMethod::ALLOWED,
        PaymentMethod::parse,
    );

    match (
        tenure_months,
        contract_type,
        monthly_charges,
        technical_support,
        internet_service,
        payment_method,
    ) {
        (
            Some(tenure_months),
            Some(contract_type),
            Some(monthly_charges),
            Some(technical_support),
            Some(internet_service),
            Some(payment_method),
        ) => Ok(ChurnRequest {
            tenure_months,
            contract_type,
            monthly_charges,
            technical_support,
            internet_service,
            payment_method,
        }),
        _ => Err(violations),
    }
}

/// Trim then parse a textual field against its closed domain
fn parse_domain<T>(
    violations: &mut Violations,
    field: &str,
    value: Option<&str>,
    allowed: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    match value.map(str::trim).and_then(parse) {
        Some(parsed) => Some(parsed),
        None => {
            violations.insert(field.to_string(), format!("must be one of: {allowed}"));
            None
        }
    }
}
