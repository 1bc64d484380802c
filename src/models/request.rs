//! Validated prediction request and its field domains
//!
//! The accepted values mirror the categories the external churn model was
//! trained on. Anything outside these domains is a nonsensical model input,
//! not merely an unusual one, so the domains are closed enums rather than
//! free-form strings.

use serde::Serialize;

/// Contract length category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContractType {
    #[serde(rename = "Month-to-month")]
    MonthToMonth,
    #[serde(rename = "One year")]
    OneYear,
    #[serde(rename = "Two year")]
    TwoYear,
}

impl ContractType {
    pub const ALLOWED: &'static str = "Month-to-month, One year, Two year";

    /// Parse an already-trimmed wire value; exact match against training values
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Month-to-month" => Some(Self::MonthToMonth),
            "One year" => Some(Self::OneYear),
            "Two year" => Some(Self::TwoYear),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MonthToMonth => "Month-to-month",
            Self::OneYear => "One year",
            Self::TwoYear => "Two year",
        }
    }
}

/// Technical support subscription status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TechnicalSupport {
    #[serde(rename = "Yes")]
    Yes,
    #[serde(rename = "No")]
    No,
    #[serde(rename = "No internet service")]
    NoInternetService,
}

impl TechnicalSupport {
    pub const ALLOWED: &'static str = "Yes, No, No internet service";

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Yes" => Some(Self::Yes),
            "No" => Some(Self::No),
            "No internet service" => Some(Self::NoInternetService),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::NoInternetService => "No internet service",
        }
    }
}

/// Internet service category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InternetService {
    #[serde(rename = "DSL")]
    Dsl,
    #[serde(rename = "Fiber optic")]
    FiberOptic,
    #[serde(rename = "No")]
    No,
}

impl InternetService {
    pub const ALLOWED: &'static str = "DSL, Fiber optic, No";

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "DSL" => Some(Self::Dsl),
            "Fiber optic" => Some(Self::FiberOptic),
            "No" => Some(Self::No),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dsl => "DSL",
            Self::FiberOptic => "Fiber optic",
            Self::No => "No",
        }
    }
}

/// Payment method category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentMethod {
    #[serde(rename = "Electronic check")]
    ElectronicCheck,
    #[serde(rename = "Mailed check")]
    MailedCheck,
    #[serde(rename = "Bank transfer (automatic)")]
    BankTransferAutomatic,
    #[serde(rename = "Credit card (automatic)")]
    CreditCardAutomatic,
}

impl PaymentMethod {
    pub const ALLOWED: &'static str =
        "Electronic check, Mailed check, Bank transfer (automatic), Credit card (automatic)";

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Electronic check" => Some(Self::ElectronicCheck),
            "Mailed check" => Some(Self::MailedCheck),
            "Bank transfer (automatic)" => Some(Self::BankTransferAutomatic),
            "Credit card (automatic)" => Some(Self::CreditCardAutomatic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ElectronicCheck => "Electronic check",
            Self::MailedCheck => "Mailed check",
            Self::BankTransferAutomatic => "Bank transfer (automatic)",
            Self::CreditCardAutomatic => "Credit card (automatic)",
        }
    }
}

/// Fully validated prediction request
///
/// Only the validator constructs this type, so holding one is proof that
/// every field is inside the model's training domain. Serializes with the
/// wire keys the scoring engine expects.
#[derive(Debug, Clone, Serialize)]
pub struct ChurnRequest {
    /// Months as a customer, 0..=72
    #[serde(rename = "antiguedad")]
    pub tenure_months: u32,
    #[serde(rename = "contrato")]
    pub contract_type: ContractType,
    /// Monthly charges, 18.25..=118.75 inclusive
    #[serde(rename = "cargos_mensuales")]
    pub monthly_charges: f64,
    #[serde(rename = "soporte_tecnico")]
    pub technical_support: TechnicalSupport,
    #[serde(rename = "servicio_internet")]
    pub internet_service: InternetService,
    #[serde(rename = "metodo_pago")]
    pub payment_method: PaymentMethod,
}
