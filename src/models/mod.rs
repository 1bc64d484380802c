//! Value objects exchanged across the prediction pipeline

pub mod envelope;
pub mod history;
pub mod request;
pub mod result;

pub use envelope::ErrorEnvelope;
pub use history::HistoryRecord;
pub use request::{ChurnRequest, ContractType, InternetService, PaymentMethod, TechnicalSupport};
pub use result::{enrich, ChurnResult, Classification, EnrichError};
