// Core structs: QueryInput, QueryResult, RequestState
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Conservation state of a product, as understood by the pricing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "novo")]
    New,
    #[serde(rename = "excelente")]
    Excellent,
    #[default]
    #[serde(rename = "bom")]
    Good,
    #[serde(rename = "defeito")]
    Defective,
}

impl Condition {
    /// The exact token sent in the request's `estado` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "novo",
            Condition::Excellent => "excelente",
            Condition::Good => "bom",
            Condition::Defective => "defeito",
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = String;

    /// Accepts the wire tokens as well as their English names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "novo" | "new" => Ok(Condition::New),
            "excelente" | "excellent" => Ok(Condition::Excellent),
            "bom" | "good" => Ok(Condition::Good),
            "defeito" | "defective" => Ok(Condition::Defective),
            other => Err(format!("unknown condition: {other}")),
        }
    }
}

/// What the user typed: a product name plus the selected condition.
/// Serializes directly into the request body the service expects.
#[derive(Debug, Clone, Serialize)]
pub struct QueryInput {
    #[serde(rename = "produto")]
    pub product_name: String,
    #[serde(rename = "estado")]
    pub condition: Condition,
}

impl QueryInput {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            condition: Condition::default(),
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// A query may only be issued for a non-blank product name. The name is
    /// sent as typed; only the check trims.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.product_name.trim().is_empty() {
            return Err(QueryError::EmptyProductName);
        }
        Ok(())
    }
}

/// Price estimate returned by the service. Every field is optional: a
/// missing or non-numeric value degrades to `None` (rendered as `N/A`)
/// instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResult {
    #[serde(rename = "preco_sugerido", default, deserialize_with = "lenient_f64")]
    pub suggested_price: Option<f64>,
    #[serde(rename = "preco_min", default, deserialize_with = "lenient_f64")]
    pub min_price: Option<f64>,
    #[serde(rename = "preco_max", default, deserialize_with = "lenient_f64")]
    pub max_price: Option<f64>,
    #[serde(
        rename = "anuncios_analisados",
        default,
        deserialize_with = "lenient_u64"
    )]
    pub listings_analyzed: Option<u64>,
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64())
}

/// Why a query attempt ended without a result. Every variant is terminal for
/// that attempt; the client never retries on its own.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Rejected locally before any network traffic.
    #[error("product name must not be empty")]
    EmptyProductName,

    /// Another query is still in flight on this client.
    #[error("a query is already in flight")]
    Busy,

    /// The service answered with a non-200 status. Carries the `detail`
    /// message from the response body, or a generic fallback.
    #[error("{0}")]
    Remote(String),

    /// Transport-level failure, or a 200 response that was not JSON.
    #[error("could not reach the pricing service ({0})")]
    Connection(String),
}

/// Observable lifecycle of a query on a `PriceQueryClient`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded(QueryResult),
    Failed(QueryError),
}
