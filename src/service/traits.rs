use crate::model::{QueryError, QueryInput, QueryResult};

#[async_trait::async_trait]
pub trait PricingService: Send + Sync {
    /// Submits one query to the pricing service and awaits its estimate.
    /// Implementations do not retry; any failure is final for the attempt.
    async fn evaluate(&self, input: &QueryInput) -> Result<QueryResult, QueryError>;
}
