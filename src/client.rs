use crate::model::{QueryError, QueryInput, RequestState};
use crate::service::{HttpPricingService, PricingService};

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::info;

/// Owns the interaction state of the price-query screen: the single
/// in-flight flag and the last observed `RequestState`.
///
/// At most one query is in flight per client; a `submit_query` call that
/// overlaps a running one is rejected with `QueryError::Busy` and leaves the
/// running query untouched. Sequential reuse is unlimited.
pub struct PriceQueryClient<S: PricingService> {
    service: S,
    in_flight: AtomicBool,
    state: Mutex<RequestState>,
}

impl PriceQueryClient<HttpPricingService> {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_service(HttpPricingService::new(api_url))
    }
}

impl<S: PricingService> PriceQueryClient<S> {
    pub fn with_service(service: S) -> Self {
        Self {
            service,
            in_flight: AtomicBool::new(false),
            state: Mutex::new(RequestState::Idle),
        }
    }

    /// Validates the input, performs the network exchange and returns the
    /// resolved state. Validation and busy rejections return early without
    /// issuing a request and without touching the stored state.
    pub async fn submit_query(&self, input: &QueryInput) -> RequestState {
        if let Err(e) = input.validate() {
            info!("Rejected query without network call: {}", e);
            return RequestState::Failed(e);
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            info!("Rejected overlapping query: client is busy");
            return RequestState::Failed(QueryError::Busy);
        };

        *self.state.lock().await = RequestState::InFlight;

        let outcome = match self.service.evaluate(input).await {
            Ok(result) => RequestState::Succeeded(result),
            Err(e) => RequestState::Failed(e),
        };

        *self.state.lock().await = outcome.clone();
        outcome
    }

    /// The last observed state: `Idle` until the first query is issued.
    pub async fn state(&self) -> RequestState {
        self.state.lock().await.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}

/// Holds the in-flight flag for exactly one query. Dropping the guard clears
/// the flag, so every exit path (success, failure, panic) releases it once.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
