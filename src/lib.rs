pub mod client;
pub mod config;
pub mod format;
pub mod model;
pub mod service;

pub use client::PriceQueryClient;
pub use config::{AppConfig, load_config};
pub use format::{format_count, format_currency, render_result};
pub use model::{Condition, QueryError, QueryInput, QueryResult, RequestState};
pub use service::{HttpPricingService, PricingService};
