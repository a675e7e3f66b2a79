// Service module: the seam between the client and the remote pricing API.

pub mod http;
pub mod traits;

pub use http::HttpPricingService;
pub use traits::PricingService;
