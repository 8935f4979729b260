//! HTTP handlers for the Auxilio REST API.
//!
//! - `health`: Health check
//! - `recommend`: First-aid recommendation
//! - `categories`: Catalogue listing
//! - `metrics`: Prometheus metrics

pub mod categories;
pub mod health;
pub mod helpers;
pub mod metrics;
pub mod recommend;

pub use categories::list_categories;
pub use health::health_check;
pub use metrics::prometheus_metrics;
pub use recommend::recommend;
