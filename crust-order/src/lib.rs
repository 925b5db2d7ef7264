pub mod models;
pub mod profile;
pub mod manager;
pub mod finance;
pub mod orchestrator;

pub use models::{Feedback, Order, OrderError, OrderSummary, Rating, Receipt};
pub use profile::{normalize_name, CustomerName, CustomerProfile};
pub use manager::{OrderManager, DEFAULT_LOYALTY_AWARD};
pub use finance::{sales_total, SalesReport};
pub use orchestrator::PaymentOrchestrator;
