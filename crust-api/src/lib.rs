//! Order desk for a single pizzeria: customer profiles, customized pizzas,
//! deterministic pricing, pluggable payment and a per-session sales report.
//!
//! The menu/input loop and any rendering live outside this crate and talk to
//! [`OrderDesk`] through plain in-process calls.

use anyhow::Context;

pub mod desk;
pub mod error;
pub mod telemetry;

pub use crust_catalog::{ProductBuilder, ProductDescription, ProductRequest};
pub use crust_core::{PaymentConfirmation, PaymentMethod, PaymentStatus};
pub use crust_order::{OrderSummary, Receipt, SalesReport};
pub use crust_shared::{DomainEvent, Money};
pub use crust_store::Config;
pub use desk::{OrderDesk, OrderHandle, ProfileHandle};
pub use error::{DeskError, DeskResult, ErrorKind};

/// Load configuration from `./config`, install tracing and open an empty desk.
pub fn bootstrap() -> anyhow::Result<OrderDesk> {
    let config = Config::load().context("Failed to load config")?;
    telemetry::init_tracing(&config.logging).context("Failed to initialise tracing")?;

    tracing::info!(
        base_price_cents = config.business_rules.base_price_cents,
        loyalty_points_per_order = config.business_rules.loyalty_points_per_order,
        "Order desk ready"
    );

    OrderDesk::new(&config).context("Invalid business rules")
}
