use crate::models::{Feedback, Order, OrderError};
use crate::profile::CustomerProfile;
use crust_catalog::{PricingPolicy, ProductDescription};
use crust_shared::Masked;
use uuid::Uuid;

/// Points granted for every finalized order unless configured otherwise.
pub const DEFAULT_LOYALTY_AWARD: u32 = 10;

/// Prices orders and moves them into a customer's history.
pub struct OrderManager {
    pricing: PricingPolicy,
    loyalty_award: u32,
}

impl OrderManager {
    pub fn new(pricing: PricingPolicy, loyalty_award: u32) -> Self {
        Self {
            pricing,
            loyalty_award,
        }
    }

    pub fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    pub fn loyalty_award(&self) -> u32 {
        self.loyalty_award
    }

    /// Price a product for a customer. The order is not recorded yet.
    pub fn place_order(&self, profile: &CustomerProfile, product: ProductDescription) -> Order {
        let order = Order::new(product, profile.name().as_str(), &self.pricing);

        tracing::debug!(
            order_id = %order.id(),
            customer = %Masked(profile.name()),
            price = %order.price(),
            "Order placed"
        );

        order
    }

    /// Record the order and grant the loyalty award in one step. An order
    /// already in the history is refused and earns nothing.
    pub fn finalize_order(
        &self,
        profile: &mut CustomerProfile,
        order: Order,
    ) -> Result<Uuid, OrderError> {
        let order_id = order.id();
        profile.record_order(order)?;
        profile.earn_loyalty(self.loyalty_award);

        tracing::info!(
            %order_id,
            profile_id = %profile.id(),
            loyalty_points = profile.loyalty_points(),
            "Order finalized"
        );

        Ok(order_id)
    }

    pub fn attach_feedback(
        &self,
        profile: &mut CustomerProfile,
        order_id: &Uuid,
        feedback: Feedback,
    ) -> Result<(), OrderError> {
        let rating = feedback.rating.value();
        profile.order_mut(order_id)?.attach_feedback(feedback)?;

        tracing::info!(%order_id, rating, "Feedback attached");
        Ok(())
    }
}

impl Default for OrderManager {
    fn default() -> Self {
        Self::new(PricingPolicy::default(), DEFAULT_LOYALTY_AWARD)
    }
}
