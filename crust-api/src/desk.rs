use crate::error::{DeskError, DeskResult};
use chrono::Utc;
use crust_catalog::{
    seasonal_specials, PricingConfig, PricingPolicy, ProductDescription, ProductRequest,
};
use crust_core::{PaymentConfirmation, PaymentMethod, PaymentRecorder};
use crust_order::{
    normalize_name, CustomerProfile, Feedback, Order, OrderManager, OrderSummary,
    PaymentOrchestrator, Receipt, SalesReport, DEFAULT_LOYALTY_AWARD,
};
use crust_shared::{
    DomainEvent, FeedbackAttachedEvent, Money, OrderFinalizedEvent, OrderPlacedEvent,
};
use crust_store::{Config, CustomerRegistry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Opaque reference to a customer profile held by the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileHandle(pub Uuid);

/// Opaque reference to a finalized order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderHandle {
    pub profile_id: Uuid,
    pub order_id: Uuid,
}

/// The order-taking surface the menu layer talks to. Owns every profile
/// and order for the session; nothing outlives it.
pub struct OrderDesk {
    registry: CustomerRegistry,
    orders: OrderManager,
    payments: PaymentOrchestrator,
    events: Vec<DomainEvent>,
}

impl OrderDesk {
    /// Fails when the configured business rules carry a negative price.
    pub fn new(config: &Config) -> DeskResult<Self> {
        let rules = &config.business_rules;
        Ok(Self::with_rules(
            rules.pricing_config()?,
            rules.loyalty_points_per_order,
        ))
    }

    fn with_rules(pricing: PricingConfig, loyalty_award: u32) -> Self {
        Self {
            registry: CustomerRegistry::new(),
            orders: OrderManager::new(PricingPolicy::new(pricing), loyalty_award),
            payments: PaymentOrchestrator::new(),
            events: Vec::new(),
        }
    }

    /// Swap in another recorder for its payment method.
    pub fn register_recorder(&mut self, recorder: Arc<dyn PaymentRecorder>) {
        self.payments.register(recorder);
    }

    pub fn registry(&self) -> &CustomerRegistry {
        &self.registry
    }

    pub fn create_profile(&mut self, name: &str) -> DeskResult<ProfileHandle> {
        Ok(ProfileHandle(self.registry.create_profile(name)?))
    }

    pub fn find_profile(&self, name: &str) -> DeskResult<ProfileHandle> {
        self.registry
            .find_by_name(name)
            .map(|profile| ProfileHandle(profile.id()))
            .ok_or_else(|| DeskError::ProfileNotFound(name.to_string()))
    }

    pub fn build_product(&self, request: ProductRequest) -> DeskResult<ProductDescription> {
        Ok(request.validate()?)
    }

    /// Price the product for the customer. Nothing is recorded until
    /// [`OrderDesk::finalize_order`].
    pub fn place_order(
        &mut self,
        profile: ProfileHandle,
        product: ProductDescription,
    ) -> DeskResult<Order> {
        let profile = self.profile(profile)?;
        let order = self.orders.place_order(profile, product);

        self.events.push(DomainEvent::OrderPlaced(OrderPlacedEvent {
            order_id: order.id(),
            customer_name: order.customer_name().to_string(),
            price_cents: order.price().cents(),
            timestamp: Utc::now().timestamp(),
        }));

        Ok(order)
    }

    /// Take payment. A declined payment comes back as `Ok` with a
    /// `Declined` status; only gateway failures are errors.
    pub async fn pay(
        &mut self,
        method: PaymentMethod,
        amount: Money,
    ) -> DeskResult<PaymentConfirmation> {
        let confirmation = self.payments.pay(method, amount).await?;

        if confirmation.is_success() {
            self.events.push(DomainEvent::PaymentConfirmed(confirmation.to_event()));
        } else {
            tracing::warn!(reference = %confirmation.reference, "Payment declined");
        }

        Ok(confirmation)
    }

    /// Add the order to the customer's history and grant loyalty points.
    /// An order already in the history is refused.
    pub fn finalize_order(
        &mut self,
        profile: ProfileHandle,
        order: Order,
    ) -> DeskResult<OrderHandle> {
        let award = self.orders.loyalty_award();
        let profile = self
            .registry
            .get_mut(&profile.0)
            .ok_or(DeskError::UnknownProfile(profile.0))?;

        if normalize_name(order.customer_name()) != profile.name().key() {
            return Err(DeskError::CustomerMismatch { order_id: order.id() });
        }

        let order_id = self.orders.finalize_order(profile, order)?;

        self.events.push(DomainEvent::OrderFinalized(OrderFinalizedEvent {
            order_id,
            profile_id: profile.id(),
            loyalty_awarded: award,
            loyalty_balance: profile.loyalty_points(),
            timestamp: Utc::now().timestamp(),
        }));

        Ok(OrderHandle {
            profile_id: profile.id(),
            order_id,
        })
    }

    pub fn attach_feedback(
        &mut self,
        order: OrderHandle,
        rating: i64,
        comment: &str,
    ) -> DeskResult<()> {
        let feedback = Feedback::new(rating, comment)?;
        let rating = feedback.rating.value();
        let profile = self
            .registry
            .get_mut(&order.profile_id)
            .ok_or(DeskError::UnknownProfile(order.profile_id))?;

        self.orders.attach_feedback(profile, &order.order_id, feedback)?;

        self.events.push(DomainEvent::FeedbackAttached(FeedbackAttachedEvent {
            order_id: order.order_id,
            rating,
            timestamp: Utc::now().timestamp(),
        }));

        Ok(())
    }

    pub fn order_history(&self, profile: ProfileHandle) -> DeskResult<Vec<OrderSummary>> {
        Ok(self.profile(profile)?.history_summaries())
    }

    pub fn loyalty_points(&self, profile: ProfileHandle) -> DeskResult<u32> {
        Ok(self.profile(profile)?.loyalty_points())
    }

    pub fn receipt(&self, order: OrderHandle) -> DeskResult<Receipt> {
        let profile = self
            .registry
            .get(&order.profile_id)
            .ok_or(DeskError::UnknownProfile(order.profile_id))?;

        profile
            .order(&order.order_id)
            .map(Order::receipt)
            .ok_or_else(|| crust_order::OrderError::NotFound(order.order_id).into())
    }

    pub fn sales_total(&self) -> Money {
        self.sales_report().total_sales
    }

    pub fn sales_report(&self) -> SalesReport {
        SalesReport::generate(self.registry.profiles())
    }

    pub fn seasonal_specials(&self) -> &'static [&'static str] {
        seasonal_specials()
    }

    /// Hand over every event raised since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    fn profile(&self, handle: ProfileHandle) -> DeskResult<&CustomerProfile> {
        self.registry
            .get(&handle.0)
            .ok_or(DeskError::UnknownProfile(handle.0))
    }
}

impl Default for OrderDesk {
    fn default() -> Self {
        Self::with_rules(PricingConfig::default(), DEFAULT_LOYALTY_AWARD)
    }
}
