use crate::models::{Order, OrderError, OrderSummary};
use chrono::{DateTime, Utc};
use crust_core::{require_text, ValidationResult};
use crust_shared::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A customer's display name. Two names are the same customer when they
/// match ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerName(String);

impl CustomerName {
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        Ok(Self(require_text("customer name", raw)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lookup key: the name lowercased.
    pub fn key(&self) -> String {
        normalize_name(&self.0)
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A customer, their loyalty balance and every order they have finalized.
#[derive(Debug, Serialize)]
pub struct CustomerProfile {
    id: Uuid,
    name: CustomerName,
    loyalty_points: u32,
    orders: Vec<Order>,
    created_at: DateTime<Utc>,
}

impl CustomerProfile {
    pub fn new(name: CustomerName) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            loyalty_points: 0,
            orders: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &CustomerName {
        &self.name
    }

    pub fn loyalty_points(&self) -> u32 {
        self.loyalty_points
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append to the history. Orders are never removed, and an order id
    /// already in the history is refused.
    pub fn record_order(&mut self, order: Order) -> Result<(), OrderError> {
        if self.order(&order.id()).is_some() {
            return Err(OrderError::AlreadyRecorded(order.id()));
        }
        self.orders.push(order);
        Ok(())
    }

    pub fn earn_loyalty(&mut self, points: u32) {
        self.loyalty_points = self.loyalty_points.saturating_add(points);
    }

    /// Orders oldest first. Each call starts a new pass over the history.
    pub fn history(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter()
    }

    pub fn history_summaries(&self) -> Vec<OrderSummary> {
        self.history().map(Order::summary).collect()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn order(&self, order_id: &Uuid) -> Option<&Order> {
        self.orders.iter().find(|o| o.id() == *order_id)
    }

    pub fn order_mut(&mut self, order_id: &Uuid) -> Result<&mut Order, OrderError> {
        self.orders
            .iter_mut()
            .find(|o| o.id() == *order_id)
            .ok_or(OrderError::NotFound(*order_id))
    }

    pub fn total_spent(&self) -> Money {
        self.history().map(Order::price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crust_catalog::{PricingPolicy, ProductBuilder};

    fn order_with_toppings(customer: &str, toppings: &[&str]) -> Order {
        let mut builder = ProductBuilder::new()
            .crust("Thin")
            .sauce("Tomato")
            .cheese("Mozzarella");
        for topping in toppings {
            builder = builder.topping(*topping);
        }
        Order::new(builder.build(), customer, &PricingPolicy::default())
    }

    #[test]
    fn test_empty_history_is_valid() {
        let profile = CustomerProfile::new(CustomerName::parse("Alice").unwrap());

        assert_eq!(profile.history().count(), 0);
        assert!(profile.history_summaries().is_empty());
        assert_eq!(profile.loyalty_points(), 0);
        assert_eq!(profile.total_spent(), Money::ZERO);
    }

    #[test]
    fn test_history_preserves_insertion_order() {
        let mut profile = CustomerProfile::new(CustomerName::parse("Alice").unwrap());
        let orders: Vec<Order> = (0..4)
            .map(|n| order_with_toppings("Alice", &vec!["Olives"; n]))
            .collect();
        let ids: Vec<Uuid> = orders.iter().map(Order::id).collect();

        for order in orders {
            profile.record_order(order).unwrap();
        }

        let seen: Vec<Uuid> = profile.history().map(Order::id).collect();
        assert_eq!(seen, ids);

        // restartable
        let again: Vec<Uuid> = profile.history().map(Order::id).collect();
        assert_eq!(again, ids);
        assert_eq!(profile.order_count(), 4);
    }

    #[test]
    fn test_loyalty_is_additive() {
        let mut profile = CustomerProfile::new(CustomerName::parse("Bob").unwrap());
        for k in 1..=7u32 {
            profile.earn_loyalty(10);
            assert_eq!(profile.loyalty_points(), 10 * k);
        }
    }

    #[test]
    fn test_order_lookup() {
        let mut profile = CustomerProfile::new(CustomerName::parse("Alice").unwrap());
        let order = order_with_toppings("Alice", &["Ham"]);
        let id = order.id();
        profile.record_order(order).unwrap();

        assert_eq!(profile.order(&id).unwrap().price(), Money::from_cents(1150));
        assert!(profile.order_mut(&id).is_ok());
        assert!(matches!(profile.order_mut(&Uuid::new_v4()), Err(OrderError::NotFound(_))));
    }

    #[test]
    fn test_same_order_recorded_once() {
        let mut profile = CustomerProfile::new(CustomerName::parse("Alice").unwrap());
        let order = order_with_toppings("Alice", &["Ham"]);
        let id = order.id();
        let copy: Order = serde_json::from_value(serde_json::to_value(&order).unwrap()).unwrap();

        profile.record_order(order).unwrap();
        let result = profile.record_order(copy);

        assert!(matches!(result, Err(OrderError::AlreadyRecorded(dup)) if dup == id));
        assert_eq!(profile.order_count(), 1);
        assert_eq!(profile.total_spent(), Money::from_cents(1150));
    }

    #[test]
    fn test_customer_name_key() {
        let name = CustomerName::parse("  ALICE ").unwrap();
        assert_eq!(name.as_str(), "ALICE");
        assert_eq!(name.key(), "alice");
        assert!(CustomerName::parse("").is_err());
    }
}
