use crate::product::ProductDescription;
use crust_shared::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Price of a plain pizza
    pub base_price: Money,

    /// Added once per topping, duplicates included
    pub topping_unit_price: Money,

    /// Added when the seasonal special is requested
    pub special_surcharge: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price: Money::from_cents(1000),
            topping_unit_price: Money::from_cents(150),
            special_surcharge: Money::from_cents(300),
        }
    }
}

/// Deterministic pricing: base + toppings * unit + optional surcharge.
#[derive(Debug, Clone, Default)]
pub struct PricingPolicy {
    config: PricingConfig,
}

impl PricingPolicy {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn price(&self, product: &ProductDescription) -> Money {
        let toppings = self.config.topping_unit_price * product.topping_count();
        let mut price = self.config.base_price + toppings;

        if product.is_seasonal_special() {
            price += self.config.special_surcharge;
        }

        price
    }
}
