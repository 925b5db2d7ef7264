use chrono::{DateTime, Utc};
use crust_catalog::{PricingPolicy, ProductDescription};
use crust_core::{ValidationError, ValidationResult};
use crust_shared::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Customer rating, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> ValidationResult<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::RatingOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub rating: Rating,
    pub comment: String,
}

impl Feedback {
    pub fn new(rating: i64, comment: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            rating: Rating::new(rating)?,
            comment: comment.into().trim().to_string(),
        })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rating: {} | Feedback: {}", self.rating.value(), self.comment)
    }
}

/// One pizza bought by one customer. The price is fixed when the order is
/// created and never recomputed.
///
/// Not `Clone`: an order is moved into exactly one history.
#[derive(Debug, Serialize, Deserialize)]
pub struct Order {
    id: Uuid,
    customer_name: String,
    product: ProductDescription,
    price: Money,
    feedback: Option<Feedback>,
    created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        product: ProductDescription,
        customer_name: impl Into<String>,
        pricing: &PricingPolicy,
    ) -> Self {
        let price = pricing.price(&product);
        Self {
            id: Uuid::new_v4(),
            customer_name: customer_name.into(),
            product,
            price,
            feedback: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn product(&self) -> &ProductDescription {
        &self.product
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Feedback can be given once; a second attempt is refused.
    pub fn attach_feedback(&mut self, feedback: Feedback) -> Result<(), OrderError> {
        if self.feedback.is_some() {
            return Err(OrderError::FeedbackAlreadyAttached(self.id));
        }
        self.feedback = Some(feedback);
        Ok(())
    }

    pub fn describe(&self) -> String {
        self.product.to_string()
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            order_id: self.id,
            customer_name: self.customer_name.clone(),
            description: self.describe(),
            price: self.price,
            feedback: self.feedback.clone(),
            created_at: self.created_at,
        }
    }

    pub fn receipt(&self) -> Receipt {
        Receipt {
            order_id: self.id,
            customer_name: self.customer_name.clone(),
            details: self.describe(),
            total: self.price,
        }
    }
}

/// Read-only projection used by history views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub order_id: Uuid,
    pub customer_name: String,
    pub description: String,
    pub price: Money,
    pub feedback: Option<Feedback>,
    pub created_at: DateTime<Utc>,
}

impl OrderSummary {
    pub fn rating(&self) -> Option<u8> {
        self.feedback.as_ref().map(|f| f.rating.value())
    }

    pub fn comment(&self) -> Option<&str> {
        self.feedback.as_ref().map(|f| f.comment.as_str())
    }

    /// `Customer: Alice, Pizza: Crust: Thin, ..., Price: $16.00`
    pub fn details_line(&self) -> String {
        format!(
            "Customer: {}, Pizza: {}, Price: {}",
            self.customer_name, self.description, self.price
        )
    }

    pub fn feedback_line(&self) -> String {
        match &self.feedback {
            Some(feedback) => feedback.to_string(),
            None => "No feedback provided.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub order_id: Uuid,
    pub customer_name: String,
    pub details: String,
    pub total: Money,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========= PAYMENT RECEIPT =========")?;
        writeln!(f, "Customer: {}", self.customer_name)?;
        writeln!(f, "Order Details: {}", self.details)?;
        writeln!(f, "Total Price: {}", self.total)?;
        writeln!(f, "Thank you for your order!")?;
        write!(f, "===================================")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(Uuid),

    #[error("Feedback already attached to order {0}")]
    FeedbackAlreadyAttached(Uuid),

    #[error("Order {0} is already in the customer's history")]
    AlreadyRecorded(Uuid),
}
