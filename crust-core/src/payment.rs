use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crust_shared::{Money, PaymentConfirmedEvent};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    Wallet,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "CARD",
            PaymentMethod::Wallet => "WALLET",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Card => write!(f, "Credit Card"),
            PaymentMethod::Wallet => write!(f, "Digital Wallet"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Succeeded,
    Declined,
}

/// What a recorder hands back once the amount has been taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub reference: String, // e.g. card_5f0c...
    pub method: PaymentMethod,
    pub amount: Money,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl PaymentConfirmation {
    pub fn is_success(&self) -> bool {
        self.status == PaymentStatus::Succeeded
    }

    /// Human-readable confirmation line, e.g. `Paid $16.00 via Credit Card.`
    pub fn message(&self) -> String {
        match self.status {
            PaymentStatus::Succeeded => format!("Paid {} via {}.", self.amount, self.method),
            PaymentStatus::Declined => {
                format!("Payment of {} via {} was declined.", self.amount, self.method)
            }
        }
    }

    pub fn to_event(&self) -> PaymentConfirmedEvent {
        PaymentConfirmedEvent {
            reference: self.reference.clone(),
            method: self.method.code().to_string(),
            amount_cents: self.amount.cents(),
            timestamp: self.created_at.timestamp(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment gateway failure: {0}")]
    Gateway(String),
}

/// A way of taking money from the customer.
///
/// The built-in recorders always succeed; an external gateway plugs in
/// here and may report `Declined` or fail outright.
#[async_trait]
pub trait PaymentRecorder: Send + Sync {
    fn method(&self) -> PaymentMethod;

    /// Record a payment of `amount`. Never touches the order it pays for.
    async fn process(&self, amount: Money) -> Result<PaymentConfirmation, PaymentError>;
}

pub struct CardPayment;

#[async_trait]
impl PaymentRecorder for CardPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Card
    }

    async fn process(&self, amount: Money) -> Result<PaymentConfirmation, PaymentError> {
        Ok(record_success(self.method(), amount))
    }
}

pub struct WalletPayment;

#[async_trait]
impl PaymentRecorder for WalletPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Wallet
    }

    async fn process(&self, amount: Money) -> Result<PaymentConfirmation, PaymentError> {
        Ok(record_success(self.method(), amount))
    }
}

/// Built-in recorder for a payment method.
pub fn recorder_for(method: PaymentMethod) -> Arc<dyn PaymentRecorder> {
    match method {
        PaymentMethod::Card => Arc::new(CardPayment),
        PaymentMethod::Wallet => Arc::new(WalletPayment),
    }
}

fn record_success(method: PaymentMethod, amount: Money) -> PaymentConfirmation {
    let confirmation = PaymentConfirmation {
        reference: format!("{}_{}", method.code().to_lowercase(), Uuid::new_v4().simple()),
        method,
        amount,
        status: PaymentStatus::Succeeded,
        created_at: Utc::now(),
    };

    tracing::info!(
        reference = %confirmation.reference,
        method = method.code(),
        amount = %amount,
        "Payment recorded"
    );

    confirmation
}
