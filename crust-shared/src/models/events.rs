use uuid::Uuid;

/// Everything the order desk reports to the presentation layer, in the
/// order it happened.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    OrderPlaced(OrderPlacedEvent),
    PaymentConfirmed(PaymentConfirmedEvent),
    OrderFinalized(OrderFinalizedEvent),
    FeedbackAttached(FeedbackAttachedEvent),
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct OrderPlacedEvent {
    pub order_id: Uuid,
    pub customer_name: String,
    pub price_cents: i64,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct PaymentConfirmedEvent {
    pub reference: String,
    pub method: String, // CARD | WALLET
    pub amount_cents: i64,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct OrderFinalizedEvent {
    pub order_id: Uuid,
    pub profile_id: Uuid,
    pub loyalty_awarded: u32,
    pub loyalty_balance: u32,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct FeedbackAttachedEvent {
    pub order_id: Uuid,
    pub rating: u8,
    pub timestamp: i64,
}
