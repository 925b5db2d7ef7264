pub mod models;
pub mod money;
pub mod pii;

pub use models::events::{
    DomainEvent, FeedbackAttachedEvent, OrderFinalizedEvent, OrderPlacedEvent,
    PaymentConfirmedEvent,
};
pub use money::Money;
pub use pii::Masked;
