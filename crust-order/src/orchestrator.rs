use crust_core::payment::{
    recorder_for, PaymentConfirmation, PaymentError, PaymentMethod, PaymentRecorder,
};
use crust_shared::Money;
use std::sync::Arc;

/// Routes a payment to the recorder registered for its method. Every
/// method always has a recorder, so routing itself cannot fail.
pub struct PaymentOrchestrator {
    card: Arc<dyn PaymentRecorder>,
    wallet: Arc<dyn PaymentRecorder>,
}

impl PaymentOrchestrator {
    /// Card and wallet recorders that always succeed.
    pub fn new() -> Self {
        Self {
            card: recorder_for(PaymentMethod::Card),
            wallet: recorder_for(PaymentMethod::Wallet),
        }
    }

    /// Replace the recorder for `recorder.method()`, e.g. with a real gateway.
    pub fn register(&mut self, recorder: Arc<dyn PaymentRecorder>) {
        match recorder.method() {
            PaymentMethod::Card => self.card = recorder,
            PaymentMethod::Wallet => self.wallet = recorder,
        }
    }

    fn recorder(&self, method: PaymentMethod) -> &Arc<dyn PaymentRecorder> {
        match method {
            PaymentMethod::Card => &self.card,
            PaymentMethod::Wallet => &self.wallet,
        }
    }

    pub async fn pay(
        &self,
        method: PaymentMethod,
        amount: Money,
    ) -> Result<PaymentConfirmation, PaymentError> {
        self.recorder(method).process(amount).await
    }
}

impl Default for PaymentOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crust_core::payment::PaymentStatus;

    struct DecliningGateway;

    #[async_trait::async_trait]
    impl PaymentRecorder for DecliningGateway {
        fn method(&self) -> PaymentMethod {
            PaymentMethod::Card
        }

        async fn process(&self, amount: Money) -> Result<PaymentConfirmation, PaymentError> {
            Ok(PaymentConfirmation {
                reference: "declined_1".to_string(),
                method: PaymentMethod::Card,
                amount,
                status: PaymentStatus::Declined,
                created_at: chrono::Utc::now(),
            })
        }
    }

    struct OfflineGateway;

    #[async_trait::async_trait]
    impl PaymentRecorder for OfflineGateway {
        fn method(&self) -> PaymentMethod {
            PaymentMethod::Wallet
        }

        async fn process(&self, _amount: Money) -> Result<PaymentConfirmation, PaymentError> {
            Err(PaymentError::Gateway("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_default_recorders_succeed() {
        let orchestrator = PaymentOrchestrator::new();

        let card = orchestrator
            .pay(PaymentMethod::Card, Money::from_cents(1600))
            .await
            .unwrap();
        let wallet = orchestrator
            .pay(PaymentMethod::Wallet, Money::from_cents(1000))
            .await
            .unwrap();

        assert!(card.is_success());
        assert_eq!(card.method, PaymentMethod::Card);
        assert!(wallet.is_success());
        assert_eq!(wallet.amount, Money::from_cents(1000));
    }

    #[tokio::test]
    async fn test_registered_gateway_can_decline() {
        let mut orchestrator = PaymentOrchestrator::new();
        orchestrator.register(Arc::new(DecliningGateway));

        let confirmation = orchestrator
            .pay(PaymentMethod::Card, Money::from_cents(1200))
            .await
            .unwrap();
        assert!(!confirmation.is_success());
        assert_eq!(
            confirmation.message(),
            "Payment of $12.00 via Credit Card was declined."
        );

        // the other method keeps its own recorder
        let wallet = orchestrator
            .pay(PaymentMethod::Wallet, Money::from_cents(1200))
            .await
            .unwrap();
        assert!(wallet.is_success());
    }

    #[tokio::test]
    async fn test_every_method_routes_to_matching_recorder() {
        let orchestrator = PaymentOrchestrator::new();

        for method in [PaymentMethod::Card, PaymentMethod::Wallet] {
            let confirmation = orchestrator.pay(method, Money::from_cents(500)).await.unwrap();
            assert_eq!(confirmation.method, method);
            assert_eq!(orchestrator.recorder(method).method(), method);
        }
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let mut orchestrator = PaymentOrchestrator::new();
        orchestrator.register(Arc::new(OfflineGateway));

        let result = orchestrator.pay(PaymentMethod::Wallet, Money::from_cents(1000)).await;
        assert!(matches!(result, Err(PaymentError::Gateway(_))));
    }
}
