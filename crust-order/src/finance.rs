use crate::profile::CustomerProfile;
use chrono::Utc;
use crust_shared::Money;
use serde::Serialize;

/// Sales across every customer, recomputed from the order histories on
/// each call. Nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesReport {
    pub total_sales: Money,
    pub order_count: usize,
    pub customer_count: usize,
}

impl SalesReport {
    pub fn generate<'a>(profiles: impl IntoIterator<Item = &'a CustomerProfile>) -> Self {
        let mut report = SalesReport {
            total_sales: Money::ZERO,
            order_count: 0,
            customer_count: 0,
        };

        for profile in profiles {
            report.customer_count += 1;
            for order in profile.history() {
                report.order_count += 1;
                report.total_sales += order.price();
            }
        }

        report
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "report_date": Utc::now().to_rfc3339(),
            "metrics": {
                "total_sales_cents": self.total_sales.cents(),
                "total_sales": self.total_sales.to_string(),
                "order_count": self.order_count,
                "customer_count": self.customer_count
            }
        })
    }
}

pub fn sales_total<'a>(profiles: impl IntoIterator<Item = &'a CustomerProfile>) -> Money {
    SalesReport::generate(profiles).total_sales
}
