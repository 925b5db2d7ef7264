pub mod product;
pub mod pricing;
pub mod specials;

pub use product::{ProductBuilder, ProductDescription, ProductRequest};
pub use pricing::{PricingConfig, PricingPolicy};
pub use specials::{seasonal_specials, SEASONAL_SPECIALS};
