use crust_catalog::PricingConfig;
use crust_core::{require_non_negative, ValidationResult};
use crust_order::DEFAULT_LOYALTY_AWARD;
use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub business_rules: BusinessRules,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BusinessRules {
    pub base_price_cents: i64,
    pub topping_unit_price_cents: i64,
    pub special_surcharge_cents: i64,
    #[serde(default = "default_loyalty_award")]
    pub loyalty_points_per_order: u32,
}

fn default_loyalty_award() -> u32 {
    DEFAULT_LOYALTY_AWARD
}

impl Default for BusinessRules {
    fn default() -> Self {
        let pricing = PricingConfig::default();
        Self {
            base_price_cents: pricing.base_price.cents(),
            topping_unit_price_cents: pricing.topping_unit_price.cents(),
            special_surcharge_cents: pricing.special_surcharge.cents(),
            loyalty_points_per_order: DEFAULT_LOYALTY_AWARD,
        }
    }
}

impl BusinessRules {
    /// Prices as `Money`. A negative amount is refused so no order can come
    /// out with a negative total.
    pub fn pricing_config(&self) -> ValidationResult<PricingConfig> {
        Ok(PricingConfig {
            base_price: require_non_negative("base price", self.base_price_cents)?,
            topping_unit_price: require_non_negative(
                "topping unit price",
                self.topping_unit_price_cents,
            )?,
            special_surcharge: require_non_negative(
                "special surcharge",
                self.special_surcharge_cents,
            )?,
        })
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `crust_order=debug`. `RUST_LOG` wins when set.
    pub filter: Option<String>,
}

impl Config {
    /// Load from `./config` relative to the working directory.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let dir = dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let source = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&source("default")))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&source(&run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&source("local")).required(false))
            // Eg.. `CRUST__BUSINESS_RULES__LOYALTY_POINTS_PER_ORDER=20`
            .add_source(config::Environment::with_prefix("CRUST").separator("__"))
            .build()?;

        let config: Self = s.try_deserialize()?;
        config
            .business_rules
            .pricing_config()
            .map_err(|e| config::ConfigError::Message(format!("business_rules: {e}")))?;

        Ok(config)
    }
}
