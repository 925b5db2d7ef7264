use crust_core::{require_text, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A customized pizza, frozen at the moment it was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDescription {
    crust: String,
    sauce: String,
    toppings: Vec<String>,
    cheese: String,
    seasonal_special: bool,
}

impl ProductDescription {
    pub fn crust(&self) -> &str {
        &self.crust
    }

    pub fn sauce(&self) -> &str {
        &self.sauce
    }

    /// Toppings in the order they were added, duplicates included.
    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    pub fn topping_count(&self) -> u32 {
        self.toppings.len() as u32
    }

    pub fn cheese(&self) -> &str {
        &self.cheese
    }

    pub fn is_seasonal_special(&self) -> bool {
        self.seasonal_special
    }
}

impl fmt::Display for ProductDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Crust: {}, Sauce: {}, Cheese: {}, Toppings: [{}]",
            self.crust,
            self.sauce,
            self.cheese,
            self.toppings.join(", ")
        )?;
        if self.seasonal_special {
            write!(f, " [Seasonal Special]")?;
        }
        Ok(())
    }
}

/// Fluent accumulator for a [`ProductDescription`].
///
/// The builder never validates and never fails: fields left unset come out
/// empty. `build` consumes the builder, so every product starts from a
/// fresh one.
#[derive(Debug, Clone, Default)]
pub struct ProductBuilder {
    crust: String,
    sauce: String,
    toppings: Vec<String>,
    cheese: String,
    seasonal_special: bool,
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn crust(mut self, crust: impl Into<String>) -> Self {
        self.crust = crust.into();
        self
    }

    pub fn sauce(mut self, sauce: impl Into<String>) -> Self {
        self.sauce = sauce.into();
        self
    }

    pub fn topping(mut self, topping: impl Into<String>) -> Self {
        self.toppings.push(topping.into());
        self
    }

    /// Adds every entry of a comma-separated line such as `"Olives, Mushroom"`.
    /// Entries are trimmed. Blank entries are dropped instead of becoming
    /// unnamed toppings, so an empty line adds nothing and costs nothing.
    pub fn toppings_from_csv(mut self, line: &str) -> Self {
        self.toppings.extend(
            line.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        );
        self
    }

    pub fn cheese(mut self, cheese: impl Into<String>) -> Self {
        self.cheese = cheese.into();
        self
    }

    pub fn seasonal_special(mut self, special: bool) -> Self {
        self.seasonal_special = special;
        self
    }

    pub fn build(self) -> ProductDescription {
        ProductDescription {
            crust: self.crust,
            sauce: self.sauce,
            toppings: self.toppings,
            cheese: self.cheese,
            seasonal_special: self.seasonal_special,
        }
    }
}

/// Raw customization fields as the menu layer collects them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRequest {
    pub crust: String,
    pub sauce: String,
    #[serde(default)]
    pub toppings: Vec<String>,
    pub cheese: String,
    #[serde(default)]
    pub seasonal_special: bool,
}

impl ProductRequest {
    /// Checks the required fields and builds the product. A blank topping
    /// is an error, not silently dropped, since every topping is priced.
    pub fn validate(self) -> ValidationResult<ProductDescription> {
        let mut builder = ProductBuilder::new()
            .crust(require_text("crust", &self.crust)?)
            .sauce(require_text("sauce", &self.sauce)?)
            .cheese(require_text("cheese", &self.cheese)?)
            .seasonal_special(self.seasonal_special);

        for topping in &self.toppings {
            builder = builder.topping(require_text("topping", topping)?);
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crust_core::ValidationError;

    #[test]
    fn test_builder_collects_fields() {
        let pizza = ProductBuilder::new()
            .crust("Thin")
            .sauce("Tomato")
            .topping("Olives")
            .topping("Mushroom")
            .cheese("Mozzarella")
            .seasonal_special(true)
            .build();

        assert_eq!(pizza.crust(), "Thin");
        assert_eq!(pizza.sauce(), "Tomato");
        assert_eq!(pizza.toppings(), ["Olives", "Mushroom"]);
        assert_eq!(pizza.cheese(), "Mozzarella");
        assert!(pizza.is_seasonal_special());
    }

    #[test]
    fn test_duplicate_toppings_preserved() {
        let pizza = ProductBuilder::new()
            .topping("Olives")
            .topping("Ham")
            .topping("Olives")
            .build();

        assert_eq!(pizza.toppings(), ["Olives", "Ham", "Olives"]);
        assert_eq!(pizza.topping_count(), 3);
    }

    #[test]
    fn test_unset_fields_are_empty() {
        let pizza = ProductBuilder::new().build();

        assert_eq!(pizza.crust(), "");
        assert_eq!(pizza.sauce(), "");
        assert_eq!(pizza.cheese(), "");
        assert!(pizza.toppings().is_empty());
        assert!(!pizza.is_seasonal_special());
    }

    #[test]
    fn test_independent_builders_share_nothing() {
        let base = ProductBuilder::new().crust("Thin").topping("Olives");
        let forked = base.clone().topping("Ham");

        let first = base.build();
        let second = forked.topping("Pineapple").build();

        assert_eq!(first.toppings(), ["Olives"]);
        assert_eq!(second.toppings(), ["Olives", "Ham", "Pineapple"]);
    }

    #[test]
    fn test_toppings_from_csv() {
        let pizza = ProductBuilder::new()
            .toppings_from_csv(" Olives,Mushroom , ,Peppers,")
            .build();

        assert_eq!(pizza.toppings(), ["Olives", "Mushroom", "Peppers"]);
    }

    #[test]
    fn test_describe_format() {
        let pizza = ProductBuilder::new()
            .crust("Thin")
            .sauce("Tomato")
            .topping("Olives")
            .topping("Mushroom")
            .cheese("Mozzarella")
            .seasonal_special(true)
            .build();

        assert_eq!(
            pizza.to_string(),
            "Crust: Thin, Sauce: Tomato, Cheese: Mozzarella, \
             Toppings: [Olives, Mushroom] [Seasonal Special]"
        );

        let plain = ProductBuilder::new().crust("Thick").sauce("Pesto").cheese("Feta").build();
        assert_eq!(
            plain.to_string(),
            "Crust: Thick, Sauce: Pesto, Cheese: Feta, Toppings: []"
        );
    }

    #[test]
    fn test_request_validation() {
        let request = ProductRequest {
            crust: " Thin ".to_string(),
            sauce: "Tomato".to_string(),
            toppings: vec!["Olives".to_string(), " Ham ".to_string()],
            cheese: "Mozzarella".to_string(),
            seasonal_special: false,
        };

        let pizza = request.validate().unwrap();
        assert_eq!(pizza.crust(), "Thin");
        assert_eq!(pizza.toppings(), ["Olives", "Ham"]);
    }

    #[test]
    fn test_request_blank_topping_rejected() {
        let request = ProductRequest {
            crust: "Thin".to_string(),
            sauce: "Tomato".to_string(),
            toppings: vec!["Olives".to_string(), "  ".to_string()],
            cheese: "Mozzarella".to_string(),
            seasonal_special: false,
        };

        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::EmptyField { field: "topping" }
        );
    }

    #[test]
    fn test_toppings_from_empty_line() {
        let pizza = ProductBuilder::new().toppings_from_csv("").build();
        assert_eq!(pizza.topping_count(), 0);
    }

    #[test]
    fn test_request_missing_sauce_rejected() {
        let request = ProductRequest {
            crust: "Thin".to_string(),
            cheese: "Mozzarella".to_string(),
            ..Default::default()
        };

        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::EmptyField { field: "sauce" }
        );
    }

    #[test]
    fn test_request_from_json_defaults() {
        let request: ProductRequest = serde_json::from_str(
            r#"{"crust":"Thin","sauce":"Tomato","cheese":"Cheddar"}"#,
        )
        .unwrap();

        let pizza = request.validate().unwrap();
        assert!(pizza.toppings().is_empty());
        assert!(!pizza.is_seasonal_special());
    }
}
