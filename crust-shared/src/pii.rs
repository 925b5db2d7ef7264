use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wraps customer-identifying data so it never shows up in `Debug` or
/// `Display` output, e.g. `tracing::info!(customer = %Masked(&name))`.
///
/// Serialization still writes the real value; events handed to the
/// presentation layer need it.
#[derive(Clone, Deserialize)]
pub struct Masked<T>(pub T);

impl<T> Masked<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: fmt::Display> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: fmt::Display> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_name_hidden_in_logs() {
        let name = Masked::new("Alice".to_string());
        assert_eq!(format!("{}", name), "********");
        assert_eq!(format!("{:?}", name), "********");
        assert_eq!(name.expose(), "Alice");
    }

    #[test]
    fn test_serialize_keeps_value() {
        let name = Masked::new("Alice");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Alice\"");
    }
}
