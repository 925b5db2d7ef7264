use crust_core::ValidationError;
use crust_order::{normalize_name, CustomerName, CustomerProfile};
use crust_shared::Masked;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory customer directory. Profiles are kept in creation order and
/// are never removed.
#[derive(Debug, Default)]
pub struct CustomerRegistry {
    profiles: Vec<CustomerProfile>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<Uuid, usize>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a profile. Names are unique ignoring case.
    pub fn create_profile(&mut self, name: &str) -> Result<Uuid, RegistryError> {
        let name = CustomerName::parse(name)?;
        let key = name.key();

        if self.by_name.contains_key(&key) {
            return Err(RegistryError::DuplicateProfile(name.to_string()));
        }

        let profile = CustomerProfile::new(name);
        let id = profile.id();
        let index = self.profiles.len();

        tracing::info!(profile_id = %id, customer = %Masked(profile.name()), "Profile created");

        self.profiles.push(profile);
        self.by_name.insert(key, index);
        self.by_id.insert(id, index);
        Ok(id)
    }

    /// Case-insensitive exact match. `None` means a profile must be created first.
    pub fn find_by_name(&self, name: &str) -> Option<&CustomerProfile> {
        self.by_name
            .get(&normalize_name(name))
            .map(|&index| &self.profiles[index])
    }

    pub fn get(&self, id: &Uuid) -> Option<&CustomerProfile> {
        self.by_id.get(id).map(|&index| &self.profiles[index])
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut CustomerProfile> {
        let index = *self.by_id.get(id)?;
        self.profiles.get_mut(index)
    }

    /// Profiles in creation order.
    pub fn profiles(&self) -> impl Iterator<Item = &CustomerProfile> + '_ {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Profile already exists: {0}")]
    DuplicateProfile(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
