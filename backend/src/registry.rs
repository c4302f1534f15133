use std::collections::BTreeMap;
use std::sync::{RwLock, PoisonError};
use shared::models::Binding;
use tracing::info;

/// Name-to-endpoint directory that clients query before calling a service.
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    bindings: RwLock<BTreeMap<String, Binding>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`, replacing any existing binding of the same name.
    pub fn rebind(&self, binding: Binding) {
        let mut bindings = self.bindings.write().unwrap_or_else(PoisonError::into_inner);
        info!("{} bound to registry at '{}'", binding.name, binding.path);
        bindings.insert(binding.name.clone(), binding);
    }

    pub fn lookup(&self, name: &str) -> Option<Binding> {
        self.bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn list(&self) -> Vec<Binding> {
        self.bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }
}
