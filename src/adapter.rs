//! Adapter lookup and loading.

use indexmap::IndexSet;

/// Outcome of attempting to load an adapter's driver module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterLoad {
    /// The driver module loaded and is ready to use.
    Loaded,
    /// No driver module exists for the adapter name.
    NotFound,
    /// The driver module exists but one of its own dependencies failed to
    /// load.
    Failed {
        /// Description of the failing dependency.
        cause: String,
    },
}

/// Collaborator that knows which database adapters are available.
///
/// Implementations answer two questions: can the driver module for a given
/// adapter be loaded, and is the connection factory named
/// `<adapter>_connection` available on the connection-handling facility.
pub trait AdapterRegistry {
    /// Attempt to load the driver module for `adapter`.
    fn load(&self, adapter: &str) -> AdapterLoad;

    /// Whether the named connection factory is available.
    fn provides(&self, adapter_method: &str) -> bool;
}

/// Adapter registry backed by a fixed set of adapter names.
///
/// Every registered adapter loads successfully and provides its
/// `<adapter>_connection` factory.
#[derive(Debug, Clone, Default)]
pub struct StaticAdapterRegistry {
    adapters: IndexSet<String>,
}

impl StaticAdapterRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the stock adapters.
    pub fn with_builtins() -> Self {
        Self::new()
            .register("postgresql")
            .register("mysql2")
            .register("sqlite3")
    }

    /// Register an adapter name.
    pub fn register(mut self, adapter: impl Into<String>) -> Self {
        self.adapters.insert(adapter.into());
        self
    }
}

impl AdapterRegistry for StaticAdapterRegistry {
    fn load(&self, adapter: &str) -> AdapterLoad {
        if self.adapters.contains(adapter) {
            AdapterLoad::Loaded
        } else {
            AdapterLoad::NotFound
        }
    }

    fn provides(&self, adapter_method: &str) -> bool {
        adapter_method
            .strip_suffix("_connection")
            .is_some_and(|adapter| self.adapters.contains(adapter))
    }
}
