//! The resolved connection specification.

use crate::map::{ConfigMap, ConfigValue};

/// A fully resolved, adapter-validated connection specification.
///
/// Built only by [`Resolver::spec`](crate::Resolver::spec) and never mutated
/// afterwards. Cloning is the one permitted derivation; the clone owns an
/// independent copy of the configuration map.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionSpecification {
    name: String,
    config: ConfigMap,
    adapter_method: String,
}

impl ConnectionSpecification {
    pub(crate) fn new(name: String, config: ConfigMap, adapter_method: String) -> Self {
        Self {
            name,
            config,
            adapter_method,
        }
    }

    /// The connection name (an environment name, or `"primary"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved configuration, without the `name` key.
    pub fn config(&self) -> &ConfigMap {
        &self.config
    }

    /// The connection factory selector, `<adapter>_connection`.
    pub fn adapter_method(&self) -> &str {
        &self.adapter_method
    }

    /// The configuration with the specification name merged back in.
    pub fn to_map(&self) -> ConfigMap {
        let mut map = self.config.clone();
        map.insert("name".to_string(), ConfigValue::from(self.name.as_str()));
        map
    }
}
