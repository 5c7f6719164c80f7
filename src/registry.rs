//! Registries of named connection descriptors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::map::ConfigMap;

/// A registry of named connection descriptors, keyed by environment or
/// connection name. Owned by the caller and read-only to the resolver.
pub type Registry = IndexMap<String, RegistryEntry>;

/// One entry of a [`Registry`].
///
/// Mirrors the shapes a YAML/JSON database configuration allows: a bare URL
/// string, a flat connection map, or one level of grouping where connections
/// are nested under a secondary name:
///
/// ```json
/// {
///   "development": "sqlite3:dev.db",
///   "test": { "adapter": "sqlite3", "database": "test.db" },
///   "production": {
///     "primary": { "adapter": "postgresql", "database": "main" },
///     "replica": { "adapter": "postgresql", "database": "main_replica" }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegistryEntry {
    /// A bare connection URL.
    Url(String),
    /// A flat connection map.
    Map(ConfigMap),
    /// A grouping of further entries under a secondary name.
    Group(IndexMap<String, RegistryEntry>),
}

impl RegistryEntry {
    /// Whether this entry is a grouping container rather than a directly
    /// resolvable connection descriptor.
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::ConfigValue;

    #[test]
    fn test_deserialize_url_entry() {
        let entry: RegistryEntry = serde_json::from_str("\"sqlite3:dev.db\"").unwrap();
        assert_eq!(entry, RegistryEntry::Url("sqlite3:dev.db".to_string()));
    }

    #[test]
    fn test_deserialize_map_entry() {
        let entry: RegistryEntry =
            serde_json::from_str(r#"{"adapter": "sqlite3", "pool": 5}"#).unwrap();

        let RegistryEntry::Map(map) = entry else {
            panic!("expected a map entry");
        };
        assert_eq!(map["adapter"], ConfigValue::from("sqlite3"));
        assert_eq!(map["pool"], ConfigValue::from(5i64));
    }

    #[test]
    fn test_deserialize_group_entry() {
        let entry: RegistryEntry = serde_json::from_str(
            r#"{
                "primary": { "adapter": "postgresql", "database": "main" },
                "replica": { "adapter": "postgresql", "database": "main_replica" }
            }"#,
        )
        .unwrap();

        assert!(entry.is_group());
        let RegistryEntry::Group(group) = entry else {
            unreachable!();
        };
        assert_eq!(group.len(), 2);
        assert!(matches!(group["primary"], RegistryEntry::Map(_)));
    }

    #[test]
    fn test_deserialize_full_registry_preserves_order() {
        let registry: Registry = serde_json::from_str(
            r#"{
                "development": "sqlite3:dev.db",
                "test": { "adapter": "sqlite3", "database": "test.db" },
                "production": { "primary": { "adapter": "postgresql" } }
            }"#,
        )
        .unwrap();

        let names: Vec<_> = registry.keys().map(String::as_str).collect();
        assert_eq!(names, ["development", "test", "production"]);
        assert!(registry["production"].is_group());
        assert!(!registry["development"].is_group());
    }
}
