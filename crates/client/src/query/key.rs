use std::fmt;

use serde::Serialize;

/// Cache key: a resource family plus the canonical form of its parameters.
///
/// Parameters are stored as compact JSON with object keys sorted, so two
/// structurally equal parameter sets always produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    resource: String,
    params: String,
}

impl QueryKey {
    pub fn new<P: Serialize + ?Sized>(resource: impl Into<String>, params: &P) -> Self {
        // plain data structs; a failure here would be a bug in a Serialize impl
        let params = serde_json::to_value(params)
            .map(|value| value.to_string())
            .unwrap_or_else(|_| "null".to_string());
        Self {
            resource: resource.into(),
            params,
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn params(&self) -> &str {
        &self.params
    }

    /// True when this key belongs to the `resource` family
    pub fn is_in(&self, resource: &str) -> bool {
        self.resource == resource
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.resource, self.params)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use common::prelude::{SyncStatus, SyncsQueryParams};

    use super::*;

    #[test]
    fn test_structurally_equal_params_share_a_key() {
        let a = SyncsQueryParams::default()
            .with_status(SyncStatus::Pending)
            .with_page(1);
        let b = SyncsQueryParams::default()
            .with_page(1)
            .with_status(SyncStatus::Pending);
        assert_eq!(QueryKey::new("syncs", &a), QueryKey::new("syncs", &b));
    }

    #[test]
    fn test_map_order_does_not_matter() {
        let a: HashMap<&str, u32> = [("page", 1), ("size", 20)].into_iter().collect();
        let b: HashMap<&str, u32> = [("size", 20), ("page", 1)].into_iter().collect();
        assert_eq!(QueryKey::new("syncs", &a), QueryKey::new("syncs", &b));
    }

    #[test]
    fn test_undefined_fields_are_absent() {
        let key = QueryKey::new("syncs", &SyncsQueryParams::default().with_page(2));
        assert_eq!(key.params(), r#"{"page":2}"#);
    }

    #[test]
    fn test_resource_family() {
        let key = QueryKey::new("syncs", &SyncsQueryParams::default());
        assert!(key.is_in("syncs"));
        assert!(!key.is_in("sync"));
        assert_ne!(key, QueryKey::new("sync", &SyncsQueryParams::default()));
    }
}
