use serde::{Deserialize, Serialize};

use crate::domain::repos::PER_PAGE_CEILING;
use crate::domain::service::ServiceConfig;

/// Configuration for the business hierarchy module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BusinessHierarchyConfig {
    /// Page size when a listing does not ask for one.
    pub default_page_size: u64,
    /// Upper bound for any requested page size.
    pub max_page_size: u64,
}

impl Default for BusinessHierarchyConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

impl BusinessHierarchyConfig {
    /// Largest accepted `max_page_size`; larger requests are capped to it.
    pub const PAGE_SIZE_CEILING: u64 = PER_PAGE_CEILING;

    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = BusinessHierarchyConfig::default();
        assert_eq!(cfg.default_page_size, 10);
        assert_eq!(cfg.max_page_size, 100);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg: BusinessHierarchyConfig =
            serde_json::from_str(r#"{ "max_page_size": 25 }"#).unwrap();
        assert_eq!(cfg.default_page_size, 10);
        assert_eq!(cfg.max_page_size, 25);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let res = serde_json::from_str::<BusinessHierarchyConfig>(r#"{ "page": 1 }"#);
        assert!(res.is_err());
    }
}
