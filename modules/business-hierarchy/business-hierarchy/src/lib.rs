//! Business Hierarchy Module
//!
//! Economic groups, brands, units and collaborators with validated fields,
//! parent references and per-operation permissions.
//!
//! ## Public API
//!
//! The public API is defined in the `business-hierarchy-sdk` crate and re-exported here:
//! - `BusinessHierarchyClient` - trait for in-process callers
//! - `Payload`, `Record`, `NormalizedRecord` and the per-entity models
//! - `BusinessHierarchyError` - error types
//!
//! Obtain a client with `BusinessHierarchy::connect(dsn, &cfg).await?.client()`.

// === PUBLIC API (from SDK) ===
pub use business_hierarchy_sdk::{
    BusinessHierarchyClient, BusinessHierarchyError, NormalizedRecord, Payload, Record,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::BusinessHierarchy;

pub mod config;
pub use config::BusinessHierarchyConfig;

// === LOCAL CLIENT ===
pub mod local_client;

// === INTERNAL MODULES ===
// WARNING: These modules are internal implementation details!
// They are exposed only for comprehensive testing and should NOT be used by external consumers.
// Only use the SDK types for stable public APIs.
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
