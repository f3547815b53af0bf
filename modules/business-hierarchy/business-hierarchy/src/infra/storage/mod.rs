//! Infrastructure storage layer - database persistence.
//!
//! This module contains ALL `SeaORM`-specific code and database operations:
//! - `entity/` - `SeaORM` entity definitions (economic groups, brands, units, collaborators)
//! - `mapper.rs` - Conversions between `SeaORM` models and SDK contract types
//! - `*_sea_repo.rs` - repository trait implementations
//! - `migrations/` - Database schema migrations
//!
//! Parent references are enforced with `ON DELETE RESTRICT` and every
//! uniqueness rule is backed by a unique index, so the store refuses what the
//! service pre-checks even when two writers race.

pub mod brands_sea_repo;
pub mod collaborators_sea_repo;
pub mod db;
pub mod economic_groups_sea_repo;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod ordering;
pub mod units_sea_repo;

pub use brands_sea_repo::OrmBrandsRepository;
pub use collaborators_sea_repo::OrmCollaboratorsRepository;
pub use economic_groups_sea_repo::OrmEconomicGroupsRepository;
pub use units_sea_repo::OrmUnitsRepository;
