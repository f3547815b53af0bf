use std::sync::Arc;

use business_hierarchy_sdk::BusinessHierarchyClient;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::config::BusinessHierarchyConfig;
use crate::domain::service::Service;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{
    OrmBrandsRepository, OrmCollaboratorsRepository, OrmEconomicGroupsRepository,
    OrmUnitsRepository,
};
use crate::local_client::BusinessHierarchyLocalClient;

/// Type alias for the concrete `Service` type used with ORM repositories.
/// This lives in the composition root (module.rs) to avoid infra dependencies in domain.
pub(crate) type ConcreteService = Service<
    OrmEconomicGroupsRepository,
    OrmBrandsRepository,
    OrmUnitsRepository,
    OrmCollaboratorsRepository,
>;

/// Composition root: owns the service and hands out clients.
#[derive(Clone)]
pub struct BusinessHierarchy {
    service: Arc<ConcreteService>,
}

impl BusinessHierarchy {
    /// Wire the ORM repositories to an open connection.
    #[must_use]
    pub fn new(db: DatabaseConnection, cfg: &BusinessHierarchyConfig) -> Self {
        debug!(
            "Loaded business_hierarchy config: default_page_size={}, max_page_size={}",
            cfg.default_page_size, cfg.max_page_size
        );
        let service = Service::new(
            db,
            OrmEconomicGroupsRepository,
            OrmBrandsRepository,
            OrmUnitsRepository,
            OrmCollaboratorsRepository,
            cfg.service_config(),
        );
        Self {
            service: Arc::new(service),
        }
    }

    /// Connect to `dsn`, bring the schema up to date and wire the module.
    ///
    /// # Errors
    /// Connection or migration failure.
    pub async fn connect(dsn: &str, cfg: &BusinessHierarchyConfig) -> Result<Self, DbErr> {
        info!("Initializing business_hierarchy module");
        let db = Database::connect(dsn).await?;
        Self::migrate(&db).await?;
        Ok(Self::new(db, cfg))
    }

    /// Apply pending migrations.
    ///
    /// # Errors
    /// Any migration failure.
    pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
        Migrator::up(db, None).await?;
        info!("business_hierarchy schema is up to date");
        Ok(())
    }

    /// Object-safe client for in-process callers.
    #[must_use]
    pub fn client(&self) -> Arc<dyn BusinessHierarchyClient> {
        Arc::new(BusinessHierarchyLocalClient::new(Arc::clone(&self.service)))
    }
}
