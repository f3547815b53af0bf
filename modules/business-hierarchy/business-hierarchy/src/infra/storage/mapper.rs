use business_hierarchy_sdk::{Brand, Collaborator, EconomicGroup, Unit};

use crate::infra::storage::entity::{brand, collaborator, economic_group, unit};

/// Convert a database entity to a contract model
impl From<economic_group::Model> for EconomicGroup {
    fn from(e: economic_group::Model) -> Self {
        Self {
            id: e.id,
            name: e.name,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

impl From<brand::Model> for Brand {
    fn from(e: brand::Model) -> Self {
        Self {
            id: e.id,
            name: e.name,
            economic_group_id: e.economic_group_id,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

impl From<unit::Model> for Unit {
    fn from(e: unit::Model) -> Self {
        Self {
            id: e.id,
            trade_name: e.trade_name,
            legal_name: e.legal_name,
            tax_id: e.tax_id,
            brand_id: e.brand_id,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

impl From<collaborator::Model> for Collaborator {
    fn from(e: collaborator::Model) -> Self {
        Self {
            id: e.id,
            name: e.name,
            email: e.email,
            personal_tax_id: e.personal_tax_id,
            unit_id: e.unit_id,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}
