//! Public models for the `business-hierarchy` module.
//!
//! Three shapes exist per entity:
//! - `*Input` is the raw payload as received; every field is optional so a
//!   missing field can be reported instead of rejected at deserialization.
//! - `New*` is a normalized, validated draft ready to be written.
//! - the bare name (`Brand`, `Unit`, ...) is the persisted record.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::access::EntityKind;

/// Field keys shared by inputs, drafts and validation errors.
pub mod fields {
    pub const NAME: &str = "name";
    pub const ECONOMIC_GROUP_ID: &str = "economic_group_id";
    pub const TRADE_NAME: &str = "trade_name";
    pub const LEGAL_NAME: &str = "legal_name";
    pub const TAX_ID: &str = "tax_id";
    pub const BRAND_ID: &str = "brand_id";
    pub const EMAIL: &str = "email";
    pub const PERSONAL_TAX_ID: &str = "personal_tax_id";
    pub const UNIT_ID: &str = "unit_id";
}

// ==================== Economic group ====================

/// Top-level organizational entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicGroup {
    pub id: i32,
    pub name: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicGroupInput {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEconomicGroup {
    pub name: String,
}

// ==================== Brand ====================

/// Commercial identity owned by one economic group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    pub economic_group_id: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandInput {
    pub name: Option<String>,
    pub economic_group_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBrand {
    pub name: String,
    pub economic_group_id: i32,
}

// ==================== Unit ====================

/// Operating location owned by one brand, identified by a 14-digit tax id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: i32,
    pub trade_name: String,
    pub legal_name: String,
    pub tax_id: String,
    pub brand_id: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitInput {
    pub trade_name: Option<String>,
    pub legal_name: Option<String>,
    pub tax_id: Option<String>,
    pub brand_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUnit {
    pub trade_name: String,
    pub legal_name: String,
    pub tax_id: String,
    pub brand_id: i32,
}

// ==================== Collaborator ====================

/// Person attached to one unit, identified by an 11-digit personal tax id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub personal_tax_id: String,
    pub unit_id: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub personal_tax_id: Option<String>,
    pub unit_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCollaborator {
    pub name: String,
    pub email: String,
    pub personal_tax_id: String,
    pub unit_id: i32,
}

// ==================== Kind-tagged wrappers ====================

/// Raw payload for any entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    EconomicGroup(EconomicGroupInput),
    Brand(BrandInput),
    Unit(UnitInput),
    Collaborator(CollaboratorInput),
}

impl Payload {
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Payload::EconomicGroup(_) => EntityKind::EconomicGroup,
            Payload::Brand(_) => EntityKind::Brand,
            Payload::Unit(_) => EntityKind::Unit,
            Payload::Collaborator(_) => EntityKind::Collaborator,
        }
    }
}

/// Validated, normalized draft for any entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedRecord {
    EconomicGroup(NewEconomicGroup),
    Brand(NewBrand),
    Unit(NewUnit),
    Collaborator(NewCollaborator),
}

impl NormalizedRecord {
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            NormalizedRecord::EconomicGroup(_) => EntityKind::EconomicGroup,
            NormalizedRecord::Brand(_) => EntityKind::Brand,
            NormalizedRecord::Unit(_) => EntityKind::Unit,
            NormalizedRecord::Collaborator(_) => EntityKind::Collaborator,
        }
    }
}

/// Persisted record of any entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    EconomicGroup(EconomicGroup),
    Brand(Brand),
    Unit(Unit),
    Collaborator(Collaborator),
}

impl Record {
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::EconomicGroup(_) => EntityKind::EconomicGroup,
            Record::Brand(_) => EntityKind::Brand,
            Record::Unit(_) => EntityKind::Unit,
            Record::Collaborator(_) => EntityKind::Collaborator,
        }
    }

    #[must_use]
    pub fn id(&self) -> i32 {
        match self {
            Record::EconomicGroup(g) => g.id,
            Record::Brand(b) => b.id,
            Record::Unit(u) => u.id,
            Record::Collaborator(c) => c.id,
        }
    }
}

impl From<EconomicGroup> for Record {
    fn from(v: EconomicGroup) -> Self {
        Record::EconomicGroup(v)
    }
}

impl From<Brand> for Record {
    fn from(v: Brand) -> Self {
        Record::Brand(v)
    }
}

impl From<Unit> for Record {
    fn from(v: Unit) -> Self {
        Record::Unit(v)
    }
}

impl From<Collaborator> for Record {
    fn from(v: Collaborator) -> Self {
        Record::Collaborator(v)
    }
}
