#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Test support utilities for `business_hierarchy` integration tests.
//!
//! Provides an in-memory database, security contexts and fixture helpers that
//! build a small hierarchy through the public client.

#![allow(dead_code)] // Support module provides utilities that may not all be used

use std::sync::Arc;

use business_hierarchy::{BusinessHierarchy, BusinessHierarchyConfig};
use business_hierarchy_sdk::{
    Actor, Brand, BrandInput, BusinessHierarchyClient, Collaborator, CollaboratorInput,
    EconomicGroup, EconomicGroupInput, Payload, PermissionSet, Record, Role, SecurityContext,
    Unit, UnitInput,
};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Create a fresh in-memory `SQLite` database with migrations applied.
///
/// # Panics
/// Panics if the database connection or migrations fail.
pub async fn inmem_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    business_hierarchy::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Client over a fresh database, plus the raw connection for direct checks.
pub async fn setup() -> (Arc<dyn BusinessHierarchyClient>, DatabaseConnection) {
    setup_with_config(&BusinessHierarchyConfig::default()).await
}

pub async fn setup_with_config(
    cfg: &BusinessHierarchyConfig,
) -> (Arc<dyn BusinessHierarchyClient>, DatabaseConnection) {
    let db = inmem_db().await;
    let module = BusinessHierarchy::new(db.clone(), cfg);
    (module.client(), db)
}

#[must_use]
pub fn ctx_admin() -> SecurityContext {
    SecurityContext::for_actor(Actor::with_role("admin", Role::Admin))
}

#[must_use]
pub fn ctx_with_role(role: Role) -> SecurityContext {
    SecurityContext::for_actor(Actor::with_role(role.as_str(), role))
}

#[must_use]
pub fn ctx_with_permissions(names: &[&str]) -> SecurityContext {
    let mut permissions = PermissionSet::new();
    permissions.extend(names.iter().copied());
    SecurityContext::for_actor(Actor::new("limited", permissions))
}

// ==================== Payload builders ====================

#[must_use]
pub fn group_payload(name: &str) -> Payload {
    Payload::EconomicGroup(EconomicGroupInput {
        name: Some(name.to_owned()),
    })
}

#[must_use]
pub fn brand_payload(name: &str, economic_group_id: i32) -> Payload {
    Payload::Brand(BrandInput {
        name: Some(name.to_owned()),
        economic_group_id: Some(economic_group_id),
    })
}

#[must_use]
pub fn unit_payload(trade_name: &str, tax_id: &str, brand_id: i32) -> Payload {
    Payload::Unit(UnitInput {
        trade_name: Some(trade_name.to_owned()),
        legal_name: Some(format!("{trade_name} LTDA")),
        tax_id: Some(tax_id.to_owned()),
        brand_id: Some(brand_id),
    })
}

#[must_use]
pub fn collaborator_payload(
    name: &str,
    email: &str,
    personal_tax_id: &str,
    unit_id: i32,
) -> Payload {
    Payload::Collaborator(CollaboratorInput {
        name: Some(name.to_owned()),
        email: Some(email.to_owned()),
        personal_tax_id: Some(personal_tax_id.to_owned()),
        unit_id: Some(unit_id),
    })
}

// ==================== Fixtures ====================

pub async fn seed_group(client: &dyn BusinessHierarchyClient, name: &str) -> EconomicGroup {
    match client
        .create_entity(&ctx_admin(), &group_payload(name))
        .await
        .expect("Failed to seed economic group")
    {
        Record::EconomicGroup(group) => group,
        other => panic!("expected economic group, got {other:?}"),
    }
}

pub async fn seed_brand(
    client: &dyn BusinessHierarchyClient,
    name: &str,
    economic_group_id: i32,
) -> Brand {
    match client
        .create_entity(&ctx_admin(), &brand_payload(name, economic_group_id))
        .await
        .expect("Failed to seed brand")
    {
        Record::Brand(brand) => brand,
        other => panic!("expected brand, got {other:?}"),
    }
}

pub async fn seed_unit(
    client: &dyn BusinessHierarchyClient,
    trade_name: &str,
    tax_id: &str,
    brand_id: i32,
) -> Unit {
    match client
        .create_entity(&ctx_admin(), &unit_payload(trade_name, tax_id, brand_id))
        .await
        .expect("Failed to seed unit")
    {
        Record::Unit(unit) => unit,
        other => panic!("expected unit, got {other:?}"),
    }
}

pub async fn seed_collaborator(
    client: &dyn BusinessHierarchyClient,
    name: &str,
    email: &str,
    personal_tax_id: &str,
    unit_id: i32,
) -> Collaborator {
    match client
        .create_entity(
            &ctx_admin(),
            &collaborator_payload(name, email, personal_tax_id, unit_id),
        )
        .await
        .expect("Failed to seed collaborator")
    {
        Record::Collaborator(collaborator) => collaborator,
        other => panic!("expected collaborator, got {other:?}"),
    }
}

/// One full chain: group, brand, unit, collaborator.
pub struct Chain {
    pub group: EconomicGroup,
    pub brand: Brand,
    pub unit: Unit,
    pub collaborator: Collaborator,
}

pub async fn seed_chain(client: &dyn BusinessHierarchyClient) -> Chain {
    let group = seed_group(client, "Acme Holdings").await;
    let brand = seed_brand(client, "Acme Coffee", group.id).await;
    let unit = seed_unit(client, "Acme Coffee Downtown", "12.345.678/0001-90", brand.id).await;
    let collaborator = seed_collaborator(
        client,
        "Ana Souza",
        "ana@example.com",
        "123.456.789-01",
        unit.id,
    )
    .await;
    Chain {
        group,
        brand,
        unit,
        collaborator,
    }
}
