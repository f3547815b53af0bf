#![allow(clippy::unwrap_used, clippy::expect_used)]

//! The store's own constraints back up the service pre-checks.
//!
//! These tests go straight to the repositories, as a concurrent writer that
//! slipped past the pre-check would, and expect the same error shapes.

mod support;

use business_hierarchy::domain::error::DomainError;
use business_hierarchy::domain::repos::{
    BrandsRepository, CollaboratorsRepository, EconomicGroupsRepository, UnitsRepository,
};
use business_hierarchy::infra::storage::{
    OrmBrandsRepository, OrmCollaboratorsRepository, OrmEconomicGroupsRepository,
    OrmUnitsRepository,
};
use business_hierarchy_sdk::{FieldErrors, NewBrand, NewCollaborator, NewEconomicGroup, NewUnit};
use support::inmem_db;

fn field_errors(err: DomainError) -> FieldErrors {
    match err {
        DomainError::Validation(errors) => errors,
        other => panic!("expected validation error, got {other}"),
    }
}

fn unit(tax_id: &str, brand_id: i32) -> NewUnit {
    NewUnit {
        trade_name: "Downtown".to_owned(),
        legal_name: "Downtown LTDA".to_owned(),
        tax_id: tax_id.to_owned(),
        brand_id,
    }
}

#[tokio::test]
async fn unique_index_violation_becomes_field_error() {
    let db = inmem_db().await;
    let group = OrmEconomicGroupsRepository
        .create(&db, &NewEconomicGroup { name: "Acme".to_owned() })
        .await
        .unwrap();
    let brand = OrmBrandsRepository
        .create(
            &db,
            &NewBrand {
                name: "Coffee".to_owned(),
                economic_group_id: group.id,
            },
        )
        .await
        .unwrap();

    OrmUnitsRepository
        .create(&db, &unit("12345678000190", brand.id))
        .await
        .unwrap();
    let err = OrmUnitsRepository
        .create(&db, &unit("12345678000190", brand.id))
        .await
        .unwrap_err();

    let errors = field_errors(err);
    assert_eq!(
        errors.message("tax_id"),
        Some("The tax id has already been taken.")
    );
}

#[tokio::test]
async fn scoped_brand_index_reports_name() {
    let db = inmem_db().await;
    let group = OrmEconomicGroupsRepository
        .create(&db, &NewEconomicGroup { name: "Acme".to_owned() })
        .await
        .unwrap();
    let brand = NewBrand {
        name: "Coffee".to_owned(),
        economic_group_id: group.id,
    };

    OrmBrandsRepository.create(&db, &brand).await.unwrap();
    let err = OrmBrandsRepository.create(&db, &brand).await.unwrap_err();

    assert_eq!(field_errors(err).fields().collect::<Vec<_>>(), vec!["name"]);
}

#[tokio::test]
async fn collaborator_index_names_the_colliding_column() {
    let db = inmem_db().await;
    let group = OrmEconomicGroupsRepository
        .create(&db, &NewEconomicGroup { name: "Acme".to_owned() })
        .await
        .unwrap();
    let brand = OrmBrandsRepository
        .create(
            &db,
            &NewBrand {
                name: "Coffee".to_owned(),
                economic_group_id: group.id,
            },
        )
        .await
        .unwrap();
    let unit = OrmUnitsRepository
        .create(&db, &unit("12345678000190", brand.id))
        .await
        .unwrap();

    let ana = NewCollaborator {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        personal_tax_id: "12345678901".to_owned(),
        unit_id: unit.id,
    };
    OrmCollaboratorsRepository.create(&db, &ana).await.unwrap();

    let err = OrmCollaboratorsRepository
        .create(
            &db,
            &NewCollaborator {
                email: "other@example.com".to_owned(),
                ..ana.clone()
            },
        )
        .await
        .unwrap_err();
    assert!(field_errors(err).has("personal_tax_id"));

    let err = OrmCollaboratorsRepository
        .create(
            &db,
            &NewCollaborator {
                personal_tax_id: "98765432100".to_owned(),
                ..ana
            },
        )
        .await
        .unwrap_err();
    assert!(field_errors(err).has("email"));
}

#[tokio::test]
async fn missing_parent_becomes_reference_error() {
    let db = inmem_db().await;

    let err = OrmBrandsRepository
        .create(
            &db,
            &NewBrand {
                name: "Orphan".to_owned(),
                economic_group_id: 77,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(
        field_errors(err).message("economic_group_id"),
        Some("The selected economic group is invalid.")
    );
}

#[tokio::test]
async fn restricted_delete_becomes_conflict() {
    let db = inmem_db().await;
    let group = OrmEconomicGroupsRepository
        .create(&db, &NewEconomicGroup { name: "Acme".to_owned() })
        .await
        .unwrap();
    OrmBrandsRepository
        .create(
            &db,
            &NewBrand {
                name: "Coffee".to_owned(),
                economic_group_id: group.id,
            },
        )
        .await
        .unwrap();

    let err = OrmEconomicGroupsRepository
        .delete(&db, group.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }), "{err}");

    assert!(OrmEconomicGroupsRepository.exists(&db, group.id).await.unwrap());
}
