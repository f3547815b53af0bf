#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Deletes are refused while dependents exist; leaves can always go.

mod support;

use business_hierarchy_sdk::{BusinessHierarchyError, EntityKind};
use support::{ctx_admin, seed_brand, seed_chain, seed_group, setup};

#[tokio::test]
async fn deleting_group_with_brand_is_refused_and_keeps_descendants() {
    let (client, _db) = setup().await;
    let chain = seed_chain(client.as_ref()).await;

    let err = client
        .delete_entity(&ctx_admin(), EntityKind::EconomicGroup, chain.group.id)
        .await
        .unwrap_err();

    let BusinessHierarchyError::Conflict { message } = err else {
        panic!("expected conflict, got {err:?}");
    };
    assert_eq!(
        message,
        "Economic group cannot be deleted while it has 1 dependent brand."
    );

    for (kind, id) in [
        (EntityKind::EconomicGroup, chain.group.id),
        (EntityKind::Brand, chain.brand.id),
        (EntityKind::Unit, chain.unit.id),
        (EntityKind::Collaborator, chain.collaborator.id),
    ] {
        assert!(
            client.get_entity(&ctx_admin(), kind, id).await.is_ok(),
            "{kind} {id} should survive"
        );
    }
}

#[tokio::test]
async fn every_parent_level_refuses_delete() {
    let (client, _db) = setup().await;
    let chain = seed_chain(client.as_ref()).await;

    for (kind, id) in [
        (EntityKind::Brand, chain.brand.id),
        (EntityKind::Unit, chain.unit.id),
    ] {
        let err = client.delete_entity(&ctx_admin(), kind, id).await.unwrap_err();
        assert!(
            matches!(err, BusinessHierarchyError::Conflict { .. }),
            "{kind}: {err}"
        );
    }
}

#[tokio::test]
async fn deleting_bottom_up_succeeds() {
    let (client, _db) = setup().await;
    let chain = seed_chain(client.as_ref()).await;

    for (kind, id) in [
        (EntityKind::Collaborator, chain.collaborator.id),
        (EntityKind::Unit, chain.unit.id),
        (EntityKind::Brand, chain.brand.id),
        (EntityKind::EconomicGroup, chain.group.id),
    ] {
        client.delete_entity(&ctx_admin(), kind, id).await.unwrap();

        let err = client.get_entity(&ctx_admin(), kind, id).await.unwrap_err();
        assert_eq!(err, BusinessHierarchyError::not_found(kind, id));
    }
}

#[tokio::test]
async fn deleting_a_leaf_group_succeeds() {
    let (client, _db) = setup().await;
    let group = seed_group(client.as_ref(), "Lonely").await;

    client
        .delete_entity(&ctx_admin(), EntityKind::EconomicGroup, group.id)
        .await
        .unwrap();

    assert!(
        client
            .get_entity(&ctx_admin(), EntityKind::EconomicGroup, group.id)
            .await
            .is_err()
    );
}

#[tokio::test]
async fn deleting_missing_record_is_not_found() {
    let (client, _db) = setup().await;

    let err = client
        .delete_entity(&ctx_admin(), EntityKind::Brand, 404)
        .await
        .unwrap_err();
    assert_eq!(err, BusinessHierarchyError::not_found(EntityKind::Brand, 404));
}

#[tokio::test]
async fn counted_dependents_use_plural() {
    let (client, _db) = setup().await;
    let group = seed_group(client.as_ref(), "Acme").await;
    seed_brand(client.as_ref(), "One", group.id).await;
    seed_brand(client.as_ref(), "Two", group.id).await;

    let err = client
        .delete_entity(&ctx_admin(), EntityKind::EconomicGroup, group.id)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        BusinessHierarchyError::conflict(
            "Economic group cannot be deleted while it has 2 dependent brands."
        )
    );
}
