#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Collaborators: unique email and personal tax id, unit reference.

mod support;

use business_hierarchy_sdk::{CollaboratorInput, EntityKind, Payload, Record};
use support::{
    collaborator_payload, ctx_admin, seed_brand, seed_chain, seed_collaborator, seed_group,
    seed_unit, setup,
};

#[tokio::test]
async fn personal_tax_id_is_stored_digits_only() {
    let (client, _db) = setup().await;
    let chain = seed_chain(client.as_ref()).await;

    assert_eq!(chain.collaborator.personal_tax_id, "12345678901");
    assert_eq!(chain.collaborator.unit_id, chain.unit.id);

    let loaded = client
        .get_entity(&ctx_admin(), EntityKind::Collaborator, chain.collaborator.id)
        .await
        .unwrap();
    assert_eq!(loaded, Record::Collaborator(chain.collaborator));
}

#[tokio::test]
async fn duplicate_email_is_rejected_on_email() {
    let (client, _db) = setup().await;
    let chain = seed_chain(client.as_ref()).await;

    let err = client
        .create_entity(
            &ctx_admin(),
            &collaborator_payload("Bruno", "ana@example.com", "98765432100", chain.unit.id),
        )
        .await
        .unwrap_err();

    let fields: Vec<_> = err.field_errors().unwrap().fields().collect();
    assert_eq!(fields, vec!["email"]);
}

#[tokio::test]
async fn email_uniqueness_ignores_case() {
    let (client, _db) = setup().await;
    let chain = seed_chain(client.as_ref()).await;

    let err = client
        .create_entity(
            &ctx_admin(),
            &collaborator_payload("Bruno", "ANA@Example.com", "98765432100", chain.unit.id),
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.field_errors().unwrap().message("email"),
        Some("The email has already been taken.")
    );

    let bruno = seed_collaborator(
        client.as_ref(),
        "Bruno",
        "Bruno.Lima@Example.com",
        "98765432100",
        chain.unit.id,
    )
    .await;
    assert_eq!(bruno.email, "bruno.lima@example.com");
}

#[tokio::test]
async fn duplicate_personal_tax_id_is_rejected_regardless_of_punctuation() {
    let (client, _db) = setup().await;
    let chain = seed_chain(client.as_ref()).await;

    let err = client
        .create_entity(
            &ctx_admin(),
            &collaborator_payload("Bruno", "bruno@example.com", "12345678901", chain.unit.id),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err.field_errors().unwrap().message("personal_tax_id"),
        Some("The personal tax id has already been taken.")
    );
}

#[tokio::test]
async fn both_unique_fields_are_reported_together() {
    let (client, _db) = setup().await;
    let chain = seed_chain(client.as_ref()).await;

    let err = client
        .create_entity(
            &ctx_admin(),
            &collaborator_payload("Ana", "ana@example.com", "123.456.789-01", chain.unit.id),
        )
        .await
        .unwrap_err();

    let fields: Vec<_> = err.field_errors().unwrap().fields().collect();
    assert_eq!(fields, vec!["email", "personal_tax_id"]);
}

#[tokio::test]
async fn invalid_email_and_unknown_unit() {
    let (client, _db) = setup().await;

    let err = client
        .create_entity(
            &ctx_admin(),
            &collaborator_payload("Ana", "ana.example.com", "12345678901", 7),
        )
        .await
        .unwrap_err();

    let errors = err.field_errors().unwrap();
    assert_eq!(errors.message("email"), Some("The email is invalid."));
    assert_eq!(errors.message("unit_id"), Some("The selected unit is invalid."));
}

#[tokio::test]
async fn omitted_fields_are_each_named() {
    let (client, _db) = setup().await;

    let err = client
        .create_entity(
            &ctx_admin(),
            &Payload::Collaborator(CollaboratorInput {
                name: Some("Ana".to_owned()),
                ..CollaboratorInput::default()
            }),
        )
        .await
        .unwrap_err();

    let fields: Vec<_> = err.field_errors().unwrap().fields().collect();
    assert_eq!(fields, vec!["email", "personal_tax_id", "unit_id"]);
}

#[tokio::test]
async fn moving_to_another_unit_keeps_identity() {
    let (client, _db) = setup().await;
    let chain = seed_chain(client.as_ref()).await;
    let other_brand = seed_brand(client.as_ref(), "Bakery", chain.group.id).await;
    let other_unit = seed_unit(client.as_ref(), "Bakery Mall", "11222333000144", other_brand.id).await;
    let bruno = seed_collaborator(
        client.as_ref(),
        "Bruno",
        "bruno@example.com",
        "98765432100",
        chain.unit.id,
    )
    .await;

    let updated = client
        .update_entity(
            &ctx_admin(),
            bruno.id,
            &collaborator_payload("Bruno", "bruno@example.com", "987.654.321-00", other_unit.id),
        )
        .await
        .unwrap();

    let Record::Collaborator(updated) = updated else {
        panic!("expected collaborator");
    };
    assert_eq!(updated.id, bruno.id);
    assert_eq!(updated.unit_id, other_unit.id);
}

#[tokio::test]
async fn same_person_cannot_join_a_second_group() {
    let (client, _db) = setup().await;
    let chain = seed_chain(client.as_ref()).await;
    let globex = seed_group(client.as_ref(), "Globex").await;
    let brand = seed_brand(client.as_ref(), "Globex Foods", globex.id).await;
    let unit = seed_unit(client.as_ref(), "Globex Center", "99888777000166", brand.id).await;

    let err = client
        .create_entity(
            &ctx_admin(),
            &collaborator_payload(
                &chain.collaborator.name,
                "ana.souza@globex.com",
                &chain.collaborator.personal_tax_id,
                unit.id,
            ),
        )
        .await
        .unwrap_err();
    assert!(err.field_errors().unwrap().has("personal_tax_id"));
}
