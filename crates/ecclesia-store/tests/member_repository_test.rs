//! Integration tests for the member repository: the uniform CRUD
//! contract, ordering guarantees and tenant isolation.

use chrono::NaiveDate;
use ecclesia_core::EcclesiaError;
use ecclesia_core::models::member::{
    CivilStatus, CreateMember, Gender, Member, MemberStatus, SpiritualStatus, UpdateMember,
};
use ecclesia_core::models::tenant::{CreateTenant, Tenant};
use ecclesia_core::repository::{Pagination, Repository, TenantRepository};
use ecclesia_store::MemoryStore;
use uuid::Uuid;

async fn setup() -> (MemoryStore, Uuid) {
    let store = MemoryStore::new();
    let tenant: Tenant = TenantRepository::create(
        &store,
        CreateTenant {
            name: "Test Church".into(),
            slug: "test-church".into(),
            domain: "test.example.com".into(),
            status: None,
            plan: "Basic".into(),
            admin_id: None,
        },
    )
    .await
    .unwrap();
    (store, tenant.id)
}

fn member_input(first: &str, last: &str) -> CreateMember {
    CreateMember {
        first_name: first.into(),
        last_name: last.into(),
        gender: Gender::Female,
        birthdate: NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
        email: format!("{}@email.com", first.to_lowercase()),
        phone: "0612345678".into(),
        address: "1 rue de la Paix".into(),
        photo_url: None,
        civil_status: CivilStatus::Single,
        status: MemberStatus::Active,
        spiritual_status: SpiritualStatus::Baptized,
        joined_at: NaiveDate::from_ymd_opt(2018, 3, 10).unwrap(),
    }
}

async fn add_member(store: &MemoryStore, tenant_id: Uuid, first: &str, last: &str) -> Member {
    Repository::<Member>::create(store, tenant_id, member_input(first, last))
        .await
        .unwrap()
}

#[tokio::test]
async fn add_get_archive_delete_roundtrip() {
    let (store, tenant_id) = setup().await;

    let alice = add_member(&store, tenant_id, "Alice", "Dubois").await;
    assert_eq!(alice.first_name, "Alice");
    assert_eq!(alice.last_name, "Dubois");

    let fetched = Repository::<Member>::get(&store, tenant_id, alice.id)
        .await
        .unwrap();
    assert_eq!(fetched.id, alice.id);
    assert_eq!(fetched.email, alice.email);
    assert_eq!(fetched.status, MemberStatus::Active);

    let archived = Repository::<Member>::update(
        &store,
        tenant_id,
        alice.id,
        UpdateMember {
            status: Some(MemberStatus::Archived),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(archived.status, MemberStatus::Archived);
    assert_eq!(archived.first_name, "Alice"); // unchanged
    assert!(archived.updated_at >= alice.updated_at);

    let refetched = Repository::<Member>::get(&store, tenant_id, alice.id)
        .await
        .unwrap();
    assert_eq!(refetched.status, MemberStatus::Archived);

    Repository::<Member>::delete(&store, tenant_id, alice.id)
        .await
        .unwrap();
    assert!(matches!(
        Repository::<Member>::get(&store, tenant_id, alice.id).await,
        Err(EcclesiaError::NotFound { .. })
    ));
}

#[tokio::test]
async fn ids_are_unique_and_never_reused() {
    let (store, tenant_id) = setup().await;

    let first = add_member(&store, tenant_id, "Alice", "Dubois").await;
    Repository::<Member>::delete(&store, tenant_id, first.id)
        .await
        .unwrap();

    let second = add_member(&store, tenant_id, "Alice", "Dubois").await;
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn update_replaces_only_the_matching_record() {
    let (store, tenant_id) = setup().await;

    let alice = add_member(&store, tenant_id, "Alice", "Dubois").await;
    let bob = add_member(&store, tenant_id, "Bob", "Lefebvre").await;
    let carol = add_member(&store, tenant_id, "Carol", "Nguyen").await;

    Repository::<Member>::update(
        &store,
        tenant_id,
        bob.id,
        UpdateMember {
            phone: Some("0700000000".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let page = Repository::<Member>::list(&store, tenant_id, Pagination::default())
        .await
        .unwrap();
    // Order preserved, exactly one record changed.
    let ids: Vec<Uuid> = page.items.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![alice.id, bob.id, carol.id]);
    assert_eq!(page.items[0].phone, "0612345678");
    assert_eq!(page.items[1].phone, "0700000000");
    assert_eq!(page.items[2].phone, "0612345678");
}

#[tokio::test]
async fn update_missing_id_reports_not_found() {
    let (store, tenant_id) = setup().await;

    let result = Repository::<Member>::update(
        &store,
        tenant_id,
        Uuid::new_v4(),
        UpdateMember::default(),
    )
    .await;
    assert!(matches!(result, Err(EcclesiaError::NotFound { .. })));
}

#[tokio::test]
async fn delete_is_exact_and_second_delete_fails() {
    let (store, tenant_id) = setup().await;

    let alice = add_member(&store, tenant_id, "Alice", "Dubois").await;
    let bob = add_member(&store, tenant_id, "Bob", "Lefebvre").await;

    Repository::<Member>::delete(&store, tenant_id, alice.id)
        .await
        .unwrap();

    let page = Repository::<Member>::list(&store, tenant_id, Pagination::default())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, bob.id);

    assert!(matches!(
        Repository::<Member>::delete(&store, tenant_id, alice.id).await,
        Err(EcclesiaError::NotFound { .. })
    ));
}

#[tokio::test]
async fn tenants_are_isolated() {
    let (store, tenant_a) = setup().await;
    let tenant_b = TenantRepository::create(
        &store,
        CreateTenant {
            name: "Other Church".into(),
            slug: "other-church".into(),
            domain: "other.example.com".into(),
            status: None,
            plan: "Basic".into(),
            admin_id: None,
        },
    )
    .await
    .unwrap()
    .id;

    let alice = add_member(&store, tenant_a, "Alice", "Dubois").await;
    add_member(&store, tenant_b, "Bea", "Nkosi").await;

    // Listing under B never returns A's records.
    let page_b = Repository::<Member>::list(&store, tenant_b, Pagination::default())
        .await
        .unwrap();
    assert_eq!(page_b.total, 1);
    assert!(page_b.items.iter().all(|m| m.tenant_id == tenant_b));

    // Cross-tenant access is a mismatch, not a lookup miss.
    assert!(matches!(
        Repository::<Member>::get(&store, tenant_b, alice.id).await,
        Err(EcclesiaError::TenantMismatch { .. })
    ));
    assert!(matches!(
        Repository::<Member>::delete(&store, tenant_b, alice.id).await,
        Err(EcclesiaError::TenantMismatch { .. })
    ));

    // A's record is untouched by the failed cross-tenant delete.
    assert!(
        Repository::<Member>::get(&store, tenant_a, alice.id)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn blank_names_are_rejected() {
    let (store, tenant_id) = setup().await;

    let mut input = member_input("Alice", "Dubois");
    input.first_name = "   ".into();
    let result = Repository::<Member>::create(&store, tenant_id, input).await;
    assert!(matches!(result, Err(EcclesiaError::Validation { .. })));
}

#[tokio::test]
async fn create_under_unknown_tenant_fails() {
    let store = MemoryStore::new();
    let result =
        Repository::<Member>::create(&store, Uuid::new_v4(), member_input("Alice", "Dubois"))
            .await;
    assert!(matches!(result, Err(EcclesiaError::NotFound { .. })));
}
