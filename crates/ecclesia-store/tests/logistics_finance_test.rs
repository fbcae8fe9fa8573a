//! Integration tests for the finance and logistics repositories:
//! amount validation, the material quantity invariant and the request
//! lifecycle.

use chrono::NaiveDate;
use ecclesia_core::EcclesiaError;
use ecclesia_core::models::finance::{
    CreateExpense, CreateRevenue, Expense, ExpenseStatus, PaymentMethod, Revenue, RevenueKind,
    UpdateRevenue,
};
use ecclesia_core::models::material::{
    CreateMaterial, CreateMaterialRequest, Material, MaterialCondition, MaterialKind,
    MaterialRequest, RequestItem, RequestStatus, UpdateMaterial, UpdateMaterialRequest,
};
use ecclesia_core::models::tenant::CreateTenant;
use ecclesia_core::models::user::{CreateUser, User};
use ecclesia_core::repository::{Repository, TenantRepository};
use ecclesia_store::MemoryStore;
use uuid::Uuid;

async fn setup() -> (MemoryStore, Uuid) {
    let store = MemoryStore::new();
    let tenant = TenantRepository::create(
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

async fn add_user(store: &MemoryStore, tenant_id: Uuid) -> User {
    Repository::<User>::create(
        store,
        tenant_id,
        CreateUser {
            first_name: "Paul".into(),
            last_name: "Bernard".into(),
            email: "paul.bernard@example.com".into(),
            role: "Standard User".into(),
            active: true,
            multi_site: false,
        },
    )
    .await
    .unwrap()
}

fn material_input(name: &str, total: u32, available: u32) -> CreateMaterial {
    CreateMaterial {
        name: name.into(),
        kind: MaterialKind::Sound,
        total_quantity: total,
        available_quantity: available,
        condition: MaterialCondition::Good,
        location: "Stock Son".into(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[tokio::test]
async fn amounts_must_be_positive() {
    let (store, tenant_id) = setup().await;

    let revenue: Revenue = Repository::<Revenue>::create(
        &store,
        tenant_id,
        CreateRevenue {
            kind: RevenueKind::Offering,
            amount: 50_000,
            payment_date: date(2023, 10, 22),
            source_description: "Offrande du culte".into(),
            payment_method: PaymentMethod::Cash,
        },
    )
    .await
    .unwrap();
    assert_eq!(revenue.amount, 50_000);

    let zero = Repository::<Revenue>::create(
        &store,
        tenant_id,
        CreateRevenue {
            kind: RevenueKind::Tithe,
            amount: 0,
            payment_date: date(2023, 10, 22),
            source_description: "Dîme".into(),
            payment_method: PaymentMethod::Cash,
        },
    )
    .await;
    assert!(matches!(zero, Err(EcclesiaError::Validation { .. })));

    let negative_patch = Repository::<Revenue>::update(
        &store,
        tenant_id,
        revenue.id,
        UpdateRevenue {
            amount: Some(-1),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(
        negative_patch,
        Err(EcclesiaError::Validation { .. })
    ));

    let expense = Repository::<Expense>::create(
        &store,
        tenant_id,
        CreateExpense {
            description: "Achat de microphones".into(),
            amount: -500,
            beneficiary: "Music Store".into(),
            expense_date: date(2023, 10, 20),
            cost_center: "Sonorisation".into(),
            status: ExpenseStatus::Pending,
            payment_method: PaymentMethod::Check,
        },
    )
    .await;
    assert!(matches!(expense, Err(EcclesiaError::Validation { .. })));
}

#[tokio::test]
async fn available_quantity_never_exceeds_total() {
    let (store, tenant_id) = setup().await;

    let bad = Repository::<Material>::create(&store, tenant_id, material_input("Micro", 2, 5)).await;
    assert!(matches!(bad, Err(EcclesiaError::Validation { .. })));

    let material: Material =
        Repository::<Material>::create(&store, tenant_id, material_input("Micro", 5, 3))
            .await
            .unwrap();

    // The merged state is what gets checked: lowering the total below
    // the current availability must fail even though neither field is
    // invalid on its own.
    let shrink = Repository::<Material>::update(
        &store,
        tenant_id,
        material.id,
        UpdateMaterial {
            total_quantity: Some(2),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(shrink, Err(EcclesiaError::Validation { .. })));

    let ok = Repository::<Material>::update(
        &store,
        tenant_id,
        material.id,
        UpdateMaterial {
            total_quantity: Some(2),
            available_quantity: Some(2),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(ok.total_quantity, 2);
    assert_eq!(ok.available_quantity, 2);
}

#[tokio::test]
async fn request_lifecycle_starts_pending() {
    let (store, tenant_id) = setup().await;
    let paul = add_user(&store, tenant_id).await;
    let material: Material =
        Repository::<Material>::create(&store, tenant_id, material_input("Micro", 5, 5))
            .await
            .unwrap();

    let request: MaterialRequest = Repository::<MaterialRequest>::create(
        &store,
        tenant_id,
        CreateMaterialRequest {
            requester_id: paul.id,
            event_name: "Concert de Noël".into(),
            request_date: date(2023, 10, 25),
            start_date: date(2023, 12, 24),
            end_date: date(2023, 12, 25),
            items: vec![RequestItem {
                material_id: material.id,
                quantity: 2,
            }],
        },
    )
    .await
    .unwrap();
    // Status is stamped by the store, never taken from the caller.
    assert_eq!(request.status, RequestStatus::Pending);

    let approved = Repository::<MaterialRequest>::update(
        &store,
        tenant_id,
        request.id,
        UpdateMaterialRequest {
            status: Some(RequestStatus::Approved),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(approved.status, RequestStatus::Approved);
}

#[tokio::test]
async fn request_items_are_validated() {
    let (store, tenant_id) = setup().await;
    let paul = add_user(&store, tenant_id).await;
    let material: Material =
        Repository::<Material>::create(&store, tenant_id, material_input("Micro", 5, 5))
            .await
            .unwrap();

    let input = |items: Vec<RequestItem>| CreateMaterialRequest {
        requester_id: paul.id,
        event_name: "Concert".into(),
        request_date: date(2023, 10, 25),
        start_date: date(2023, 12, 24),
        end_date: date(2023, 12, 25),
        items,
    };

    let empty = Repository::<MaterialRequest>::create(&store, tenant_id, input(Vec::new())).await;
    assert!(matches!(empty, Err(EcclesiaError::Validation { .. })));

    let unknown = Repository::<MaterialRequest>::create(
        &store,
        tenant_id,
        input(vec![RequestItem {
            material_id: Uuid::new_v4(),
            quantity: 1,
        }]),
    )
    .await;
    assert!(matches!(unknown, Err(EcclesiaError::Validation { .. })));

    let zero_quantity = Repository::<MaterialRequest>::create(
        &store,
        tenant_id,
        input(vec![RequestItem {
            material_id: material.id,
            quantity: 0,
        }]),
    )
    .await;
    assert!(matches!(
        zero_quantity,
        Err(EcclesiaError::Validation { .. })
    ));

    let backwards = Repository::<MaterialRequest>::create(
        &store,
        tenant_id,
        CreateMaterialRequest {
            start_date: date(2023, 12, 25),
            end_date: date(2023, 12, 24),
            ..input(vec![RequestItem {
                material_id: material.id,
                quantity: 1,
            }])
        },
    )
    .await;
    assert!(matches!(backwards, Err(EcclesiaError::Validation { .. })));
}

#[tokio::test]
async fn material_in_open_request_cannot_be_deleted() {
    let (store, tenant_id) = setup().await;
    let paul = add_user(&store, tenant_id).await;
    let material: Material =
        Repository::<Material>::create(&store, tenant_id, material_input("Micro", 5, 5))
            .await
            .unwrap();

    let request: MaterialRequest = Repository::<MaterialRequest>::create(
        &store,
        tenant_id,
        CreateMaterialRequest {
            requester_id: paul.id,
            event_name: "Concert de Noël".into(),
            request_date: date(2023, 10, 25),
            start_date: date(2023, 12, 24),
            end_date: date(2023, 12, 25),
            items: vec![RequestItem {
                material_id: material.id,
                quantity: 2,
            }],
        },
    )
    .await
    .unwrap();

    let blocked = Repository::<Material>::delete(&store, tenant_id, material.id).await;
    assert!(matches!(
        blocked,
        Err(EcclesiaError::Conflict { entity, .. }) if entity == "material"
    ));

    // Once the loan is returned, the material can go.
    Repository::<MaterialRequest>::update(
        &store,
        tenant_id,
        request.id,
        UpdateMaterialRequest {
            status: Some(RequestStatus::Returned),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    Repository::<Material>::delete(&store, tenant_id, material.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn requester_must_be_a_known_user() {
    let (store, tenant_id) = setup().await;
    let material: Material =
        Repository::<Material>::create(&store, tenant_id, material_input("Micro", 5, 5))
            .await
            .unwrap();

    let result = Repository::<MaterialRequest>::create(
        &store,
        tenant_id,
        CreateMaterialRequest {
            requester_id: Uuid::new_v4(),
            event_name: "Concert".into(),
            request_date: date(2023, 10, 25),
            start_date: date(2023, 12, 24),
            end_date: date(2023, 12, 25),
            items: vec![RequestItem {
                material_id: material.id,
                quantity: 1,
            }],
        },
    )
    .await;
    assert!(matches!(result, Err(EcclesiaError::Validation { .. })));
}
