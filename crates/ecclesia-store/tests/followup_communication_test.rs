//! Integration tests for newcomer follow-up, the message outbox and
//! the audit trail.

use chrono::NaiveDate;
use ecclesia_core::EcclesiaError;
use ecclesia_core::models::member::{
    CivilStatus, CreateMember, Gender, Member, MemberStatus, SpiritualStatus,
};
use ecclesia_core::models::message::{MessageChannel, MessageStatus, SendMessage};
use ecclesia_core::models::newcomer::{
    CreateInteraction, CreateNewcomer, FollowUpStatus, Newcomer, UpdateNewcomer,
};
use ecclesia_core::models::audit::RecordAuditEntry;
use ecclesia_core::models::tenant::CreateTenant;
use ecclesia_core::models::user::{CreateUser, User};
use ecclesia_core::repository::{
    AuditTrail, InteractionLog, MessageOutbox, Pagination, Repository, TenantRepository,
};
use ecclesia_store::MemoryStore;
use uuid::Uuid;

async fn setup() -> (MemoryStore, Uuid, User) {
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
    let user = Repository::<User>::create(
        &store,
        tenant.id,
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
    .unwrap();
    (store, tenant.id, user)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn newcomer_input(assigned_to: Option<Uuid>) -> CreateNewcomer {
    CreateNewcomer {
        first_name: "Lucie".into(),
        last_name: "Moreau".into(),
        phone: "0712345678".into(),
        first_visit_date: date(2023, 10, 22),
        came_from: "Ami".into(),
        status: FollowUpStatus::New,
        assigned_to,
    }
}

async fn add_member(store: &MemoryStore, tenant_id: Uuid, first: &str) -> Member {
    Repository::<Member>::create(
        store,
        tenant_id,
        CreateMember {
            first_name: first.into(),
            last_name: "Dubois".into(),
            gender: Gender::Female,
            birthdate: date(1990, 5, 20),
            email: format!("{}@email.com", first.to_lowercase()),
            phone: "0612345678".into(),
            address: "1 rue de la Paix".into(),
            photo_url: None,
            civil_status: CivilStatus::Single,
            status: MemberStatus::Active,
            spiritual_status: SpiritualStatus::Baptized,
            joined_at: date(2018, 3, 10),
        },
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn newcomer_follow_up_lifecycle() {
    let (store, tenant_id, paul) = setup().await;

    let newcomer: Newcomer =
        Repository::<Newcomer>::create(&store, tenant_id, newcomer_input(Some(paul.id)))
            .await
            .unwrap();
    assert_eq!(newcomer.status, FollowUpStatus::New);
    assert_eq!(newcomer.assigned_to, Some(paul.id));

    let contacted = Repository::<Newcomer>::update(
        &store,
        tenant_id,
        newcomer.id,
        UpdateNewcomer {
            status: Some(FollowUpStatus::Contacted),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(contacted.status, FollowUpStatus::Contacted);

    // Explicit unassignment, distinct from leaving the field alone.
    let unassigned = Repository::<Newcomer>::update(
        &store,
        tenant_id,
        newcomer.id,
        UpdateNewcomer {
            assigned_to: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(unassigned.assigned_to, None);
    assert_eq!(unassigned.status, FollowUpStatus::Contacted);

    // Assigning an unknown user is rejected.
    let bad = Repository::<Newcomer>::update(
        &store,
        tenant_id,
        newcomer.id,
        UpdateNewcomer {
            assigned_to: Some(Some(Uuid::new_v4())),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(bad, Err(EcclesiaError::Validation { .. })));
}

#[tokio::test]
async fn interactions_are_recorded_oldest_first() {
    let (store, tenant_id, paul) = setup().await;
    let newcomer: Newcomer =
        Repository::<Newcomer>::create(&store, tenant_id, newcomer_input(Some(paul.id)))
            .await
            .unwrap();

    for (day, kind) in [(24, "Appel"), (26, "Visite"), (28, "Appel")] {
        InteractionLog::record(
            &store,
            tenant_id,
            newcomer.id,
            CreateInteraction {
                date: date(2023, 10, day),
                kind: kind.into(),
                notes: "Contact positif.".into(),
                interactor_id: paul.id,
            },
        )
        .await
        .unwrap();
    }

    let interactions = store.list_for(tenant_id, newcomer.id).await.unwrap();
    assert_eq!(interactions.len(), 3);
    assert_eq!(interactions[0].kind, "Appel");
    assert_eq!(interactions[1].kind, "Visite");
    assert_eq!(interactions[0].date, date(2023, 10, 24));
    assert_eq!(interactions[2].date, date(2023, 10, 28));

    // Recording against a missing newcomer fails up front.
    let orphan = InteractionLog::record(
        &store,
        tenant_id,
        Uuid::new_v4(),
        CreateInteraction {
            date: date(2023, 10, 24),
            kind: "Appel".into(),
            notes: String::new(),
            interactor_id: paul.id,
        },
    )
    .await;
    assert!(matches!(orphan, Err(EcclesiaError::NotFound { .. })));
}

#[tokio::test]
async fn deleting_a_newcomer_removes_its_interactions() {
    let (store, tenant_id, paul) = setup().await;
    let doomed: Newcomer = Repository::<Newcomer>::create(&store, tenant_id, newcomer_input(None))
        .await
        .unwrap();
    let kept: Newcomer = Repository::<Newcomer>::create(
        &store,
        tenant_id,
        CreateNewcomer {
            first_name: "Marc".into(),
            ..newcomer_input(None)
        },
    )
    .await
    .unwrap();

    for newcomer_id in [doomed.id, kept.id] {
        InteractionLog::record(
            &store,
            tenant_id,
            newcomer_id,
            CreateInteraction {
                date: date(2023, 10, 24),
                kind: "Appel".into(),
                notes: "Premier contact.".into(),
                interactor_id: paul.id,
            },
        )
        .await
        .unwrap();
    }

    Repository::<Newcomer>::delete(&store, tenant_id, doomed.id)
        .await
        .unwrap();

    assert!(matches!(
        store.list_for(tenant_id, doomed.id).await,
        Err(EcclesiaError::NotFound { .. })
    ));
    // The cascade only touched the deleted newcomer's history.
    let kept_interactions = store.list_for(tenant_id, kept.id).await.unwrap();
    assert_eq!(kept_interactions.len(), 1);
}

#[tokio::test]
async fn outbox_lists_most_recent_first() {
    let (store, tenant_id, _paul) = setup().await;
    let alice = add_member(&store, tenant_id, "Alice").await;

    for content in ["premier", "deuxième", "troisième"] {
        MessageOutbox::send(
            &store,
            tenant_id,
            SendMessage {
                channel: MessageChannel::Sms,
                content: content.into(),
                recipient_ids: vec![alice.id],
            },
        )
        .await
        .unwrap();
    }

    let page = MessageOutbox::list(&store, tenant_id, Pagination::default())
        .await
        .unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.items[0].content, "troisième");
    assert_eq!(page.items[2].content, "premier");
    assert!(page.items.iter().all(|m| m.status == MessageStatus::Sent));
}

#[tokio::test]
async fn messages_require_content_and_known_recipients() {
    let (store, tenant_id, _paul) = setup().await;
    let alice = add_member(&store, tenant_id, "Alice").await;

    let blank = MessageOutbox::send(
        &store,
        tenant_id,
        SendMessage {
            channel: MessageChannel::Email,
            content: "  ".into(),
            recipient_ids: vec![alice.id],
        },
    )
    .await;
    assert!(matches!(blank, Err(EcclesiaError::Validation { .. })));

    let nobody = MessageOutbox::send(
        &store,
        tenant_id,
        SendMessage {
            channel: MessageChannel::Sms,
            content: "Rappel".into(),
            recipient_ids: Vec::new(),
        },
    )
    .await;
    assert!(matches!(nobody, Err(EcclesiaError::Validation { .. })));

    let stranger = MessageOutbox::send(
        &store,
        tenant_id,
        SendMessage {
            channel: MessageChannel::Sms,
            content: "Rappel".into(),
            recipient_ids: vec![Uuid::new_v4()],
        },
    )
    .await;
    assert!(matches!(stranger, Err(EcclesiaError::Validation { .. })));
}

#[tokio::test]
async fn audit_trail_is_append_only_and_newest_first() {
    let (store, tenant_id, paul) = setup().await;

    for action in ["CREATE_MEMBER", "UPDATE_MEMBER", "DELETE_MEMBER"] {
        AuditTrail::record(
            &store,
            tenant_id,
            RecordAuditEntry {
                actor_id: paul.id,
                action: action.into(),
                entity: "member".into(),
                entity_id: Some(Uuid::new_v4()),
                ip_address: Some("192.168.1.1".into()),
            },
        )
        .await
        .unwrap();
    }

    let page = AuditTrail::list(&store, tenant_id, Pagination::default())
        .await
        .unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.items[0].action, "DELETE_MEMBER");
    assert_eq!(page.items[2].action, "CREATE_MEMBER");

    let unknown_actor = AuditTrail::record(
        &store,
        tenant_id,
        RecordAuditEntry {
            actor_id: Uuid::new_v4(),
            action: "CREATE_MEMBER".into(),
            entity: "member".into(),
            entity_id: None,
            ip_address: None,
        },
    )
    .await;
    assert!(matches!(
        unknown_actor,
        Err(EcclesiaError::Validation { .. })
    ));
}
