//! Demo fixtures: one tenant and a handful of records per collection.
//!
//! Inserted directly into the tables with pre-built ids so references
//! line up; the repository validations are exercised by the tests, not
//! by the seed.

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use ecclesia_core::models::{
    audit::AuditLogEntry,
    event::PlanningEvent,
    finance::{Expense, ExpenseStatus, PaymentMethod, Revenue, RevenueKind},
    group::Group,
    material::{Material, MaterialCondition, MaterialKind, MaterialRequest, RequestItem, RequestStatus},
    media::{MediaItem, MediaKind},
    member::{CivilStatus, Gender, Member, MemberStatus, SpiritualStatus},
    message::{Message, MessageChannel, MessageStatus},
    newcomer::{FollowUpStatus, Interaction, Newcomer},
    role::Role,
    staff::{StaffMember, StaffStatus},
    team::{ProjectTeam, TeamStatus},
    tenant::{Tenant, TenantStatus},
    training::{ParticipationStatus, TrainingParticipant, TrainingSession},
    user::User,
    volunteer::Volunteer,
};

use crate::store::MemoryStore;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub(crate) fn seed_demo_tenant(store: &MemoryStore) {
    let inner = &store.inner;
    let now = Utc::now();

    let tenant_id = Uuid::new_v4();
    let jean = Uuid::new_v4();
    let marie = Uuid::new_v4();
    let paul = Uuid::new_v4();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    inner.tenants.insert(Tenant {
        id: tenant_id,
        name: "Église Centrale".into(),
        slug: "eglise-centrale".into(),
        domain: "centrale.ecclesia.app".into(),
        status: TenantStatus::Active,
        plan: "Premium".into(),
        admin_id: Some(marie),
        created_at: now,
        updated_at: now,
    });

    for (id, first, last, email, role, active, multi_site) in [
        (jean, "Jean", "Dupont", "jean.dupont@example.com", "Super Admin", true, true),
        (marie, "Marie", "Martin", "marie.martin@example.com", "System Admin", true, false),
        (paul, "Paul", "Bernard", "paul.bernard@example.com", "Standard User", false, false),
    ] {
        inner.users.insert(User {
            id,
            tenant_id,
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            role: role.into(),
            active,
            multi_site,
            created_at: now,
            updated_at: now,
        });
    }

    let all_permissions: Vec<Uuid> = inner.permissions.iter().map(|p| p.id).collect();
    let members_read: Vec<Uuid> = inner
        .permissions
        .iter()
        .filter(|p| p.module == "members" && p.action == "read")
        .map(|p| p.id)
        .collect();
    for (name, description, permission_ids) in [
        ("Super Admin", "Full access to every module", all_permissions.clone()),
        ("System Admin", "Manages users and settings", all_permissions),
        ("Standard User", "Limited access", members_read),
    ] {
        inner.roles.insert(Role {
            id: Uuid::new_v4(),
            tenant_id,
            name: name.into(),
            description: description.into(),
            permission_ids,
            created_at: now,
            updated_at: now,
        });
    }

    inner.members.insert(Member {
        id: alice,
        tenant_id,
        first_name: "Alice".into(),
        last_name: "Dubois".into(),
        gender: Gender::Female,
        birthdate: date(1990, 5, 20),
        email: "alice.d@email.com".into(),
        phone: "0612345678".into(),
        address: "1 rue de la Paix".into(),
        photo_url: None,
        civil_status: CivilStatus::Single,
        status: MemberStatus::Active,
        spiritual_status: SpiritualStatus::Baptized,
        joined_at: date(2018, 3, 10),
        created_at: now,
        updated_at: now,
    });
    inner.members.insert(Member {
        id: bob,
        tenant_id,
        first_name: "Bob".into(),
        last_name: "Lefebvre".into(),
        gender: Gender::Male,
        birthdate: date(1985, 11, 12),
        email: "bob.l@email.com".into(),
        phone: "0687654321".into(),
        address: "2 avenue de la Liberté".into(),
        photo_url: None,
        civil_status: CivilStatus::Married,
        status: MemberStatus::Active,
        spiritual_status: SpiritualStatus::ActiveMember,
        joined_at: date(2015, 7, 22),
        created_at: now,
        updated_at: now,
    });

    inner.groups.insert(Group {
        id: Uuid::new_v4(),
        tenant_id,
        name: "Groupe des Jeunes".into(),
        description: "Activités pour les jeunes de 18-25 ans".into(),
        kind: "Jeunesse".into(),
        leader_id: alice,
        member_ids: vec![alice, bob],
        created_at: now,
        updated_at: now,
    });

    inner.staff.insert(StaffMember {
        id: Uuid::new_v4(),
        tenant_id,
        member_id: bob,
        position: "Pasteur Principal".into(),
        department: "Pastoral".into(),
        hired_at: date(2010, 1, 1),
        status: StaffStatus::Employee,
        assignments: Vec::new(),
        created_at: now,
        updated_at: now,
    });

    inner.volunteers.insert(Volunteer {
        id: Uuid::new_v4(),
        tenant_id,
        member_id: alice,
        skills: vec!["Chant".into(), "Organisation".into()],
        availability: "Weekends".into(),
        created_at: now,
        updated_at: now,
    });

    inner.teams.insert(ProjectTeam {
        id: Uuid::new_v4(),
        tenant_id,
        name: "Équipe d'accueil".into(),
        description: "Accueil des membres et visiteurs".into(),
        leader_id: alice,
        member_ids: vec![alice],
        status: TeamStatus::Active,
        created_at: now,
        updated_at: now,
    });

    inner.events.insert(PlanningEvent {
        id: Uuid::new_v4(),
        tenant_id,
        title: "Culte du Dimanche".into(),
        category: "Service".into(),
        start: Utc
            .with_ymd_and_hms(2023, 10, 29, 10, 0, 0)
            .single()
            .expect("valid fixture time"),
        end: Utc
            .with_ymd_and_hms(2023, 10, 29, 12, 0, 0)
            .single()
            .expect("valid fixture time"),
        location: "Salle principale".into(),
        attendee_ids: Vec::new(),
        created_at: now,
        updated_at: now,
    });

    inner.trainings.insert(TrainingSession {
        id: Uuid::new_v4(),
        tenant_id,
        title: "Formation des leaders".into(),
        description: "Parcours de formation des responsables".into(),
        instructor: "Jean Dupont".into(),
        start_date: date(2023, 11, 4),
        end_date: date(2023, 11, 4),
        location: "Salle 2".into(),
        participants: vec![TrainingParticipant {
            member_id: alice,
            status: ParticipationStatus::Registered,
        }],
        created_at: now,
        updated_at: now,
    });

    inner.revenues.insert(Revenue {
        id: Uuid::new_v4(),
        tenant_id,
        kind: RevenueKind::Offering,
        amount: 50_000,
        payment_date: date(2023, 10, 22),
        source_description: "Offrande du culte".into(),
        payment_method: PaymentMethod::Cash,
        created_at: now,
        updated_at: now,
    });

    inner.expenses.insert(Expense {
        id: Uuid::new_v4(),
        tenant_id,
        description: "Achat de microphones".into(),
        amount: 75_000,
        beneficiary: "Music Store".into(),
        expense_date: date(2023, 10, 20),
        cost_center: "Sonorisation".into(),
        status: ExpenseStatus::Approved,
        payment_method: PaymentMethod::Check,
        created_at: now,
        updated_at: now,
    });

    let micro = Uuid::new_v4();
    inner.materials.insert(Material {
        id: micro,
        tenant_id,
        name: "Micro Shure SM58".into(),
        kind: MaterialKind::Sound,
        total_quantity: 5,
        available_quantity: 3,
        condition: MaterialCondition::Good,
        location: "Stock Son".into(),
        created_at: now,
        updated_at: now,
    });

    inner.material_requests.insert(MaterialRequest {
        id: Uuid::new_v4(),
        tenant_id,
        requester_id: paul,
        event_name: "Concert de Noël".into(),
        request_date: date(2023, 10, 25),
        start_date: date(2023, 12, 24),
        end_date: date(2023, 12, 25),
        items: vec![RequestItem {
            material_id: micro,
            quantity: 2,
        }],
        status: RequestStatus::Pending,
        created_at: now,
        updated_at: now,
    });

    inner.messages.insert_front(Message {
        id: Uuid::new_v4(),
        tenant_id,
        channel: MessageChannel::Sms,
        content: "Rappel: Répétition de la chorale ce soir à 19h.".into(),
        recipient_ids: vec![alice],
        sent_at: now,
        status: MessageStatus::Sent,
    });

    let lucie = Uuid::new_v4();
    inner.newcomers.insert(Newcomer {
        id: lucie,
        tenant_id,
        first_name: "Lucie".into(),
        last_name: "Moreau".into(),
        phone: "0712345678".into(),
        first_visit_date: date(2023, 10, 22),
        came_from: "Ami".into(),
        status: FollowUpStatus::New,
        assigned_to: Some(paul),
        created_at: now,
        updated_at: now,
    });

    inner.interactions.insert(Interaction {
        id: Uuid::new_v4(),
        tenant_id,
        newcomer_id: lucie,
        date: date(2023, 10, 24),
        kind: "Appel".into(),
        notes: "Premier contact, très positif.".into(),
        interactor_id: paul,
        recorded_at: now,
    });

    inner.media.insert(MediaItem {
        id: Uuid::new_v4(),
        tenant_id,
        title: "Prédication du 22/10".into(),
        kind: MediaKind::Video,
        url: "https://media.ecclesia.app/predication-2023-10-22".into(),
        tags: vec!["prédication".into(), "dimanche".into()],
        uploader_id: marie,
        upload_date: date(2023, 10, 23),
        created_at: now,
        updated_at: now,
    });

    inner.audit_logs.insert_front(AuditLogEntry {
        id: Uuid::new_v4(),
        tenant_id,
        actor_id: jean,
        action: "DELETE_USER".into(),
        entity: "user".into(),
        entity_id: None,
        ip_address: Some("192.168.1.1".into()),
        recorded_at: now,
    });

    tracing::info!(%tenant_id, "demo tenant seeded");
}
