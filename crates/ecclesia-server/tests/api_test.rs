//! End-to-end tests driving the router with `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use ecclesia_server::build_router;
use ecclesia_store::MemoryStore;

fn app() -> Router {
    build_router(MemoryStore::new())
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn tenant_body(name: &str, slug: &str) -> Value {
    json!({
        "name": name,
        "slug": slug,
        "domain": format!("{slug}.example.com"),
        "plan": "Basic"
    })
}

fn member_body(first: &str, last: &str) -> Value {
    json!({
        "first_name": first,
        "last_name": last,
        "gender": "Female",
        "birthdate": "1990-05-20",
        "email": format!("{}@email.com", first.to_lowercase()),
        "phone": "0612345678",
        "address": "1 rue de la Paix",
        "civil_status": "Single",
        "status": "Active",
        "spiritual_status": "Baptized",
        "joined_at": "2018-03-10"
    })
}

async fn create_tenant(app: &Router, name: &str, slug: &str) -> String {
    let (status, body) = send(app, "POST", "/v1/tenants", Some(tenant_body(name, slug))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn healthz_is_up() {
    let app = app();
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn member_crud_over_http() {
    let app = app();
    let tenant_id = create_tenant(&app, "Église Centrale", "eglise-centrale").await;
    let base = format!("/v1/tenants/{tenant_id}/members");

    let (status, alice) = send(&app, "POST", &base, Some(member_body("Alice", "Dubois"))).await;
    assert_eq!(status, StatusCode::CREATED);
    let alice_id = alice["id"].as_str().unwrap().to_string();
    assert_eq!(alice["tenant_id"], tenant_id.as_str());

    let (status, fetched) = send(&app, "GET", &format!("{base}/{alice_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["first_name"], "Alice");

    let (status, archived) = send(
        &app,
        "PUT",
        &format!("{base}/{alice_id}"),
        Some(json!({ "status": "Archived" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(archived["status"], "Archived");
    assert_eq!(archived["last_name"], "Dubois");

    let (status, _) = send(&app, "DELETE", &format!("{base}/{alice_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("{base}/{alice_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn validation_and_conflict_status_codes() {
    let app = app();
    let tenant_id = create_tenant(&app, "Test Church", "test-church").await;

    // Blank name.
    let mut blank = member_body("Alice", "Dubois");
    blank["first_name"] = json!("   ");
    let (status, body) = send(
        &app,
        "POST",
        &format!("/v1/tenants/{tenant_id}/members"),
        Some(blank),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    // Duplicate slug.
    let (status, _) = send(
        &app,
        "POST",
        "/v1/tenants",
        Some(tenant_body("Other", "test-church")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn cross_tenant_access_is_forbidden() {
    let app = app();
    let tenant_a = create_tenant(&app, "Church A", "church-a").await;
    let tenant_b = create_tenant(&app, "Church B", "church-b").await;

    let (_, alice) = send(
        &app,
        "POST",
        &format!("/v1/tenants/{tenant_a}/members"),
        Some(member_body("Alice", "Dubois")),
    )
    .await;
    let alice_id = alice["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "GET",
        &format!("/v1/tenants/{tenant_b}/members/{alice_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // B's listing never shows A's records.
    let (status, page) = send(
        &app,
        "GET",
        &format!("/v1/tenants/{tenant_b}/members"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 0);
}

#[tokio::test]
async fn group_get_returns_the_resolved_view() {
    let app = app();
    let tenant_id = create_tenant(&app, "Test Church", "test-church").await;
    let members = format!("/v1/tenants/{tenant_id}/members");

    let (_, alice) = send(&app, "POST", &members, Some(member_body("Alice", "Dubois"))).await;
    let (_, bob) = send(&app, "POST", &members, Some(member_body("Bob", "Lefebvre"))).await;
    let alice_id = alice["id"].as_str().unwrap();
    let bob_id = bob["id"].as_str().unwrap();

    let (status, group) = send(
        &app,
        "POST",
        &format!("/v1/tenants/{tenant_id}/groups"),
        Some(json!({
            "name": "Groupe des Jeunes",
            "description": "Jeunes de 18-25 ans",
            "kind": "Jeunesse",
            "leader_id": alice_id,
            "member_ids": [alice_id, bob_id]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let group_id = group["id"].as_str().unwrap();
    // The stored record carries ids, not embedded members.
    assert_eq!(group["leader_id"], alice_id);

    let (status, view) = send(
        &app,
        "GET",
        &format!("/v1/tenants/{tenant_id}/groups/{group_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // Flattened group fields plus the resolved join.
    assert_eq!(view["name"], "Groupe des Jeunes");
    assert_eq!(view["leader"]["first_name"], "Alice");
    assert_eq!(view["members"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn outbox_over_http_is_newest_first() {
    let app = app();
    let tenant_id = create_tenant(&app, "Test Church", "test-church").await;

    let (_, alice) = send(
        &app,
        "POST",
        &format!("/v1/tenants/{tenant_id}/members"),
        Some(member_body("Alice", "Dubois")),
    )
    .await;
    let alice_id = alice["id"].as_str().unwrap();

    let messages = format!("/v1/tenants/{tenant_id}/messages");
    for content in ["premier", "deuxième"] {
        let (status, _) = send(
            &app,
            "POST",
            &messages,
            Some(json!({
                "channel": "Sms",
                "content": content,
                "recipient_ids": [alice_id]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, page) = send(&app, "GET", &messages, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 2);
    assert_eq!(page["items"][0]["content"], "deuxième");
}

#[tokio::test]
async fn listing_honours_pagination_params() {
    let app = app();
    let tenant_id = create_tenant(&app, "Test Church", "test-church").await;
    let base = format!("/v1/tenants/{tenant_id}/members");

    for i in 0..5 {
        let mut body = member_body("Alice", "Dubois");
        body["email"] = json!(format!("member{i}@email.com"));
        send(&app, "POST", &base, Some(body)).await;
    }

    let (status, page) = send(&app, "GET", &format!("{base}?offset=3&limit=3"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 5);
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
    assert_eq!(page["offset"], 3);
}

#[tokio::test]
async fn permission_catalog_is_served_globally() {
    let app = app();
    let (status, permissions) = send(&app, "GET", "/v1/permissions", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = permissions.as_array().unwrap();
    assert!(!list.is_empty());
    assert!(list.iter().any(|p| p["module"] == "members"));
}

#[tokio::test]
async fn interactions_are_nested_under_the_newcomer() {
    let app = app();
    let tenant_id = create_tenant(&app, "Test Church", "test-church").await;

    let (_, paul) = send(
        &app,
        "POST",
        &format!("/v1/tenants/{tenant_id}/users"),
        Some(json!({
            "first_name": "Paul",
            "last_name": "Bernard",
            "email": "paul.bernard@example.com",
            "role": "Standard User"
        })),
    )
    .await;
    let paul_id = paul["id"].as_str().unwrap();

    let (status, newcomer) = send(
        &app,
        "POST",
        &format!("/v1/tenants/{tenant_id}/newcomers"),
        Some(json!({
            "first_name": "Lucie",
            "last_name": "Moreau",
            "phone": "0712345678",
            "first_visit_date": "2023-10-22",
            "came_from": "Ami",
            "status": "New",
            "assigned_to": paul_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let newcomer_id = newcomer["id"].as_str().unwrap();

    let interactions = format!("/v1/tenants/{tenant_id}/newcomers/{newcomer_id}/interactions");
    let (status, _) = send(
        &app,
        "POST",
        &interactions,
        Some(json!({
            "date": "2023-10-24",
            "kind": "Appel",
            "notes": "Premier contact, très positif.",
            "interactor_id": paul_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, list) = send(&app, "GET", &interactions, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["kind"], "Appel");
}
