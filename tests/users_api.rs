//! End-to-end coverage of the users REST surface over in-memory stores.

use std::sync::Arc;

use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use hobby_registry::Trace;
use hobby_registry::domain::NewUser;
use hobby_registry::domain::ports::{
    MemoryCredentialStore, MemoryUserRepository, UserRepository,
};
use hobby_registry::inbound::http::health::{HealthState, live, ready};
use hobby_registry::inbound::http::state::HttpState;
use hobby_registry::inbound::http::users::{
    create_user, destroy_user, list_users, show_user, update_user,
};

const UUID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
const SECRET: &str = "facebook-style-opaque-token";

struct TestContext {
    users: Arc<MemoryUserRepository>,
    state: web::Data<HttpState>,
    health: web::Data<HealthState>,
}

fn context() -> TestContext {
    let users = Arc::new(MemoryUserRepository::default());
    let credentials = Arc::new(MemoryCredentialStore::default());
    credentials.add(UUID, SECRET);
    TestContext {
        state: web::Data::new(HttpState::new(users.clone(), credentials)),
        users,
        health: web::Data::new(HealthState::new()),
    }
}

fn test_app(
    ctx: &TestContext,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(ctx.state.clone())
        .app_data(ctx.health.clone())
        .wrap(Trace)
        .service(list_users)
        .service(show_user)
        .service(create_user)
        .service(update_user)
        .service(destroy_user)
        .service(ready)
        .service(live)
}

async fn seed_users(repo: &MemoryUserRepository, count: usize) -> Vec<i32> {
    let mut ids = Vec::with_capacity(count);
    for n in 0..count {
        let user = repo
            .insert(&NewUser {
                name: format!("Name{n}"),
                surname: format!("Surname{n}"),
                hobby: format!("Hobby{n}"),
            })
            .await
            .expect("seed user");
        ids.push(user.id.as_i32());
    }
    ids
}

fn auth_body() -> Value {
    json!({ "uuid": UUID, "secret_token": SECRET })
}

#[actix_web::test]
async fn list_returns_every_user() {
    let ctx = context();
    seed_users(&ctx.users, 10).await;
    let app = actix_test::init_service(test_app(&ctx)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;

    assert!(response.status().is_success());
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.as_array().expect("array of users").len(), 10);
}

#[actix_web::test]
async fn list_of_empty_store_is_an_empty_array() {
    let ctx = context();
    let app = actix_test::init_service(test_app(&ctx)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;

    assert!(response.status().is_success());
    let body: Value = actix_test::read_body_json(response).await;
    assert!(body.as_array().expect("array").is_empty());
}

#[actix_web::test]
async fn show_returns_the_record_with_all_fields() {
    let ctx = context();
    let ids = seed_users(&ctx.users, 1).await;
    let app = actix_test::init_service(test_app(&ctx)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/users/{}", ids[0]))
            .to_request(),
    )
    .await;

    assert!(response.status().is_success());
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("name").and_then(Value::as_str), Some("Name0"));
    assert_eq!(body.get("surname").and_then(Value::as_str), Some("Surname0"));
    assert_eq!(body.get("hobby").and_then(Value::as_str), Some("Hobby0"));
}

#[actix_web::test]
async fn show_of_unknown_id_is_not_found() {
    let ctx = context();
    let app = actix_test::init_service(test_app(&ctx)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users/100").to_request(),
    )
    .await;

    assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some("User not found.")
    );
}

#[actix_web::test]
async fn update_of_unknown_id_is_not_found() {
    let ctx = context();
    let app = actix_test::init_service(test_app(&ctx)).await;

    let mut payload = auth_body();
    payload["name"] = json!("New");
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/users/100")
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn patch_is_an_alias_for_put() {
    let ctx = context();
    let ids = seed_users(&ctx.users, 1).await;
    let app = actix_test::init_service(test_app(&ctx)).await;

    let mut payload = auth_body();
    payload["hobby"] = json!("hardcoded strings");
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::patch()
            .uri(&format!("/users/{}", ids[0]))
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert!(response.status().is_success());
    let stored = ctx
        .users
        .find_by_id(ids[0].into())
        .await
        .expect("find")
        .expect("record exists");
    assert_eq!(stored.hobby, "hardcoded strings");
    assert_eq!(stored.name, "Name0");
}

#[actix_web::test]
async fn destroy_removes_the_record_and_repeats_as_not_found() {
    let ctx = context();
    let ids = seed_users(&ctx.users, 1).await;
    let app = actix_test::init_service(test_app(&ctx)).await;
    let uri = format!("/users/{}", ids[0]);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&uri)
            .set_json(auth_body())
            .to_request(),
    )
    .await;
    assert!(response.status().is_success());
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("result").and_then(Value::as_str),
        Some("User deleted.")
    );

    // The record is gone for reads.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);

    // Deleting again reports not found rather than failing harder.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&uri)
            .set_json(auth_body())
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn destroy_of_unknown_id_is_not_found() {
    let ctx = context();
    let app = actix_test::init_service(test_app(&ctx)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/users/100")
            .set_json(auth_body())
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some("User not found.")
    );
}

#[actix_web::test]
async fn full_lifecycle_create_update_show_destroy() {
    let ctx = context();
    let app = actix_test::init_service(test_app(&ctx)).await;

    let mut payload = auth_body();
    payload["name"] = json!("Ada");
    payload["surname"] = json!("Lovelace");
    payload["hobby"] = json!("chess");
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), actix_web::http::StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    let id = body
        .get("user")
        .and_then(|u| u.get("id"))
        .and_then(Value::as_i64)
        .expect("created id");

    let mut patch = auth_body();
    patch["name"] = json!("New");
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/users/{id}"))
            .set_json(patch)
            .to_request(),
    )
    .await;
    assert!(response.status().is_success());

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/users/{id}"))
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("name").and_then(Value::as_str), Some("New"));
    assert_eq!(body.get("surname").and_then(Value::as_str), Some("Lovelace"));

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/users/{id}"))
            .set_json(auth_body())
            .to_request(),
    )
    .await;
    assert!(response.status().is_success());
    assert!(ctx.users.list().await.expect("list").is_empty());
}

#[actix_web::test]
async fn responses_carry_a_request_id_header() {
    let ctx = context();
    let app = actix_test::init_service(test_app(&ctx)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;

    assert!(response.headers().contains_key("request-id"));
}

#[actix_web::test]
async fn health_probes_answer() {
    let ctx = context();
    ctx.health.mark_ready();
    let app = actix_test::init_service(test_app(&ctx)).await;

    for uri in ["/health/live", "/health/ready"] {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri(uri).to_request(),
        )
        .await;
        assert!(response.status().is_success(), "{uri} should answer 200");
    }
}
