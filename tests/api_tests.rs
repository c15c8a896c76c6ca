mod common;

use reqwest::StatusCode;
use serde_json::json;

use ecclesia::auth::recover;
use ecclesia::models::TokenType;

// ── Health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_ok() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");

    common::cleanup(app).await;
}

// ── Auth ────────────────────────────────────────────────────────

#[tokio::test]
async fn signin_returns_tokens_and_profile() {
    let app = common::spawn_app().await;
    app.insert_user("admin@test.com", "senha-admin-123", "ADMIN")
        .await;

    let (body, status) = app
        .post(
            "/auth/signin",
            &json!({ "email": "admin@test.com", "password": "senha-admin-123" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["accessToken"].is_string());
    assert!(body["data"]["refreshToken"].is_string());
    assert_eq!(body["data"]["user"]["email"], "admin@test.com");
    // The hashed secret never serializes.
    assert!(body["data"]["user"].get("password_hash").is_none());
    assert!(body["timestamp"].is_string());

    // Signin stamps last_access.
    let (last_access,): (Option<chrono::DateTime<chrono::Utc>>,) =
        sqlx::query_as("SELECT last_access FROM users WHERE email = 'admin@test.com'")
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert!(last_access.is_some());

    common::cleanup(app).await;
}

#[tokio::test]
async fn signin_rejects_bad_credentials() {
    let app = common::spawn_app().await;
    app.insert_user("user@test.com", "senha-certa-123", "VOLUNTEER")
        .await;

    let (_, status) = app
        .post(
            "/auth/signin",
            &json!({ "email": "user@test.com", "password": "senha-errada" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, status) = app
        .post(
            "/auth/signin",
            &json!({ "email": "ghost@test.com", "password": "tanto-faz-123" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    common::cleanup(app).await;
}

#[tokio::test]
async fn soft_deleted_user_cannot_signin_or_refresh() {
    let app = common::spawn_app().await;
    app.insert_user("saiu@test.com", "senha-valida-123", "VOLUNTEER")
        .await;

    let (body, _) = app
        .post(
            "/auth/signin",
            &json!({ "email": "saiu@test.com", "password": "senha-valida-123" }),
        )
        .await;
    let refresh = body["data"]["refreshToken"].as_str().unwrap().to_string();

    sqlx::query("UPDATE users SET deleted_at = now() WHERE email = 'saiu@test.com'")
        .execute(&app.pool)
        .await
        .unwrap();

    let (_, status) = app
        .post(
            "/auth/signin",
            &json!({ "email": "saiu@test.com", "password": "senha-valida-123" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A still-unexpired refresh token stops working too.
    let (_, status) = app.post_auth("/auth/refresh", &refresh, &json!({})).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    common::cleanup(app).await;
}

#[tokio::test]
async fn signin_rate_limits_after_repeated_failures() {
    let app = common::spawn_app().await;
    app.insert_user("alvo@test.com", "senha-certa-123", "VOLUNTEER")
        .await;

    for _ in 0..5 {
        let (_, status) = app
            .post(
                "/auth/signin",
                &json!({ "email": "alvo@test.com", "password": "senha-errada" }),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    // Even the correct password is refused while locked out.
    let (_, status) = app
        .post(
            "/auth/signin",
            &json!({ "email": "alvo@test.com", "password": "senha-certa-123" }),
        )
        .await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    common::cleanup(app).await;
}

#[tokio::test]
async fn refresh_requires_refresh_token_and_issues_access() {
    let app = common::spawn_app().await;
    app.insert_user("user@test.com", "senha-user-1234", "VOLUNTEER")
        .await;

    let (body, _) = app
        .post(
            "/auth/signin",
            &json!({ "email": "user@test.com", "password": "senha-user-1234" }),
        )
        .await;
    let access = body["data"]["accessToken"].as_str().unwrap().to_string();
    let refresh = body["data"]["refreshToken"].as_str().unwrap().to_string();

    // No credential → 403.
    let (_, status) = app.post("/auth/refresh", &json!({})).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // An access token is signed with the wrong secret for refresh → 403.
    let (_, status) = app.post_auth("/auth/refresh", &access, &json!({})).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (body, status) = app.post_auth("/auth/refresh", &refresh, &json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["accessToken"].is_string());

    // The new access token works against a protected route.
    let new_access = body["data"]["accessToken"].as_str().unwrap();
    let (_, status) = app.get_auth("/auth/me", new_access).await;
    assert_eq!(status, StatusCode::OK);

    common::cleanup(app).await;
}

#[tokio::test]
async fn me_requires_valid_access_token() {
    let app = common::spawn_app().await;
    let token = app.volunteer_token().await;

    let (body, status) = app.get_auth("/auth/me", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "vol@test.com");

    let (_, status) = app.get("/auth/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, status) = app.get_auth("/auth/me", "um-token-invalido").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    common::cleanup(app).await;
}

// ── Generic CRUD template ───────────────────────────────────────

#[tokio::test]
async fn create_requires_authentication_but_reads_are_public() {
    let app = common::spawn_app().await;

    let (_, status) = app
        .post(
            "/field",
            &json!({
                "name": "Sem Auth",
                "continent": "América",
                "country": "Brasil",
                "state": "SP",
                "description": "x",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Public list works unauthenticated, and tolerates a garbage token.
    let (_, status) = app.get("/field").await;
    assert_eq!(status, StatusCode::OK);
    let (_, status) = app.get_auth("/field", "token-invalido").await;
    assert_eq!(status, StatusCode::OK);

    common::cleanup(app).await;
}

#[tokio::test]
async fn create_then_find_one_round_trips() {
    let app = common::spawn_app().await;
    let token = app.volunteer_token().await;

    let field = app.create_field(&token, "Campo Sul").await;
    let id = field["id"].as_str().unwrap();
    assert!(field["created_at"].is_string());

    let (body, status) = app.get(&format!("/field/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Campo Sul");
    assert_eq!(body["data"]["country"], "Brasil");
    assert_eq!(body["data"]["id"], field["id"]);
    assert!(body["data"]["deleted_at"].is_null());

    common::cleanup(app).await;
}

#[tokio::test]
async fn unknown_id_yields_localized_not_found() {
    let app = common::spawn_app().await;
    let token = app.volunteer_token().await;
    let ghost = uuid::Uuid::new_v4();

    let (body, status) = app.get(&format!("/field/{ghost}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Campo não encontrado!");

    let (_, status) = app
        .put_auth(&format!("/field/{ghost}"), &token, &json!({ "name": "x" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, status) = app.delete_auth(&format!("/field/{ghost}"), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    common::cleanup(app).await;
}

#[tokio::test]
async fn partial_update_keeps_untouched_relation() {
    let app = common::spawn_app().await;
    let token = app.volunteer_token().await;

    let field_a = app.create_field(&token, "Campo A").await;
    let field_b = app.create_field(&token, "Campo B").await;

    let (body, status) = app
        .post_auth(
            "/church",
            &token,
            &json!({
                "name": "Igreja Central",
                "description": "Sede",
                "field_id": field_a["id"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "create church failed: {body}");
    let church_id = body["data"]["id"].as_str().unwrap().to_string();

    // Omitting field_id leaves the relation untouched.
    let (body, status) = app
        .put_auth(
            &format!("/church/{church_id}"),
            &token,
            &json!({ "name": "Igreja Central Renomeada" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Igreja Central Renomeada");
    assert_eq!(body["data"]["field_id"], field_a["id"]);
    assert_eq!(body["data"]["description"], "Sede");

    // A present field_id replaces the relation.
    let (body, status) = app
        .put_auth(
            &format!("/church/{church_id}"),
            &token,
            &json!({ "field_id": field_b["id"] }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["field_id"], field_b["id"]);

    common::cleanup(app).await;
}

#[tokio::test]
async fn create_with_unknown_field_is_rejected() {
    let app = common::spawn_app().await;
    let token = app.volunteer_token().await;

    let (_, status) = app
        .post_auth(
            "/church",
            &token,
            &json!({
                "name": "Igreja Fantasma",
                "description": "x",
                "field_id": uuid::Uuid::new_v4(),
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    common::cleanup(app).await;
}

#[tokio::test]
async fn soft_delete_hides_from_default_list_only() {
    let app = common::spawn_app().await;
    let token = app.volunteer_token().await;

    let (kept, _) = app
        .post_auth(
            "/testimonial",
            &token,
            &json!({ "name": "Ana", "email": "ana@test.com", "text": "t1" }),
        )
        .await;
    let (removed, _) = app
        .post_auth(
            "/testimonial",
            &token,
            &json!({ "name": "Bia", "email": "bia@test.com", "text": "t2" }),
        )
        .await;
    let kept_id = kept["data"]["id"].as_str().unwrap();
    let removed_id = removed["data"]["id"].as_str().unwrap().to_string();

    let (body, status) = app
        .delete_auth(&format!("/testimonial/{removed_id}"), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["deleted_at"].is_string());

    // Default list excludes the soft-deleted row.
    let (body, _) = app.get("/testimonial").await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&kept_id));
    assert!(!ids.contains(&removed_id.as_str()));

    // deleted=true includes it.
    let (body, _) = app.get("/testimonial?deleted=true").await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&removed_id.as_str()));

    // find-one still returns it.
    let (body, status) = app.get(&format!("/testimonial/{removed_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["deleted_at"].is_string());

    common::cleanup(app).await;
}

#[tokio::test]
async fn restore_is_admin_only_and_ignores_unknown_ids() {
    let app = common::spawn_app().await;
    let admin = app.admin_token().await;
    let volunteer = app.volunteer_token().await;

    let field = app.create_field(&volunteer, "Campo Restauro").await;
    let field_id = field["id"].as_str().unwrap().to_string();
    app.delete_auth(&format!("/field/{field_id}"), &volunteer)
        .await;

    // Non-admin is refused regardless of payload validity.
    let (_, status) = app
        .put_auth(
            "/field/restore",
            &volunteer,
            &json!({ "ids": [field_id] }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Admin restores; unknown and never-deleted ids are silently ignored
    // and do not inflate the count.
    let active = app.create_field(&volunteer, "Campo Ativo").await;
    let (body, status) = app
        .put_auth(
            "/field/restore",
            &admin,
            &json!({ "ids": [field_id, active["id"], uuid::Uuid::new_v4()] }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 1);

    let (body, _) = app.get("/field").await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&field_id.as_str()));

    common::cleanup(app).await;
}

#[tokio::test]
async fn hard_remove_is_admin_only_and_physically_deletes() {
    let app = common::spawn_app().await;
    let admin = app.admin_token().await;
    let volunteer = app.volunteer_token().await;

    let field_a = app.create_field(&volunteer, "Campo A").await;
    let field_b = app.create_field(&volunteer, "Campo B").await;
    let id_a = field_a["id"].as_str().unwrap().to_string();
    let id_b = field_b["id"].as_str().unwrap().to_string();

    let (_, status) = app
        .delete_auth_body("/field/hard-remove", &volunteer, &json!({ "ids": [id_a] }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (body, status) = app
        .delete_auth_body(
            "/field/hard-remove",
            &admin,
            &json!({ "ids": [id_a, id_b, uuid::Uuid::new_v4()] }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 2);

    // Gone for good: not even find-one sees them.
    let (_, status) = app.get(&format!("/field/{id_a}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    common::cleanup(app).await;
}

#[tokio::test]
async fn hard_remove_batch_is_all_or_nothing() {
    let app = common::spawn_app().await;
    let admin = app.admin_token().await;

    let referenced = app.create_field(&admin, "Campo Referenciado").await;
    let free = app.create_field(&admin, "Campo Livre").await;
    let ref_id = referenced["id"].as_str().unwrap().to_string();
    let free_id = free["id"].as_str().unwrap().to_string();

    // A church keeps a foreign key onto the first field, so deleting the
    // batch must fail and roll back.
    let (_, status) = app
        .post_auth(
            "/church",
            &admin,
            &json!({
                "name": "Igreja Âncora",
                "description": "x",
                "field_id": ref_id,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, status) = app
        .delete_auth_body(
            "/field/hard-remove",
            &admin,
            &json!({ "ids": [ref_id, free_id] }),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // Neither field was removed.
    let (_, status) = app.get(&format!("/field/{ref_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let (_, status) = app.get(&format!("/field/{free_id}")).await;
    assert_eq!(status, StatusCode::OK);

    common::cleanup(app).await;
}

#[tokio::test]
async fn pagination_clamps_and_reports_totals_in_headers() {
    let app = common::spawn_app().await;
    let token = app.volunteer_token().await;

    for i in 0..15 {
        app.create_field(&token, &format!("Campo {i:02}")).await;
    }

    let resp = app
        .client
        .get(app.url("/field?page=2&itemsPerPage=10&orderKey=name&orderValue=asc"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["x-total-count"], "15");
    assert_eq!(resp.headers()["x-total-pages"], "2");

    let body: serde_json::Value = resp.json().await.unwrap();
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    // Second page of an ascending name ordering starts at "Campo 10".
    assert_eq!(items[0]["name"], "Campo 10");

    common::cleanup(app).await;
}

// ── Users ───────────────────────────────────────────────────────

#[tokio::test]
async fn self_registration_is_forced_to_volunteer() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .post(
            "/user",
            &json!({
                "name": "Intruso",
                "email": "intruso@test.com",
                "password": "senha-123456",
                "role": "ADMIN",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "VOLUNTEER");

    // An admin caller may assign roles.
    let admin = app.admin_token().await;
    let (body, status) = app
        .post_auth(
            "/user",
            &admin,
            &json!({
                "name": "Novo Admin",
                "email": "novo-admin@test.com",
                "password": "senha-123456",
                "role": "ADMIN",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "ADMIN");

    common::cleanup(app).await;
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let app = common::spawn_app().await;

    let payload = json!({
        "name": "Maria",
        "email": "maria@test.com",
        "password": "senha-123456",
    });
    let (_, status) = app.post("/user", &payload).await;
    assert_eq!(status, StatusCode::OK);

    let (body, status) = app.post("/user", &payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "E-mail já cadastrado!");

    common::cleanup(app).await;
}

#[tokio::test]
async fn user_listing_is_admin_only_and_updates_are_self_or_admin() {
    let app = common::spawn_app().await;
    let admin = app.admin_token().await;
    let volunteer = app.volunteer_token().await;

    let (_, status) = app.get_auth("/user", &volunteer).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (body, status) = app.get_auth("/user", &admin).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_array());

    let other_id = app
        .insert_user("outro@test.com", "senha-123456", "VOLUNTEER")
        .await;

    // A volunteer cannot touch someone else's profile.
    let (_, status) = app
        .put_auth(
            &format!("/user/{other_id}"),
            &volunteer,
            &json!({ "name": "Hackeado" }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Nor grant themselves a role.
    let (me, _) = app.get_auth("/auth/me", &volunteer).await;
    let my_id = me["data"]["id"].as_str().unwrap().to_string();
    let (_, status) = app
        .put_auth(
            &format!("/user/{my_id}"),
            &volunteer,
            &json!({ "role": "ADMIN" }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Self-update works.
    let (body, status) = app
        .put_auth(
            &format!("/user/{my_id}"),
            &volunteer,
            &json!({ "name": "Voluntário Renomeado" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Voluntário Renomeado");

    // Admin updates anyone.
    let (_, status) = app
        .put_auth(
            &format!("/user/{other_id}"),
            &admin,
            &json!({ "role": "ADMIN" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    common::cleanup(app).await;
}

// ── Password recovery tokens ────────────────────────────────────

#[tokio::test]
async fn recover_token_is_consumed_exactly_once() {
    let app = common::spawn_app().await;
    app.insert_user("maria@test.com", "senha-antiga-123", "VOLUNTEER")
        .await;

    let code = recover::create(
        &app.pool,
        &app.config,
        "maria@test.com",
        TokenType::RecoverEmail,
    )
    .await
    .unwrap();
    assert_eq!(code.len(), app.config.token_length);

    // Wrong code: validity is false, nothing is consumed.
    let (body, status) = app
        .post(
            "/auth/confirm-recover-email",
            &json!({ "email": "maria@test.com", "token": "AAAA2222" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["valid"], false);

    // Right code: the confirmation peek does not consume it.
    let (body, _) = app
        .post(
            "/auth/confirm-recover-email",
            &json!({ "email": "maria@test.com", "token": code }),
        )
        .await;
    assert_eq!(body["data"]["valid"], true);

    // new-password consumes it and re-hashes.
    let (_, status) = app
        .post(
            "/auth/new-password",
            &json!({
                "email": "maria@test.com",
                "token": code,
                "password": "senha-nova-1234",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    app.signin("maria@test.com", "senha-nova-1234").await;

    // Second use: no unused token remains.
    let (body, status) = app
        .post(
            "/auth/new-password",
            &json!({
                "email": "maria@test.com",
                "token": code,
                "password": "senha-outra-123",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Token não definido!");

    common::cleanup(app).await;
}

#[tokio::test]
async fn expired_recover_token_is_rejected_without_being_consumed() {
    let app = common::spawn_app().await;
    app.insert_user("tarde@test.com", "senha-antiga-123", "VOLUNTEER")
        .await;

    let code = recover::create(
        &app.pool,
        &app.config,
        "tarde@test.com",
        TokenType::RecoverEmail,
    )
    .await
    .unwrap();

    // Age the token past its validity window.
    sqlx::query(
        "UPDATE tokens SET created_at = now() - make_interval(mins => $1 + 1)
         WHERE email = 'tarde@test.com'",
    )
    .bind(app.config.token_ttl_min as i32)
    .execute(&app.pool)
    .await
    .unwrap();

    let valid = recover::validate(&app.pool, &app.config, "tarde@test.com", &code)
        .await
        .unwrap();
    assert!(!valid);

    // Rejection did not burn the token.
    let (used,): (bool,) =
        sqlx::query_as("SELECT used FROM tokens WHERE email = 'tarde@test.com'")
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert!(!used);

    common::cleanup(app).await;
}

#[tokio::test]
async fn fresh_recover_token_supersedes_previous_one() {
    let app = common::spawn_app().await;
    app.insert_user("joao@test.com", "senha-antiga-123", "VOLUNTEER")
        .await;

    let first = recover::create(
        &app.pool,
        &app.config,
        "joao@test.com",
        TokenType::RecoverEmail,
    )
    .await
    .unwrap();
    let second = recover::create(
        &app.pool,
        &app.config,
        "joao@test.com",
        TokenType::RecoverEmail,
    )
    .await
    .unwrap();

    let (body, _) = app
        .post(
            "/auth/confirm-recover-email",
            &json!({ "email": "joao@test.com", "token": first }),
        )
        .await;
    assert_eq!(body["data"]["valid"], false);

    let (body, _) = app
        .post(
            "/auth/confirm-recover-email",
            &json!({ "email": "joao@test.com", "token": second }),
        )
        .await;
    assert_eq!(body["data"]["valid"], true);

    common::cleanup(app).await;
}

#[tokio::test]
async fn recover_email_endpoint_never_reveals_accounts() {
    let app = common::spawn_app().await;

    let (_, status) = app
        .post(
            "/auth/send-recover-email",
            &json!({ "email": "ninguem@test.com" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    common::cleanup(app).await;
}
