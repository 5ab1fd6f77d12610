mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use common::{auth_token, create_test_usuario, generate_unique_email, setup_test_app};
use fitfermendes::utils::password::hash_password;
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn insert_verificacao(pool: &PgPool, usuario_id: i32, codigo: Option<&str>) -> String {
    let codigo_hash = codigo.map(|c| hash_password(c).unwrap());
    let verificador = Uuid::new_v4().to_string();

    sqlx::query(
        "INSERT INTO usuario_verificacoes (usuario_id, codigo, verificador, expira_em)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(usuario_id)
    .bind(&codigo_hash)
    .bind(&verificador)
    .bind(Utc::now() + Duration::minutes(5))
    .execute(pool)
    .await
    .unwrap();

    verificador
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_email_retorna_verificador(pool: PgPool) {
    let email = generate_unique_email();
    create_test_usuario(&pool, &email, "senha123").await;

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/usuario/loginEmail")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"email": email, "senha": "senha123"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body["data"]["verificador"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_email_senha_errada(pool: PgPool) {
    let email = generate_unique_email();
    create_test_usuario(&pool, &email, "senha123").await;

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/usuario/loginEmail")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"email": email, "senha": "errada"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_email_corpo_incompleto(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/usuario/loginEmail")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"email": "a@b.com"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_2fa_emite_token_utilizavel(pool: PgPool) {
    let email = generate_unique_email();
    let usuario_id = create_test_usuario(&pool, &email, "senha123").await;
    let verificador = insert_verificacao(&pool, usuario_id, Some("123456")).await;

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/usuario/2fa")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"verificador": verificador, "codigo": "123456"}))
                .unwrap(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let token = body["data"]["token"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["usuario"]["email"], email);

    // The issued token must open protected routes.
    let request = Request::builder()
        .method("GET")
        .uri("/usuario/lista")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_2fa_codigo_errado(pool: PgPool) {
    let email = generate_unique_email();
    let usuario_id = create_test_usuario(&pool, &email, "senha123").await;
    let verificador = insert_verificacao(&pool, usuario_id, Some("123456")).await;

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/usuario/2fa")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"verificador": verificador, "codigo": "000000"}))
                .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_recuperar_senha_fluxo_completo(pool: PgPool) {
    let email = generate_unique_email();
    let usuario_id = create_test_usuario(&pool, &email, "senhaAntiga").await;

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/usuario/solicitarRecuperacao")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"email": email})).unwrap(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The endpoint hands back the verificador the emailed link carries.
    let body = body_json(response).await;
    let verificador = body["data"]["verificador"].as_str().unwrap().to_string();

    let persisted: String = sqlx::query_scalar(
        "SELECT verificador FROM usuario_verificacoes WHERE usuario_id = $1",
    )
    .bind(usuario_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(verificador, persisted);

    let request = Request::builder()
        .method("POST")
        .uri("/usuario/recuperarSenha")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"codigo": verificador, "novaSenha": "senhaNova123"}))
                .unwrap(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Redemption signs the user in directly.
    let body = body_json(response).await;
    let token = body["data"]["token"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["usuario"]["email"], email);

    let request = Request::builder()
        .method("GET")
        .uri("/usuario/lista")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The new password now passes the first login step.
    let request = Request::builder()
        .method("POST")
        .uri("/usuario/loginEmail")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"email": email, "senha": "senhaNova123"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_recuperar_senha_verificador_invalido(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/usuario/recuperarSenha")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"codigo": "nao-existe", "novaSenha": "senhaNova123"}))
                .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_rota_protegida_sem_token(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/usuario/lista")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_rota_protegida_com_token_assinado(pool: PgPool) {
    let email = generate_unique_email();
    let usuario_id = create_test_usuario(&pool, &email, "senha123").await;
    let token = auth_token(usuario_id, &email);

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri(format!("/usuario/{usuario_id}"))
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["id"], usuario_id);
    assert_eq!(body["data"]["email"], email);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_data_sem_token(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/usuario/data")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    // Payload is the current server timestamp.
    let data = body["data"].as_str().unwrap();
    assert!(data.parse::<chrono::DateTime<Utc>>().is_ok());
}
