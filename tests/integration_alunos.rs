mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{auth_token, create_test_aluno, create_test_usuario, generate_unique_email, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn token_for(pool: &PgPool) -> String {
    let email = generate_unique_email();
    let usuario_id = create_test_usuario(pool, &email, "senha123").await;
    auth_token(usuario_id, &email)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_post_aluno(pool: PgPool) {
    let token = token_for(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/aluno")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(
            serde_json::to_string(&json!({
                "nome": "Ana Costa",
                "altura": 1.70,
                "peso": 68.5,
                "objetivo": "Condicionamento físico"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["nome"], "Ana Costa");
    assert_eq!(body["data"]["ativo"], true);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_post_aluno_campo_obrigatorio_ausente(pool: PgPool) {
    let token = token_for(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/aluno")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(
            serde_json::to_string(&json!({"nome": "Sem Medidas"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_lista_alunos_filtrada_por_nome(pool: PgPool) {
    let token = token_for(&pool).await;
    create_test_aluno(&pool, "Ana Costa").await;
    create_test_aluno(&pool, "Bruno Lima").await;
    create_test_aluno(&pool, "Mariana Costa").await;

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/aluno/lista?nome=costa")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let alunos = body["data"].as_array().unwrap();
    assert_eq!(alunos.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_aluno_inexistente(pool: PgPool) {
    let token = token_for(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/aluno/9999")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Aluno não encontrado");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_put_aluno_sobrescreve(pool: PgPool) {
    let token = token_for(&pool).await;
    let aluno_id = create_test_aluno(&pool, "Ana Costa").await;

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/aluno/{aluno_id}"))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(
            serde_json::to_string(&json!({
                "nome": "Ana Costa Silva",
                "altura": 1.71,
                "peso": 66.0,
                "lesao": "Joelho esquerdo",
                "ativo": false
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["nome"], "Ana Costa Silva");
    assert_eq!(body["data"]["lesao"], "Joelho esquerdo");
    assert_eq!(body["data"]["ativo"], false);
}
