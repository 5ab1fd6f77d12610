use fitfermendes::config::cors::CorsConfig;
use fitfermendes::config::email::EmailConfig;
use fitfermendes::config::jwt::JwtConfig;
use fitfermendes::config::otp::OtpConfig;
use fitfermendes::router::init_router;
use fitfermendes::state::AppState;
use fitfermendes::utils::jwt::create_access_token;
use fitfermendes::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

pub fn generate_unique_email() -> String {
    format!("user-{}@example.com", Uuid::new_v4())
}

pub async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        otp_config: OtpConfig::from_env(),
        email_config: EmailConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

/// Inserts a user with a bcrypt-hashed password and returns its id.
pub async fn create_test_usuario(pool: &PgPool, email: &str, senha: &str) -> i32 {
    let hashed = hash_password(senha).unwrap();

    sqlx::query_scalar(
        "INSERT INTO usuarios (nome, email, senha) VALUES ('Teste', $1, $2) RETURNING id",
    )
    .bind(email)
    .bind(&hashed)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_modalidade(pool: &PgPool, nome: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO modalidades (nome, cor) VALUES ($1, '#336699') RETURNING id")
        .bind(nome)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_aluno(pool: &PgPool, nome: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO alunos (nome, altura, peso) VALUES ($1, 1.70, 70.0) RETURNING id",
    )
    .bind(nome)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Mints a bearer token directly; the login flow itself needs the
/// emailed 2FA code, so protected-route tests sign their own.
pub fn auth_token(usuario_id: i32, email: &str) -> String {
    dotenvy::dotenv().ok();
    create_access_token(usuario_id, "Teste", email, &JwtConfig::from_env()).unwrap()
}
