use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{
    post_data, post_login_email, post_recuperar_senha, post_solicitar_recuperacao, post_two_factor,
};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/loginEmail", post(post_login_email))
        .route("/2fa", post(post_two_factor))
        .route("/solicitarRecuperacao", post(post_solicitar_recuperacao))
        .route("/recuperarSenha", post(post_recuperar_senha))
        .route("/data", post(post_data))
}
