use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_lista_usuarios, get_usuario, post_usuario, put_usuario};

pub fn init_usuarios_router() -> Router<AppState> {
    Router::new()
        .route("/lista", get(get_lista_usuarios))
        .route("/", post(post_usuario))
        .route("/{id}", get(get_usuario).put(put_usuario))
}
