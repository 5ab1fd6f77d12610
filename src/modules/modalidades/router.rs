use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_lista_modalidades, get_modalidade, post_modalidade, put_modalidade};

pub fn init_modalidades_router() -> Router<AppState> {
    Router::new()
        .route("/lista", get(get_lista_modalidades))
        .route("/", post(post_modalidade))
        .route("/{id}", get(get_modalidade).put(put_modalidade))
}
