use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    get_lista_status_aulas, get_status_aula, post_status_aula, put_status_aula,
};

pub fn init_status_aulas_router() -> Router<AppState> {
    Router::new()
        .route("/lista", get(get_lista_status_aulas))
        .route("/", post(post_status_aula))
        .route("/{id}", get(get_status_aula).put(put_status_aula))
}
