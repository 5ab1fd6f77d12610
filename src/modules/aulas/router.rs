use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    get_aula, get_lista_aulas, patch_cancelar_aula, patch_concluir_aula, post_aula, put_aula,
};

pub fn init_aulas_router() -> Router<AppState> {
    Router::new()
        .route("/lista", get(get_lista_aulas))
        .route("/", post(post_aula))
        .route("/{id}", get(get_aula).put(put_aula))
        .route("/cancelar/{id}", patch(patch_cancelar_aula))
        .route("/concluir/{id}", patch(patch_concluir_aula))
}
