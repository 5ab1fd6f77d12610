use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_aluno, get_lista_alunos, post_aluno, put_aluno};

pub fn init_alunos_router() -> Router<AppState> {
    Router::new()
        .route("/lista", get(get_lista_alunos))
        .route("/", post(post_aluno))
        .route("/{id}", get(get_aluno).put(put_aluno))
}
