use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{AlunoDto, ListaAlunosQuery};
use super::service::AlunoService;

#[utoipa::path(
    get,
    path = "/aluno/lista",
    tag = "Alunos",
    security(("bearer_auth" = [])),
    params(ListaAlunosQuery),
    responses(
        (status = 200, description = "Lista de alunos, opcionalmente filtrada por nome"),
        (status = 401, description = "Não autenticado"),
    )
)]
pub async fn get_lista_alunos(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListaAlunosQuery>,
) -> Result<impl IntoResponse, AppError> {
    let alunos = AlunoService::lista(&state.db, query.nome.as_deref()).await?;

    Ok(ApiResponse::ok(alunos, "Consultado com sucesso"))
}

#[utoipa::path(
    get,
    path = "/aluno/{id}",
    tag = "Alunos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Id do aluno")),
    responses(
        (status = 200, description = "Aluno encontrado"),
        (status = 404, description = "Aluno não encontrado"),
    )
)]
pub async fn get_aluno(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let aluno = AlunoService::consultar(&state.db, id).await?;

    Ok(ApiResponse::ok(aluno, "Consultado com sucesso"))
}

#[utoipa::path(
    post,
    path = "/aluno",
    tag = "Alunos",
    security(("bearer_auth" = [])),
    request_body = AlunoDto,
    responses(
        (status = 201, description = "Aluno criado"),
        (status = 400, description = "Dados inválidos"),
    )
)]
pub async fn post_aluno(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<AlunoDto>,
) -> Result<impl IntoResponse, AppError> {
    let aluno = AlunoService::inserir(&state.db, dto).await?;

    Ok(ApiResponse::created(aluno, "Aluno cadastrado com sucesso"))
}

#[utoipa::path(
    put,
    path = "/aluno/{id}",
    tag = "Alunos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Id do aluno")),
    request_body = AlunoDto,
    responses(
        (status = 200, description = "Aluno atualizado"),
        (status = 404, description = "Aluno não encontrado"),
    )
)]
pub async fn put_aluno(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<AlunoDto>,
) -> Result<impl IntoResponse, AppError> {
    let aluno = AlunoService::atualizar(&state.db, id, dto).await?;

    Ok(ApiResponse::ok(aluno, "Aluno atualizado com sucesso"))
}
