use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::middleware::auth::AuthUser;
use crate::modules::status_aulas::model::StatusAulaId;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{CreateAulaDto, ListaAulasQuery, UpdateAulaDto};
use super::service::AulaService;

#[utoipa::path(
    get,
    path = "/aula/lista",
    tag = "Aulas",
    security(("bearer_auth" = [])),
    params(ListaAulasQuery),
    responses(
        (status = 200, description = "Lista de aulas, opcionalmente filtrada por período"),
        (status = 401, description = "Não autenticado"),
    )
)]
pub async fn get_lista_aulas(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListaAulasQuery>,
) -> Result<impl IntoResponse, AppError> {
    let aulas = AulaService::lista(&state.db, query.data_inicio, query.data_fim).await?;

    Ok(ApiResponse::ok(aulas, "Consultado com sucesso"))
}

#[utoipa::path(
    get,
    path = "/aula/{id}",
    tag = "Aulas",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Id da aula")),
    responses(
        (status = 200, description = "Aula encontrada"),
        (status = 404, description = "Aula não encontrada"),
    )
)]
pub async fn get_aula(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let aula = AulaService::consultar(&state.db, id).await?;

    Ok(ApiResponse::ok(aula, "Consultado com sucesso"))
}

#[utoipa::path(
    post,
    path = "/aula",
    tag = "Aulas",
    security(("bearer_auth" = [])),
    request_body = CreateAulaDto,
    responses(
        (status = 201, description = "Aula criada com status Agendada por padrão"),
        (status = 400, description = "Dados inválidos ou referência inexistente"),
    )
)]
pub async fn post_aula(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateAulaDto>,
) -> Result<impl IntoResponse, AppError> {
    let aula = AulaService::inserir(&state.db, dto).await?;

    Ok(ApiResponse::created(aula, "Aula cadastrada com sucesso"))
}

#[utoipa::path(
    put,
    path = "/aula/{id}",
    tag = "Aulas",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Id da aula")),
    request_body = UpdateAulaDto,
    responses(
        (status = 200, description = "Aula atualizada com roster reconciliado"),
        (status = 404, description = "Aula não encontrada"),
    )
)]
pub async fn put_aula(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateAulaDto>,
) -> Result<impl IntoResponse, AppError> {
    let aula = AulaService::atualizar(&state.db, id, dto).await?;

    Ok(ApiResponse::ok(aula, "Aula atualizada com sucesso"))
}

#[utoipa::path(
    patch,
    path = "/aula/cancelar/{id}",
    tag = "Aulas",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Id da aula")),
    responses(
        (status = 200, description = "Aula cancelada"),
        (status = 404, description = "Aula não encontrada"),
    )
)]
pub async fn patch_cancelar_aula(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let aula = AulaService::atualizar_status(&state.db, id, StatusAulaId::Cancelada).await?;

    Ok(ApiResponse::ok(aula, "Aula cancelada com sucesso"))
}

#[utoipa::path(
    patch,
    path = "/aula/concluir/{id}",
    tag = "Aulas",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Id da aula")),
    responses(
        (status = 200, description = "Aula concluída"),
        (status = 404, description = "Aula não encontrada"),
    )
)]
pub async fn patch_concluir_aula(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let aula = AulaService::atualizar_status(&state.db, id, StatusAulaId::Concluida).await?;

    Ok(ApiResponse::ok(aula, "Aula concluída com sucesso"))
}
