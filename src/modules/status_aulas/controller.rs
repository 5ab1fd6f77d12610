use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::StatusAulaDto;
use super::service::StatusAulaService;

#[utoipa::path(
    get,
    path = "/statusAula/lista",
    tag = "Status de Aula",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Lista de status de aula"),
        (status = 401, description = "Não autenticado"),
    )
)]
pub async fn get_lista_status_aulas(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusAulaService::lista(&state.db).await?;

    Ok(ApiResponse::ok(status, "Consultado com sucesso"))
}

#[utoipa::path(
    get,
    path = "/statusAula/{id}",
    tag = "Status de Aula",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Id do status de aula")),
    responses(
        (status = 200, description = "Status de aula encontrado"),
        (status = 404, description = "Status de aula não encontrado"),
    )
)]
pub async fn get_status_aula(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusAulaService::consultar(&state.db, id).await?;

    Ok(ApiResponse::ok(status, "Consultado com sucesso"))
}

#[utoipa::path(
    post,
    path = "/statusAula",
    tag = "Status de Aula",
    security(("bearer_auth" = [])),
    request_body = StatusAulaDto,
    responses(
        (status = 201, description = "Status de aula criado"),
        (status = 400, description = "Dados inválidos"),
    )
)]
pub async fn post_status_aula(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<StatusAulaDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusAulaService::inserir(&state.db, dto).await?;

    Ok(ApiResponse::created(
        status,
        "Status de aula cadastrado com sucesso",
    ))
}

#[utoipa::path(
    put,
    path = "/statusAula/{id}",
    tag = "Status de Aula",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Id do status de aula")),
    request_body = StatusAulaDto,
    responses(
        (status = 200, description = "Status de aula atualizado"),
        (status = 404, description = "Status de aula não encontrado"),
    )
)]
pub async fn put_status_aula(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<StatusAulaDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusAulaService::atualizar(&state.db, id, dto).await?;

    Ok(ApiResponse::ok(
        status,
        "Status de aula atualizado com sucesso",
    ))
}
