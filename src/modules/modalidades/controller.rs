use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::ModalidadeDto;
use super::service::ModalidadeService;

#[utoipa::path(
    get,
    path = "/modalidade/lista",
    tag = "Modalidades",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Lista de modalidades"),
        (status = 401, description = "Não autenticado"),
    )
)]
pub async fn get_lista_modalidades(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let modalidades = ModalidadeService::lista(&state.db).await?;

    Ok(ApiResponse::ok(modalidades, "Consultado com sucesso"))
}

#[utoipa::path(
    get,
    path = "/modalidade/{id}",
    tag = "Modalidades",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Id da modalidade")),
    responses(
        (status = 200, description = "Modalidade encontrada"),
        (status = 404, description = "Modalidade não encontrada"),
    )
)]
pub async fn get_modalidade(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let modalidade = ModalidadeService::consultar(&state.db, id).await?;

    Ok(ApiResponse::ok(modalidade, "Consultado com sucesso"))
}

#[utoipa::path(
    post,
    path = "/modalidade",
    tag = "Modalidades",
    security(("bearer_auth" = [])),
    request_body = ModalidadeDto,
    responses(
        (status = 201, description = "Modalidade criada"),
        (status = 400, description = "Dados inválidos"),
    )
)]
pub async fn post_modalidade(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<ModalidadeDto>,
) -> Result<impl IntoResponse, AppError> {
    let modalidade = ModalidadeService::inserir(&state.db, dto).await?;

    Ok(ApiResponse::created(
        modalidade,
        "Modalidade cadastrada com sucesso",
    ))
}

#[utoipa::path(
    put,
    path = "/modalidade/{id}",
    tag = "Modalidades",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Id da modalidade")),
    request_body = ModalidadeDto,
    responses(
        (status = 200, description = "Modalidade atualizada"),
        (status = 404, description = "Modalidade não encontrada"),
    )
)]
pub async fn put_modalidade(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<ModalidadeDto>,
) -> Result<impl IntoResponse, AppError> {
    let modalidade = ModalidadeService::atualizar(&state.db, id, dto).await?;

    Ok(ApiResponse::ok(
        modalidade,
        "Modalidade atualizada com sucesso",
    ))
}
