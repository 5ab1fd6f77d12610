use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{CreateUsuarioDto, UpdateUsuarioDto};
use super::service::UsuarioService;

#[utoipa::path(
    get,
    path = "/usuario/lista",
    tag = "Usuários",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Lista de usuários cadastrados"),
        (status = 401, description = "Não autenticado"),
    )
)]
pub async fn get_lista_usuarios(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let usuarios = UsuarioService::lista(&state.db).await?;

    Ok(ApiResponse::ok(usuarios, "Consultado com sucesso"))
}

#[utoipa::path(
    get,
    path = "/usuario/{id}",
    tag = "Usuários",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Id do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado"),
        (status = 404, description = "Usuário não encontrado"),
    )
)]
pub async fn get_usuario(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let usuario = UsuarioService::consultar(&state.db, id).await?;

    Ok(ApiResponse::ok(usuario, "Consultado com sucesso"))
}

#[utoipa::path(
    post,
    path = "/usuario",
    tag = "Usuários",
    security(("bearer_auth" = [])),
    request_body = CreateUsuarioDto,
    responses(
        (status = 201, description = "Usuário criado"),
        (status = 400, description = "Dados inválidos ou email já cadastrado"),
    )
)]
pub async fn post_usuario(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateUsuarioDto>,
) -> Result<impl IntoResponse, AppError> {
    let usuario = UsuarioService::inserir(&state.db, dto).await?;

    Ok(ApiResponse::created(usuario, "Usuário cadastrado com sucesso"))
}

#[utoipa::path(
    put,
    path = "/usuario/{id}",
    tag = "Usuários",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Id do usuário")),
    request_body = UpdateUsuarioDto,
    responses(
        (status = 200, description = "Usuário atualizado"),
        (status = 404, description = "Usuário não encontrado"),
    )
)]
pub async fn put_usuario(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateUsuarioDto>,
) -> Result<impl IntoResponse, AppError> {
    let usuario = UsuarioService::atualizar(&state.db, id, dto).await?;

    Ok(ApiResponse::ok(usuario, "Usuário atualizado com sucesso"))
}
