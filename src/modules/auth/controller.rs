use axum::{extract::State, response::IntoResponse};
use chrono::Utc;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{LoginEmailDto, RecuperarSenhaDto, SolicitarRecuperacaoDto, TwoFactorDto};
use super::service::AuthService;

#[utoipa::path(
    post,
    path = "/usuario/loginEmail",
    tag = "Autenticação",
    request_body = LoginEmailDto,
    responses(
        (status = 200, description = "Credenciais válidas, código 2FA enviado por email"),
        (status = 400, description = "Email ou senha inválidos"),
    )
)]
pub async fn post_login_email(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginEmailDto>,
) -> Result<impl IntoResponse, AppError> {
    let challenge = AuthService::validar_credenciais(&state, &dto.email, &dto.senha).await?;

    Ok(ApiResponse::ok(
        challenge,
        "Código de verificação enviado por email",
    ))
}

#[utoipa::path(
    post,
    path = "/usuario/2fa",
    tag = "Autenticação",
    request_body = TwoFactorDto,
    responses(
        (status = 200, description = "Código válido, token de acesso emitido"),
        (status = 400, description = "Código inválido ou expirado"),
    )
)]
pub async fn post_two_factor(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TwoFactorDto>,
) -> Result<impl IntoResponse, AppError> {
    let login = AuthService::validar_2fa(&state, &dto.verificador, &dto.codigo).await?;

    Ok(ApiResponse::ok(login, "Login realizado com sucesso"))
}

#[utoipa::path(
    post,
    path = "/usuario/solicitarRecuperacao",
    tag = "Autenticação",
    request_body = SolicitarRecuperacaoDto,
    responses(
        (status = 200, description = "Link de recuperação enviado por email"),
        (status = 400, description = "Email inválido"),
    )
)]
pub async fn post_solicitar_recuperacao(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SolicitarRecuperacaoDto>,
) -> Result<impl IntoResponse, AppError> {
    let challenge = AuthService::solicitar_recuperacao_senha(&state, &dto.email).await?;

    Ok(ApiResponse::ok(challenge, "Solicitação enviada com sucesso"))
}

#[utoipa::path(
    post,
    path = "/usuario/recuperarSenha",
    tag = "Autenticação",
    request_body = RecuperarSenhaDto,
    responses(
        (status = 200, description = "Senha redefinida, token de acesso emitido"),
        (status = 400, description = "Código inválido ou expirado"),
    )
)]
pub async fn post_recuperar_senha(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RecuperarSenhaDto>,
) -> Result<impl IntoResponse, AppError> {
    let login = AuthService::validar_recuperacao_senha(&state, &dto.codigo, &dto.nova_senha).await?;

    Ok(ApiResponse::ok(login, "Senha alterada com sucesso"))
}

#[utoipa::path(
    post,
    path = "/usuario/data",
    tag = "Autenticação",
    responses(
        (status = 200, description = "Data atual do servidor"),
    )
)]
pub async fn post_data() -> impl IntoResponse {
    ApiResponse::ok(Utc::now(), "Data consultada com sucesso")
}
