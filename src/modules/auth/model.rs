use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::usuarios::model::Usuario;

/// JWT payload. `sub` carries the user id as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub nome: String,
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginEmailDto {
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "O campo 'senha' é obrigatório"))]
    pub senha: String,
}

/// Second step of the login: the challenge handle plus the emailed code.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TwoFactorDto {
    #[validate(length(min = 1, message = "O campo 'verificador' é obrigatório"))]
    pub verificador: String,
    #[validate(length(equal = 6, message = "O código deve ter 6 dígitos"))]
    pub codigo: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SolicitarRecuperacaoDto {
    #[validate(email(message = "Email inválido"))]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecuperarSenhaDto {
    #[validate(length(min = 1, message = "O campo 'codigo' é obrigatório"))]
    pub codigo: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres"))]
    pub nova_senha: String,
}

/// Returned by the first login step; the client must echo the
/// `verificador` back together with the emailed code.
#[derive(Debug, Serialize, ToSchema)]
pub struct TwoFactorChallenge {
    pub verificador: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub usuario: Usuario,
}
