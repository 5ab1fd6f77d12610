use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Public shape of a user. `senha` never leaves the service layer.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Usuario {
    pub id: i32,
    pub nome: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUsuarioDto {
    #[validate(length(min = 1, message = "O campo 'nome' é obrigatório"))]
    pub nome: String,
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres"))]
    pub senha: String,
}

/// Full-field overwrite; `senha` is only replaced when provided.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUsuarioDto {
    #[validate(length(min = 1, message = "O campo 'nome' é obrigatório"))]
    pub nome: String,
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres"))]
    pub senha: Option<String>,
}
