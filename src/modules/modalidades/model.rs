use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A class type offered by the studio, with the display color the
/// calendar uses for its sessions.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Modalidade {
    pub id: i32,
    pub nome: String,
    pub cor: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ModalidadeDto {
    #[validate(length(min = 1, message = "O campo 'nome' é obrigatório"))]
    pub nome: String,
    #[validate(length(min = 1, message = "O campo 'cor' é obrigatório"))]
    pub cor: String,
}
