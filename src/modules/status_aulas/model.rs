use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Lifecycle state of a class session. The migration seeds the four
/// statuses the code references by ordinal; extra ones can be added
/// through the API.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StatusAula {
    pub id: i32,
    pub nome: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StatusAulaDto {
    #[validate(length(min = 1, message = "O campo 'nome' é obrigatório"))]
    pub nome: String,
}

/// Seeded status ids, used when transitioning sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum StatusAulaId {
    Agendada = 1,
    Confirmada = 2,
    Cancelada = 3,
    Concluida = 4,
}

impl StatusAulaId {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
