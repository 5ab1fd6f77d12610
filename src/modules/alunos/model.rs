use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A student enrolled at the studio. Besides contact data the record
/// carries the measurements and medical notes the instructors work from.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Aluno {
    pub id: i32,
    pub nome: String,
    pub altura: f64,
    pub peso: f64,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub cpf: Option<String>,
    pub data_nascimento: Option<DateTime<Utc>>,
    pub objetivo: Option<String>,
    pub indicacao_medica: Option<String>,
    pub lesao: Option<String>,
    pub nome_imagem: Option<String>,
    pub base64_imagem: Option<String>,
    pub ativo: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlunoDto {
    #[validate(length(min = 1, message = "O campo 'nome' é obrigatório"))]
    pub nome: String,
    #[validate(range(min = 0.0, message = "Altura inválida"))]
    pub altura: f64,
    #[validate(range(min = 0.0, message = "Peso inválido"))]
    pub peso: f64,
    #[validate(email(message = "Email inválido"))]
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub cpf: Option<String>,
    pub data_nascimento: Option<DateTime<Utc>>,
    pub objetivo: Option<String>,
    pub indicacao_medica: Option<String>,
    pub lesao: Option<String>,
    pub nome_imagem: Option<String>,
    pub base64_imagem: Option<String>,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

fn default_ativo() -> bool {
    true
}

/// Query-string filter for the student listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListaAlunosQuery {
    pub nome: Option<String>,
}
