use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Denormalized read shape of a class session: the modality and status
/// names are inlined and the roster reduced to a minimal projection.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Aula {
    pub id: i32,
    pub modalidade_id: i32,
    pub modalidade_nome: String,
    pub observacao: Option<String>,
    pub data: DateTime<Utc>,
    pub status_aula_id: i32,
    pub status_aula_nome: String,
    pub alunos: Vec<AlunoResumo>,
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct AlunoResumo {
    pub id: i32,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAulaDto {
    #[validate(range(min = 1, message = "O campo 'modalidadeId' é obrigatório"))]
    pub modalidade_id: i32,
    pub observacao: Option<String>,
    pub data: Option<DateTime<Utc>>,
    pub status_aula_id: Option<i32>,
    #[serde(default)]
    pub alunos: Vec<i32>,
}

/// Overwrites the session fields; roster maintenance is incremental:
/// ids in `alunos` are added, ids in `excluirAlunos` removed.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAulaDto {
    #[validate(range(min = 1, message = "O campo 'modalidadeId' é obrigatório"))]
    pub modalidade_id: i32,
    pub observacao: Option<String>,
    pub data: Option<DateTime<Utc>>,
    pub status_aula_id: Option<i32>,
    #[serde(default)]
    pub alunos: Vec<i32>,
    #[serde(default)]
    pub excluir_alunos: Vec<i32>,
}

/// Date-range filter for the session listing.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListaAulasQuery {
    pub data_inicio: Option<DateTime<Utc>>,
    pub data_fim: Option<DateTime<Utc>>,
}
