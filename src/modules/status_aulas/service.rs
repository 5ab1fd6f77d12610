use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{StatusAula, StatusAulaDto};

pub struct StatusAulaService;

impl StatusAulaService {
    #[instrument(skip(db))]
    pub async fn lista(db: &PgPool) -> Result<Vec<StatusAula>, AppError> {
        let status =
            sqlx::query_as::<_, StatusAula>("SELECT id, nome FROM status_aulas ORDER BY id")
                .fetch_all(db)
                .await?;

        Ok(status)
    }

    #[instrument(skip(db))]
    pub async fn consultar(db: &PgPool, id: i32) -> Result<StatusAula, AppError> {
        sqlx::query_as::<_, StatusAula>("SELECT id, nome FROM status_aulas WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| {
                AppError::not_found(anyhow::anyhow!("Erro ao consultar status de aula"))
                    .with_message("Status de aula não encontrado")
            })
    }

    #[instrument(skip(db, dto))]
    pub async fn inserir(db: &PgPool, dto: StatusAulaDto) -> Result<StatusAula, AppError> {
        let status = sqlx::query_as::<_, StatusAula>(
            "INSERT INTO status_aulas (nome) VALUES ($1) RETURNING id, nome",
        )
        .bind(&dto.nome)
        .fetch_one(db)
        .await?;

        Ok(status)
    }

    #[instrument(skip(db, dto))]
    pub async fn atualizar(
        db: &PgPool,
        id: i32,
        dto: StatusAulaDto,
    ) -> Result<StatusAula, AppError> {
        sqlx::query_as::<_, StatusAula>(
            "UPDATE status_aulas SET nome = $1 WHERE id = $2 RETURNING id, nome",
        )
        .bind(&dto.nome)
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("Erro ao atualizar status de aula"))
                .with_message("Status de aula não encontrado")
        })
    }
}
