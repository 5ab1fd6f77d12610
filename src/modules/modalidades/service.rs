use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{Modalidade, ModalidadeDto};

pub struct ModalidadeService;

impl ModalidadeService {
    #[instrument(skip(db))]
    pub async fn lista(db: &PgPool) -> Result<Vec<Modalidade>, AppError> {
        let modalidades =
            sqlx::query_as::<_, Modalidade>("SELECT id, nome, cor FROM modalidades ORDER BY nome")
                .fetch_all(db)
                .await?;

        Ok(modalidades)
    }

    #[instrument(skip(db))]
    pub async fn consultar(db: &PgPool, id: i32) -> Result<Modalidade, AppError> {
        sqlx::query_as::<_, Modalidade>("SELECT id, nome, cor FROM modalidades WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| {
                AppError::not_found(anyhow::anyhow!("Erro ao consultar modalidade"))
                    .with_message("Modalidade não encontrada")
            })
    }

    #[instrument(skip(db, dto))]
    pub async fn inserir(db: &PgPool, dto: ModalidadeDto) -> Result<Modalidade, AppError> {
        let modalidade = sqlx::query_as::<_, Modalidade>(
            "INSERT INTO modalidades (nome, cor) VALUES ($1, $2) RETURNING id, nome, cor",
        )
        .bind(&dto.nome)
        .bind(&dto.cor)
        .fetch_one(db)
        .await?;

        Ok(modalidade)
    }

    #[instrument(skip(db, dto))]
    pub async fn atualizar(
        db: &PgPool,
        id: i32,
        dto: ModalidadeDto,
    ) -> Result<Modalidade, AppError> {
        sqlx::query_as::<_, Modalidade>(
            "UPDATE modalidades SET nome = $1, cor = $2 WHERE id = $3 RETURNING id, nome, cor",
        )
        .bind(&dto.nome)
        .bind(&dto.cor)
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("Erro ao atualizar modalidade"))
                .with_message("Modalidade não encontrada")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn dto(nome: &str, cor: &str) -> ModalidadeDto {
        ModalidadeDto {
            nome: nome.to_string(),
            cor: cor.to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_inserir_e_consultar(pool: PgPool) {
        let created = ModalidadeService::inserir(&pool, dto("Pilates", "#FF5733"))
            .await
            .unwrap();

        let fetched = ModalidadeService::consultar(&pool, created.id)
            .await
            .unwrap();

        assert_eq!(fetched.nome, "Pilates");
        assert_eq!(fetched.cor, "#FF5733");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_lista_ordenada_por_nome(pool: PgPool) {
        ModalidadeService::inserir(&pool, dto("Yoga", "#00FF00"))
            .await
            .unwrap();
        ModalidadeService::inserir(&pool, dto("Crossfit", "#0000FF"))
            .await
            .unwrap();

        let modalidades = ModalidadeService::lista(&pool).await.unwrap();

        assert_eq!(modalidades.len(), 2);
        assert_eq!(modalidades[0].nome, "Crossfit");
        assert_eq!(modalidades[1].nome, "Yoga");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_atualizar(pool: PgPool) {
        let created = ModalidadeService::inserir(&pool, dto("Pilates", "#FF5733"))
            .await
            .unwrap();

        let updated = ModalidadeService::atualizar(&pool, created.id, dto("Pilates Solo", "#AA0000"))
            .await
            .unwrap();

        assert_eq!(updated.nome, "Pilates Solo");
        assert_eq!(updated.cor, "#AA0000");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_consultar_inexistente(pool: PgPool) {
        let err = ModalidadeService::consultar(&pool, 9999).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
