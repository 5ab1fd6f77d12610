use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{Aluno, AlunoDto};

const ALUNO_COLUMNS: &str = "id, nome, altura, peso, email, telefone, cpf, data_nascimento, \
     objetivo, indicacao_medica, lesao, nome_imagem, base64_imagem, ativo";

pub struct AlunoService;

impl AlunoService {
    /// Lists students, optionally filtered by a case-insensitive
    /// substring of the name.
    #[instrument(skip(db))]
    pub async fn lista(db: &PgPool, nome: Option<&str>) -> Result<Vec<Aluno>, AppError> {
        let query = format!(
            "SELECT {ALUNO_COLUMNS} FROM alunos
             WHERE ($1::text IS NULL OR nome ILIKE '%' || $1 || '%')
             ORDER BY nome"
        );

        let alunos = sqlx::query_as::<_, Aluno>(&query)
            .bind(nome)
            .fetch_all(db)
            .await?;

        Ok(alunos)
    }

    #[instrument(skip(db))]
    pub async fn consultar(db: &PgPool, id: i32) -> Result<Aluno, AppError> {
        let query = format!("SELECT {ALUNO_COLUMNS} FROM alunos WHERE id = $1");

        sqlx::query_as::<_, Aluno>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| {
                AppError::not_found(anyhow::anyhow!("Erro ao consultar aluno"))
                    .with_message("Aluno não encontrado")
            })
    }

    #[instrument(skip(db, dto))]
    pub async fn inserir(db: &PgPool, dto: AlunoDto) -> Result<Aluno, AppError> {
        let query = format!(
            "INSERT INTO alunos
                 (nome, altura, peso, email, telefone, cpf, data_nascimento,
                  objetivo, indicacao_medica, lesao, nome_imagem, base64_imagem, ativo)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {ALUNO_COLUMNS}"
        );

        let aluno = Self::bind_dto(sqlx::query_as::<_, Aluno>(&query), &dto)
            .fetch_one(db)
            .await?;

        Ok(aluno)
    }

    #[instrument(skip(db, dto))]
    pub async fn atualizar(db: &PgPool, id: i32, dto: AlunoDto) -> Result<Aluno, AppError> {
        let query = format!(
            "UPDATE alunos
             SET nome = $1, altura = $2, peso = $3, email = $4, telefone = $5, cpf = $6,
                 data_nascimento = $7, objetivo = $8, indicacao_medica = $9, lesao = $10,
                 nome_imagem = $11, base64_imagem = $12, ativo = $13
             WHERE id = $14
             RETURNING {ALUNO_COLUMNS}"
        );

        Self::bind_dto(sqlx::query_as::<_, Aluno>(&query), &dto)
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| {
                AppError::not_found(anyhow::anyhow!("Erro ao atualizar aluno"))
                    .with_message("Aluno não encontrado")
            })
    }

    fn bind_dto<'q>(
        query: sqlx::query::QueryAs<'q, sqlx::Postgres, Aluno, sqlx::postgres::PgArguments>,
        dto: &'q AlunoDto,
    ) -> sqlx::query::QueryAs<'q, sqlx::Postgres, Aluno, sqlx::postgres::PgArguments> {
        query
            .bind(&dto.nome)
            .bind(dto.altura)
            .bind(dto.peso)
            .bind(&dto.email)
            .bind(&dto.telefone)
            .bind(&dto.cpf)
            .bind(dto.data_nascimento)
            .bind(&dto.objetivo)
            .bind(&dto.indicacao_medica)
            .bind(&dto.lesao)
            .bind(&dto.nome_imagem)
            .bind(&dto.base64_imagem)
            .bind(dto.ativo)
    }
}
