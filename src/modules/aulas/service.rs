use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::status_aulas::model::StatusAulaId;
use crate::utils::errors::AppError;

use super::model::{AlunoResumo, Aula, CreateAulaDto, UpdateAulaDto};

const AULA_SELECT: &str = "SELECT a.id, a.modalidade_id, m.nome AS modalidade_nome, \
     a.observacao, a.data, a.status_aula_id, s.nome AS status_aula_nome \
     FROM aulas a \
     JOIN modalidades m ON m.id = a.modalidade_id \
     JOIN status_aulas s ON s.id = a.status_aula_id";

#[derive(sqlx::FromRow)]
struct AulaRow {
    id: i32,
    modalidade_id: i32,
    modalidade_nome: String,
    observacao: Option<String>,
    data: DateTime<Utc>,
    status_aula_id: i32,
    status_aula_nome: String,
}

impl AulaRow {
    fn into_aula(self, alunos: Vec<AlunoResumo>) -> Aula {
        Aula {
            id: self.id,
            modalidade_id: self.modalidade_id,
            modalidade_nome: self.modalidade_nome,
            observacao: self.observacao,
            data: self.data,
            status_aula_id: self.status_aula_id,
            status_aula_nome: self.status_aula_nome,
            alunos,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RosterRow {
    aula_id: i32,
    id: i32,
    nome: String,
    email: Option<String>,
    telefone: Option<String>,
}

pub struct AulaService;

impl AulaService {
    /// Lists sessions, optionally narrowed to a date range, each with
    /// its roster attached.
    #[instrument(skip(db))]
    pub async fn lista(
        db: &PgPool,
        data_inicio: Option<DateTime<Utc>>,
        data_fim: Option<DateTime<Utc>>,
    ) -> Result<Vec<Aula>, AppError> {
        let query = format!(
            "{AULA_SELECT}
             WHERE ($1::timestamptz IS NULL OR a.data >= $1)
               AND ($2::timestamptz IS NULL OR a.data <= $2)
             ORDER BY a.data"
        );

        let rows = sqlx::query_as::<_, AulaRow>(&query)
            .bind(data_inicio)
            .bind(data_fim)
            .fetch_all(db)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        let mut rosters = Self::consultar_rosters(db, &ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let alunos = rosters.remove(&row.id).unwrap_or_default();
                row.into_aula(alunos)
            })
            .collect())
    }

    #[instrument(skip(db))]
    pub async fn consultar(db: &PgPool, id: i32) -> Result<Aula, AppError> {
        let query = format!("{AULA_SELECT} WHERE a.id = $1");

        let row = sqlx::query_as::<_, AulaRow>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| {
                AppError::not_found(anyhow::anyhow!("Erro ao consultar aula"))
                    .with_message("Aula não encontrada")
            })?;

        let mut rosters = Self::consultar_rosters(db, &[id]).await?;
        let alunos = rosters.remove(&id).unwrap_or_default();

        Ok(row.into_aula(alunos))
    }

    /// Creates a session. Status defaults to Agendada and the date to
    /// now when unspecified; the roster comes from `alunos`.
    #[instrument(skip(db, dto))]
    pub async fn inserir(db: &PgPool, dto: CreateAulaDto) -> Result<Aula, AppError> {
        let mut tx = db.begin().await?;

        let id: i32 = sqlx::query_scalar(
            "INSERT INTO aulas (modalidade_id, observacao, data, status_aula_id)
             VALUES ($1, $2, COALESCE($3, NOW()), COALESCE($4, 1))
             RETURNING id",
        )
        .bind(dto.modalidade_id)
        .bind(&dto.observacao)
        .bind(dto.data)
        .bind(dto.status_aula_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(Self::map_fk_violation)?;

        Self::adicionar_alunos(&mut tx, id, &dto.alunos).await?;

        tx.commit().await?;

        Self::consultar(db, id).await
    }

    /// Overwrites the session fields, then reconciles the roster:
    /// `alunos` not yet present are added, `excluir_alunos` removed.
    #[instrument(skip(db, dto))]
    pub async fn atualizar(db: &PgPool, id: i32, dto: UpdateAulaDto) -> Result<Aula, AppError> {
        let mut tx = db.begin().await?;

        let updated = sqlx::query(
            "UPDATE aulas
             SET modalidade_id = $1, observacao = $2,
                 data = COALESCE($3, data),
                 status_aula_id = COALESCE($4, status_aula_id)
             WHERE id = $5",
        )
        .bind(dto.modalidade_id)
        .bind(&dto.observacao)
        .bind(dto.data)
        .bind(dto.status_aula_id)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(Self::map_fk_violation)?;

        if updated.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Erro ao atualizar aula"))
                .with_message("Aula não encontrada"));
        }

        if !dto.excluir_alunos.is_empty() {
            sqlx::query("DELETE FROM aluno_aulas WHERE aula_id = $1 AND aluno_id = ANY($2)")
                .bind(id)
                .bind(&dto.excluir_alunos)
                .execute(&mut *tx)
                .await?;
        }

        Self::adicionar_alunos(&mut tx, id, &dto.alunos).await?;

        tx.commit().await?;

        Self::consultar(db, id).await
    }

    /// Direct status overwrite, used by the cancel and complete actions.
    #[instrument(skip(db))]
    pub async fn atualizar_status(
        db: &PgPool,
        id: i32,
        status: StatusAulaId,
    ) -> Result<Aula, AppError> {
        let updated = sqlx::query("UPDATE aulas SET status_aula_id = $1 WHERE id = $2")
            .bind(status.as_i32())
            .bind(id)
            .execute(db)
            .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Erro ao atualizar aula"))
                .with_message("Aula não encontrada"));
        }

        Self::consultar(db, id).await
    }

    async fn adicionar_alunos(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        aula_id: i32,
        alunos: &[i32],
    ) -> Result<(), AppError> {
        if alunos.is_empty() {
            return Ok(());
        }

        sqlx::query(
            "INSERT INTO aluno_aulas (aula_id, aluno_id)
             SELECT $1, UNNEST($2::int4[])
             ON CONFLICT DO NOTHING",
        )
        .bind(aula_id)
        .bind(alunos)
        .execute(&mut **tx)
        .await
        .map_err(Self::map_fk_violation)?;

        Ok(())
    }

    async fn consultar_rosters(
        db: &PgPool,
        aula_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<AlunoResumo>>, AppError> {
        if aula_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, RosterRow>(
            "SELECT aa.aula_id, al.id, al.nome, al.email, al.telefone
             FROM aluno_aulas aa
             JOIN alunos al ON al.id = aa.aluno_id
             WHERE aa.aula_id = ANY($1)
             ORDER BY al.nome",
        )
        .bind(aula_ids)
        .fetch_all(db)
        .await?;

        let mut rosters: HashMap<i32, Vec<AlunoResumo>> = HashMap::new();
        for row in rows {
            rosters.entry(row.aula_id).or_default().push(AlunoResumo {
                id: row.id,
                nome: row.nome,
                email: row.email,
                telefone: row.telefone,
            });
        }

        Ok(rosters)
    }

    fn map_fk_violation(e: sqlx::Error) -> AppError {
        if let sqlx::Error::Database(db_err) = &e
            && db_err.is_foreign_key_violation()
        {
            return AppError::bad_request(anyhow::anyhow!("Erro ao gravar aula"))
                .with_message("Modalidade, status ou aluno inexistente");
        }
        AppError::from(e)
    }
}
