use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

use super::model::{CreateUsuarioDto, UpdateUsuarioDto, Usuario};

pub struct UsuarioService;

impl UsuarioService {
    #[instrument(skip(db))]
    pub async fn lista(db: &PgPool) -> Result<Vec<Usuario>, AppError> {
        let usuarios =
            sqlx::query_as::<_, Usuario>("SELECT id, nome, email FROM usuarios ORDER BY id")
                .fetch_all(db)
                .await?;

        Ok(usuarios)
    }

    #[instrument(skip(db))]
    pub async fn consultar(db: &PgPool, id: i32) -> Result<Usuario, AppError> {
        sqlx::query_as::<_, Usuario>("SELECT id, nome, email FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| {
                AppError::not_found(anyhow::anyhow!("Erro ao consultar usuário"))
                    .with_message("Usuário não encontrado")
            })
    }

    #[instrument(skip(db, dto))]
    pub async fn inserir(db: &PgPool, dto: CreateUsuarioDto) -> Result<Usuario, AppError> {
        let senha_hash = hash_password(&dto.senha)?;

        let usuario = sqlx::query_as::<_, Usuario>(
            "INSERT INTO usuarios (nome, email, senha)
             VALUES ($1, $2, $3)
             RETURNING id, nome, email",
        )
        .bind(&dto.nome)
        .bind(&dto.email)
        .bind(&senha_hash)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!("Erro ao inserir usuário"))
                    .with_message("Email já cadastrado");
            }
            AppError::from(e)
        })?;

        Ok(usuario)
    }

    #[instrument(skip(db, dto))]
    pub async fn atualizar(
        db: &PgPool,
        id: i32,
        dto: UpdateUsuarioDto,
    ) -> Result<Usuario, AppError> {
        let senha_hash = dto.senha.as_deref().map(hash_password).transpose()?;

        sqlx::query_as::<_, Usuario>(
            "UPDATE usuarios
             SET nome = $1, email = $2, senha = COALESCE($3, senha)
             WHERE id = $4
             RETURNING id, nome, email",
        )
        .bind(&dto.nome)
        .bind(&dto.email)
        .bind(&senha_hash)
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("Erro ao atualizar usuário"))
                .with_message("Usuário não encontrado")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::password::verify_password;
    use axum::http::StatusCode;

    fn create_dto(email: &str) -> CreateUsuarioDto {
        CreateUsuarioDto {
            nome: "Maria Silva".to_string(),
            email: email.to_string(),
            senha: "senhaSegura123".to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_inserir_e_consultar(pool: PgPool) {
        let created = UsuarioService::inserir(&pool, create_dto("maria@example.com"))
            .await
            .unwrap();

        assert_eq!(created.nome, "Maria Silva");

        let fetched = UsuarioService::consultar(&pool, created.id).await.unwrap();
        assert_eq!(fetched.email, "maria@example.com");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_inserir_armazena_hash_da_senha(pool: PgPool) {
        let created = UsuarioService::inserir(&pool, create_dto("hash@example.com"))
            .await
            .unwrap();

        let senha: String = sqlx::query_scalar("SELECT senha FROM usuarios WHERE id = $1")
            .bind(created.id)
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_ne!(senha, "senhaSegura123");
        assert!(verify_password("senhaSegura123", &senha).unwrap());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_inserir_email_duplicado(pool: PgPool) {
        UsuarioService::inserir(&pool, create_dto("dup@example.com"))
            .await
            .unwrap();

        let err = UsuarioService::inserir(&pool, create_dto("dup@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_atualizar_sem_senha_preserva_hash(pool: PgPool) {
        let created = UsuarioService::inserir(&pool, create_dto("upd@example.com"))
            .await
            .unwrap();

        let updated = UsuarioService::atualizar(
            &pool,
            created.id,
            UpdateUsuarioDto {
                nome: "Maria Souza".to_string(),
                email: "upd@example.com".to_string(),
                senha: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.nome, "Maria Souza");

        let senha: String = sqlx::query_scalar("SELECT senha FROM usuarios WHERE id = $1")
            .bind(created.id)
            .fetch_one(&pool)
            .await
            .unwrap();

        assert!(verify_password("senhaSegura123", &senha).unwrap());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_atualizar_inexistente(pool: PgPool) {
        let err = UsuarioService::atualizar(
            &pool,
            9999,
            UpdateUsuarioDto {
                nome: "Ninguém".to_string(),
                email: "ninguem@example.com".to_string(),
                senha: None,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_lista_vazia(pool: PgPool) {
        let usuarios = UsuarioService::lista(&pool).await.unwrap();
        assert!(usuarios.is_empty());
    }
}
