use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use tracing::{error, instrument};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::email::EmailService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::otp::generate_code;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginResponse, TwoFactorChallenge};
use crate::modules::usuarios::model::Usuario;

/// Lifetime of a 2FA code and of a password-recovery link.
const CHALLENGE_TTL_MINUTES: i64 = 5;

#[derive(sqlx::FromRow)]
struct UsuarioComSenha {
    id: i32,
    nome: String,
    email: String,
    senha: String,
}

#[derive(sqlx::FromRow)]
struct Verificacao {
    usuario_id: i32,
    codigo: Option<String>,
    expira_em: DateTime<Utc>,
}

pub struct AuthService;

impl AuthService {
    /// First login step. Checks the credentials, issues a fresh 2FA
    /// challenge and emails the code. The caller only ever learns the
    /// challenge handle, never the code itself.
    #[instrument(skip(state, senha))]
    pub async fn validar_credenciais(
        state: &AppState,
        email: &str,
        senha: &str,
    ) -> Result<TwoFactorChallenge, AppError> {
        let usuario = sqlx::query_as::<_, UsuarioComSenha>(
            "SELECT id, nome, email, senha FROM usuarios WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| {
            AppError::bad_request(anyhow::anyhow!("Falha na autenticação"))
                .with_message("Email ou senha inválidos")
        })?;

        if !verify_password(senha, &usuario.senha)? {
            return Err(
                AppError::bad_request(anyhow::anyhow!("Falha na autenticação"))
                    .with_message("Email ou senha inválidos"),
            );
        }

        let codigo = generate_code(&state.otp_config)?;
        let codigo_hash = hash_password(&codigo)?;
        let verificador = Uuid::new_v4().to_string();
        let expira_em = Utc::now() + Duration::minutes(CHALLENGE_TTL_MINUTES);

        sqlx::query(
            "INSERT INTO usuario_verificacoes (usuario_id, codigo, verificador, expira_em)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (usuario_id)
             DO UPDATE SET codigo = $2, verificador = $3, expira_em = $4",
        )
        .bind(usuario.id)
        .bind(&codigo_hash)
        .bind(&verificador)
        .bind(expira_em)
        .execute(&state.db)
        .await?;

        // Fire and forget: a slow SMTP server must not hold up the response.
        let email_service = EmailService::new(state.email_config.clone());
        let to_email = usuario.email.clone();
        tokio::spawn(async move {
            if let Err(e) = email_service
                .send_two_factor_code(&to_email, &codigo, expira_em)
                .await
            {
                error!(error = %e.error, "Failed to send 2FA email");
            }
        });

        Ok(TwoFactorChallenge { verificador })
    }

    /// Second login step. Redeems the challenge and mints the access
    /// token. The challenge row is deleted on success so a code never
    /// authenticates twice.
    #[instrument(skip(state, codigo))]
    pub async fn validar_2fa(
        state: &AppState,
        verificador: &str,
        codigo: &str,
    ) -> Result<LoginResponse, AppError> {
        let verificacao = Self::consultar_verificacao(&state.db, verificador).await?;

        let codigo_hash = verificacao.codigo.ok_or_else(|| {
            AppError::bad_request(anyhow::anyhow!("Falha na autenticação"))
                .with_message("Código inválido")
        })?;

        if !verify_password(codigo, &codigo_hash)? {
            return Err(
                AppError::bad_request(anyhow::anyhow!("Falha na autenticação"))
                    .with_message("Código inválido"),
            );
        }

        let usuario = sqlx::query_as::<_, Usuario>(
            "SELECT id, nome, email FROM usuarios WHERE id = $1",
        )
        .bind(verificacao.usuario_id)
        .fetch_one(&state.db)
        .await?;

        sqlx::query("DELETE FROM usuario_verificacoes WHERE usuario_id = $1")
            .bind(usuario.id)
            .execute(&state.db)
            .await?;

        let token = create_access_token(usuario.id, &usuario.nome, &usuario.email, &state.jwt_config)?;

        Ok(LoginResponse { token, usuario })
    }

    /// Issues a password-recovery challenge and emails the link. The
    /// code column is cleared so the verificador alone redeems it.
    #[instrument(skip(state))]
    pub async fn solicitar_recuperacao_senha(
        state: &AppState,
        email: &str,
    ) -> Result<TwoFactorChallenge, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>(
            "SELECT id, nome, email FROM usuarios WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| {
            AppError::bad_request(anyhow::anyhow!("Email inválido"))
                .with_message("Não foi possível localizar o email informado")
        })?;

        let verificador = Uuid::new_v4().to_string();
        let expira_em = Utc::now() + Duration::minutes(CHALLENGE_TTL_MINUTES);

        sqlx::query(
            "INSERT INTO usuario_verificacoes (usuario_id, codigo, verificador, expira_em)
             VALUES ($1, NULL, $2, $3)
             ON CONFLICT (usuario_id)
             DO UPDATE SET codigo = NULL, verificador = $2, expira_em = $3",
        )
        .bind(usuario.id)
        .bind(&verificador)
        .bind(expira_em)
        .execute(&state.db)
        .await?;

        let email_service = EmailService::new(state.email_config.clone());
        let to_email = usuario.email.clone();
        let link_verificador = verificador.clone();
        tokio::spawn(async move {
            if let Err(e) = email_service
                .send_password_recovery(&to_email, &link_verificador, expira_em)
                .await
            {
                error!(error = %e.error, "Failed to send recovery email");
            }
        });

        Ok(TwoFactorChallenge { verificador })
    }

    /// Redeems a recovery challenge, overwrites the user's password and
    /// signs the caller straight in.
    #[instrument(skip(state, nova_senha))]
    pub async fn validar_recuperacao_senha(
        state: &AppState,
        verificador: &str,
        nova_senha: &str,
    ) -> Result<LoginResponse, AppError> {
        let verificacao = Self::consultar_verificacao(&state.db, verificador).await?;

        let senha_hash = hash_password(nova_senha)?;

        let usuario = sqlx::query_as::<_, Usuario>(
            "UPDATE usuarios SET senha = $1 WHERE id = $2 RETURNING id, nome, email",
        )
        .bind(&senha_hash)
        .bind(verificacao.usuario_id)
        .fetch_one(&state.db)
        .await?;

        sqlx::query("DELETE FROM usuario_verificacoes WHERE usuario_id = $1")
            .bind(verificacao.usuario_id)
            .execute(&state.db)
            .await?;

        let token = create_access_token(usuario.id, &usuario.nome, &usuario.email, &state.jwt_config)?;

        Ok(LoginResponse { token, usuario })
    }

    async fn consultar_verificacao(
        db: &PgPool,
        verificador: &str,
    ) -> Result<Verificacao, AppError> {
        let verificacao = sqlx::query_as::<_, Verificacao>(
            "SELECT usuario_id, codigo, expira_em
             FROM usuario_verificacoes
             WHERE verificador = $1",
        )
        .bind(verificador)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::bad_request(anyhow::anyhow!("Falha na autenticação"))
                .with_message("Código inválido")
        })?;

        if verificacao.expira_em < Utc::now() {
            return Err(
                AppError::bad_request(anyhow::anyhow!("Falha na autenticação"))
                    .with_message("Código expirado"),
            );
        }

        Ok(verificacao)
    }
}
