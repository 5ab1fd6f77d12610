use chrono::{DateTime, Utc};
use lettre::message::{MultiPart, SinglePart, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{info, instrument};

use crate::config::email::EmailConfig;
use crate::utils::errors::AppError;

pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Email the 2FA code issued by `validar_credenciais`.
    #[instrument(skip(self, codigo))]
    pub async fn send_two_factor_code(
        &self,
        to_email: &str,
        codigo: &str,
        expira_em: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let expira_formatado = expira_em.format("%d/%m/%Y %H:%M").to_string();

        let html_body = self.two_factor_template(codigo, &expira_formatado);
        let text_body = format!(
            "Olá,\n\n\
             Use o código abaixo para acessar sua conta com segurança:\n\n\
             {}\n\n\
             Este código expira em {}. Se você não solicitou este código, \
             ignore este e-mail.\n\n\
             Fit Fermendes",
            codigo, expira_formatado
        );

        self.send_email(to_email, "Código de Verificação", &text_body, &html_body)
            .await
    }

    /// Email the password-recovery link carrying the single-use verificador.
    #[instrument(skip(self, verificador))]
    pub async fn send_password_recovery(
        &self,
        to_email: &str,
        verificador: &str,
        expira_em: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let expira_formatado = expira_em.format("%d/%m/%Y %H:%M").to_string();
        let recovery_link = format!("{}/recuperarSenha/{}", self.config.frontend_url, verificador);

        let html_body = self.recovery_template(&recovery_link, &expira_formatado);
        let text_body = format!(
            "Olá,\n\n\
             Recebemos uma solicitação para redefinir a senha da sua conta \
             Fit Fermendes. Para continuar, acesse o link abaixo:\n\n\
             {}\n\n\
             Esse link expira em {}. Se você não solicitou essa alteração, \
             ignore este e-mail.\n\n\
             Fit Fermendes",
            recovery_link, expira_formatado
        );

        self.send_email(
            to_email,
            "Recuperação de Senha - Fit Fermendes",
            &text_body,
            &html_body,
        )
        .await
    }

    #[instrument(skip(self, html_body, text_body))]
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), AppError> {
        if !self.config.enabled {
            info!(to = %to_email, subject = %subject, "SMTP disabled, skipping email");
            return Ok(());
        }

        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let email = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid from email: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid to email: {}", e)))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to build email: {}", e)))?;

        let mailer = if self.config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| {
                    AppError::internal(anyhow::anyhow!("Failed to create SMTP relay: {}", e))
                })?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        };

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!("Task join error: {}", e)))?
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to send email: {}", e)))?;

        Ok(())
    }

    fn two_factor_template(&self, codigo: &str, expira_formatado: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8" />
    <title>Código de Verificação</title>
</head>
<body style="margin: 0; padding: 20px; font-family: Arial, sans-serif; background-color: #f4f4f7; color: #333;">
    <div style="max-width: 500px; margin: 0 auto; background-color: #ffffff; border-radius: 8px; padding: 30px; box-shadow: 0 2px 6px rgba(0,0,0,0.1);">
        <h2 style="margin: 0 0 20px 0;">Autenticação de Dois Fatores Fit Fermendes</h2>
        <p>Olá,</p>
        <p>Use o código abaixo para acessar sua conta com segurança:</p>
        <div style="font-size: 32px; font-weight: bold; letter-spacing: 6px; background-color: #f0f0f0; padding: 15px; border-radius: 6px; text-align: center; margin: 20px 0; color: #1a73e8;">{}</div>
        <p>Este código expira em <strong>{}</strong>. Se você não solicitou este código, ignore este e-mail.</p>
        <p style="font-size: 12px; color: #888; text-align: center; margin-top: 20px;">
            © 2025 Fit Fermendes. Todos os direitos reservados.
        </p>
    </div>
</body>
</html>"#,
            codigo, expira_formatado
        )
    }

    fn recovery_template(&self, recovery_link: &str, expira_formatado: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8" />
    <title>Recuperação de Senha - Fit Fermendes</title>
</head>
<body style="margin: 0; padding: 20px; font-family: Arial, sans-serif; background-color: #f5f7fa; color: #333;">
    <div style="max-width: 550px; margin: 30px auto; background-color: #ffffff; border-radius: 12px; padding: 40px; box-shadow: 0 4px 15px rgba(0,0,0,0.08);">
        <h2 style="color: #1a237e; text-align: center; margin: 0 0 25px 0;">Recuperação de Senha</h2>
        <p>Olá,</p>
        <p>Recebemos uma solicitação para redefinir a senha da sua conta Fit Fermendes. Para continuar, clique no botão abaixo:</p>
        <div style="text-align: center; margin: 30px 0;">
            <a href="{}" style="display: inline-block; background-color: #1a73e8; color: #ffffff; padding: 14px 32px; border-radius: 8px; text-decoration: none; font-weight: bold;">Redefinir Senha</a>
        </div>
        <div style="background-color: #fff8e1; padding: 15px; border-radius: 6px; border-left: 4px solid #ffc107; margin: 25px 0;">
            <p style="margin: 0;">Esse link expira em <strong>{}</strong>. Se você não solicitou essa alteração, por favor ignore este e-mail.</p>
        </div>
        <p style="font-size: 13px; color: #78909c; text-align: center; margin-top: 35px;">
            © 2025 Fit Fermendes. Todos os direitos reservados.<br />
            Este é um e-mail automático, por favor não responda.
        </p>
    </div>
</body>
</html>"#,
            recovery_link, expira_formatado
        )
    }
}
