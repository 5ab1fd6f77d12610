use totp_rs::{Algorithm, Secret, TOTP};

use crate::config::otp::OtpConfig;
use crate::utils::errors::AppError;

/// 6-digit code, 30 second step, SHA1 — the conventional TOTP profile.
fn build_totp(config: &OtpConfig) -> Result<TOTP, AppError> {
    let secret = Secret::Encoded(config.secret.clone())
        .to_bytes()
        .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid OTP secret: {:?}", e)))?;

    TOTP::new(Algorithm::SHA1, 6, 1, 30, secret)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to build TOTP: {}", e)))
}

/// Generate the code for the current time window from the shared secret.
pub fn generate_code(config: &OtpConfig) -> Result<String, AppError> {
    build_totp(config)?
        .generate_current()
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to generate code: {}", e)))
}
