use std::env;

#[derive(Clone, Debug)]
pub struct OtpConfig {
    /// Base32-encoded shared secret the one-time codes derive from.
    pub secret: String,
}

impl OtpConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("OTP_SECRET")
                .unwrap_or_else(|_| "JBSWY3DPEHPK3PXPJBSWY3DPEHPK3PXP".to_string()),
        }
    }
}
