//! # Fit Fermendes API
//!
//! Backend administrativo de um estúdio de fitness: usuários, modalidades,
//! alunos, status de aula e agendamento de aulas com lista de presença,
//! construído com Axum e PostgreSQL.
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── config/           # Environment-sourced configuration (JWT, SMTP, CORS, OTP)
//! ├── middleware/       # Bearer-token auth extractor
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login with emailed 2FA code, password recovery
//! │   ├── usuarios/    # System users
//! │   ├── modalidades/ # Class modalities
//! │   ├── alunos/      # Students
//! │   ├── status_aulas/# Class status lookup table
//! │   └── aulas/       # Class sessions with many-to-many rosters
//! └── utils/           # Errors, JWT, bcrypt, OTP, email, response envelope
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models, DTOs, database structs
//! - `router.rs`: Axum router configuration
//!
//! ## Authentication
//!
//! Login is a two-step flow: `POST /usuario/loginEmail` checks the
//! credentials and emails a 6-digit TOTP code, returning an opaque
//! `verificador`; `POST /usuario/2fa` redeems verificador + code for a
//! JWT. Password recovery works the same way with an emailed link
//! instead of a code. Challenges expire after 5 minutes and are
//! single-use.
//!
//! ## API Documentation
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
