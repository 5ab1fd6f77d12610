//! Feature modules, one per domain entity plus authentication. Each
//! module bundles its models, service, controller and router.

pub mod alunos;
pub mod aulas;
pub mod auth;
pub mod modalidades;
pub mod status_aulas;
pub mod usuarios;
