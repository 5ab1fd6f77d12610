use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::alunos::model::{Aluno, AlunoDto};
use crate::modules::aulas::model::{AlunoResumo, Aula, CreateAulaDto, UpdateAulaDto};
use crate::modules::auth::model::{
    LoginEmailDto, LoginResponse, RecuperarSenhaDto, SolicitarRecuperacaoDto, TwoFactorChallenge,
    TwoFactorDto,
};
use crate::modules::modalidades::model::{Modalidade, ModalidadeDto};
use crate::modules::status_aulas::model::{StatusAula, StatusAulaDto};
use crate::modules::usuarios::model::{CreateUsuarioDto, UpdateUsuarioDto, Usuario};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::post_login_email,
        crate::modules::auth::controller::post_two_factor,
        crate::modules::auth::controller::post_solicitar_recuperacao,
        crate::modules::auth::controller::post_recuperar_senha,
        crate::modules::auth::controller::post_data,
        crate::modules::usuarios::controller::get_lista_usuarios,
        crate::modules::usuarios::controller::get_usuario,
        crate::modules::usuarios::controller::post_usuario,
        crate::modules::usuarios::controller::put_usuario,
        crate::modules::modalidades::controller::get_lista_modalidades,
        crate::modules::modalidades::controller::get_modalidade,
        crate::modules::modalidades::controller::post_modalidade,
        crate::modules::modalidades::controller::put_modalidade,
        crate::modules::alunos::controller::get_lista_alunos,
        crate::modules::alunos::controller::get_aluno,
        crate::modules::alunos::controller::post_aluno,
        crate::modules::alunos::controller::put_aluno,
        crate::modules::status_aulas::controller::get_lista_status_aulas,
        crate::modules::status_aulas::controller::get_status_aula,
        crate::modules::status_aulas::controller::post_status_aula,
        crate::modules::status_aulas::controller::put_status_aula,
        crate::modules::aulas::controller::get_lista_aulas,
        crate::modules::aulas::controller::get_aula,
        crate::modules::aulas::controller::post_aula,
        crate::modules::aulas::controller::put_aula,
        crate::modules::aulas::controller::patch_cancelar_aula,
        crate::modules::aulas::controller::patch_concluir_aula,
    ),
    components(
        schemas(
            Usuario,
            CreateUsuarioDto,
            UpdateUsuarioDto,
            LoginEmailDto,
            TwoFactorDto,
            TwoFactorChallenge,
            SolicitarRecuperacaoDto,
            RecuperarSenhaDto,
            LoginResponse,
            Modalidade,
            ModalidadeDto,
            Aluno,
            AlunoDto,
            StatusAula,
            StatusAulaDto,
            Aula,
            AlunoResumo,
            CreateAulaDto,
            UpdateAulaDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Autenticação", description = "Login com 2FA e recuperação de senha"),
        (name = "Usuários", description = "Gestão de usuários do sistema"),
        (name = "Modalidades", description = "Modalidades de aula"),
        (name = "Alunos", description = "Gestão de alunos"),
        (name = "Status de Aula", description = "Status do ciclo de vida de uma aula"),
        (name = "Aulas", description = "Agendamento de aulas e listas de presença")
    ),
    info(
        title = "Fit Fermendes API",
        version = "0.1.0",
        description = "Backend administrativo do estúdio Fit Fermendes: usuários, modalidades, alunos e agendamento de aulas.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
