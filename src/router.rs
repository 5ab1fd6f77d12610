use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::alunos::router::init_alunos_router;
use crate::modules::aulas::router::init_aulas_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::modalidades::router::init_modalidades_router;
use crate::modules::status_aulas::router::init_status_aulas_router;
use crate::modules::usuarios::router::init_usuarios_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/usuario",
            init_auth_router().merge(init_usuarios_router()),
        )
        .nest("/modalidade", init_modalidades_router())
        .nest("/aluno", init_alunos_router())
        .nest("/statusAula", init_status_aulas_router())
        .nest("/aula", init_aulas_router())
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
