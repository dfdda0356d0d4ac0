use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use pdf_study_server::{
    app_state::AppState, config::Config, middleware::RequestIdMiddleware, routes,
};

fn cors(allowed_origin: Option<&str>) -> Cors {
    match allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::CONTENT_TYPE,
                header::HeaderName::from_static("x-file-name"),
            ])
            .expose_headers(vec![header::CONTENT_DISPOSITION])
            .max_age(3600),
        None => Cors::default(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Starting HTTP server on {}:{} (model {})",
        bind_address.0,
        bind_address.1,
        state.config.llm_model_name
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::from(state.jwt_service.clone()))
            .wrap(cors(state.config.cors_allowed_origin.as_deref()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
