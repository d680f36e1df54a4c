use actix_web::{middleware::Logger, web, App, HttpServer};
use study_assistant_server::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{cors, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if let Err(err) = config.validate() {
        log::warn!("{}", err);
    }

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    log::info!(
        "Starting study assistant on {}:{} using model {} at {}",
        bind_address.0,
        bind_address.1,
        config.llm_model,
        config.llm_base_url
    );

    let state = AppState::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors(&state.config))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
