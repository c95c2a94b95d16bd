use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use streamfolio::config::Config;
use streamfolio::error::ApiError;
use streamfolio::{routes, AppState};

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "streamfolio=debug,actix_web=info");
    }
    env_logger::init();

    let config = Config::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
    let state = web::Data::new(AppState::new(&config));
    let port = config.port;
    log::info!("listening on http://0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                ApiError::Validation(err.to_string()).into()
            }))
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
