use std::env;

use actix_web::{App, HttpServer, middleware, web};
use config::{Config, Environment, File};
use env_logger::Env;

use contentgen::models::config::ServerConfig;
use contentgen::provider::{GeminiProvider, ProviderCredentials};
use contentgen::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build();

    let server_config: ServerConfig = match settings.and_then(|s| s.try_deserialize()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let credentials = ProviderCredentials::from_env();
    if credentials.api_key.is_none() {
        log::warn!(
            "{} is not set; generation requests will fail with a configuration error",
            ProviderCredentials::ENV_VAR
        );
    }

    let provider = match GeminiProvider::new(&server_config.provider) {
        Ok(provider) => provider,
        Err(e) => {
            log::error!("Failed to create provider client: {e}");
            std::process::exit(1);
        }
    };

    let address = server_config.address.clone();
    let port = server_config.port;
    log::info!(
        "Starting gateway on {address}:{port} using model {}",
        server_config.provider.model
    );

    let credentials = web::Data::new(credentials);
    let provider = web::Data::new(provider);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(credentials.clone())
            .app_data(provider.clone())
            .configure(routes::configure::<GeminiProvider>)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}
