//! Helpers for integration tests.

use actix_web::web;
use contentgen::models::config::ProviderConfig;
use contentgen::provider::{ApiKey, GeminiProvider, ProviderCredentials};

pub const GENERATE_PATH: &str = "/models/gemini-test:generateContent";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// App data for a gateway whose provider lives at `provider_url`.
pub fn app_data(
    provider_url: &str,
    api_key: Option<&str>,
    timeout_secs: u64,
) -> (web::Data<ProviderCredentials>, web::Data<GeminiProvider>) {
    let config = ProviderConfig {
        api_url: provider_url.to_string(),
        model: "gemini-test".to_string(),
        timeout_secs,
    };
    let provider = GeminiProvider::new(&config).expect("Failed to create provider client");
    let credentials = ProviderCredentials::new(api_key.and_then(ApiKey::new));
    (web::Data::new(credentials), web::Data::new(provider))
}

/// Build the gateway service under test.
macro_rules! gateway {
    ($provider_url:expr, $api_key:expr) => {
        gateway!($provider_url, $api_key, common::DEFAULT_TIMEOUT_SECS)
    };
    ($provider_url:expr, $api_key:expr, $timeout_secs:expr) => {{
        let (credentials, provider) = common::app_data($provider_url, $api_key, $timeout_secs);
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(credentials)
                .app_data(provider)
                .configure(contentgen::routes::configure::<contentgen::provider::GeminiProvider>),
        )
        .await
    }};
}
