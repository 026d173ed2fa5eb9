use std::io::Write;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

#[macro_use]
mod common;

use common::GENERATE_PATH;

async fn body_json(resp: actix_web::dev::ServiceResponse) -> Value {
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn blank_prompt_is_rejected_without_provider_call() {
    let mut provider = mockito::Server::new_async().await;
    let mock = provider
        .mock("POST", GENERATE_PATH)
        .expect(0)
        .create_async()
        .await;
    let app = gateway!(&provider.url(), Some("secret"));

    for prompt in ["", "  "] {
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({"prompt": prompt, "category": "Blog Idea"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({"error": "Prompt and Content Type are required."})
        );
    }

    mock.assert_async().await;
}

#[actix_web::test]
async fn missing_fields_and_bad_json_are_validation_errors() {
    let provider = mockito::Server::new_async().await;
    let app = gateway!(&provider.url(), Some("secret"));

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({"prompt": "topic"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "Prompt and Content Type are required."})
    );
}

#[actix_web::test]
async fn other_verbs_are_not_allowed() {
    let provider = mockito::Server::new_async().await;
    let app = gateway!(&provider.url(), Some("secret"));

    for req in [
        test::TestRequest::get().uri("/api/generate").to_request(),
        test::TestRequest::put().uri("/api/generate").to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(resp).await, json!({"error": "Method not allowed"}));
    }
}

#[actix_web::test]
async fn missing_credential_is_configuration_error() {
    let mut provider = mockito::Server::new_async().await;
    let mock = provider
        .mock("POST", GENERATE_PATH)
        .expect(0)
        .create_async()
        .await;
    let app = gateway!(&provider.url(), None);

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({"prompt": "topic", "category": "Blog Idea"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "Server configuration error: API Key missing."})
    );
    mock.assert_async().await;
}

#[actix_web::test]
async fn success_returns_provider_text_byte_for_byte() {
    let text = "### 1) Short & Punchy\nSun's out ☀️ #summer\n\n";
    let mut provider = mockito::Server::new_async().await;
    let mock = provider
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", "secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"candidates": [{"content": {"parts": [{"text": text}]}}]}).to_string())
        .expect(1)
        .create_async()
        .await;
    let app = gateway!(&provider.url(), Some("secret"));

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({"prompt": "summer sale", "type": "Social Media Caption"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"result": text}));
    mock.assert_async().await;
}

#[actix_web::test]
async fn success_without_text_is_empty_result() {
    let mut provider = mockito::Server::new_async().await;
    let _mock = provider
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(r#"{"candidates":[]}"#)
        .create_async()
        .await;
    let app = gateway!(&provider.url(), Some("secret"));

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({"prompt": "topic", "category": "Blog Idea"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await, json!({"error": "No content generated."}));
}

#[actix_web::test]
async fn provider_status_and_message_are_propagated() {
    let mut provider = mockito::Server::new_async().await;
    let mock = provider
        .mock("POST", GENERATE_PATH)
        .with_status(429)
        .with_body(r#"{"error":{"message":"quota exceeded"}}"#)
        .expect(1)
        .create_async()
        .await;
    let app = gateway!(&provider.url(), Some("secret"));

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({"prompt": "topic", "category": "Blog Idea"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body_json(resp).await, json!({"error": "quota exceeded"}));
    mock.assert_async().await;
}

#[actix_web::test]
async fn slow_provider_is_gateway_timeout() {
    let mut provider = mockito::Server::new_async().await;
    let _mock = provider
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(std::time::Duration::from_secs(3));
            w.write_all(br#"{"candidates":[]}"#)
        })
        .create_async()
        .await;
    let app = gateway!(&provider.url(), Some("secret"), 1);

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({"prompt": "topic", "category": "Blog Idea"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "The AI provider did not respond in time."})
    );
}

#[actix_web::test]
async fn unreachable_provider_is_generic_internal_error() {
    let app = gateway!("http://127.0.0.1:1", Some("secret"));

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({"prompt": "topic", "category": "Blog Idea"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await, json!({"error": "Internal Server Error"}));
}

#[actix_web::test]
async fn categories_are_listed_in_display_order() {
    let provider = mockito::Server::new_async().await;
    let app = gateway!(&provider.url(), None);

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!([
            "Social Media Caption",
            "Blog Idea",
            "Product Description",
            "Email Template"
        ])
    );
}
