use std::net::SocketAddr;

use axum::{routing::post, Json, Router};
use base64::{engine::general_purpose, Engine as _};
use interpreter_configuration::AppConfig;
use interpreter_setup::Application;
use serde_json::{json, Value};

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("extract local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server runs");
    });
    addr
}

async fn spawn_mock_services() -> (SocketAddr, SocketAddr, SocketAddr) {
    let stt = Router::new().route(
        "/v1/audio/transcriptions",
        post(|| async { Json(json!({"text": "안녕하세요"})) }),
    );
    let translate = Router::new().route(
        "/v1beta/models/{model}",
        post(|| async {
            Json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "Xin chào" }] }
                }]
            }))
        }),
    );
    let tts = Router::new().route(
        "/v1/synthesize",
        post(|| async {
            Json(json!({
                "audio_base64": general_purpose::STANDARD.encode([0xAAu8, 0xBB, 0xCC]),
                "media_type": "audio/mp3",
            }))
        }),
    );
    (spawn(stt).await, spawn(translate).await, spawn(tts).await)
}

async fn spawn_app() -> SocketAddr {
    let (stt, translate, tts) = spawn_mock_services().await;
    let mut config = AppConfig::default();
    config.service.stt.base_url = format!("http://{stt}");
    config.service.translate.base_url = format!("http://{translate}");
    config.service.tts.base_url = format!("http://{tts}");

    let app = Application::new(config).expect("app wires up");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind app port");
    let addr = listener.local_addr().expect("app address");
    let router = interpreter_http_server::app_router(app.state);
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("app serves");
    });
    addr
}

async fn create_session(client: &reqwest::Client, base: &str) -> String {
    let body: Value = client
        .post(format!("{base}/v1/sessions"))
        .send()
        .await
        .expect("session request")
        .json()
        .await
        .expect("session body");
    assert_eq!(body["input_language"], "ko");
    assert_eq!(body["output_language"], "vi");
    body["session_id"].as_str().expect("session id").to_string()
}

#[tokio::test]
async fn browser_payload_round_trip_produces_full_interpretation() {
    let addr = spawn_app().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();
    let session = create_session(&client, &base).await;

    let response = client
        .put(format!("{base}/v1/sessions/{session}/credential"))
        .json(&json!({"credential": "test-key"}))
        .send()
        .await
        .expect("credential set");
    assert!(response.status().is_success());

    let payload = general_purpose::STANDARD.encode(b"RIFF0000WAVEfmt ");
    let response = client
        .post(format!("{base}/v1/sessions/{session}/payload"))
        .json(&json!({"payload_base64": payload}))
        .send()
        .await
        .expect("payload delivered");
    assert!(response.status().is_success());

    let body: Value = client
        .post(format!("{base}/v1/sessions/{session}/interpret"))
        .json(&json!({"source": "browser"}))
        .send()
        .await
        .expect("interpret request")
        .json()
        .await
        .expect("interpret body");

    assert_eq!(body["status"], "done");
    assert_eq!(body["transcript"], "안녕하세요");
    assert_eq!(body["translation"], "Xin chào");
    assert_eq!(
        body["audio_base64"],
        general_purpose::STANDARD.encode([0xAAu8, 0xBB, 0xCC])
    );
    assert_eq!(body["media_type"], "audio/mp3");
}

#[tokio::test]
async fn whitespace_transcript_reports_empty_with_advisory() {
    let stt = Router::new().route(
        "/v1/audio/transcriptions",
        post(|| async { Json(json!({"text": "   "})) }),
    );
    let (_, translate, tts) = spawn_mock_services().await;
    let stt = spawn(stt).await;

    let mut config = AppConfig::default();
    config.service.stt.base_url = format!("http://{stt}");
    config.service.translate.base_url = format!("http://{translate}");
    config.service.tts.base_url = format!("http://{tts}");
    let app = Application::new(config).expect("app wires up");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind app port");
    let addr = listener.local_addr().expect("app address");
    let router = interpreter_http_server::app_router(app.state);
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("app serves");
    });

    let base = format!("http://{addr}");
    let client = reqwest::Client::new();
    let session = create_session(&client, &base).await;
    client
        .put(format!("{base}/v1/sessions/{session}/credential"))
        .json(&json!({"credential": "test-key"}))
        .send()
        .await
        .expect("credential set");

    let body: Value = client
        .post(format!("{base}/v1/sessions/{session}/interpret"))
        .json(&json!({
            "source": "file",
            "file_base64": general_purpose::STANDARD.encode(b"RIFF0000WAVEfmt "),
        }))
        .send()
        .await
        .expect("interpret request")
        .json()
        .await
        .expect("interpret body");
    assert_eq!(body["status"], "empty");
    assert!(body["advisory"]
        .as_str()
        .expect("advisory present")
        .contains("No speech"));
}

#[tokio::test]
async fn interpret_without_credential_is_unauthorized() {
    let addr = spawn_app().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();
    let session = create_session(&client, &base).await;

    let payload = general_purpose::STANDARD.encode(b"RIFF0000WAVEfmt ");
    client
        .post(format!("{base}/v1/sessions/{session}/payload"))
        .json(&json!({"payload_base64": payload}))
        .send()
        .await
        .expect("payload delivered");

    let response = client
        .post(format!("{base}/v1/sessions/{session}/interpret"))
        .json(&json!({"source": "browser"}))
        .send()
        .await
        .expect("interpret request");
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn swap_exchanges_the_language_pair() {
    let addr = spawn_app().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();
    let session = create_session(&client, &base).await;

    let body: Value = client
        .put(format!("{base}/v1/sessions/{session}/languages"))
        .json(&json!({"field": "output", "language": "ja"}))
        .send()
        .await
        .expect("select request")
        .json()
        .await
        .expect("select body");
    assert_eq!(body["output_language"], "ja");

    let body: Value = client
        .post(format!("{base}/v1/sessions/{session}/swap"))
        .send()
        .await
        .expect("swap request")
        .json()
        .await
        .expect("swap body");
    assert_eq!(body["input_language"], "ja");
    assert_eq!(body["output_language"], "ko");
}

#[tokio::test]
async fn unknown_language_code_is_rejected() {
    let addr = spawn_app().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();
    let session = create_session(&client, &base).await;

    let response = client
        .put(format!("{base}/v1/sessions/{session}/languages"))
        .json(&json!({"field": "input", "language": "de"}))
        .send()
        .await
        .expect("select request");
    assert_eq!(
        response.status(),
        reqwest::StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn file_upload_source_runs_the_pipeline() {
    let addr = spawn_app().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();
    let session = create_session(&client, &base).await;

    client
        .put(format!("{base}/v1/sessions/{session}/credential"))
        .json(&json!({"credential": "test-key"}))
        .send()
        .await
        .expect("credential set");

    let body: Value = client
        .post(format!("{base}/v1/sessions/{session}/interpret"))
        .json(&json!({
            "source": "file",
            "file_base64": general_purpose::STANDARD.encode(b"RIFF0000WAVEfmt "),
        }))
        .send()
        .await
        .expect("interpret request")
        .json()
        .await
        .expect("interpret body");
    assert_eq!(body["status"], "done");
    assert_eq!(body["translation"], "Xin chào");
}
