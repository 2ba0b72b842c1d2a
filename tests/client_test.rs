//! バックエンドクライアントテスト
//!
//! ローカルに立てたHTTPサーバーに対してアップロードと応答の分類を検証

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use menu_genius::client::BackendClient;
use menu_genius::upload::run_upload;
use menu_genius_common::{
    Language, MessageKey, SelectedImage, UploadFailure, UploadRequest, UploadSession,
};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::net::TcpListener;

async fn spawn_backend(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().expect("アドレス取得失敗");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("サーバー停止");
    });
    format!("http://{}/upload", addr)
}

fn client_for(url: &str) -> BackendClient {
    BackendClient::new(url, Some(Duration::from_secs(5))).expect("クライアント作成失敗")
}

fn request(language: Language) -> UploadRequest {
    UploadRequest {
        file_name: "menu.jpg".into(),
        mime_type: "image/jpeg".into(),
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
        language,
    }
}

/// 受け取った multipart の中身を料理名として返す
async fn echo_upload(mut multipart: Multipart) -> Json<Value> {
    let mut file = String::from("none");
    let mut language = String::from("none");
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let size = field.bytes().await.map(|b| b.len()).unwrap_or(0);
                file = format!("{} {} {}", file_name, content_type, size);
            }
            "language" => language = field.text().await.unwrap_or_default(),
            _ => {}
        }
    }
    Json(json!({ "menu": [{ "name": file, "description": language, "price": "$1" }] }))
}

fn fixed_body(status: StatusCode, body: &'static str) -> Router {
    Router::new().route("/upload", post(move || async move { (status, body) }))
}

// ============================================
// 送信内容
// ============================================

#[tokio::test]
async fn test_upload_sends_file_and_language() {
    let url = spawn_backend(Router::new().route("/upload", post(echo_upload))).await;
    let client = client_for(&url);

    let dishes = client.upload(&request(Language::Spanish)).await.expect("成功するべき");
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].name.as_deref(), Some("menu.jpg image/jpeg 4"));
    assert_eq!(dishes[0].description.as_deref(), Some("Spanish"));
    assert_eq!(dishes[0].price.as_deref(), Some("$1"));
}

#[tokio::test]
async fn test_upload_sends_backend_language_name() {
    let url = spawn_backend(Router::new().route("/upload", post(echo_upload))).await;
    let client = client_for(&url);

    let dishes = client
        .upload(&request(Language::TraditionalChinese))
        .await
        .expect("成功するべき");
    assert_eq!(dishes[0].description.as_deref(), Some("Traditional Chinese"));
}

// ============================================
// 応答の分類
// ============================================

#[tokio::test]
async fn test_upload_backend_reported_error() {
    let url = spawn_backend(fixed_body(StatusCode::OK, r#"{"error":"Could not read image"}"#)).await;
    let result = client_for(&url).upload(&request(Language::English)).await;
    assert_eq!(result, Err(UploadFailure::BackendReported("Could not read image".into())));
}

#[tokio::test]
async fn test_upload_missing_menu() {
    let url = spawn_backend(fixed_body(StatusCode::OK, r#"{"dishes":[]}"#)).await;
    let result = client_for(&url).upload(&request(Language::English)).await;
    assert_eq!(result, Err(UploadFailure::InvalidResponseShape));
}

#[tokio::test]
async fn test_upload_non_json_body() {
    let url = spawn_backend(fixed_body(StatusCode::OK, "<html>oops</html>")).await;
    let result = client_for(&url).upload(&request(Language::English)).await;
    assert_eq!(result, Err(UploadFailure::ResponseParse));
}

#[tokio::test]
async fn test_upload_http_error_status() {
    let url = spawn_backend(fixed_body(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":"boom"}"#,
    ))
    .await;
    let result = client_for(&url).upload(&request(Language::English)).await;
    match result {
        Err(UploadFailure::Transport(detail)) => assert!(detail.contains("500")),
        other => panic!("Transport になるべき: {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_connection_refused() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().expect("アドレス取得失敗");
    drop(listener);

    let client = client_for(&format!("http://{}/upload", addr));
    let result = client.upload(&request(Language::English)).await;
    assert!(matches!(result, Err(UploadFailure::Transport(_))));
}

// ============================================
// セッションとの結合
// ============================================

#[tokio::test]
async fn test_run_upload_updates_session() {
    let url = spawn_backend(fixed_body(
        StatusCode::OK,
        r#"{"menu":[{"name":"Ramen","description":"Pork broth"},{"name":"","description":null}]}"#,
    ))
    .await;
    let client = client_for(&url);
    let mut session = UploadSession::default();
    let image = SelectedImage::new("menu.jpg", vec![1, 2, 3]).unwrap();

    assert!(run_upload(&mut session, &client, image).await);

    assert!(!session.is_loading());
    assert!(session.error_message().is_none());
    assert_eq!(session.preview_data_uri(), Some("data:image/jpeg;base64,AQID"));
    let dishes = session.result().expect("結果があるべき");
    assert_eq!(dishes.len(), 2);
    assert_eq!(dishes[1].display_name(session.language()), "Unnamed Dish");
    assert_eq!(session.page_label(), "Page 1 of 1");
    assert!(session.show_actions());
}

#[tokio::test]
async fn test_run_upload_failure_shows_localized_message() {
    let url = spawn_backend(fixed_body(StatusCode::BAD_GATEWAY, "bad gateway")).await;
    let client = client_for(&url);
    let mut session = UploadSession::default();
    assert!(session.set_language(Language::French));
    let image = SelectedImage::new("menu.png", vec![9; 16]).unwrap();

    assert!(run_upload(&mut session, &client, image).await);

    assert!(session.result().is_none());
    assert_eq!(
        session.error_message(),
        Some(menu_genius_common::tr(Language::French, MessageKey::UploadError))
    );
    assert!(session.preview_data_uri().is_some());
}
