//! バックエンドAPIクライアント
//!
//! `POST <backend>/upload` に multipart で画像と言語を送り、
//! 応答を共通パーサーで料理リストか失敗種別に分類する。

use crate::config::Config;
use crate::error::Result;
use menu_genius_common::{parse_upload_response, UploadFailure, UploadOutcome, UploadRequest};
use reqwest::multipart::{Form, Part};
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    upload_url: String,
}

impl BackendClient {
    /// `timeout` が None ならタイムアウトを設定しない
    pub fn new(upload_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            upload_url: upload_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.upload_url(), config.timeout_seconds.map(Duration::from_secs))
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// 画像を送信して結果を分類する（リトライしない）
    pub async fn upload(&self, request: &UploadRequest) -> UploadOutcome {
        let started = Instant::now();
        info!(
            url = %self.upload_url,
            file = %request.file_name,
            bytes = request.bytes.len(),
            language = %request.language,
            "uploading menu image"
        );

        let outcome = self.send(request).await;
        match &outcome {
            Ok(dishes) => info!(
                dishes = dishes.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "menu analysis received"
            ),
            Err(failure) => warn!(
                %failure,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "menu analysis failed"
            ),
        }
        outcome
    }

    async fn send(&self, request: &UploadRequest) -> UploadOutcome {
        let part = Part::bytes(request.bytes.clone())
            .file_name(request.file_name.clone())
            .mime_str(&request.mime_type)
            .map_err(transport)?;
        let form = Form::new()
            .part("file", part)
            .text("language", request.language.as_str());

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadFailure::Transport(format!("HTTP {}", status)));
        }

        let body = response.text().await.map_err(transport)?;
        parse_upload_response(&body)
    }
}

fn transport(err: reqwest::Error) -> UploadFailure {
    UploadFailure::Transport(err.to_string())
}
