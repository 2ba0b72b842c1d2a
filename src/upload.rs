//! 画像選択からアップロード完了までの流れ

use crate::client::BackendClient;
use crate::error::{MenuGeniusError, Result};
use menu_genius_common::{encode_data_uri, SelectedImage, UploadSession};
use std::path::Path;

/// 画像ファイルを読み込む（画像以外の拡張子は拒否）
pub async fn read_image(path: &Path) -> Result<SelectedImage> {
    if !path.is_file() {
        return Err(MenuGeniusError::FileNotFound(path.display().to_string()));
    }
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("image")
        .to_string();
    let bytes = tokio::fs::read(path).await?;
    Ok(SelectedImage::new(file_name, bytes)?)
}

/// 画像を選択し、プレビュー生成とアップロードを並行して実行する
///
/// 戻り値はアップロード完了がセッションに反映されたかどうか。
pub async fn run_upload(session: &mut UploadSession, client: &BackendClient, image: SelectedImage) -> bool {
    let ticket = session.select_image(image);
    let token = ticket.token;

    let mime_type = ticket.request.mime_type.clone();
    let bytes = ticket.request.bytes.clone();
    let preview = tokio::task::spawn_blocking(move || encode_data_uri(&mime_type, &bytes));

    let (preview, outcome) = tokio::join!(preview, client.upload(&ticket.request));

    match preview {
        Ok(data_uri) => {
            session.complete_preview(token, data_uri);
        }
        Err(err) => tracing::warn!("preview encoding task failed: {err}"),
    }
    session.complete_upload(token, outcome)
}
