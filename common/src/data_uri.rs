//! プレビュー用 Data URL

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// 画像バイト列を `data:<mime>;base64,...` 形式に変換
pub fn encode_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}
