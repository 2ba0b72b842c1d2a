use menu_genius_common::{RequestToken, UploadOutcome};

/// 縮小済みのプレビュー画像（RGBA）
#[derive(Debug, Clone)]
pub struct PreviewImage {
    pub size: [usize; 2],
    pub pixels: Vec<u8>,
}

/// ワーカースレッドからUIへの通知
pub enum UiMessage {
    PreviewReady {
        token: RequestToken,
        data_uri: String,
        image: Option<PreviewImage>,
    },
    UploadDone {
        token: RequestToken,
        outcome: UploadOutcome,
    },
}
