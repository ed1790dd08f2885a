//! エラー型定義
//!
//! 検出クライアント境界で全エラーを `DetectionError` に収束させる。
//! 表示メッセージの優先順位: サービスのdetail > ステータス/通信の説明 > 解析失敗

use thiserror::Error;

/// 検出サイクルのエラー型
#[derive(Error, Debug)]
pub enum DetectionError {
    /// サービスが返したdetailメッセージ（そのまま表示する）
    #[error("{0}")]
    Service(String),

    /// detailなしの非2xxレスポンス
    #[error("サーバーエラー (HTTP {0})")]
    Status(u16),

    /// fetch失敗などの通信エラー
    #[error("通信エラー: {0}")]
    Transport(String),

    /// 2xxだがボディが期待形式でない
    #[error("レスポンスの解析に失敗しました: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, DetectionError>;
