//! 選択・検出サイクルの状態機械
//!
//! 1つの `DetectorController` 値が (選択中の画像, 検出結果, 世代) を持ち、
//! 変更は必ずメソッド経由で行う。非同期処理（プレビュー生成・検出リクエスト）は
//! `select` が返した世代を持ち回り、適用時に現在の世代と照合する。
//! 世代が合わない適用は無視されるため、古い選択のリクエストが遅れて
//! 完了しても新しい結果を上書きしない。

use crate::error::DetectionError;
use crate::types::DetectionResponse;

/// 現在選択中の画像
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageSelection {
    /// 生バイト列（ファイル読み込み完了後に `apply_payload` で設定される）
    pub bytes: Vec<u8>,
    /// 表示用Data URL（非同期に生成されるため選択直後はNone）
    pub preview: Option<String>,
}

/// 1回の送信サイクルの結果
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetectionOutcome {
    /// 現在の選択に対する送信が未実行
    #[default]
    Idle,
    /// リクエスト送信中
    Pending,
    /// 失敗（メッセージをそのまま表示）
    Failed { message: String },
    /// 成功
    Succeeded { response: DetectionResponse },
}

/// 選択・結果・世代を束ねるコントローラ
#[derive(Debug, Clone, Default)]
pub struct DetectorController {
    selection: Option<ImageSelection>,
    outcome: DetectionOutcome,
    generation: u64,
}

impl DetectorController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい画像を選択し、新世代番号を返す
    ///
    /// 選択イベントの発生時に同期的に呼ぶこと。後勝ちの判定は
    /// ここで採番される世代番号で決まるため、ファイル読み込みなどの
    /// 非同期処理を挟んでから呼ぶとイベント順と食い違う。
    /// 旧選択・旧結果は破棄される。同じファイルの再選択でも
    /// サイクルは最初からやり直す（重複排除しない）。
    pub fn select(&mut self) -> u64 {
        self.generation += 1;
        self.selection = Some(ImageSelection::default());
        self.outcome = DetectionOutcome::Idle;
        self.generation
    }

    /// 読み込み完了したペイロードを選択に取り付ける。世代が古ければ何もしない
    pub fn apply_payload(&mut self, generation: u64, bytes: Vec<u8>) -> bool {
        if generation != self.generation {
            return false;
        }
        if let Some(selection) = self.selection.as_mut() {
            selection.bytes = bytes;
            return true;
        }
        false
    }

    /// 送信開始（Idle → Pending、同期遷移）
    ///
    /// 世代が古ければ何もしない
    pub fn begin_submit(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.outcome = DetectionOutcome::Pending;
        true
    }

    /// プレビューを公開する。世代が古ければ何もしない
    pub fn apply_preview(&mut self, generation: u64, data_url: String) -> bool {
        if generation != self.generation {
            return false;
        }
        if let Some(selection) = self.selection.as_mut() {
            selection.preview = Some(data_url);
            return true;
        }
        false
    }

    /// リクエスト完了を反映する（Pending → Succeeded/Failed）
    ///
    /// 世代が古い完了は破棄し、エラーとしても表示しない
    pub fn settle(
        &mut self,
        generation: u64,
        result: Result<DetectionResponse, DetectionError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.outcome = match result {
            Ok(response) => DetectionOutcome::Succeeded { response },
            Err(error) => DetectionOutcome::Failed {
                message: error.to_string(),
            },
        };
        true
    }

    pub fn selection(&self) -> Option<&ImageSelection> {
        self.selection.as_ref()
    }

    /// 表示用プレビュー（未選択・未生成ならNone）
    pub fn preview(&self) -> Option<&str> {
        self.selection.as_ref()?.preview.as_deref()
    }

    pub fn outcome(&self) -> &DetectionOutcome {
        &self.outcome
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
