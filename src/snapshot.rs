//! ダッシュボードスナップショットのデータモデル

use crate::error::SnapshotError;
use serde::Deserialize;
use serde_json::Number;
use std::fmt;
use tracing::error;

/// `/api/dashboard` のレスポンス（使用するフィールドのみ）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub snapshot: Snapshot,
    pub hourly_data: Vec<HourlyEntry>,
}

#[derive(Debug, Deserialize)]
pub struct Snapshot {
    pub api_data: ApiData,
}

#[derive(Debug, Deserialize)]
pub struct ApiData {
    pub toast: ToastSource,
}

#[derive(Debug, Deserialize)]
pub struct ToastSource {
    pub data: ToastData,
}

/// Toast POSの当日集計
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastData {
    /// 集計対象日（YYYY-MM-DD）
    #[serde(default)]
    pub data_date: Option<String>,
    /// 整数か小数かを表示で区別するため数値のまま保持
    pub today_revenue: Number,
    pub today_transactions: u64,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    pub name: String,
}

impl ToastData {
    pub fn revenue_amount(&self) -> f64 {
        self.today_revenue.as_f64().unwrap_or_default()
    }
}

/// 時間帯ラベル（"12:00" のような文字列、または数値）
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HourLabel {
    Text(String),
    Number(Number),
}

impl fmt::Display for HourLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 幅指定（{:>6}）を効かせるためpadを使う
        match self {
            HourLabel::Text(text) => f.pad(text),
            HourLabel::Number(number) => f.pad(&number.to_string()),
        }
    }
}

/// 時間帯別の売上
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyEntry {
    pub hour: HourLabel,
    pub revenue: f64,
    pub transactions: u64,
}

impl DashboardResponse {
    /// JSON本文を解析する
    ///
    /// 失敗時は問題のあったJSONパスをエラーに含める
    pub fn parse(body: &str) -> Result<Self, SnapshotError> {
        let jd = &mut serde_json::Deserializer::from_str(body);
        serde_path_to_error::deserialize(jd).map_err(|e| {
            let path = e.path().to_string();
            error!("スナップショットの解析に失敗: {}", path);
            SnapshotError::Parse {
                path,
                source: e.into_inner(),
            }
        })
    }

    pub fn toast(&self) -> &ToastData {
        &self.snapshot.api_data.toast.data
    }
}
