//! スナップショット検証レポートモジュール

use crate::config::Config;
use crate::error::{SnapshotError, VerifyError};
use crate::fetch::SnapshotClient;
use crate::snapshot::{DashboardResponse, HourlyEntry};
use chrono::NaiveDate;
use serde_json::Number;
use std::fmt;
use std::time::Duration;
use tracing::info;

/// 検証レポート
#[derive(Debug)]
pub struct VerificationReport {
    pub data_date: Option<String>,
    pub full_date: Option<String>,
    pub location: Option<String>,
    pub last_updated: Option<String>,
    pub revenue: Number,
    pub transactions: u64,
    pub average: Option<f64>,
    /// 売上が正の時間帯のみ（入力順）
    pub hourly: Vec<HourlyEntry>,
    pub hourly_total: f64,
}

impl VerificationReport {
    /// レスポンスからレポートを組み立てる
    ///
    /// 日付が不正な場合はレポート全体を中止する
    pub fn build(response: &DashboardResponse) -> Result<Self, SnapshotError> {
        let toast = response.toast();

        let full_date = match toast.data_date.as_deref() {
            Some(date) if !date.is_empty() => Some(format_long_date(date)?),
            _ => None,
        };

        let (hourly, hourly_total) = positive_hours(&response.hourly_data);

        Ok(Self {
            data_date: toast.data_date.clone(),
            full_date,
            location: toast.location.as_ref().map(|l| l.name.clone()),
            last_updated: toast.last_updated.clone(),
            revenue: toast.today_revenue.clone(),
            transactions: toast.today_transactions,
            average: average_per_transaction(toast.revenue_amount(), toast.today_transactions),
            hourly,
            hourly_total,
        })
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TOAST DATA VERIFICATION")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Data Date: {}", self.data_date.as_deref().unwrap_or("None"))?;
        if let Some(ref full_date) = self.full_date {
            writeln!(f, "Full Date: {}", full_date)?;
        }
        if let Some(ref location) = self.location {
            writeln!(f, "Location: {}", location)?;
        }
        if let Some(ref last_updated) = self.last_updated {
            writeln!(f, "Last Updated: {}", last_updated)?;
        }

        writeln!(f, "\nTOTALS FROM TOAST:")?;
        writeln!(f, "Revenue: ${}", format_revenue(&self.revenue))?;
        writeln!(f, "Transactions: {}", self.transactions)?;
        if let Some(average) = self.average {
            writeln!(f, "Average per transaction: ${:.2}", average)?;
        }

        writeln!(f, "\nHOURLY BREAKDOWN:")?;
        writeln!(f, "Hour      Revenue     Trans")?;
        writeln!(f, "{}", "-".repeat(30))?;
        for entry in &self.hourly {
            writeln!(
                f,
                "{:>6} ${:>8.2}    {:>3}",
                entry.hour, entry.revenue, entry.transactions
            )?;
        }
        writeln!(f, "{}", "-".repeat(30))?;
        writeln!(f, "Total: ${:>8.2}", self.hourly_total)
    }
}

/// スナップショットを取得してレポートを出力
pub fn run(config: &Config) -> Result<(), VerifyError> {
    let client = SnapshotClient::new(
        config.dashboard_url.clone(),
        Duration::from_secs(config.timeout_seconds),
    )?;
    let body = client.fetch_body()?;
    let response = DashboardResponse::parse(&body)?;
    let report = VerificationReport::build(&response)?;

    info!("時間帯別: {}件", report.hourly.len());
    print!("{}", report);

    Ok(())
}

/// `YYYY-MM-DD` を `Weekday, Month DD, YYYY` に変換
pub fn format_long_date(date: &str) -> Result<String, SnapshotError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| SnapshotError::InvalidDate(date.to_string()))?;
    Ok(parsed.format("%A, %B %d, %Y").to_string())
}

/// 取引1件あたりの平均売上（取引0件ならNone）
pub fn average_per_transaction(revenue: f64, transactions: u64) -> Option<f64> {
    if transactions > 0 {
        Some(revenue / transactions as f64)
    } else {
        None
    }
}

/// 売上が正の時間帯を抽出し、その合計を返す
pub fn positive_hours(entries: &[HourlyEntry]) -> (Vec<HourlyEntry>, f64) {
    let mut total = 0.0;
    let mut rows = Vec::new();
    for entry in entries {
        if entry.revenue > 0.0 {
            total += entry.revenue;
            rows.push(entry.clone());
        }
    }
    (rows, total)
}

/// 売上を3桁区切りで整形
///
/// 整数は小数部なし（`1,000`）、小数は最短表記（`1,000.5`, `1,000.0`）
fn format_revenue(amount: &Number) -> String {
    let plain = if amount.is_f64() {
        let value = amount.as_f64().unwrap_or_default();
        if value.fract() == 0.0 {
            format!("{:.1}", value)
        } else {
            value.to_string()
        }
    } else {
        amount.to_string()
    };

    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
