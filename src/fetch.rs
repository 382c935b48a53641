//! スナップショット取得モジュール

use crate::error::FetchError;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, info};

/// ダッシュボードAPIクライアント
pub struct SnapshotClient {
    client: Client,
    url: String,
}

impl SnapshotClient {
    /// 新しいSnapshotClientを作成
    pub fn new(url: String, timeout: Duration) -> Result<Self, FetchError> {
        let mut builder = Client::builder().timeout(timeout);
        // ローカルの開発サーバーはプロキシを経由しない
        if is_loopback(&url) {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(FetchError::ClientBuild)?;

        Ok(Self { client, url })
    }

    /// GETを1回発行し、レスポンス本文をテキストで返す
    pub fn fetch_body(&self) -> Result<String, FetchError> {
        info!("スナップショットを取得します: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: self.url.clone(),
            });
        }

        let body = response.text()?;
        debug!("レスポンス受信: {}バイト", body.len());

        Ok(body)
    }
}

/// URLのホストがループバックかどうか
fn is_loopback(url: &str) -> bool {
    match Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_string)) {
        Some(host) => host == "localhost" || host == "127.0.0.1" || host == "[::1]",
        None => false,
    }
}
