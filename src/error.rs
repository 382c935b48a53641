//! エラー型定義モジュール

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 設定エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML解析エラー: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("コミットメッセージファイル読み込み失敗: {path}: {source}")]
    MessageFileError { path: PathBuf, source: io::Error },

    #[error("無効な設定値: {0}")]
    InvalidValue(String),
}

/// コミットエラー
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("リポジトリが見つかりません: {0}")]
    RepoNotFound(PathBuf),

    #[error("gitの起動に失敗: {0}")]
    SpawnFailed(#[from] io::Error),
}

/// HTTP取得エラー
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTPクライアント初期化失敗: {0}")]
    ClientBuild(reqwest::Error),

    #[error("リクエストがタイムアウトしました: {0}")]
    Timeout(String),

    #[error("リクエスト失敗: {0}")]
    Request(reqwest::Error),

    #[error("HTTPステータスエラー: {status} ({url})")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            let url = e.url().map(|u| u.to_string()).unwrap_or_default();
            FetchError::Timeout(url)
        } else {
            FetchError::Request(e)
        }
    }
}

/// スナップショット解析エラー
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("JSON解析エラー（{path}）: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("無効な日付: {0}")]
    InvalidDate(String),
}

/// 検証エラー
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("取得エラー: {0}")]
    Fetch(#[from] FetchError),

    #[error("スナップショットエラー: {0}")]
    Snapshot(#[from] SnapshotError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue("timeout_seconds must be greater than 0".to_string());
        assert!(err.to_string().contains("無効な設定値"));
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn test_message_file_error_display() {
        let err = ConfigError::MessageFileError {
            path: PathBuf::from("/tmp/missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/tmp/missing.txt"));
    }

    #[test]
    fn test_commit_error_display() {
        let err = CommitError::RepoNotFound(PathBuf::from("/nonexistent/repo"));
        assert!(err.to_string().contains("リポジトリが見つかりません"));
        assert!(err.to_string().contains("/nonexistent/repo"));
    }

    #[test]
    fn test_fetch_status_error_display() {
        let err = FetchError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://127.0.0.1/api/dashboard".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("/api/dashboard"));
    }

    #[test]
    fn test_snapshot_error_display() {
        let err = SnapshotError::InvalidDate("2024/03/15".to_string());
        assert!(err.to_string().contains("無効な日付"));
    }

    #[test]
    fn test_verify_error_wraps_snapshot_error() {
        let err: VerifyError = SnapshotError::InvalidDate("x".to_string()).into();
        assert!(matches!(err, VerifyError::Snapshot(_)));
    }
}
