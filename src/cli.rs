//! CLIモジュール

use crate::commit::CommitHelper;
use crate::config::{CliArgs, Config};
use crate::verify;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Venue Tools - ダッシュボードプロジェクト用の補助ツール
#[derive(Parser, Debug)]
#[command(name = "venue")]
#[command(about = "ダッシュボードプロジェクト用の補助ツール", long_about = None)]
pub struct Cli {
    /// デバッグログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// サブコマンド
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// ステージ済みの変更をコミット
    Commit {
        /// コミットする作業ツリーのパス
        #[arg(short, long)]
        repo: Option<PathBuf>,

        /// コミットメッセージ
        #[arg(short, long, conflicts_with = "message_file")]
        message: Option<String>,

        /// コミットメッセージを読み込むファイル
        #[arg(short = 'F', long)]
        message_file: Option<PathBuf>,
    },
    /// ダッシュボードのToastデータを取得して表示
    Verify {
        /// ダッシュボードAPIのURL
        #[arg(short, long)]
        url: Option<String>,

        /// HTTPタイムアウト（秒）
        #[arg(short, long)]
        timeout: Option<u64>,
    },
}

/// CLIエントリポイント
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Commit {
            repo,
            message,
            message_file,
        } => {
            let cli_args = CliArgs {
                repo,
                message,
                message_file,
                ..Default::default()
            };
            let config = Config::load(&cli_args)?;

            let helper = CommitHelper::new(config.repo_path, config.commit_message);
            // gitの失敗は報告のみで、終了コードには反映しない
            let outcome = helper.create()?;
            outcome.write_to(&mut io::stdout().lock())?;
            if outcome.is_created() {
                info!("コミットを作成しました");
            }
        }
        Commands::Verify { url, timeout } => {
            let cli_args = CliArgs {
                url,
                timeout,
                ..Default::default()
            };
            let config = Config::load(&cli_args)?;
            verify::run(&config)?;
        }
    }

    Ok(())
}
