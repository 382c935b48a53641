//! コミット作成モジュール

use crate::error::CommitError;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use tracing::{debug, info, warn};

/// コミット結果
#[derive(Debug)]
pub enum CommitOutcome {
    /// gitが正常終了した
    Created { stdout: String },
    /// gitが非ゼロで終了した
    Failed { status: ExitStatus, stderr: String },
}

impl CommitOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, CommitOutcome::Created { .. })
    }

    /// 結果を出力先に書き込む
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            CommitOutcome::Created { stdout } => {
                writeln!(out, "Commit created successfully!")?;
                writeln!(out, "{}", stdout)?;
            }
            CommitOutcome::Failed { status, stderr } => {
                writeln!(out, "Error creating commit: git commit failed ({})", status)?;
                writeln!(out, "stderr: {}", stderr)?;
            }
        }
        Ok(())
    }
}

/// コミット作成
pub struct CommitHelper {
    repo_path: PathBuf,
    message: String,
}

impl CommitHelper {
    /// 新しいCommitHelperを作成
    pub fn new(repo_path: PathBuf, message: String) -> Self {
        Self { repo_path, message }
    }

    /// ステージ済みの変更をコミットする
    ///
    /// gitの非ゼロ終了は`CommitOutcome::Failed`として返し、エラーにはしない
    pub fn create(&self) -> Result<CommitOutcome, CommitError> {
        if !self.repo_path.is_dir() {
            return Err(CommitError::RepoNotFound(self.repo_path.clone()));
        }

        info!("コミットを作成します: {}", self.repo_path.display());
        debug!("コミットメッセージ: {}バイト", self.message.len());

        let output = Command::new("git")
            .args(["commit", "-m", &self.message])
            .current_dir(&self.repo_path)
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(CommitOutcome::Created { stdout })
        } else {
            warn!("git commitが失敗しました: {}", output.status);
            // 変更なしの場合、gitはstdoutに理由を出す
            let stderr = if stderr.trim().is_empty() { stdout } else { stderr };
            Ok(CommitOutcome::Failed {
                status: output.status,
                stderr,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    fn create_test_repo() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        git(temp_dir.path(), &["init", "-q"]);
        git(temp_dir.path(), &["config", "user.name", "Test User"]);
        git(temp_dir.path(), &["config", "user.email", "test@example.com"]);
        git(temp_dir.path(), &["config", "commit.gpgsign", "false"]);
        temp_dir
    }

    fn render(outcome: &CommitOutcome) -> String {
        let mut buf = Vec::new();
        outcome.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_commit_staged_changes() {
        let repo = create_test_repo();
        fs::write(repo.path().join("README.md"), "hello\n").unwrap();
        git(repo.path(), &["add", "README.md"]);

        let helper = CommitHelper::new(
            repo.path().to_path_buf(),
            "test: first commit\n\n- body line".to_string(),
        );
        let outcome = helper.create().unwrap();
        assert!(outcome.is_created());

        let output = render(&outcome);
        assert!(output.starts_with("Commit created successfully!\n"));
        assert!(output.contains("test: first commit"));
    }

    #[test]
    fn test_commit_twice_fails_second_time() {
        let repo = create_test_repo();
        fs::write(repo.path().join("README.md"), "hello\n").unwrap();
        git(repo.path(), &["add", "README.md"]);

        let helper = CommitHelper::new(repo.path().to_path_buf(), "test: commit".to_string());
        assert!(helper.create().unwrap().is_created());

        // 新しいステージ済み変更がないため失敗する
        let outcome = helper.create().unwrap();
        assert!(!outcome.is_created());

        let output = render(&outcome);
        assert!(output.contains("Error creating commit:"));
        assert!(output.contains("stderr: "));
        if let CommitOutcome::Failed { stderr, .. } = &outcome {
            assert!(!stderr.trim().is_empty());
        }
    }

    #[test]
    fn test_commit_outside_work_tree_reports_failure() {
        let temp_dir = TempDir::new().unwrap();
        let helper = CommitHelper::new(temp_dir.path().to_path_buf(), "test".to_string());

        let outcome = helper.create().unwrap();
        if let CommitOutcome::Failed { stderr, .. } = &outcome {
            assert!(!stderr.is_empty());
        } else {
            panic!("Expected Failed outcome");
        }
    }

    #[test]
    fn test_missing_repo_path() {
        let helper = CommitHelper::new(PathBuf::from("/nonexistent/repo"), "test".to_string());
        let result = helper.create();
        assert!(matches!(result, Err(CommitError::RepoNotFound(_))));
    }

    #[test]
    fn test_created_output_format() {
        let outcome = CommitOutcome::Created {
            stdout: "[main abc1234] test: commit".to_string(),
        };
        assert_eq!(
            render(&outcome),
            "Commit created successfully!\n[main abc1234] test: commit\n"
        );
    }
}
