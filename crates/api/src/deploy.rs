//! Source pull triggered by a verified push webhook.
//!
//! Runs `git pull` in the deployment checkout and reports the outcome. The
//! webhook handler only sees the [`SourcePuller`] trait so tests can swap in
//! a recording fake.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;

/// Why a pull did not complete.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("failed to start git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git pull did not finish within {0:?}")]
    Timeout(Duration),

    #[error("git pull exited with status {code}: {stderr}")]
    Failed { code: i32, stderr: String },
}

/// Brings the running checkout up to date.
#[async_trait]
pub trait SourcePuller: Send + Sync {
    /// Pull the latest source. Returns the tool's standard output.
    async fn pull(&self) -> Result<String, DeployError>;
}

/// [`SourcePuller`] that shells out to `git pull`.
#[derive(Debug, Clone)]
pub struct GitPuller {
    repo_path: PathBuf,
    timeout: Duration,
}

impl GitPuller {
    pub fn new(repo_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            repo_path: repo_path.into(),
            timeout,
        }
    }
}

#[async_trait]
impl SourcePuller for GitPuller {
    async fn pull(&self) -> Result<String, DeployError> {
        let start = Instant::now();
        tracing::info!(repo = %self.repo_path.display(), "Executing git pull");

        // Dropping the output future on timeout kills the child.
        let output = tokio::time::timeout(
            self.timeout,
            Command::new("git")
                .arg("pull")
                .current_dir(&self.repo_path)
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| DeployError::Timeout(self.timeout))??;

        let elapsed_ms = start.elapsed().as_millis() as u64;
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if output.status.success() {
            tracing::info!(elapsed_ms, output = %stdout, "git pull succeeded");
            Ok(stdout)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let code = output.status.code().unwrap_or(-1);
            tracing::error!(elapsed_ms, code, stderr = %stderr, "git pull failed");
            Err(DeployError::Failed { code, stderr })
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn test_missing_checkout_is_reported() {
        let puller = GitPuller::new(
            "/nonexistent/spielplan-checkout",
            Duration::from_secs(5),
        );
        // Either git is not installed or the directory is missing; both
        // surface as a spawn failure rather than a panic.
        assert_matches!(puller.pull().await, Err(DeployError::Spawn(_)));
    }
}
