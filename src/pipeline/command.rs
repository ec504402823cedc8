//! Command pipeline - runs the retrieval and ingest programs as child processes

use std::path::PathBuf;
use std::process::{Output, Stdio};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::Pipeline;

/// Collaborator backed by external programs
///
/// `ask_command` receives the question as its last argument and prints the
/// answer on stdout. Both commands signal failure with a non-zero exit status
/// and a message on stderr.
pub struct CommandPipeline {
    ask_command: Vec<String>,
    build_command: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandPipeline {
    /// Create a new command pipeline
    pub fn new(
        ask_command: Vec<String>,
        build_command: Vec<String>,
        working_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            ask_command,
            build_command,
            working_dir,
        }
    }

    async fn run(
        &self,
        argv: &[String],
        extra: Option<&str>,
        what: &str,
    ) -> anyhow::Result<Output> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("no {} command configured", what))?;

        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(arg) = extra {
            cmd.arg(arg);
        }
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!("Running {} command: {:?}", what, argv);

        let output = cmd
            .output()
            .await
            .map_err(|e| anyhow::anyhow!("failed to run {}: {}", program, e))?;

        if output.status.success() {
            return Ok(output);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.is_empty() {
            let code = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            anyhow::bail!("{} exited with status {}", program, code);
        }
        anyhow::bail!(stderr)
    }
}

#[async_trait]
impl Pipeline for CommandPipeline {
    fn name(&self) -> &str {
        "command"
    }

    async fn ask(&self, question: &str) -> anyhow::Result<String> {
        let output = self.run(&self.ask_command, Some(question), "ask").await?;
        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }

    async fn build_index(&self) -> anyhow::Result<()> {
        let output = self.run(&self.build_command, None, "build").await?;
        debug!(
            "Build command output: {}",
            String::from_utf8_lossy(&output.stdout).trim_end()
        );
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        // `sh -c script name arg1` binds the appended question to $1
        vec!["sh".into(), "-c".into(), script.into(), "ask".into()]
    }

    #[tokio::test]
    async fn test_ask_returns_stdout() {
        let pipeline = CommandPipeline::new(sh("echo \"answer to: $1\""), vec![], None);
        let answer = pipeline.ask("What is X?").await.unwrap();
        assert_eq!(answer, "answer to: What is X?");
    }

    #[tokio::test]
    async fn test_ask_failure_uses_stderr() {
        let pipeline = CommandPipeline::new(sh("echo boom >&2; exit 3"), vec![], None);
        let err = pipeline.ask("q").await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[tokio::test]
    async fn test_failure_without_stderr_reports_status() {
        let pipeline = CommandPipeline::new(vec![], sh("exit 2"), None);
        let err = pipeline.build_index().await.unwrap_err();
        assert_eq!(err.to_string(), "sh exited with status 2");
    }

    #[tokio::test]
    async fn test_build_success() {
        let pipeline = CommandPipeline::new(vec![], sh("echo indexed 42 chunks"), None);
        pipeline.build_index().await.unwrap();
    }

    #[tokio::test]
    async fn test_build_runs_in_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = CommandPipeline::new(
            vec![],
            sh("touch built.marker"),
            Some(dir.path().to_path_buf()),
        );
        pipeline.build_index().await.unwrap();
        assert!(dir.path().join("built.marker").exists());
    }

    #[tokio::test]
    async fn test_missing_command() {
        let pipeline = CommandPipeline::new(vec![], vec![], None);
        assert_eq!(
            pipeline.ask("q").await.unwrap_err().to_string(),
            "no ask command configured"
        );
        assert_eq!(
            pipeline.build_index().await.unwrap_err().to_string(),
            "no build command configured"
        );
    }

    #[tokio::test]
    async fn test_missing_program() {
        let pipeline = CommandPipeline::new(
            vec!["/nonexistent/backcc-query".into()],
            vec![],
            None,
        );
        let err = pipeline.ask("q").await.unwrap_err().to_string();
        assert!(err.starts_with("failed to run /nonexistent/backcc-query"));
    }
}
