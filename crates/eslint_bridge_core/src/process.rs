//! Subprocess execution for ESLint.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::LinterError;
use crate::invocation::LintInvocation;

/// Captured output of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when terminated by a signal.
    pub exit_code: Option<i32>,
    /// Everything written to standard output.
    pub stdout: String,
    /// Everything written to standard error.
    pub stderr: String,
}

impl ProcessOutput {
    /// Treats any standard error output as a failed run.
    pub fn into_stdout(self, command: &str) -> Result<String, LinterError> {
        if !self.stderr.is_empty() {
            return Err(LinterError::Process {
                command: command.to_string(),
                exit_code: self.exit_code,
                stderr: self.stderr,
            });
        }
        Ok(self.stdout)
    }
}

/// Runs `invocation` through its shell and buffers both streams until exit.
///
/// The child is killed if `timeout` elapses or the returned future is dropped.
pub async fn execute(
    invocation: &LintInvocation,
    timeout: Duration,
) -> Result<ProcessOutput, LinterError> {
    let start_time = Instant::now();
    let command = invocation.to_string();
    debug!("Executing: {} (cwd {})", command, invocation.working_dir.display());

    let mut cmd = Command::new(&invocation.shell);
    cmd.args(invocation.shell_args())
        .current_dir(&invocation.working_dir)
        .stdin(if invocation.stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|source| LinterError::Spawn {
        command: command.clone(),
        source,
    })?;

    let stdin = child.stdin.take();
    let feed = async {
        if let (Some(text), Some(mut stdin)) = (invocation.stdin.as_deref(), stdin) {
            // A child that exits early closes the pipe; its stderr tells the story.
            if let Err(e) = stdin.write_all(text.as_bytes()).await {
                warn!("Failed to write stdin for `{}`: {}", command, e);
            }
        }
    };
    // Feeding stdin and draining output share one deadline; dropping the
    // future on timeout kills the child.
    let run = async {
        let ((), output) = tokio::join!(feed, child.wait_with_output());
        output
    };

    let waited = tokio::time::timeout(timeout, run).await;
    let output = match waited {
        Ok(result) => result?,
        Err(_) => {
            warn!("`{}` timed out after {:?}", command, timeout);
            return Err(LinterError::Timeout { command, timeout });
        }
    };

    let result = ProcessOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    debug!(
        "`{}` exited with {:?} in {}ms",
        command,
        result.exit_code,
        start_time.elapsed().as_millis()
    );

    Ok(result)
}
