//! Subprocess supervision with a wall-clock timeout
//!
//! Output is read incrementally into shared buffers so that whatever the
//! engine printed before a timeout is still returned.

use crate::{ExecutionOutcome, ExecutorError, ExecutorResult};
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use subagents_common::constants::{TERMINATION_GRACE_MS, TIMEOUT_EXIT_CODE};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::timeout;

/// How long to wait for output readers once the process is gone
const READER_DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Owns a running child and kills its process group if dropped early
pub struct ProcessGuard {
    child: Option<Child>,
    program: String,
}

impl ProcessGuard {
    /// Create a new process guard from a tokio Child process
    pub fn new(child: Child, program: impl Into<String>) -> Self {
        Self {
            child: Some(child),
            program: program.into(),
        }
    }

    /// Wait for the process to exit; cancel safe
    pub async fn wait(&mut self) -> std::io::Result<ExitStatus> {
        let child = self
            .child
            .as_mut()
            .ok_or_else(|| std::io::Error::other("process already reaped"))?;
        let status = child.wait().await?;
        self.child = None;
        Ok(status)
    }

    /// SIGTERM the process group, then SIGKILL it if it outlives `grace`
    pub async fn terminate(&mut self, grace: Duration) {
        let Some(mut child) = self.child.take() else {
            return;
        };

        tracing::debug!("Sending SIGTERM to {}", self.program);
        send_terminate(&mut child);

        match timeout(grace, child.wait()).await {
            Ok(_) => tracing::debug!("{} exited after SIGTERM", self.program),
            Err(_) => {
                tracing::warn!(
                    "{} ignored SIGTERM for {}ms, killing",
                    self.program,
                    grace.as_millis()
                );
                force_kill(&mut child);
                if let Err(e) = child.wait().await {
                    tracing::error!("Failed to reap {}: {}", self.program, e);
                }
            }
        }
    }
}

impl Drop for ProcessGuard {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            tracing::warn!("ProcessGuard dropping with active process: {}", self.program);
            force_kill(&mut child);
        }
    }
}

#[cfg(unix)]
fn signal_group(child: &Child, signal: nix::sys::signal::Signal) {
    use nix::sys::signal::killpg;
    use nix::unistd::Pid;

    if let Some(pid) = child.id() {
        if let Err(e) = killpg(Pid::from_raw(pid as i32), signal) {
            tracing::debug!("killpg({}, {:?}) failed: {}", pid, signal, e);
        }
    }
}

#[cfg(unix)]
fn send_terminate(child: &mut Child) {
    signal_group(child, nix::sys::signal::Signal::SIGTERM);
}

#[cfg(not(unix))]
fn send_terminate(child: &mut Child) {
    let _ = child.start_kill();
}

fn force_kill(child: &mut Child) {
    #[cfg(unix)]
    signal_group(child, nix::sys::signal::Signal::SIGKILL);
    let _ = child.start_kill();
}

/// Exit code, or 128 + signal number for a signal-terminated process
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    -1
}

fn spawn_reader<R>(stream: Option<R>, buffer: Arc<Mutex<Vec<u8>>>) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let Some(mut stream) = stream else {
            return;
        };
        let mut chunk = [0u8; 8192];
        loop {
            match stream.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => buffer.lock().await.extend_from_slice(&chunk[..n]),
            }
        }
    })
}

async fn drain(reader: JoinHandle<()>, buffer: &Mutex<Vec<u8>>) -> String {
    if timeout(READER_DRAIN_TIMEOUT, reader).await.is_err() {
        tracing::debug!("Output reader still open after process exit");
    }
    String::from_utf8_lossy(&buffer.lock().await).into_owned()
}

/// Run `command` to completion or until `limit` elapses
///
/// On timeout the process group receives SIGTERM, then SIGKILL after a grace
/// period, and the outcome reports exit code 124 with whatever output was
/// captured so far.
pub async fn run_with_timeout(
    mut command: std::process::Command,
    limit: Duration,
) -> ExecutorResult<ExecutionOutcome> {
    let program = command.get_program().to_string_lossy().into_owned();

    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // Own process group so timeouts reach the engine's children too
        command.process_group(0);
    }
    let mut command = Command::from(command);
    command.kill_on_drop(true);

    let start = Instant::now();
    let mut child = command.spawn().map_err(|source| {
        tracing::error!("Failed to spawn '{}': {}", program, source);
        ExecutorError::Spawn {
            program: program.clone(),
            source,
        }
    })?;

    let stdout = Arc::new(Mutex::new(Vec::new()));
    let stderr = Arc::new(Mutex::new(Vec::new()));
    let stdout_reader = spawn_reader(child.stdout.take(), stdout.clone());
    let stderr_reader = spawn_reader(child.stderr.take(), stderr.clone());

    let mut guard = ProcessGuard::new(child, program.clone());
    let exit_code = match timeout(limit, guard.wait()).await {
        Ok(status) => exit_code_of(status?),
        Err(_) => {
            tracing::warn!(
                "⏱️ {} timed out after {}ms, terminating",
                program,
                limit.as_millis()
            );
            guard
                .terminate(Duration::from_millis(TERMINATION_GRACE_MS))
                .await;
            TIMEOUT_EXIT_CODE
        }
    };

    let stdout = drain(stdout_reader, &stdout).await;
    let stderr = drain(stderr_reader, &stderr).await;
    let execution_time_ms = start.elapsed().as_millis() as u64;

    Ok(ExecutionOutcome::new(
        stdout,
        stderr,
        exit_code,
        execution_time_ms,
    ))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> std::process::Command {
        let mut command = std::process::Command::new("sh");
        command.arg("-c").arg(script);
        command
    }

    #[tokio::test]
    async fn test_captures_output_and_exit_code() {
        let outcome = run_with_timeout(sh("echo out; echo err >&2; exit 3"), Duration::from_secs(10))
            .await
            .unwrap();
        assert_eq!(outcome.stdout, "out\n");
        assert_eq!(outcome.stderr, "err\n");
        assert_eq!(outcome.exit_code, 3);
        assert!(outcome.has_result);
    }

    #[tokio::test]
    async fn test_timeout_keeps_partial_output() {
        let outcome = run_with_timeout(sh("echo started; sleep 30"), Duration::from_millis(500))
            .await
            .unwrap();
        assert_eq!(outcome.exit_code, TIMEOUT_EXIT_CODE);
        assert_eq!(outcome.stdout, "started\n");
        assert!(outcome.timed_out());
        assert!(outcome.execution_time_ms < 10_000);
    }

    #[tokio::test]
    async fn test_sigterm_maps_to_143() {
        let outcome = run_with_timeout(sh("echo partial; kill -TERM $$"), Duration::from_secs(10))
            .await
            .unwrap();
        assert_eq!(outcome.exit_code, 143);
        assert_eq!(outcome.stdout, "partial\n");
    }

    #[tokio::test]
    async fn test_spawn_failure() {
        let error = run_with_timeout(
            std::process::Command::new("/nonexistent/engine-binary"),
            Duration::from_secs(1),
        )
        .await
        .unwrap_err();
        assert!(matches!(error, ExecutorError::Spawn { .. }));
    }

    #[test]
    fn test_exit_code_of_signal() {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(exit_code_of(ExitStatus::from_raw(15)), 143);
        assert_eq!(exit_code_of(ExitStatus::from_raw(2 << 8)), 2);
    }
}
