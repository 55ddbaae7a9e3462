//! Subprocess renderer backed by the `docgen` CLI.
//!
//! Invoked as `docgen build -i <input> -o <output> [-m]`; `-m` switches the
//! output to Markdown.

use std::ffi::OsString;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::sync::oneshot;

use crate::traits::{ArtifactFormat, RenderError, RenderOutput, Renderer};

/// Default renderer executable, resolved through `PATH`.
pub const DEFAULT_PROGRAM: &str = "docgen";

/// Renderer that runs the external `docgen` tool.
#[derive(Debug, Clone)]
pub struct DocgenRenderer {
    program: PathBuf,
    launcher_args: Vec<OsString>,
    timeout: Option<Duration>,
}

impl DocgenRenderer {
    /// Create a renderer for the given executable with no timeout.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            launcher_args: Vec::new(),
            timeout: None,
        }
    }

    /// Arguments placed before `build`, for launchers such as `npx docgen`.
    pub fn with_launcher_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.launcher_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Kill the renderer if it runs longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Command-line arguments for one invocation.
    pub fn args(input: &Path, output: &Path, format: ArtifactFormat) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "build".into(),
            "-i".into(),
            input.as_os_str().to_owned(),
            "-o".into(),
            output.as_os_str().to_owned(),
        ];
        if format == ArtifactFormat::Markdown {
            args.push("-m".into());
        }
        args
    }

    fn spawn_error(&self, e: io::Error) -> RenderError {
        RenderError::Spawn {
            program: self.program.display().to_string(),
            message: e.to_string(),
        }
    }
}

impl Default for DocgenRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Renderer for DocgenRenderer {
    fn name(&self) -> &str {
        self.program
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_PROGRAM)
    }

    async fn render(
        &self,
        input: &Path,
        output: &Path,
        format: ArtifactFormat,
    ) -> Result<RenderOutput, RenderError> {
        let args = Self::args(input, output, format);

        tracing::debug!(
            program = %self.program.display(),
            launcher_args = ?self.launcher_args,
            ?args,
            "running renderer"
        );

        // stdout and stderr share one pipe so the log keeps the order it was written in
        let (mut reader, writer) = io::pipe().map_err(|e| self.spawn_error(e))?;
        let stderr_writer = writer.try_clone().map_err(|e| self.spawn_error(e))?;

        let mut command = Command::new(&self.program);
        command
            .args(&self.launcher_args)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(stderr_writer)
            .kill_on_drop(true);

        let mut child = command.spawn().map_err(|e| self.spawn_error(e))?;
        // Release our copies of the write end, otherwise the reader never sees EOF
        drop(command);

        // A detached thread: processes the renderer left behind may keep the
        // pipe open after a timeout, and nothing waits on them.
        let (tx, rx) = oneshot::channel();
        std::thread::spawn(move || {
            let mut buf = Vec::new();
            let result = reader.read_to_end(&mut buf).map(|_| buf);
            let _ = tx.send(result);
        });

        let run = async {
            let status = child
                .wait()
                .await
                .map_err(|e| RenderError::Wait(e.to_string()))?;
            let captured = rx
                .await
                .map_err(|_| RenderError::Wait("output reader stopped".to_string()))?
                .map_err(|e| RenderError::Wait(e.to_string()))?;
            Ok::<_, RenderError>((status, captured))
        };

        let (status, captured) = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, run)
                .await
                .map_err(|_| RenderError::Timeout(timeout))??,
            None => run.await?,
        };

        Ok(RenderOutput {
            output: String::from_utf8_lossy(&captured).into_owned(),
            status: status.code(),
        })
    }
}
