use std::io::ErrorKind;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::errors::ClipboardError;
use crate::traits::Clipboard;

/// Clipboard backed by host command-line tools.
///
/// `read_command` must print the clipboard text on stdout; `write_command`
/// receives the new text on stdin. Both are argv vectors, no shell involved.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    read_command: Vec<String>,
    write_command: Vec<String>,
}

impl CommandClipboard {
    pub fn new(read_command: Vec<String>, write_command: Vec<String>) -> Self {
        Self {
            read_command,
            write_command,
        }
    }

    fn command(argv: &[String]) -> Result<Command, ClipboardError> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| ClipboardError::unavailable("no clipboard command configured"))?;
        let mut command = Command::new(program);
        command.args(args).kill_on_drop(true);
        Ok(command)
    }
}

fn spawn_error(argv: &[String], err: std::io::Error) -> ClipboardError {
    let program = argv.first().map(String::as_str).unwrap_or_default();
    match err.kind() {
        ErrorKind::NotFound => {
            ClipboardError::unavailable(format!("'{}' is not installed", program))
        }
        ErrorKind::PermissionDenied => {
            ClipboardError::permission_denied(format!("cannot execute '{}'", program))
        }
        _ => ClipboardError::Io(err),
    }
}

fn command_failed(argv: &[String], status: std::process::ExitStatus, stderr: &[u8]) -> ClipboardError {
    ClipboardError::CommandFailed {
        command: argv.join(" "),
        status: status.to_string(),
        stderr: String::from_utf8_lossy(stderr).trim().to_string(),
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        let output = Self::command(&self.read_command)?
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| spawn_error(&self.read_command, e))?;

        if !output.status.success() {
            return Err(command_failed(&self.read_command, output.status, &output.stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Self::command(&self.write_command)?
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_error(&self.write_command, e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            // closing stdin signals end of input to the tool
            drop(stdin);
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(command_failed(&self.write_command, output.status, &output.stderr));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "command"
    }
}
