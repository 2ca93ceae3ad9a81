//! [`WindowManager`] implementation backed by i3 IPC.
//!
//! Every request opens a short-lived connection to the socket found at
//! (in order) the configured path, `$I3SOCK`, `$SWAYSOCK`, or the output of
//! `i3 --get-socketpath`.

use super::message::{read_message, write_message, MessageType};
use crate::snapshot::{Output, Workspace};
use crate::traits::WindowManager;
use log::{debug, warn};
use serde::Deserialize;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

/// i3/sway-backed window manager.
pub struct I3Wm {
    socket: PathBuf,
}

/// Errors that can occur when talking to i3.
#[derive(Debug, thiserror::Error)]
pub enum I3Error {
    #[error("i3 IPC io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("i3 IPC json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("i3 IPC protocol error: {0}")]
    Protocol(String),
    #[error("no i3 IPC socket found (set I3SOCK or SWAYSOCK)")]
    NoSocket,
}

impl I3Wm {
    /// Locate the IPC socket.
    ///
    /// No connection is opened eagerly; each method call opens its own.
    pub fn new(configured: Option<&Path>) -> Result<Self, I3Error> {
        let socket = socket_path(configured)?;
        debug!("using i3 socket {}", socket.display());
        Ok(Self { socket })
    }

    /// Connect to an explicit socket path.
    pub fn with_socket(socket: impl AsRef<Path>) -> Self {
        Self {
            socket: socket.as_ref().to_path_buf(),
        }
    }

    /// Send one request and return the reply payload.
    fn request(&self, kind: MessageType, payload: &str) -> Result<String, I3Error> {
        let mut stream = UnixStream::connect(&self.socket)?;
        write_message(&mut stream, kind, payload)?;
        let (reply_kind, reply) = read_message(&mut stream)?;
        if reply_kind != kind as u32 {
            return Err(I3Error::Protocol(format!(
                "expected reply type {}, got {}",
                kind as u32, reply_kind
            )));
        }
        Ok(reply)
    }
}

/// Resolve the IPC socket path.
fn socket_path(configured: Option<&Path>) -> Result<PathBuf, I3Error> {
    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }
    for var in ["I3SOCK", "SWAYSOCK"] {
        if let Ok(path) = std::env::var(var) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
    }
    ask_i3_for_socket()
}

/// Fall back to `i3 --get-socketpath`, which reads the path from the X root
/// window.
fn ask_i3_for_socket() -> Result<PathBuf, I3Error> {
    let out = std::process::Command::new("i3")
        .arg("--get-socketpath")
        .output()
        .map_err(|e| {
            debug!("i3 --get-socketpath: {}", e);
            I3Error::NoSocket
        })?;
    let path = String::from_utf8_lossy(&out.stdout).trim().to_string();
    if !out.status.success() || path.is_empty() {
        return Err(I3Error::NoSocket);
    }
    Ok(PathBuf::from(path))
}

//  Minimal serde structs for the JSON we care about

/// Subset of an element of the `GET_WORKSPACES` reply.
#[derive(Deserialize)]
struct WorkspaceJson {
    num: i32,
    name: String,
    visible: bool,
    focused: bool,
    output: String,
}

/// Subset of an element of the `GET_OUTPUTS` reply.
#[derive(Deserialize)]
struct OutputJson {
    name: String,
    active: bool,
    current_workspace: Option<String>,
}

/// One element of the `RUN_COMMAND` reply.
#[derive(Deserialize)]
struct CommandResultJson {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

fn parse_workspaces(json: &str) -> Result<Vec<Workspace>, I3Error> {
    let workspaces: Vec<WorkspaceJson> = serde_json::from_str(json)?;
    Ok(workspaces
        .into_iter()
        .map(|w| Workspace {
            name: w.name,
            num: w.num,
            output: w.output,
            visible: w.visible,
            focused: w.focused,
        })
        .collect())
}

fn parse_outputs(json: &str) -> Result<Vec<Output>, I3Error> {
    let outputs: Vec<OutputJson> = serde_json::from_str(json)?;
    Ok(outputs
        .into_iter()
        .map(|o| Output {
            name: o.name,
            active: o.active,
            current_workspace: o.current_workspace,
        })
        .collect())
}

/// Log failed commands.  The outcome is informational only.
fn report_command_results(json: &str) {
    match serde_json::from_str::<Vec<CommandResultJson>>(json) {
        Ok(results) => {
            for (i, r) in results.iter().enumerate().filter(|(_, r)| !r.success) {
                warn!(
                    "command #{} failed: {}",
                    i,
                    r.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
        Err(e) => debug!("unparseable command reply {:?}: {}", json, e),
    }
}

//  WindowManager implementation

impl WindowManager for I3Wm {
    type Error = I3Error;

    fn workspaces(&self) -> Result<Vec<Workspace>, Self::Error> {
        parse_workspaces(&self.request(MessageType::GetWorkspaces, "")?)
    }

    fn outputs(&self) -> Result<Vec<Output>, Self::Error> {
        parse_outputs(&self.request(MessageType::GetOutputs, "")?)
    }

    fn run_command(&self, batch: &str) -> Result<(), Self::Error> {
        let reply = self.request(MessageType::RunCommand, batch)?;
        report_command_results(&reply);
        Ok(())
    }
}
