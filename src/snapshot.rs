//! Immutable read of the window manager's workspaces and outputs.
//!
//! A [`WorkspaceSnapshot`] is captured once at the start of an invocation
//! and passed by reference into every lookup and operation.  Operations
//! never write back into it; they describe the desired future state as
//! commands instead.

use crate::traits::WindowManager;
use log::warn;

/// Sentinel `num` for workspaces whose name carries no number.
pub const UNNUMBERED: i32 = -1;

/// One workspace known to the window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Full name, possibly with a numeric prefix (`"3:web"`).
    pub name: String,
    /// Number parsed by the window manager, [`UNNUMBERED`] if none.
    pub num: i32,
    /// Name of the output currently hosting the workspace.
    pub output: String,
    /// Whether this is the workspace displayed on its output.
    pub visible: bool,
    /// Whether this workspace holds input focus.
    pub focused: bool,
}

impl Workspace {
    /// `true` unless the workspace carries the [`UNNUMBERED`] sentinel.
    pub fn is_numbered(&self) -> bool {
        self.num != UNNUMBERED
    }
}

/// A physical display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// Name the window manager uses for the output (e.g. `"DP-1"`).
    pub name: String,
    /// Whether the output is in use.
    pub active: bool,
    /// Name of the workspace presently shown, if any.
    pub current_workspace: Option<String>,
}

/// Workspaces and outputs as reported at capture time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceSnapshot {
    pub workspaces: Vec<Workspace>,
    pub outputs: Vec<Output>,
}

impl WorkspaceSnapshot {
    pub fn new(workspaces: Vec<Workspace>, outputs: Vec<Output>) -> Self {
        Self {
            workspaces,
            outputs,
        }
    }

    /// Read workspaces and outputs from `wm`.
    ///
    /// A failed read degrades to an empty list; every lookup against it
    /// then misses, which each operation tolerates.
    pub fn capture<W: WindowManager>(wm: &W) -> Self {
        let workspaces = wm.workspaces().unwrap_or_else(|e| {
            warn!("failed to read workspaces: {}", e);
            Vec::new()
        });
        let outputs = wm.outputs().unwrap_or_else(|e| {
            warn!("failed to read outputs: {}", e);
            Vec::new()
        });
        Self {
            workspaces,
            outputs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWm;

    #[derive(Debug, thiserror::Error)]
    #[error("socket gone")]
    struct Gone;

    impl WindowManager for FailingWm {
        type Error = Gone;

        fn workspaces(&self) -> Result<Vec<Workspace>, Gone> {
            Err(Gone)
        }

        fn outputs(&self) -> Result<Vec<Output>, Gone> {
            Err(Gone)
        }

        fn run_command(&self, _: &str) -> Result<(), Gone> {
            Err(Gone)
        }
    }

    struct HalfWm;

    impl WindowManager for HalfWm {
        type Error = Gone;

        fn workspaces(&self) -> Result<Vec<Workspace>, Gone> {
            Ok(vec![Workspace {
                name: "web".into(),
                num: UNNUMBERED,
                output: "DP-1".into(),
                visible: true,
                focused: true,
            }])
        }

        fn outputs(&self) -> Result<Vec<Output>, Gone> {
            Err(Gone)
        }

        fn run_command(&self, _: &str) -> Result<(), Gone> {
            Ok(())
        }
    }

    #[test]
    fn failed_reads_degrade_to_empty() {
        let snap = WorkspaceSnapshot::capture(&FailingWm);
        assert!(snap.workspaces.is_empty());
        assert!(snap.outputs.is_empty());
    }

    #[test]
    fn partial_failure_keeps_successful_read() {
        let snap = WorkspaceSnapshot::capture(&HalfWm);
        assert_eq!(snap.workspaces.len(), 1);
        assert!(snap.outputs.is_empty());
    }

    #[test]
    fn unnumbered_sentinel() {
        let ws = Workspace {
            name: "web".into(),
            num: UNNUMBERED,
            output: "DP-1".into(),
            visible: false,
            focused: false,
        };
        assert!(!ws.is_numbered());
        assert!(Workspace { num: 0, ..ws }.is_numbered());
    }
}
