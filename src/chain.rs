//! Ordered builder for window manager command batches.
//!
//! A [`CommandChain`] collects command strings in the order they must run
//! and is flushed exactly once, as a single `;`-joined batch.  The window
//! manager still applies the commands one after another, so the order
//! determines the resulting per-output history and which output ends up
//! focused.
//!
//! The composite emitters ([`swap_workspaces`](CommandChain::swap_workspaces),
//! [`show_on_output`](CommandChain::show_on_output),
//! [`fix_history`](CommandChain::fix_history)) hold the orderings that are
//! known to leave that hidden state correct.

use crate::command::{Direction, Layout, Orientation};
use crate::snapshot::Workspace;
use crate::traits::WindowManager;
use log::debug;

/// Append-only sequence of window manager commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandChain {
    commands: Vec<String>,
}

impl CommandChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands queued so far, in order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The batch as the window manager receives it.
    pub fn batch(&self) -> String {
        self.commands.join(";")
    }

    fn push(&mut self, cmd: String) {
        self.commands.push(cmd);
    }

    //  Primitives

    /// Show `ws` on whichever output hosts it, focusing that output.
    pub fn show_workspace(&mut self, ws: &Workspace) {
        self.show_workspace_named(&ws.name);
    }

    /// Show a workspace by name; the window manager creates it if needed.
    pub fn show_workspace_named(&mut self, name: &str) {
        self.push(format!("workspace {}", name));
    }

    /// Rename the focused workspace.
    pub fn rename_workspace(&mut self, new_name: &str) {
        self.push(format!("rename workspace to {}", new_name));
    }

    /// Move the focused workspace to `output`.
    pub fn move_workspace_to_output(&mut self, output: &str) {
        self.push(format!("move workspace to output {}", output));
    }

    pub fn focus_output(&mut self, output: &str) {
        self.push(format!("focus output {}", output));
    }

    pub fn move_container_to_workspace(&mut self, name: &str) {
        self.push(format!("move container to workspace {}", name));
    }

    pub fn focus_direction(&mut self, d: &Direction) {
        self.push(format!("focus {}", d));
    }

    pub fn split(&mut self, o: &Orientation) {
        self.push(format!("split {}", o));
    }

    pub fn move_container_direction(&mut self, d: &Direction) {
        self.push(format!("move {}", d));
    }

    pub fn layout(&mut self, l: &Layout) {
        self.push(format!("layout {}", l));
    }

    //  Composites

    /// Exchange two visible workspaces across their outputs.
    ///
    /// `a` must be the focused workspace.  It is moved onto `b`'s output,
    /// `b` is shown there so it becomes the focused workspace, `b` is moved
    /// onto `a`'s original output and focus returns to that output.  At no
    /// point is either output left without a visible workspace.
    pub fn swap_workspaces(&mut self, a: &Workspace, b: &Workspace) {
        self.move_workspace_to_output(&b.output);
        self.show_workspace(b);
        self.move_workspace_to_output(&a.output);
        self.focus_output(&a.output);
    }

    /// Show `ws` and, if it lives elsewhere, pull it onto `output`.
    pub fn show_on_output(&mut self, ws: &Workspace, output: &str) {
        self.show_workspace(ws);
        if ws.output != output {
            self.move_workspace_to_output(output);
        }
    }

    /// Re-show `previous` then `shown` so the output's history points back
    /// at `previous`.
    pub fn fix_history(&mut self, previous: &Workspace, shown: &Workspace) {
        self.show_workspace(previous);
        self.show_workspace(shown);
    }

    /// Send the batch to `wm`.  An empty chain sends nothing.
    pub fn flush<W: WindowManager>(self, wm: &W) -> Result<(), W::Error> {
        if self.is_empty() {
            debug!("empty command chain, nothing to send");
            return Ok(());
        }
        let batch = self.batch();
        debug!("sending {:?}", batch);
        wm.run_command(&batch)
    }
}
