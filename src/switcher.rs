//! The orchestrator that ties snapshot, operations and window manager
//! together.
//!
//! [`WorkspaceSwitcher`] reacts to one [`Command`] at a time: it captures a
//! fresh [`WorkspaceSnapshot`], runs the matching operation from
//! [`ops`](crate::ops) and flushes the resulting [`CommandChain`].

use crate::chain::CommandChain;
use crate::command::Command;
use crate::ops;
use crate::resolver::{MatchPolicy, WorkspaceResolver};
use crate::snapshot::WorkspaceSnapshot;
use crate::traits::WindowManager;
use log::info;

/// Possible errors from the switcher.
#[derive(Debug, thiserror::Error)]
pub enum SwitcherError {
    /// The window manager did not accept the command batch.
    #[error("window manager error: {0}")]
    WindowManager(String),
}

/// Runs commands against a window manager.
///
/// The switcher is generic over any [`WindowManager`] implementation, so
/// it can be driven by a recording double in tests.
///
/// # Typical usage
///
/// ```ignore
/// let wm = I3Wm::new(None)?;
/// let switcher = WorkspaceSwitcher::new(wm);
/// switcher.handle(Command::Show("3".into()))?;
/// ```
pub struct WorkspaceSwitcher<W: WindowManager> {
    wm: W,
    policy: MatchPolicy,
}

impl<W: WindowManager> WorkspaceSwitcher<W> {
    pub fn new(wm: W) -> Self {
        Self {
            wm,
            policy: MatchPolicy::default(),
        }
    }

    /// Set how non-numeric workspace tokens are matched.
    pub fn set_match_policy(&mut self, policy: MatchPolicy) {
        self.policy = policy;
    }

    pub fn window_manager(&self) -> &W {
        &self.wm
    }

    /// Process a single [`Command`].
    ///
    /// Returns the text to print for reporting commands (`List`,
    /// `Current`), `None` otherwise.  The only error is a failure to deliver
    /// the command batch; lookup misses are handled inside the operations.
    pub fn handle(&self, cmd: Command) -> Result<Option<String>, SwitcherError> {
        let snapshot = WorkspaceSnapshot::capture(&self.wm);
        let (chain, report) = self.plan(&cmd, &snapshot);
        chain
            .flush(&self.wm)
            .map_err(|e| SwitcherError::WindowManager(e.to_string()))?;
        Ok(report)
    }

    /// Decide what `cmd` does against `snapshot` without sending anything.
    pub fn plan(&self, cmd: &Command, snapshot: &WorkspaceSnapshot) -> (CommandChain, Option<String>) {
        let resolver = WorkspaceResolver::with_policy(snapshot, self.policy);
        let mut chain = CommandChain::new();
        let mut report = None;

        match cmd {
            Command::Show(name) => {
                info!("show {}", name);
                ops::show(&resolver, &mut chain, name);
            }
            Command::Rename(name) => {
                info!("rename to {}", name);
                ops::rename(&resolver, &mut chain, name);
            }
            Command::Bind(num) => {
                info!("bind {}", num);
                ops::bind(&resolver, &mut chain, *num);
            }
            Command::Swap => {
                info!("swap");
                ops::swap(&resolver, &mut chain);
            }
            Command::Move(name) => {
                info!("move container to {}", name);
                ops::move_container(&resolver, &mut chain, name);
            }
            Command::Merge {
                direction,
                orientation,
                layout,
            } => {
                info!("merge {} {} {}", direction, orientation, layout);
                ops::merge(&mut chain, direction, orientation, layout);
            }
            Command::List => report = Some(ops::list(&resolver)),
            Command::Current => report = ops::current(&resolver),
        }

        (chain, report)
    }
}

//  Tests
