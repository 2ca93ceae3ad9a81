//! Core trait that decouples x3 from any specific window manager or
//! transport mechanism.
//!
//! The i3/sway backend implements it over the IPC socket; tests implement
//! it with recording doubles.  The operations and the
//! [`WorkspaceSwitcher`](crate::switcher::WorkspaceSwitcher) only depend on
//! this abstraction.

use crate::snapshot::{Output, Workspace};

/// Abstraction over a window manager that reports its workspaces and
/// outputs and accepts command batches.
///
/// Every call is a blocking request/reply.  An implementation might talk
/// to i3 via IPC, or it might be a recording stub used in tests.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Return every workspace the window manager knows about, in the
    /// order it reports them.
    fn workspaces(&self) -> Result<Vec<Workspace>, Self::Error>;

    /// Return every output (active or not), in the order the window
    /// manager reports them.
    fn outputs(&self) -> Result<Vec<Output>, Self::Error>;

    /// Run a `;`-joined command batch.
    ///
    /// The reply content is not interpreted by callers; only a failure to
    /// deliver the batch is an error.
    fn run_command(&self, batch: &str) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    //  Mock WindowManager

    /// A test double that records every batch sent to it.
    #[derive(Debug, Default)]
    struct MockWm {
        batches: RefCell<Vec<String>>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    impl WindowManager for MockWm {
        type Error = MockError;

        fn workspaces(&self) -> Result<Vec<Workspace>, MockError> {
            Ok(vec![Workspace {
                name: "1:mail".into(),
                num: 1,
                output: "MOCK-1".into(),
                visible: true,
                focused: true,
            }])
        }

        fn outputs(&self) -> Result<Vec<Output>, MockError> {
            Ok(vec![Output {
                name: "MOCK-1".into(),
                active: true,
                current_workspace: Some("1:mail".into()),
            }])
        }

        fn run_command(&self, batch: &str) -> Result<(), MockError> {
            self.batches.borrow_mut().push(batch.to_string());
            Ok(())
        }
    }

    #[test]
    fn mock_wm_records_batches() {
        let wm = MockWm::default();
        wm.run_command("workspace 2;focus output MOCK-1").unwrap();
        assert_eq!(wm.batches.borrow().len(), 1);
        assert_eq!(wm.batches.borrow()[0], "workspace 2;focus output MOCK-1");
    }

    #[test]
    fn mock_wm_reports_state() {
        let wm = MockWm::default();
        let ws = wm.workspaces().unwrap();
        let outs = wm.outputs().unwrap();
        assert_eq!(ws[0].output, outs[0].name);
        assert_eq!(outs[0].current_workspace.as_deref(), Some("1:mail"));
    }
}
