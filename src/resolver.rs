//! Pure lookups over a [`WorkspaceSnapshot`].
//!
//! Every lookup returns a reference into the snapshot, so callers can
//! compare results by identity with [`std::ptr::eq`] rather than by name.
//!
//! How a non-numeric token is matched against workspace names is decided
//! by [`MatchPolicy`].  The default, [`MatchPolicy::Substring`], picks the
//! first workspace (in snapshot order) whose name contains the token.  With
//! several candidates that is ambiguous; [`MatchPolicy::ExactThenSubstring`]
//! prefers an exact name before falling back.

use crate::snapshot::{Output, Workspace, WorkspaceSnapshot};
use serde::{Deserialize, Serialize};

/// Errors produced by workspace lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no workspace found for {0:?}")]
    WorkspaceNotFound(String),
}

/// How [`WorkspaceResolver::resolve`] matches a non-numeric token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// First workspace whose name contains the token.
    #[default]
    Substring,
    /// A workspace named exactly like the token, else [`Substring`](Self::Substring).
    ExactThenSubstring,
}

impl MatchPolicy {
    fn find<'a>(self, workspaces: &'a [Workspace], token: &str) -> Option<&'a Workspace> {
        let substring = || workspaces.iter().find(|ws| ws.name.contains(token));
        match self {
            MatchPolicy::Substring => substring(),
            MatchPolicy::ExactThenSubstring => workspaces
                .iter()
                .find(|ws| ws.name == token)
                .or_else(substring),
        }
    }
}

/// Read-only lookups over one snapshot.
#[derive(Debug, Clone, Copy)]
pub struct WorkspaceResolver<'a> {
    snapshot: &'a WorkspaceSnapshot,
    policy: MatchPolicy,
}

impl<'a> WorkspaceResolver<'a> {
    pub fn new(snapshot: &'a WorkspaceSnapshot) -> Self {
        Self::with_policy(snapshot, MatchPolicy::default())
    }

    pub fn with_policy(snapshot: &'a WorkspaceSnapshot, policy: MatchPolicy) -> Self {
        Self { snapshot, policy }
    }

    pub fn snapshot(&self) -> &'a WorkspaceSnapshot {
        self.snapshot
    }

    /// Resolve a user-supplied token.
    ///
    /// Integers select by workspace number; anything else goes through
    /// the [`MatchPolicy`].
    pub fn resolve(&self, token: &str) -> Result<&'a Workspace, ResolveError> {
        match token.parse::<i32>() {
            Ok(num) => self.by_num(num),
            Err(_) => self
                .policy
                .find(&self.snapshot.workspaces, token)
                .ok_or_else(|| ResolveError::WorkspaceNotFound(token.to_string())),
        }
    }

    /// The workspace carrying number `num`.  The unnumbered sentinel never
    /// matches.
    pub fn by_num(&self, num: i32) -> Result<&'a Workspace, ResolveError> {
        self.snapshot
            .workspaces
            .iter()
            .filter(|ws| ws.is_numbered())
            .find(|ws| ws.num == num)
            .ok_or_else(|| ResolveError::WorkspaceNotFound(num.to_string()))
    }

    /// The focused workspace.
    pub fn current(&self) -> Result<&'a Workspace, ResolveError> {
        self.snapshot
            .workspaces
            .iter()
            .find(|ws| ws.focused)
            .ok_or_else(|| ResolveError::WorkspaceNotFound("<focused>".into()))
    }

    /// The workspace visible on `output`.
    pub fn on_output(&self, output: &str) -> Result<&'a Workspace, ResolveError> {
        self.snapshot
            .workspaces
            .iter()
            .find(|ws| ws.visible && ws.output == output)
            .ok_or_else(|| ResolveError::WorkspaceNotFound(format!("<visible on {}>", output)))
    }

    /// Active outputs in reported order.
    pub fn active_outputs(&self) -> Vec<&'a Output> {
        self.snapshot.outputs.iter().filter(|o| o.active).collect()
    }
}

/// The label of a workspace without its `"N:"` prefix.
///
/// Only the first `:` separates the prefix, so `"1:a:b"` yields `"a:b"`.
/// A name without `:` is returned unchanged.
pub fn display_name(ws: &Workspace) -> &str {
    match ws.name.split_once(':') {
        Some((_, label)) => label,
        None => &ws.name,
    }
}
