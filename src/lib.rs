//! **x3** — XMonad-style workspace handling for i3 and sway.
//!
//! Every invocation takes one snapshot of the window manager's workspaces
//! and outputs, decides which commands bring about the requested layout,
//! and sends them as a single `;`-joined batch.  Nothing is kept between
//! invocations.
//!
//! The order of the emitted commands matters more than the commands
//! themselves: the window manager keeps a per-output workspace history
//! (used by `workspace back_and_forth`) and a focused output, neither of
//! which can be queried.  The emitters in [`chain`] encode the orderings
//! that leave both in the expected state.
//!
//! # Architecture
//!
//! * [`traits::WindowManager`] — abstracts the IPC collaborator (read
//!   workspaces, read outputs, run a command batch).
//! * [`snapshot`] / [`resolver`] — immutable state read and the lookups
//!   over it.
//! * [`chain::CommandChain`] — ordered command builder.
//! * [`ops`] — one function per user intent.
//! * [`switcher::WorkspaceSwitcher`] — ties the above to a window manager.
//!
//! The concrete i3/sway backend lives in [`i3`].
//!
//! Two invocations running at the same time are not coordinated and may
//! race against each other inside the window manager.

pub mod chain;
pub mod command;
pub mod config;
pub mod i3;
pub mod ops;
pub mod resolver;
pub mod snapshot;
pub mod switcher;
pub mod traits;
