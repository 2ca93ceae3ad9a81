//! The user-facing operations.
//!
//! Each function reads from a [`WorkspaceResolver`] and appends to a
//! [`CommandChain`]; none of them talk to the window manager, so the
//! emitted order can be asserted directly.  Lookup misses never abort an
//! operation: they either fall back to treating the token as a new
//! workspace name or turn the operation into a no-op, with a warning.

use crate::chain::CommandChain;
use crate::command::{Direction, Layout, Orientation};
use crate::resolver::{display_name, WorkspaceResolver};
use crate::snapshot::Workspace;
use log::{debug, warn};
use std::cmp::Ordering;

/// Show `token` on the focused output, creating it if it does not exist.
pub fn show(resolver: &WorkspaceResolver<'_>, chain: &mut CommandChain, token: &str) {
    let target = match resolver.resolve(token) {
        Ok(ws) => ws,
        Err(e) => {
            debug!("{}, creating {:?}", e, token);
            chain.show_workspace_named(token);
            return;
        }
    };

    let current = match resolver.current() {
        Ok(ws) => ws,
        Err(e) => {
            warn!("{}, showing {:?} without output handling", e, target.name);
            chain.show_workspace(target);
            return;
        }
    };

    if std::ptr::eq(current, target) {
        debug!("{:?} is already focused", target.name);
        return;
    }

    if current.visible && target.visible {
        // Ends focused on current.output already.
        chain.swap_workspaces(current, target);
    } else {
        chain.show_on_output(target, &current.output);
        chain.fix_history(current, target);
        chain.focus_output(&current.output);
    }
}

/// Exchange the workspaces visible on the two active outputs.
///
/// Only defined for exactly two active outputs; anything else is a no-op.
pub fn swap(resolver: &WorkspaceResolver<'_>, chain: &mut CommandChain) {
    let outputs = resolver.active_outputs();
    if outputs.len() != 2 {
        debug!("swap needs 2 active outputs, found {}", outputs.len());
        return;
    }

    let (first, second) = match (
        resolver.on_output(&outputs[0].name),
        resolver.on_output(&outputs[1].name),
    ) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => {
            warn!("{}, not swapping", e);
            return;
        }
    };

    let (primary, secondary) = if first.focused {
        (first, second)
    } else {
        (second, first)
    };
    chain.swap_workspaces(primary, secondary);
}

/// Give the focused workspace number `num`.
///
/// The workspace currently holding `num` receives the focused workspace's
/// old number (or loses its number if the focused one had none).
pub fn bind(resolver: &WorkspaceResolver<'_>, chain: &mut CommandChain, num: i32) {
    if num < 0 {
        warn!("cannot bind negative number {}", num);
        return;
    }
    let current = match resolver.current() {
        Ok(ws) => ws,
        Err(e) => {
            warn!("{}, cannot bind {}", e, num);
            return;
        }
    };
    if current.num == num {
        debug!("{:?} already has number {}", current.name, num);
        return;
    }

    match resolver.by_num(num) {
        Ok(other) => {
            // Renames apply to the focused workspace, so bring it forward.
            chain.show_workspace(other);
            chain.rename_workspace(&numbered(current, display_name(other)));
            if other.output != current.output {
                restore_output(resolver, chain, other);
            }
            chain.show_workspace(current);
        }
        Err(e) => debug!("{}, nothing to displace", e),
    }

    chain.rename_workspace(&format!("{}:{}", num, display_name(current)));
    chain.focus_output(&current.output);
}

/// Re-show whatever `displaced` covered up on its output, if that was a
/// different workspace.
fn restore_output(resolver: &WorkspaceResolver<'_>, chain: &mut CommandChain, displaced: &Workspace) {
    match resolver.on_output(&displaced.output) {
        Ok(ws) if !std::ptr::eq(ws, displaced) => chain.show_workspace(ws),
        Ok(_) => {}
        Err(e) => warn!("{}, leaving {} as is", e, displaced.output),
    }
}

/// `label` prefixed with `ws`'s number, or bare if `ws` is unnumbered.
fn numbered(ws: &Workspace, label: &str) -> String {
    if ws.is_numbered() {
        format!("{}:{}", ws.num, label)
    } else {
        label.to_string()
    }
}

/// Rename the focused workspace, keeping its number.
pub fn rename(resolver: &WorkspaceResolver<'_>, chain: &mut CommandChain, new_name: &str) {
    let name = match resolver.current() {
        Ok(current) => numbered(current, new_name),
        Err(e) => {
            warn!("{}, renaming without number", e);
            new_name.to_string()
        }
    };
    chain.rename_workspace(&name);
}

/// Move the focused container to `token`, creating the workspace if needed.
pub fn move_container(resolver: &WorkspaceResolver<'_>, chain: &mut CommandChain, token: &str) {
    match resolver.resolve(token) {
        Ok(ws) => chain.move_container_to_workspace(&ws.name),
        Err(e) => {
            debug!("{}, moving to new workspace {:?}", e, token);
            chain.move_container_to_workspace(token);
        }
    }
}

/// Pull the neighbour in `direction` into a new split with the focused
/// container.  All five steps always run; the window manager ignores
/// the ones that have no neighbour to act on.
pub fn merge(chain: &mut CommandChain, direction: &Direction, orientation: &Orientation, layout: &Layout) {
    chain.focus_direction(direction);
    chain.split(orientation);
    chain.focus_direction(&direction.inverse());
    chain.move_container_direction(direction);
    chain.layout(layout);
}

/// All workspace names, one per line: numbered ones by number, then the
/// rest by name.
pub fn list(resolver: &WorkspaceResolver<'_>) -> String {
    let mut workspaces: Vec<&Workspace> = resolver.snapshot().workspaces.iter().collect();
    workspaces.sort_by(|a, b| list_order(a, b));
    workspaces
        .iter()
        .map(|ws| ws.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_order(a: &Workspace, b: &Workspace) -> Ordering {
    match (a.is_numbered(), b.is_numbered()) {
        (true, true) => a.num.cmp(&b.num).then_with(|| a.name.cmp(&b.name)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.name.cmp(&b.name),
    }
}

/// Label of the focused workspace, if any.
pub fn current(resolver: &WorkspaceResolver<'_>) -> Option<String> {
    match resolver.current() {
        Ok(ws) => Some(display_name(ws).to_string()),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}
