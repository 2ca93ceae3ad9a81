//! Commands and types used throughout x3.
//!
//! [`Command`] describes every intent the tool can act on; [`Direction`],
//! [`Orientation`] and [`Layout`] are the closed vocabularies used by
//! [`Command::Merge`].
//!
//! Parsing those vocabularies never fails.  An unrecognised token is kept
//! verbatim in the `Other` variant and rendered unchanged, so the window
//! manager (not x3) gets to reject it.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Container focus / move direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    Other(String),
}

impl Direction {
    /// The opposite direction.  An unrecognised direction has an empty
    /// inverse.
    pub fn inverse(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Other(_) => Direction::Other(String::new()),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Other(s) => f.write_str(s),
        }
    }
}

impl FromStr for Direction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "left" => Direction::Left,
            "right" => Direction::Right,
            "up" => Direction::Up,
            "down" => Direction::Down,
            other => Direction::Other(other.to_string()),
        })
    }
}

/// Split orientation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Other(String),
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Other(s) => f.write_str(s),
        }
    }
}

impl FromStr for Orientation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "horizontal" => Orientation::Horizontal,
            "vertical" => Orientation::Vertical,
            other => Orientation::Other(other.to_string()),
        })
    }
}

/// Container layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Layout {
    Default,
    Tabbed,
    Stacking,
    Other(String),
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Default => write!(f, "default"),
            Layout::Tabbed => write!(f, "tabbed"),
            Layout::Stacking => write!(f, "stacking"),
            Layout::Other(s) => f.write_str(s),
        }
    }
}

impl FromStr for Layout {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "default" => Layout::Default,
            "tabbed" => Layout::Tabbed,
            "stacking" => Layout::Stacking,
            other => Layout::Other(other.to_string()),
        })
    }
}

/// Every intent x3 can act on.
///
/// Produced by the command line and consumed by the
/// [`WorkspaceSwitcher`](crate::switcher::WorkspaceSwitcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show (or create) a workspace on the focused output.
    Show(String),

    /// Rename the focused workspace, keeping its number.
    Rename(String),

    /// Give the focused workspace number `n`, exchanging numbers with the
    /// workspace that currently holds it.
    Bind(i32),

    /// Exchange the workspaces visible on the two active outputs.
    Swap,

    /// Print all workspace names, numbered ones first.
    List,

    /// Print the label of the focused workspace.
    Current,

    /// Move the focused container to a workspace (created if absent).
    Move(String),

    /// Merge the focused container with its neighbour in a new split.
    Merge {
        direction: Direction,
        orientation: Orientation,
        layout: Layout,
    },
}
