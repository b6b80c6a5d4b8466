//! Tool detection and external command execution
//!
//! This module provides:
//! - Capability probing for npm, Yarn, and git
//! - A `CommandRunner` abstraction for the clone/init/install steps

pub mod check;
pub mod command;

pub use check::{check_tool, check_tools, Capabilities, PackageManager, Tool, ToolInfo};
pub use command::{display_command, CommandRunner, SystemRunner};
