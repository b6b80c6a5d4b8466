//! Tool detection for npm, Yarn, and git

use std::fmt;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// External tools the scaffolder may invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Npm,
    Yarn,
    Git,
}

impl Tool {
    /// Binary name looked up on PATH
    pub fn binary(&self) -> &'static str {
        match self {
            Tool::Npm => "npm",
            Tool::Yarn => "yarn",
            Tool::Git => "git",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tool::Npm => "npm",
            Tool::Yarn => "Yarn",
            Tool::Git => "git",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Package managers offered for dependency installation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    pub const ALL: [PackageManager; 2] = [PackageManager::Npm, PackageManager::Yarn];

    pub fn tool(&self) -> Tool {
        match self {
            PackageManager::Npm => Tool::Npm,
            PackageManager::Yarn => Tool::Yarn,
        }
    }

    pub fn binary(&self) -> &'static str {
        self.tool().binary()
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub tool: Tool,
    pub version: Option<String>,
    pub available: bool,
}

impl ToolInfo {
    pub fn missing(tool: Tool) -> Self {
        Self {
            tool,
            version: None,
            available: false,
        }
    }
}

/// Availability of every tool the flow depends on
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub npm: ToolInfo,
    pub yarn: ToolInfo,
    pub git: ToolInfo,
}

impl Capabilities {
    /// Build capabilities from plain availability flags (no version info)
    pub fn from_flags(npm: bool, yarn: bool, git: bool) -> Self {
        let info = |tool, available| ToolInfo {
            tool,
            version: None,
            available,
        };
        Self {
            npm: info(Tool::Npm, npm),
            yarn: info(Tool::Yarn, yarn),
            git: info(Tool::Git, git),
        }
    }

    pub fn get(&self, tool: Tool) -> &ToolInfo {
        match tool {
            Tool::Npm => &self.npm,
            Tool::Yarn => &self.yarn,
            Tool::Git => &self.git,
        }
    }

    pub fn has(&self, tool: Tool) -> bool {
        self.get(tool).available
    }

    pub fn has_git(&self) -> bool {
        self.git.available
    }

    /// First package manager found on this host, if any
    pub fn first_package_manager(&self) -> Option<PackageManager> {
        PackageManager::ALL
            .into_iter()
            .find(|pm| self.has(pm.tool()))
    }

    /// One-line summary, e.g. `npm (10.2.0), Yarn (not installed), git (git version 2.43.0)`
    pub fn summary(&self) -> String {
        [&self.npm, &self.yarn, &self.git]
            .iter()
            .map(|info| match (&info.version, info.available) {
                (Some(v), true) => format!("{} ({})", info.tool, v),
                (None, true) => format!("{} (unknown)", info.tool),
                _ => format!("{} (not installed)", info.tool),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Check whether a tool answers `--version`; absence is a normal outcome
pub async fn check_tool(tool: Tool) -> ToolInfo {
    let output = Command::new(tool.binary())
        .arg("--version")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await;

    let info = match output {
        Ok(out) if out.status.success() => ToolInfo {
            tool,
            version: Some(String::from_utf8_lossy(&out.stdout).trim().to_string()),
            available: true,
        },
        _ => ToolInfo::missing(tool),
    };

    debug!(tool = tool.binary(), available = info.available, version = ?info.version, "probed tool");
    info
}

/// Probe npm, Yarn, and git concurrently
pub async fn check_tools() -> Capabilities {
    let (npm, yarn, git) = tokio::join!(
        check_tool(Tool::Npm),
        check_tool(Tool::Yarn),
        check_tool(Tool::Git)
    );
    Capabilities { npm, yarn, git }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_package_manager_prefers_npm() {
        let caps = Capabilities::from_flags(true, true, false);
        assert_eq!(caps.first_package_manager(), Some(PackageManager::Npm));

        let caps = Capabilities::from_flags(false, true, false);
        assert_eq!(caps.first_package_manager(), Some(PackageManager::Yarn));

        let caps = Capabilities::from_flags(false, false, true);
        assert_eq!(caps.first_package_manager(), None);
    }

    #[test]
    fn test_summary_marks_missing_tools() {
        let mut caps = Capabilities::from_flags(true, false, true);
        caps.npm.version = Some("10.2.0".to_string());
        assert_eq!(
            caps.summary(),
            "npm (10.2.0), Yarn (not installed), git (unknown)"
        );
    }

    #[tokio::test]
    async fn test_check_tools_reports_every_tool() {
        // Whatever the host has installed, probing never fails
        let caps = check_tools().await;
        assert_eq!(caps.npm.tool, Tool::Npm);
        assert_eq!(caps.yarn.tool, Tool::Yarn);
        assert_eq!(caps.git.tool, Tool::Git);
        for info in [&caps.npm, &caps.yarn, &caps.git] {
            assert_eq!(info.available, info.version.is_some());
        }
    }
}
