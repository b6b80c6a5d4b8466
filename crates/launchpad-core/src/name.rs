//! Project name validation (npm package name rules for new packages)

use crate::error::ScaffoldError;
use anyhow::Result;

const MAX_NAME_LENGTH: usize = 214;

/// Names npm refuses outright
const RESERVED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

/// Node.js core modules; a package may not shadow them
const CORE_MODULES: &[&str] = &[
    "assert", "async_hooks", "buffer", "child_process", "cluster", "console", "constants",
    "crypto", "dgram", "diagnostics_channel", "dns", "domain", "events", "fs", "http", "http2",
    "https", "inspector", "module", "net", "os", "path", "perf_hooks", "process", "punycode",
    "querystring", "readline", "repl", "stream", "string_decoder", "sys", "timers", "tls",
    "trace_events", "tty", "url", "util", "v8", "vm", "wasi", "worker_threads", "zlib",
];

/// Check `name` (already trimmed) against npm's rules.
/// Returns the reason on failure so prompts can show it inline.
pub fn validate_package_name(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("Project name cannot be empty".to_string());
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(format!(
            "Project name can't be longer than {} characters",
            MAX_NAME_LENGTH
        ));
    }
    if name.starts_with('.') {
        return Err("Project name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        return Err("Project name cannot start with an underscore".to_string());
    }
    if RESERVED_NAMES.contains(&name) {
        return Err(format!("'{}' is not a valid package name", name));
    }
    if CORE_MODULES.contains(&name) {
        return Err(format!("'{}' is a Node.js core module name", name));
    }
    if name.chars().any(|c| c.is_uppercase()) {
        return Err("Project name can no longer contain capital letters".to_string());
    }
    if name.chars().any(|c| "~'!()*".contains(c)) {
        return Err("Project name can no longer contain special characters (\"~'!()*\")".to_string());
    }

    let url_safe = match name.strip_prefix('@') {
        Some(scoped) => match scoped.split_once('/') {
            Some((scope, package)) => is_scope_part(scope) && is_scope_part(package),
            None => false,
        },
        None => is_url_safe(name),
    };
    if !url_safe {
        return Err("Project name can only contain URL-friendly characters".to_string());
    }

    Ok(())
}

/// Non-empty and made only of characters that survive URL encoding unchanged
fn is_url_safe(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "-_.".contains(c))
}

/// Either half of `@scope/package`; a leading period would let `.` or `..`
/// through as a path segment
fn is_scope_part(part: &str) -> bool {
    is_url_safe(part) && !part.starts_with('.')
}

/// Trim and validate a project name, returning the cleaned value
pub fn normalize_project_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    validate_package_name(name).map_err(|reason| ScaffoldError::InvalidProjectName {
        name: name.to_string(),
        reason,
    })?;
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_legal_names() {
        for name in [
            "my-app",
            "app",
            "a.b",
            "some_pkg",
            "x123",
            "@acme/site",
            "@acme/my.site-2",
            "react-dom",
        ] {
            assert!(validate_package_name(name).is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn test_rejects_illegal_names() {
        for name in [
            "",
            "My-App",
            "my app",
            ".hidden",
            "_private",
            "node_modules",
            "favicon.ico",
            "fs",
            "http",
            "crazy!",
            "tilde~",
            "caf\u{e9}",
            "a/b",
            "@scope",
            "@/pkg",
            "@scope/",
            "with%percent",
            " my-app",
        ] {
            assert!(validate_package_name(name).is_err(), "{:?} should be invalid", name);
        }
    }

    #[test]
    fn test_rejects_dot_segments_in_scoped_names() {
        for name in ["@scope/..", "@scope/.", "@../x", "@./x", "@scope/.env", "@.hidden/pkg"] {
            assert!(validate_package_name(name).is_err(), "{:?} should be invalid", name);
        }
        assert!(validate_package_name("@scope/pkg.js").is_ok());
    }

    #[test]
    fn test_rejects_overlong_names() {
        let long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_package_name(&long).is_err());
        assert!(validate_package_name(&long[1..]).is_ok());
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_project_name("  my-app \n").unwrap(), "my-app");
    }

    #[test]
    fn test_normalize_reports_reason() {
        let err = normalize_project_name("My App").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::InvalidProjectName { .. })
        ));
        assert!(err.to_string().contains("capital letters"));
    }
}
