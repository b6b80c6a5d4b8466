//! Project directory preparation

use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Absolute project directory: `base.join(project_name)`.
///
/// The result must sit strictly below `base`, since an overwrite removes it.
pub fn resolve_workspace(base: &Path, project_name: &str) -> Result<PathBuf> {
    let relative = Path::new(project_name);
    let segments_ok = project_name
        .split(['/', '\\'])
        .all(|segment| !matches!(segment, "" | "." | ".."));
    let components_ok = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)));

    if !segments_ok || !components_ok {
        return Err(ScaffoldError::InvalidProjectName {
            name: project_name.to_string(),
            reason: format!("must name a directory inside {}", base.display()),
        }
        .into());
    }

    Ok(base.join(relative))
}

/// Make `path` an empty, existing directory.
///
/// If something already exists there, `confirm_overwrite` decides. Nothing on
/// disk is touched before it returns `true`; `false` yields
/// [`ScaffoldError::Cancelled`].
pub async fn prepare_workspace<F>(path: &Path, confirm_overwrite: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<bool>,
{
    let exists = fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to check {}", path.display()))?;

    if exists {
        if !confirm_overwrite(path)? {
            return Err(ScaffoldError::Cancelled.into());
        }

        let metadata = fs::symlink_metadata(path)
            .await
            .with_context(|| format!("Failed to inspect {}", path.display()))?;
        let removed = if metadata.is_dir() {
            fs::remove_dir_all(path).await
        } else {
            fs::remove_file(path).await
        };
        removed.with_context(|| format!("Failed to remove {}", path.display()))?;
        debug!(path = %path.display(), "removed existing project directory");
    }

    fs::create_dir_all(path)
        .await
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    debug!(path = %path.display(), "created project directory");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_creates_missing_directory_with_parents() {
        let base = tempfile::tempdir().unwrap();
        let path = resolve_workspace(base.path(), "@acme/site").unwrap();
        let asked = Cell::new(false);

        prepare_workspace(&path, |_| {
            asked.set(true);
            Ok(true)
        })
        .await
        .unwrap();

        assert!(path.is_dir());
        assert!(!asked.get(), "no prompt for a fresh directory");
    }

    #[test]
    fn test_resolved_directory_stays_below_base() {
        let base = Path::new("/work");
        for name in ["my-app", "@acme/site", "a.b"] {
            let dir = resolve_workspace(base, name).unwrap();
            assert!(dir.starts_with(base) && dir != base, "{} escaped", name);
        }

        for name in ["", ".", "..", "@a/..", "@a/.", "@../x", "a//b", "../x", "/etc"] {
            let err = resolve_workspace(base, name).unwrap_err();
            assert!(
                matches!(
                    err.downcast_ref::<ScaffoldError>(),
                    Some(ScaffoldError::InvalidProjectName { .. })
                ),
                "{:?} should be refused",
                name
            );
        }
    }

    #[test]
    fn test_dot_segment_name_never_reaches_removal() {
        let base = tempfile::tempdir().unwrap();
        std::fs::create_dir(base.path().join("@scope")).unwrap();
        std::fs::write(base.path().join("precious.txt"), "keep").unwrap();

        assert!(crate::name::normalize_project_name("@scope/..").is_err());
        assert!(resolve_workspace(base.path(), "@scope/..").is_err());
        assert!(base.path().join("precious.txt").exists());
        assert!(base.path().join("@scope").is_dir());
    }

    #[tokio::test]
    async fn test_declined_overwrite_leaves_directory_alone() {
        let base = tempfile::tempdir().unwrap();
        let path = resolve_workspace(base.path(), "my-app").unwrap();
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep.txt"), "precious").unwrap();

        let err = prepare_workspace(&path, |_| Ok(false)).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::Cancelled)
        ));
        assert_eq!(
            std::fs::read_to_string(path.join("keep.txt")).unwrap(),
            "precious"
        );
    }

    #[tokio::test]
    async fn test_confirmed_overwrite_empties_directory() {
        let base = tempfile::tempdir().unwrap();
        let path = resolve_workspace(base.path(), "my-app").unwrap();
        std::fs::create_dir_all(path.join("nested/deeper")).unwrap();
        std::fs::write(path.join("old.txt"), "old").unwrap();
        std::fs::write(path.join("nested/deeper/file"), "old").unwrap();

        prepare_workspace(&path, |_| Ok(true)).await.unwrap();

        assert!(path.is_dir());
        assert_eq!(std::fs::read_dir(&path).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_overwrite_replaces_plain_file() {
        let base = tempfile::tempdir().unwrap();
        let path = resolve_workspace(base.path(), "my-app").unwrap();
        std::fs::write(&path, "not a directory").unwrap();

        prepare_workspace(&path, |_| Ok(true)).await.unwrap();
        assert!(path.is_dir());
    }

    #[tokio::test]
    async fn test_prompt_error_propagates_without_mutation() {
        let base = tempfile::tempdir().unwrap();
        let path = resolve_workspace(base.path(), "my-app").unwrap();
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep.txt"), "").unwrap();

        let result = prepare_workspace(&path, |_| anyhow::bail!("terminal went away")).await;
        assert!(result.is_err());
        assert!(path.join("keep.txt").exists());
    }
}
