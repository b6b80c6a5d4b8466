//! Template materialization via `git clone`

use crate::runtime::CommandRunner;
use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::debug;
use walkdir::WalkDir;

/// Version-control metadata directory dropped after cloning
pub const VCS_DIR: &str = ".git";

/// Lockfiles a template may have committed; dropped after cloning
pub const LOCKFILES: &[&str] = &["package-lock.json", "yarn.lock"];

/// Clone `url` at `branch` straight into `target_dir` (which must be empty)
pub async fn clone_template<R: CommandRunner>(
    runner: &R,
    url: &str,
    branch: &str,
    target_dir: &Path,
) -> Result<()> {
    runner
        .run("git", &["clone", "--branch", branch, url, "."], target_dir)
        .await
        .with_context(|| format!("Failed to clone template from {}", url))
}

/// Remove the cloned `.git` directory and any lockfiles, concurrently.
///
/// Paths that are already absent are skipped.
pub async fn remove_clone_artifacts(project_dir: &Path) -> Result<()> {
    let vcs_dir = project_dir.join(VCS_DIR);

    let remove_vcs = async {
        ignore_missing(fs::remove_dir_all(&vcs_dir).await)
            .with_context(|| format!("Failed to remove {}", vcs_dir.display()))
    };

    let remove_lockfiles = async {
        for lockfile in LOCKFILES {
            let path = project_dir.join(lockfile);
            ignore_missing(fs::remove_file(&path).await)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok::<_, anyhow::Error>(())
    };

    tokio::try_join!(remove_vcs, remove_lockfiles)?;
    debug!(dir = %project_dir.display(), "removed clone artifacts");
    Ok(())
}

fn ignore_missing(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Number of regular files under `dir`, not counting anything inside `.git`
pub fn count_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != VCS_DIR)
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    fn cloned_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        stdfs::create_dir_all(root.join(".git/objects")).unwrap();
        stdfs::write(root.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
        stdfs::write(root.join("package.json"), "{}").unwrap();
        stdfs::write(root.join("package-lock.json"), "{}").unwrap();
        stdfs::create_dir_all(root.join("src")).unwrap();
        stdfs::write(root.join("src/main.js"), "").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_remove_clone_artifacts() {
        let dir = cloned_tree();
        remove_clone_artifacts(dir.path()).await.unwrap();

        assert!(!dir.path().join(".git").exists());
        assert!(!dir.path().join("package-lock.json").exists());
        assert!(dir.path().join("package.json").exists());
        assert!(dir.path().join("src/main.js").exists());
    }

    #[tokio::test]
    async fn test_remove_clone_artifacts_tolerates_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::write(dir.path().join("package.json"), "{}").unwrap();

        remove_clone_artifacts(dir.path()).await.unwrap();
        assert!(dir.path().join("package.json").exists());
    }

    #[test]
    fn test_count_files_skips_git() {
        let dir = cloned_tree();
        assert_eq!(count_files(dir.path()), 3);
    }
}
