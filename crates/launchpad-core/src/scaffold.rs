//! Project creation pipeline
//!
//! Runs every step after the answers are in: clone, strip, patch, optional
//! `git init`, optional dependency install. Each step is wrapped by a
//! [`StepObserver`] so a UI can show progress.

use crate::answers::AnswerSet;
use crate::runtime::{CommandRunner, PackageManager};
use crate::templates::{clone, manifest};
use anyhow::Result;
use std::future::Future;
use std::path::Path;
use tracing::{debug, info};

/// Progress reporting for long-running steps
pub trait StepObserver {
    fn start(&mut self, message: &str);
    fn finish(&mut self, message: &str);
    fn fail(&mut self, message: &str);
}

/// Observer that reports nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl StepObserver for Silent {
    fn start(&mut self, _message: &str) {}
    fn finish(&mut self, _message: &str) {}
    fn fail(&mut self, _message: &str) {}
}

/// Run `step` between `start` and `finish`/`fail`. The indicator is always
/// finalized, and on failure that happens before the error is returned.
pub async fn run_step<O, F, T, D>(observer: &mut O, message: &str, step: F, done: D) -> Result<T>
where
    O: StepObserver + ?Sized,
    F: Future<Output = Result<T>>,
    D: FnOnce(&T) -> String,
{
    observer.start(message);
    match step.await {
        Ok(value) => {
            observer.finish(&done(&value));
            Ok(value)
        }
        Err(e) => {
            observer.fail(&format!("{} failed", message.trim_end_matches("...")));
            Err(e)
        }
    }
}

/// Everything the pipeline needs besides the answers
#[derive(Debug, Clone)]
pub struct BuildPlan<'a> {
    pub answers: &'a AnswerSet,
    pub project_dir: &'a Path,
    /// Clone URL (the template's own URL unless overridden)
    pub clone_url: &'a str,
    /// Version written into the manifest
    pub initial_version: &'a str,
}

/// Populate an already-prepared, empty project directory
pub async fn build_project<R, O>(runner: &R, observer: &mut O, plan: &BuildPlan<'_>) -> Result<()>
where
    R: CommandRunner,
    O: StepObserver + ?Sized,
{
    let answers = plan.answers;
    let dir = plan.project_dir;
    info!(template = answers.template.name, dir = %dir.display(), "creating project");

    run_step(
        observer,
        "Cloning template...",
        async {
            clone::clone_template(runner, plan.clone_url, answers.template.branch, dir).await?;
            clone::remove_clone_artifacts(dir).await?;
            manifest::patch_manifest(dir, &answers.project_name, plan.initial_version).await?;
            Ok::<_, anyhow::Error>(clone::count_files(dir))
        },
        |files| {
            format!(
                "Created {} files from the {} template",
                files, answers.template.name
            )
        },
    )
    .await?;

    if answers.should_init_git() {
        run_step(
            observer,
            "Initializing git repository...",
            runner.run("git", &["init"], dir),
            |_| "Initialized git repository".to_string(),
        )
        .await?;
    }

    if let Some(pm) = answers.install_with() {
        let message = format!("Installing dependencies with {}...", pm);
        run_step(
            observer,
            &message,
            install_dependencies(runner, pm, dir),
            |_| format!("Installed dependencies with {}", pm),
        )
        .await?;
    } else {
        debug!("dependency installation skipped");
    }

    Ok(())
}

/// `<manager> install` inside the project directory
pub async fn install_dependencies<R: CommandRunner>(
    runner: &R,
    manager: PackageManager,
    dir: &Path,
) -> Result<()> {
    runner.run(manager.binary(), &["install"], dir).await
}

/// Commands the user runs next.
///
/// `fallback` names the manager to suggest when none was chosen; in that case
/// an explicit install step comes before `run dev`.
pub fn next_steps(answers: &AnswerSet, fallback: PackageManager) -> Vec<String> {
    let mut steps = vec![format!("cd {}", answers.project_name)];
    let manager = match answers.install_with() {
        Some(pm) => pm,
        None => {
            steps.push(format!("{} install", fallback));
            fallback
        }
    };
    steps.push(format!("{} run dev", manager));
    steps
}
