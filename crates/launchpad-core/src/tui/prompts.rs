//! Charm-style CLI prompts using cliclack

use crate::answers::{collect_answers, AnswerSet, Choice, DraftAnswers, Prompter, Validator};
use crate::error::ScaffoldError;
use crate::name::normalize_project_name;
use crate::product::ProductConfig;
use crate::runtime::{check_tools, Capabilities, PackageManager, SystemRunner};
use crate::scaffold::{build_project, BuildPlan, StepObserver};
use crate::templates::{find_template, resolve_clone_url};
use crate::workspace::{prepare_workspace, resolve_workspace};
use anyhow::{Context, Result};
use cliclack::ProgressBar;
use colored::Colorize;
use std::io;
use std::path::Path;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; asked interactively when absent
    pub name: Option<String>,

    /// Template name to use
    pub template: Option<String>,
}

/// Prompt backend rendering through cliclack
#[derive(Debug, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn text(&mut self, prompt: &str, placeholder: &str, validate: Validator) -> io::Result<String> {
        let input: String = cliclack::input(prompt)
            .placeholder(placeholder)
            .validate(move |input: &String| validate(input.trim()))
            .interact()?;
        Ok(input.trim().to_string())
    }

    fn select(&mut self, prompt: &str, choices: &[Choice]) -> io::Result<usize> {
        let mut select = cliclack::select(prompt);
        for (idx, choice) in choices.iter().enumerate() {
            let label = if choice.enabled {
                choice.label.clone()
            } else {
                choice.label.dimmed().to_string()
            };
            select = select.item(idx, label, &choice.hint);
        }
        // Start on the first selectable entry
        if let Some(first) = choices.iter().position(|c| c.enabled) {
            select = select.initial_value(first);
        }
        select.interact()
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        cliclack::confirm(prompt).initial_value(default).interact()
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::warning(message)
    }
}

/// Shows one spinner per pipeline step
#[derive(Default)]
pub struct SpinnerObserver {
    current: Option<ProgressBar>,
}

impl StepObserver for SpinnerObserver {
    fn start(&mut self, message: &str) {
        let spinner = cliclack::spinner();
        spinner.start(message);
        self.current = Some(spinner);
    }

    fn finish(&mut self, message: &str) {
        if let Some(spinner) = self.current.take() {
            spinner.stop(message);
        }
    }

    fn fail(&mut self, message: &str) {
        if let Some(spinner) = self.current.take() {
            spinner.error(message);
        }
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(format!("create-{}", config.name()))?;

    // Step 1: Probe tools
    let caps = detect_tools().await?;

    // Step 2: Collect answers (flags pre-fill and skip their prompts)
    let draft = prefill(config, &args)?;
    let answers = collect_answers(&mut CliclackPrompter, &caps, config.templates(), draft)?;

    // Step 3: Prepare the project directory
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let project_dir = resolve_workspace(&cwd, &answers.project_name)?;
    prepare_workspace(&project_dir, confirm_overwrite).await?;

    // Step 4: Clone, patch, init, install
    let clone_url = resolve_clone_url(&answers.template, config.template_url_env());
    if clone_url != answers.template.url {
        cliclack::log::info(format!(
            "Using template URL from {}: {}",
            config.template_url_env(),
            clone_url
        ))?;
    }

    let plan = BuildPlan {
        answers: &answers,
        project_dir: &project_dir,
        clone_url: &clone_url,
        initial_version: config.initial_version(),
    };
    build_project(&SystemRunner, &mut SpinnerObserver::default(), &plan).await?;

    // Step 5: Show next steps
    print_next_steps(config, &answers, &caps)?;

    Ok(())
}

/// Print how the run ended and return the process exit status.
///
/// Cancellation is not a failure: it prints a notice and yields 0. A failed
/// external command yields that command's exit code.
pub fn report_outcome(result: Result<()>) -> i32 {
    let err = match result {
        Ok(()) => return 0,
        Err(err) => err,
    };

    match err.downcast_ref::<ScaffoldError>() {
        Some(ScaffoldError::Cancelled) => {
            let _ = cliclack::outro_cancel("Operation cancelled");
            0
        }
        known => {
            let _ = cliclack::log::error(format!("{:#}", err));
            let _ = cliclack::outro_cancel("Project setup failed");
            known.map(ScaffoldError::exit_code).unwrap_or(1)
        }
    }
}

async fn detect_tools() -> Result<Capabilities> {
    let spinner = cliclack::spinner();
    spinner.start("Checking tools...");
    let caps = check_tools().await;
    spinner.stop("Tool check complete");
    cliclack::log::info(format!("Detected tools: {}", caps.summary()))?;
    Ok(caps)
}

fn prefill<C: ProductConfig>(config: &C, args: &CreateArgs) -> Result<DraftAnswers> {
    let mut draft = DraftAnswers::default();

    if let Some(name) = &args.name {
        let name = normalize_project_name(name)?;
        cliclack::log::info(format!("Project name: {}", name))?;
        draft.project_name = Some(name);
    }

    if let Some(template) = &args.template {
        let template = find_template(config.templates(), template)?;
        cliclack::log::info(format!(
            "Using template: {} - {}",
            template.name, template.description
        ))?;
        draft.template = Some(template);
    }

    Ok(draft)
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    cliclack::log::warning(format!("{} already exists", path.display()))?;
    cliclack::confirm("Remove its contents and continue?")
        .initial_value(false)
        .interact()
        .map_err(ScaffoldError::from_prompt)
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    answers: &AnswerSet,
    caps: &Capabilities,
) -> Result<()> {
    let fallback = caps
        .first_package_manager()
        .unwrap_or(PackageManager::Npm);
    let steps = config.next_steps(answers, fallback);

    cliclack::log::success(format!(
        "Your {} project {} is ready",
        config.display_name(),
        answers.project_name.bold()
    ))?;

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }

    println!();
    cliclack::outro("Happy coding!")?;

    Ok(())
}
