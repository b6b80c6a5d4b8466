//! Interactive answer collection
//!
//! The questions form a fixed, ordered list. Whether a question is asked is a
//! pure function of the detected tools and the answers gathered so far, so the
//! whole flow is one pass over [`QUESTIONS`].

use crate::error::ScaffoldError;
use crate::name::validate_package_name;
use crate::runtime::{Capabilities, PackageManager};
use crate::templates::TemplateDescriptor;
use anyhow::{Context, Result};
use std::io;
use tracing::debug;

/// One entry of a single-select prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub hint: String,
    /// Disabled choices are shown but cannot be picked
    pub enabled: bool,
}

/// Validator used by free-text prompts; `Err` carries the inline message
pub type Validator = fn(&str) -> std::result::Result<(), String>;

/// Prompt backend. Errors of kind [`io::ErrorKind::Interrupted`] mean the user
/// cancelled.
pub trait Prompter {
    /// Free text; implementations re-ask until `validate` accepts the trimmed input
    fn text(&mut self, prompt: &str, placeholder: &str, validate: Validator)
        -> io::Result<String>;

    /// Single select; returns the index into `choices`
    fn select(&mut self, prompt: &str, choices: &[Choice]) -> io::Result<usize>;

    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool>;

    fn warn(&mut self, message: &str) -> io::Result<()>;
}

/// Questions in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    ProjectName,
    Template,
    InstallDependencies,
    PackageManager,
    GitInit,
}

pub const QUESTIONS: [Question; 5] = [
    Question::ProjectName,
    Question::Template,
    Question::InstallDependencies,
    Question::PackageManager,
    Question::GitInit,
];

impl Question {
    /// Whether this question is part of the flow given what is known so far
    pub fn applies(&self, draft: &DraftAnswers, caps: &Capabilities) -> bool {
        match self {
            Question::PackageManager => draft.install_dependencies == Some(true),
            Question::GitInit => caps.has_git(),
            _ => true,
        }
    }

    fn is_answered(&self, draft: &DraftAnswers) -> bool {
        match self {
            Question::ProjectName => draft.project_name.is_some(),
            Question::Template => draft.template.is_some(),
            Question::InstallDependencies => draft.install_dependencies.is_some(),
            Question::PackageManager => draft.package_manager.is_some(),
            Question::GitInit => draft.git_init.is_some(),
        }
    }
}

/// Answers gathered so far; fields may be pre-filled from the command line
#[derive(Debug, Clone, Default)]
pub struct DraftAnswers {
    pub project_name: Option<String>,
    pub template: Option<TemplateDescriptor>,
    pub install_dependencies: Option<bool>,
    pub package_manager: Option<PackageManager>,
    pub git_init: Option<bool>,
}

/// Complete answer set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    pub project_name: String,
    pub template: TemplateDescriptor,
    pub install_dependencies: bool,
    /// Present only when `install_dependencies` is true
    pub package_manager: Option<PackageManager>,
    /// Present only when git was detected
    pub git_init: Option<bool>,
}

impl AnswerSet {
    pub fn should_init_git(&self) -> bool {
        self.git_init == Some(true)
    }

    /// Package manager to run `install` with, if installation was requested
    pub fn install_with(&self) -> Option<PackageManager> {
        if self.install_dependencies {
            self.package_manager
        } else {
            None
        }
    }
}

impl DraftAnswers {
    fn finish(self) -> Result<AnswerSet> {
        let install_dependencies = self.install_dependencies.unwrap_or(false);
        Ok(AnswerSet {
            project_name: self.project_name.context("Project name was not answered")?,
            template: self.template.context("Template was not answered")?,
            install_dependencies,
            package_manager: self.package_manager.filter(|_| install_dependencies),
            git_init: self.git_init,
        })
    }
}

/// Run through [`QUESTIONS`], asking each one that applies and is not pre-filled
pub fn collect_answers<P: Prompter>(
    prompter: &mut P,
    caps: &Capabilities,
    templates: &[TemplateDescriptor],
    mut draft: DraftAnswers,
) -> Result<AnswerSet> {
    for question in QUESTIONS {
        if !question.applies(&draft, caps) || question.is_answered(&draft) {
            continue;
        }
        debug!(?question, "asking");

        match question {
            Question::ProjectName => {
                let input = prompter
                    .text("Project name", "my-app", validate_package_name)
                    .map_err(ScaffoldError::from_prompt)?;
                draft.project_name = Some(input.trim().to_string());
            }
            Question::Template => {
                let choices: Vec<Choice> = templates
                    .iter()
                    .map(|t| Choice {
                        label: t.name.to_string(),
                        hint: t.description.to_string(),
                        enabled: true,
                    })
                    .collect();
                let idx = prompter
                    .select("Select a template", &choices)
                    .map_err(ScaffoldError::from_prompt)?;
                let template = templates
                    .get(idx)
                    .copied()
                    .with_context(|| format!("Template choice {} out of range", idx))?;
                draft.template = Some(template);
            }
            Question::InstallDependencies => {
                let install = prompter
                    .confirm("Install dependencies?", true)
                    .map_err(ScaffoldError::from_prompt)?;
                draft.install_dependencies = Some(install);
            }
            Question::PackageManager => match select_package_manager(prompter, caps)? {
                Some(pm) => draft.package_manager = Some(pm),
                None => draft.install_dependencies = Some(false),
            },
            Question::GitInit => {
                let init = prompter
                    .confirm("Initialize a git repository?", true)
                    .map_err(ScaffoldError::from_prompt)?;
                draft.git_init = Some(init);
            }
        }
    }

    // Pre-filled answers for questions that do not apply are dropped
    if !caps.has_git() {
        draft.git_init = None;
    }

    draft.finish()
}

/// Ask for a package manager; managers missing from the host cannot be picked.
/// Returns `None` when no manager is installed at all.
fn select_package_manager<P: Prompter>(
    prompter: &mut P,
    caps: &Capabilities,
) -> Result<Option<PackageManager>> {
    let choices: Vec<Choice> = PackageManager::ALL
        .iter()
        .map(|pm| {
            let enabled = caps.has(pm.tool());
            Choice {
                label: pm.binary().to_string(),
                hint: if enabled {
                    String::new()
                } else {
                    "not installed".to_string()
                },
                enabled,
            }
        })
        .collect();

    if !choices.iter().any(|c| c.enabled) {
        prompter
            .warn("No package manager found; skipping dependency installation")
            .map_err(ScaffoldError::from_prompt)?;
        return Ok(None);
    }

    loop {
        let idx = prompter
            .select("Which package manager?", &choices)
            .map_err(ScaffoldError::from_prompt)?;
        match choices.get(idx) {
            Some(choice) if choice.enabled => return Ok(Some(PackageManager::ALL[idx])),
            Some(choice) => prompter
                .warn(&format!("{} is not installed", choice.label))
                .map_err(ScaffoldError::from_prompt)?,
            None => anyhow::bail!("Package manager choice {} out of range", idx),
        }
    }
}
