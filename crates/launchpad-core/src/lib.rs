//! Launchpad Core - Shared library for the project scaffolding CLI
//!
//! This library collects answers, clones a starter template with git, rewrites
//! its `package.json`, and optionally runs `git init` and a dependency install.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Tool probing, name validation, workspace
//!   preparation, template cloning, manifest rewriting
//! - **Layer 2: Workflow Orchestration** - `ProductConfig`, the declarative
//!   question list in [`answers`], and [`scaffold::build_project`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use launchpad_core::{answers, runtime, scaffold, templates, workspace};
//!
//! let caps = runtime::check_tools().await;
//! let answers = answers::collect_answers(&mut my_prompter, &caps, templates::DEFAULT_TEMPLATES, Default::default())?;
//! let dir = workspace::resolve_workspace(&std::env::current_dir()?, &answers.project_name)?;
//! workspace::prepare_workspace(&dir, |_| Ok(false)).await?;
//! let plan = scaffold::BuildPlan {
//!     answers: &answers,
//!     project_dir: &dir,
//!     clone_url: answers.template.url,
//!     initial_version: templates::INITIAL_VERSION,
//! };
//! scaffold::build_project(&runtime::SystemRunner, &mut scaffold::Silent, &plan).await?;
//! ```

pub mod answers;
pub mod error;
pub mod name;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod templates;
pub mod workspace;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{collect_answers, AnswerSet, DraftAnswers, Prompter};
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use runtime::{check_tools, Capabilities, CommandRunner, PackageManager, SystemRunner, Tool};
pub use scaffold::{build_project, BuildPlan, StepObserver};
pub use templates::{TemplateDescriptor, DEFAULT_TEMPLATES};

#[cfg(feature = "tui")]
pub use tui::run;
