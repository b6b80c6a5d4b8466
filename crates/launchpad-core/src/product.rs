//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a scaffolding binary implements to
//! configure the template catalog, naming, and the closing instructions.

use crate::answers::AnswerSet;
use crate::runtime::PackageManager;
use crate::scaffold;
use crate::templates::{TemplateDescriptor, INITIAL_VERSION};

/// Configuration trait for scaffolding products
///
/// Each product defines:
/// - Product identity (name, display name)
/// - The template catalog and the env var that overrides clone URLs
/// - The version new projects start at
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Templates offered, in prompt order
    fn templates(&self) -> &'static [TemplateDescriptor];

    /// Environment variable name for overriding the template clone URL
    fn template_url_env(&self) -> &'static str;

    /// Version written into the new project's manifest
    fn initial_version(&self) -> &'static str {
        INITIAL_VERSION
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, answers: &AnswerSet, fallback: PackageManager) -> Vec<String> {
        scaffold::next_steps(answers, fallback)
    }
}
