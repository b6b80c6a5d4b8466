//! Built-in starter templates

use crate::error::ScaffoldError;
use anyhow::Result;

/// A clonable starter repository and the branch to check out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub name: &'static str,
    pub branch: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

const TEMPLATE_REPO: &str = "https://github.com/launchpad-dev/launchpad-templates.git";

/// The fixed template catalog, in the order it is offered
pub const DEFAULT_TEMPLATES: &[TemplateDescriptor] = &[
    TemplateDescriptor {
        name: "default",
        branch: "main",
        url: TEMPLATE_REPO,
        description: "Full starter with routing, styling, and linting",
    },
    TemplateDescriptor {
        name: "minimal",
        branch: "minimal",
        url: TEMPLATE_REPO,
        description: "Bare entry point and dev server, nothing else",
    },
    TemplateDescriptor {
        name: "typescript",
        branch: "typescript",
        url: TEMPLATE_REPO,
        description: "Default starter written in TypeScript",
    },
];

/// Look up a template by name (case-insensitive)
pub fn find_template(
    templates: &[TemplateDescriptor],
    name: &str,
) -> Result<TemplateDescriptor> {
    templates
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
        .copied()
        .ok_or_else(|| {
            ScaffoldError::UnknownTemplate {
                name: name.to_string(),
                available: templates
                    .iter()
                    .map(|t| t.name)
                    .collect::<Vec<_>>()
                    .join(", "),
            }
            .into()
        })
}

/// Clone URL for a template, honouring an override from `env_var` when set
pub fn resolve_clone_url(template: &TemplateDescriptor, env_var: &str) -> String {
    clone_url_with_override(template, std::env::var(env_var).ok())
}

/// Blank overrides fall back to the template's own URL
pub fn clone_url_with_override(template: &TemplateDescriptor, url: Option<String>) -> String {
    match url {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => template.url.to_string(),
    }
}
