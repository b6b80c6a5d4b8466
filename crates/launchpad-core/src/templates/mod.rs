//! Template catalog, cloning, and manifest rewriting
//!
//! This module provides:
//! - The static template catalog (`TemplateDescriptor`)
//! - Cloning a template into the project directory and stripping its history
//! - Rewriting the cloned `package.json`

pub mod catalog;
pub mod clone;
pub mod manifest;

pub use catalog::{
    clone_url_with_override, find_template, resolve_clone_url, TemplateDescriptor, DEFAULT_TEMPLATES,
};
pub use clone::{clone_template, count_files, remove_clone_artifacts, LOCKFILES, VCS_DIR};
pub use manifest::{patch_manifest, rewrite_manifest, INITIAL_VERSION, MANIFEST_FILE};
