//! Launchpad CLI - Project scaffolding from starter templates

use anyhow::Result;
use clap::Parser;
use launchpad_core::templates::{TemplateDescriptor, DEFAULT_TEMPLATES};
use launchpad_core::tui::CreateArgs;
use launchpad_core::ProductConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Launchpad product configuration
#[derive(Clone)]
pub struct LaunchpadConfig;

impl ProductConfig for LaunchpadConfig {
    fn name(&self) -> &'static str {
        "launchpad"
    }

    fn display_name(&self) -> &'static str {
        "Launchpad"
    }

    fn templates(&self) -> &'static [TemplateDescriptor] {
        DEFAULT_TEMPLATES
    }

    fn template_url_env(&self) -> &'static str {
        "LAUNCHPAD_TEMPLATE_URL"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-launchpad")]
#[command(about = "Create a new Launchpad project from a starter template")]
#[command(version)]
pub struct Args {
    /// Project name (also the directory created under the current one)
    pub name: Option<String>,

    /// Template to use (default, minimal, typescript)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Diagnostic output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            template: args.template,
        }
    }
}

/// Initialize tracing; RUST_LOG wins over -v when set
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C outside a prompt (e.g. during clone or install) kills the run
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(args.verbose);
    tracing::debug!(?args, "parsed arguments");
    let config = LaunchpadConfig;

    let result = launchpad_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    let code = launchpad_core::tui::report_outcome(result);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
