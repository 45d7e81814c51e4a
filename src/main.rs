use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use shotcraft::designer::{builtin_patterns, TemplateGenerator};
use shotcraft::{export_svg, init_logging, load_config, DesignerState, OutputTarget, StylePreset};

#[derive(Parser, Debug)]
#[command(
    name = "shotcraft",
    version,
    about = "Compose app-store screenshot layouts",
    arg_required_else_help = true
)]
struct Cli {
    /// Config file (.toml or .json). Defaults to the platform config location.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in layout patterns
    Patterns,
    /// Lay out a pattern, style it with a preset and export SVG
    Render {
        /// Pattern id (see `patterns`)
        #[arg(long)]
        pattern: Option<String>,
        #[arg(long, default_value = "Your App")]
        app_name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// minimal, bold, colorful or dark
        #[arg(long)]
        style: Option<StylePreset>,
        /// Image URL or data URL shown inside device frames
        #[arg(long, value_name = "URL")]
        screenshot: Option<String>,
        /// Output file or directory. Stdout when omitted.
        #[arg(long, short, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Apply a saved generator response (JSON) and export SVG
    Import {
        #[arg(value_name = "RESPONSE")]
        response: PathBuf,
        /// Re-position layers with this pattern
        #[arg(long)]
        pattern: Option<String>,
        #[arg(long, default_value = "Your App")]
        app_name: String,
        #[arg(long, value_name = "URL")]
        screenshot: Option<String>,
        #[arg(long, short, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(version = shotcraft::VERSION, built = shotcraft::BUILD_DATE, "starting");

    match cli.command {
        Command::Patterns => {
            for pattern in builtin_patterns() {
                println!("{:<20} {:<20} {}", pattern.id, pattern.name, pattern.description);
            }
        }
        Command::Render {
            pattern,
            app_name,
            description,
            style,
            screenshot,
            out,
        } => {
            let mut state = DesignerState::with_options(config.editor_options());
            state.set_user_screenshot(screenshot);
            let style = style.unwrap_or(config.generator.default_style_preset);
            let pattern = pattern.or_else(|| config.generator.default_pattern.clone());
            let request =
                state.generation_request(&app_name, &description, style, pattern.as_deref());

            state
                .generate_with(&TemplateGenerator::new(), &request)
                .await
                .map_err(|e| anyhow!("{} ({})", e.user_message(), e))?;
            report(export_svg(&state, &OutputTarget::from_arg(out))?);
        }
        Command::Import {
            response,
            pattern,
            app_name,
            screenshot,
            out,
        } => {
            let mut state = DesignerState::with_options(config.editor_options());
            state.set_user_screenshot(screenshot);
            let request = state.generation_request(
                &app_name,
                "",
                config.generator.default_style_preset,
                pattern.as_deref(),
            );
            shotcraft::apply_response_file(&mut state, &response, &request)?;
            report(export_svg(&state, &OutputTarget::from_arg(out))?);
        }
    }

    Ok(())
}

fn report(written: Option<PathBuf>) {
    if let Some(path) = written {
        tracing::info!(path = %path.display(), "screenshot exported");
    }
}
