use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::Config;
use crate::document::SelectedFile;
use crate::export::save_export;
use crate::gateway::GatewayClient;
use crate::notice::Notice;
use crate::render::{render_notice, render_view};
use crate::workflow::{ViewMode, WorkflowController};

#[derive(Parser)]
#[command(name = "resume-optimizer")]
#[command(about = "AI-powered resume enhancement")]
#[command(long_about = "Uploads a resume to the optimizer gateway, shows the rewritten text next to \
                       the original and saves it as optimized-<name>.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Optimize a resume and save the result
    Optimize {
        /// Resume file (PDF, DOCX, TXT or LaTeX)
        file: PathBuf,
        /// Directory the optimized resume is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Declared MIME type; inferred from the extension when omitted
        #[arg(long)]
        mime: Option<String>,
        #[arg(long, value_enum, default_value_t = ViewMode::Comparison)]
        view: ViewMode,
        /// Gateway base URL; overrides GATEWAY_URL
        #[arg(long)]
        gateway_url: Option<String>,
    },
    /// Validate and show a resume without optimizing it
    Preview {
        file: PathBuf,
        #[arg(long)]
        mime: Option<String>,
    },
}

/// How a command ended. Anything but `Completed` exits non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Completed,
    Failed,
}

pub async fn run(cli: Cli, config: Config) -> Result<ExitCode> {
    let outcome = match cli.command {
        Commands::Optimize {
            file,
            out_dir,
            mime,
            view,
            gateway_url,
        } => {
            let gateway_url = gateway_url.unwrap_or(config.gateway_url);
            optimize(&file, &out_dir, mime.as_deref(), view, &gateway_url).await
        }
        Commands::Preview { file, mime } => preview(&file, mime.as_deref()).await,
    }?;

    Ok(match outcome {
        Outcome::Completed => ExitCode::SUCCESS,
        Outcome::Failed => ExitCode::FAILURE,
    })
}

async fn load(file: &Path, mime: Option<&str>) -> Result<Option<WorkflowController>> {
    let selected = SelectedFile::read(file, mime).await?;
    let mut controller = WorkflowController::new();
    match controller.load_file(selected) {
        Ok(notice) => {
            println!("{}", render_notice(&notice));
            Ok(Some(controller))
        }
        Err(e) => {
            println!("{}", render_notice(&Notice::from(&e)));
            Ok(None)
        }
    }
}

async fn optimize(
    file: &Path,
    out_dir: &Path,
    mime: Option<&str>,
    view: ViewMode,
    gateway_url: &str,
) -> Result<Outcome> {
    let Some(mut controller) = load(file, mime).await? else {
        return Ok(Outcome::Failed);
    };

    info!("Sending resume to {gateway_url}");
    let client = GatewayClient::new(gateway_url);
    let notice = match controller.optimize(&client).await {
        Ok(notice) => notice,
        Err(e) => Notice::from(&e),
    };
    println!("{}", render_notice(&notice));
    print!("{}", render_view(&controller.view(view)));

    let Some(export) = controller.export_result() else {
        info!("Workflow ended in state {}", controller.kind());
        return Ok(Outcome::Failed);
    };
    let path = save_export(out_dir, &export).await?;
    info!("Saved {}", path.display());
    println!(
        "{}",
        render_notice(&Notice::DownloadStarted {
            file_name: path.display().to_string()
        })
    );
    Ok(Outcome::Completed)
}

async fn preview(file: &Path, mime: Option<&str>) -> Result<Outcome> {
    let Some(controller) = load(file, mime).await? else {
        return Ok(Outcome::Failed);
    };
    if let Some(document) = controller.state().document() {
        info!(
            "Previewing {} as {}",
            document.label(),
            document.media_kind.label()
        );
    }
    print!("{}", render_view(&controller.view(ViewMode::Comparison)));
    Ok(Outcome::Completed)
}
