mod generate;
mod request;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use draftlaw_ai::{CompletionClient, CompletionConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use draftlaw_core::build_prompt;
use draftlaw_doc::{DOCX_MIME_TYPE, docx_file_name, string_to_docx};

use crate::generate::run_generate_pipeline;
use crate::request::{RequestArgs, print_summary};

#[derive(Parser)]
#[command(
    name = "draftlaw",
    version,
    about = "Draft legal contracts with an LLM and export them as .docx"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a contract and write it as a timestamped .docx file
    Generate {
        #[command(flatten)]
        request: RequestArgs,
        #[command(flatten)]
        service: ServiceArgs,
        /// Directory the .docx file is written to
        #[arg(long, env = "DRAFTLAW_OUT_DIR", default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print the drafting prompt for a request without calling the model
    Prompt {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Format an existing contract text file into a .docx file
    Format {
        /// Plain-text contract to format
        #[arg(long)]
        input: PathBuf,
        /// Title used when the text has no line mentioning "agreement"
        #[arg(long, default_value = "")]
        title: String,
        /// Output path (defaults to a timestamped name in --out-dir)
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, env = "DRAFTLAW_OUT_DIR", default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(Args)]
struct ServiceArgs {
    /// API key for the completion service
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// OpenAI-compatible base URL
    #[arg(long, env = "DRAFTLAW_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[arg(long, env = "DRAFTLAW_MODEL", default_value = DEFAULT_MODEL)]
    model: String,
}

impl ServiceArgs {
    fn into_config(self) -> CompletionConfig {
        CompletionConfig {
            api_key: self.api_key.unwrap_or_default(),
            base_url: self.base_url,
            model: self.model,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("draftlaw v{}", env!("CARGO_PKG_VERSION"));

    match Cli::parse().command {
        Command::Generate {
            request,
            service,
            out_dir,
        } => cmd_generate(request, service, out_dir).await,
        Command::Prompt { request } => {
            let request = request.into_request()?;
            println!("{}", build_prompt(&request));
            Ok(())
        }
        Command::Format {
            input,
            title,
            output,
            out_dir,
        } => cmd_format(input, title, output, out_dir),
    }
}

async fn cmd_generate(
    request: RequestArgs,
    service: ServiceArgs,
    out_dir: PathBuf,
) -> anyhow::Result<()> {
    let client = CompletionClient::new(service.into_config())?;
    let request = request.into_request()?;
    print_summary(&request);

    eprintln!("Generating contract with {}...", client.model());
    let now = chrono::Local::now().naive_local();
    let out = run_generate_pipeline(&client, &request, &out_dir, now).await?;

    println!("Contract generated successfully!");
    println!("  File:      {}", out.path.display());
    println!("  MIME type: {}", out.mime_type);
    println!("  Blocks:    {} ({:.1}s)", out.blocks, out.elapsed_secs);
    Ok(())
}

fn cmd_format(
    input: PathBuf,
    title: String,
    output: Option<PathBuf>,
    out_dir: PathBuf,
) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("reading {}", input.display()))?;

    let path = match output {
        Some(path) => path,
        None => {
            let stem = if title.trim().is_empty() {
                "Contract"
            } else {
                title.as_str()
            };
            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("creating output directory {}", out_dir.display()))?;
            out_dir.join(docx_file_name(stem, chrono::Local::now().naive_local()))
        }
    };

    let written = string_to_docx(&text, &path, &title)?;
    println!("Wrote {} ({DOCX_MIME_TYPE})", written.display());
    Ok(())
}
