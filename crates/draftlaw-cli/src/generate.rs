//! Generation pipeline: request → prompt → completion → formatted `.docx`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use chrono::NaiveDateTime;
use draftlaw_ai::CompletionBackend;
use draftlaw_core::{ContractRequest, build_prompt};
use draftlaw_doc::{DOCX_MIME_TYPE, docx_file_name, format_contract, write_docx};
use tracing::{info, warn};

/// The artifact produced for one request.
pub struct GeneratedContract {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: &'static str,
    pub blocks: usize,
    pub elapsed_secs: f64,
}

/// Run the full pipeline for one request.
///
/// A completion failure stops the pipeline before anything is formatted or
/// written.
pub async fn run_generate_pipeline(
    backend: &dyn CompletionBackend,
    request: &ContractRequest,
    out_dir: &Path,
    now: NaiveDateTime,
) -> anyhow::Result<GeneratedContract> {
    let start = Instant::now();
    let title = request.display_title();

    // 1. Build the drafting prompt.
    let prompt = build_prompt(request);
    info!(
        contract_type = %request.contract_type,
        category = request.category().as_str(),
        prompt_len = prompt.len(),
        "built prompt"
    );

    // 2. Ask the model for contract text.
    let text = match backend.complete(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "completion failed");
            return Err(e).context("Error generating contract");
        }
    };

    // 3. Format and write the document.
    let blocks = format_contract(&text, &title);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    let file_name = docx_file_name(&title, now);
    let path = out_dir.join(&file_name);
    write_docx(&blocks, &path).with_context(|| format!("writing {}", path.display()))?;

    Ok(GeneratedContract {
        path,
        file_name,
        mime_type: DOCX_MIME_TYPE,
        blocks: blocks.len(),
        elapsed_secs: start.elapsed().as_secs_f64(),
    })
}
