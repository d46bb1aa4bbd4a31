//! Document layer: classifies generated contract text into styled blocks and
//! writes them out as a `.docx` package.

mod block;
mod docx;
mod error;
mod format;

pub use block::{Alignment, BlockKind, DocumentBlock, FontSize};
pub use docx::{DOCX_MIME_TYPE, docx_file_name, string_to_docx, write_docx};
pub use error::DocError;
pub use format::{classify_line, clean_text, format_contract};
