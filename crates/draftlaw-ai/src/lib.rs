//! LLM layer: chat-completion client used to draft contract text.

mod completion;

pub use completion::{
    CompletionBackend, CompletionClient, CompletionConfig, CompletionError, DEFAULT_BASE_URL,
    DEFAULT_MODEL, SYSTEM_PROMPT,
};
