use std::io::Read;

use serde::Deserialize;

use crate::error::GlintResult;

pub const DEFAULT_CONTEXT_WINDOW: u64 = 200_000;

/// Upper bound on how much of stdin we are willing to read.
const MAX_STDIN_BYTES: u64 = 65536;

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

// Every field is optional and `null` is treated like a missing key.
// serde_json silently drops unknown fields, so newer payloads keep parsing.

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Payload {
    cost: Option<CostBlock>,
    context_window: Option<ContextWindowBlock>,
    workspace: Option<WorkspaceBlock>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CostBlock {
    total_lines_added: Option<u64>,
    total_lines_removed: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContextWindowBlock {
    current_usage: Option<CurrentUsage>,
    context_window_size: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct WorkspaceBlock {
    current_dir: Option<String>,
}

/// Token counts for the request currently occupying the context window.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct CurrentUsage {
    pub input_tokens: Option<u64>,
    pub cache_creation_input_tokens: Option<u64>,
    pub cache_read_input_tokens: Option<u64>,
}

// ---------------------------------------------------------------------------
// Session input
// ---------------------------------------------------------------------------

/// Session metadata piped in by the assistant on each statusline tick,
/// with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInput {
    pub lines_added: u64,
    pub lines_removed: u64,
    pub current_usage: Option<CurrentUsage>,
    pub context_window_size: u64,
    pub current_dir: String,
}

impl Default for SessionInput {
    fn default() -> Self {
        Self {
            lines_added: 0,
            lines_removed: 0,
            current_usage: None,
            context_window_size: DEFAULT_CONTEXT_WINDOW,
            current_dir: ".".to_string(),
        }
    }
}

impl From<Payload> for SessionInput {
    fn from(payload: Payload) -> Self {
        let cost = payload.cost.unwrap_or_default();
        let window = payload.context_window.unwrap_or_default();
        let workspace = payload.workspace.unwrap_or_default();

        Self {
            lines_added: cost.total_lines_added.unwrap_or(0),
            lines_removed: cost.total_lines_removed.unwrap_or(0),
            current_usage: window.current_usage,
            // A zero-sized window would divide by zero downstream.
            context_window_size: window
                .context_window_size
                .filter(|&size| size > 0)
                .unwrap_or(DEFAULT_CONTEXT_WINDOW),
            current_dir: workspace
                .current_dir
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| ".".to_string()),
        }
    }
}

impl SessionInput {
    /// Decode the statusline payload. Missing keys fall back to defaults;
    /// only malformed JSON is an error.
    pub fn from_json(bytes: &[u8]) -> GlintResult<Self> {
        let payload: Payload = serde_json::from_slice(bytes)?;
        Ok(payload.into())
    }

    /// Read and decode stdin. Empty or malformed input yields the defaults.
    pub fn from_stdin() -> Self {
        let mut buf = Vec::with_capacity(MAX_STDIN_BYTES as usize);
        if let Err(e) = std::io::stdin()
            .lock()
            .take(MAX_STDIN_BYTES)
            .read_to_end(&mut buf)
        {
            tracing::warn!("failed to read stdin: {}", e);
            return Self::default();
        }

        if buf.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }

        match Self::from_json(&buf) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!("unparseable session payload, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Tokens currently in the context window. Zero without usage data.
    pub fn total_tokens(&self) -> u64 {
        self.current_usage.map_or(0, |u| {
            [
                u.input_tokens,
                u.cache_creation_input_tokens,
                u.cache_read_input_tokens,
            ]
            .into_iter()
            .flatten()
            .fold(0, u64::saturating_add)
        })
    }
}
