pub mod analysis;
pub mod birth_data;
pub mod locale;
pub mod markdown;
pub mod prompt;
pub mod search;
pub mod wire;

// Re-exports for convenience
pub use analysis::{
    AnalysisError, AnalysisInput, Outcome, RejectionHint, RejectionStreak, attach_illustration,
};
pub use birth_data::{BirthDraft, ValidationErrors};
pub use locale::{Strings, detect_language};
pub use markdown::{Block, Inline, render};
pub use search::{
    DEBOUNCE_MS, MAX_SUGGESTIONS, MIN_QUERY_LEN, SequenceGuard, debounce_current,
    parse_suggestions, query_ready,
};
