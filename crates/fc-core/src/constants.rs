/// Number of tags shown in each pattern chart.
pub const TOP_TAGS: usize = 5;

/// Symbols shown beside each journal row.
pub const PREVIEW_SYMBOLS: usize = 3;

/// Minimum dream title length, in UTF-16 code units.
pub const TITLE_MIN_CHARS: usize = 2;

/// Minimum dream description length, in UTF-16 code units.
pub const CONTENT_MIN_CHARS: usize = 10;

/// Simulated latency before a chat reply arrives.
pub const CHAT_REPLY_DELAY_MS: u64 = 1500;

/// Simulated latency of a voice recording plus transcription.
pub const TRANSCRIPTION_DELAY_MS: u64 = 3000;

/// Tags stamped on a freshly submitted dream. Nothing replaces them later.
pub const PENDING_TAGS: [&str; 2] = ["analyzing", "processing"];

/// Analysis text stamped on a freshly submitted dream.
pub const PENDING_ANALYSIS: &str = "Dream analysis is being processed...";

/// Upper bound (inclusive) of a simulated upload's size in MB.
pub const MAX_UPLOAD_MB: u32 = 10;
