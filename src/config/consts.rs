/// Reading speed used for the reading-time estimate (words per minute)
pub const WORDS_PER_MINUTE: usize = 200;
/// Output of extract-emails when nothing matches
pub const NO_EMAILS_FOUND: &str = "No emails found.";
/// Log filter used when neither RUST_LOG, -v nor the config set one
pub const DEFAULT_LOG_FILTER: &str = "warn";
