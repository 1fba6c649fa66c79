/// How often the dispatch loop checks for pending work, in seconds.
pub const DEFAULT_TICK_INTERVAL_SECS: u64 = 5;

/// Request timeout when fetching the target website, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Request timeout for the completion API call, in seconds.
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;

/// Storage budget for extracted page text, in characters.
pub const DEFAULT_SCRAPE_MAX_CHARS: usize = 5000;

/// Budget for page text embedded in the completion prompt, in characters.
/// Separate from the storage budget above; do not conflate the two.
pub const DEFAULT_PROMPT_MAX_CHARS: usize = 3000;

/// Completion provider used when `LLM_PROVIDER` is not set.
pub const DEFAULT_LLM_PROVIDER: &str = "gemini";

/// Model used when `LLM_MODEL` is not set.
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.5-flash";

/// Some sites reject plain HTTP clients, so the fetcher presents a browser identity.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Instruction prefix for the answer prompt; the user question follows in quotes
/// and the truncated page content is appended after it.
pub const ANSWER_INSTRUCTION: &str = "Based on the following website content, answer this question in detail, using simple terms so that anyone can understand the topic easily:";

/// Base URL of the Google generative language API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// OpenAI chat completions endpoint.
pub const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
