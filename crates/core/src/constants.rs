//! Constants used throughout the roaster core crate.
//!
//! Fixed user-facing strings live here so the server, the CLI and the tests agree on them.

/// Default address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Model requested from the provider when `ROASTER_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Upper bound on generated tokens per roast.
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// Number of provider calls allowed in flight for one batch. `1` means strictly sequential.
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Substituted for any todo whose provider call fails.
pub const FALLBACK_ROAST: &str =
    "Even your procrastination has procrastination. This needs a roast of a roast.";

/// Shown on a card when the server returned fewer roasts than todos.
pub const MISSING_ROAST: &str = "Failed to roast this one";

/// Shown instead of the results when the roast request could not be completed.
pub const RESULTS_ERROR_MESSAGE: &str = "Something went wrong while roasting your todos";

/// Shown when the user submits without any todos.
pub const EMPTY_SUBMIT_MESSAGE: &str = "Add at least one todo first!";

/// Prefix for exported filenames, followed by the UTC date.
pub const EXPORT_FILE_PREFIX: &str = "roasted-todos";

/// Emoji a user may attach to a roast card.
pub const REACTIONS: [&str; 8] = ["🔥", "💀", "😂", "🎯", "💯", "😭", "⚡", "🚀"];

/// Base of the compose-a-tweet link.
pub const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Instruction sent to the provider; `{todo}` is replaced with the literal todo text.
pub const ROAST_PROMPT_TEMPLATE: &str = "You're a hilariously brutal AI roast bot. Give one short, funny, brutally honest roast about this todo task. Make it witty, motivating, and personal. Don't use emojis. Keep it under 3 sentences. The roast should make them laugh while also being real about their procrastination patterns.

Todo: \"{todo}\"

Roast:";
