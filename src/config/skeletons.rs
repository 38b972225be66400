/// Standard `settings.conf` content written when the file is missing or empty.
pub const SETTINGS_SKELETON_CONTENT: &str = "# vidya-lingo settings
# Lines are `key = value`; `#` starts a comment.

# Display language (English, Hindi, Bengali, Telugu, Marathi, Tamil, Urdu,
# Gujarati, Kannada, Odia, Malayalam, Punjabi). Updated when you switch language.
language = English

# Quiet period in milliseconds before queued texts are sent as one batch.
translate_debounce_ms = 500

# Generative language model used for translation.
genai_model = gemini-2.0-flash
genai_endpoint = https://generativelanguage.googleapis.com/v1beta

# Per-request timeout in seconds. The API key is read from GEMINI_API_KEY
# (or GOOGLE_API_KEY) and is never stored here.
genai_timeout_secs = 30
";
