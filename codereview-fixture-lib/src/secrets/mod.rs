/// API key for the sample service.
// Committed in plain text on purpose; see SEC-001 in `issues`.
pub const API_KEY: &str = "hardcoded_secret_key_12345";
