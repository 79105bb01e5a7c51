/// Simplified RFC 5322 email pattern.
/// Best-effort syntactic check only; override with `EMAIL_PATTERN` if needed.
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_!#$%&'*+/=?`{|}~^.-]+@[a-zA-Z0-9.-]+$";

/// Topping returned by the `/timsfavorite` endpoint
pub const FAVORITE_TOPPING: &str = "mushrooms";

/// How many times an insert-or-fetch statement is retried when a concurrent
/// insert leaves it with no visible row
pub const UPSERT_MAX_ATTEMPTS: u32 = 3;

// =============================================================================
// Response Bodies
// =============================================================================

/// Error message for an email that fails validation
pub const ERR_INVALID_EMAIL: &str = "Invalid Email Address";

/// Body returned after a successful registration
pub const REGISTER_OK: &str = "ok";

/// Body returned by the liveness check
pub const PING_RESPONSE: &str = "pong";
