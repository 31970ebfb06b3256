//! Tier selection: maps the request's premium flag to a model identifier.

/// Model used when the caller is on the premium tier.
pub const PREMIUM_MODEL: &str = "gpt-4o";

/// Model used for everyone else.
pub const STANDARD_MODEL: &str = "gpt-3.5-turbo";

/// Pure mapping from the premium flag to the model identifier handed to the
/// completion service. Never inspects any other input; cannot fail.
pub fn select_model(is_premium: bool) -> &'static str {
    if is_premium {
        PREMIUM_MODEL
    } else {
        STANDARD_MODEL
    }
}
