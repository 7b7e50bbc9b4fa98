/// Human-facing category of a failed generation call, chosen from the error
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    QuotaExceeded,
    InvalidCredential,
    AuthenticationFailed,
    Timeout,
    Network,
    Unknown,
}

pub const TIMEOUT_DETAILS: &str =
    "The connection to the API was interrupted because the request timed out.";

impl FailureCategory {
    /// First matching rule wins; the order mirrors how specific each signal is.
    pub fn classify(message: &str) -> Self {
        let lowered = message.to_lowercase();
        if message.contains("exceeded your current quota") || message.contains("429") {
            FailureCategory::QuotaExceeded
        } else if message.contains("API key") {
            FailureCategory::InvalidCredential
        } else if message.contains("401") {
            FailureCategory::AuthenticationFailed
        } else if lowered.contains("abort") || lowered.contains("timeout") {
            FailureCategory::Timeout
        } else if lowered.contains("network") || lowered.contains("fetch") {
            FailureCategory::Network
        } else {
            FailureCategory::Unknown
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            FailureCategory::QuotaExceeded => "API quota exceeded",
            FailureCategory::InvalidCredential => "Problem with the API key",
            FailureCategory::AuthenticationFailed => "Authentication failed",
            FailureCategory::Timeout => "The request took too long",
            FailureCategory::Network => "Network connection problem",
            FailureCategory::Unknown => "Error while generating the code",
        }
    }

    /// Unknown failures expose the raw message; every other category has a
    /// fixed explanation.
    pub fn technical_details(&self, message: &str) -> String {
        match self {
            FailureCategory::QuotaExceeded => "You have exceeded your API usage quota. \
                 Check your billing plan or configure another provider as an alternative."
                .to_string(),
            FailureCategory::InvalidCredential => {
                "Check that the API key is configured correctly and still valid.".to_string()
            }
            FailureCategory::AuthenticationFailed => {
                "Your API key is not valid or has expired.".to_string()
            }
            FailureCategory::Timeout => TIMEOUT_DETAILS.to_string(),
            FailureCategory::Network => {
                "Check your internet connection and proxy settings if applicable.".to_string()
            }
            FailureCategory::Unknown if message.trim().is_empty() => "Unknown error".to_string(),
            FailureCategory::Unknown => message.to_string(),
        }
    }
}
