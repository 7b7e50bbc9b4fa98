use pagecraft::application::services::{FailureCategory, TIMEOUT_DETAILS};

#[test]
fn given_quota_messages_when_classifying_then_returns_quota_exceeded() {
    assert_eq!(
        FailureCategory::classify("You exceeded your current quota, please check your plan"),
        FailureCategory::QuotaExceeded
    );
    assert_eq!(
        FailureCategory::classify("HTTP 429 Too Many Requests"),
        FailureCategory::QuotaExceeded
    );
}

#[test]
fn given_api_key_message_when_classifying_then_returns_invalid_credential() {
    assert_eq!(
        FailureCategory::classify("Incorrect API key provided"),
        FailureCategory::InvalidCredential
    );
}

#[test]
fn given_401_message_when_classifying_then_returns_authentication_failed() {
    assert_eq!(
        FailureCategory::classify("HTTP 401 Unauthorized"),
        FailureCategory::AuthenticationFailed
    );
}

#[test]
fn given_quota_and_key_signals_when_classifying_then_first_rule_wins() {
    assert_eq!(
        FailureCategory::classify("429: API key over limit"),
        FailureCategory::QuotaExceeded
    );
}

#[test]
fn given_abort_or_timeout_when_classifying_then_returns_timeout_case_insensitively() {
    assert_eq!(
        FailureCategory::classify("The operation was ABORTED"),
        FailureCategory::Timeout
    );
    assert_eq!(
        FailureCategory::classify("request Timeout"),
        FailureCategory::Timeout
    );
}

#[test]
fn given_network_or_fetch_when_classifying_then_returns_network() {
    assert_eq!(
        FailureCategory::classify("Failed to FETCH"),
        FailureCategory::Network
    );
    assert_eq!(
        FailureCategory::classify("network unreachable"),
        FailureCategory::Network
    );
}

#[test]
fn given_unknown_message_when_building_details_then_exposes_raw_message() {
    let category = FailureCategory::classify("something odd");
    assert_eq!(category, FailureCategory::Unknown);
    assert_eq!(category.technical_details("something odd"), "something odd");
    assert_eq!(category.technical_details(""), "Unknown error");
}

#[test]
fn given_timeout_category_when_building_details_then_returns_timeout_text() {
    assert_eq!(
        FailureCategory::Timeout.technical_details("aborted"),
        TIMEOUT_DETAILS
    );
}
