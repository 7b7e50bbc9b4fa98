use axum::http::HeaderValue;
use pagecraft::infrastructure::observability::{REQUEST_ID_HEADER, RequestId};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_incoming_header_when_extracting_then_reuses_value() {
    let header = HeaderValue::from_static("req-42");
    assert_eq!(
        RequestId::from_header(Some(&header)),
        RequestId("req-42".to_string())
    );
}

#[test]
fn given_missing_or_blank_header_when_extracting_then_mints_uuid() {
    let blank = HeaderValue::from_static("  ");

    let minted = RequestId::from_header(None);
    let from_blank = RequestId::from_header(Some(&blank));

    assert!(uuid::Uuid::parse_str(&minted.0).is_ok());
    assert!(uuid::Uuid::parse_str(&from_blank.0).is_ok());
    assert_ne!(minted, from_blank);
}
