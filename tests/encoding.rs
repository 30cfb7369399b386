//! Public-contract tests for the wire-encoding layer.

use mathpix_rs::encode::Encode;
use mathpix_rs::types::{
    AppTokenRequest, BatchRequest, DocumentRequest, ImageRequest, SearchRequest, StrokesRequest,
    UsageRequest,
};
use mathpix_rs::Error;

#[test]
fn body_requests_serialize_whole_and_add_no_query() {
    let payload = ImageRequest {
        src: Some("https://example.com/eq.png".into()),
        ..Default::default()
    }
    .encode()
    .unwrap();
    assert!(payload.query.is_empty());
    assert_eq!(
        payload.body.unwrap(),
        serde_json::json!({"src": "https://example.com/eq.png"})
    );

    assert!(BatchRequest::default().encode().unwrap().body.is_some());
    assert!(DocumentRequest::default().encode().unwrap().body.is_some());
    assert!(StrokesRequest::default().encode().unwrap().body.is_some());
    assert!(AppTokenRequest::default().encode().unwrap().body.is_some());
}

#[test]
fn query_requests_produce_no_body() {
    let payload = SearchRequest {
        page: Some(3),
        ..Default::default()
    }
    .encode()
    .unwrap();
    assert!(payload.body.is_none());
    assert_eq!(payload.query, vec![("page", "3".to_string())]);
}

#[test]
fn required_fields_fail_encoding_with_a_caller_error() {
    let err = UsageRequest::default().encode().unwrap_err();
    match err {
        Error::InvalidRequest(message) => assert!(message.contains("group_by")),
        other => panic!("expected InvalidRequest, got {other:?}"),
    }
}

#[test]
fn required_fields_pass_once_populated() {
    let payload = UsageRequest {
        group_by: "usage_type".into(),
        timespan: "month".into(),
        ..Default::default()
    }
    .encode()
    .unwrap();
    assert_eq!(payload.query.len(), 2);
}
