use crate::ClientError;

#[test]
fn test_api_error_exposes_status_and_message() {
    let err = ClientError::api_error(404, "NOT_FOUND", "Card not found");

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), "Card not found");
    assert!(err.to_string().contains("NOT_FOUND"));
}

#[test]
fn test_json_error_has_no_status() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ClientError::from(source);

    assert_eq!(err.status(), None);
    assert!(err.to_string().starts_with("JSON parse error"));
}
