use super::*;

#[test]
fn codes_are_distinct() {
    let errors = [
        SubmitError::NotConfigured,
        SubmitError::Unreachable("x".into()),
        SubmitError::Rejected { status: 500, message: "x".into() },
    ];
    assert_eq!(errors[0].code(), "E_NOT_CONFIGURED");
    assert_ne!(errors[0].code(), errors[1].code());
    assert_ne!(errors[1].code(), errors[2].code());
}

#[test]
fn from_response_recovers_not_configured() {
    let body = serde_json::to_string(&ErrorBody::new(CODE_NOT_CONFIGURED, "remote store is not configured")).unwrap();
    assert_eq!(SubmitError::from_response(503, &body), SubmitError::NotConfigured);
}

#[test]
fn from_response_recovers_unreachable() {
    let body = serde_json::to_string(&ErrorBody::new(CODE_UNREACHABLE, "connection refused")).unwrap();
    assert_eq!(SubmitError::from_response(502, &body), SubmitError::Unreachable("connection refused".into()));
}

#[test]
fn from_response_keeps_remote_message() {
    let body = serde_json::to_string(&ErrorBody::new(CODE_REJECTED, "column \"hope2026\" does not exist")).unwrap();
    assert_eq!(
        SubmitError::from_response(502, &body),
        SubmitError::Rejected { status: 502, message: "column \"hope2026\" does not exist".into() }
    );
}

#[test]
fn from_response_plain_text_body() {
    assert_eq!(
        SubmitError::from_response(500, " Internal Server Error \n"),
        SubmitError::Rejected { status: 500, message: "Internal Server Error".into() }
    );
}

#[test]
fn from_response_empty_body_uses_status() {
    assert_eq!(
        SubmitError::from_response(404, ""),
        SubmitError::Rejected { status: 404, message: "HTTP 404".into() }
    );
}

#[test]
fn display_includes_detail() {
    let err = SubmitError::Rejected { status: 409, message: "duplicate".into() };
    assert_eq!(err.to_string(), "remote store rejected the message (409): duplicate");
}
