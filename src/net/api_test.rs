use super::*;

#[test]
fn login_failure_message_prefers_the_backend_detail() {
    let err = ApiError::Status {
        status: 401,
        detail: Some("Identifiants invalides".to_owned()),
    };
    assert_eq!(login_failure_message(&err), "Identifiants invalides");
}

#[test]
fn login_failure_message_falls_back_to_the_generic_text() {
    let no_detail = ApiError::Status { status: 500, detail: None };
    assert_eq!(login_failure_message(&no_detail), GENERIC_LOGIN_ERROR);

    let network = ApiError::Network("offline".to_owned());
    assert_eq!(login_failure_message(&network), GENERIC_LOGIN_ERROR);
}
