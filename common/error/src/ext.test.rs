use super::*;

#[derive(Debug)]
struct TestError {
    message: &'static str,
    code: StatusCode,
}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TestError {}

impl ErrorExt for TestError {
    fn status_code(&self) -> StatusCode {
        self.code
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn test_output_msg_hides_internal() {
    let err = TestError {
        message: "sensitive details",
        code: StatusCode::Internal,
    };
    assert_eq!(err.output_msg(), "Internal error: 1001");
}

#[test]
fn test_output_msg_shows_user_errors() {
    let err = TestError {
        message: "Invalid username or password",
        code: StatusCode::AuthenticationFailed,
    };
    assert_eq!(err.output_msg(), "Invalid username or password");
}

#[test]
fn test_output_msg_empty_for_success() {
    let err = TestError {
        message: "not an error",
        code: StatusCode::Success,
    };
    assert_eq!(err.output_msg(), "");
}

#[test]
fn test_downcast_via_as_any() {
    let err = TestError {
        message: "x",
        code: StatusCode::ExecutionFailed,
    };
    assert!(err.as_any().downcast_ref::<TestError>().is_some());
}
