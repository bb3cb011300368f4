//! Custom assertion macros

/// Assert a response status and error reason in one step
#[macro_export]
macro_rules! assert_error_response {
    ($response:expr, $status:expr, $reason:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status, $status,
            "unexpected status, body: {}",
            response.body
        );
        assert_eq!(response.error(), $reason);
    }};
}

/// Assert a 401 from the gate with the given reason
#[macro_export]
macro_rules! assert_unauthorized {
    ($response:expr, $reason:expr) => {
        $crate::assert_error_response!($response, axum::http::StatusCode::UNAUTHORIZED, $reason)
    };
}
