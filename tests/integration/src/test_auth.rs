//! Signing and verification integration tests.

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use resolver_auth::request::CUSTOM_DATE_HEADER;
    use resolver_auth::{
        AuthError, AuthResult, SigningCredentials, StaticCredentialProvider, VerifyConfig,
        verify_parts,
    };

    use crate::{device_credentials, init_tracing, server_now, signed_request};

    const PAYOFF_URL: &str =
        "http://resolver.example.com/api/v2/payoff/122/5?clientdata=usecellname";
    const AVAILABLE_URL: &str =
        "http://resolver.example.com/api/v2/isavailable?caller=resolver.client&details=1&testdb=1";
    const METRIC_BODY: &str =
        r#"{"AppName":"ResolverTest","AppVersion":"1.00","Language":"en_US"}"#;

    fn verify(parts: &http::request::Parts) -> Result<AuthResult, AuthError> {
        verify_parts(parts, &server_provider(), &VerifyConfig::default(), server_now())
    }

    fn server_provider() -> StaticCredentialProvider {
        StaticCredentialProvider::new(vec![
            ("device-42".to_owned(), "kX9#secret/key".to_owned()),
            ("other".to_owned(), "other-key".to_owned()),
        ])
    }

    #[test]
    fn test_should_verify_signed_post() {
        init_tracing();
        let request = signed_request(
            "post",
            PAYOFF_URL,
            METRIC_BODY,
            &device_credentials(),
            server_now(),
        )
        .unwrap();
        let (parts, _body) = request.into_parts();

        let result = verify(&parts).unwrap();
        assert_eq!(result.username, "Device-42");
        assert_eq!(result.signed_at, Some(server_now()));
    }

    #[test]
    fn test_should_verify_signed_get() {
        init_tracing();
        let request =
            signed_request("GET", AVAILABLE_URL, "", &device_credentials(), server_now()).unwrap();
        let (parts, _body) = request.into_parts();

        assert!(verify(&parts).is_ok());
    }

    #[test]
    fn test_should_reject_truncated_body_length() {
        init_tracing();
        let request = signed_request(
            "POST",
            PAYOFF_URL,
            METRIC_BODY,
            &device_credentials(),
            server_now(),
        )
        .unwrap();
        let (mut parts, _body) = request.into_parts();
        parts
            .headers
            .insert(http::header::CONTENT_LENGTH, http::HeaderValue::from_static("10"));

        let result = verify(&parts);
        assert!(matches!(result, Err(AuthError::SignatureDoesNotMatch)));
    }

    #[test]
    fn test_should_reject_wrong_security_key() {
        init_tracing();
        let impostor = SigningCredentials::new("device-42", "guessed-key");
        let request = signed_request("GET", AVAILABLE_URL, "", &impostor, server_now()).unwrap();
        let (parts, _body) = request.into_parts();

        let result = verify(&parts);
        assert!(matches!(result, Err(AuthError::SignatureDoesNotMatch)));
    }

    #[test]
    fn test_should_reject_replayed_request() {
        init_tracing();
        let signed_at = server_now() - TimeDelta::hours(1);
        let request = signed_request("GET", AVAILABLE_URL, "", &device_credentials(), signed_at)
            .unwrap();
        let (parts, _body) = request.into_parts();

        let result = verify(&parts);
        assert!(matches!(result, Err(AuthError::RequestExpired)));
    }

    #[test]
    fn test_should_reject_mismatched_custom_date() {
        init_tracing();
        let request =
            signed_request("GET", AVAILABLE_URL, "", &device_credentials(), server_now()).unwrap();
        let (mut parts, _body) = request.into_parts();
        parts.headers.insert(
            CUSTOM_DATE_HEADER,
            http::HeaderValue::from_static("Sat, 28 Feb 2026 12:01:00 GMT"),
        );

        let result = verify(&parts);
        assert!(matches!(result, Err(AuthError::SignatureDoesNotMatch)));
    }

    #[test]
    fn test_should_reject_blank_client_credentials() {
        init_tracing();
        let result = signed_request(
            "GET",
            AVAILABLE_URL,
            "",
            &SigningCredentials::new("", "key"),
            server_now(),
        );
        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<AuthError>(),
            Some(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_should_report_bad_url_as_http_error() {
        init_tracing();
        let result = signed_request(
            "GET",
            "http://bad host/api",
            "",
            &device_credentials(),
            server_now(),
        );
        let error = result.unwrap_err();
        assert!(error.downcast_ref::<http::Error>().is_some());
        assert!(error.downcast_ref::<AuthError>().is_none());
    }
}
