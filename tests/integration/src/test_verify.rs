//! Client-signs, server-validates round trips.

#[cfg(test)]
mod tests {
    use tidyapi_auth::{
        DEFAULT_MAX_SECONDS_GAP, StaticSecretProvider, verify_request, verify_request_async,
    };
    use tidyapi_model::{ApiError, ErrorBody};

    use crate::{
        TEST_ACCESS_KEY, TEST_ENDPOINT, client_header, test_secret_provider,
    };

    const BODY: &str = r#"{"tidyapi":1,"method":"create","id":"r1","params":{"qty":3}}"#;

    #[test]
    fn test_should_validate_freshly_signed_request() {
        let header = client_header(BODY, 0);

        let verified = verify_request(
            TEST_ENDPOINT,
            &header,
            BODY,
            &test_secret_provider(),
            DEFAULT_MAX_SECONDS_GAP,
        )
        .unwrap();

        assert_eq!(verified.request.method, "create");
        assert_eq!(verified.request.id, "r1");
        assert_eq!(verified.request.params["qty"], 3);
        assert_eq!(verified.endpoint_name, TEST_ENDPOINT);
        assert_eq!(verified.access_key, TEST_ACCESS_KEY);
    }

    #[tokio::test]
    async fn test_should_validate_freshly_signed_request_async() {
        let header = client_header(BODY, 0);

        let verified = verify_request_async(
            TEST_ENDPOINT,
            &header,
            BODY,
            &test_secret_provider(),
            DEFAULT_MAX_SECONDS_GAP,
        )
        .await
        .unwrap();

        assert_eq!(verified.request.method, "create");
        assert_eq!(verified.unix_seconds, header.split(' ').nth(1).unwrap().parse::<i64>().unwrap());
    }

    #[test]
    fn test_should_accept_request_well_inside_freshness_window() {
        // Signed 250 seconds ago; leaves margin for slow test runs.
        let header = client_header(BODY, 250);

        let result = verify_request(
            TEST_ENDPOINT,
            &header,
            BODY,
            &test_secret_provider(),
            DEFAULT_MAX_SECONDS_GAP,
        );
        assert!(result.is_ok(), "stale-but-in-window request rejected: {result:?}");
    }

    #[test]
    fn test_should_reject_request_past_freshness_window() {
        let header = client_header(BODY, DEFAULT_MAX_SECONDS_GAP + 1);

        let err = verify_request(
            TEST_ENDPOINT,
            &header,
            BODY,
            &test_secret_provider(),
            DEFAULT_MAX_SECONDS_GAP,
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidTime(_)));
        assert_eq!(err.code().as_u16(), 104);
    }

    #[test]
    fn test_should_reject_wrong_secret_on_server_side() {
        let header = client_header(BODY, 0);
        let wrong = StaticSecretProvider::new(vec![(
            TEST_ACCESS_KEY.to_owned(),
            "wrong-secret".to_owned(),
        )]);

        let err = verify_request(TEST_ENDPOINT, &header, BODY, &wrong, DEFAULT_MAX_SECONDS_GAP)
            .unwrap_err();
        assert_eq!(err.code().as_u16(), 102);
        assert_eq!(err.to_string(), "Invalid Signature");
    }

    #[test]
    fn test_should_reject_unknown_access_key() {
        let header = client_header(BODY, 0);
        let empty = StaticSecretProvider::new(vec![]);

        let err = verify_request(TEST_ENDPOINT, &header, BODY, &empty, DEFAULT_MAX_SECONDS_GAP)
            .unwrap_err();
        assert_eq!(err, ApiError::UnknownAccessKey(TEST_ACCESS_KEY.to_owned()));

        let body = ErrorBody::from(&err);
        assert_eq!(body.code, 102);
    }

    #[test]
    fn test_should_reject_envelope_with_wrong_version_after_valid_signature() {
        let body = r#"{"tidyapi":2,"method":"create","id":"r1"}"#;
        let header = client_header(body, 0);

        let err = verify_request(
            TEST_ENDPOINT,
            &header,
            body,
            &test_secret_provider(),
            DEFAULT_MAX_SECONDS_GAP,
        )
        .unwrap_err();
        assert_eq!(err.code().as_u16(), 103);
        assert_eq!(err.to_string(), "Invalid Request member: tidyapi=2");
    }

    #[test]
    fn test_should_reject_signed_array_body() {
        let body = r#"[1,2,3]"#;
        let header = client_header(body, 0);

        let err = verify_request(
            TEST_ENDPOINT,
            &header,
            body,
            &test_secret_provider(),
            DEFAULT_MAX_SECONDS_GAP,
        )
        .unwrap_err();
        assert_eq!(err, ApiError::InvalidRequestBodyType(body.to_owned()));
    }

    #[tokio::test]
    async fn test_should_share_verdicts_between_sync_and_async_entry_points() {
        let body = r#"{"tidyapi":1,"method":"ping","id":"abc"}"#;
        let header = client_header(body, 0);
        let secrets = test_secret_provider();

        let sync_verdict =
            verify_request(TEST_ENDPOINT, &header, body, &secrets, DEFAULT_MAX_SECONDS_GAP)
                .unwrap();
        let async_verdict = verify_request_async(
            TEST_ENDPOINT,
            &header,
            body,
            &secrets,
            DEFAULT_MAX_SECONDS_GAP,
        )
        .await
        .unwrap();

        assert_eq!(sync_verdict.request, async_verdict.request);
        assert_eq!(sync_verdict.unix_seconds, async_verdict.unix_seconds);
        assert_eq!(sync_verdict.access_key, async_verdict.access_key);
    }
}
