//! Wire-contract fixtures.
//!
//! These pin the exact bytes independently written peers must agree on: the
//! full header string for a fixed scenario, the signature alone, and the
//! serialized error body.

#[cfg(test)]
mod tests {
    use tidyapi_auth::{build_authorization_header, compute_signature, parse_authorization};
    use tidyapi_model::{ApiError, ApiRequest, ErrorBody};

    use crate::{TEST_ACCESS_KEY, TEST_ACCESS_SECRET, TEST_ENDPOINT};

    const BODY: &str = r#"{"tidyapi":1,"method":"create","id":"r1"}"#;
    const UNIX_SECONDS: i64 = 1_700_000_000;

    #[test]
    fn test_should_produce_pinned_signature() {
        let signature = compute_signature(
            TEST_ENDPOINT,
            BODY.as_bytes(),
            "1700000000",
            TEST_ACCESS_KEY,
            TEST_ACCESS_SECRET,
        );
        assert_eq!(signature, "+srz1mUTSF5i04c806fJVc6kmKSgnyMwmqhc2D885aY=");
    }

    #[test]
    fn test_should_produce_pinned_header() {
        let header = build_authorization_header(
            TEST_ENDPOINT,
            BODY,
            UNIX_SECONDS,
            TEST_ACCESS_KEY,
            TEST_ACCESS_SECRET,
        );
        assert_eq!(
            header,
            "HS256 1700000000 ak1 +srz1mUTSF5i04c806fJVc6kmKSgnyMwmqhc2D885aY="
        );
    }

    #[test]
    fn test_should_reject_pinned_header_as_stale_today() {
        // The pinned timestamp is far outside any reasonable window by now;
        // the wall-clock check turns it into a 104.
        let header = build_authorization_header(
            TEST_ENDPOINT,
            BODY,
            UNIX_SECONDS,
            TEST_ACCESS_KEY,
            TEST_ACCESS_SECRET,
        );
        let err = parse_authorization(&header, 300).unwrap_err();
        assert_eq!(err, ApiError::InvalidTime("1700000000".to_owned()));
    }

    #[test]
    fn test_should_round_trip_envelope_body() {
        let request = ApiRequest::new("create", "r1", serde_json::json!({"qty": 3}));
        let decoded = ApiRequest::from_body(&request.to_body()).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_should_serialize_error_body_for_the_wire() {
        let err = ApiError::InvalidRequestMember {
            name: "method",
            value: "undefined".to_owned(),
        };
        let json = serde_json::to_string(&ErrorBody::from(&err)).unwrap();
        assert_eq!(
            json,
            r#"{"code":103,"message":"Invalid Request member: method=undefined"}"#
        );
    }
}
