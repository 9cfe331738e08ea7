//! HTTP contract tests using WireMock.
//!
//! These run the real reqwest transport against a mock Jusibe server and check
//! method, path, query, basic auth, and form body for every operation.

use jusibe::{
    BulkMessageId, Credentials, JusibeClient, JusibeError, KnownStatus, MessageId,
    ProviderErrorKind, Reply, SendBulkSms, SendSms,
};
use wiremock::matchers::{basic_auth, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PUBLIC_KEY: &str = "test_public_key";
const ACCESS_TOKEN: &str = "test_access_token";

fn create_test_client(mock_server: &MockServer) -> JusibeClient {
    JusibeClient::builder(Credentials::new(PUBLIC_KEY, ACCESS_TOKEN).unwrap())
        .base_url(mock_server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn send_sms_transmits_payload_unmodified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/smsapi/send_sms"))
        .and(basic_auth(PUBLIC_KEY, ACCESS_TOKEN))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "to=8038142771&from=TEST+JUSIBE&message=I+LOVE+YOU%2C+BABY",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "Sent",
            "message_id": "xeqd6rrd26",
            "sms_credits_used": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request = SendSms::from_parts("8038142771", "TEST JUSIBE", "I LOVE YOU, BABY").unwrap();

    let response = client.send_sms(&request).await.unwrap().success().unwrap();
    assert_eq!(
        response.status.as_ref().and_then(|status| status.known_kind()),
        Some(KnownStatus::Sent)
    );
    assert_eq!(
        response.message_id.as_ref().map(MessageId::as_str),
        Some("xeqd6rrd26")
    );
    assert_eq!(response.sms_credits_used, Some(1));

    let last = client.last_response().unwrap();
    assert_eq!(last["status"], "Sent");
    assert_eq!(last["message_id"], "xeqd6rrd26");
    assert_eq!(last["sms_credits_used"], 1);
}

#[tokio::test]
async fn send_bulk_sms_posts_comma_separated_destinations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/smsapi/bulk/send_sms"))
        .and(basic_auth(PUBLIC_KEY, ACCESS_TOKEN))
        .and(body_string(
            "to=8038142771%2C8038142772&from=TEST+JUSIBE&message=hello",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "Submitted",
            "bulk_message_id": "n2v9gby1jy",
            "request_speed": 0.05
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request =
        SendBulkSms::from_parts("8038142771,8038142772", "TEST JUSIBE", "hello").unwrap();

    let response = client
        .send_bulk_sms(&request)
        .await
        .unwrap()
        .success()
        .unwrap();
    assert_eq!(
        response.status.as_ref().and_then(|status| status.known_kind()),
        Some(KnownStatus::Submitted)
    );
    assert_eq!(
        response.bulk_message_id.as_ref().map(BulkMessageId::as_str),
        Some("n2v9gby1jy")
    );
    assert_eq!(response.request_speed, Some(0.05));
}

#[tokio::test]
async fn check_available_credits_returns_numeric_credits() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/smsapi/get_credits"))
        .and(basic_auth(PUBLIC_KEY, ACCESS_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sms_credits": 200
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let response = client
        .check_available_credits()
        .await
        .unwrap()
        .success()
        .unwrap();
    assert_eq!(response.sms_credits, Some(200));
    assert!(client.last_response().unwrap()["sms_credits"].is_number());
}

#[tokio::test]
async fn check_delivery_status_echoes_message_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/smsapi/delivery_status"))
        .and(query_param("message_id", "xeqd6rrd26"))
        .and(basic_auth(PUBLIC_KEY, ACCESS_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message_id": "xeqd6rrd26",
            "status": "Delivered",
            "date_sent": "2016-07-02 10:12:01",
            "date_delivered": "2016-07-02 10:12:09"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let id = MessageId::new("xeqd6rrd26").unwrap();

    let response = client
        .check_delivery_status(&id)
        .await
        .unwrap()
        .success()
        .unwrap();
    assert_eq!(response.message_id.as_ref(), Some(&id));
    assert_eq!(
        response.status.as_ref().and_then(|status| status.known_kind()),
        Some(KnownStatus::Delivered)
    );
    assert_eq!(response.date_sent.as_deref(), Some("2016-07-02 10:12:01"));
    assert_eq!(response.date_delivered.as_deref(), Some("2016-07-02 10:12:09"));
}

#[tokio::test]
async fn check_bulk_delivery_status_returns_all_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/smsapi/bulk/status"))
        .and(query_param("bulk_message_id", "n2v9gby1jy"))
        .and(basic_auth(PUBLIC_KEY, ACCESS_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bulk_message_id": "n2v9gby1jy",
            "status": "Completed",
            "created": "2016-07-02 10:12:01",
            "processed": "2016-07-02 10:12:03",
            "total_numbers": 2,
            "total_unique_numbers": 2,
            "total_valid_numbers": 2,
            "total_invalid_numbers": 0
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let bulk_id = BulkMessageId::new("n2v9gby1jy").unwrap();

    let response = client
        .check_bulk_delivery_status(&bulk_id)
        .await
        .unwrap()
        .success()
        .unwrap();
    assert_eq!(response.bulk_message_id.as_ref(), Some(&bulk_id));
    assert_eq!(
        response.status.as_ref().and_then(|status| status.known_kind()),
        Some(KnownStatus::Completed)
    );
    assert_eq!(response.created.as_deref(), Some("2016-07-02 10:12:01"));
    assert_eq!(response.processed.as_deref(), Some("2016-07-02 10:12:03"));
    assert_eq!(response.total_numbers, Some(2));
    assert_eq!(response.total_unique_numbers, Some(2));
    assert_eq!(response.total_valid_numbers, Some(2));
    assert_eq!(response.total_invalid_numbers, Some(0));
}

#[tokio::test]
async fn invalid_credentials_yield_rejected_reply_not_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/smsapi/get_credits"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "Invalid API Key!"
        })))
        .mount(&mock_server)
        .await;

    let client = JusibeClient::builder(Credentials::new("wrong", "keys").unwrap())
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    let reply = client.check_available_credits().await.unwrap();
    match reply {
        Reply::Rejected(err) => {
            assert_eq!(err.kind, ProviderErrorKind::InvalidApiKey);
            assert_eq!(err.message, "Invalid API Key!");
        }
        other => panic!("unexpected reply: {other:?}"),
    }
    assert_eq!(client.last_response().unwrap()["error"], "Invalid API Key!");
    assert_eq!(client.last_status(), Some(401));
}

#[tokio::test]
async fn invalid_message_id_yields_rejected_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/smsapi/delivery_status"))
        .and(query_param("message_id", "does-not-exist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "invalid_message_id": "Invalid message ID"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let id = MessageId::new("does-not-exist").unwrap();

    let reply = client.check_delivery_status(&id).await.unwrap();
    assert_eq!(
        reply.rejection().map(|err| err.kind),
        Some(ProviderErrorKind::InvalidMessageId)
    );
}

#[tokio::test]
async fn server_errors_without_provider_body_are_http_status_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/smsapi/get_credits"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.check_available_credits().await.unwrap_err();
    match err {
        JusibeError::HttpStatus { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body.as_deref(), Some("Bad Gateway"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let client = JusibeClient::builder(Credentials::new(PUBLIC_KEY, ACCESS_TOKEN).unwrap())
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.check_available_credits().await.unwrap_err();
    assert!(matches!(err, JusibeError::Transport(_)));
    assert!(matches!(client.last_response(), Err(JusibeError::NoResponse)));
}
