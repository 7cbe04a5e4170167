//! Error classification over HTTP

use crate::integration::mock_server::MockServerFixture;
use vk_ads_client::{Account, ErrorKind};

#[tokio::test]
async fn test_error_classification() {
    let test_cases = vec![
        (6, ErrorKind::Flood),
        (601, ErrorKind::Flood),
        (5, ErrorKind::Access),
        (600, ErrorKind::Access),
        (100, ErrorKind::Api),
        (113, ErrorKind::Api),
    ];

    for (code, expected) in test_cases {
        let fixture = MockServerFixture::new().await;
        let _mock = fixture
            .mock_method(
                "ads.getClients",
                200,
                &format!(r#"{{"error":{{"error_code":{},"error_msg":"Test error"}}}}"#, code),
            )
            .await;
        let client = fixture.create_test_client().unwrap();

        let err = client.get_clients(&Account::new(1, "t")).await.unwrap_err();
        assert_eq!(err.kind(), expected, "code {}", code);
        assert_eq!(err.code(), code);
        assert_eq!(err.message(), "Test error");
    }
}

#[tokio::test]
async fn test_item_errors_are_data() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_method(
            "ads.createClients",
            200,
            r#"{"response":[{"id":501},{"id":0,"error_code":100,"error_desc":"Invalid name"}]}"#,
        )
        .await;
    let client = fixture.create_test_client().unwrap();

    let clients = [
        serde_json::json!({"name": "a"}),
        serde_json::json!({"name": ""}),
    ];
    let records = client
        .create_clients(&Account::new(1, "t"), &clients)
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert!(!records[0].is_error());
    assert!(records[1].is_error());
    assert_eq!(records[1].error(), "Invalid name");
}

#[tokio::test]
async fn test_http_status_failure_is_connect_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_method("ads.getClients", 503, "Service Unavailable").await;
    let client = fixture.create_test_client().unwrap();

    let err = client.get_clients(&Account::new(1, "t")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connect);
    assert_eq!(err.code(), 503);
    assert!(client.last_response().is_none());
}

#[tokio::test]
async fn test_html_body_is_bad_response_content() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_method("ads.getClients", 200, "<html>maintenance</html>").await;
    let client = fixture.create_test_client().unwrap();

    let err = client.get_clients(&Account::new(1, "t")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadResponseContent);
    assert_eq!(err.code(), -100);
}

#[tokio::test]
async fn test_unreachable_server_is_connect_error() {
    let client = vk_ads_client::VkClient::builder()
        .base_url("http://127.0.0.1:9/method/")
        .timeout_secs(2)
        .build()
        .unwrap();

    let err = client.get_clients(&Account::new(1, "t")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connect);
}
