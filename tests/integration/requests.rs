//! Wire format of outgoing calls

use crate::integration::mock_server::MockServerFixture;
use mockito::Matcher;
use vk_ads_client::types::CampaignStatus;
use vk_ads_client::{Account, VkClient};

#[tokio::test]
async fn test_form_body_reaches_server() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_method_with_form(
            "ads.updateCampaigns",
            &[
                ("account_id", "1"),
                ("access_token", "tok"),
                ("v", "5.131"),
                ("data", r#"[{"campaign_id":10,"status":0}]"#),
            ],
            r#"{"response":[{"id":10}]}"#,
        )
        .await;
    let client = fixture.create_test_client().unwrap();

    let records = client
        .update_campaigns_status(&Account::new(1, "tok"), &[10], CampaignStatus::Stopped)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].content()["id"], 10);
}

#[tokio::test]
async fn test_group_lookup_over_http() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_method_with_form(
            "groups.getById",
            &[("group_id", "mdk"), ("fields", "members_count,screen_name")],
            r#"{"response":[{"id":10639516,"screen_name":"mdk","members_count":12000000}]}"#,
        )
        .await;
    let client = fixture.create_test_client().unwrap();

    let records = client.get_group("mdk").await.unwrap();

    mock.assert_async().await;
    assert_eq!(records[0].content()["screen_name"], "mdk");
    let last = client.last_response().unwrap();
    assert_eq!(last.status, 200);
    assert!(last.body.contains("members_count"));
}

#[tokio::test]
async fn test_request_id_and_user_agent_headers() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/method/ads.getClients")
            .match_header(
                "x-request-id",
                Matcher::Regex(
                    r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$".into(),
                ),
            )
            .match_header("user-agent", "ads-bot/1.0")
            .with_status(200)
            .with_body(r#"{"response":[]}"#)
            .expect(2)
            .create_async()
            .await
    };
    let client = VkClient::builder()
        .base_url(&fixture.base_url)
        .user_agent("ads-bot/1.0")
        .build()
        .unwrap();
    let account = Account::new(1, "t");

    client.get_clients(&account).await.unwrap();
    let first = client.last_request().unwrap().id;
    client.get_clients(&account).await.unwrap();
    let second = client.last_request().unwrap().id;

    mock.assert_async().await;
    assert_ne!(first, second);
}
