//! Integration tests for conversations.* methods

use super::*;
use serde_json::json;
use slack_conversations::services::conversations::*;
use slack_conversations::transport::ReqwestTransport;
use slack_conversations::{
    RequestContext, SlackClientImpl, SlackConfigBuilder, SlackError, TransportError,
};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_string, body_string_contains};

#[tokio::test]
async fn test_members_integration_success() {
    let mock_server = setup_mock_server().await;

    api_method("conversations.members")
        .and(body_string(format!("token={}&channel=C1&limit=2", TEST_TOKEN)))
        .respond_with(success_response(json!({
            "ok": true,
            "members": ["U1", "U2"],
            "response_metadata": {"next_cursor": "dXNlcjpVMDYx"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .conversations()
        .members(ConversationMembersRequest::new("C1").limit(2))
        .await
        .unwrap();

    assert_eq!(page.items, vec!["U1", "U2"]);
    assert_eq!(page.next_cursor.as_str(), "dXNlcjpVMDYx");
}

#[tokio::test]
async fn test_members_pager_integration() {
    let mock_server = setup_mock_server().await;

    api_method("conversations.members")
        .and(body_string_contains("cursor=page2"))
        .respond_with(success_response(json!({
            "ok": true,
            "members": ["U3"],
            "response_metadata": {"next_cursor": ""}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    api_method("conversations.members")
        .respond_with(success_response(json!({
            "ok": true,
            "members": ["U1", "U2"],
            "response_metadata": {"next_cursor": "page2"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let members = client
        .conversations()
        .members_pager("C1", 0)
        .collect_all()
        .await
        .unwrap();

    assert_eq!(members, vec!["U1", "U2", "U3"]);
}

#[tokio::test]
async fn test_invite_integration_joins_users() {
    let mock_server = setup_mock_server().await;

    api_method("conversations.invite")
        .and(body_string_contains("users=U1%2CU2"))
        .respond_with(success_response(json!({
            "ok": true,
            "channel": {"id": "C1", "name": "launch", "members": ["U0", "U1", "U2"]}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let channel = client
        .conversations()
        .invite(InviteToConversationRequest::new("C1", ["U1", "U2"]))
        .await
        .unwrap();

    assert_eq!(channel.name(), "launch");
    assert_eq!(channel.members().len(), 3);
}

#[tokio::test]
async fn test_create_integration_sends_private_flag() {
    let mock_server = setup_mock_server().await;

    api_method("conversations.create")
        .and(body_string(format!("token={}&name=project-x&is_private=false", TEST_TOKEN)))
        .respond_with(success_response(json!({
            "ok": true,
            "channel": {"id": "C9", "name": "project-x", "is_channel": true, "created": 1700000000}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let channel = client
        .conversations()
        .create(CreateConversationRequest::new("project-x"))
        .await
        .unwrap();

    assert_eq!(channel.id().as_str(), "C9");
    assert_eq!(channel.created().unix_seconds(), 1700000000);
}

#[tokio::test]
async fn test_archive_integration_remote_error() {
    let mock_server = setup_mock_server().await;

    api_method("conversations.archive")
        .respond_with(success_response(json!({
            "ok": false,
            "error": "channel_not_found"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .conversations()
        .archive(ArchiveConversationRequest::new("C404"))
        .await
        .unwrap_err();

    assert!(err.is_remote());
    assert_eq!(err.to_string(), "channel_not_found");
}

#[tokio::test]
async fn test_rate_limited_integration() {
    let mock_server = setup_mock_server().await;

    api_method("conversations.info")
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .conversations()
        .info(ConversationInfoRequest::new("C1"))
        .await
        .unwrap_err();

    match err {
        SlackError::Transport(TransportError::Status { status, retry_after }) => {
            assert_eq!(status, 429);
            assert_eq!(retry_after, Some(Duration::from_secs(30)));
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_html_body_integration_is_transport_error() {
    let mock_server = setup_mock_server().await;

    api_method("conversations.close")
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>upstream error</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .conversations()
        .close(CloseConversationRequest::new("D1"))
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

#[tokio::test]
async fn test_deadline_integration() {
    let mock_server = setup_mock_server().await;

    api_method("conversations.join")
        .respond_with(
            success_response(json!({"ok": true, "channel": {"id": "C1"}}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let ctx = RequestContext::with_timeout(Duration::from_millis(100));
    let err = client
        .conversations()
        .join_with_context(&ctx, JoinConversationRequest::new("C1"))
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_prebuilt_reqwest_client_integration() {
    let mock_server = setup_mock_server().await;

    api_method("conversations.leave")
        .and(body_string(format!("token={}&channel=C1", TEST_TOKEN)))
        .respond_with(success_response(json!({"ok": true, "not_in_channel": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = SlackConfigBuilder::new()
        .token(TEST_TOKEN)
        .unwrap()
        .base_url(&format!("{}/api", mock_server.uri()))
        .unwrap()
        .build()
        .unwrap();
    let transport = ReqwestTransport::with_client(reqwest::Client::new(), Duration::from_secs(5));
    let client = SlackClientImpl::with_transport(config, Arc::new(transport)).unwrap();

    let response = client
        .conversations()
        .leave(LeaveConversationRequest::new("C1"))
        .await
        .unwrap();

    assert!(response.not_in_channel);
}
