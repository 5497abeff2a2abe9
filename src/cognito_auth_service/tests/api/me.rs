use serde_json::json;

use crate::helpers::{ACCESS_TOKEN, TestApp, error_message};

#[tokio::test]
async fn me_returns_profile() {
    let app = TestApp::new().await;
    app.mock_cognito(
        "GetUser",
        200,
        json!({
            "Username": "jdoe",
            "UserAttributes": [
                { "Name": "sub", "Value": "7d8a3c2e" },
                { "Name": "email", "Value": "jdoe@example.com" }
            ]
        }),
    )
    .await;

    let response = app.get_me(Some(ACCESS_TOKEN)).await;

    assert_eq!(response.status().as_u16(), 200);
    let payload: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        payload,
        json!({
            "username": "jdoe",
            "preferredMfaSetting": null,
            "attributes": { "sub": "7d8a3c2e", "email": "jdoe@example.com" }
        })
    );
}

#[tokio::test]
async fn me_without_token_returns_401() {
    let app = TestApp::new().await;
    app.expect_no_cognito_call().await;

    let response = app.get_me(None).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Missing bearer token");
}

#[tokio::test]
async fn me_with_revoked_token_returns_401() {
    let app = TestApp::new().await;
    app.mock_cognito_error(
        "GetUser",
        "NotAuthorizedException",
        "Access Token has been revoked",
    )
    .await;

    let response = app.get_me(Some(ACCESS_TOKEN)).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Access Token has been revoked");
}

#[tokio::test]
async fn me_returns_500_when_provider_is_down() {
    let app = TestApp::new().await;
    app.mock_cognito("GetUser", 503, json!({})).await;

    let response = app.get_me(Some(ACCESS_TOKEN)).await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(error_message(response).await, "Internal Server Error.");
}
