use serde_json::json;

use crate::helpers::{TestApp, error_message};

#[tokio::test]
async fn sign_in_returns_tokens() {
    let app = TestApp::new().await;
    app.mock_cognito(
        "InitiateAuth",
        200,
        json!({
            "AuthenticationResult": {
                "AccessToken": "access-token",
                "ExpiresIn": 3600,
                "IdToken": "id-token",
                "RefreshToken": "refresh-token",
                "TokenType": "Bearer"
            },
            "ChallengeParameters": {}
        }),
    )
    .await;

    let response = app
        .post_json(
            "/signIn",
            &json!({ "username": "jdoe", "password": "Sup3r-secret!" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let payload: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        payload,
        json!({
            "idToken": "id-token",
            "accessToken": "access-token",
            "expiresIn": 3600,
            "refreshToken": "refresh-token"
        })
    );
}

#[tokio::test]
async fn sign_in_returns_401_for_wrong_password() {
    let app = TestApp::new().await;
    app.mock_cognito_error(
        "InitiateAuth",
        "NotAuthorizedException",
        "Incorrect username or password.",
    )
    .await;

    let response = app
        .post_json("/signIn", &json!({ "username": "jdoe", "password": "wrong" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        error_message(response).await,
        "Incorrect username or password."
    );
}

#[tokio::test]
async fn sign_in_returns_429_when_limit_exceeded() {
    let app = TestApp::new().await;
    app.mock_cognito_error(
        "InitiateAuth",
        "LimitExceededException",
        "Attempt limit exceeded, please try after some time.",
    )
    .await;

    let response = app
        .post_json(
            "/signIn",
            &json!({ "username": "jdoe", "password": "Sup3r-secret!" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 429);
}

#[tokio::test]
async fn sign_in_challenge_is_an_internal_error() {
    let app = TestApp::new().await;
    app.mock_cognito(
        "InitiateAuth",
        200,
        json!({ "ChallengeName": "NEW_PASSWORD_REQUIRED", "Session": "session" }),
    )
    .await;

    let response = app
        .post_json(
            "/signIn",
            &json!({ "username": "jdoe", "password": "Sup3r-secret!" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(error_message(response).await, "Internal Server Error.");
}
