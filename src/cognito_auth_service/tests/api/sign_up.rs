use fake::{
    Fake,
    faker::internet::en::{SafeEmail, Username},
};
use serde_json::json;

use crate::helpers::{TestApp, error_message};

fn sign_up_body() -> serde_json::Value {
    let username: String = Username().fake();
    let email: String = SafeEmail().fake();
    json!({ "username": username, "email": email, "password": "Sup3r-secret!" })
}

#[tokio::test]
async fn sign_up_returns_200_with_delivery_message() {
    let app = TestApp::new().await;
    app.mock_cognito(
        "SignUp",
        200,
        json!({
            "UserSub": "7d8a3c2e-1f4b-4e6a-9c0d-2b5e8f1a3c7d",
            "UserConfirmed": false,
            "CodeDeliveryDetails": {
                "AttributeName": "email",
                "DeliveryMedium": "EMAIL",
                "Destination": "j***@e***"
            }
        }),
    )
    .await;
    let body = sign_up_body();

    let response = app.post_json("/signUp", &body).await;

    assert_eq!(response.status().as_u16(), 200);
    let payload: serde_json::Value = response.json().await.unwrap();
    assert_eq!(payload["userId"], "7d8a3c2e-1f4b-4e6a-9c0d-2b5e8f1a3c7d");
    assert_eq!(payload["email"], body["email"]);
    assert_eq!(
        payload["codeDeliveryMessage"],
        "A Confirmation Code has been sent to j***@e*** via EMAIL"
    );
}

#[tokio::test]
async fn sign_up_returns_409_when_user_exists() {
    let app = TestApp::new().await;
    app.mock_cognito_error("SignUp", "UsernameExistsException", "User already exists")
        .await;

    let response = app.post_json("/signUp", &sign_up_body()).await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(error_message(response).await, "User already exists");
}

#[tokio::test]
async fn sign_up_returns_400_for_invalid_password() {
    let app = TestApp::new().await;
    app.mock_cognito_error(
        "SignUp",
        "InvalidPasswordException",
        "Password did not conform with policy: Password not long enough",
    )
    .await;

    let response = app.post_json("/signUp", &sign_up_body()).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        error_message(response).await,
        "Password did not conform with policy: Password not long enough"
    );
}

#[tokio::test]
async fn sign_up_hides_unknown_provider_errors() {
    let app = TestApp::new().await;
    app.mock_cognito_error(
        "SignUp",
        "InternalErrorException",
        "Something broke inside the user pool",
    )
    .await;

    let response = app.post_json("/signUp", &sign_up_body()).await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(error_message(response).await, "Internal Server Error.");
}

#[tokio::test]
async fn sign_up_returns_400_for_malformed_body() {
    let app = TestApp::new().await;
    app.expect_no_cognito_call().await;

    let response = app
        .post_json("/signUp", &json!({ "username": "jdoe" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert!(!error_message(response).await.is_empty());
}
