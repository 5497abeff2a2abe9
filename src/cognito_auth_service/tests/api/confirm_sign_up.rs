use serde_json::json;

use crate::helpers::{TestApp, error_message};

#[tokio::test]
async fn confirm_sign_up_returns_empty_200() {
    let app = TestApp::new().await;
    app.mock_cognito("ConfirmSignUp", 200, json!({})).await;

    let response = app
        .post_json(
            "/confirmSignUp",
            &json!({ "username": "jdoe", "confirmationCode": "123456" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn confirm_sign_up_returns_400_for_wrong_code() {
    let app = TestApp::new().await;
    app.mock_cognito_error(
        "ConfirmSignUp",
        "CodeMismatchException",
        "Invalid verification code provided, please try again.",
    )
    .await;

    let response = app
        .post_json(
            "/confirmSignUp",
            &json!({ "username": "jdoe", "confirmationCode": "000000" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        error_message(response).await,
        "Invalid verification code provided, please try again."
    );
}

#[tokio::test]
async fn confirm_sign_up_returns_404_for_unknown_user() {
    let app = TestApp::new().await;
    app.mock_cognito_error(
        "ConfirmSignUp",
        "UserNotFoundException",
        "Username/client id combination not found.",
    )
    .await;

    let response = app
        .post_json(
            "/confirmSignUp",
            &json!({ "username": "ghost", "confirmationCode": "123456" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
}
