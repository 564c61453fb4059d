//! Integration tests for signup, signin, and profile access.
//!
//! Requires a running API server and database; see the crate docs.

use demart_integration_tests::{base_url, client, random_email, signup};
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_welcome_message() {
    let resp = client()
        .get(base_url())
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("not JSON");
    assert_eq!(body["message"], "Welcome To E-Commerce System");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_signup_then_signin() {
    let client = client();
    let (email, _jwt) = signup(&client).await;

    let resp = client
        .post(format!("{}/auth/signin", base_url()))
        .json(&json!({ "email": email, "password": "integration-test-pw" }))
        .send()
        .await
        .expect("signin request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("not JSON");
    assert!(body["jwt"].as_str().is_some());
    assert_eq!(body["message"], "Login Success");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_duplicate_signup_is_conflict() {
    let client = client();
    let (email, _jwt) = signup(&client).await;

    let resp = client
        .post(format!("{}/auth/signup", base_url()))
        .json(&json!({
            "email": email,
            "password": "integration-test-pw",
            "first_name": "Test",
            "last_name": "User",
        }))
        .send()
        .await
        .expect("signup request failed");

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = resp.json().await.expect("not JSON");
    assert_eq!(body["message"], "Email Is Already Used With Another Account");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_wrong_password_is_unauthorized() {
    let client = client();
    let (email, _jwt) = signup(&client).await;

    let resp = client
        .post(format!("{}/auth/signin", base_url()))
        .json(&json!({ "email": email, "password": "not-the-password" }))
        .send()
        .await
        .expect("signin request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("not JSON");
    assert_eq!(body["message"], "Invalid username or password");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_unknown_email_gets_same_message_as_wrong_password() {
    let resp = client()
        .post(format!("{}/auth/signin", base_url()))
        .json(&json!({ "email": random_email(), "password": "whatever-pw" }))
        .send()
        .await
        .expect("signin request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("not JSON");
    assert_eq!(body["message"], "Invalid username or password");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_malformed_email_gets_same_message_as_wrong_password() {
    let resp = client()
        .post(format!("{}/auth/signin", base_url()))
        .json(&json!({ "email": "not-an-email", "password": "whatever-pw" }))
        .send()
        .await
        .expect("signin request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("not JSON");
    assert_eq!(body["message"], "Invalid username or password");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_profile_requires_bearer_token() {
    let client = client();

    let resp = client
        .get(format!("{}/api/users/profile", base_url()))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let (email, jwt) = signup(&client).await;
    let resp = client
        .get(format!("{}/api/users/profile", base_url()))
        .bearer_auth(&jwt)
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    let body: Value = resp.json().await.expect("not JSON");
    assert_eq!(body["email"], email);
    assert!(body.get("password_hash").is_none());
}
