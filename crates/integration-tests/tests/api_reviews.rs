//! Integration tests for product reviews.
//!
//! Requires a running API server, a migrated database, and a seeded catalog.

use demart_integration_tests::{base_url, client, signup};
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_review_roundtrip() {
    let client = client();
    let (_email, jwt) = signup(&client).await;

    let resp = client
        .get(format!("{}/api/products", base_url()))
        .send()
        .await
        .expect("product listing failed");
    let page: Value = resp.json().await.expect("not JSON");
    let product_id = page["content"][0]["id"].clone();

    let resp = client
        .post(format!("{}/api/reviews/create", base_url()))
        .bearer_auth(&jwt)
        .json(&json!({ "product_id": product_id, "review": "Fits well, great fabric." }))
        .send()
        .await
        .expect("review create failed");
    assert_eq!(resp.status(), StatusCode::ACCEPTED);

    let resp = client
        .get(format!("{}/api/reviews/product/{product_id}", base_url()))
        .send()
        .await
        .expect("review listing failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let reviews: Value = resp.json().await.expect("not JSON");
    let bodies: Vec<&str> = reviews
        .as_array()
        .expect("reviews not an array")
        .iter()
        .filter_map(|r| r["body"].as_str())
        .collect();
    assert!(bodies.contains(&"Fits well, great fabric."));
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_review_for_missing_product_is_not_found() {
    let client = client();
    let (_email, jwt) = signup(&client).await;

    let resp = client
        .post(format!("{}/api/reviews/create", base_url()))
        .bearer_auth(&jwt)
        .json(&json!({ "product_id": 999_999_999, "review": "ghost product" }))
        .send()
        .await
        .expect("review create failed");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("not JSON");
    assert_eq!(body["message"], "product not found with id 999999999");
}
