//! Integration tests for the admin surface.
//!
//! Requires a running API server, a migrated database, and the bootstrap
//! admin account (`demart-cli create-admin`); see the crate docs.

use demart_integration_tests::{admin_jwt, base_url, client, create_product, signup};
use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::test]
#[ignore = "Requires running API server, database, and bootstrap admin account"]
async fn test_same_category_path_resolves_to_same_leaf() {
    let client = client();
    let jwt = admin_jwt(&client).await;

    // Fresh names so the first create builds the whole path
    let suffix = Uuid::new_v4();
    let top = format!("top-{suffix}");
    let second = format!("second-{suffix}");
    let third = format!("third-{suffix}");
    let path = (top.as_str(), second.as_str(), third.as_str());

    let first = create_product(&client, &jwt, &format!("First {suffix}"), path).await;
    let second_product = create_product(&client, &jwt, &format!("Second {suffix}"), path).await;

    assert!(first["category_id"].is_i64());
    assert_eq!(first["category_id"], second_product["category_id"]);
}

#[tokio::test]
#[ignore = "Requires running API server, database, and bootstrap admin account"]
async fn test_customer_cannot_reach_admin_surface() {
    let client = client();
    let (_email, jwt) = signup(&client).await;

    let resp = client
        .get(format!("{}/api/admin/orders", base_url()))
        .bearer_auth(&jwt)
        .send()
        .await
        .expect("admin orders request failed");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "Requires running API server, database, and bootstrap admin account"]
async fn test_admin_can_update_and_delete_a_product() {
    let client = client();
    let jwt = admin_jwt(&client).await;

    let suffix = Uuid::new_v4();
    let top = format!("top-{suffix}");
    let second = format!("second-{suffix}");
    let third = format!("third-{suffix}");
    let product = create_product(
        &client,
        &jwt,
        &format!("Updatable {suffix}"),
        (top.as_str(), second.as_str(), third.as_str()),
    )
    .await;
    let product_id = product["id"].clone();

    let resp = client
        .put(format!("{}/api/admin/products/{product_id}", base_url()))
        .bearer_auth(&jwt)
        .json(&json!({ "price": "55.00", "discounted_price": "44.00" }))
        .send()
        .await
        .expect("product update failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("not JSON");
    assert_eq!(updated["price"], "55.00");
    assert_eq!(updated["discounted_price"], "44.00");
    // Absent fields are kept
    assert_eq!(updated["title"], product["title"]);

    let resp = client
        .delete(format!("{}/api/admin/products/{product_id}", base_url()))
        .bearer_auth(&jwt)
        .send()
        .await
        .expect("product delete failed");
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    let body: Value = resp.json().await.expect("not JSON");
    assert_eq!(body["message"], "Product deleted Successfully");
}
