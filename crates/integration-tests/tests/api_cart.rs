//! Integration tests for the cart flow.
//!
//! Requires a running API server, a migrated database, and at least one
//! seeded product (`demart-cli seed`).

use demart_integration_tests::{admin_jwt, base_url, client, create_product, signup};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Any product from the catalog, assumed seeded.
async fn any_product(client: &Client) -> Value {
    let resp = client
        .get(format!("{}/api/products", base_url()))
        .send()
        .await
        .expect("product listing failed");
    assert_eq!(resp.status(), StatusCode::ACCEPTED);

    let page: Value = resp.json().await.expect("not JSON");
    page["content"][0].clone()
}

async fn add_to_cart(client: &Client, jwt: &str, product: &Value, quantity: i64) {
    let size = product["sizes"][0].as_str().unwrap_or("M");
    let resp = client
        .put(format!("{}/api/cart/add", base_url()))
        .bearer_auth(jwt)
        .json(&json!({
            "product_id": product["id"],
            "size": size,
            "quantity": quantity,
        }))
        .send()
        .await
        .expect("add to cart failed");
    assert_eq!(resp.status(), StatusCode::OK);
}

async fn fetch_cart(client: &Client, jwt: &str) -> Value {
    let resp = client
        .get(format!("{}/api/cart", base_url()))
        .bearer_auth(jwt)
        .send()
        .await
        .expect("cart fetch failed");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("not JSON")
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_new_user_has_empty_cart() {
    let client = client();
    let (_email, jwt) = signup(&client).await;

    let cart = fetch_cart(&client, &jwt).await;
    assert_eq!(cart["total_items"], 0);
    assert_eq!(cart["items"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_adding_same_product_and_size_merges_quantity() {
    let client = client();
    let (_email, jwt) = signup(&client).await;
    let product = any_product(&client).await;

    add_to_cart(&client, &jwt, &product, 1).await;
    add_to_cart(&client, &jwt, &product, 2).await;

    let cart = fetch_cart(&client, &jwt).await;
    let items = cart["items"].as_array().expect("items missing");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 3);
    assert_eq!(cart["total_items"], 3);
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_cart_totals_follow_item_mutations() {
    let client = client();
    let (_email, jwt) = signup(&client).await;
    let product = any_product(&client).await;

    add_to_cart(&client, &jwt, &product, 2).await;

    let cart = fetch_cart(&client, &jwt).await;
    let item_id = cart["items"][0]["id"].clone();

    // Bump the quantity and check the aggregates move with it
    let resp = client
        .put(format!("{}/api/cart_items/{item_id}", base_url()))
        .bearer_auth(&jwt)
        .json(&json!({ "quantity": 5 }))
        .send()
        .await
        .expect("item update failed");
    assert_eq!(resp.status(), StatusCode::ACCEPTED);

    let cart = fetch_cart(&client, &jwt).await;
    assert_eq!(cart["total_items"], 5);

    // Remove the item and check the cart is empty again
    let resp = client
        .delete(format!("{}/api/cart_items/{item_id}", base_url()))
        .bearer_auth(&jwt)
        .send()
        .await
        .expect("item removal failed");
    assert_eq!(resp.status(), StatusCode::ACCEPTED);

    let cart = fetch_cart(&client, &jwt).await;
    assert_eq!(cart["total_items"], 0);
}

#[tokio::test]
#[ignore = "Requires running API server, database, and bootstrap admin account"]
async fn test_item_prices_stay_snapshotted_after_catalog_reprice() {
    let client = client();
    let admin = admin_jwt(&client).await;
    let (_email, jwt) = signup(&client).await;

    // A dedicated product whose catalog price this test can change
    let suffix = Uuid::new_v4();
    let top = format!("top-{suffix}");
    let second = format!("second-{suffix}");
    let third = format!("third-{suffix}");
    let product = create_product(
        &client,
        &admin,
        &format!("Repriced {suffix}"),
        (top.as_str(), second.as_str(), third.as_str()),
    )
    .await;

    add_to_cart(&client, &jwt, &product, 1).await;

    // Reprice the product in the catalog after the item was added
    let resp = client
        .put(format!("{}/api/admin/products/{}", base_url(), product["id"]))
        .bearer_auth(&admin)
        .json(&json!({ "price": "99.00", "discounted_price": "88.00" }))
        .send()
        .await
        .expect("product update failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let cart = fetch_cart(&client, &jwt).await;
    let item_id = cart["items"][0]["id"].clone();

    // A quantity update must keep the add-time per-unit prices, not
    // re-derive them from the live product
    let resp = client
        .put(format!("{}/api/cart_items/{item_id}", base_url()))
        .bearer_auth(&jwt)
        .json(&json!({ "quantity": 2 }))
        .send()
        .await
        .expect("item update failed");
    assert_eq!(resp.status(), StatusCode::ACCEPTED);

    let item: Value = resp.json().await.expect("not JSON");
    assert_eq!(item["quantity"], 2);
    assert_eq!(item["price"], product["price"]);
    assert_eq!(item["discounted_price"], product["discounted_price"]);

    // Aggregates come from the snapshot as well
    let cart = fetch_cart(&client, &jwt).await;
    assert_eq!(cart["total_price"], "80.00");
    assert_eq!(cart["total_discounted_price"], "60.00");
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_cannot_touch_another_users_cart_item() {
    let client = client();
    let (_owner_email, owner_jwt) = signup(&client).await;
    let (_other_email, other_jwt) = signup(&client).await;
    let product = any_product(&client).await;

    add_to_cart(&client, &owner_jwt, &product, 1).await;
    let cart = fetch_cart(&client, &owner_jwt).await;
    let item_id = cart["items"][0]["id"].clone();

    let resp = client
        .put(format!("{}/api/cart_items/{item_id}", base_url()))
        .bearer_auth(&other_jwt)
        .json(&json!({ "quantity": 9 }))
        .send()
        .await
        .expect("item update failed");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = client
        .delete(format!("{}/api/cart_items/{item_id}", base_url()))
        .bearer_auth(&other_jwt)
        .send()
        .await
        .expect("item removal failed");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_adding_missing_product_is_not_found() {
    let client = client();
    let (_email, jwt) = signup(&client).await;

    let resp = client
        .put(format!("{}/api/cart/add", base_url()))
        .bearer_auth(&jwt)
        .json(&json!({ "product_id": 999_999_999, "size": "M", "quantity": 1 }))
        .send()
        .await
        .expect("add to cart failed");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("not JSON");
    assert_eq!(body["message"], "product not found with id 999999999");
}
