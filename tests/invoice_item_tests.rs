//! Integration tests for the invoice item client.
//!
//! These tests run the full stack (`StripeClient` -> `HttpBackend` ->
//! reqwest) against a wiremock server standing in for the API.

use stripe_api::rest::resources::{InvoiceItemListParams, InvoiceItemParams};
use stripe_api::{
    ApiBase, ApiKey, ApiVersion, Error, ErrorType, ListIterator, ListParams, StripeClient,
    StripeConfig,
};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_client(server: &MockServer) -> StripeClient {
    let config = StripeConfig::builder()
        .api_key(ApiKey::new("sk_test_123").unwrap())
        .api_base(ApiBase::new(server.uri()).unwrap())
        .api_version(ApiVersion::new("2018-02-28").unwrap())
        .build()
        .unwrap();
    StripeClient::new(&config).unwrap()
}

fn list_body(ids: &[&str], has_more: bool) -> serde_json::Value {
    let data: Vec<_> = ids
        .iter()
        .map(|id| serde_json::json!({"id": id, "object": "invoiceitem", "amount": 100}))
        .collect();
    serde_json::json!({
        "object": "list",
        "url": "/v1/invoiceitems",
        "has_more": has_more,
        "data": data,
    })
}

// ============================================================================
// Retrieve
// ============================================================================

#[tokio::test]
async fn test_get_returns_decoded_invoice_item() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/invoiceitems/ii_123"))
        .and(header("Authorization", "Bearer sk_test_123"))
        .and(header("Stripe-Version", "2018-02-28"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "ii_123", "amount": 1000})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let item = assert_ok!(client.invoice_items().get("ii_123", None).await);

    assert_eq!(item.id.as_deref(), Some("ii_123"));
    assert_eq!(item.amount, 1000);
}

#[tokio::test]
async fn test_get_escapes_id_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/invoiceitems/a%20b%2Fc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "a b/c"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let item = assert_ok!(client.invoice_items().get("a b/c", None).await);

    assert_eq!(item.id.as_deref(), Some("a b/c"));
}

#[tokio::test]
async fn test_get_sends_expand_in_query_and_account_in_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/invoiceitems/ii_1"))
        .and(query_param("expand[0]", "customer"))
        .and(header("Stripe-Account", "acct_42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "ii_1",
            "customer": {"id": "cus_1", "object": "customer"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = InvoiceItemParams::default();
    params.params.add_expand("customer");
    params.params.stripe_account = Some("acct_42".to_string());

    let client = create_client(&server);
    let item = assert_ok!(client.invoice_items().get("ii_1", Some(&params)).await);

    assert_eq!(item.customer.as_deref(), Some("cus_1"));
}

// ============================================================================
// Create / Update / Delete
// ============================================================================

#[tokio::test]
async fn test_create_posts_form_encoded_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/invoiceitems"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("amount=1000"))
        .and(body_string_contains("currency=usd"))
        .and(body_string_contains("customer=cus_1"))
        .and(body_string_contains("metadata%5Border_id%5D=6735"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "ii_new",
            "object": "invoiceitem",
            "amount": 1000,
            "currency": "usd",
            "customer": "cus_1",
            "metadata": {"order_id": "6735"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = InvoiceItemParams {
        amount: Some(1000),
        currency: Some("usd".to_string()),
        customer: Some("cus_1".to_string()),
        ..Default::default()
    };
    params.params.add_metadata("order_id", "6735");

    let client = create_client(&server);
    let item = assert_ok!(client.invoice_items().create(Some(&params)).await);

    assert_eq!(item.id.as_deref(), Some("ii_new"));
    assert_eq!(item.metadata.get("order_id").map(String::as_str), Some("6735"));
}

#[tokio::test]
async fn test_update_posts_to_member_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/invoiceitems/ii_1"))
        .and(body_string_contains("description=Updated%20fee"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "ii_1",
            "description": "Updated fee"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = InvoiceItemParams {
        description: Some("Updated fee".to_string()),
        ..Default::default()
    };

    let client = create_client(&server);
    let item = assert_ok!(client.invoice_items().update("ii_1", Some(&params)).await);

    assert_eq!(item.description.as_deref(), Some("Updated fee"));
}

#[tokio::test]
async fn test_delete_returns_deleted_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/invoiceitems/ii_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "ii_1",
            "object": "invoiceitem",
            "deleted": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let deleted = assert_ok!(client.invoice_items().delete("ii_1", None).await);

    assert!(deleted.deleted);
    assert_eq!(deleted.id.as_deref(), Some("ii_1"));
}

#[tokio::test]
async fn test_delete_missing_item_returns_api_error_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/invoiceitems/does_not_exist"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("Request-Id", "req_missing")
                .set_body_json(serde_json::json!({
                    "error": {
                        "type": "invalid_request_error",
                        "message": "No such invoiceitem: does_not_exist",
                        "param": "id",
                        "code": "resource_missing"
                    }
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = assert_err!(client.invoice_items().delete("does_not_exist", None).await);

    let Error::Api(api_error) = err else {
        panic!("expected an API error, got {err:?}");
    };
    assert_eq!(api_error.http_status, 404);
    assert_eq!(api_error.error_type, ErrorType::InvalidRequestError);
    assert_eq!(api_error.message, "No such invoiceitem: does_not_exist");
    assert_eq!(api_error.code.as_deref(), Some("resource_missing"));
    assert_eq!(api_error.param.as_deref(), Some("id"));
    assert_eq!(api_error.request_id.as_deref(), Some("req_missing"));
}

#[tokio::test]
async fn test_server_error_with_unstructured_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = assert_err!(client.invoice_items().get("ii_1", None).await);

    assert_eq!(err.http_status(), Some(503));
    let api_error = err.api_error().unwrap();
    assert_eq!(api_error.error_type, ErrorType::ApiError);
    assert_eq!(api_error.message, "upstream unavailable");
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_sends_nothing_until_first_advance() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/invoiceitems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&["ii_1"], false)))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let mut iter = client.invoice_items().list(None);

    assert!(server.received_requests().await.unwrap().is_empty());
    assert!(iter.invoice_item().is_none());

    assert!(iter.next().await);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_walks_every_page_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/invoiceitems"))
        .and(query_param("customer", "cus_1"))
        .and(query_param("limit", "2"))
        .respond_with(|req: &Request| {
            let cursor = req
                .url
                .query_pairs()
                .find(|(k, _)| k == "starting_after")
                .map(|(_, v)| v.into_owned());
            let body = match cursor.as_deref() {
                None => list_body(&["ii_1", "ii_2"], true),
                Some("ii_2") => list_body(&["ii_3", "ii_4"], true),
                Some("ii_4") => list_body(&["ii_5"], false),
                Some(other) => panic!("unexpected cursor {other}"),
            };
            ResponseTemplate::new(200).set_body_json(body)
        })
        .expect(3)
        .mount(&server)
        .await;

    let params = InvoiceItemListParams {
        customer: Some("cus_1".to_string()),
        list_params: ListParams {
            limit: Some(2),
            ..Default::default()
        },
        ..Default::default()
    };

    let client = create_client(&server);
    let mut iter = client.invoice_items().list(Some(&params));

    let mut ids = Vec::new();
    while iter.next().await {
        ids.push(iter.invoice_item().unwrap().id.clone().unwrap());
    }

    assert_eq!(ids, vec!["ii_1", "ii_2", "ii_3", "ii_4", "ii_5"]);
    assert!(iter.err().is_none());
    assert!(!iter.meta().unwrap().has_more);
}

#[tokio::test]
async fn test_list_single_fetches_one_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/invoiceitems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&["ii_1", "ii_2"], true)))
        .expect(1)
        .mount(&server)
        .await;

    let params = InvoiceItemListParams {
        list_params: ListParams {
            single: true,
            ..Default::default()
        },
        ..Default::default()
    };

    let client = create_client(&server);
    let items = assert_ok!(client.invoice_items().list(Some(&params)).collect_all().await);

    assert_eq!(items.len(), 2);
    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].url.query_pairs().any(|(k, _)| k == "single"));
}

#[tokio::test]
async fn test_list_error_stops_iteration() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/invoiceitems"))
        .respond_with(|req: &Request| {
            if req.url.query_pairs().any(|(k, _)| k == "starting_after") {
                ResponseTemplate::new(500).set_body_json(serde_json::json!({
                    "error": {"type": "api_error", "message": "Something went wrong"}
                }))
            } else {
                ResponseTemplate::new(200).set_body_json(list_body(&["ii_1"], true))
            }
        })
        .expect(2)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let mut iter = client.invoice_items().list(None);

    assert!(iter.next().await);
    assert!(!iter.next().await);
    assert!(iter.invoice_item().is_none());
    assert_eq!(iter.err().and_then(Error::http_status), Some(500));

    // Stays stopped without further requests.
    assert!(!iter.next().await);
}
