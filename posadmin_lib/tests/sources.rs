//! End-to-end: a controller wired to the real client against a mock backend.

use std::sync::Arc;

use posadmin_lib::source::sources;
use posadmin_lib::{Client, ListController, ListError, Session};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn products_page() -> serde_json::Value {
    json!({
        "data": [
            {"id": 1, "name": "Green Tea", "barcode": null, "category_id": 2,
             "category_name": "Drinks", "purchase_price": 1.2, "selling_price": 2.0,
             "stock": 30, "unit": "box", "image_url": null, "updated_at": null}
        ],
        "current_page": 1,
        "last_page": 1,
        "per_page": 10,
        "total": 1,
        "from": 1,
        "to": 1
    })
}

#[tokio::test]
async fn products_source_drives_the_controller() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("page", "1"))
        .and(query_param("search", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_page()))
        .mount(&mock_server)
        .await;

    let client = Arc::new(Client::new(&mock_server.uri(), Session::new("t")).unwrap());
    let (handle, mut snaps) = ListController::spawn(sources::products(client));

    handle.refetch();
    let snap = snaps
        .wait_for(|s| !s.loading && !s.result.is_empty())
        .await
        .unwrap()
        .clone();

    assert_eq!(snap.result.data[0].name, "Green Tea");
    assert_eq!(snap.row_number(0), 1);
}

#[tokio::test]
async fn backend_failure_surfaces_as_a_recoverable_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = Arc::new(Client::new(&mock_server.uri(), Session::new("t")).unwrap());
    let (handle, mut snaps) = ListController::spawn(sources::products(client));

    handle.refetch();
    let snap = snaps
        .wait_for(|s| s.error.is_some())
        .await
        .unwrap()
        .clone();

    assert_eq!(snap.error, Some(ListError::Server(500)));
    assert!(!snap.loading);
}
