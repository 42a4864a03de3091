use posadmin_api::types::{Category, Page, Product, Transaction};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_products_full() {
    let json = load_fixture("products.json");
    let page: Page<Product> = serde_json::from_str(&json).unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.last_page, 5);
    assert_eq!(page.per_page, 10);
    assert_eq!(page.total, 42);
    assert_eq!(page.from, Some(1));
    assert_eq!(page.to, Some(2));

    let apple = &page.data[0];
    assert_eq!(apple.id, 101);
    assert_eq!(apple.barcode.as_deref(), Some("4017"));
    assert_eq!(apple.category_name.as_deref(), Some("Fruit"));
    assert_eq!(apple.selling_price, 0.6);
    assert_eq!(apple.stock, 240);

    let pie = &page.data[1];
    assert!(pie.barcode.is_none());
    assert!(pie.updated_at.is_none());
}

#[test]
fn deserialize_empty_page() {
    let json = load_fixture("products_empty.json");
    let page: Page<Product> = serde_json::from_str(&json).unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.from, None);
    // Fallback numbering still starts at 1.
    assert_eq!(page.row_number(0), 1);
}

#[test]
fn deserialize_categories() {
    let json = load_fixture("categories.json");
    let page: Page<Category> = serde_json::from_str(&json).unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].name, "Fruit");
    assert_eq!(page.data[1].description, None);
}

#[test]
fn deserialize_transactions() {
    let json = load_fixture("transactions.json");
    let page: Page<Transaction> = serde_json::from_str(&json).unwrap();
    assert_eq!(page.current_page, 2);
    let tx = &page.data[0];
    assert_eq!(tx.invoice_number, "INV-2025-0458");
    assert_eq!(tx.total, 23.4);
    assert_eq!(tx.change, 1.6);
    // Row numbering is based on the server-reported range.
    assert_eq!(page.row_number(0), 2);
}

#[test]
fn deserialize_missing_pagination_fields_fails() {
    let json = r#"{"data": []}"#;
    let result = serde_json::from_str::<Page<Product>>(json);
    assert!(result.is_err());
}

#[test]
fn deserialize_malformed_json_fails() {
    let bad = r#"{"data": not valid}"#;
    let result = serde_json::from_str::<Page<Product>>(bad);
    assert!(result.is_err());
}
