//! Combined Query Tests
//!
//! The intersection law across category, supplier, and price range, checked
//! against a catalog holding items that match zero, one, two, and all three
//! of the predicates.

use kardex::catalog::{CatalogManager, CombinedQuery};
use kardex::item::Item;

// =============================================================================
// Helper Functions
// =============================================================================

fn item(key: &str, name: &str, category: &str, price: f64, supplier: &str) -> Item {
    Item::new(key, name, category, price, supplier)
}

/// The seed catalog: exactly one item (P011) matches all of
/// category = "Eletrônicos", supplier = "Fornecedor C", price in [800, 1000].
fn seed_catalog() -> CatalogManager {
    let mut manager = CatalogManager::with_standard_schema();
    manager
        .load_initial(vec![
            // Matches none of the three predicates
            item("P001", "Caneta Azul", "Papelaria", 1.50, "Fornecedor A"),
            // Matches supplier only
            item("P005", "Cabo HDMI", "Acessórios", 25.00, "Fornecedor C"),
            // Matches category only
            item("P003", "Laptop", "Eletrônicos", 3500.00, "Fornecedor D"),
            // Matches category + supplier, price out of range
            item("P009", "Carregador", "Eletrônicos", 50.00, "Fornecedor C"),
            // Matches category + price, wrong supplier
            item("P007", "Monitor", "Eletrônicos", 900.00, "Fornecedor D"),
            // Matches all three
            item("P011", "Notebook", "Eletrônicos", 900.00, "Fornecedor C"),
        ])
        .unwrap();
    manager
}

// =============================================================================
// Intersection Law
// =============================================================================

/// All three filters: only the item satisfying every predicate survives.
#[test]
fn test_three_filters_single_match() {
    let manager = seed_catalog();

    let query = CombinedQuery::new()
        .with_category("Eletrônicos")
        .with_supplier("Fornecedor C")
        .with_price_range(800.0, 1000.0);

    let keys = manager.combined_query(&query).unwrap();
    assert_eq!(keys, vec!["P011"]);
}

/// Partial matchers are excluded no matter how many predicates they satisfy.
#[test]
fn test_partial_matchers_excluded() {
    let manager = seed_catalog();

    let query = CombinedQuery::new()
        .with_category("Eletrônicos")
        .with_supplier("Fornecedor C")
        .with_price_range(800.0, 1000.0);

    let keys = manager.combined_query(&query).unwrap();

    for partial in ["P001", "P003", "P005", "P007", "P009"] {
        assert!(!keys.contains(&partial.to_string()), "{} leaked in", partial);
    }
}

/// One filter behaves exactly like the corresponding direct lookup.
#[test]
fn test_single_filter_matches_direct_lookup() {
    let manager = seed_catalog();

    let by_query = manager
        .combined_query(&CombinedQuery::new().with_category("Eletrônicos"))
        .unwrap();
    assert_eq!(by_query, manager.find_by_category("Eletrônicos"));

    let by_query = manager
        .combined_query(&CombinedQuery::new().with_supplier("Fornecedor C"))
        .unwrap();
    assert_eq!(by_query, manager.find_by_supplier("Fornecedor C"));

    let by_query = manager
        .combined_query(&CombinedQuery::new().with_price_range(800.0, 1000.0))
        .unwrap();
    assert_eq!(by_query, manager.find_by_price_range(800.0, 1000.0).unwrap());
}

/// Two filters: category + supplier.
#[test]
fn test_two_filters() {
    let manager = seed_catalog();

    let query = CombinedQuery::new()
        .with_category("Eletrônicos")
        .with_supplier("Fornecedor C");

    let keys = manager.combined_query(&query).unwrap();
    assert_eq!(keys, vec!["P009", "P011"]);
}

/// No filters: the full current key set of the store.
#[test]
fn test_no_filters_returns_all_keys() {
    let manager = seed_catalog();

    let keys = manager.combined_query(&CombinedQuery::new()).unwrap();
    assert_eq!(keys, vec!["P001", "P003", "P005", "P007", "P009", "P011"]);
}

/// A filter that matches nothing empties the intersection.
#[test]
fn test_unmatched_filter_empties_result() {
    let manager = seed_catalog();

    let query = CombinedQuery::new()
        .with_category("Eletrônicos")
        .with_supplier("Fornecedor Z");

    assert!(manager.combined_query(&query).unwrap().is_empty());
}

/// Price bounds are inclusive inside a combined query too.
#[test]
fn test_combined_price_bounds_inclusive() {
    let manager = seed_catalog();

    let query = CombinedQuery::new().with_price_range(900.0, 900.0);
    let keys = manager.combined_query(&query).unwrap();
    assert_eq!(keys, vec!["P007", "P011"]);
}

// =============================================================================
// Consistency Under Mutation
// =============================================================================

/// Removal is visible to combined queries immediately.
#[test]
fn test_combined_query_after_removal() {
    let mut manager = seed_catalog();

    let query = CombinedQuery::new()
        .with_category("Eletrônicos")
        .with_supplier("Fornecedor C")
        .with_price_range(800.0, 1000.0);

    assert_eq!(manager.combined_query(&query).unwrap(), vec!["P011"]);

    manager.remove_item("P011").unwrap();
    assert!(manager.combined_query(&query).unwrap().is_empty());

    // Unfiltered base set shrank as well
    let all = manager.combined_query(&CombinedQuery::new()).unwrap();
    assert_eq!(all.len(), 5);
    assert!(!all.contains(&"P011".to_string()));
}

/// A freshly added item joins matching combined queries immediately.
#[test]
fn test_combined_query_after_add() {
    let mut manager = seed_catalog();

    manager
        .add_item(item("P012", "Tablet", "Eletrônicos", 850.00, "Fornecedor C"))
        .unwrap();

    let query = CombinedQuery::new()
        .with_category("Eletrônicos")
        .with_supplier("Fornecedor C")
        .with_price_range(800.0, 1000.0);

    assert_eq!(manager.combined_query(&query).unwrap(), vec!["P011", "P012"]);
}

/// Queries can arrive as JSON and behave identically.
#[test]
fn test_query_from_json() {
    let manager = seed_catalog();

    let query: CombinedQuery = serde_json::from_str(
        r#"{
            "category": "Eletrônicos",
            "supplier": "Fornecedor C",
            "price_range": {"min": 800.0, "max": 1000.0}
        }"#,
    )
    .unwrap();

    assert_eq!(manager.combined_query(&query).unwrap(), vec!["P011"]);
}
