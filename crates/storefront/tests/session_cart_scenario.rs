//! Session and cart lifecycle through the public API.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use buildmart_core::{Category, Price, Product, ProductId};
use buildmart_storefront::storage::{FileStore, LocalStore, MemoryStore, keys};
use buildmart_storefront::stores::{CartStore, SessionStore};

fn concrete() -> Product {
    Product {
        id: ProductId::new(1),
        name: "Concrete".to_string(),
        price: Price::from_cents(1000),
        image: "https://cdn.example.com/concrete.png".to_string(),
        description: "Ready-mix, per bag".to_string(),
        category: Category::Material,
    }
}

fn run_scenario(storage: &Arc<dyn LocalStore>) {
    let session = SessionStore::new(Arc::clone(storage));
    let user = session.login("a@b.com", "alice").unwrap();
    assert!(session.is_logged_in().unwrap());
    assert_eq!(session.current_user().unwrap(), Some(user));

    let mut cart = CartStore::load(Arc::clone(storage)).unwrap();
    cart.add(concrete()).unwrap();
    assert_eq!(cart.len(), 1);
    assert!(cart.is_in_cart(ProductId::new(1)));

    session.logout().unwrap();
    assert!(!session.is_logged_in().unwrap());

    // The cart outlives the session
    let reloaded = CartStore::load(Arc::clone(storage)).unwrap();
    assert_eq!(reloaded.items(), &[concrete()]);
    assert_eq!(reloaded.total(), Price::from_cents(1000));
}

#[test]
fn test_scenario_in_memory() {
    let storage: Arc<dyn LocalStore> = Arc::new(MemoryStore::new());
    run_scenario(&storage);
    assert!(storage.get(keys::USER).unwrap().is_none());
}

#[test]
fn test_scenario_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local_storage.json");

    let storage: Arc<dyn LocalStore> = Arc::new(FileStore::new(&path));
    run_scenario(&storage);
    drop(storage);

    // A fresh handle on the same file sees what the first one persisted
    let storage: Arc<dyn LocalStore> = Arc::new(FileStore::new(&path));
    let session = SessionStore::new(Arc::clone(&storage));
    assert!(!session.is_logged_in().unwrap());

    let cart = CartStore::load(storage).unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items().first().unwrap().name, "Concrete");
}
