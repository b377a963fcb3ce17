//! The process-wide catalog can be installed exactly once.
//!
//! Kept in its own test binary so no other test observes the global.

use regdex_core::{Catalog, CatalogConfig, CatalogError, CatalogItem};

#[test]
fn install_once_then_reject() {
    assert!(regdex_core::global().is_none());

    let first = Catalog::from_items(
        vec![CatalogItem::new("first", "First")],
        CatalogConfig::default(),
    )
    .unwrap();
    let installed = regdex_core::install(first).expect("first install");
    assert_eq!(installed.len(), 1);

    let second = Catalog::from_items(
        vec![CatalogItem::new("second", "Second")],
        CatalogConfig::default(),
    )
    .unwrap();
    assert!(matches!(
        regdex_core::install(second),
        Err(CatalogError::AlreadyInitialized)
    ));

    let global = regdex_core::global().expect("installed");
    assert!(global.get_item("first").is_some());
    assert!(global.get_item("second").is_none());
}
