use std::rc::Rc;

use gamestore_core::{ActionOutcome, Catalog, StoreAction, StorefrontSession};

fn session() -> StorefrontSession {
    let catalog = Catalog::from_json(include_str!(
        "../../gamestore-web/static/assets/data/catalog.json"
    ))
    .unwrap();
    StorefrontSession::new(Rc::new(catalog))
}

#[test]
fn add_twice_then_quantity_then_remove_empties_the_cart() {
    let mut session = session();
    session.dispatch(StoreAction::AddToCart(1));
    session.dispatch(StoreAction::AddToCart(1));
    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.cart_summary().item_count, 2);

    session.dispatch(StoreAction::SetQuantity(1, 5));
    assert_eq!(session.cart().quantity_of(1), 5);
    assert_eq!(session.cart_summary().total_minor, 5 * 199_900);

    session.dispatch(StoreAction::RemoveFromCart(1));
    assert!(session.cart().is_empty());
    assert_eq!(session.cart_summary().total_minor, 0);
}

#[test]
fn zero_quantity_clamps_instead_of_deleting() {
    let mut session = session();
    session.dispatch(StoreAction::AddToCart(2));
    session.dispatch(StoreAction::SetQuantity(2, 3));
    assert_eq!(
        session.dispatch(StoreAction::SetQuantity(2, 0)),
        ActionOutcome::Applied
    );
    assert_eq!(session.cart().quantity_of(2), 1);
    assert_eq!(
        session.dispatch(StoreAction::SetQuantity(2, 0)),
        ActionOutcome::Ignored
    );
    assert_eq!(session.cart().len(), 1);
}

#[test]
fn missing_lines_are_silent_no_ops() {
    let mut session = session();
    assert_eq!(
        session.dispatch(StoreAction::RemoveFromCart(3)),
        ActionOutcome::Ignored
    );
    assert_eq!(
        session.dispatch(StoreAction::SetQuantity(3, 2)),
        ActionOutcome::Ignored
    );
    assert!(session.cart().is_empty());
}

#[test]
fn totals_follow_every_line() {
    let mut session = session();
    for id in [2, 5, 2, 6] {
        session.dispatch(StoreAction::AddToCart(id));
    }
    let summary = session.cart_summary();
    assert_eq!(summary.item_count, 4);
    assert_eq!(summary.total_minor, 2 * 89_900 + 149_900 + 299_900);
    let line_sum: i64 = session.cart().lines().iter().map(|l| l.total_minor()).sum();
    assert_eq!(line_sum, summary.total_minor);
}
