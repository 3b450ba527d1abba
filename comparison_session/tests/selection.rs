//! Selection state-machine behavior: add, remove, list.

mod common;
use common::{empty_session, session_with_series};

use comparison_session::{ComparisonSession, SessionError};
use dashboard_client::models::category::Category;

use proptest::prelude::*;

#[test]
fn add_then_list_preserves_insertion_order() {
    let mut session = empty_session();

    session.add("USD/KRW", Category::Currency).unwrap();
    session.add("005930.KS", Category::StockKr).unwrap();
    session.add("AAPL", Category::StockUs).unwrap();

    let listed: Vec<_> = session.list().collect();
    assert_eq!(
        listed,
        vec![
            ("USD/KRW", Category::Currency),
            ("005930.KS", Category::StockKr),
            ("AAPL", Category::StockUs),
        ]
    );
}

#[test]
fn duplicate_add_errors_and_leaves_selection_unchanged() {
    let mut session = empty_session();
    session.add("USD/KRW", Category::Currency).unwrap();

    // Same symbol, different category: still rejected, never overwritten.
    let err = session.add("USD/KRW", Category::Index).unwrap_err();
    assert!(matches!(
        err,
        SessionError::DuplicateSelection { ref symbol } if symbol == "USD/KRW"
    ));

    let listed: Vec<_> = session.list().collect();
    assert_eq!(listed, vec![("USD/KRW", Category::Currency)]);
}

#[test]
fn blank_symbol_is_rejected() {
    let mut session = empty_session();
    assert!(matches!(
        session.add("   ", Category::Index),
        Err(SessionError::EmptySymbol)
    ));
    assert!(session.is_empty());
}

#[test]
fn removing_an_absent_symbol_is_a_silent_noop() {
    let mut session = empty_session();
    session.add("AAPL", Category::StockUs).unwrap();

    session.remove("MSFT");
    session.remove("AAPL");
    session.remove("AAPL");

    assert!(session.is_empty());
}

#[test]
fn remove_keeps_display_order_of_the_rest() {
    let mut session = empty_session();
    session.add("USD/KRW", Category::Currency).unwrap();
    session.add("KOSPI", Category::Index).unwrap();
    session.add("AAPL", Category::StockUs).unwrap();

    session.remove("KOSPI");

    let listed: Vec<_> = session.list().collect();
    assert_eq!(
        listed,
        vec![("USD/KRW", Category::Currency), ("AAPL", Category::StockUs)]
    );
}

#[test]
fn display_labels_use_the_category_suffix() {
    assert_eq!(
        ComparisonSession::display_label("USD/KRW", Category::Currency),
        "USD/KRW [환율]"
    );
    assert_eq!(
        ComparisonSession::display_label("AAPL", Category::StockUs),
        "AAPL [미국/$]"
    );
}

#[test]
fn catalog_starts_empty_and_pickers_stay_disabled() {
    let session = session_with_series(Default::default());
    assert!(session.catalog().is_empty());
    assert_eq!(session.symbols_for(Category::Currency), None);
}

/// One step of a user-driven selection edit.
#[derive(Debug, Clone)]
enum Op {
    Add(String, Category),
    Remove(String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let symbol = prop::sample::select(vec!["USD/KRW", "EUR/KRW", "KOSPI", "005930.KS", "AAPL"]);
    let category = prop::sample::select(Category::ALL.to_vec());
    prop_oneof![
        (symbol.clone(), category).prop_map(|(s, c)| Op::Add(s.to_string(), c)),
        symbol.prop_map(|s| Op::Remove(s.to_string())),
    ]
}

proptest! {
    /// After any edit sequence, the selection equals a straightforward
    /// model: the symbols with a net add not followed by a remove, each
    /// mapped to the category of its most recent (accepted) add.
    #[test]
    fn selection_matches_a_model_map(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut session = empty_session();
        let mut model: Vec<(String, Category)> = Vec::new();

        for op in ops {
            match op {
                Op::Add(symbol, category) => {
                    let accepted = session.add(&symbol, category).is_ok();
                    let already = model.iter().any(|(s, _)| *s == symbol);
                    prop_assert_eq!(accepted, !already);
                    if accepted {
                        model.push((symbol, category));
                    }
                }
                Op::Remove(symbol) => {
                    session.remove(&symbol);
                    model.retain(|(s, _)| *s != symbol);
                }
            }
        }

        let listed: Vec<(String, Category)> = session
            .list()
            .map(|(s, c)| (s.to_string(), c))
            .collect();
        prop_assert_eq!(listed, model);
    }
}
