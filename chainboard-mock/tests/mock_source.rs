use chainboard_core::{ChainSource, ChainboardError};
use chainboard_mock::{MockSource, chain_rows};

#[tokio::test]
async fn default_source_serves_the_fixture_chain() {
    let source = MockSource::new();
    let envelope = source.fetch_chain().await.expect("fixture envelope");

    assert_eq!(envelope.data, chain_rows());
    assert!(!envelope.data.is_empty());
}

#[tokio::test]
async fn fixture_rows_share_one_key_set_in_one_order() {
    let rows = chain_rows();
    let first: Vec<&String> = rows[0].keys().collect();
    for row in &rows {
        let keys: Vec<&String> = row.keys().collect();
        assert_eq!(keys, first);
    }
    assert_eq!(first[3], "STRIKE_PRICE");
}

#[tokio::test]
async fn empty_source_serves_no_rows() {
    let envelope = MockSource::empty().fetch_chain().await.expect("envelope");
    assert!(envelope.data.is_empty());
}

#[tokio::test]
async fn failing_source_returns_the_forced_error() {
    let forced = ChainboardError::source("chainboard-mock", "forced failure");
    let err = MockSource::failing(forced.clone())
        .fetch_chain()
        .await
        .expect_err("forced error");
    assert_eq!(err, forced);
}

#[tokio::test]
async fn fetches_are_repeatable() {
    let source = MockSource::new();
    let a = source.fetch_chain().await.expect("first fetch");
    let b = source.fetch_chain().await.expect("second fetch");
    assert_eq!(a, b);
}
