//! Integration tests running the comparison engine over the cart fixtures.

use testresult::TestResult;

use grocer::{
    comparison::compare,
    fixtures::{BasketFixture, CartFixture},
    lines::CartLine,
    summary::summarize,
};

fn stores(names: &[String]) -> Vec<&str> {
    names.iter().map(String::as_str).collect()
}

#[test]
fn partial_store_keeps_its_total_but_is_never_cheapest() -> TestResult {
    let lines = CartFixture::from_set("partial-store")?.lines()?;

    let comparison = compare(&lines);

    let b = comparison.group("B").ok_or("Expected store B")?;

    assert_eq!(b.total, 4_000);
    assert!(!b.is_complete);
    assert_eq!(stores(&comparison.cheapest), ["A"]);
    assert_eq!(comparison.cheapest_total, Some(8_000));

    Ok(())
}

#[test]
fn completing_the_cheaper_store_moves_the_best_choice() -> TestResult {
    let lines = CartFixture::from_set("both-complete")?.lines()?;

    let comparison = compare(&lines);

    assert_eq!(stores(&comparison.cheapest), ["B"]);
    assert_eq!(comparison.cheapest_total, Some(7_500));

    Ok(())
}

#[test]
fn tied_stores_are_all_cheapest_and_partial_store_sorts_first() -> TestResult {
    let lines = CartFixture::from_set("tie")?.lines()?;

    let comparison = compare(&lines);

    let order: Vec<&str> = comparison
        .per_store
        .iter()
        .map(|group| group.store.as_str())
        .collect();

    assert_eq!(order, ["B", "A", "C"]);
    assert_eq!(stores(&comparison.cheapest), ["A", "C"]);
    assert!(
        comparison
            .cheapest
            .iter()
            .filter_map(|store| comparison.group(store))
            .all(|group| Some(group.total) == comparison.cheapest_total)
    );

    Ok(())
}

#[test]
fn no_complete_store_leaves_cheapest_empty() -> TestResult {
    let lines = CartFixture::from_set("no-complete-store")?.lines()?;

    let comparison = compare(&lines);

    assert_eq!(comparison.per_store.len(), 3);
    assert!(comparison.cheapest.is_empty());
    assert_eq!(comparison.cheapest_total, None);

    for group in &comparison.per_store {
        assert!(!group.is_complete, "{} should be partial", group.store);
        assert_eq!(group.missing.len(), 2, "{} should miss two products", group.store);
    }

    Ok(())
}

#[test]
fn weekly_cart_picks_the_only_complete_store() -> TestResult {
    let lines = CartFixture::from_set("weekly")?.lines()?;

    let comparison = compare(&lines);

    assert_eq!(
        comparison.required_products,
        ["Aashirvaad Atta", "Amul Butter", "Tata Salt", "Fortune Oil"]
    );
    assert_eq!(stores(&comparison.cheapest), ["Reliance Fresh"]);
    assert_eq!(comparison.cheapest_total, Some(62_300));

    let big_bazaar = comparison.group("Big Bazaar").ok_or("Expected Big Bazaar")?;
    let d_mart = comparison.group("D Mart").ok_or("Expected D Mart")?;

    assert_eq!(big_bazaar.missing.as_slice(), ["Fortune Oil"]);
    assert_eq!(d_mart.missing.as_slice(), ["Tata Salt"]);
    assert_eq!(d_mart.total, 54_250);

    let by_store: u64 = comparison.per_store.iter().map(|group| group.total).sum();
    let by_line: u64 = lines.iter().map(CartLine::line_total).sum();

    assert_eq!(by_store, by_line);

    Ok(())
}

#[test]
fn weekly_summary_counts_each_product_once() -> TestResult {
    let lines = CartFixture::from_set("weekly")?.lines()?;

    let summary = summarize(&lines);

    assert_eq!(summary.rows.len(), 4);
    assert_eq!(summary.total_count, 1 + 2 + 3 + 1);

    Ok(())
}

#[test]
fn basket_picks_fan_out_to_the_weekly_cart() -> TestResult {
    let basket = BasketFixture::from_set("weekly")?;
    let expected = CartFixture::from_set("weekly")?.lines()?;

    let planned: Vec<_> = basket
        .picks()?
        .iter()
        .flat_map(|pick| pick.offer.plan(pick.quantity, jiff::Timestamp::UNIX_EPOCH))
        .collect();

    let planned_ids: Vec<&str> = planned.iter().map(|line| line.id.as_str()).collect();
    let expected_ids: Vec<&str> = expected.iter().map(|line| line.id.as_str()).collect();

    assert_eq!(planned_ids, expected_ids);

    for (planned, expected) in planned.iter().zip(&expected) {
        assert_eq!(planned.fields.unit_price, expected.unit_price, "{}", expected.id);
        assert_eq!(planned.fields.quantity, expected.quantity, "{}", expected.id);
    }

    Ok(())
}
