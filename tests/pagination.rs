use dex_dashboard_wasm::domain::listing::{Pager, page_count_for};
use quickcheck_macros::quickcheck;
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn twenty_five_rows_make_three_pages() {
    let mut pager = Pager::new(10);
    pager.reset(25);
    assert_eq!(pager.page_count(), 3);
    assert_eq!(pager.label(), "Page 1 of 3");
    assert_eq!(pager.window(25), 0..10);

    pager.next();
    pager.next();
    assert_eq!(pager.page(), 3);
    assert!(pager.is_last());
    assert_eq!(pager.window(25), 20..25);
    assert_eq!(pager.first_index(), 21);

    // stays on the last page
    pager.next();
    assert_eq!(pager.page(), 3);
}

#[wasm_bindgen_test(unsupported = test)]
fn previous_stops_at_first_page() {
    let mut pager = Pager::new(10);
    pager.reset(5);
    assert!(pager.is_first());
    assert!(pager.is_last());
    pager.previous();
    assert_eq!(pager.page(), 1);
}

#[wasm_bindgen_test(unsupported = test)]
fn empty_list_still_has_one_page() {
    let mut pager = Pager::new(10);
    pager.reset(0);
    assert_eq!(pager.page_count(), 1);
    assert_eq!(pager.window(0), 0..0);
    assert_eq!(page_count_for(0, 10), 1);
}

#[wasm_bindgen_test(unsupported = test)]
fn reset_returns_to_first_page() {
    let mut pager = Pager::new(2);
    pager.reset(10);
    pager.next();
    pager.next();
    assert_eq!(pager.page(), 3);

    pager.reset(3);
    assert_eq!(pager.page(), 1);
    assert_eq!(pager.page_count(), 2);
}

#[quickcheck]
fn page_stays_in_bounds(items: u8, size: u8, moves: Vec<bool>) -> bool {
    let mut pager = Pager::new(usize::from(size));
    pager.reset(usize::from(items));
    moves.into_iter().all(|forward| {
        if forward { pager.next() } else { pager.previous() }
        (1..=pager.page_count()).contains(&pager.page())
    })
}

#[quickcheck]
fn pages_cover_every_row_once(items: u8, size: u8) -> bool {
    let items = usize::from(items);
    let mut pager = Pager::new(usize::from(size));
    pager.reset(items);

    let mut covered = Vec::new();
    loop {
        covered.extend(pager.window(items));
        if pager.is_last() {
            break;
        }
        pager.next();
    }
    covered == (0..items).collect::<Vec<_>>()
}
