use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use table_virtualizer::{SelectAllState, SortDirection, TableOptions, VirtualTable};

#[derive(Clone, Debug, PartialEq)]
struct Page {
    id: u64,
    slug: String,
    views: u32,
}

fn page(id: u64, views: u32) -> Page {
    Page {
        id,
        slug: alloc::format!("page-{id}"),
        views,
    }
}

fn options() -> TableOptions<Page> {
    TableOptions::new(10, |p: &Page, _| p.id)
        .with_overscan(0)
        .with_selectable(true)
        .with_sortable(true)
}

fn ids(c: &TableController<Page>) -> Vec<u64> {
    c.rows().iter().map(|p| p.id).collect()
}

#[test]
fn anchor_preserves_viewport_across_prepend() {
    let mut c = TableController::new(options()).unwrap();
    c.append_rows((0..100).map(|i| page(1000 + i, 0)));
    c.on_viewport(100);
    c.on_scroll(505);

    let anchor = c.capture_anchor().unwrap();
    assert_eq!(anchor.key, 1050);
    assert_eq!(anchor.offset_in_row, 5);

    // Ten older rows arrive above the viewport.
    c.prepend_rows((0..10).map(|i| page(2000 + i, 0)));
    assert_eq!(c.len(), 110);
    assert_eq!(c.rows()[0].id, 2000);
    assert_eq!(c.rows()[10].id, 1000);
    assert_eq!(c.table().scroll_offset(), 605);
    assert_eq!(c.window().rows[0].row.id, 1050);
}

#[test]
fn free_anchor_functions_use_caller_mapping() {
    let rows: Vec<Page> = (0..20).map(|i| page(i, 0)).collect();
    let mut table = VirtualTable::new(options()).unwrap();
    table.on_scroll(30, 50, rows.len());
    let anchor = capture_first_visible_anchor(&table, &rows).unwrap();
    assert_eq!(anchor.key, 3);

    assert!(apply_anchor(&mut table, rows.len(), &anchor, |_| Some(12)));
    assert_eq!(table.scroll_offset(), 120);
    assert!(!apply_anchor(&mut table, rows.len(), &anchor, |_| None));
    // Stale mapping pointing past the dataset is rejected.
    assert!(!apply_anchor(&mut table, rows.len(), &anchor, |_| Some(40)));
}

#[test]
fn click_sort_cycles_and_restores_load_order() {
    let mut c = TableController::new(options())
        .unwrap()
        .with_comparator("views", |a: &Page, b: &Page| a.views.cmp(&b.views));
    c.append_rows([page(1, 30), page(2, 10), page(3, 20), page(4, 10)]);

    let s = c.click_sort("views").unwrap();
    assert_eq!(s.direction(), Some(SortDirection::Ascending));
    // Ties keep load order.
    assert_eq!(ids(&c), [2, 4, 3, 1]);

    c.click_sort("views");
    assert_eq!(ids(&c), [1, 3, 2, 4]);

    let s = c.click_sort("views").unwrap();
    assert!(!s.is_sorted());
    assert_eq!(ids(&c), [1, 2, 3, 4]);
}

#[test]
fn appended_pages_follow_active_sort() {
    let mut c = TableController::new(options())
        .unwrap()
        .with_comparator("slug", |a: &Page, b: &Page| a.slug.cmp(&b.slug));
    c.append_rows([page(5, 0), page(1, 0)]);
    c.click_sort("slug");
    c.click_sort("slug");
    c.append_rows([page(3, 0)]);
    assert_eq!(ids(&c), [5, 3, 1]);
}

#[test]
fn sorting_a_column_without_comparator_keeps_load_order() {
    let mut c = TableController::new(options()).unwrap();
    c.append_rows([page(3, 0), page(1, 0), page(2, 0)]);
    let s = c.click_sort("title").unwrap();
    assert_eq!(s.column(), Some("title"));
    assert_eq!(ids(&c), [3, 1, 2]);
}

#[test]
fn selection_follows_rows_through_sorting() {
    let mut c = TableController::new(options())
        .unwrap()
        .with_comparator("views", |a: &Page, b: &Page| a.views.cmp(&b.views));
    c.append_rows([page(1, 3), page(2, 2), page(3, 1)]);
    assert_eq!(c.toggle_row(0), Some(true));
    assert_eq!(c.select_all_state(), SelectAllState::Some);

    c.click_sort("views");
    assert_eq!(ids(&c), [3, 2, 1]);
    assert!(c.is_selected(2));
    assert!(!c.is_selected(0));
    assert_eq!(c.index_of(&1), Some(2));

    assert!(c.toggle_select_all());
    assert_eq!(c.select_all_state(), SelectAllState::All);
}

#[test]
fn load_more_is_released_by_append_and_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let cc = Arc::clone(&calls);
    let opts = options()
        .with_load_more_threshold(50)
        .with_on_load_more(Some(move || {
            cc.fetch_add(1, Ordering::Relaxed);
        }));
    let mut c = TableController::new(opts).unwrap();
    c.append_rows((0..30).map(|i| page(i, 0)));
    c.on_viewport(100);

    c.on_scroll(180); // remaining 20
    c.on_scroll(190);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    c.fail_load_more();
    c.on_scroll(200);
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    c.append_rows((30..60).map(|i| page(i, 0)));
    assert!(!c.table().is_loading_more());
    c.on_scroll(200); // remaining 300
    assert_eq!(calls.load(Ordering::Relaxed), 2);
    c.on_scroll(460);
    assert_eq!(calls.load(Ordering::Relaxed), 3);
}

#[test]
fn replace_rows_keeps_anchor_or_clamps() {
    let mut c = TableController::new(options()).unwrap();
    c.append_rows((0..50).map(|i| page(i, 0)));
    c.on_viewport(100);
    c.on_scroll(200);

    // Row 20 moved to position 5 after a refresh.
    let mut refreshed: Vec<Page> = (0..50).map(|i| page(i, 0)).collect();
    let moved = refreshed.remove(20);
    refreshed.insert(5, moved);
    c.replace_rows(refreshed);
    assert_eq!(c.table().scroll_offset(), 50);

    // The anchored row disappeared and the content shrank: clamp to the new end.
    c.on_scroll(400);
    c.replace_rows((100..110).map(|i| page(i, 0)).collect());
    assert_eq!(c.table().scroll_offset(), 0);
    assert_eq!(c.window().len(), 10);
}

#[test]
fn window_geometry_matches_owned_rows() {
    let mut c = TableController::new(options().with_overscan(2)).unwrap();
    c.append_rows((0..1_000).map(|i| page(i, 0)));
    c.on_viewport(95);
    c.on_scroll(4_321);
    let w = c.window();
    assert_eq!(w.total_height(), 10_000);
    assert_eq!(w.rows.first().map(|r| r.index), Some(430));
    assert_eq!(w.rows.last().map(|r| r.index), Some(443));
}
