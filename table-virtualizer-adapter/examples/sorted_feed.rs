// Example: a controller that sorts its rows on header clicks and appends pages.
use table_virtualizer::TableOptions;
use table_virtualizer_adapter::TableController;

#[derive(Debug)]
struct Comment {
    id: u64,
    score: i32,
}

fn main() {
    let opts = TableOptions::new(16, |c: &Comment, _| c.id)
        .with_sortable(true)
        .with_on_load_more(Some(|| println!("load more requested")));
    let mut c = TableController::new(opts)
        .unwrap()
        .with_comparator("score", |a: &Comment, b: &Comment| a.score.cmp(&b.score));

    c.append_rows((0..20).map(|id| Comment {
        id,
        score: (id as i32 * 7) % 11,
    }));
    c.on_viewport(160);

    c.click_sort("score");
    c.click_sort("score");
    let top: Vec<_> = c.window().rows.iter().take(3).map(|r| r.row).collect();
    println!("top by score: {top:?}");

    c.on_scroll(200);
    c.append_rows((20..40).map(|id| Comment { id, score: 0 }));
    println!("rows={} loading={}", c.len(), c.table().is_loading_more());
}
