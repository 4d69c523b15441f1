// Example: keep the viewport on the same row while older rows are prepended.
use table_virtualizer::TableOptions;
use table_virtualizer_adapter::TableController;

fn main() {
    let mut c = TableController::new(TableOptions::new(1, |id: &u64, _| *id)).unwrap();
    c.append_rows(1_000..1_100);
    c.on_viewport(10);
    c.on_scroll(50);

    let before = c.window().rows.first().map(|r| *r.row);
    c.prepend_rows(2_000..2_010);
    let after = c.window().rows.first().map(|r| *r.row);

    println!("first row before={before:?} after={after:?}");
    println!("scroll_offset={}", c.table().scroll_offset());
}
