// Example: the load-more trigger fires once per outstanding load.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use table_virtualizer::{TableOptions, VirtualTable};

fn main() {
    let requests = Arc::new(AtomicUsize::new(0));
    let r = Arc::clone(&requests);
    let opts = TableOptions::new(10, |row: &u64, _| *row)
        .with_load_more_threshold(100)
        .with_on_load_more(Some(move || {
            r.fetch_add(1, Ordering::Relaxed);
        }));
    let mut table = VirtualTable::new(opts).unwrap();
    let mut rows: Vec<u64> = (0..1_000).collect();

    // A fast fling towards the end: only the first event past the threshold requests a page.
    for offset in (9_000..=9_400).step_by(50) {
        table.on_scroll(offset, 600, rows.len());
    }
    let sent = requests.load(Ordering::Relaxed);
    println!("requests after fling: {sent}");

    // The page arrives; the next scroll sees more rows and the latch is open again.
    rows.extend(1_000..1_100);
    table.on_scroll(9_400, 600, rows.len());
    table.on_scroll(10_350, 600, rows.len());
    let sent = requests.load(Ordering::Relaxed);
    println!("requests after next page: {sent}");
}
