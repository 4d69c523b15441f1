// Example: window a large table and paint it with column renderers.
use table_virtualizer::{Column, TableOptions, VirtualTable};

struct Post {
    id: u64,
    title: String,
}

fn main() {
    let posts: Vec<Post> = (0..1_000_000)
        .map(|i| Post {
            id: i,
            title: format!("Post #{i}"),
        })
        .collect();
    let columns: Vec<Column<Post>> = vec![
        Column::new("id", "ID", |p: &Post, _| p.id.to_string()).with_width(Some(8)),
        Column::new("title", "Title", |p: &Post, _| p.title.clone()).with_sortable(true),
    ];

    let mut table = VirtualTable::new(TableOptions::new(24, |p: &Post, _| p.id)).unwrap();
    let range = table.on_scroll(12_345_678, 600, posts.len());
    let total_height = table.total_height(posts.len());
    println!("range={range:?} total_height={total_height}");

    let window = table.window(&posts);
    println!(
        "top_spacer={} rows={} bottom_spacer={}",
        window.top_spacer,
        window.len(),
        window.bottom_spacer
    );
    for row in window.rows.iter().take(3) {
        println!("{:>8} {:?}", row.top, row.cells(&columns));
    }
}
