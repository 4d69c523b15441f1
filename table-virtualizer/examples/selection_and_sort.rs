// Example: selection follows row identity; header clicks cycle asc -> desc -> none.
use table_virtualizer::{SelectionLedger, SortState, TableOptions, VirtualTable};

#[derive(Debug)]
struct Tag {
    id: u64,
    name: &'static str,
}

fn main() {
    let mut rows = vec![
        Tag {
            id: 7,
            name: "gamma",
        },
        Tag {
            id: 3,
            name: "alpha",
        },
        Tag {
            id: 5,
            name: "beta",
        },
    ];
    let opts = TableOptions::new(20, |t: &Tag, _| t.id)
        .with_selectable(true)
        .with_sortable(true)
        .with_on_selection_change(Some(|s: &SelectionLedger<u64>| {
            println!("selection: {} row(s)", s.len());
        }))
        .with_on_sort(Some(|s: &SortState| {
            println!("sort: {:?} {:?}", s.column(), s.direction());
        }));
    let mut table = VirtualTable::new(opts).unwrap();

    table.toggle_row(&rows, 0);
    for _ in 0..3 {
        if let Some(direction) = table.click_sort("name").and_then(|s| s.direction()) {
            rows.sort_by(|a, b| direction.apply(a.name.cmp(b.name)));
        }
        let selected: Vec<&str> = rows
            .iter()
            .enumerate()
            .filter(|(i, t)| table.is_row_selected(t, *i))
            .map(|(_, t)| t.name)
            .collect();
        println!("order={rows:?} selected={selected:?}");
    }
}
