//! Grid context menu walkthrough.
//!
//! Builds a menu from a JSON definition, resolves it for a few selections
//! and prints what a renderer would draw.
//!
//! Run with `RUST_LOG=horizon_menu=debug` to see resolution logs.

use horizon_menu::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: u32,
    locked: bool,
}

impl Row {
    fn new(id: u32) -> Self {
        Self { id, locked: false }
    }

    fn locked(id: u32) -> Self {
        Self { id, locked: true }
    }
}

const MENU: &str = r#"{
    "items": [
        { "name": "Edit", "icon": "edit", "action": "edit" },
        { "name": "Delete", "icon": "trash", "intent": "danger",
          "records_required": true, "action": "delete", "enable": "unlocked" },
        "-",
        { "name": "Compare", "records_required": 2, "action": "compare" },
        "-",
        { "name": "Export", "records_required": false, "items": [
            { "name": "Selection as CSV", "records_required": true, "action": "export" },
            { "name": "All rows as CSV", "records_required": false, "action": "export" }
        ]}
    ]
}"#;

fn print_entries(entries: &[ResolvedEntry], depth: usize) {
    let indent = "  ".repeat(depth);
    for entry in entries {
        match entry {
            ResolvedEntry::Separator => println!("{indent}-----"),
            ResolvedEntry::Item(item) => {
                let state = if item.enabled { "" } else { " (disabled)" };
                println!("{indent}{}{state}", item.text);
                print_entries(&item.children, depth + 1);
            }
        }
    }
}

fn main() -> Result<(), MenuError> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry = ActionRegistry::<RecordSelection<Row>>::new()
        .with_action("edit", |ctx| println!("  -> edit {:?}", ctx.clicked_record()))
        .with_action("delete", |ctx| {
            let ids: Vec<_> = ctx.active_records().map(|row| row.id).collect();
            println!("  -> delete {ids:?}");
        })
        .with_action("compare", |_| println!("  -> compare"))
        .with_action("export", |ctx| {
            println!("  -> export {} rows", ctx.active_count())
        })
        .with_predicate("unlocked", |ctx| ctx.active_records().all(|row| !row.locked));

    let menu = registry.menu_from_json(MENU)?;

    let selections = [
        ("nothing selected", RecordSelection::empty()),
        ("right-click on row 1", RecordSelection::clicked(Row::new(1))),
        (
            "rows 1 and 2 selected",
            RecordSelection::new(vec![Row::new(1), Row::new(2)]),
        ),
        (
            "locked row 3 clicked with row 1 selected",
            RecordSelection::new(vec![Row::new(1)]).with_clicked(Row::locked(3)),
        ),
    ];

    for (label, selection) in &selections {
        println!("\n{label}:");
        print_entries(&menu.resolve(selection), 1);
    }

    let (_, two_rows) = &selections[2];
    println!("\nclicking Delete with two rows selected:");
    menu.trigger(&[1], two_rows)?;

    Ok(())
}
