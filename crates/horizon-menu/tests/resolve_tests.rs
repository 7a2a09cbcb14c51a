//! Resolution tests: what a renderer receives for a given selection.

use horizon_menu::{
    ContextMenu, DisplayOverrides, Icon, Intent, MenuItem, RecordSelection, RecordsRequired,
    ResolvedEntry, ResolvedItem, SelectionContext,
};

type Ctx = RecordSelection<&'static str>;

fn leaf(name: &str, policy: RecordsRequired) -> MenuItem<Ctx> {
    MenuItem::builder(name)
        .with_records_required(policy)
        .with_action(|_| {})
        .build()
        .unwrap()
}

fn grid_menu() -> ContextMenu<Ctx> {
    ContextMenu::new()
        .with_item(leaf("Edit", RecordsRequired::Exactly(1)))
        .with_item(leaf("Delete", RecordsRequired::AtLeastOne))
        .with_separator()
        .with_item(
            MenuItem::builder("Compare")
                .with_records_required(RecordsRequired::Exactly(2))
                .with_intent(Intent::Primary)
                .with_action(|_| {})
                .build()
                .unwrap(),
        )
        .with_separator()
        .with_item(leaf("Refresh", RecordsRequired::Any))
}

fn items(entries: &[ResolvedEntry]) -> Vec<&ResolvedItem> {
    entries.iter().filter_map(ResolvedEntry::as_item).collect()
}

fn enabled_names(entries: &[ResolvedEntry]) -> Vec<&str> {
    items(entries)
        .into_iter()
        .filter(|item| item.enabled)
        .map(|item| item.text.as_str())
        .collect()
}

#[test]
fn test_enabled_state_follows_selection() {
    let menu = grid_menu();

    let none = menu.resolve(&RecordSelection::empty());
    assert_eq!(enabled_names(&none), vec!["Refresh"]);

    let one = menu.resolve(&RecordSelection::clicked("r1"));
    assert_eq!(enabled_names(&one), vec!["Edit", "Delete", "Refresh"]);

    let two = menu.resolve(&RecordSelection::new(vec!["r1", "r2"]));
    assert_eq!(enabled_names(&two), vec!["Delete", "Compare", "Refresh"]);
}

#[test]
fn test_disabled_items_stay_visible() {
    let resolved = grid_menu().resolve(&RecordSelection::empty());
    assert_eq!(resolved.len(), 6);
    assert_eq!(items(&resolved).len(), 4);
}

#[test]
fn test_paths_count_separators() {
    let resolved = grid_menu().resolve(&RecordSelection::empty());
    let paths: Vec<_> = items(&resolved).iter().map(|i| i.path.clone()).collect();
    assert_eq!(paths, vec![vec![0], vec![1], vec![3], vec![5]]);
}

#[test]
fn test_hidden_items_collapse_separators() {
    let menu: ContextMenu<Ctx> = ContextMenu::new()
        .with_separator()
        .with_item(leaf("Visible", RecordsRequired::Any))
        .with_separator()
        .with_item(MenuItem::builder("Hidden").with_hidden(true).build().unwrap())
        .with_separator()
        .with_item(leaf("Also visible", RecordsRequired::Any))
        .with_separator();

    let resolved = menu.resolve(&RecordSelection::empty());
    let shape: Vec<_> = resolved
        .iter()
        .map(|e| e.as_item().map_or("-", |i| i.text.as_str()))
        .collect();
    assert_eq!(shape, vec!["Visible", "-", "Also visible"]);
}

#[test]
fn test_display_fn_tracks_selection() {
    let menu: ContextMenu<Ctx> = ContextMenu::new().with_item(
        MenuItem::builder("Copy")
            .with_records_required(true)
            .with_icon("copy")
            .with_display_fn(|ctx: &Ctx| {
                let count = ctx.active_count();
                let overrides = DisplayOverrides::new();
                if count > 1 {
                    overrides.with_text(format!("Copy {count} rows"))
                } else {
                    overrides
                }
            })
            .build()
            .unwrap(),
    );

    let single = menu.resolve(&RecordSelection::clicked("r1"));
    assert_eq!(items(&single)[0].text, "Copy");

    let many = menu.resolve(&RecordSelection::new(vec!["a", "b", "c"]));
    let copy = items(&many)[0];
    assert_eq!(copy.text, "Copy 3 rows");
    assert_eq!(copy.icon, Some(Icon::new("copy")));
}

#[test]
fn test_nested_submenu_resolution() {
    let menu: ContextMenu<Ctx> = ContextMenu::new().with_item(
        MenuItem::builder("Export")
            .with_records_required(false)
            .with_item(leaf("Selected rows", RecordsRequired::AtLeastOne))
            .with_separator()
            .with_item(leaf("All rows", RecordsRequired::Any))
            .build()
            .unwrap(),
    );

    let resolved = menu.resolve(&RecordSelection::empty());
    let export = items(&resolved)[0];
    assert!(export.is_submenu());
    assert!(export.enabled);
    assert!(!export.has_action);

    let children: Vec<_> = export
        .child_items()
        .map(|c| (c.text.as_str(), c.enabled, c.path.clone()))
        .collect();
    assert_eq!(
        children,
        vec![
            ("Selected rows", false, vec![0, 0]),
            ("All rows", true, vec![0, 2]),
        ]
    );
}

#[test]
fn test_resolved_menu_serializes_for_renderers() {
    let menu: ContextMenu<Ctx> = ContextMenu::new()
        .with_item(leaf("Edit", RecordsRequired::Exactly(1)))
        .with_separator()
        .with_item(leaf("Refresh", RecordsRequired::Any));

    let json = serde_json::to_value(menu.resolve(&RecordSelection::empty())).unwrap();
    assert_eq!(json[0]["kind"], "item");
    assert_eq!(json[0]["text"], "Edit");
    assert_eq!(json[0]["enabled"], false);
    assert_eq!(json[0]["intent"], "none");
    assert_eq!(json[1]["kind"], "separator");
    assert_eq!(json[2]["path"], serde_json::json!([2]));
}
