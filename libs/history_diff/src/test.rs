use history_fixtures::*;
use history_model::{ElementKind, History};
use log::info;
use url::Url;

use crate::{ChangeClass, ChangeRow, HistoryTable, Link, Links, change_row};

use ChangeClass::*;

fn links() -> Links {
    let site = Url::parse("https://osm.org").expect("valid url");
    Links::for_site(&site).expect("site can be a base")
}

fn classes(row: &ChangeRow) -> Vec<ChangeClass> {
    row.cells.iter().map(|cell| cell.class).collect()
}

fn values(row: &ChangeRow) -> Vec<&str> {
    row.cells.iter().map(|cell| cell.value.as_str()).collect()
}

fn row<'a>(rows: &'a [ChangeRow], label: &str) -> &'a ChangeRow {
    rows.iter()
        .find(|row| row.label == label)
        .unwrap_or_else(|| panic!("no row labelled {label}"))
}

fn table(kind: ElementKind, id: i64, body: &str) -> HistoryTable {
    let history = History::from_json(kind, id, body.as_bytes()).expect("fixture must decode");
    HistoryTable::build(&history, &links())
}

#[test_log::test]
fn classify_covers_every_transition() {
    assert_eq!(ChangeClass::classify::<i32>(None, None), NotPresent);
    assert_eq!(ChangeClass::classify(None, Some(&1)), New);
    assert_eq!(ChangeClass::classify(Some(&1), None), Removed);
    assert_eq!(ChangeClass::classify(Some(&1), Some(&2)), Changed);
    assert_eq!(ChangeClass::classify(Some(&1), Some(&1)), Unchanged);
}

#[test_log::test]
fn class_names_are_css_classes() {
    assert_eq!(NotPresent.to_string(), "notpresent");
    assert_eq!(Unchanged.as_ref(), "unchanged");
}

#[test_log::test]
fn empty_versions_give_empty_rows() {
    let row = change_row("Anything", &[], |v| Some(v.version), None);
    assert!(row.cells.is_empty());
    assert!(!row.has_changes());
}

#[test_log::test]
fn node_properties() {
    let table = table(ElementKind::Node, NODE_ID, NODE_HISTORY);

    let user = row(&table.properties, "User");
    assert_eq!(classes(user), vec![New, Changed, Unchanged]);
    assert_eq!(
        user.cells[1].url.as_deref(),
        Some("https://osm.org/user/bob%20smith")
    );

    let changeset = row(&table.properties, "Changeset");
    assert_eq!(values(changeset), vec!["11244210", "25412001", "66810033"]);
    assert_eq!(
        changeset.cells[0].url.as_deref(),
        Some("https://osm.org/changeset/11244210")
    );

    let lat = row(&table.properties, "Lat");
    assert_eq!(classes(lat), vec![New, Unchanged, Changed]);
    let lon = row(&table.properties, "Lon");
    assert_eq!(classes(lon), vec![New, Unchanged, Unchanged]);
    assert!(lon.cells.iter().all(|cell| cell.url.is_none()));
}

#[test_log::test]
fn node_changed_rows() {
    let table = table(ElementKind::Node, NODE_ID, NODE_HISTORY);

    // User, Changeset, Lat and all four tags; Lon never moves.
    assert_eq!(table.changed_rows(), 7);
    assert!(!row(&table.properties, "Lon").has_changes());
    assert!(row(&table.tags, "note").has_changes());
}

#[test_log::test]
fn node_tags() {
    let table = table(ElementKind::Node, NODE_ID, NODE_HISTORY);

    let labels: Vec<&str> = table.tags.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["amenity", "name", "opening_hours", "note"]);

    let amenity = row(&table.tags, "amenity");
    assert_eq!(classes(amenity), vec![New, Unchanged, Removed]);
    assert_eq!(values(amenity), vec!["cafe", "cafe", ""]);

    let name = row(&table.tags, "name");
    assert_eq!(classes(name), vec![New, Changed, Unchanged]);

    let hours = row(&table.tags, "opening_hours");
    assert_eq!(classes(hours), vec![NotPresent, New, Unchanged]);

    assert!(table.nodes.is_empty());
    assert!(table.members.is_empty());
}

#[test_log::test]
fn deleted_version_removes_everything() {
    let table = table(ElementKind::Node, DELETED_NODE_ID, DELETED_NODE_HISTORY);

    assert_eq!(classes(row(&table.tags, "tourism")), vec![New, Removed]);
    assert_eq!(classes(row(&table.properties, "Lat")), vec![New, Removed]);
    assert_eq!(classes(row(&table.properties, "User")), vec![New, Unchanged]);
    assert!(!table.versions[1].visible);
}

#[test_log::test]
fn way_nodes() {
    let table = table(ElementKind::Way, WAY_ID, WAY_HISTORY);

    let labels: Vec<&str> = table.nodes.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["1", "2", "3", "4"]);

    assert_eq!(classes(row(&table.nodes, "1")), vec![New, Unchanged, Removed]);
    assert_eq!(classes(row(&table.nodes, "2")), vec![New, Removed, NotPresent]);
    assert_eq!(classes(row(&table.nodes, "4")), vec![NotPresent, New, Removed]);
    assert_eq!(values(row(&table.nodes, "4")), vec!["", "4", ""]);

    // Ways carry no coordinates of their own.
    assert!(table.properties.iter().all(|row| row.label != "Lat"));
}

#[test_log::test]
fn relation_members() {
    let table = table(ElementKind::Relation, RELATION_ID, RELATION_HISTORY);

    let labels: Vec<&str> = table.members.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["way/10 (outer)", "node/1", "way/11 (inner)"]);

    assert_eq!(classes(row(&table.members, "way/10 (outer)")), vec![New, Unchanged]);
    assert_eq!(classes(row(&table.members, "node/1")), vec![New, Removed]);
    assert_eq!(classes(row(&table.members, "way/11 (inner)")), vec![NotPresent, New]);

    assert_eq!(classes(row(&table.tags, "landuse")), vec![New, Changed]);
    assert!(table.nodes.is_empty());
}

#[test_log::test]
fn every_row_spans_every_version() {
    for (kind, id, body) in [
        (ElementKind::Node, NODE_ID, NODE_HISTORY),
        (ElementKind::Way, WAY_ID, WAY_HISTORY),
        (ElementKind::Relation, RELATION_ID, RELATION_HISTORY),
    ] {
        let table = table(kind, id, body);
        let rows = table
            .properties
            .iter()
            .chain(&table.tags)
            .chain(&table.nodes)
            .chain(&table.members);

        for row in rows {
            assert_eq!(row.cells.len(), table.versions.len(), "row {}", row.label);
            assert!(matches!(row.cells[0].class, New | NotPresent));
        }

        info!("{kind}/{id}: {} changed rows", table.changed_rows());
    }
}

#[test_log::test]
fn links_encode_a_single_segment() {
    let site = Url::parse("https://osm.org/").expect("valid url");
    let link = Link::under(&site, "user").expect("site can be a base");

    assert_eq!(link.resolve("a/b?c"), "https://osm.org/user/a%2Fb%3Fc");
    assert!(Link::new(Url::parse("mailto:someone@example.com").expect("valid url")).is_none());
}
