//! Tests for list MCP tool logic

use std::sync::Arc;

use crate::db::{
    Database, DbError, IdInput, MemoryDatabase, TodoItemRepository, TodoListRepository,
};
use crate::mcp::tools::{EXAMPLE_LIST_NAME, ListTools};

fn setup() -> (Arc<MemoryDatabase>, ListTools<MemoryDatabase>) {
    let db = Arc::new(MemoryDatabase::new());
    let tools = ListTools::new(Arc::clone(&db));
    (db, tools)
}

#[test]
fn test_get_lists_reflects_store() {
    let (db, tools) = setup();
    assert!(tools.get_lists().is_empty());

    db.lists().create(Some("Groceries")).unwrap();
    let lists = tools.get_lists();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].name, "Groceries");
}

#[test]
fn test_get_list_by_name_is_exact() {
    let (_db, tools) = setup();
    tools.create_list("Groceries").unwrap();

    assert_eq!(tools.get_list_by_name("Groceries").unwrap().id, 1);
    assert_eq!(
        tools.get_list_by_name("groceries"),
        Err(DbError::not_found("List with name \"groceries\" not found."))
    );
}

#[test]
fn test_create_list_rejects_empty_and_duplicate_names() {
    let (db, tools) = setup();
    tools.create_list("A").unwrap();

    assert_eq!(
        tools.create_list(""),
        Err(DbError::invalid_argument("List name cannot be empty."))
    );
    assert_eq!(
        tools.create_list("A"),
        Err(DbError::conflict("Todo list already exists"))
    );
    assert_eq!(db.lists().all().len(), 1);
}

#[test]
fn test_update_list_renames_by_name() {
    let (db, tools) = setup();
    tools.create_list("Old").unwrap();

    let updated = tools.update_list("Old", Some("New")).unwrap();
    assert_eq!(updated.name, "New");
    assert_eq!(db.lists().get(&IdInput::from(1)).unwrap().name, "New");
}

#[test]
fn test_update_list_without_new_name_keeps_it() {
    let (_db, tools) = setup();
    tools.create_list("Same").unwrap();

    assert_eq!(tools.update_list("Same", None).unwrap().name, "Same");
}

#[test]
fn test_update_list_rejects_empty_and_taken_names() {
    let (_db, tools) = setup();
    tools.create_list("A").unwrap();
    tools.create_list("B").unwrap();

    assert_eq!(
        tools.update_list("A", Some("")),
        Err(DbError::invalid_argument("List name cannot be empty."))
    );
    assert_eq!(
        tools.update_list("A", Some("B")),
        Err(DbError::conflict("List with name \"B\" already exists."))
    );
    assert_eq!(
        tools.update_list("A", Some("A")),
        Err(DbError::conflict("List with name \"A\" already exists."))
    );
    assert_eq!(
        tools.update_list("Missing", Some("C")),
        Err(DbError::not_found("List with name \"Missing\" not found."))
    );
}

#[test]
fn test_delete_list_cascades() {
    let (db, tools) = setup();
    let list = tools.create_list("Chores").unwrap();
    db.items()
        .add(&IdInput::from(list.id), Some("dishes"))
        .unwrap();

    assert_eq!(
        tools.delete_list("Chores").unwrap(),
        "List \"Chores\" deleted successfully."
    );
    assert!(db.lists().all().is_empty());
    assert!(db.items().all(&IdInput::from(list.id)).is_err());
}

#[test]
fn test_example_list_is_populated() {
    let (db, tools) = setup();

    let list = tools.example_list().unwrap();
    assert_eq!(list.name, EXAMPLE_LIST_NAME);

    let descriptions: Vec<String> = db
        .items()
        .all(&IdInput::from(list.id))
        .unwrap()
        .into_iter()
        .map(|i| i.description)
        .collect();
    assert_eq!(
        descriptions,
        vec!["Example Item 1", "Example Item 2", "Example Item 3"]
    );

    // A second call collides with the first list.
    assert!(matches!(
        tools.example_list(),
        Err(DbError::Conflict { .. })
    ));
}
