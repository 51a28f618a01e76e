use super::*;

/// Tests that the list is written as a flat name → comment object.
///
/// Expected: Ok with the file matching the entries
#[test]
fn writes_flat_object() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = DataStore::new(test.dir());

    let mut entries = WillListEntries::new();
    entries.insert("Alice".to_string(), "evening".to_string());
    WillListRepository::new(&store).save(&entries).unwrap();

    assert_eq!(test.read_json(WILL_LIST_FILE)?, json!({ "Alice": "evening" }));
    Ok(())
}
