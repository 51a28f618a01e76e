use super::*;

/// Tests that names are written with empty-object markers.
///
/// Expected: Ok with the persisted shape `{"<observer>": {"<name>": {}}}`
#[test]
fn writes_marker_objects() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = DataStore::new(test.dir());
    let repo = WaitListRepository::new(&store);

    let mut entries = WaitListEntries::new();
    entries.insert(42, BTreeSet::from(["Carol".to_string()]));
    repo.save(&entries).unwrap();

    assert_eq!(
        test.read_json(WAIT_LIST_FILE)?,
        json!({ "42": { "Carol": {} } })
    );
    assert_eq!(repo.load().unwrap(), entries);
    Ok(())
}
