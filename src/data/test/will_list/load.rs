use super::*;

/// Tests loading when no will list was ever written.
///
/// Expected: Ok with no entries and no modification day
#[test]
fn missing_file_has_no_day() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = DataStore::new(test.dir());

    let stored = WillListRepository::new(&store).load().unwrap();

    assert!(stored.entries.is_empty());
    assert_eq!(stored.modified_on, None);
    Ok(())
}

/// Tests loading a freshly written file.
///
/// Expected: Ok with entries and today's date as the modification day
#[test]
fn loads_entries_with_modification_day() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(WILL_LIST_FILE, json!({ "Alice": "after work", "Bob": "" }))
        .build()?;
    let store = DataStore::new(test.dir());

    let stored = WillListRepository::new(&store).load().unwrap();

    assert_eq!(stored.entries.get("Alice").map(String::as_str), Some("after work"));
    assert_eq!(stored.entries.get("Bob").map(String::as_str), Some(""));
    assert_eq!(stored.modified_on, Some(Utc::now().date_naive()));
    Ok(())
}
