use super::*;

/// Tests loading when no avatar file exists yet.
///
/// Expected: Ok with an empty map and display disabled
#[test]
fn returns_empty_book_when_file_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = DataStore::new(test.dir());

    let book = AvatarRepository::new(&store).load().unwrap();

    assert!(!book.apply);
    assert!(book.avatars.is_empty());
    Ok(())
}

/// Tests loading a seeded avatar file.
///
/// Expected: Ok with the display flag and every avatar preserved
#[test]
fn loads_flag_and_avatars() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(
            AVATARS_FILE,
            factory::avatar::avatars(true, &[("Alice", "<:alice:1>"), ("Bob", "🐝")]),
        )
        .build()?;
    let store = DataStore::new(test.dir());

    let book = AvatarRepository::new(&store).load().unwrap();

    assert!(book.apply);
    assert_eq!(book.get("Alice"), Some("<:alice:1>"));
    assert_eq!(book.get("Bob"), Some("🐝"));
    assert_eq!(book.avatars.len(), 2);
    Ok(())
}

/// Tests loading a file that is not valid JSON.
///
/// Expected: Err with a parse error
#[test]
fn fails_on_malformed_file() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_file(AVATARS_FILE, "{ not json")
        .build()?;
    let store = DataStore::new(test.dir());

    let result = AvatarRepository::new(&store).load();

    assert!(matches!(
        result,
        Err(crate::error::storage::StorageError::Parse { .. })
    ));
    Ok(())
}
