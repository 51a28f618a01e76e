use super::*;

/// Tests that saving writes the persisted shape with the `_apply` flag.
///
/// Expected: Ok with the file matching the on-disk format
#[test]
fn writes_file_shape() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = DataStore::new(test.dir());
    let repo = AvatarRepository::new(&store);

    let mut book = repo.load().unwrap();
    book.apply = true;
    book.set("Alice", "<:alice:1>");
    repo.save(&book).unwrap();

    assert_eq!(
        test.read_json(AVATARS_FILE)?,
        factory::avatar::avatars(true, &[("Alice", "<:alice:1>")])
    );
    assert_eq!(repo.load().unwrap(), book);
    Ok(())
}

/// Tests that saving creates a missing data directory.
///
/// Expected: Ok with the file written inside the new directory
#[test]
fn creates_missing_directory() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = DataStore::new(test.path("nested/data"));

    AvatarRepository::new(&store)
        .save(&Default::default())
        .unwrap();

    assert!(test.exists("nested/data/avatars.json"));
    Ok(())
}
