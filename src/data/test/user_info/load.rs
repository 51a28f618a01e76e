use super::*;

/// Tests loading when the file is missing.
///
/// Expected: Ok with no records and the default description
#[test]
fn returns_default_book_when_file_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = DataStore::new(test.dir());

    let book = UserInfoRepository::new(&store).load().unwrap();

    assert!(book.records.is_empty());
    assert!(!book.global_lock);
    assert_eq!(book.default_description, "загрузка...");
    Ok(())
}

/// Tests loading records with and without optional fields.
///
/// Expected: Ok with timestamps decoded from epoch milliseconds
#[test]
fn loads_records() -> Result<(), TestError> {
    let seen = Utc.with_ymd_and_hms(2024, 3, 10, 18, 30, 0).unwrap();
    let test = TestBuilder::new()
        .with_json(
            USER_INFO_FILE,
            user_info_file(
                true,
                vec![
                    (
                        "Alice",
                        UserInfoFactory::new()
                            .last_seen_at(seen)
                            .locked(true)
                            .description("Miner")
                            .build(),
                    ),
                    ("Bob", UserInfoFactory::new().art("https://a/b.png").build()),
                ],
            ),
        )
        .build()?;
    let store = DataStore::new(test.dir());

    let book = UserInfoRepository::new(&store).load().unwrap();

    assert!(book.global_lock);
    let alice = book.get("Alice").unwrap();
    assert_eq!(alice.last_seen_at, Some(seen));
    assert!(alice.locked);
    assert_eq!(alice.description.as_deref(), Some("Miner"));
    let bob = book.get("Bob").unwrap();
    assert_eq!(bob.last_seen_at, None);
    assert_eq!(bob.art.as_deref(), Some("https://a/b.png"));
    Ok(())
}
