//! Character info edits made through chat commands.

use crate::{
    data::{user_info::UserInfoRepository, DataStore},
    error::storage::StorageError,
    model::{cap_name, user_info::UserInfoBook},
    service::format::truncate_chars,
};

/// Longest description kept by `setinfo`.
pub const MAX_DESCRIPTION_LENGTH: usize = 1500;

/// Result of an edit attempt, rendered as a notice to the author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoEdit {
    DescriptionChanged,
    ArtChanged,
    /// Record or global lock is set and the author is not the owner, or the name is reserved.
    Locked,
    GlobalLockToggled,
    RecordLockToggled,
    NotFound,
    AllDeleted,
    RecordDeleted,
}

impl InfoEdit {
    pub fn message(self) -> &'static str {
        match self {
            Self::DescriptionChanged => "Информация о персонаже успешно изменена.",
            Self::ArtChanged => "Изображение/арт персонажа успешно изменены.",
            Self::Locked => "Изменение информации об этом персонаже недоступно.",
            Self::GlobalLockToggled => {
                "Флаг глобальной блокировки изменения информации о персонажах успешно переключен."
            }
            Self::RecordLockToggled => {
                "Флаг блокировки изменения информации о данном персонаже успешно переключен."
            }
            Self::NotFound => "Не найдено информации о данном персонаже.",
            Self::AllDeleted => "Информация обо всех персонажах успешно удалена.",
            Self::RecordDeleted => "Информация о данном персонаже успешно удалена.",
        }
    }
}

pub struct UserInfoService<'a> {
    store: &'a DataStore,
}

impl<'a> UserInfoService<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Sets the description of `name`, creating the record if needed.
    ///
    /// # Arguments
    /// - `book` - Character info, locked for writing by the caller
    /// - `name` - Character name
    /// - `description` - New text, truncated to [`MAX_DESCRIPTION_LENGTH`]
    /// - `is_owner` - Owner edits bypass the locks
    ///
    /// # Returns
    /// - `Ok(InfoEdit::DescriptionChanged)` - Saved
    /// - `Ok(InfoEdit::Locked)` - Rejected or the name is reserved, nothing changed
    /// - `Err(StorageError)` - Saving failed
    pub fn set_description(
        &self,
        book: &mut UserInfoBook,
        name: &str,
        description: &str,
        is_owner: bool,
    ) -> Result<InfoEdit, StorageError> {
        let name = cap_name(name);
        if !is_owner && !book.is_editable(&name) {
            return Ok(InfoEdit::Locked);
        }
        let Some(info) = book.entry(&name) else {
            return Ok(InfoEdit::Locked);
        };

        info.description = Some(truncate_chars(description.trim(), MAX_DESCRIPTION_LENGTH));
        self.save(book)?;

        Ok(InfoEdit::DescriptionChanged)
    }

    /// Sets the art link of `name`; same lock rules as [`Self::set_description`].
    pub fn set_art(
        &self,
        book: &mut UserInfoBook,
        name: &str,
        art: &str,
        is_owner: bool,
    ) -> Result<InfoEdit, StorageError> {
        let name = cap_name(name);
        if !is_owner && !book.is_editable(&name) {
            return Ok(InfoEdit::Locked);
        }
        let Some(info) = book.entry(&name) else {
            return Ok(InfoEdit::Locked);
        };

        info.art = Some(art.to_string());
        self.save(book)?;

        Ok(InfoEdit::ArtChanged)
    }

    /// Toggles the global lock, or the lock of one existing record.
    pub fn toggle_lock(
        &self,
        book: &mut UserInfoBook,
        name: Option<&str>,
    ) -> Result<InfoEdit, StorageError> {
        let outcome = match name {
            None => {
                book.global_lock = !book.global_lock;
                InfoEdit::GlobalLockToggled
            }
            Some(name) => match book.records.get_mut(&cap_name(name)) {
                Some(info) => {
                    info.locked = !info.locked;
                    InfoEdit::RecordLockToggled
                }
                None => return Ok(InfoEdit::NotFound),
            },
        };
        self.save(book)?;

        Ok(outcome)
    }

    /// Deletes one record, or every record when `name` is `None`.
    pub fn delete(
        &self,
        book: &mut UserInfoBook,
        name: Option<&str>,
    ) -> Result<InfoEdit, StorageError> {
        let outcome = match name {
            None => {
                book.clear();
                InfoEdit::AllDeleted
            }
            Some(name) => {
                book.records.remove(&cap_name(name));
                InfoEdit::RecordDeleted
            }
        };
        self.save(book)?;

        Ok(outcome)
    }

    fn save(&self, book: &UserInfoBook) -> Result<(), StorageError> {
        UserInfoRepository::new(self.store).save(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::USER_INFO_FILE;
    use test_utils::{builder::TestBuilder, error::TestError};

    #[test]
    fn sets_description_and_persists() -> Result<(), TestError> {
        let test = TestBuilder::new().build()?;
        let store = DataStore::new(test.dir());
        let service = UserInfoService::new(&store);
        let mut book = UserInfoBook::default();

        let outcome = service
            .set_description(&mut book, "Steve", "  Строитель  ", false)
            .unwrap();

        assert_eq!(outcome, InfoEdit::DescriptionChanged);
        assert_eq!(book.description_of("Steve"), "Строитель");
        assert_eq!(test.read_json(USER_INFO_FILE)?["Steve"]["description"], "Строитель");
        Ok(())
    }

    #[test]
    fn description_is_capped() -> Result<(), TestError> {
        let test = TestBuilder::new().build()?;
        let store = DataStore::new(test.dir());
        let mut book = UserInfoBook::default();

        UserInfoService::new(&store)
            .set_description(&mut book, "Steve", &"a".repeat(2000), false)
            .unwrap();

        assert_eq!(book.description_of("Steve").chars().count(), MAX_DESCRIPTION_LENGTH);
        Ok(())
    }

    /// Tests lock handling for non-owner and owner edits.
    ///
    /// Expected: non-owner rejected without changes, owner edit applied
    #[test]
    fn locked_record_only_editable_by_owner() -> Result<(), TestError> {
        let test = TestBuilder::new().build()?;
        let store = DataStore::new(test.dir());
        let service = UserInfoService::new(&store);
        let mut book = UserInfoBook::default();
        book.entry("Steve").unwrap().locked = true;

        let rejected = service.set_art(&mut book, "Steve", "https://a/b.png", false).unwrap();
        assert_eq!(rejected, InfoEdit::Locked);
        assert_eq!(book.get("Steve").unwrap().art, None);
        assert!(!test.exists(USER_INFO_FILE));

        let accepted = service.set_art(&mut book, "Steve", "https://a/b.png", true).unwrap();
        assert_eq!(accepted, InfoEdit::ArtChanged);
        assert_eq!(book.get("Steve").unwrap().art.as_deref(), Some("https://a/b.png"));
        Ok(())
    }

    /// Tests edits aimed at names that collide with the file's own keys.
    ///
    /// Expected: rejected for owner and non-owner, file still loads afterwards
    #[test]
    fn reserved_names_cannot_be_edited() -> Result<(), TestError> {
        let test = TestBuilder::new().build()?;
        let store = DataStore::new(test.dir());
        let service = UserInfoService::new(&store);
        let mut book = UserInfoBook::default();
        service.set_description(&mut book, "Steve", "Строитель", false).unwrap();

        assert_eq!(
            service.set_description(&mut book, "_global_lock", "hi", false).unwrap(),
            InfoEdit::Locked
        );
        assert_eq!(
            service.set_art(&mut book, "_default", "https://a/b.png", true).unwrap(),
            InfoEdit::Locked
        );

        let reloaded = UserInfoRepository::new(&store).load().unwrap();
        assert_eq!(reloaded, book);
        assert_eq!(reloaded.default_description, "загрузка...");
        Ok(())
    }

    #[test]
    fn global_lock_blocks_every_record() -> Result<(), TestError> {
        let test = TestBuilder::new().build()?;
        let store = DataStore::new(test.dir());
        let service = UserInfoService::new(&store);
        let mut book = UserInfoBook::default();

        assert_eq!(service.toggle_lock(&mut book, None).unwrap(), InfoEdit::GlobalLockToggled);
        assert_eq!(
            service.set_description(&mut book, "Anyone", "x", false).unwrap(),
            InfoEdit::Locked
        );
        Ok(())
    }

    #[test]
    fn toggling_unknown_record_reports_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().build()?;
        let store = DataStore::new(test.dir());
        let mut book = UserInfoBook::default();

        let outcome = UserInfoService::new(&store).toggle_lock(&mut book, Some("Ghost")).unwrap();

        assert_eq!(outcome, InfoEdit::NotFound);
        assert!(book.get("Ghost").is_none());
        Ok(())
    }

    #[test]
    fn delete_all_keeps_default_description() -> Result<(), TestError> {
        let test = TestBuilder::new().build()?;
        let store = DataStore::new(test.dir());
        let service = UserInfoService::new(&store);
        let mut book = UserInfoBook::default();
        book.entry("Steve").unwrap().description = Some("x".to_string());
        book.entry("Alex").unwrap();
        book.global_lock = true;

        service.delete(&mut book, Some("Alex")).unwrap();
        assert!(book.get("Alex").is_none());
        assert!(book.get("Steve").is_some());

        assert_eq!(service.delete(&mut book, None).unwrap(), InfoEdit::AllDeleted);
        assert!(book.records.is_empty());
        assert!(!book.global_lock);
        assert_eq!(test.read_json(USER_INFO_FILE)?["_default"], "загрузка...");
        Ok(())
    }
}
