//! Owner commands that manage character avatars.

use crate::{
    data::{avatar::AvatarRepository, DataStore},
    error::storage::StorageError,
    model::{avatar::AvatarBook, cap_name},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarChange {
    AllRemoved,
    Removed,
    Changed,
    DisplayToggled,
}

impl AvatarChange {
    pub fn message(self) -> &'static str {
        match self {
            Self::AllRemoved => "Все аватары персонажей успешно удалены.",
            Self::Removed => "Аватар данного персонажа успешно удален.",
            Self::Changed => "Аватар данного персонажа успешно изменен.",
            Self::DisplayToggled => "Флаг отображения аватаров персонажей успешно переключен.",
        }
    }
}

pub struct AvatarService<'a> {
    store: &'a DataStore,
}

impl<'a> AvatarService<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Clears all avatars, clears one, or sets one, depending on which arguments are given.
    ///
    /// # Arguments
    /// - `name` - Character name; `None` clears every avatar
    /// - `emoji` - New avatar; `None` clears the avatar of `name`
    pub fn update(
        &self,
        book: &mut AvatarBook,
        name: Option<&str>,
        emoji: Option<&str>,
    ) -> Result<AvatarChange, StorageError> {
        let change = match (name, emoji) {
            (None, _) => {
                book.clear();
                AvatarChange::AllRemoved
            }
            (Some(name), None) => {
                book.remove(&cap_name(name));
                AvatarChange::Removed
            }
            (Some(name), Some(emoji)) => {
                book.set(&cap_name(name), emoji);
                AvatarChange::Changed
            }
        };
        AvatarRepository::new(self.store).save(book)?;

        Ok(change)
    }

    /// Flips whether list entries are prefixed with avatars.
    pub fn toggle_display(&self, book: &mut AvatarBook) -> Result<AvatarChange, StorageError> {
        book.apply = !book.apply;
        AvatarRepository::new(self.store).save(book)?;

        Ok(AvatarChange::DisplayToggled)
    }
}
