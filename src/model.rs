//! Book record shapes: stored row, create body, partial update body.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A persisted book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Body of `POST /books`. Both fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewBook {
    pub title: String,
    pub author: String,
}

/// One field of a partial update: left alone, or replaced with a value.
///
/// Both an omitted key and an explicit `null` deserialize to [`Patch::Unset`];
/// stored fields can never be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Unset,
    Set(T),
}

impl<T> Patch<T> {
    /// Replace `current` when this patch carries a value.
    pub fn apply_to(self, current: &mut T) {
        if let Patch::Set(v) = self {
            *current = v;
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Patch::Unset, Patch::Set))
    }
}

/// Body of `PUT /books/{book_id}`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookUpdate {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub author: Patch<String>,
}

impl BookUpdate {
    pub fn is_empty(&self) -> bool {
        !self.title.is_set() && !self.author.is_set()
    }

    /// Apply the supplied fields to `book` in place.
    pub fn apply(self, book: &mut Book) {
        self.title.apply_to(&mut book.title);
        self.author.apply_to(&mut book.author);
    }
}
