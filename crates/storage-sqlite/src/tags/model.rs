//! Database model for tags.

use diesel::prelude::*;
use tallyfolio_core::tags::Tag;

#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::tags)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TagDB {
    pub name: String,
    pub description: Option<String>,
    pub background_color: String,
    pub foreground_color: String,
}

impl From<TagDB> for Tag {
    fn from(db: TagDB) -> Self {
        Self {
            name: db.name,
            description: db.description,
            background_color: db.background_color,
            foreground_color: db.foreground_color,
        }
    }
}

impl From<Tag> for TagDB {
    fn from(domain: Tag) -> Self {
        Self {
            name: domain.name,
            description: domain.description,
            background_color: domain.background_color,
            foreground_color: domain.foreground_color,
        }
    }
}
