//! Author entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub name: Option<String>,
    pub secret_hash: String,
    pub post_ids: Vec<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Author.
impl From<Model> for bloglist_core::domain::Author {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            name: model.name,
            secret_hash: model.secret_hash,
            post_ids: model.post_ids,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Author to SeaORM ActiveModel.
impl From<bloglist_core::domain::Author> for ActiveModel {
    fn from(author: bloglist_core::domain::Author) -> Self {
        Self {
            id: Set(author.id),
            username: Set(author.username),
            name: Set(author.name),
            secret_hash: Set(author.secret_hash),
            post_ids: Set(author.post_ids),
            created_at: Set(author.created_at.into()),
        }
    }
}
