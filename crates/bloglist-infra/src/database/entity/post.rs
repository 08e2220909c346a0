//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub author: String,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    pub likes: i64,
    /// No foreign key: a post outlives a removed author.
    pub owner_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for bloglist_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            url: model.url,
            likes: u64::try_from(model.likes).unwrap_or(0),
            owner_id: model.owner_id,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<bloglist_core::domain::Post> for ActiveModel {
    fn from(post: bloglist_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            author: Set(post.author),
            url: Set(post.url),
            likes: Set(i64::try_from(post.likes).unwrap_or(i64::MAX)),
            owner_id: Set(post.owner_id),
        }
    }
}
