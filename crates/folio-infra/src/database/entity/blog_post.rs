//! Blog post entity for SeaORM.

use sea_orm::{NotSet, Set};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub thumbnail: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    pub published_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    /// Insertion sequence assigned by the database; defines collection order.
    #[sea_orm(unique)]
    pub position: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain BlogPost.
impl From<Model> for folio_core::domain::BlogPost {
    fn from(model: Model) -> Self {
        // Non-string tag values are skipped rather than failing the whole read.
        let tags = model
            .tags
            .as_array()
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            content: model.content,
            thumbnail: model.thumbnail,
            tags,
            published_at: model.published_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain BlogPost to SeaORM ActiveModel.
impl From<folio_core::domain::BlogPost> for ActiveModel {
    fn from(post: folio_core::domain::BlogPost) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            slug: Set(post.slug),
            description: Set(post.description),
            content: Set(post.content),
            thumbnail: Set(post.thumbnail),
            tags: Set(Json::from(post.tags)),
            published_at: Set(post.published_at.into()),
            updated_at: Set(post.updated_at.into()),
            position: NotSet,
        }
    }
}
