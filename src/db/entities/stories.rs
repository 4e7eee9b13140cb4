//! DB storage for generated stories
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "storiesimg")]
/// A saved image and the story generated for it
pub struct Model {
    #[sea_orm(primary_key)]
    /// db id
    pub id: i32,
    /// server-side path the upload was saved under, used as the dedup key
    pub image_path: String,
    /// the generated narrative
    #[sea_orm(column_type = "Text")]
    pub story_text: String,
    /// when the record was inserted
    pub created_at: DateTime,
}

/// relations for stories (none)
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Looks up a story by the exact path its image was saved under.
///
/// Matching is plain string equality, so two uploads saved under
/// different-but-equivalent paths count as distinct stories.
pub async fn find_by_image_path(
    db: &DatabaseConnection,
    path: &str,
) -> Result<Option<Model>, DbErr> {
    Entity::find()
        .filter(Column::ImagePath.eq(path))
        .one(db)
        .await
}

/// Inserts a new story record for a freshly saved image.
///
/// `id` and `created_at` are assigned by the store.
pub async fn create(
    db: &DatabaseConnection,
    image_path: &str,
    story_text: &str,
) -> Result<Model, DbErr> {
    let active = ActiveModel {
        image_path: Set(image_path.to_string()),
        story_text: Set(story_text.to_string()),
        ..Default::default()
    };
    active.insert(db).await
}
