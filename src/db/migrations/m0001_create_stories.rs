use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
/// Creates the storiesimg table
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Stories::ImagePath)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Stories::StoryText).text().not_null())
                    .col(
                        ColumnDef::new(Stories::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stories::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Stories {
    #[sea_orm(iden = "storiesimg")]
    Table,
    Id,
    ImagePath,
    StoryText,
    CreatedAt,
}
