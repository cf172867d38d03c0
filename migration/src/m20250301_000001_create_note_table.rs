use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_note_table()).await?;

        // Notes are always listed per subject
        manager
            .create_index(
                Index::create()
                    .name("idx_note_subject_user_id")
                    .table(Note::Table)
                    .col(Note::SubjectUserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_note_subject_user_id")
                    .table(Note::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Note::Table).to_owned())
            .await
    }
}

fn create_note_table() -> TableCreateStatement {
    Table::create()
        .table(Note::Table)
        .if_not_exists()
        .col(pk_auto(Note::Id))
        .col(big_integer(Note::SubjectUserId))
        .col(text(Note::Content))
        .col(big_integer(Note::AuthorId))
        .col(string(Note::AuthorName))
        // The entity stores UTC instants
        .col(timestamp_with_time_zone(Note::CreatedAt))
        .to_owned()
}

#[derive(DeriveIden)]
enum Note {
    Table,
    Id,
    SubjectUserId,
    Content,
    AuthorId,
    AuthorName,
    CreatedAt,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that created_at keeps its offset on Postgres.
    ///
    /// Expected: column rendered as timestamp with time zone
    #[test]
    fn created_at_is_timezone_aware() {
        let sql = create_note_table()
            .to_string(PostgresQueryBuilder)
            .to_lowercase();

        assert!(sql.contains("\"created_at\" timestamp with time zone"));
    }
}
