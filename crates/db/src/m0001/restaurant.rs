use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Restaurant;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Restaurant::Table)
        .col(
            ColumnDef::new(Restaurant::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Restaurant::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(ColumnDef::new(Restaurant::Cuisine).string().string_len(50))
        .col(ColumnDef::new(Restaurant::PriceRange).small_integer().null())
        .col(ColumnDef::new(Restaurant::Rating).float().null())
        .col(ColumnDef::new(Restaurant::Address).string().string_len(300))
        .col(ColumnDef::new(Restaurant::PhoneNumber).string().string_len(30))
        .col(ColumnDef::new(Restaurant::Website).string().string_len(300))
        .col(ColumnDef::new(Restaurant::Notes).string().string_len(2000))
        .col(
            ColumnDef::new(Restaurant::Tags)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(
            ColumnDef::new(Restaurant::IsDeliveryAvailable)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Restaurant::IsTakeoutAvailable)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Restaurant::IsDineInAvailable)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Restaurant::IsFavorite)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(Restaurant::CreatedAt).string().not_null())
        .col(ColumnDef::new(Restaurant::UpdatedAt).string().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Restaurant::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_restaurant_name")
        .table(Restaurant::Table)
        .col(Restaurant::Name)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_restaurant_name")
        .table(Restaurant::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
