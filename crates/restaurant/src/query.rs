use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use whatsfordinner_db::table::Restaurant;
use whatsfordinner_shared::decode_json_list;

#[derive(Debug, Default, FromRow)]
pub struct RestaurantRow {
    pub id: String,
    pub name: String,
    pub cuisine: Option<String>,
    pub price_range: Option<u8>,
    pub rating: Option<f32>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub notes: Option<String>,
    pub tags: String,
    pub is_delivery_available: bool,
    pub is_takeout_available: bool,
    pub is_dine_in_available: bool,
    pub is_favorite: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<RestaurantRow> for whatsfordinner_shared::restaurant::Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Self {
            tags: decode_json_list("restaurant.tags", &row.tags),
            id: row.id,
            name: row.name,
            cuisine: row.cuisine,
            price_range: row.price_range,
            rating: row.rating,
            address: row.address,
            phone_number: row.phone_number,
            website: row.website,
            notes: row.notes,
            is_delivery_available: row.is_delivery_available,
            is_takeout_available: row.is_takeout_available,
            is_dine_in_available: row.is_dine_in_available,
            is_favorite: row.is_favorite,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            Restaurant::Id,
            Restaurant::Name,
            Restaurant::Cuisine,
            Restaurant::PriceRange,
            Restaurant::Rating,
            Restaurant::Address,
            Restaurant::PhoneNumber,
            Restaurant::Website,
            Restaurant::Notes,
            Restaurant::Tags,
            Restaurant::IsDeliveryAvailable,
            Restaurant::IsTakeoutAvailable,
            Restaurant::IsDineInAvailable,
            Restaurant::IsFavorite,
            Restaurant::CreatedAt,
            Restaurant::UpdatedAt,
        ])
        .from(Restaurant::Table)
        .to_owned()
}

impl Query {
    pub async fn all(&self) -> anyhow::Result<Vec<whatsfordinner_shared::restaurant::Restaurant>> {
        let statement = select()
            .order_by(Restaurant::CreatedAt, Order::Asc)
            .order_by(Restaurant::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RestaurantRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
    ) -> anyhow::Result<Option<whatsfordinner_shared::restaurant::Restaurant>> {
        let statement = select()
            .and_where(Expr::col(Restaurant::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, RestaurantRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(Into::into))
    }
}
