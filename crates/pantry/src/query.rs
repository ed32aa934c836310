use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use whatsfordinner_db::table::Ingredient;

#[derive(Debug, Default, FromRow)]
pub struct IngredientRow {
    pub id: String,
    pub name: String,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub in_pantry: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<IngredientRow> for whatsfordinner_shared::pantry::Ingredient {
    fn from(row: IngredientRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            unit: row.unit,
            category: row.category,
            in_pantry: row.in_pantry,
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
            Ingredient::Id,
            Ingredient::Name,
            Ingredient::Quantity,
            Ingredient::Unit,
            Ingredient::Category,
            Ingredient::InPantry,
            Ingredient::CreatedAt,
            Ingredient::UpdatedAt,
        ])
        .from(Ingredient::Table)
        .order_by(Ingredient::CreatedAt, Order::Asc)
        .order_by(Ingredient::Id, Order::Asc)
        .to_owned()
}

impl Query {
    pub async fn all(&self) -> anyhow::Result<Vec<whatsfordinner_shared::pantry::Ingredient>> {
        let (sql, values) = select().build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
    ) -> anyhow::Result<Option<whatsfordinner_shared::pantry::Ingredient>> {
        let statement = select()
            .and_where(Expr::col(Ingredient::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Names of the ingredients currently marked as in the pantry, the only
    /// pantry view the decision engine needs.
    pub async fn names_in_pantry(&self) -> anyhow::Result<Vec<String>> {
        let statement = sea_query::Query::select()
            .column(Ingredient::Name)
            .from(Ingredient::Table)
            .and_where(Expr::col(Ingredient::InPantry).eq(true))
            .order_by(Ingredient::CreatedAt, Order::Asc)
            .order_by(Ingredient::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}
