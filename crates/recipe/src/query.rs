use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use whatsfordinner_db::table::Recipe;
use whatsfordinner_shared::decode_json_list;

#[derive(Debug, Default, FromRow)]
pub struct RecipeRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub ingredients: String,
    pub instructions: String,
    pub cook_time: Option<u32>,
    pub prep_time: Option<u32>,
    pub servings: Option<u32>,
    pub tags: String,
    pub is_favorite: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<RecipeRow> for whatsfordinner_shared::recipe::Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            ingredients: decode_json_list("recipe.ingredients", &row.ingredients),
            instructions: decode_json_list("recipe.instructions", &row.instructions),
            tags: decode_json_list("recipe.tags", &row.tags),
            id: row.id,
            name: row.name,
            description: row.description,
            cook_time_minutes: row.cook_time,
            prep_time_minutes: row.prep_time,
            servings: row.servings,
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
            Recipe::Id,
            Recipe::Name,
            Recipe::Description,
            Recipe::Ingredients,
            Recipe::Instructions,
            Recipe::CookTime,
            Recipe::PrepTime,
            Recipe::Servings,
            Recipe::Tags,
            Recipe::IsFavorite,
            Recipe::CreatedAt,
            Recipe::UpdatedAt,
        ])
        .from(Recipe::Table)
        .to_owned()
}

impl Query {
    /// Every saved recipe, oldest first.
    pub async fn all(&self) -> anyhow::Result<Vec<whatsfordinner_shared::recipe::Recipe>> {
        let statement = select()
            .order_by(Recipe::CreatedAt, Order::Asc)
            .order_by(Recipe::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
    ) -> anyhow::Result<Option<whatsfordinner_shared::recipe::Recipe>> {
        let statement = select()
            .and_where(Expr::col(Recipe::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(Into::into))
    }
}
