use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use whatsfordinner_db::table::Ingredient;

mod create;
mod delete;
mod toggle_pantry;
mod update;

pub use create::CreateInput;
pub use update::UpdateInput;

#[derive(Clone)]
pub struct Command(pub sqlx::SqlitePool);

impl Command {
    async fn in_pantry(&self, id: &str) -> whatsfordinner_shared::Result<Option<bool>> {
        let statement = sea_query::Query::select()
            .column(Ingredient::InPantry)
            .from(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_scalar_with::<_, bool, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }
}
