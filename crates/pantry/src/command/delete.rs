use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use whatsfordinner_db::table::Ingredient;
use whatsfordinner_shared::not_found;

impl super::Command {
    pub async fn delete(&self, id: impl Into<String>) -> whatsfordinner_shared::Result<()> {
        let id = id.into();
        let statement = Query::delete()
            .from_table(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            not_found!("ingredient {id}");
        }

        tracing::info!(id = %id, "Ingredient deleted");

        Ok(())
    }
}
