use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use whatsfordinner_db::table::Ingredient;
use whatsfordinner_shared::not_found;

impl super::Command {
    /// Marks an ingredient as in or out of the pantry and returns the new state.
    pub async fn toggle_pantry(&self, id: impl Into<String>) -> whatsfordinner_shared::Result<bool> {
        let id = id.into();
        let Some(in_pantry) = self.in_pantry(&id).await? else {
            not_found!("ingredient {id}");
        };

        let statement = Query::update()
            .table(Ingredient::Table)
            .values([
                (Ingredient::InPantry, (!in_pantry).into()),
                (
                    Ingredient::UpdatedAt,
                    whatsfordinner_shared::now_rfc3339()?.into(),
                ),
            ])
            .and_where(Expr::col(Ingredient::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(id = %id, in_pantry = !in_pantry, "Ingredient pantry state toggled");

        Ok(!in_pantry)
    }
}
