use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use whatsfordinner_db::table::Restaurant;
use whatsfordinner_shared::not_found;

impl super::Command {
    /// Flips the favourite flag and returns its new value.
    pub async fn toggle_favorite(&self, id: impl Into<String>) -> whatsfordinner_shared::Result<bool> {
        let id = id.into();
        let Some(is_favorite) = self.is_favorite(&id).await? else {
            not_found!("restaurant {id}");
        };

        let statement = Query::update()
            .table(Restaurant::Table)
            .values([
                (Restaurant::IsFavorite, (!is_favorite).into()),
                (
                    Restaurant::UpdatedAt,
                    whatsfordinner_shared::now_rfc3339()?.into(),
                ),
            ])
            .and_where(Expr::col(Restaurant::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(id = %id, is_favorite = !is_favorite, "Restaurant favourite toggled");

        Ok(!is_favorite)
    }
}
