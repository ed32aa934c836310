use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;
use whatsfordinner_db::table::Ingredient;
use whatsfordinner_shared::not_found;

#[derive(Validate, Default, Debug, Clone)]
pub struct UpdateInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 30))]
    pub quantity: Option<String>,
    #[validate(length(max = 30))]
    pub unit: Option<String>,
    #[validate(length(max = 50))]
    pub category: Option<String>,
}

impl super::Command {
    pub async fn update(
        &self,
        id: impl Into<String>,
        mut input: UpdateInput,
    ) -> whatsfordinner_shared::Result<()> {
        let id = id.into();
        input.name = input.name.trim().to_owned();
        input.validate()?;

        let statement = Query::update()
            .table(Ingredient::Table)
            .values([
                (Ingredient::Name, input.name.into()),
                (Ingredient::Quantity, input.quantity.into()),
                (Ingredient::Unit, input.unit.into()),
                (Ingredient::Category, input.category.into()),
                (
                    Ingredient::UpdatedAt,
                    whatsfordinner_shared::now_rfc3339()?.into(),
                ),
            ])
            .and_where(Expr::col(Ingredient::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            not_found!("ingredient {id}");
        }

        tracing::info!(id = %id, "Ingredient updated");

        Ok(())
    }
}
