use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;
use whatsfordinner_db::table::Ingredient;

#[derive(Validate, Default, Debug, Clone)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 30))]
    pub quantity: Option<String>,
    #[validate(length(max = 30))]
    pub unit: Option<String>,
    #[validate(length(max = 50))]
    pub category: Option<String>,
    pub in_pantry: bool,
}

impl super::Command {
    pub async fn create(&self, mut input: CreateInput) -> whatsfordinner_shared::Result<String> {
        input.name = input.name.trim().to_owned();
        input.validate()?;

        let id = whatsfordinner_shared::new_id();
        let now = whatsfordinner_shared::now_rfc3339()?;

        let statement = Query::insert()
            .into_table(Ingredient::Table)
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
            .values_panic([
                id.to_owned().into(),
                input.name.to_owned().into(),
                input.quantity.into(),
                input.unit.into(),
                input.category.into(),
                input.in_pantry.into(),
                now.to_owned().into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(id = %id, name = %input.name, "Ingredient created");

        Ok(id)
    }
}
