use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;
use whatsfordinner_db::table::Recipe;
use whatsfordinner_shared::{encode_json_list, not_found, recipe::RecipeIngredient};

/// Replaces every editable field of a saved recipe.
#[derive(Validate, Default, Debug, Clone)]
pub struct UpdateInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    #[validate(range(max = 1440))]
    pub cook_time_minutes: Option<u32>,
    #[validate(range(max = 1440))]
    pub prep_time_minutes: Option<u32>,
    #[validate(range(min = 1, max = 100))]
    pub servings: Option<u32>,
    pub tags: Vec<String>,
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
            .table(Recipe::Table)
            .values([
                (Recipe::Name, input.name.into()),
                (Recipe::Description, input.description.into()),
                (
                    Recipe::Ingredients,
                    encode_json_list(&input.ingredients)?.into(),
                ),
                (
                    Recipe::Instructions,
                    encode_json_list(&input.instructions)?.into(),
                ),
                (Recipe::CookTime, input.cook_time_minutes.into()),
                (Recipe::PrepTime, input.prep_time_minutes.into()),
                (Recipe::Servings, input.servings.into()),
                (Recipe::Tags, encode_json_list(&input.tags)?.into()),
                (
                    Recipe::UpdatedAt,
                    whatsfordinner_shared::now_rfc3339()?.into(),
                ),
            ])
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            not_found!("recipe {id}");
        }

        tracing::info!(id = %id, "Recipe updated");

        Ok(())
    }
}
