use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;
use whatsfordinner_db::table::Recipe;
use whatsfordinner_shared::{encode_json_list, recipe::RecipeIngredient};

#[derive(Validate, Default, Debug, Clone)]
pub struct CreateInput {
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
    pub is_favorite: bool,
}

impl super::Command {
    pub async fn create(&self, mut input: CreateInput) -> whatsfordinner_shared::Result<String> {
        input.name = input.name.trim().to_owned();
        input.validate()?;

        let id = whatsfordinner_shared::new_id();
        let now = whatsfordinner_shared::now_rfc3339()?;

        let statement = Query::insert()
            .into_table(Recipe::Table)
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
            .values_panic([
                id.to_owned().into(),
                input.name.to_owned().into(),
                input.description.into(),
                encode_json_list(&input.ingredients)?.into(),
                encode_json_list(&input.instructions)?.into(),
                input.cook_time_minutes.into(),
                input.prep_time_minutes.into(),
                input.servings.into(),
                encode_json_list(&input.tags)?.into(),
                input.is_favorite.into(),
                now.to_owned().into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(id = %id, name = %input.name, "Recipe created");

        Ok(id)
    }
}
