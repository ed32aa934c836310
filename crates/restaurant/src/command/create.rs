use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;
use whatsfordinner_db::table::Restaurant;
use whatsfordinner_shared::encode_json_list;

#[derive(Validate, Default, Debug, Clone)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 50))]
    pub cuisine: Option<String>,
    #[validate(range(min = 1, max = 4))]
    pub price_range: Option<u8>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f32>,
    #[validate(length(max = 300))]
    pub address: Option<String>,
    #[validate(length(max = 30))]
    pub phone_number: Option<String>,
    #[validate(length(max = 300))]
    pub website: Option<String>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub is_delivery_available: bool,
    pub is_takeout_available: bool,
    pub is_dine_in_available: bool,
    pub is_favorite: bool,
}

impl super::Command {
    pub async fn create(&self, mut input: CreateInput) -> whatsfordinner_shared::Result<String> {
        input.name = input.name.trim().to_owned();
        input.validate()?;

        let id = whatsfordinner_shared::new_id();
        let now = whatsfordinner_shared::now_rfc3339()?;

        let statement = Query::insert()
            .into_table(Restaurant::Table)
            .columns([
                Restaurant::Id,
                Restaurant::Name,
                Restaurant::Cuisine,
                Restaurant::PriceRange,
                Restaurant::Rating,
                Restaurant::Address,
                Restaurant::PhoneNumber,
                Restaurant::Website,
                Restaurant::Notes,
                Restaurant::Tags,
                Restaurant::IsDeliveryAvailable,
                Restaurant::IsTakeoutAvailable,
                Restaurant::IsDineInAvailable,
                Restaurant::IsFavorite,
                Restaurant::CreatedAt,
                Restaurant::UpdatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                input.name.to_owned().into(),
                input.cuisine.into(),
                input.price_range.into(),
                input.rating.into(),
                input.address.into(),
                input.phone_number.into(),
                input.website.into(),
                input.notes.into(),
                encode_json_list(&input.tags)?.into(),
                input.is_delivery_available.into(),
                input.is_takeout_available.into(),
                input.is_dine_in_available.into(),
                input.is_favorite.into(),
                now.to_owned().into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(id = %id, name = %input.name, "Restaurant created");

        Ok(id)
    }
}
