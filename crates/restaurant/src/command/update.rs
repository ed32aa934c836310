use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;
use whatsfordinner_db::table::Restaurant;
use whatsfordinner_shared::{encode_json_list, not_found};

#[derive(Validate, Default, Debug, Clone)]
pub struct UpdateInput {
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
            .table(Restaurant::Table)
            .values([
                (Restaurant::Name, input.name.into()),
                (Restaurant::Cuisine, input.cuisine.into()),
                (Restaurant::PriceRange, input.price_range.into()),
                (Restaurant::Rating, input.rating.into()),
                (Restaurant::Address, input.address.into()),
                (Restaurant::PhoneNumber, input.phone_number.into()),
                (Restaurant::Website, input.website.into()),
                (Restaurant::Notes, input.notes.into()),
                (Restaurant::Tags, encode_json_list(&input.tags)?.into()),
                (
                    Restaurant::IsDeliveryAvailable,
                    input.is_delivery_available.into(),
                ),
                (
                    Restaurant::IsTakeoutAvailable,
                    input.is_takeout_available.into(),
                ),
                (
                    Restaurant::IsDineInAvailable,
                    input.is_dine_in_available.into(),
                ),
                (
                    Restaurant::UpdatedAt,
                    whatsfordinner_shared::now_rfc3339()?.into(),
                ),
            ])
            .and_where(Expr::col(Restaurant::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            not_found!("restaurant {id}");
        }

        tracing::info!(id = %id, "Restaurant updated");

        Ok(())
    }
}
