use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    Name,
    Description,
    Ingredients,
    Instructions,
    CookTime,
    PrepTime,
    Servings,
    Tags,
    IsFavorite,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Restaurant {
    Table,
    Id,
    Name,
    Cuisine,
    PriceRange,
    Rating,
    Address,
    PhoneNumber,
    Website,
    Notes,
    Tags,
    IsDeliveryAvailable,
    IsTakeoutAvailable,
    IsDineInAvailable,
    IsFavorite,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Ingredient {
    Table,
    Id,
    Name,
    Quantity,
    Unit,
    Category,
    InPantry,
    CreatedAt,
    UpdatedAt,
}
