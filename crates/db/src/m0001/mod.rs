mod ingredient;
mod recipe;
mod restaurant;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "whatsfordinner",
    "m0001",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        recipe::CreateIdx1,
        restaurant::CreateTable,
        restaurant::CreateIdx1,
        ingredient::CreateTable,
        ingredient::CreateIdx1
    ]
);
