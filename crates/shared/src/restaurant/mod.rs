use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: Option<String>,
    /// 1 to 4, `$` to `$$$$`
    pub price_range: Option<u8>,
    /// 0 to 5
    pub rating: Option<f32>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    /// Free text, e.g. "great for date night"
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub is_delivery_available: bool,
    pub is_takeout_available: bool,
    pub is_dine_in_available: bool,
    pub is_favorite: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    #[strum(serialize = "Dine-in")]
    DineIn,
    Takeout,
    Delivery,
}

impl Restaurant {
    pub fn services(&self) -> Vec<ServiceKind> {
        ServiceKind::VARIANTS
            .iter()
            .copied()
            .filter(|kind| match kind {
                ServiceKind::DineIn => self.is_dine_in_available,
                ServiceKind::Takeout => self.is_takeout_available,
                ServiceKind::Delivery => self.is_delivery_available,
            })
            .collect()
    }

    pub fn price_label(&self) -> Option<String> {
        self.price_range.map(|p| "$".repeat(p.clamp(1, 4) as usize))
    }
}
