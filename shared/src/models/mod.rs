//! Entity models shared between server and clients

pub mod floor_table;
pub mod ingredient;
pub mod loyalty;
pub mod menu_item;
pub mod promotion;
pub mod store;

pub use floor_table::{FloorPlanTable, FloorPlanTableCreate, FloorPlanTableUpdate, TableHint, TableShape};
pub use ingredient::{Ingredient, IngredientCreate};
pub use loyalty::CustomerLoyaltyProgress;
pub use menu_item::{MenuItem, MenuItemCreate, RecipeLine};
pub use promotion::{
    DiscountValue, LoyaltyProgram, MultiBuyOffer, Promotion, PromotionCreate, PromotionKind,
    PromotionUpdate, RewardTier, SpecialOffer,
};
pub use store::{Store, StoreCreate};
