pub mod ingredient;
pub mod inventory;
pub mod room;

pub use ingredient::Ingredient;
pub use inventory::Inventory;
pub use room::RoomStyle;
