pub mod money;
pub mod price;
pub mod quantity;
pub mod symbol;
