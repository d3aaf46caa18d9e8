pub mod category;
pub mod item;

pub use category::{Category, NewCategory};
pub use item::{Item, NewItem};
