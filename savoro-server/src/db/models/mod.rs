pub mod dish;
pub mod menu;
pub mod serde_helpers;
pub mod status_check;

pub use dish::{Dish, DishCreate, DishUpdate};
pub use menu::{Menu, MenuCreate};
pub use status_check::{StatusCheck, StatusCheckCreate};
