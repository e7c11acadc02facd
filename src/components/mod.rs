//! UI Components
//!
//! Leptos components for the food dashboard.

mod dashboard;
mod food_card;
mod header;
mod modal;
mod modal_add_food;
mod modal_edit_food;

pub use dashboard::Dashboard;
pub use food_card::FoodCard;
pub use header::Header;
pub use modal::Modal;
pub use modal_add_food::ModalAddFood;
pub use modal_edit_food::ModalEditFood;
