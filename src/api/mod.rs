//! REST API Bindings
//!
//! Frontend bindings to the `/foods` backend resource.

mod client;
mod error;

use async_trait::async_trait;

use crate::models::{CreateFood, Food};

pub use client::FoodClient;
pub use error::{ApiError, ApiResult};

/// CRUD operations on the `/foods` resource
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait FoodApi {
    /// `GET /foods`
    async fn list_foods(&self) -> ApiResult<Vec<Food>>;

    /// `POST /foods`
    async fn create_food(&self, body: &CreateFood) -> ApiResult<Food>;

    /// `PUT /foods/{id}` with the full replacement record
    async fn update_food(&self, id: u32, body: &Food) -> ApiResult<Food>;

    /// `DELETE /foods/{id}`
    async fn delete_food(&self, id: u32) -> ApiResult<()>;
}
