//! Food Catalog Actions
//!
//! CRUD calls against the backend, reconciled into dashboard state.
//!
//! Every mutation is applied to the held list as it looks when the response
//! arrives, so overlapping requests resolve last-write-wins. Failures are only
//! logged: the held list is left as it was and nothing is shown to the user.

use crate::api::FoodApi;
use crate::models::{CreateFood, Food, FoodEdits, NewFood};
use crate::store::StateAccess;

/// Dashboard actions bound to an API and a state handle
#[derive(Debug, Clone)]
pub struct FoodCatalog<A, S> {
    api: A,
    state: S,
}

impl<A: FoodApi, S: StateAccess> FoodCatalog<A, S> {
    pub fn new(api: A, state: S) -> Self {
        Self { api, state }
    }

    /// Fetch all foods and replace the held list
    pub async fn load_foods(&self) {
        match self.api.list_foods().await {
            Ok(foods) => {
                log::info!("[CATALOG] Loaded {} foods", foods.len());
                self.state.replace_foods(foods);
            }
            Err(e) => log::error!("[CATALOG] Failed to load foods: {}", e),
        }
    }

    /// Create a food (always available) and append the server's record
    pub async fn add_food(&self, food: NewFood) {
        let body = CreateFood::from(food);
        match self.api.create_food(&body).await {
            Ok(created) => {
                log::info!("[CATALOG] Created food #{}", created.id);
                self.state.append_food(created);
            }
            Err(e) => log::error!("[CATALOG] Failed to create food: {}", e),
        }
    }

    /// Send the editing target merged with `edits` and patch the held list
    pub async fn update_food(&self, edits: FoodEdits) {
        let Some(target) = self.state.editing_food() else {
            log::warn!("[CATALOG] Update submitted with no food selected");
            return;
        };
        self.replace_remote(target.merged_with(&edits)).await;
    }

    /// Flip a food's availability on the backend
    pub async fn toggle_available(&self, food: Food) {
        let edits = FoodEdits {
            available: Some(!food.available),
            ..Default::default()
        };
        self.replace_remote(food.merged_with(&edits)).await;
    }

    /// Remove locally first, then ask the backend to delete
    pub async fn delete_food(&self, id: u32) {
        self.state.remove_food(id);
        match self.api.delete_food(id).await {
            Ok(()) => log::info!("[CATALOG] Deleted food #{}", id),
            Err(e) => log::error!("[CATALOG] Failed to delete food #{}: {}", id, e),
        }
    }

    pub fn toggle_add_modal(&self) {
        self.state.toggle_add_modal();
    }

    pub fn toggle_edit_modal(&self) {
        self.state.toggle_edit_modal();
    }

    /// Select a food for editing and open the edit modal
    pub fn edit_food(&self, food: Food) {
        self.state.select_for_edit(food);
    }

    async fn replace_remote(&self, food: Food) {
        let id = food.id;
        match self.api.update_food(id, &food).await {
            Ok(updated) => {
                log::info!("[CATALOG] Updated food #{}", updated.id);
                self.state.replace_food(updated);
            }
            Err(e) => log::error!("[CATALOG] Failed to update food #{}: {}", id, e),
        }
    }
}
