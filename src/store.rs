//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Food;

/// Dashboard view state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct DashboardState {
    /// Held list: in-memory mirror of the backend's foods
    pub foods: Vec<Food>,
    /// Food open in the edit modal (None = empty placeholder)
    pub editing_food: Option<Food>,
    pub add_modal_open: bool,
    pub edit_modal_open: bool,
}

impl DashboardState {
    /// Replace the held list verbatim
    pub fn replace_foods(&mut self, foods: Vec<Food>) {
        self.foods = foods;
    }

    pub fn append_food(&mut self, food: Food) {
        self.foods.push(food);
    }

    pub fn replace_food(&mut self, updated: Food) {
        replace_by_id(&mut self.foods, updated);
    }

    pub fn remove_food(&mut self, id: u32) {
        remove_by_id(&mut self.foods, id);
    }

    pub fn toggle_add_modal(&mut self) {
        self.add_modal_open = !self.add_modal_open;
    }

    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }

    /// Set the editing target and force the edit modal open
    pub fn select_for_edit(&mut self, food: Food) {
        self.editing_food = Some(food);
        self.edit_modal_open = true;
    }
}

/// Replace the entry with the same id; no-op if it is gone
fn replace_by_id(foods: &mut [Food], updated: Food) {
    if let Some(food) = foods.iter_mut().find(|f| f.id == updated.id) {
        *food = updated;
    }
}

fn remove_by_id(foods: &mut Vec<Food>, id: u32) {
    foods.retain(|food| food.id != id);
}

/// Type alias for the store
pub type AppStore = Store<DashboardState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Dashboard state transitions, shared by the reactive store and tests
pub trait StateAccess {
    /// Current editing target, read without tracking
    fn editing_food(&self) -> Option<Food>;

    fn replace_foods(&self, foods: Vec<Food>);

    fn append_food(&self, food: Food);

    fn replace_food(&self, updated: Food);

    fn remove_food(&self, id: u32);

    fn toggle_add_modal(&self);

    fn toggle_edit_modal(&self);

    fn select_for_edit(&self, food: Food);
}

// Each transition writes only the fields it touches, so readers of other
// fields are not notified.
impl StateAccess for AppStore {
    fn editing_food(&self) -> Option<Food> {
        DashboardStateStoreFields::editing_food(*self).get_untracked()
    }

    fn replace_foods(&self, foods: Vec<Food>) {
        self.foods().set(foods);
    }

    fn append_food(&self, food: Food) {
        self.foods().write().push(food);
    }

    fn replace_food(&self, updated: Food) {
        replace_by_id(&mut self.foods().write(), updated);
    }

    fn remove_food(&self, id: u32) {
        remove_by_id(&mut self.foods().write(), id);
    }

    fn toggle_add_modal(&self) {
        self.add_modal_open().update(|open| *open = !*open);
    }

    fn toggle_edit_modal(&self) {
        self.edit_modal_open().update(|open| *open = !*open);
    }

    fn select_for_edit(&self, food: Food) {
        DashboardStateStoreFields::editing_food(*self).set(Some(food));
        self.edit_modal_open().set(true);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::models::make_food;

    fn state_with(ids: &[u32]) -> DashboardState {
        DashboardState {
            foods: ids.iter().map(|id| make_food(*id, &format!("Food {}", id))).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_replace_food_keeps_position() {
        let mut state = state_with(&[1, 2, 3]);
        let mut updated = make_food(2, "Renamed");
        updated.price = "9.90".to_string();

        state.replace_food(updated.clone());

        let ids: Vec<u32> = state.foods.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(state.foods[1], updated);
    }

    #[test]
    fn test_replace_missing_food_is_noop() {
        let mut state = state_with(&[1]);
        state.replace_food(make_food(9, "Ghost"));
        assert_eq!(state, state_with(&[1]));
    }

    #[test]
    fn test_remove_food() {
        let mut state = state_with(&[1, 2, 3]);
        state.remove_food(2);
        let ids: Vec<u32> = state.foods.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_modal_flags_are_independent() {
        let mut state = DashboardState::default();
        state.toggle_add_modal();
        state.toggle_edit_modal();
        assert!(state.add_modal_open && state.edit_modal_open);

        state.toggle_add_modal();
        assert!(!state.add_modal_open);
        assert!(state.edit_modal_open);
    }

    #[test]
    fn test_select_for_edit_forces_modal_open() {
        let mut state = DashboardState {
            edit_modal_open: true,
            ..Default::default()
        };
        let food = make_food(4, "Pizza");

        state.select_for_edit(food.clone());

        assert_eq!(state.editing_food, Some(food));
        assert!(state.edit_modal_open);
    }

    #[test]
    fn test_field_writes_leave_editing_target_readers_alone() {
        let owner = Owner::new();
        owner.set();

        let store: AppStore = Store::new(DashboardState::default());
        let runs = Arc::new(AtomicUsize::new(0));
        let editing = Memo::new({
            let runs = Arc::clone(&runs);
            move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                DashboardStateStoreFields::editing_food(store).get()
            }
        });

        assert_eq!(editing.get(), None);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        StateAccess::toggle_add_modal(&store);
        StateAccess::append_food(&store, make_food(1, "Ao molho"));
        StateAccess::replace_food(&store, make_food(1, "Renamed"));
        assert_eq!(editing.get(), None);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        let food = make_food(2, "Veggie");
        StateAccess::select_for_edit(&store, food.clone());
        assert_eq!(editing.get(), Some(food));
        assert_eq!(runs.load(Ordering::SeqCst), 2);
        assert!(store.edit_modal_open().get_untracked());
        assert!(store.add_modal_open().get_untracked());
    }
}
