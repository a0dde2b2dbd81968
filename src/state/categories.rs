//! Categories screen state: two flat lists (categories and subcategories)
//! with an expand/collapse marker and optimistic CRUD patches.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::types::{Category, SubCategory};

#[derive(Clone, Debug)]
pub struct CategoriesState {
    pub categories: Vec<Category>,
    pub subcategories: Vec<SubCategory>,
    /// Category whose subcategory list is unfolded, if any.
    pub expanded: Option<i64>,
    pub loading: bool,
    pub error: String,
    pub success: String,
}

impl Default for CategoriesState {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            subcategories: Vec::new(),
            expanded: None,
            loading: true,
            error: String::new(),
            success: String::new(),
        }
    }
}

impl CategoriesState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    pub fn loaded(&mut self, categories: Vec<Category>, subcategories: Vec<SubCategory>) {
        self.categories = categories;
        self.subcategories = subcategories;
        self.loading = false;
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
        self.error = "Impossible de charger les catégories. Veuillez réessayer.".to_owned();
    }

    pub fn toggle_expanded(&mut self, id: i64) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }

    pub fn subcategories_of(&self, category_id: i64) -> Vec<SubCategory> {
        self.subcategories
            .iter()
            .filter(|s| s.category == category_id)
            .cloned()
            .collect()
    }

    /// Replace the row the server returned, or append it if it is new.
    pub fn upsert_category(&mut self, category: Category) {
        match self.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
    }

    /// Dropping a category also drops its subcategories locally, mirroring
    /// the backend cascade.
    pub fn remove_category(&mut self, id: i64) {
        self.categories.retain(|c| c.id != id);
        self.subcategories.retain(|s| s.category != id);
        if self.expanded == Some(id) {
            self.expanded = None;
        }
    }

    pub fn upsert_subcategory(&mut self, subcategory: SubCategory) {
        match self.subcategories.iter_mut().find(|s| s.id == subcategory.id) {
            Some(existing) => *existing = subcategory,
            None => self.subcategories.push(subcategory),
        }
    }

    pub fn remove_subcategory(&mut self, id: i64) {
        self.subcategories.retain(|s| s.id != id);
    }

    /// Transient banners: a new outcome replaces the previous one.
    pub fn succeeded(&mut self, message: &str) {
        self.success = message.to_owned();
        self.error.clear();
    }

    pub fn action_failed(&mut self, message: &str) {
        self.error = message.to_owned();
        self.success.clear();
    }
}
