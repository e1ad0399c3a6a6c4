//! Recipe book. Entirely local: the backend has no recipe endpoints.

use larder_core::{Recipe, fallback};

use crate::filters::RecipeFilter;
use crate::forms::{FormError, RecipeForm};
use crate::state::Notice;

pub struct RecipeLibrary {
    recipes: Vec<Recipe>,
    pub filter: RecipeFilter,
    form: RecipeForm,
    form_open: bool,
    notice: Option<Notice>,
}

impl Default for RecipeLibrary {
    fn default() -> Self {
        Self::new(fallback::recipes())
    }
}

impl RecipeLibrary {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            filter: RecipeFilter::default(),
            form: RecipeForm::default(),
            form_open: false,
            notice: None,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn visible(&self) -> Vec<&Recipe> {
        self.filter.apply(&self.recipes)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn form(&self) -> &RecipeForm {
        &self.form
    }

    pub fn open_form(&mut self) -> &mut RecipeForm {
        self.form_open = true;
        &mut self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Validate and add the recipe to the local book.
    pub fn submit(&mut self) -> Result<(), FormError> {
        let id = format!("local-{}", self.recipes.len() + 1);
        let recipe = match self.form.validate(id) {
            Ok(recipe) => recipe,
            Err(err) => {
                self.notice = Some(Notice::invalid(&err));
                return Err(err.into());
            }
        };

        self.notice = Some(Notice::success(
            "Recipe added",
            format!("{} has been added to your recipes", recipe.name),
        ));
        self.recipes.push(recipe);
        self.form_open = false;
        self.form = RecipeForm::default();
        Ok(())
    }
}
