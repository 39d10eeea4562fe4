//! Seams between the controller and whatever renders the forms.
//!
//! Implementations hold explicit references to their widgets, built once at
//! startup; the controller never looks anything up by name.

use crate::domain::EventSummary;

/// Raw field values of the event form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFields {
    pub title: String,
    pub description: String,
    pub datetime: String,
    pub location: String,
    pub category: String,
    pub other_category: String,
}

pub trait Loading {
    fn set_loading(&self, loading: bool);
}

pub trait SubscribeView: Loading {
    fn email(&self) -> String;
    /// Hide both the success and the error indicator.
    fn clear_feedback(&self);
    fn show_success(&self, message: &str);
    fn show_error(&self, message: &str);
    fn reset(&self);
}

pub trait EventView: Loading {
    fn fields(&self) -> EventFields;
    fn clear_title_error(&self);
    fn show_title_error(&self, message: &str);
    fn show_confirmation(&self, summary: &EventSummary);
    fn hide_confirmation(&self);
    fn set_other_category_visible(&self, visible: bool);
    /// Blocking notice the user has to dismiss.
    fn alert(&self, message: &str);
    fn reset(&self);
}

/// Holds a view in its loading state until dropped, whatever path the
/// handler leaves by.
pub struct LoadingGuard<'a, V: Loading + ?Sized> {
    view: &'a V,
}

impl<'a, V: Loading + ?Sized> LoadingGuard<'a, V> {
    pub fn engage(view: &'a V) -> Self {
        view.set_loading(true);
        Self { view }
    }
}

impl<V: Loading + ?Sized> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_loading(false);
    }
}
