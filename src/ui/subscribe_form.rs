use gtk4::prelude::*;
use gtk4 as gtk;
use std::rc::Rc;

use eventboard::view::{Loading, SubscribeView};
use eventboard::FormController;

pub struct SubscribeForm {
    root: gtk::Box,
    email: gtk::Entry,
    button: gtk::Button,
    spinner: gtk::Spinner,
    success: gtk::Label,
    error: gtk::Label,
}

impl SubscribeForm {
    pub fn new() -> Rc<Self> {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 8);

        let title = gtk::Label::new(Some("Get notified about new events"));
        title.add_css_class("title-3");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let email = gtk::Entry::new();
        email.set_placeholder_text(Some("you@example.com"));
        email.set_input_purpose(gtk::InputPurpose::Email);
        email.set_hexpand(true);

        let error = gtk::Label::new(None);
        error.add_css_class("error");
        error.set_halign(gtk::Align::Start);
        error.set_wrap(true);
        error.set_visible(false);

        let spinner = gtk::Spinner::new();
        let button = gtk::Button::with_label("Subscribe");
        button.add_css_class("suggested-action");

        let row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        row.append(&email);
        row.append(&spinner);
        row.append(&button);
        root.append(&row);
        root.append(&error);

        let success = gtk::Label::new(None);
        success.add_css_class("success");
        success.set_halign(gtk::Align::Start);
        success.set_wrap(true);
        success.set_visible(false);
        root.append(&success);

        Rc::new(Self { root, email, button, spinner, success, error })
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn bind(self: &Rc<Self>, controller: Rc<FormController>) {
        let on_submit: Rc<dyn Fn()> = {
            let form = self.clone();
            Rc::new(move || {
                let form = form.clone();
                let controller = controller.clone();
                glib::spawn_future_local(async move {
                    controller.handle_subscribe(&*form).await;
                });
            })
        };
        {
            let on_submit = on_submit.clone();
            self.button.connect_clicked(move |_| (on_submit)());
        }
        {
            let on_submit = on_submit.clone();
            self.email.connect_activate(move |_| (on_submit)());
        }
    }
}

impl Loading for SubscribeForm {
    fn set_loading(&self, loading: bool) {
        if loading {
            self.button.add_css_class("loading");
        } else {
            self.button.remove_css_class("loading");
        }
        self.spinner.set_spinning(loading);
    }
}

impl SubscribeView for SubscribeForm {
    fn email(&self) -> String {
        self.email.text().to_string()
    }

    fn clear_feedback(&self) {
        self.error.set_visible(false);
        self.success.set_visible(false);
    }

    fn show_success(&self, message: &str) {
        self.success.set_label(message);
        self.success.set_visible(true);
    }

    fn show_error(&self, message: &str) {
        self.error.set_label(message);
        self.error.set_visible(true);
    }

    fn reset(&self) {
        self.email.set_text("");
    }
}
