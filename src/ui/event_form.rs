use adw::prelude::*;
use gtk4 as gtk;
use std::rc::Rc;

use eventboard::domain::{EventSummary, OTHER_CATEGORY};
use eventboard::view::{EventFields, EventView, Loading};
use eventboard::FormController;

/// (value sent to the API, label shown in the drop-down)
const CATEGORIES: [(&str, &str); 5] = [
    ("conference", "Conference"),
    ("workshop", "Workshop"),
    ("meetup", "Meetup"),
    ("social", "Social"),
    (OTHER_CATEGORY, "Other…"),
];

fn category_value(position: u32) -> &'static str {
    CATEGORIES
        .get(position as usize)
        .map(|(value, _)| *value)
        .unwrap_or_default()
}

fn labelled(label: &str, child: &impl IsA<gtk::Widget>) -> gtk::Box {
    let group = gtk::Box::new(gtk::Orientation::Vertical, 4);
    let lbl = gtk::Label::new(Some(label));
    lbl.add_css_class("dim-label");
    lbl.set_halign(gtk::Align::Start);
    group.append(&lbl);
    group.append(child);
    group
}

pub struct EventForm {
    root: gtk::Box,
    title: gtk::Entry,
    title_error: gtk::Label,
    description: gtk::TextView,
    datetime: gtk::Entry,
    location: gtk::Entry,
    category: gtk::DropDown,
    other_group: gtk::Box,
    other_category: gtk::Entry,
    button: gtk::Button,
    spinner: gtk::Spinner,
    confirmation: gtk::Box,
    summary: gtk::Label,
    close_confirmation: gtk::Button,
}

impl EventForm {
    pub fn new() -> Rc<Self> {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 10);

        let heading = gtk::Label::new(Some("Create an event"));
        heading.add_css_class("title-3");
        heading.set_halign(gtk::Align::Start);
        root.append(&heading);

        let title = gtk::Entry::new();
        title.set_placeholder_text(Some("Event title"));
        let title_group = labelled("Title", &title);
        let title_error = gtk::Label::new(None);
        title_error.add_css_class("error");
        title_error.set_halign(gtk::Align::Start);
        title_error.set_wrap(true);
        title_error.set_visible(false);
        title_group.append(&title_error);
        root.append(&title_group);

        let description = gtk::TextView::new();
        description.set_wrap_mode(gtk::WrapMode::WordChar);
        description.set_height_request(80);
        let frame = gtk::Frame::new(None);
        frame.set_child(Some(&description));
        root.append(&labelled("Description", &frame));

        let datetime = gtk::Entry::new();
        datetime.set_placeholder_text(Some("YYYY-MM-DD HH:MM"));
        root.append(&labelled("Date and time", &datetime));

        let location = gtk::Entry::new();
        location.set_placeholder_text(Some("Where is it happening?"));
        root.append(&labelled("Location", &location));

        let labels: Vec<&str> = CATEGORIES.iter().map(|(_, label)| *label).collect();
        let category = gtk::DropDown::from_strings(&labels);
        root.append(&labelled("Category", &category));

        let other_category = gtk::Entry::new();
        other_category.set_placeholder_text(Some("Describe the category"));
        let other_group = labelled("Other category", &other_category);
        other_group.set_visible(false);
        root.append(&other_group);

        let spinner = gtk::Spinner::new();
        let button = gtk::Button::with_label("Create Event");
        button.add_css_class("suggested-action");
        let actions = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        actions.set_halign(gtk::Align::End);
        actions.append(&spinner);
        actions.append(&button);
        root.append(&actions);

        let confirmation = gtk::Box::new(gtk::Orientation::Vertical, 6);
        confirmation.add_css_class("card");
        confirmation.set_visible(false);
        let confirmed = gtk::Label::new(Some("Event created"));
        confirmed.add_css_class("heading");
        confirmed.set_halign(gtk::Align::Start);
        let summary = gtk::Label::new(None);
        summary.set_halign(gtk::Align::Start);
        summary.set_wrap(true);
        let close_confirmation = gtk::Button::with_label("Close");
        close_confirmation.set_halign(gtk::Align::End);
        for widget in [confirmed.upcast_ref::<gtk::Widget>(), summary.upcast_ref(), close_confirmation.upcast_ref()] {
            widget.set_margin_start(12);
            widget.set_margin_end(12);
            confirmation.append(widget);
        }
        confirmed.set_margin_top(12);
        close_confirmation.set_margin_bottom(12);
        root.append(&confirmation);

        Rc::new(Self {
            root,
            title,
            title_error,
            description,
            datetime,
            location,
            category,
            other_group,
            other_category,
            button,
            spinner,
            confirmation,
            summary,
            close_confirmation,
        })
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn bind(self: &Rc<Self>, controller: Rc<FormController>) {
        {
            let form = self.clone();
            let controller = controller.clone();
            self.button.connect_clicked(move |_| {
                let form = form.clone();
                let controller = controller.clone();
                glib::spawn_future_local(async move {
                    controller.handle_create_event(&*form).await;
                });
            });
        }
        {
            let form = self.clone();
            let controller = controller.clone();
            self.category.connect_selected_notify(move |dropdown| {
                controller.handle_category_change(&*form, category_value(dropdown.selected()));
            });
        }
        {
            let form = self.clone();
            self.close_confirmation.connect_clicked(move |_| {
                controller.handle_close_confirmation(&*form);
            });
        }
    }
}

impl Loading for EventForm {
    fn set_loading(&self, loading: bool) {
        if loading {
            self.button.add_css_class("loading");
        } else {
            self.button.remove_css_class("loading");
        }
        self.spinner.set_spinning(loading);
    }
}

impl EventView for EventForm {
    fn fields(&self) -> EventFields {
        let buffer = self.description.buffer();
        let (start, end) = buffer.bounds();
        EventFields {
            title: self.title.text().to_string(),
            description: buffer.text(&start, &end, false).to_string(),
            datetime: self.datetime.text().to_string(),
            location: self.location.text().to_string(),
            category: category_value(self.category.selected()).to_string(),
            other_category: self.other_category.text().to_string(),
        }
    }

    fn clear_title_error(&self) {
        self.title_error.set_visible(false);
    }

    fn show_title_error(&self, message: &str) {
        self.title_error.set_label(message);
        self.title_error.set_visible(true);
    }

    fn show_confirmation(&self, summary: &EventSummary) {
        let markup: Vec<String> = summary
            .lines()
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let escaped = glib::markup_escape_text(line);
                if i == 0 { format!("<b>{}</b>", escaped) } else { escaped.to_string() }
            })
            .collect();
        self.summary.set_markup(&markup.join("\n"));
        self.confirmation.set_visible(true);
    }

    fn hide_confirmation(&self) {
        self.confirmation.set_visible(false);
    }

    fn set_other_category_visible(&self, visible: bool) {
        self.other_group.set_visible(visible);
    }

    fn alert(&self, message: &str) {
        let parent = self.root.root().and_downcast::<gtk::Window>();
        let dialog = adw::MessageDialog::new(parent.as_ref(), Some("Something went wrong"), Some(message));
        dialog.add_response("ok", "OK");
        dialog.set_default_response(Some("ok"));
        dialog.set_close_response("ok");
        dialog.set_modal(true);
        dialog.present();
    }

    fn reset(&self) {
        self.title.set_text("");
        self.description.buffer().set_text("");
        self.datetime.set_text("");
        self.location.set_text("");
        self.other_category.set_text("");
        self.category.set_selected(0);
        self.other_group.set_visible(false);
    }
}
