use adw::prelude::*;
use adw::Application;
use std::rc::Rc;

use eventboard::FormController;

use crate::ui::event_form::EventForm;
use crate::ui::subscribe_form::SubscribeForm;

pub fn show_main_window(app: &Application, controller: FormController) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Eventboard")
        .default_width(560)
        .default_height(720)
        .build();

    let controller = Rc::new(controller);

    let subscribe = SubscribeForm::new();
    subscribe.bind(controller.clone());
    let event = EventForm::new();
    event.bind(controller);

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 24);
    content.set_margin_top(24);
    content.set_margin_bottom(24);
    content.set_margin_start(24);
    content.set_margin_end(24);
    content.append(&subscribe.widget());
    content.append(&gtk4::Separator::new(gtk4::Orientation::Horizontal));
    content.append(&event.widget());

    let scroller = gtk4::ScrolledWindow::builder()
        .vexpand(true)
        .hexpand(true)
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .child(&content)
        .build();

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk4::Label::new(Some("Eventboard"));
    header.set_title_widget(Some(&title));
    container.append(&header);
    container.append(&scroller);
    window.set_content(Some(&container));
    window.present();
}
