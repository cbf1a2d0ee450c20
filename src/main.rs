use gtk::prelude::*;
use gtk::{glib, Application};
use libadwaita::{prelude::*, ApplicationWindow, ColorScheme, HeaderBar, StyleManager, ToolbarView};

use epicenter::config::Config;
use epicenter::data::{EarthquakeList, APP_ID};
use epicenter::feed;
use epicenter::map::EarthquakeMap;

fn main() -> glib::ExitCode {
    let app = Application::builder().application_id(APP_ID).build();

    app.connect_activate(build_ui);
    app.connect_shutdown(|_| {
        // The window tree (map view and its tile machinery included) is
        // disposed with the application.
        eprintln!("Shutting down");
    });

    app.run()
}

fn build_ui(app: &Application) {
    // Enable dark theme support
    let style_manager = StyleManager::default();
    style_manager.set_color_scheme(ColorScheme::PreferDark);

    let config = Config::load();

    load_css();

    // Fetch the feed before building the map. The fetch runs on the UI
    // thread: no background offload, no timeout, no retry. A failed fetch
    // degrades to an empty list and a map with zero markers.
    let earthquakes = match feed::load_earthquakes(&config.feed_url) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("Failed to load earthquake feed: {:#}", e);
            EarthquakeList::default()
        }
    };

    let map = EarthquakeMap::build(&earthquakes, &config);

    let header_bar = HeaderBar::builder().build();

    let toolbar_view = ToolbarView::builder().build();
    toolbar_view.add_top_bar(&header_bar);
    toolbar_view.set_content(Some(map.widget()));

    let window = ApplicationWindow::builder()
        .application(app)
        .title(format!(
            "Earthquake Viewer - {} Earthquakes Displayed",
            map.marker_count()
        ))
        .default_width(config.window_width)
        .default_height(config.window_height)
        .build();

    window.set_content(Some(&toolbar_view));
    window.present();
}

fn load_css() {
    let css_provider = gtk::CssProvider::new();
    css_provider.load_from_data(
        ".quake-marker {
            background-color: alpha(#e01b24, 0.85);
            color: white;
            border-radius: 12px;
            padding: 2px 7px;
            font-size: 10px;
            font-weight: bold;
            min-height: 0;
            min-width: 0;
            box-shadow: 0 2px 6px alpha(black, 0.4);
        }
        .quake-marker:hover {
            background-color: alpha(#e01b24, 1.0);
            box-shadow: 0 3px 8px alpha(black, 0.5);
        }",
    );

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &css_provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
