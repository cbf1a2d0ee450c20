use std::rc::Rc;

use gtk::prelude::*;
use gtk::{gio, glib};
use libshumate::prelude::{LocationExt, MarkerExt};

use crate::config::Config;
use crate::data::{EarthquakeEvent, EarthquakeList};

const TILE_SOURCE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// How far (in widget pixels) a click may land from a marker and still count
/// as hitting it.
pub const CLICK_TOLERANCE_PX: f64 = 10.0;

/// The earthquake map widget: a libshumate basemap with one marker per
/// event at or above the magnitude threshold, and a click handler that
/// opens the detail dialog for the nearest hit marker.
pub struct EarthquakeMap {
    widget: libshumate::SimpleMap,
    marker_count: usize,
}

impl EarthquakeMap {
    pub fn build(earthquakes: &EarthquakeList, config: &Config) -> EarthquakeMap {
        let widget = libshumate::SimpleMap::new();

        let map_source = libshumate::RasterRenderer::from_url(TILE_SOURCE_URL);
        widget.set_map_source(Some(&map_source));

        widget.set_vexpand(true);
        widget.set_hexpand(true);

        let mut marker_count = 0;

        if let Some(map_view) = widget.map() {
            if let Some(viewport) = map_view.viewport() {
                let marker_layer = libshumate::MarkerLayer::new(&viewport);
                map_view.add_layer(&marker_layer);

                viewport.set_min_zoom_level(1);
                viewport.set_max_zoom_level(12);

                // Start with the whole world visible
                map_view.go_to_full(0.0, 0.0, 2.0);

                // The marker and its source record enter the table in the
                // same step, so every rendered marker has exactly one event
                // behind it. The table is never written again after this loop.
                let mut table: Vec<(libshumate::Marker, EarthquakeEvent)> = Vec::new();
                for event in renderable_events(earthquakes, config.min_magnitude) {
                    let marker = create_event_marker(event);
                    marker_layer.add_marker(&marker);
                    table.push((marker, event.clone()));
                }

                marker_count = table.len();
                attach_click_handler(&map_view, &viewport, Rc::new(table));
            } else {
                eprintln!("Map viewport unavailable, rendering no markers");
            }
        } else {
            eprintln!("Map view unavailable, rendering no markers");
        }

        EarthquakeMap {
            widget,
            marker_count,
        }
    }

    pub fn widget(&self) -> &libshumate::SimpleMap {
        &self.widget
    }

    /// Number of markers actually placed on the map.
    pub fn marker_count(&self) -> usize {
        self.marker_count
    }
}

/// The events that get a marker: magnitude present and at or above the
/// configured floor. Records with a null magnitude render nothing.
pub fn renderable_events(list: &EarthquakeList, min_magnitude: f64) -> Vec<&EarthquakeEvent> {
    list.features
        .iter()
        .filter(|event| event.magnitude().map_or(false, |mag| mag >= min_magnitude))
        .collect()
}

/// Index of the marker position closest to the click, among those within
/// tolerance. None when the click lands on empty map.
pub fn nearest_within(positions: &[(f64, f64)], x: f64, y: f64, tolerance: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, (px, py)) in positions.iter().enumerate() {
        let dist = ((px - x).powi(2) + (py - y).powi(2)).sqrt();
        if dist <= tolerance && best.map_or(true, |(_, best_dist)| dist < best_dist) {
            best = Some((index, dist));
        }
    }

    best.map(|(index, _)| index)
}

fn create_event_marker(event: &EarthquakeEvent) -> libshumate::Marker {
    let label_text = event
        .magnitude()
        .map(|mag| format!("{:.1}", mag))
        .unwrap_or_default();

    let dot = gtk::Label::new(Some(&label_text));
    dot.add_css_class("quake-marker");

    let marker = libshumate::Marker::new();
    marker.set_child(Some(&dot));
    marker.set_location(event.geometry.latitude(), event.geometry.longitude());
    marker
}

fn attach_click_handler(
    map_view: &libshumate::Map,
    viewport: &libshumate::Viewport,
    table: Rc<Vec<(libshumate::Marker, EarthquakeEvent)>>,
) {
    let gesture = gtk::GestureClick::new();
    gesture.set_button(gdk::BUTTON_PRIMARY);

    let map_view_for_click = map_view.clone();
    let viewport_for_click = viewport.clone();
    gesture.connect_released(move |_, _, x, y| {
        let map_view = map_view_for_click.clone();
        let viewport = viewport_for_click.clone();
        let table = table.clone();

        // Resolve the hit on the next main loop iteration; the dialog is
        // raised from the completion callback, back on the UI thread.
        glib::spawn_future_local(async move {
            let positions: Vec<(f64, f64)> = table
                .iter()
                .map(|(marker, _)| {
                    viewport.location_to_widget_coords(
                        &map_view,
                        marker.latitude(),
                        marker.longitude(),
                    )
                })
                .collect();

            if let Some(index) = nearest_within(&positions, x, y, CLICK_TOLERANCE_PX) {
                let (_, event) = &table[index];
                match event.summary() {
                    Some(text) => show_detail_dialog(&map_view, event, text),
                    None => {
                        eprintln!("Event record is missing display fields, skipping detail dialog")
                    }
                }
            }
        });
    });

    map_view.add_controller(gesture);
}

/// Modal dialog with the event summary. When the feed carries a USGS page
/// for the event, a second button opens it in the default browser.
fn show_detail_dialog(map_view: &libshumate::Map, event: &EarthquakeEvent, text: String) {
    let parent = map_view
        .root()
        .and_then(|root| root.downcast::<gtk::Window>().ok());

    let url = event.properties.url.clone();

    let builder = gtk::AlertDialog::builder()
        .modal(true)
        .message("Earthquake Detail")
        .detail(&text)
        .default_button(0)
        .cancel_button(0);

    let dialog = if url.is_some() {
        builder.buttons(["Close", "View on USGS"]).build()
    } else {
        builder.buttons(["Close"]).build()
    };

    dialog.choose(parent.as_ref(), gio::Cancellable::NONE, move |response| {
        match response {
            Ok(1) => {
                if let Some(url) = url.as_deref() {
                    if let Err(e) = open::that(url) {
                        eprintln!("Failed to open URL {}: {}", url, e);
                    }
                }
            }
            Ok(_) => {}
            Err(e) => eprintln!("Detail dialog closed with error: {}", e),
        }
    });
}
