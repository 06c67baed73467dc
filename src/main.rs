//! Home Value GUI - GPUI-based housing price appraisal interface
//!
//! This application provides a graphical interface for estimating housing
//! prices from a pre-trained regression model, along with a contact form
//! that records visitor messages to a local log.

mod app;
mod components;
mod contact;
mod data;
mod model;
mod predict;
mod theme;

#[cfg(test)]
mod tests;

use gpui::*;
use tracing_subscriber::EnvFilter;

use app::HomeValueApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Application::new().run(|cx: &mut App| {
        // Set up window options
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds {
                origin: Point::default(),
                size: Size {
                    width: px(1200.0),
                    height: px(820.0),
                },
            })),
            titlebar: Some(TitlebarOptions {
                title: Some("Home Value - Housing Price Appraisal".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| HomeValueApp::new(cx))
        })
        .unwrap();
    });
}
