//! Main application state and rendering for the Home Value GUI

use crate::contact::{ContactLog, ContactView, CONTACT_LOG_PATH};
use crate::data::{HousingDataset, DATASET_PATH};
use crate::model::{format_price, Artifacts, MODEL_PATH, SCALER_PATH};
use crate::predict::PredictView;
use crate::theme::Theme;
use gpui::prelude::FluentBuilder;
use gpui::*;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Artifacts loaded once at startup and cached for the process lifetime.
///
/// Loading is attempted exactly once; a missing file produces a user-visible
/// warning and a `None` slot, and every dependent view degrades to a
/// disabled state instead of crashing.
pub struct SessionData {
    pub dataset: Option<HousingDataset>,
    pub artifacts: Option<Artifacts>,
    /// Loader warnings surfaced as a banner across all views
    pub warnings: Vec<String>,
}

impl SessionData {
    /// Load from the fixed artifact paths
    pub fn load() -> Self {
        Self::load_from(
            Path::new(DATASET_PATH),
            Path::new(MODEL_PATH),
            Path::new(SCALER_PATH),
        )
    }

    /// Load from explicit paths
    pub fn load_from(dataset_path: &Path, model_path: &Path, scaler_path: &Path) -> Self {
        let mut warnings = Vec::new();

        let dataset = match HousingDataset::load(dataset_path) {
            Ok(dataset) => Some(dataset),
            Err(e) => {
                warn!(error = %e, path = %dataset_path.display(), "housing dataset unavailable");
                warnings.push(
                    "The housing data file was not found. Make sure housing_data.csv \
                     exists in the application directory."
                        .to_string(),
                );
                None
            }
        };

        let artifacts = match Artifacts::load(model_path, scaler_path) {
            Ok(artifacts) => Some(artifacts),
            Err(e) => {
                warn!(error = %e, "regression artifacts unavailable");
                warnings.push(
                    "The model files were not found. Make sure the artifacts exist \
                     in the models/ folder."
                        .to_string(),
                );
                None
            }
        };

        Self {
            dataset,
            artifacts,
            warnings,
        }
    }

    /// Whether every artifact the prediction view depends on is present
    pub fn is_ready(&self) -> bool {
        self.dataset.is_some() && self.artifacts.is_some()
    }
}

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Home,
    Predict,
    Contact,
}

impl ActiveView {
    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Home => "Home",
            ActiveView::Predict => "Appraise",
            ActiveView::Contact => "Contact",
        }
    }

    pub fn all() -> &'static [ActiveView] {
        &[ActiveView::Home, ActiveView::Predict, ActiveView::Contact]
    }
}

/// Main application state
pub struct HomeValueApp {
    /// Current active view
    active_view: ActiveView,
    /// Theme configuration
    theme: Theme,
    /// Process-lifetime artifact cache shared with the views
    session: Arc<SessionData>,
    /// Prediction view entity
    predict: Entity<PredictView>,
    /// Contact view entity
    contact: Entity<ContactView>,
}

impl HomeValueApp {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let theme = Theme::dark();
        let session = Arc::new(SessionData::load());
        let log = Arc::new(ContactLog::new(CONTACT_LOG_PATH));

        let predict = {
            let session = session.clone();
            let theme = theme.clone();
            cx.new(|cx| PredictView::new(session, theme, cx))
        };
        let contact = {
            let theme = theme.clone();
            cx.new(|cx| ContactView::new(log, theme, cx))
        };

        Self {
            active_view: ActiveView::default(),
            theme,
            session,
            predict,
            contact,
        }
    }

    pub fn set_active_view(&mut self, view: ActiveView, cx: &mut Context<Self>) {
        self.active_view = view;
        cx.notify();
    }
}

impl Render for HomeValueApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .size_full()
            .flex()
            .flex_row()
            .bg(theme.background)
            .text_color(theme.text)
            .font_family("Inter")
            .child(self.render_sidebar(cx))
            .child(self.render_main_content())
    }
}

impl HomeValueApp {
    fn render_sidebar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w(px(240.0))
            .h_full()
            .flex()
            .flex_col()
            .bg(theme.sidebar_bg)
            .border_r_1()
            .border_color(theme.border_subtle)
            .child(self.render_logo())
            .child(self.render_nav_items(cx))
            .child(div().flex_grow())
            .child(self.render_sidebar_footer())
    }

    fn render_logo(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .px(px(20.0))
            .py(px(24.0))
            .flex()
            .items_center()
            .gap(px(14.0))
            .border_b_1()
            .border_color(theme.border_subtle)
            .mb(px(8.0))
            .child(
                div()
                    .size(px(40.0))
                    .bg(theme.accent)
                    .rounded(px(10.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .text_size(px(20.0))
                            .font_weight(FontWeight::BLACK)
                            .text_color(hsla(0.0, 0.0, 0.08, 0.95))
                            .child("H"),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(2.0))
                    .child(
                        div()
                            .text_size(px(17.0))
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.text)
                            .child("Home Value"),
                    )
                    .child(
                        div()
                            .text_size(px(11.0))
                            .text_color(theme.text_dimmed)
                            .child("Housing Appraisal"),
                    ),
            )
    }

    fn render_nav_items(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .flex()
            .flex_col()
            .gap(px(2.0))
            .px(px(12.0))
            .py(px(12.0))
            .child(
                div()
                    .text_size(px(10.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text_dimmed)
                    .px(px(12.0))
                    .mb(px(8.0))
                    .child("GO TO"),
            )
            .children(
                ActiveView::all()
                    .iter()
                    .map(|&view| self.nav_item(view, cx))
                    .collect::<Vec<_>>(),
            )
    }

    fn nav_item(&self, view: ActiveView, cx: &mut Context<Self>) -> impl IntoElement {
        let is_active = self.active_view == view;
        let theme = &self.theme;

        let bg = if is_active {
            theme.accent_subtle
        } else {
            transparent_black()
        };
        let text_color = if is_active {
            theme.accent
        } else {
            theme.text_muted
        };
        let hover_text = if is_active {
            theme.accent
        } else {
            theme.text_secondary
        };

        div()
            .id(SharedString::from(format!("nav-{:?}", view)))
            .relative()
            .flex()
            .items_center()
            .gap(px(10.0))
            .px(px(12.0))
            .py(px(10.0))
            .rounded(px(8.0))
            .bg(bg)
            .text_color(text_color)
            .text_size(px(13.0))
            .font_weight(if is_active {
                FontWeight::SEMIBOLD
            } else {
                FontWeight::NORMAL
            })
            .cursor_pointer()
            .hover(|s| s.bg(theme.nav_hover).text_color(hover_text))
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.set_active_view(view, cx);
            }))
            .when(is_active, |s| {
                s.child(
                    div()
                        .absolute()
                        .left(px(-12.0))
                        .top(px(8.0))
                        .bottom(px(8.0))
                        .w(px(3.0))
                        .rounded(px(2.0))
                        .bg(theme.nav_active_indicator),
                )
            })
            .child(view.label().to_string())
    }

    fn render_sidebar_footer(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .px(px(20.0))
            .py(px(16.0))
            .border_t_1()
            .border_color(theme.border_subtle)
            .text_size(px(10.0))
            .text_color(theme.text_dimmed)
            .child("© 2025 Home Value Appraiser")
    }

    fn render_main_content(&self) -> impl IntoElement {
        div()
            .flex_grow()
            .h_full()
            .flex()
            .flex_col()
            .child(self.render_warning_banner())
            .child(self.render_active_view())
    }

    /// Non-fatal loader warnings, shown above every view
    fn render_warning_banner(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .flex()
            .flex_col()
            .children(self.session.warnings.iter().map(|warning| {
                div()
                    .px(px(28.0))
                    .py(px(10.0))
                    .bg(theme.warning_subtle)
                    .border_b_1()
                    .border_color(theme.border_subtle)
                    .text_size(px(13.0))
                    .text_color(theme.warning)
                    .child(warning.clone())
            }))
    }

    fn render_active_view(&self) -> AnyElement {
        match self.active_view {
            ActiveView::Home => self.render_home().into_any_element(),
            ActiveView::Predict => self.predict.clone().into_any_element(),
            ActiveView::Contact => self.contact.clone().into_any_element(),
        }
    }

    fn render_home(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .size_full()
            .p(px(28.0))
            .flex()
            .flex_col()
            .gap(px(20.0))
            .child(
                div()
                    .text_size(px(24.0))
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.text)
                    .child("Welcome to the Home Value Appraiser"),
            )
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(theme.text_muted)
                    .child(
                        "This application uses a machine learning model to estimate the \
                         price of a home from its most relevant characteristics.",
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap(px(20.0))
                    .child(self.render_home_features())
                    .child(self.render_dataset_summary()),
            )
            .child(
                div()
                    .max_w(px(760.0))
                    .p(px(20.0))
                    .rounded(px(10.0))
                    .bg(theme.card_bg)
                    .border_1()
                    .border_color(theme.border_subtle)
                    .flex()
                    .flex_col()
                    .gap(px(8.0))
                    .child(
                        div()
                            .text_size(px(15.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(theme.text)
                            .child("How does it work?"),
                    )
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(theme.text_muted)
                            .child(
                                "Enter a few basic characteristics of the home and the \
                                 model will return an approximate price. Ideal for real \
                                 estate agents, buyers, and project developers.",
                            ),
                    ),
            )
    }

    fn render_home_features(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .flex_grow()
            .p(px(20.0))
            .rounded(px(10.0))
            .bg(theme.card_bg)
            .border_1()
            .border_color(theme.border_subtle)
            .flex()
            .flex_col()
            .gap(px(10.0))
            .child(
                div()
                    .text_size(px(15.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text)
                    .child("What can you do here?"),
            )
            .children(
                [
                    "Estimate home prices instantly.",
                    "Explore how different factors influence the price.",
                    "Compare characteristics across different homes.",
                ]
                .into_iter()
                .map(|item| {
                    div()
                        .flex()
                        .gap(px(8.0))
                        .text_size(px(13.0))
                        .text_color(theme.text_secondary)
                        .child(div().text_color(theme.accent).child("-"))
                        .child(item)
                }),
            )
    }

    /// Small stat card fed by the session-cached dataset
    fn render_dataset_summary(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w(px(240.0))
            .p(px(20.0))
            .rounded(px(10.0))
            .bg(theme.card_bg)
            .border_1()
            .border_color(theme.border_subtle)
            .flex()
            .flex_col()
            .gap(px(10.0))
            .child(
                div()
                    .text_size(px(12.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text_dimmed)
                    .child("REFERENCE DATA"),
            )
            .when_some(self.session.dataset.as_ref(), |el, dataset| {
                el.child(
                    div()
                        .text_size(px(22.0))
                        .font_weight(FontWeight::BOLD)
                        .text_color(theme.text)
                        .child(format!("{} homes", dataset.rows)),
                )
                .child(
                    div()
                        .text_size(px(13.0))
                        .text_color(theme.text_muted)
                        .child(format!(
                            "Average price {}",
                            format_price(dataset.avg_price)
                        )),
                )
            })
            .when(self.session.dataset.is_none(), |el| {
                el.child(
                    div()
                        .text_size(px(13.0))
                        .text_color(theme.warning)
                        .child("Dataset unavailable"),
                )
            })
    }
}
