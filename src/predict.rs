//! Prediction view
//!
//! Collects the four housing attributes through range sliders bounded by
//! the dataset statistics, and on explicit submit pipes the fixed-order
//! feature vector through the scaler and model to display an estimated
//! price. When any required artifact failed to load, the form gives way
//! to a disabled warning and no prediction is ever issued.

use crate::app::SessionData;
use crate::components::forms::Slider;
use crate::data::ColumnStats;
use crate::model::format_price;
use crate::theme::Theme;
use gpui::prelude::FluentBuilder;
use gpui::*;
use std::sync::Arc;

/// The four model features, in the order the artifacts expect them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Rm,
    Lstat,
    Ptratio,
    Dis,
}

impl Feature {
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Rm => "Average number of rooms (RM)",
            Feature::Lstat => "Lower-status population % (LSTAT)",
            Feature::Ptratio => "Pupil-teacher ratio (PTRATIO)",
            Feature::Dis => "Distance to employment centers (DIS)",
        }
    }

    fn id(&self) -> &'static str {
        match self {
            Feature::Rm => "slider-rm",
            Feature::Lstat => "slider-lstat",
            Feature::Ptratio => "slider-ptratio",
            Feature::Dis => "slider-dis",
        }
    }
}

/// Slider position for one feature, clamped to the dataset range
#[derive(Debug, Clone, Copy)]
pub struct SliderState {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderState {
    /// Bounds come from the column min/max, the default from its mean
    pub fn from_stats(stats: &ColumnStats) -> Self {
        Self {
            value: stats.mean,
            min: stats.min,
            max: stats.max,
            step: (stats.max - stats.min) / 40.0,
        }
    }

    pub fn set(&mut self, value: f64) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn step_by(&mut self, steps: f64) {
        self.set(self.value + steps * self.step);
    }
}

/// Form state for the prediction view, present only when both the dataset
/// and the model artifacts loaded successfully
pub struct PredictForm {
    rm: SliderState,
    lstat: SliderState,
    ptratio: SliderState,
    dis: SliderState,
    /// Last estimate, in $1000s
    estimate: Option<f64>,
}

impl PredictForm {
    pub fn new(session: &SessionData) -> Option<Self> {
        // Both loaders must have succeeded before the form renders
        let dataset = session.dataset.as_ref()?;
        session.artifacts.as_ref()?;
        Some(Self {
            rm: SliderState::from_stats(&dataset.rm),
            lstat: SliderState::from_stats(&dataset.lstat),
            ptratio: SliderState::from_stats(&dataset.ptratio),
            dis: SliderState::from_stats(&dataset.dis),
            estimate: None,
        })
    }

    fn slider_mut(&mut self, feature: Feature) -> &mut SliderState {
        match feature {
            Feature::Rm => &mut self.rm,
            Feature::Lstat => &mut self.lstat,
            Feature::Ptratio => &mut self.ptratio,
            Feature::Dis => &mut self.dis,
        }
    }

    fn slider(&self, feature: Feature) -> &SliderState {
        match feature {
            Feature::Rm => &self.rm,
            Feature::Lstat => &self.lstat,
            Feature::Ptratio => &self.ptratio,
            Feature::Dis => &self.dis,
        }
    }

    /// Fixed-order vector `[RM, LSTAT, PTRATIO, DIS]`
    pub fn feature_vector(&self) -> [f64; 4] {
        [
            self.rm.value,
            self.lstat.value,
            self.ptratio.value,
            self.dis.value,
        ]
    }
}

/// Prediction view: slider form, submit action, estimate card
pub struct PredictView {
    theme: Theme,
    session: Arc<SessionData>,
    form: Option<PredictForm>,
}

impl PredictView {
    pub fn new(session: Arc<SessionData>, theme: Theme, _cx: &mut Context<Self>) -> Self {
        let form = PredictForm::new(&session);
        Self {
            theme,
            session,
            form,
        }
    }

    fn step_feature(&mut self, feature: Feature, steps: f64, cx: &mut Context<Self>) {
        if let Some(form) = &mut self.form {
            form.slider_mut(feature).step_by(steps);
            cx.notify();
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let Some(form) = &mut self.form else {
            return;
        };
        let Some(artifacts) = self.session.artifacts.as_ref() else {
            return;
        };
        form.estimate = Some(artifacts.estimate(&form.feature_vector()));
        cx.notify();
    }

    fn render_slider(&self, feature: Feature, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self
            .form
            .as_ref()
            .map(|form| *form.slider(feature))
            .unwrap_or(SliderState {
                value: 0.0,
                min: 0.0,
                max: 1.0,
                step: 0.1,
            });

        Slider::new(feature.id())
            .label(feature.label())
            .range(state.min, state.max)
            .value(state.value)
            .precision(2)
            .on_decrement(cx.listener(move |this, _event, _window, cx| {
                this.step_feature(feature, -1.0, cx);
            }))
            .on_increment(cx.listener(move |this, _event, _window, cx| {
                this.step_feature(feature, 1.0, cx);
            }))
            .build(&self.theme)
    }

    fn render_form(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .max_w(px(760.0))
            .p(px(24.0))
            .rounded(px(10.0))
            .bg(theme.card_bg)
            .border_1()
            .border_color(theme.border_subtle)
            .flex()
            .flex_col()
            .gap(px(20.0))
            .child(
                div()
                    .text_size(px(15.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text)
                    .child("Housing characteristics"),
            )
            // Two-column slider layout
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap(px(28.0))
                    .child(
                        div()
                            .flex_grow()
                            .flex()
                            .flex_col()
                            .gap(px(18.0))
                            .child(self.render_slider(Feature::Rm, cx))
                            .child(self.render_slider(Feature::Lstat, cx)),
                    )
                    .child(
                        div()
                            .flex_grow()
                            .flex()
                            .flex_col()
                            .gap(px(18.0))
                            .child(self.render_slider(Feature::Ptratio, cx))
                            .child(self.render_slider(Feature::Dis, cx)),
                    ),
            )
            .child(
                div()
                    .id("predict-submit")
                    .px(px(16.0))
                    .py(px(10.0))
                    .rounded(px(8.0))
                    .bg(theme.accent)
                    .text_color(hsla(0.0, 0.0, 0.08, 1.0))
                    .text_size(px(13.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .cursor_pointer()
                    .hover(|s| s.bg(theme.accent_hover))
                    .flex()
                    .justify_center()
                    .child("Estimate price")
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.submit(cx);
                    })),
            )
    }

    fn render_estimate(&self, estimate: f64) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .max_w(px(760.0))
            .flex()
            .flex_col()
            .gap(px(12.0))
            .child(
                div()
                    .px(px(16.0))
                    .py(px(14.0))
                    .rounded(px(8.0))
                    .bg(theme.positive_subtle)
                    .text_color(theme.positive)
                    .text_size(px(15.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(format!(
                        "Estimated price for this home: {}",
                        format_price(estimate)
                    )),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(theme.text_muted)
                    .child(
                        "This value is an estimate based on average characteristics and \
                         can vary with market conditions. For a more precise appraisal, \
                         consider additional variables.",
                    ),
            )
    }

    fn render_disabled_warning(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .max_w(px(760.0))
            .px(px(16.0))
            .py(px(14.0))
            .rounded(px(8.0))
            .bg(theme.warning_subtle)
            .text_color(theme.warning)
            .text_size(px(14.0))
            .child(
                "The model or the data are not available. \
                 Please verify the required files.",
            )
    }
}

impl Render for PredictView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();
        let ready = self.form.is_some();
        let estimate = self.form.as_ref().and_then(|form| form.estimate);

        div()
            .size_full()
            .p(px(28.0))
            .flex()
            .flex_col()
            .gap(px(16.0))
            .child(
                div()
                    .text_size(px(24.0))
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.text)
                    .child("Housing price estimate"),
            )
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(theme.text_muted)
                    .child(
                        "Enter the characteristics of the home to get a price estimate \
                         from our trained model.",
                    ),
            )
            .when(ready, |el| el.child(self.render_form(cx)))
            .when(!ready, |el| el.child(self.render_disabled_warning()))
            .when_some(estimate, |el, estimate| {
                el.child(self.render_estimate(estimate))
            })
    }
}
