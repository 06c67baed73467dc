//! Range slider component
//!
//! A styled range control bounded by dataset min/max with stepper buttons,
//! a filled track, and a formatted value readout. The prediction form uses
//! one of these per housing feature.

#![allow(dead_code)]

use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Range slider element builder
pub struct Slider {
    id: SharedString,
    /// Field label shown above the track
    label: Option<String>,
    /// Helper text shown under the track
    helper_text: Option<String>,
    value: f64,
    min: f64,
    max: f64,
    /// Decimal precision of the readout
    precision: usize,
    disabled: bool,
    on_decrement: Option<ClickHandler>,
    on_increment: Option<ClickHandler>,
}

impl Slider {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: None,
            helper_text: None,
            value: 0.0,
            min: 0.0,
            max: 1.0,
            precision: 2,
            disabled: false,
            on_decrement: None,
            on_increment: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_decrement(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_decrement = Some(Box::new(handler));
        self
    }

    pub fn on_increment(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_increment = Some(Box::new(handler));
        self
    }

    /// Fraction of the track to fill for the current value
    fn fill_ratio(&self) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }
        (((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)) as f32
    }

    /// Build the slider element
    pub fn build(self, theme: &Theme) -> impl IntoElement {
        let readout = format_value(self.value, self.precision);
        let range_text = format!(
            "{} - {}",
            format_value(self.min, self.precision),
            format_value(self.max, self.precision)
        );
        let fill = self.fill_ratio();
        let can_decrement = !self.disabled && self.value > self.min;
        let can_increment = !self.disabled && self.value < self.max;

        let Slider {
            id,
            label,
            helper_text,
            disabled,
            on_decrement,
            on_increment,
            ..
        } = self;

        div()
            .flex()
            .flex_col()
            .gap(px(6.0))
            // Label row with value readout
            .child(
                div()
                    .flex()
                    .justify_between()
                    .items_center()
                    .when_some(label, |el, label| {
                        el.child(
                            div()
                                .text_size(px(12.0))
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(theme.text_secondary)
                                .child(label),
                        )
                    })
                    .child(
                        div()
                            .px(px(8.0))
                            .py(px(2.0))
                            .rounded(px(4.0))
                            .bg(theme.accent_subtle)
                            .text_size(px(12.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(theme.accent)
                            .child(readout),
                    ),
            )
            // Stepper buttons flanking the track
            .child(
                div()
                    .h(px(36.0))
                    .flex()
                    .items_center()
                    .gap(px(10.0))
                    .when(disabled, |el| el.opacity(0.5))
                    .child(stepper_button(
                        SharedString::from(format!("{id}-dec")),
                        "-",
                        can_decrement,
                        on_decrement,
                        theme,
                    ))
                    .child(
                        // Track with filled portion
                        div()
                            .flex_grow()
                            .h(px(6.0))
                            .rounded(px(3.0))
                            .bg(theme.card_bg_elevated)
                            .border_1()
                            .border_color(theme.border_subtle)
                            .child(
                                div()
                                    .h_full()
                                    .w(relative(fill))
                                    .rounded(px(3.0))
                                    .bg(theme.accent),
                            ),
                    )
                    .child(stepper_button(
                        SharedString::from(format!("{id}-inc")),
                        "+",
                        can_increment,
                        on_increment,
                        theme,
                    )),
            )
            // Range indicator and optional helper text
            .child(
                div()
                    .flex()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(10.0))
                            .text_color(theme.text_dimmed)
                            .child(range_text),
                    )
                    .when_some(helper_text, |el, text| {
                        el.child(
                            div()
                                .text_size(px(10.0))
                                .text_color(theme.text_dimmed)
                                .child(text),
                        )
                    }),
            )
    }
}

fn format_value(value: f64, precision: usize) -> String {
    format!("{:.prec$}", value, prec = precision)
}

fn stepper_button(
    id: SharedString,
    glyph: &'static str,
    enabled: bool,
    handler: Option<ClickHandler>,
    theme: &Theme,
) -> impl IntoElement {
    let hover_bg = theme.hover_bg;

    div()
        .id(id)
        .size(px(28.0))
        .rounded(px(6.0))
        .bg(theme.card_bg_elevated)
        .border_1()
        .border_color(theme.border_subtle)
        .flex()
        .items_center()
        .justify_center()
        .text_size(px(15.0))
        .text_color(if enabled {
            theme.text_secondary
        } else {
            theme.text_dimmed
        })
        .when(enabled, |el| {
            el.cursor_pointer().hover(move |s| s.bg(hover_bg))
        })
        .when_some(handler.filter(|_| enabled), |el, handler| {
            el.on_click(move |event, window, cx| handler(event, window, cx))
        })
        .child(glyph)
}
