//! Text input component
//!
//! A styled free-text field with label, placeholder, and focus states.
//! Supports a multiline variant for the contact message body. Keystrokes
//! are routed by the owning view; this component only renders state.

#![allow(dead_code)]

use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Text input field element builder
pub struct TextInput {
    id: SharedString,
    /// Current input value
    value: String,
    /// Placeholder text shown while empty
    placeholder: String,
    /// Field label
    label: Option<String>,
    /// Whether the field currently receives keystrokes
    focused: bool,
    /// Whether to render as a taller multiline area
    multiline: bool,
    disabled: bool,
    /// Callback when the field is clicked (used to move focus)
    on_click: Option<ClickHandler>,
}

impl TextInput {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: String::new(),
            label: None,
            focused: false,
            multiline: false,
            disabled: false,
            on_click: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Build the text input element
    pub fn build(self, theme: &Theme) -> impl IntoElement {
        let border_color = if self.focused {
            theme.accent
        } else {
            theme.border
        };
        let is_empty = self.value.is_empty();
        let display_value = if is_empty {
            self.placeholder.clone()
        } else if self.focused {
            // Trailing caret marks the insertion point
            format!("{}\u{258f}", self.value)
        } else {
            self.value.clone()
        };

        let TextInput {
            id,
            label,
            multiline,
            disabled,
            on_click,
            ..
        } = self;

        div()
            .flex()
            .flex_col()
            .gap(px(6.0))
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
                    .id(id)
                    .when(multiline, |el| el.min_h(px(100.0)).items_start().py(px(10.0)))
                    .when(!multiline, |el| el.h(px(40.0)).items_center())
                    .px(px(12.0))
                    .rounded(px(6.0))
                    .bg(theme.card_bg_elevated)
                    .border_1()
                    .border_color(border_color)
                    .flex()
                    .text_size(px(13.0))
                    .text_color(if is_empty {
                        theme.text_dimmed
                    } else {
                        theme.text
                    })
                    .when(disabled, |el| el.opacity(0.5))
                    .when(!disabled, |el| el.cursor_text())
                    .when_some(on_click.filter(|_| !disabled), |el, handler| {
                        el.on_click(move |event, window, cx| handler(event, window, cx))
                    })
                    .child(display_value),
            )
    }
}
