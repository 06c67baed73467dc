//! Contact view and append-only message log
//!
//! Collects three free-text fields and appends one CSV row per submission
//! to a local log file. The log is write-only: the application never reads
//! it back, and rows are never updated or deleted.

use crate::components::forms::TextInput;
use crate::theme::Theme;
use gpui::prelude::FluentBuilder;
use gpui::*;
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Default on-disk location of the contact log
pub const CONTACT_LOG_PATH: &str = "contactos.csv";

/// Column headers, written only when the log file is created
const LOG_HEADER: [&str; 4] = ["Nombre", "Email", "Mensaje", "Fecha"];

/// Errors raised while appending to the contact log
#[derive(Debug, Error)]
pub enum ContactLogError {
    #[error("contact log not writable: {0}")]
    Io(#[from] std::io::Error),
    #[error("contact row not encodable: {0}")]
    Encode(String),
}

/// A single visitor message, timestamped at creation
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

impl ContactMessage {
    /// Build a message stamped with the current local time
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            name,
            email,
            message,
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Append-only CSV log of contact messages.
///
/// Each submission becomes exactly one row. The whole row (plus the header,
/// when the file is being created) is encoded first and written with a
/// single `O_APPEND` write under a process-wide mutex, so rows from
/// concurrent writers cannot interleave.
pub struct ContactLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ContactLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Append one message, creating the file with its header if absent
    pub fn append(&self, message: &ContactMessage) -> Result<(), ContactLogError> {
        let _guard = self.lock.lock();

        let write_header = !self.path.exists();
        let mut encoder = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        if write_header {
            encoder
                .write_record(LOG_HEADER)
                .map_err(|e| ContactLogError::Encode(e.to_string()))?;
        }
        encoder
            .write_record([
                message.name.as_str(),
                message.email.as_str(),
                message.message.as_str(),
                message.timestamp.as_str(),
            ])
            .map_err(|e| ContactLogError::Encode(e.to_string()))?;
        let buf = encoder
            .into_inner()
            .map_err(|e| ContactLogError::Encode(e.to_string()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&buf)?;

        info!(path = %self.path.display(), "contact message appended");
        Ok(())
    }
}

// =============================================================================
// Contact View
// =============================================================================

/// Which text field currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }
}

/// Outcome of the last submission, shown as a banner under the form
#[derive(Debug, Clone)]
enum SubmitStatus {
    Sent,
    Failed(String),
}

/// Contact form view: three free-text fields plus a submit button
pub struct ContactView {
    theme: Theme,
    log: Arc<ContactLog>,
    focus_handle: FocusHandle,
    name: String,
    email: String,
    message: String,
    focused: Option<ContactField>,
    status: Option<SubmitStatus>,
}

impl ContactView {
    pub fn new(log: Arc<ContactLog>, theme: Theme, cx: &mut Context<Self>) -> Self {
        Self {
            theme,
            log,
            focus_handle: cx.focus_handle(),
            name: String::new(),
            email: String::new(),
            message: String::new(),
            focused: Some(ContactField::Name),
            status: None,
        }
    }

    fn buffer_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    fn set_focus(&mut self, field: ContactField, cx: &mut Context<Self>) {
        self.focused = Some(field);
        cx.notify();
    }

    fn handle_key(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let Some(field) = self.focused else {
            return;
        };
        let keystroke = &event.keystroke;
        match keystroke.key.as_str() {
            "backspace" => {
                self.buffer_mut(field).pop();
            }
            "tab" => {
                self.focused = Some(field.next());
            }
            "enter" if field == ContactField::Message => {
                self.buffer_mut(field).push('\n');
            }
            _ => {
                if let Some(text) = keystroke.key_char.clone() {
                    self.buffer_mut(field).push_str(&text);
                }
            }
        }
        cx.notify();
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let message = ContactMessage::new(
            self.name.clone(),
            self.email.clone(),
            self.message.clone(),
        );
        match self.log.append(&message) {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = Some(SubmitStatus::Sent);
            }
            Err(e) => {
                warn!(error = %e, "contact message could not be saved");
                self.status = Some(SubmitStatus::Failed(e.to_string()));
            }
        }
        cx.notify();
    }

    fn render_form(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .max_w(px(560.0))
            .p(px(24.0))
            .rounded(px(10.0))
            .bg(theme.card_bg)
            .border_1()
            .border_color(theme.border_subtle)
            .flex()
            .flex_col()
            .gap(px(16.0))
            .child(
                TextInput::new("contact-name")
                    .label("Full name")
                    .placeholder("Your name")
                    .value(self.name.clone())
                    .focused(self.focused == Some(ContactField::Name))
                    .on_click(cx.listener(|this, _event, window, cx| {
                        window.focus(&this.focus_handle);
                        this.set_focus(ContactField::Name, cx);
                    }))
                    .build(theme),
            )
            .child(
                TextInput::new("contact-email")
                    .label("Email address")
                    .placeholder("you@example.com")
                    .value(self.email.clone())
                    .focused(self.focused == Some(ContactField::Email))
                    .on_click(cx.listener(|this, _event, window, cx| {
                        window.focus(&this.focus_handle);
                        this.set_focus(ContactField::Email, cx);
                    }))
                    .build(theme),
            )
            .child(
                TextInput::new("contact-message")
                    .label("Message")
                    .placeholder("Write your message here...")
                    .value(self.message.clone())
                    .multiline()
                    .focused(self.focused == Some(ContactField::Message))
                    .on_click(cx.listener(|this, _event, window, cx| {
                        window.focus(&this.focus_handle);
                        this.set_focus(ContactField::Message, cx);
                    }))
                    .build(theme),
            )
            .child(
                div()
                    .id("contact-submit")
                    .mt(px(4.0))
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
                    .child("Send message")
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.submit(cx);
                    })),
            )
    }

    fn render_status(&self) -> Option<impl IntoElement> {
        let theme = &self.theme;
        let (text, fg, bg) = match self.status.as_ref()? {
            SubmitStatus::Sent => (
                "Thank you for reaching out! We will get back to you soon.".to_string(),
                theme.positive,
                theme.positive_subtle,
            ),
            SubmitStatus::Failed(reason) => (
                format!("Your message could not be saved: {reason}"),
                theme.negative,
                theme.negative_subtle,
            ),
        };

        Some(
            div()
                .max_w(px(560.0))
                .px(px(16.0))
                .py(px(12.0))
                .rounded(px(8.0))
                .bg(bg)
                .text_color(fg)
                .text_size(px(13.0))
                .child(text),
        )
    }
}

impl Focusable for ContactView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ContactView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();

        div()
            .size_full()
            .p(px(28.0))
            .flex()
            .flex_col()
            .gap(px(16.0))
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key))
            .child(
                div()
                    .text_size(px(24.0))
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.text)
                    .child("Contact us"),
            )
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(theme.text_muted)
                    .child(
                        "Want a personalized appraisal or more information? \
                         Leave your details and we will get in touch.",
                    ),
            )
            .child(self.render_form(cx))
            .when_some(self.render_status(), |el, status| el.child(status))
    }
}
