//! Reusable UI components for the Home Value GUI
//!
//! Contains the form building blocks shared by the prediction and contact
//! views.

pub mod forms;
