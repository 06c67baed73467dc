//! Test modules for the Home Value GUI
//!
//! ## Test Categories
//!
//! - **Unit Tests**: Individual module functionality
//!   - `data_test` - Dataset loading and column statistics
//!   - `model_test` - Artifact loading and the prediction pipeline
//!   - `contact_test` - Contact messages and the append-only log
//!   - `app_test` - Session cache and view routing state
//!
//! - **Integration Tests**: Cross-module functionality
//!   - `integration_test` - Artifact loading through prediction and logging
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all tests
//! cargo test
//!
//! # Run specific test module
//! cargo test data_test
//! ```

#[cfg(test)]
pub mod data_test;



#[cfg(test)]
pub mod app_test;

#[cfg(test)]
pub mod integration_test;
