//! Framework-agnostic UI components.
//!
//! Components here own their state and callbacks but not their rendering: they
//! produce plain view descriptions that a front-end layer turns into markup.

/// Product creation form state machine
pub mod create_product_modal;

pub use create_product_modal::{CreateProductModal, FormField, ProductFormData};
