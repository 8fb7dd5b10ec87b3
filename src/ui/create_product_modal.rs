//! The "create product" modal.
//!
//! A controlled form with two states, closed and open. While open it tracks the
//! field values the user types. Submitting hands the complete form to the
//! caller's `on_create` callback exactly once, resets the form, and asks the
//! caller to close it through `on_close`. Cancelling resets and closes without
//! creating anything. Whether the creation later succeeds is not tracked here.
//!
//! The open flag belongs to the caller: `on_close` is a request, and the modal
//! stays open until [`CreateProductModal::set_open`] says otherwise.

use crate::core::product::NewProduct;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Heading shown at the top of the modal.
pub const MODAL_TITLE: &str = "Create New Product";

/// Values collected by the form, including the client-generated identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFormData {
    /// UUID v4 generated when the form is (re)initialised
    pub product_id: String,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub stock_quantity: i32,
    /// Rating
    pub rating: f64,
}

impl ProductFormData {
    /// A blank form with a freshly generated identifier.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            product_id: Uuid::new_v4().to_string(),
            name: String::new(),
            price: 0.0,
            stock_quantity: 0,
            rating: 0.0,
        }
    }
}

impl Default for ProductFormData {
    fn default() -> Self {
        Self::initial()
    }
}

impl From<ProductFormData> for NewProduct {
    fn from(form: ProductFormData) -> Self {
        Self {
            product_id: Some(form.product_id),
            name: form.name,
            price: form.price,
            rating: form.rating,
            stock_quantity: form.stock_quantity,
        }
    }
}

/// Editable inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Product name, free text
    Name,
    /// Unit price
    Price,
    /// Units in stock
    StockQuantity,
    /// Rating
    Rating,
}

impl FormField {
    /// Fields in the order they are rendered.
    pub const ALL: [Self; 4] = [Self::Name, Self::Price, Self::StockQuantity, Self::Rating];

    /// Looks a field up by its input `name` attribute.
    #[must_use]
    pub fn from_input_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.input_name() == name)
    }

    /// The input `name` attribute, matching the JSON field name.
    #[must_use]
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::StockQuantity => "stockQuantity",
            Self::Rating => "rating",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Name => "Product Name",
            Self::Price => "Price",
            Self::StockQuantity => "Stock Quantity",
            Self::Rating => "Rating",
        }
    }

    const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Price => "Price",
            Self::StockQuantity => "Stock Quantity",
            Self::Rating => "Rating",
        }
    }

    const fn input_type(self) -> InputType {
        match self {
            Self::Name => InputType::Text,
            Self::Price | Self::StockQuantity | Self::Rating => InputType::Number,
        }
    }
}

/// HTML input type of a rendered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// `type="text"`
    Text,
    /// `type="number"`
    Number,
}

/// One rendered input with its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    /// Label text above the input
    pub label: &'static str,
    /// Input `name` attribute
    pub name: &'static str,
    /// Input type
    pub input_type: InputType,
    /// Placeholder text
    pub placeholder: &'static str,
    /// Current display value; numeric zero shows as empty
    pub value: String,
    /// Every input is required
    pub required: bool,
}

/// Everything needed to draw an open modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    /// Heading
    pub title: &'static str,
    /// Inputs in display order
    pub inputs: Vec<InputView>,
    /// Submit button text
    pub submit_label: &'static str,
    /// Cancel button text
    pub cancel_label: &'static str,
}

/// Controlled product creation form.
pub struct CreateProductModal<Close, Create>
where
    Close: FnMut(),
    Create: FnMut(ProductFormData),
{
    is_open: bool,
    on_close: Close,
    on_create: Create,
    form_data: ProductFormData,
}

impl<Close, Create> CreateProductModal<Close, Create>
where
    Close: FnMut(),
    Create: FnMut(ProductFormData),
{
    /// Creates the modal with a blank form.
    pub fn new(is_open: bool, on_close: Close, on_create: Create) -> Self {
        Self {
            is_open,
            on_close,
            on_create,
            form_data: ProductFormData::initial(),
        }
    }

    /// Updates the caller-owned open flag. Form values survive closing.
    pub fn set_open(&mut self, is_open: bool) {
        self.is_open = is_open;
    }

    /// Whether the modal is currently shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current form values.
    #[must_use]
    pub const fn form_data(&self) -> &ProductFormData {
        &self.form_data
    }

    /// Applies an input change event.
    ///
    /// `name` is the input's `name` attribute; unknown names are ignored, as are
    /// events while the modal is closed. Numeric inputs coerce empty or
    /// unparseable text to zero and otherwise take the leading number, so
    /// `"12abc"` stores 12. Stock quantity truncates toward zero.
    pub fn handle_change(&mut self, name: &str, value: &str) {
        if !self.is_open {
            return;
        }
        let Some(field) = FormField::from_input_name(name) else {
            return;
        };

        match field {
            FormField::Name => self.form_data.name = value.to_string(),
            FormField::Price => self.form_data.price = parse_number(value),
            FormField::Rating => self.form_data.rating = parse_number(value),
            #[allow(clippy::cast_possible_truncation)]
            FormField::StockQuantity => self.form_data.stock_quantity = parse_number(value) as i32,
        }
    }

    /// Whether every required input has a non-empty display value.
    ///
    /// Numeric zero displays as empty, so a zero price, stock, or rating keeps
    /// the form incomplete just like a blank name.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        FormField::ALL
            .into_iter()
            .all(|field| !self.display_value(field).is_empty())
    }

    /// Submits the form: `on_create` with the current values, then reset, then `on_close`.
    ///
    /// Does nothing while the modal is closed or while a required input is
    /// empty (see [`Self::is_complete`]); the form keeps its values in that case.
    pub fn submit(&mut self) {
        if !self.is_open || !self.is_complete() {
            return;
        }
        let submitted = std::mem::replace(&mut self.form_data, ProductFormData::initial());
        (self.on_create)(submitted);
        (self.on_close)();
    }

    /// Discards the form and asks the caller to close. Never calls `on_create`.
    pub fn cancel(&mut self) {
        if !self.is_open {
            return;
        }
        self.form_data = ProductFormData::initial();
        (self.on_close)();
    }

    /// Describes what to draw, or `None` while closed.
    #[must_use]
    pub fn render(&self) -> Option<ModalView> {
        if !self.is_open {
            return None;
        }

        let inputs = FormField::ALL
            .into_iter()
            .map(|field| InputView {
                label: field.label(),
                name: field.input_name(),
                input_type: field.input_type(),
                placeholder: field.placeholder(),
                value: self.display_value(field),
                required: true,
            })
            .collect();

        Some(ModalView {
            title: MODAL_TITLE,
            inputs,
            submit_label: "Create",
            cancel_label: "Cancel",
        })
    }

    fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.form_data.name.clone(),
            FormField::Price => display_number(self.form_data.price),
            FormField::StockQuantity => display_number(f64::from(self.form_data.stock_quantity)),
            FormField::Rating => display_number(self.form_data.rating),
        }
    }
}

// Zero and NaN are falsy in a number input binding and render blank.
fn display_number(value: f64) -> String {
    if value == 0.0 || value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Parses the longest leading decimal number in `input`, or 0 if there is none.
fn parse_number(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse().unwrap_or(0.0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use std::cell::{Cell, RefCell};

    fn is_blank(form: &ProductFormData) -> bool {
        form.name.is_empty()
            && form.price == 0.0
            && form.stock_quantity == 0
            && form.rating == 0.0
            && Uuid::parse_str(&form.product_id).is_ok()
    }

    #[test]
    fn test_closed_modal_renders_nothing() {
        let modal = CreateProductModal::new(false, || {}, |_| {});
        assert!(modal.render().is_none());
    }

    #[test]
    fn test_open_modal_renders_blank_required_inputs() {
        let modal = CreateProductModal::new(true, || {}, |_| {});
        let view = modal.render().unwrap();

        assert_eq!(view.title, "Create New Product");
        assert_eq!(view.submit_label, "Create");
        assert_eq!(view.cancel_label, "Cancel");
        let names: Vec<&str> = view.inputs.iter().map(|input| input.name).collect();
        assert_eq!(names, vec!["name", "price", "stockQuantity", "rating"]);
        assert!(view.inputs.iter().all(|input| input.required));
        assert!(view.inputs.iter().all(|input| input.value.is_empty()));
        assert_eq!(view.inputs[0].input_type, InputType::Text);
        assert_eq!(view.inputs[2].label, "Stock Quantity");
        assert_eq!(view.inputs[3].input_type, InputType::Number);
    }

    #[test]
    fn test_handle_change_updates_fields() {
        let mut modal = CreateProductModal::new(true, || {}, |_| {});
        modal.handle_change("name", "Widget");
        modal.handle_change("price", "9.99");
        modal.handle_change("stockQuantity", "5");
        modal.handle_change("rating", "4");

        let form = modal.form_data();
        assert_eq!(form.name, "Widget");
        assert_eq!(form.price, 9.99);
        assert_eq!(form.stock_quantity, 5);
        assert_eq!(form.rating, 4.0);

        let values: Vec<String> = modal
            .render()
            .unwrap()
            .inputs
            .into_iter()
            .map(|input| input.value)
            .collect();
        assert_eq!(values, vec!["Widget", "9.99", "5", "4"]);
    }

    #[test]
    fn test_numeric_inputs_coerce_empty_and_garbage_to_zero() {
        let mut modal = CreateProductModal::new(true, || {}, |_| {});
        modal.handle_change("price", "12.5");
        modal.handle_change("price", "");
        assert_eq!(modal.form_data().price, 0.0);

        modal.handle_change("rating", "abc");
        assert_eq!(modal.form_data().rating, 0.0);

        modal.handle_change("stockQuantity", "7.9");
        assert_eq!(modal.form_data().stock_quantity, 7);
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut modal = CreateProductModal::new(true, || {}, |_| {});
        let before = modal.form_data().clone();
        modal.handle_change("colour", "red");
        assert_eq!(modal.form_data(), &before);
    }

    #[test]
    fn test_submit_calls_create_once_then_resets_and_closes() {
        let created = RefCell::new(Vec::new());
        let closed = Cell::new(0);
        let mut modal = CreateProductModal::new(
            true,
            || closed.set(closed.get() + 1),
            |form| created.borrow_mut().push(form),
        );
        modal.handle_change("name", "Widget");
        modal.handle_change("price", "9.99");
        modal.handle_change("stockQuantity", "5");
        modal.handle_change("rating", "4");
        let submitted_id = modal.form_data().product_id.clone();

        modal.submit();

        let created = created.borrow();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].name, "Widget");
        assert_eq!(created[0].price, 9.99);
        assert_eq!(created[0].product_id, submitted_id);
        assert_eq!(closed.get(), 1);

        assert!(is_blank(modal.form_data()));
        assert_ne!(modal.form_data().product_id, submitted_id);
    }

    #[test]
    fn test_submit_with_empty_required_input_is_ignored() {
        let creates = Cell::new(0);
        let closed = Cell::new(0);
        let mut modal = CreateProductModal::new(
            true,
            || closed.set(closed.get() + 1),
            |_| creates.set(creates.get() + 1),
        );

        modal.submit();
        assert_eq!(creates.get(), 0);
        assert_eq!(closed.get(), 0);

        modal.handle_change("name", "Widget");
        modal.handle_change("price", "9.99");
        modal.handle_change("stockQuantity", "0");
        modal.handle_change("rating", "4");
        assert!(!modal.is_complete());
        modal.submit();
        assert_eq!(creates.get(), 0);
        assert_eq!(closed.get(), 0);
        assert_eq!(modal.form_data().name, "Widget");

        modal.handle_change("stockQuantity", "2");
        assert!(modal.is_complete());
        modal.submit();
        assert_eq!(creates.get(), 1);
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn test_cancel_resets_and_closes_without_creating() {
        let creates = Cell::new(0);
        let closed = Cell::new(0);
        let mut modal = CreateProductModal::new(
            true,
            || closed.set(closed.get() + 1),
            |_| creates.set(creates.get() + 1),
        );
        modal.handle_change("name", "Draft");
        modal.handle_change("stockQuantity", "3");
        let original_id = modal.form_data().product_id.clone();

        modal.cancel();

        assert_eq!(creates.get(), 0);
        assert_eq!(closed.get(), 1);
        assert!(is_blank(modal.form_data()));
        assert_ne!(modal.form_data().product_id, original_id);
    }

    #[test]
    fn test_closed_modal_ignores_events() {
        let creates = Cell::new(0);
        let closed = Cell::new(0);
        let mut modal = CreateProductModal::new(
            false,
            || closed.set(closed.get() + 1),
            |_| creates.set(creates.get() + 1),
        );

        modal.handle_change("name", "Ghost");
        modal.submit();
        modal.cancel();

        assert_eq!(creates.get(), 0);
        assert_eq!(closed.get(), 0);
        assert!(modal.form_data().name.is_empty());
    }

    #[test]
    fn test_values_survive_close_and_reopen() {
        let mut modal = CreateProductModal::new(true, || {}, |_| {});
        modal.handle_change("name", "Kept");
        modal.set_open(false);
        assert!(!modal.is_open());
        modal.set_open(true);
        assert_eq!(modal.form_data().name, "Kept");
    }

    #[test]
    fn test_form_data_converts_to_create_payload() {
        let form = ProductFormData {
            product_id: "abc".to_string(),
            name: "Widget".to_string(),
            price: 9.99,
            stock_quantity: 5,
            rating: 4.0,
        };
        let payload = NewProduct::from(form);
        assert_eq!(payload.product_id.as_deref(), Some("abc"));
        assert_eq!(payload.stock_quantity, 5);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["productId"], "abc");
        assert_eq!(json["stockQuantity"], 5);
    }

    #[test]
    fn test_parse_number_prefixes() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("  3.5kg"), 3.5);
        assert_eq!(parse_number("-2"), -2.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("1e"), 1.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
    }
}
