use crate::catalog::Course;
use std::num::NonZeroU32;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Buyer details collected for the selected course
///
/// A form only exists while a course is selected, so every submitted
/// purchase refers to exactly one catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseForm {
    pub course: Course,
    pub name: String,
    pub address: String,
    pub contact: String,
    pub quantity: NonZeroU32,
}

/// Validated purchase handed to the contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub course_id: u64,
    pub quantity: NonZeroU32,
    pub name: String,
    pub address: String,
    pub contact: String,
}

impl PurchaseForm {
    /// Open a blank form for `course` (empty fields, quantity 1)
    pub fn new(course: Course) -> Self {
        PurchaseForm {
            course,
            name: String::new(),
            address: String::new(),
            contact: String::new(),
            quantity: NonZeroU32::MIN,
        }
    }

    pub fn set_quantity(&mut self, input: &str) {
        self.quantity = parse_quantity(input);
    }

    pub fn to_request(&self) -> Result<PurchaseRequest, FormError> {
        let name = required("Name", &self.name)?;
        let address = required("Address", &self.address)?;
        let contact = required("Contact", &self.contact)?;

        Ok(PurchaseRequest {
            course_id: self.course.id,
            quantity: self.quantity,
            name,
            address,
            contact,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(value.to_string())
}

/// Parse the quantity input.
///
/// Reads the leading decimal digits; anything else, zero included, falls back to 1.
pub fn parse_quantity(input: &str) -> NonZeroU32 {
    let digits: String = input
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .unwrap_or(NonZeroU32::MIN)
}
