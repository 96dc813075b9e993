//! Order summary, payment form rules and the payment boundary.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::Course;
use crate::error::{LhError, Result};
use crate::forms::{Form, Notice, is_missing};

pub const DEFAULT_TAX_RATE: f64 = 0.10;

/// Round to whole cents.
#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub course_id: String,
    pub course_title: String,
    pub subtotal: f64,
    pub tax_rate: f64,
    pub tax: f64,
    pub total: f64,
    /// Amount saved against the original price, if one is listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<f64>,
}

impl OrderSummary {
    #[must_use]
    pub fn for_course(course: &Course, tax_rate: f64) -> Self {
        let subtotal = course.price;
        let tax = round_cents(subtotal * tax_rate);
        let savings = course
            .original_price
            .filter(|original| *original > subtotal)
            .map(|original| round_cents(original - subtotal));
        Self {
            course_id: course.id.clone(),
            course_title: course.title.clone(),
            subtotal,
            tax_rate,
            tax,
            total: round_cents(subtotal + tax),
            savings,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub country: String,
    pub state: String,
    pub zip_code: String,
    pub agree_to_terms: bool,
}

impl PaymentForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("email", &self.email),
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("card number", &self.card_number),
            ("expiry date", &self.expiry_date),
            ("cvv", &self.cvv),
            ("country", &self.country),
            ("state", &self.state),
            ("zip code", &self.zip_code),
        ]
        .into_iter()
        .filter(|(_, value)| is_missing(value))
        .map(|(name, _)| name)
        .collect()
    }

    /// Last four digits of the card, for receipts.
    #[must_use]
    pub fn card_last4(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(char::is_ascii_digit).collect();
        digits[digits.len().saturating_sub(4)..].iter().collect()
    }
}

impl Form for PaymentForm {
    fn validate(&self) -> std::result::Result<(), Notice> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(Notice::destructive(
                "Missing Information",
                format!("Please fill in: {}.", missing.join(", ")),
            ));
        }
        if !self.agree_to_terms {
            return Err(Notice::terms_required());
        }
        Ok(())
    }

    fn success(&self) -> Notice {
        Notice::success(
            "Payment Successful!",
            "You now have access to the course. Happy learning!",
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub reference: String,
    pub course_id: String,
    pub amount: f64,
    pub card_last4: String,
    pub issued_at: DateTime<Utc>,
}

/// External payment boundary.
pub trait PaymentGateway {
    fn charge(&self, order: &OrderSummary, form: &PaymentForm) -> Result<Receipt>;
}

/// Accepts every charge immediately. No money moves.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedGateway;

impl PaymentGateway for SimulatedGateway {
    fn charge(&self, order: &OrderSummary, form: &PaymentForm) -> Result<Receipt> {
        let issued_at = Utc::now();
        Ok(Receipt {
            reference: format!("LH-{}-{}", order.course_id, issued_at.format("%Y%m%d%H%M%S")),
            course_id: order.course_id.clone(),
            amount: order.total,
            card_last4: form.card_last4(),
            issued_at,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutOutcome {
    pub summary: OrderSummary,
    pub notice: Notice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
}

/// Validate the form, then charge through `gateway`.
///
/// A rejected form is an `Ok` outcome with a destructive notice and no
/// receipt; gateway failures propagate as errors.
pub fn checkout(
    course: &Course,
    form: &PaymentForm,
    tax_rate: f64,
    gateway: &dyn PaymentGateway,
) -> Result<CheckoutOutcome> {
    if !(0.0..1.0).contains(&tax_rate) {
        return Err(LhError::Config(format!("tax rate {tax_rate} outside [0, 1)")));
    }
    let summary = OrderSummary::for_course(course, tax_rate);

    if let Err(notice) = form.validate() {
        debug!(target: "checkout", course_id = %course.id, reason = %notice.description, "payment form rejected");
        return Ok(CheckoutOutcome {
            summary,
            notice,
            receipt: None,
        });
    }

    let receipt = gateway.charge(&summary, form)?;
    info!(target: "checkout", course_id = %course.id, reference = %receipt.reference, "payment accepted");
    Ok(CheckoutOutcome {
        summary,
        notice: form.success(),
        receipt: Some(receipt),
    })
}
