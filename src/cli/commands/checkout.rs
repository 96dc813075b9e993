//! learnhub checkout - Buy a course

use clap::Args;
use console::style;
use tracing::{debug, info};

use crate::app::AppContext;
use crate::checkout::{CheckoutOutcome, OrderSummary, PaymentForm, SimulatedGateway, checkout};
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, robot_ok};
use crate::error::{LhError, Result};
use crate::utils::format_price;

#[derive(Args, Debug, Default)]
pub struct CheckoutArgs {
    /// Course to purchase
    pub course_id: String,

    /// Print the order summary without paying
    #[arg(long)]
    pub summary_only: bool,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub card_number: String,

    /// MM/YY
    #[arg(long, default_value = "")]
    pub expiry_date: String,

    #[arg(long, default_value = "")]
    pub cvv: String,

    #[arg(long, default_value = "")]
    pub country: String,

    #[arg(long, default_value = "")]
    pub state: String,

    #[arg(long, default_value = "")]
    pub zip_code: String,

    /// Accept the terms of service and privacy policy
    #[arg(long)]
    pub agree_terms: bool,
}

impl CheckoutArgs {
    fn payment_form(&self) -> PaymentForm {
        PaymentForm {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            card_number: self.card_number.clone(),
            expiry_date: self.expiry_date.clone(),
            cvv: self.cvv.clone(),
            country: self.country.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
            agree_to_terms: self.agree_terms,
        }
    }
}

pub fn run(ctx: &AppContext, args: &CheckoutArgs) -> Result<()> {
    let course = ctx.catalog.require(&args.course_id)?;
    let tax_rate = ctx.config.checkout.tax_rate;
    debug!(target: "checkout", course_id = %course.id, tax_rate, summary_only = args.summary_only, "checkout requested");

    if args.summary_only {
        let summary = OrderSummary::for_course(course, tax_rate);
        return match ctx.output_format {
            OutputFormat::Human => {
                emit_human(render_summary(&summary));
                Ok(())
            }
            OutputFormat::Json => emit_json(&robot_ok(&summary)),
            OutputFormat::Jsonl => emit_jsonl(&[&summary]),
            OutputFormat::Plain => {
                println!("{:.2}\t{:.2}\t{:.2}", summary.subtotal, summary.tax, summary.total);
                Ok(())
            }
        };
    }

    let outcome = checkout(course, &args.payment_form(), tax_rate, &SimulatedGateway)?;
    if !outcome.notice.is_success() {
        if ctx.output_format == OutputFormat::Human {
            emit_human(render_summary(&outcome.summary));
        }
        return Err(LhError::ValidationFailed(format!(
            "{}: {}",
            outcome.notice.title, outcome.notice.description
        )));
    }

    info!(target: "checkout", course_id = %course.id, total = outcome.summary.total, "course purchased");
    display_outcome(ctx, &outcome)
}

fn display_outcome(ctx: &AppContext, outcome: &CheckoutOutcome) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Human => {
            let mut layout = render_summary(&outcome.summary);
            layout.blank();
            layout.push_line(style(&outcome.notice.title).green().bold().to_string());
            layout.push_line(outcome.notice.description.clone());
            if let Some(receipt) = &outcome.receipt {
                layout
                    .blank()
                    .kv("Reference", &receipt.reference)
                    .kv("Card", &format!("ending in {}", receipt.card_last4))
                    .kv("Charged", &format_price(receipt.amount));
            }
            emit_human(layout);
            Ok(())
        }
        OutputFormat::Json => emit_json(&robot_ok(outcome)),
        OutputFormat::Jsonl => emit_jsonl(&[outcome]),
        OutputFormat::Plain => {
            let reference = outcome
                .receipt
                .as_ref()
                .map_or("-", |receipt| receipt.reference.as_str());
            println!("{}\t{:.2}\t{reference}", outcome.summary.course_id, outcome.summary.total);
            Ok(())
        }
    }
}

fn render_summary(summary: &OrderSummary) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title("Order Summary");
    layout
        .kv("Course", &summary.course_title)
        .kv("Subtotal", &format_price(summary.subtotal))
        .kv(
            &format!("Tax ({:.0}%)", summary.tax_rate * 100.0),
            &format_price(summary.tax),
        )
        .kv("Total", &format_price(summary.total));
    if let Some(savings) = summary.savings {
        layout.kv("You save", &format_price(savings));
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::DEFAULT_TAX_RATE;
    use crate::test_utils::fixtures::sample_catalog;

    #[test]
    fn args_map_onto_payment_form() {
        let args = CheckoutArgs {
            course_id: "1".to_string(),
            email: "a@b.c".to_string(),
            cvv: "123".to_string(),
            agree_terms: true,
            ..CheckoutArgs::default()
        };
        let form = args.payment_form();
        assert_eq!(form.email, "a@b.c");
        assert_eq!(form.cvv, "123");
        assert!(form.first_name.is_empty());
        assert!(form.agree_to_terms);
    }

    #[test]
    fn summary_layout_shows_tax_and_total() {
        let catalog = sample_catalog();
        let summary = OrderSummary::for_course(catalog.require("1").unwrap(), DEFAULT_TAX_RATE);
        let text = render_summary(&summary).build();
        assert!(text.contains("$89.99"));
        assert!(text.contains("Tax (10%)"));
        assert!(text.contains("$9.00"));
        assert!(text.contains("$98.99"));
        assert!(text.contains("$110.00"));
    }
}
