//! Renders the calculator screen.
use super::ui;
use crate::core::format;
use crate::core::session::Calculator;

const TITLE: &str = "Auto Finance Calculator";
const SUBTITLE: &str = "Estimate your monthly car payment";
const DISCLAIMER: &str =
    "This calculator provides estimates only. Actual rates and terms may vary.";

pub fn render(calc: &Calculator) -> String {
    let settings = calc.get_settings();
    let est = calc.estimate();

    let mut inputs = ui::new_styled_table();
    inputs.set_header(vec![
        ui::header_cell("Input"),
        ui::header_cell("Entered"),
        ui::header_cell("Value"),
    ]);
    inputs.add_row(vec![
        ui::label_cell("Est. Vehicle Price"),
        ui::staged_cell(
            calc.vehicle_price_text(),
            calc.vehicle_price_text() == settings.vehicle_price.to_string(),
        ),
        ui::amount_cell(format::currency(settings.vehicle_price as f64)),
    ]);
    inputs.add_row(vec![
        ui::label_cell("Down Payment"),
        ui::staged_cell(
            calc.down_payment_text(),
            calc.down_payment_text() == settings.down_payment.to_string(),
        ),
        ui::amount_cell(format::currency(settings.down_payment as f64)),
    ]);
    inputs.add_row(vec![
        ui::label_cell("Total Finance Cost"),
        ui::blank_cell(),
        ui::amount_cell(format::currency(est.financed_amount)),
    ]);
    inputs.add_row(vec![
        ui::label_cell("Interest Rate"),
        ui::blank_cell(),
        ui::amount_cell(format::percent(settings.interest_rate)),
    ]);
    inputs.add_row(vec![
        ui::label_cell("Loan Term"),
        ui::blank_cell(),
        ui::amount_cell(format::loan_term(settings.loan_term)),
    ]);

    let mut totals = ui::new_styled_table();
    totals.add_row(vec![
        ui::label_cell("Estimated Monthly Payment"),
        ui::highlight_cell(format!(
            "{} per month",
            format::currency_with_cents(est.monthly_payment)
        )),
    ]);
    totals.add_row(vec![
        ui::label_cell("Total of payments"),
        ui::amount_cell(format::currency(est.total_of_payments)),
    ]);
    totals.add_row(vec![
        ui::label_cell("Total interest"),
        ui::amount_cell(format::currency(est.total_interest)),
    ]);

    let mut output = format!(
        "{}\n{}\n\n",
        ui::style_text(TITLE, ui::StyleType::Title),
        ui::style_text(SUBTITLE, ui::StyleType::Subtle)
    );
    output.push_str(&inputs.to_string());
    output.push_str("\n\n");
    output.push_str(&totals.to_string());
    output.push_str("\n\n");
    output.push_str(&ui::style_text(DISCLAIMER, ui::StyleType::Subtle));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    #[test]
    fn test_render_defaults() {
        let store = MemoryStore::new();
        let calc = Calculator::load(&store);
        let screen = render(&calc);

        assert!(screen.contains(TITLE));
        assert!(screen.contains("$35,000"));
        assert!(screen.contains("$7,000"));
        assert!(screen.contains("$28,000"));
        assert!(screen.contains("6.50%"));
        assert!(screen.contains("60 months (5 years)"));
        assert!(screen.contains("$547.85 per month"));
        assert!(screen.contains("$32,871"));
        assert!(screen.contains("$4,871"));
        assert!(screen.contains(DISCLAIMER));
    }

    #[test]
    fn test_render_shows_staged_text() {
        let store = MemoryStore::new();
        let mut calc = Calculator::load(&store);
        calc.set_vehicle_price("040000");

        let screen = render(&calc);
        assert!(screen.contains("040000"));
        assert!(screen.contains("$40,000"));
    }
}
