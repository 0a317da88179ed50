//! Line-mode calculator session.
//!
//! Each line either types into a field, moves the rate slider, picks a term
//! or redraws. Moving from one currency field to anything else blurs it,
//! which redraws its text from the committed value.

use super::{screen, ui};
use crate::core::session::Calculator;
use crate::core::settings::LoanTerm;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  price <text>     type into the vehicle price field
  down <text>      type into the down payment field
  rate <percent>   move the interest rate slider (0-20, steps of 0.25)
  term <months>    choose 48, 60, 72 or 84
  show             redraw the screen
  reset            restore the default inputs
  help             show this help
  quit             leave the calculator";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    None,
    VehiclePrice,
    DownPayment,
}

#[derive(Debug, PartialEq)]
enum Action<'a> {
    VehiclePrice(&'a str),
    DownPayment(&'a str),
    InterestRate(&'a str),
    LoanTerm(&'a str),
    Show,
    Reset,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Action<'_> {
    let line = line.trim();
    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };
    match cmd.to_lowercase().as_str() {
        "price" | "p" => Action::VehiclePrice(arg),
        "down" | "d" => Action::DownPayment(arg),
        "rate" | "r" => Action::InterestRate(arg),
        "term" | "t" => Action::LoanTerm(arg),
        "" | "show" | "s" => Action::Show,
        "reset" => Action::Reset,
        "help" | "h" | "?" => Action::Help,
        "quit" | "q" | "exit" => Action::Quit,
        _ => Action::Unknown(cmd),
    }
}

struct Session<'a, 'b> {
    calc: &'b mut Calculator<'a>,
    focus: Focus,
}

impl Session<'_, '_> {
    /// Blurs the focused field unless `next` keeps focus on it.
    fn move_focus(&mut self, next: Focus) {
        if self.focus == next {
            return;
        }
        match self.focus {
            Focus::VehiclePrice => self.calc.blur_vehicle_price(),
            Focus::DownPayment => self.calc.blur_down_payment(),
            Focus::None => {}
        }
        debug!(from = ?self.focus, to = ?next, "Focus moved");
        self.focus = next;
    }
}

/// Runs the session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(calc: &mut Calculator, input: R, out: &mut W) -> Result<()> {
    let mut session = Session {
        calc,
        focus: Focus::None,
    };

    writeln!(out, "{}", screen::render(session.calc))?;
    let hint = ui::style_text("Type `help` for commands.", ui::StyleType::Subtle);
    writeln!(out, "{hint}")?;

    for line in input.lines() {
        let line = line?;
        let action = parse_line(&line);
        debug!(?action, "Handling input");

        match action {
            Action::VehiclePrice(raw) => {
                session.move_focus(Focus::VehiclePrice);
                session.calc.set_vehicle_price(raw);
            }
            Action::DownPayment(raw) => {
                session.move_focus(Focus::DownPayment);
                session.calc.set_down_payment(raw);
            }
            Action::InterestRate(raw) => {
                session.move_focus(Focus::None);
                match raw.trim_end_matches('%').trim().parse::<f64>() {
                    Ok(value) => {
                        session.calc.set_interest_rate(value);
                    }
                    Err(_) => {
                        let msg = "Rate must be a number, e.g. `rate 6.5`";
                        writeln!(out, "{}", ui::style_text(msg, ui::StyleType::Error))?;
                        continue;
                    }
                }
            }
            Action::LoanTerm(raw) => {
                session.move_focus(Focus::None);
                match raw.parse::<LoanTerm>() {
                    Ok(term) => {
                        session.calc.set_loan_term(term);
                    }
                    Err(e) => {
                        writeln!(out, "{}", ui::style_text(&e.to_string(), ui::StyleType::Error))?;
                        continue;
                    }
                }
            }
            Action::Show => session.move_focus(Focus::None),
            Action::Reset => {
                session.move_focus(Focus::None);
                session.calc.reset();
            }
            Action::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Action::Quit => break,
            Action::Unknown(cmd) => {
                let msg = format!("Unknown command `{cmd}`. Type `help` for commands.");
                writeln!(out, "{}", ui::style_text(&msg, ui::StyleType::Error))?;
                continue;
            }
        }

        writeln!(out, "{}", ui::separator())?;
        writeln!(out, "{}", screen::render(session.calc))?;
    }

    session.move_focus(Focus::None);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::Settings;
    use crate::store::memory::MemoryStore;
    use std::io::Cursor;

    fn run_script(store: &MemoryStore, script: &str) -> (Settings, String, String, String) {
        let mut calc = Calculator::load(store);
        let mut out = Vec::new();
        run(&mut calc, Cursor::new(script), &mut out).unwrap();
        (
            calc.get_settings(),
            calc.vehicle_price_text().to_string(),
            calc.down_payment_text().to_string(),
            String::from_utf8(out).unwrap(),
        )
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("price 35,000"), Action::VehiclePrice("35,000"));
        assert_eq!(parse_line("  down  "), Action::DownPayment(""));
        assert_eq!(parse_line("RATE 7.25%"), Action::InterestRate("7.25%"));
        assert_eq!(parse_line("t 72"), Action::LoanTerm("72"));
        assert_eq!(parse_line(""), Action::Show);
        assert_eq!(parse_line("q"), Action::Quit);
        assert_eq!(parse_line("frobnicate 3"), Action::Unknown("frobnicate"));
    }

    #[test]
    fn test_script_commits_all_inputs() {
        let store = MemoryStore::new();
        let (settings, _, _, output) =
            run_script(&store, "price $42,000\ndown 2000\nrate 7.3\nterm 84\nquit\n");

        assert_eq!(settings.vehicle_price, 42000);
        assert_eq!(settings.down_payment, 2000);
        assert_eq!(settings.interest_rate, 7.25);
        assert_eq!(settings.loan_term, LoanTerm::EightyFour);
        assert!(output.contains("$40,000"));
        assert_eq!(Settings::load_or_default(&store), settings);
    }

    #[test]
    fn test_text_stays_staged_while_focused() {
        let store = MemoryStore::new();
        let mut calc = Calculator::load(&store);
        let mut out = Vec::new();
        // End of input blurs the field; the staged text only survives in the
        // screens drawn while it had focus.
        run(&mut calc, Cursor::new("price 0\nprice 04\n"), &mut out).unwrap();
        assert_eq!(calc.get_settings().vehicle_price, 4);
        assert_eq!(calc.vehicle_price_text(), "4");

        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("04"));
    }

    #[test]
    fn test_leaving_a_field_blurs_it() {
        let store = MemoryStore::new();
        let (settings, price_text, down_text, _) =
            run_script(&store, "down\nprice 035000\nterm 48\n");

        assert_eq!(settings.down_payment, 0);
        assert_eq!(down_text, "0");
        assert_eq!(settings.vehicle_price, 35000);
        assert_eq!(price_text, "35000");
    }

    #[test]
    fn test_bad_input_is_reported_and_ignored() {
        let store = MemoryStore::new();
        let (settings, _, _, output) = run_script(&store, "rate fast\nterm 36\nwhat\n");

        assert_eq!(settings, Settings::default());
        assert!(output.contains("Rate must be a number"));
        assert!(output.contains("Invalid loan term"));
        assert!(output.contains("Unknown command `what`"));
    }

    #[test]
    fn test_reset_command() {
        let store = MemoryStore::new();
        let (settings, _, _, _) = run_script(&store, "price 1\nterm 48\nreset\n");
        assert_eq!(settings, Settings::default());
    }
}
