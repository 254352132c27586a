//! Text rendering of a [`CartView`].

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{Alignment, Style, Theme, object::Columns},
};
use thiserror::Error;

use super::{CartBody, CartView, CheckoutView, LineView};

/// Errors that can occur while writing a view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// IO error
    #[error("IO error")]
    IO,
}

impl CartView {
    /// Writes the view as a table followed by the total, the badge and any pending checkout step.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IO`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ViewError> {
        match &self.body {
            CartBody::Empty { message } => {
                writeln!(out, "\n {message}").map_err(|_err| ViewError::IO)?;
            }
            CartBody::Lines(lines) => write_lines_table(&mut out, lines)?,
        }

        let label_width = "Total:".len();

        write_summary_line(&mut out, "Total:", &self.total, label_width)?;
        write_summary_line(&mut out, "Items:", &self.badge.to_string(), label_width)?;

        if let CheckoutView::ConfirmingPayment { total } = &self.checkout {
            writeln!(
                out,
                "\n Payment due: {total}. Select a payment method to place your order."
            )
            .map_err(|_err| ViewError::IO)?;
        }

        writeln!(out).map_err(|_err| ViewError::IO)
    }
}

fn write_lines_table(out: &mut impl io::Write, lines: &[LineView]) -> Result<(), ViewError> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Price", "Qty", "Total"]);

    for line in lines {
        builder.push_record([
            line.name.clone(),
            line.unit_price.clone(),
            line.quantity.to_string(),
            line.line_total.clone(),
        ]);
    }

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Columns::new(1..4), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| ViewError::IO)
}

/// Writes a summary line with a right-aligned label.
fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    value: &str,
    label_col_width: usize,
) -> Result<(), ViewError> {
    writeln!(out, " {label:>label_col_width$} {value}").map_err(|_err| ViewError::IO)
}
