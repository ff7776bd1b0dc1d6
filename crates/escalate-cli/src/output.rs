//! Output formatting utilities.

use colored::Colorize;
use escalate_lease::{Conversion, EscalateConfig, LeaseParameters};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints a conversion in the requested format.
pub fn print_conversion(conversion: &Conversion, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Minimal => println!("{}", conversion.result()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(conversion)?),
        OutputFormat::Table => print_table(&summary_rows(conversion)),
    }
    Ok(())
}

/// Key/value rows describing a conversion.
pub fn summary_rows(conversion: &Conversion) -> Vec<KeyValue> {
    let params = &conversion.params;
    vec![
        KeyValue::new("Operation", conversion.operation.code()),
        KeyValue::new("First year rental", format!("{:.2}", params.base_rental)),
        KeyValue::new("Rental years", params.term_years.to_string()),
        KeyValue::new("Years per cycle", params.cycle_years.to_string()),
        KeyValue::new(
            "Cyclic increment",
            format!("{:.4}%", conversion.rate_percent()),
        ),
        KeyValue::new("Rental budget", format!("{:.2}", conversion.budget)),
    ]
}

/// Prints the synopsis with two worked examples, computed live with the
/// configured solver settings.
pub fn print_usage(config: &EscalateConfig) {
    let converter = config.converter_for(LeaseParameters::new(220.0, 15, 3));
    let example = |result: escalate_lease::LeaseResult<f64>| match result {
        Ok(value) => format!("{value:.6}"),
        Err(err) => err.to_string(),
    };

    println!("synopsis:");
    println!(
        "  $ escalate r2b increment(r) [first_year_rental(v) [rental_years(y) [years_per_cycle(d)]]]"
    );
    println!(
        "  $ escalate b2r budget(b) [first_year_rental(v) [rental_years(y) [years_per_cycle(d)]]]"
    );
    println!("examples:");
    println!("  $ escalate r2b 0.05 220 15 3");
    println!("  {}", example(converter.rental_to_budget(0.05)));
    println!("  $ escalate b2r 4000.0 220 15 3");
    println!("  {}", example(converter.budget_to_rate(4000.0)));
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) {
    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escalate_lease::{LeaseParameters, Operation};

    #[test]
    fn test_summary_rows() {
        let conversion = Conversion {
            operation: Operation::BudgetToRate,
            rate: 0.082_886_965_616_862_26,
            budget: 4000.0,
            params: LeaseParameters::default(),
        };
        let rows = summary_rows(&conversion);
        assert_eq!(rows[0].value, "b2r");
        assert_eq!(rows[4].value, "8.2887%");
        assert_eq!(rows[5].value, "4000.00");
    }
}
