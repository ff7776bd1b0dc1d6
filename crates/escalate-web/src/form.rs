//! Calculator form: query-string parsing and HTML rendering.
//!
//! Query parameters arrive as text and are coerced here, once. Missing
//! parameters take defaults: `op = r2b`, `r = 5` (percent), `b = 4000`, and
//! the configured lease for `v`, `y`, `d`.

use escalate_lease::{Conversion, LeaseParameters, Operation};
use serde::Deserialize;

use crate::error::ApiError;

/// Default rate shown on the form, in percent.
pub const DEFAULT_RATE_PERCENT: f64 = 5.0;

/// Default budget shown on the form.
pub const DEFAULT_BUDGET: f64 = 4000.0;

/// Raw query parameters of `GET /`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormQuery {
    pub op: Option<String>,
    /// Escalation rate in percent.
    pub r: Option<String>,
    pub b: Option<String>,
    pub v: Option<String>,
    pub y: Option<String>,
    pub d: Option<String>,
}

/// Form input after coercion and defaulting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormInput {
    pub operation: Operation,
    /// Rate as a fraction.
    pub rate: f64,
    pub budget: f64,
    pub params: LeaseParameters,
}

impl FormInput {
    /// Defaults for a form with nothing filled in.
    pub fn defaults(params: LeaseParameters) -> Self {
        Self {
            operation: Operation::default(),
            rate: DEFAULT_RATE_PERCENT / 100.0,
            budget: DEFAULT_BUDGET,
            params,
        }
    }

    /// The value the selected operation converts.
    pub fn value(&self) -> f64 {
        match self.operation {
            Operation::RateToBudget => self.rate,
            Operation::BudgetToRate => self.budget,
        }
    }
}

/// A query with at least one unusable field.
///
/// `input` keeps every field that did parse, so the form can be re-rendered
/// with what the user sent.
#[derive(Debug)]
pub struct InvalidForm {
    pub input: FormInput,
    pub error: ApiError,
}

impl FormQuery {
    /// Coerces the query into typed input, filling gaps from `defaults`.
    ///
    /// Fields are coerced independently; the first failure is reported.
    pub fn parse(&self, defaults: LeaseParameters) -> Result<FormInput, InvalidForm> {
        let mut input = FormInput::defaults(defaults);
        let mut errors = Vec::new();

        if let Some(op) = present(&self.op) {
            match op.parse::<Operation>() {
                Ok(operation) => input.operation = operation,
                Err(e) => errors.push(ApiError::Validation(e.to_string())),
            }
        }
        if let Some(r) = present(&self.r) {
            match parse_number("r", r) {
                Ok(percent) => input.rate = percent / 100.0,
                Err(e) => errors.push(e),
            }
        }
        if let Some(b) = present(&self.b) {
            match parse_number("b", b) {
                Ok(budget) => input.budget = budget,
                Err(e) => errors.push(e),
            }
        }
        if let Some(v) = present(&self.v) {
            match parse_number("v", v) {
                Ok(base_rental) => input.params.base_rental = base_rental,
                Err(e) => errors.push(e),
            }
        }
        if let Some(y) = present(&self.y) {
            match parse_count("y", y) {
                Ok(term_years) => input.params.term_years = term_years,
                Err(e) => errors.push(e),
            }
        }
        if let Some(d) = present(&self.d) {
            match parse_count("d", d) {
                Ok(cycle_years) => input.params.cycle_years = cycle_years,
                Err(e) => errors.push(e),
            }
        }

        match errors.into_iter().next() {
            None => Ok(input),
            Some(error) => Err(InvalidForm { input, error }),
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_number(name: &str, raw: &str) -> Result<f64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::Validation(format!("invalid {name}: '{raw}' is not a number")))
}

fn parse_count(name: &str, raw: &str) -> Result<u32, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::Validation(format!("invalid {name}: '{raw}' is not a whole number"))
    })
}

/// Values displayed by the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub operation: Operation,
    pub rate_percent: f64,
    pub budget: f64,
    pub params: LeaseParameters,
    pub error: Option<String>,
}

impl FormView {
    /// View of a successful conversion.
    pub fn from_conversion(conversion: &Conversion) -> Self {
        Self {
            operation: conversion.operation,
            rate_percent: conversion.rate_percent(),
            budget: conversion.budget,
            params: conversion.params,
            error: None,
        }
    }

    /// View of input whose conversion failed; the counterpart reads zero.
    pub fn from_failure(input: &FormInput, error: impl Into<String>) -> Self {
        let (rate, budget) = match input.operation {
            Operation::RateToBudget => (input.rate, 0.0),
            Operation::BudgetToRate => (0.0, input.budget),
        };
        Self {
            operation: input.operation,
            rate_percent: rate * 100.0,
            budget,
            params: input.params,
            error: Some(error.into()),
        }
    }

    /// Renders the form page.
    pub fn render(&self) -> String {
        let checked = |op: Operation| {
            if self.operation == op {
                "checked"
            } else {
                ""
            }
        };
        let error = self
            .error
            .as_deref()
            .map(|e| format!("<p class=\"error\">{}</p>", escape_html(e)))
            .unwrap_or_default();

        FORM_TEMPLATE
            .replace("{{r2b}}", checked(Operation::RateToBudget))
            .replace("{{b2r}}", checked(Operation::BudgetToRate))
            .replace("{{v}}", &escape_html(&self.params.base_rental.to_string()))
            .replace("{{y}}", &self.params.term_years.to_string())
            .replace("{{d}}", &self.params.cycle_years.to_string())
            .replace("{{r}}", &escape_html(&self.rate_percent.to_string()))
            .replace("{{b}}", &escape_html(&self.budget.to_string()))
            .replace("{{err}}", &error)
    }
}

/// Escapes text for HTML element and attribute content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const FORM_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Rental Budget Calculator</title>
<style>
body { font-family: sans-serif; max-width: 32em; margin: 2em auto; }
label { display: block; margin: 0.4em 0; }
input[type=text] { width: 8em; }
.error { color: #b00020; }
</style>
</head>
<body>
<h1>Rental Budget Calculator</h1>
<form method="get" action="/">
<label>First year rental (v) <input type="text" name="v" value="{{v}}"></label>
<label>Rental years (y) <input type="text" name="y" value="{{y}}"></label>
<label>Years per cycle (d) <input type="text" name="d" value="{{d}}"></label>
<label><input type="radio" name="op" value="r2b" {{r2b}}> Cyclic increment (r, %) <input type="text" name="r" value="{{r}}"></label>
<label><input type="radio" name="op" value="b2r" {{b2r}}> Rental budget (b) <input type="text" name="b" value="{{b}}"></label>
<button type="submit">Calculate</button>
</form>
{{err}}
</body>
</html>
"#;
