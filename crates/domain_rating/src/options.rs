//! Quote option generation and the comparison board
//!
//! One [`QuoteOption`] is produced per term length in the fixed offering,
//! by running the rate calculator with that term substituted into a single
//! [`RateInput`] template. The full set is regenerated (never patched) on
//! any input change; at five options there is nothing worth memoizing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::Money;

use crate::error::RatingError;
use crate::rate::{calculate_rate, RateInput};

/// Term lengths offered, in display order
pub const TERM_YEAR_OPTIONS: [u32; 5] = [10, 15, 20, 25, 30];

/// The term the product team designates "Most Popular"
const POPULAR_TERM_YEARS: u32 = 20;

/// One row of the quote comparison grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOption {
    /// Deterministic key, `term-{years}`
    pub id: String,
    /// Display label, e.g. "20-Year Term"
    pub term_length: String,
    /// Term length in years
    pub term_years: u32,
    /// Coverage amount this option was priced at
    pub coverage: Money,
    /// Monthly premium
    pub monthly_rate: Money,
    /// Annual premium
    pub annual_rate: Money,
    /// Fixed business rule: true iff the 20-year term
    pub popular: bool,
    /// Marketing badge, present only for the 10- and 20-year terms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
}

impl QuoteOption {
    fn for_term(input: &RateInput, term_years: u32) -> Self {
        let rate = calculate_rate(&input.with_term_years(term_years));
        Self {
            id: format!("term-{term_years}"),
            term_length: format!("{term_years}-Year Term"),
            term_years,
            coverage: input.coverage,
            monthly_rate: rate.monthly,
            annual_rate: rate.annual,
            popular: term_years == POPULAR_TERM_YEARS,
            savings: match term_years {
                10 => Some("Best Value".to_string()),
                20 => Some("Most Popular".to_string()),
                _ => None,
            },
        }
    }
}

/// Generates the fixed matrix of quote options for one input template
///
/// Always returns exactly one option per entry of [`TERM_YEAR_OPTIONS`],
/// in ascending term order, regardless of the input values.
pub fn generate_options(input: &RateInput) -> Vec<QuoteOption> {
    TERM_YEAR_OPTIONS
        .iter()
        .map(|&term_years| QuoteOption::for_term(input, term_years))
        .collect()
}

/// The comparison grid's model: generated options plus sticky selection
///
/// Selection survives regeneration by id. When regeneration observes no
/// selection at all, the 20-year option is auto-selected; the ids are
/// stable across regenerations because the term set is fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonBoard {
    options: Vec<QuoteOption>,
    selected_id: Option<String>,
}

impl ComparisonBoard {
    /// Creates an empty board with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds all options from the given input
    ///
    /// Auto-selects `term-20` if no option was previously selected.
    pub fn regenerate(&mut self, input: &RateInput) {
        self.options = generate_options(input);
        if self.selected_id.is_none() {
            debug!(term_years = POPULAR_TERM_YEARS, "auto-selecting default quote option");
            self.selected_id = Some(format!("term-{POPULAR_TERM_YEARS}"));
        }
    }

    /// Selects an option by id
    pub fn select(&mut self, id: &str) -> Result<(), RatingError> {
        if !self.options.iter().any(|option| option.id == id) {
            return Err(RatingError::UnknownOption(id.to_string()));
        }
        self.selected_id = Some(id.to_string());
        Ok(())
    }

    /// Returns the generated options in display order
    pub fn options(&self) -> &[QuoteOption] {
        &self.options
    }

    /// Returns the selected option id, if any
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Returns the selected option, if any
    pub fn selected(&self) -> Option<&QuoteOption> {
        let id = self.selected_id.as_deref()?;
        self.options.iter().find(|option| option.id == id)
    }

    /// Returns the coverage the current options were priced at
    pub fn coverage(&self) -> Option<Money> {
        self.options.first().map(|option| option.coverage)
    }
}
