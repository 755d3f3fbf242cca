//! Results page model
//!
//! Decodes the shared-state location, runs the calculation through a
//! session and formats the weight and cost report.

use platekit_core::units::{format_currency, format_mm, format_weight};
use platekit_core::{decode_location, LayoutInputs};
use platekit_layout::{LayoutResult, LayoutSession, MaterialShare};
use platekit_settings::DisplaySettings;
use std::fmt;

/// What the results page shows
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// No usable input parameter yet
    Loading,
    /// Inputs decoded but could not be laid out
    Invalid { message: String },
    Ready(ResultsReport),
}

impl ResultsView {
    /// Build the view for a results location, query string or bare value
    pub fn from_location(
        location: &str,
        session: &mut LayoutSession,
        display: &DisplaySettings,
    ) -> Self {
        match decode_location(location) {
            Ok(inputs) => Self::from_inputs(&inputs, session, display),
            Err(e) => {
                tracing::warn!("Results parameter not usable: {}", e);
                ResultsView::Loading
            }
        }
    }

    pub fn from_inputs(
        inputs: &LayoutInputs,
        session: &mut LayoutSession,
        display: &DisplaySettings,
    ) -> Self {
        match session.recompute(inputs) {
            Ok(result) => ResultsView::Ready(ResultsReport::new(result.clone(), display.clone())),
            Err(e) => {
                tracing::warn!("Rejected layout inputs: {}", e);
                ResultsView::Invalid {
                    message: e.to_string(),
                }
            }
        }
    }

    pub fn report(&self) -> Option<&ResultsReport> {
        match self {
            ResultsView::Ready(report) => Some(report),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ResultsView::Loading)
    }
}

/// Formatted calculation results
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsReport {
    pub result: LayoutResult,
    pub display: DisplaySettings,
}

impl ResultsReport {
    pub fn new(result: LayoutResult, display: DisplaySettings) -> Self {
        Self { result, display }
    }

    /// Report lines in display order
    pub fn lines(&self) -> Vec<String> {
        let layout = &self.result.layout;
        let summary = &self.result.summary;
        vec![
            format!("Material: {}", self.result.material),
            format!("Number of Used Plates: {}", layout.num_plates_required),
            format!("Developed Length: {}", format_mm(layout.developed_length)),
            format!("Courses per Plate: {}", layout.units_per_plate),
            format!("Offcut per Plate: {}", format_mm(layout.offcut_length)),
            self.share_line("Total Plate", &summary.total),
            self.share_line("Used Plate", &summary.used),
            self.share_line("Offcut", &summary.offcut),
        ]
    }

    fn share_line(&self, label: &str, share: &MaterialShare) -> String {
        let decimals = self.display.decimal_places;
        format!(
            "{} Weight: {} | Cost: {}",
            label,
            format_weight(share.weight, decimals),
            format_currency(&self.display.currency_symbol, share.cost, decimals)
        )
    }
}

impl fmt::Display for ResultsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
