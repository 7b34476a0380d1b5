//! Rendering capability used by the directory pipeline.
//!
//! The loader and filter engine never paint anything themselves. They hand
//! records, indicator changes and selector options to a [`View`], and the
//! terminal side decides how that looks.

use crate::directory::FilterIndex;
use crate::domain::UserRecord;

/// Status indicators shown outside the card area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Visible from startup until the directory request settles.
    Loading,
    /// Visible only after a failed load. Never hidden again.
    Error,
}

/// Surface that displays cards, indicators and selector options.
pub trait View {
    /// Replaces every rendered card with one card per record, in order.
    ///
    /// Expansion state of the previous cards is discarded; new cards start
    /// collapsed.
    fn render_cards(&mut self, records: &[&UserRecord]);

    /// Shows or hides a status indicator.
    fn set_indicator(&mut self, kind: Indicator, visible: bool);

    /// Appends the index's cities and companies to the two selectors.
    fn populate_filters(&mut self, index: &FilterIndex);
}
