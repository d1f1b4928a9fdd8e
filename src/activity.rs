//! A canned digest of the group's past activity
//!
//! These figures are reported, not computed: the planner keeps no history to
//! derive them from, so whoever assembles the dataset supplies the digest
//! ready-made and the analytics view just displays it.

use serde::{Deserialize, Serialize};

/// One month of past activity
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyActivity {
    /// Short month label, e.g. "Jan"
    pub month: String,
    /// How many events took place that month
    pub events: u32,
    /// Average share of the group that attended, in percent
    pub attendance: u32,
}

/// The prepared digest the analytics view displays
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityReport {
    /// The month-by-month series, oldest first
    pub months: Vec<MonthlyActivity>,
    /// Events held over the whole covered period
    pub total_events: u32,
    /// Group-wide attendance rate over the covered period, in percent
    pub average_attendance: u32,
    /// The place that hosted the most events
    pub top_location: String,
    /// How many events the top location hosted
    pub top_location_events: u32,
}
