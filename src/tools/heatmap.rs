/// Operation for the recent-days heatmap
///
/// This module implements the "show last 7 days" menu entry.

use chrono::NaiveDate;
use crate::analytics::{AnalyticsEngine, Heatmap, DEFAULT_HEATMAP_WINDOW};
use crate::domain::Registry;

/// Heatmap of the last week ending at `today`
pub fn weekly_heatmap(analytics: &AnalyticsEngine, registry: &Registry, today: NaiveDate) -> Heatmap {
    analytics.heatmap(registry, today, DEFAULT_HEATMAP_WINDOW)
}
