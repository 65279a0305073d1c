//! Log Explorer & Insights: stores request logs of a service for querying.

use super::EnabledProduct;

/// The Log Explorer & Insights product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogExplorerInsights;

impl EnabledProduct for LogExplorerInsights {
    const PRODUCT_ID: &'static str = "log_explorer_insights";
    type EnableInput = ();
}

