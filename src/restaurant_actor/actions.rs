use chrono::{DateTime, Utc};

/// Custom actions for Restaurant entities.
#[derive(Debug, Clone)]
pub enum RestaurantAction {
    /// Marks the restaurant as promoted until the given instant.
    Promote { until: DateTime<Utc> },
}
