use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "total_employees": 10,
        "present_today": 7,
        "absent_today": 1,
        "not_marked_today": 2
    })
)]
pub struct DashboardSummary {
    pub total_employees: u64,
    pub present_today: u64,
    pub absent_today: u64,
    pub not_marked_today: u64,
}

impl DashboardSummary {
    /// `not_marked_today` is whatever is left of the roster, never below zero.
    pub fn compute(total_employees: u64, present_today: u64, absent_today: u64) -> Self {
        Self {
            total_employees,
            present_today,
            absent_today,
            not_marked_today: total_employees
                .saturating_sub(present_today)
                .saturating_sub(absent_today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_marked_is_remainder() {
        let summary = DashboardSummary::compute(10, 7, 1);
        assert_eq!(summary.not_marked_today, 2);
    }

    #[test]
    fn not_marked_never_goes_negative() {
        assert_eq!(DashboardSummary::compute(2, 3, 0).not_marked_today, 0);
        assert_eq!(DashboardSummary::compute(2, 1, 5).not_marked_today, 0);
        assert_eq!(DashboardSummary::compute(0, 0, 0).not_marked_today, 0);
    }
}
