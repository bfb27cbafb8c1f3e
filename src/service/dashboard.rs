use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::error::ApiResult;
use crate::model::attendance::AttendanceStatus;
use crate::model::dashboard::DashboardSummary;
use crate::store::Store;

/// Source of the server-side "today".
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Clone)]
pub struct Dashboard {
    store: Arc<dyn Store>,
    clock: Arc<dyn Clock>,
}

impl Dashboard {
    pub fn new(store: Arc<dyn Store>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn summary(&self) -> ApiResult<DashboardSummary> {
        let today = self.clock.today();

        let total = self.store.count_employees().await?;
        let present = self
            .store
            .count_attendance_on(today, AttendanceStatus::Present)
            .await?;
        let absent = self
            .store
            .count_attendance_on(today, AttendanceStatus::Absent)
            .await?;

        debug!(%today, total, present, absent, "Dashboard summary");
        Ok(DashboardSummary::compute(total, present, absent))
    }
}
