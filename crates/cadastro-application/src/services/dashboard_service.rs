//! Dashboard aggregation use cases
//!
//! Read-only queries feeding the dashboard: the stats card counters and the
//! per-month client creation chart.

use crate::dto::{ClientsChartData, DashboardStats};
use crate::Result;
use cadastro_ports::{ClientRepositoryRef, ClockRef, SystemClock};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Arc;

/// Dashboard aggregation service
#[derive(Clone)]
pub struct DashboardService {
    repository: ClientRepositoryRef,
    clock: ClockRef,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService")
            .field("repository", &"<ClientRepository>")
            .finish()
    }
}

impl DashboardService {
    pub fn new(repository: ClientRepositoryRef) -> Self {
        Self::with_clock(repository, Arc::new(SystemClock))
    }

    pub fn with_clock(repository: ClientRepositoryRef, clock: ClockRef) -> Self {
        DashboardService { repository, clock }
    }

    /// Dashboard counters: `total = active + deleted`, plus the number of
    /// active clients created this month.
    ///
    /// The three sub-counts run concurrently; a failure of any one fails
    /// the whole query — no partial stats are ever returned.
    pub async fn stats(&self) -> Result<DashboardStats> {
        let (active, deleted, new_this_month) = tokio::try_join!(
            self.repository.count_active(),
            self.repository.count_deleted(),
            self.repository.count_new_this_month(),
        )?;

        Ok(DashboardStats {
            total: active + deleted,
            active,
            deleted,
            new_this_month,
        })
    }

    /// Creation counts for the trailing `months` calendar months ending at
    /// the current month, oldest first.
    ///
    /// The aggregation source may omit months with no rows, so the sparse
    /// result is spread over a dense month map keyed by truncated-to-month
    /// timestamps before the ordered series is emitted; absent months
    /// appear with count 0.
    pub async fn chart_data(&self, months: u32) -> Result<ClientsChartData> {
        let months = months.max(1);
        let now = self.clock.now();

        let sparse = self.repository.count_by_month(months).await?;
        let by_month: HashMap<DateTime<Utc>, u64> =
            sparse.into_iter().map(|m| (m.month, m.count)).collect();

        let mut labels = Vec::with_capacity(months as usize);
        let mut data = Vec::with_capacity(months as usize);
        for back in (0..months).rev() {
            let month = month_floor_back(now, back);
            labels.push(month.format("%b %Y").to_string());
            data.push(by_month.get(&month).copied().unwrap_or(0));
        }

        Ok(ClientsChartData { labels, data })
    }
}

/// First instant of the month `back` months before `ts` (UTC).
pub(crate) fn month_floor_back(ts: DateTime<Utc>, back: u32) -> DateTime<Utc> {
    let total = ts.year() * 12 + ts.month0() as i32 - back as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .unwrap_or(ts) // day 1 of a real month is always representable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_floor_back_zero_is_current_month_start() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 17, 13, 45, 9).unwrap();
        assert_eq!(
            month_floor_back(ts, 0),
            Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_month_floor_back_within_year() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 17, 13, 45, 9).unwrap();
        assert_eq!(
            month_floor_back(ts, 2),
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_month_floor_back_crosses_year_boundary() {
        let ts = Utc.with_ymd_and_hms(2025, 2, 5, 0, 0, 0).unwrap();
        assert_eq!(
            month_floor_back(ts, 3),
            Utc.with_ymd_and_hms(2024, 11, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            month_floor_back(ts, 14),
            Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap()
        );
    }
}
