//! Access statistics endpoints.
//!
//! Statistics come from the provider configured on the server (e.g. Google
//! Analytics) and are aggregated either by path or by date over an
//! inclusive date range.

use chrono::NaiveDate;
use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;

/// Date format the stats endpoints expect.
const STATS_DATE_FORMAT: &str = "%Y-%m-%d";

/// Aggregation axis of a stats report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsTarget {
    Path,
    Date,
}

/// Measure reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsMetric {
    Pageviews,
    Visits,
}

impl StatsTarget {
    fn segment(self) -> &'static str {
        match self {
            StatsTarget::Path => "path",
            StatsTarget::Date => "date",
        }
    }
}

impl StatsMetric {
    fn segment(self) -> &'static str {
        match self {
            StatsMetric::Pageviews => "pageviews",
            StatsMetric::Visits => "visits",
        }
    }
}

/// Options plus the `startDate`/`endDate` range.
fn date_range_params(start: NaiveDate, end: NaiveDate, options: Option<&Params>) -> Params {
    Params::from_options(options)
        .with("startDate", start.format(STATS_DATE_FORMAT))
        .with("endDate", end.format(STATS_DATE_FORMAT))
}

impl DataApi {
    /// Which statistics provider the site uses.
    pub async fn get_stats_provider(
        &self,
        site_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self.url(&format!("/sites/{site_id}/stats/provider")).await;
        self.get(&url, options).await
    }

    /// Fetch one stats report.
    pub async fn stats(
        &self,
        site_id: &str,
        target: StatsTarget,
        metric: StatsMetric,
        start: NaiveDate,
        end: NaiveDate,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        let url = self
            .url(&format!(
                "/sites/{site_id}/stats/{}/{}",
                target.segment(),
                metric.segment()
            ))
            .await;
        let params = date_range_params(start, end, options);
        self.fetch_list(&url, Some(&params)).await
    }

    /// Pageview counts per path between two dates.
    pub async fn pageviews_for_path(
        &self,
        site_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.stats(site_id, StatsTarget::Path, StatsMetric::Pageviews, start, end, options)
            .await
    }

    /// Visit counts per path between two dates.
    pub async fn visits_for_path(
        &self,
        site_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.stats(site_id, StatsTarget::Path, StatsMetric::Visits, start, end, options)
            .await
    }

    /// Pageview counts per day between two dates.
    pub async fn pageviews_for_date(
        &self,
        site_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.stats(site_id, StatsTarget::Date, StatsMetric::Pageviews, start, end, options)
            .await
    }

    /// Visit counts per day between two dates.
    pub async fn visits_for_date(
        &self,
        site_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.stats(site_id, StatsTarget::Date, StatsMetric::Visits, start, end, options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_params() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let options = Params::new().with("limit", 10);
        let params = date_range_params(start, end, Some(&options));
        assert_eq!(params.get("startDate"), Some("2024-01-05"));
        assert_eq!(params.get("endDate"), Some("2024-02-29"));
        assert_eq!(params.get("limit"), Some("10"));
    }

    #[test]
    fn test_segments() {
        assert_eq!(StatsTarget::Path.segment(), "path");
        assert_eq!(StatsMetric::Visits.segment(), "visits");
    }
}
