//! DTOs for the per-user dashboard.

use serde::Serialize;

use crate::api::dto::click::ClickResponse;
use crate::api::dto::url::ShortUrlResponse;
use crate::application::services::{DashboardSummary, LinkActivity};

/// Dashboard of a user.
///
/// ```json
/// {
///   "links": [{ "url": { ... }, "stats": [ ... ] }],
///   "totalClicks": 12,
///   "totalLinks": 3,
///   "mostClickedLink": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub links: Vec<LinkWithStats>,
    pub total_clicks: i64,
    pub total_links: usize,
    pub most_clicked_link: ShortUrlResponse,
}

/// One owned short URL with its click events.
#[derive(Debug, Serialize)]
pub struct LinkWithStats {
    pub url: ShortUrlResponse,
    pub stats: Vec<ClickResponse>,
}

impl From<LinkActivity> for LinkWithStats {
    fn from(activity: LinkActivity) -> Self {
        Self {
            url: activity.url.into(),
            stats: activity.clicks.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            links: summary.links.into_iter().map(Into::into).collect(),
            total_clicks: summary.total_clicks,
            total_links: summary.total_links,
            most_clicked_link: summary.most_clicked_link.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dashboard_serializes_zero_record() {
        let response = DashboardResponse::from(DashboardSummary::summarize(Vec::new()));
        let value = serde_json::to_value(response).unwrap();

        assert_eq!(value["totalClicks"], 0);
        assert_eq!(value["totalLinks"], 0);
        assert_eq!(value["links"].as_array().unwrap().len(), 0);
        assert_eq!(value["mostClickedLink"]["id"], 0);
        assert_eq!(value["mostClickedLink"]["short_url"], "");
        assert_eq!(value["mostClickedLink"]["created_at"], "1970-01-01T00:00:00Z");
    }
}
