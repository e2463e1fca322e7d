use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded shisha session as served by the session API.
///
/// Optional text fields keep the absent/empty distinction: `None` is a field
/// that was never filled in, `Some("")` is one that was explicitly cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub created_by: String,
    pub session_date: DateTime<Utc>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub mix_name: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub flavors: Vec<Flavor>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub order_details: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Flavor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default)]
    pub flavor_name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    /// 1-based display position. Not guaranteed contiguous or unique.
    #[serde(default)]
    pub flavor_order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Flavor {
    pub fn named(name: impl Into<String>, flavor_order: Option<u32>) -> Self {
        Self {
            flavor_name: Some(name.into()),
            flavor_order,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateCount {
    pub label: String,
    pub count: u64,
}

/// Sessions on one local calendar day. Days without sessions are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDayCount {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorStats {
    pub main_flavors: Vec<AggregateCount>,
    pub all_flavors: Vec<AggregateCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreStats {
    pub stores: Vec<AggregateCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorStats {
    pub creators: Vec<AggregateCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStats {
    pub orders: Vec<AggregateCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarCell {
    Blank,
    Day {
        day: u32,
        date: String,
        count: u64,
        is_today: bool,
    },
}

impl CalendarCell {
    pub fn is_blank(&self) -> bool {
        matches!(self, CalendarCell::Blank)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    pub rank: usize,
    pub label: String,
    pub count: u64,
    pub bar_percent: f64,
}

/// One pie-chart wedge with everything a tooltip needs precomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: u64,
    pub percentage: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoStatus {
    pub active: bool,
    pub session_count: usize,
    pub generated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_sessions: usize,
    pub recent_sessions: Vec<Session>,
    pub flavor_stats: FlavorStats,
    pub store_stats: StoreStats,
    pub creator_stats: CreatorStats,
}

#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub dimension: String,
    pub total: u64,
    pub slices: Vec<ChartSlice>,
    pub ranking: Vec<RankingRow>,
}
