use crate::aggregate::{self, aggregate, top};
use crate::calendar::{build_month_grid_with, MonthCursor};
use crate::demo::{
    generate_calendar_data, generate_creator_stats, generate_flavor_stats, generate_order_stats,
    generate_store_stats, get_sessions_by_date, recent_sessions,
};
use crate::errors::AppError;
use crate::flavor_sort::with_sorted_flavors;
use crate::models::{
    CalendarDayCount, ChartResponse, CreatorStats, DashboardResponse, DemoStatus, FlavorStats,
    MonthGrid, OrderStats, Session, StoreStats,
};
use crate::ranking::{chart_slices, ranking_rows, total};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::info;

const DASHBOARD_RECENT: usize = 5;

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl MonthQuery {
    fn cursor(&self) -> Result<MonthCursor, AppError> {
        let current = MonthCursor::current();
        MonthCursor::new(
            self.year.unwrap_or(current.year),
            self.month.unwrap_or(current.month),
        )
        .ok_or_else(|| AppError::bad_request("month must be between 1 and 12"))
    }
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let demo = state.demo.lock().await;
    Html(render_index(&demo.status()))
}

pub async fn demo_status(State(state): State<AppState>) -> Json<DemoStatus> {
    let demo = state.demo.lock().await;
    Json(demo.status())
}

pub async fn activate_demo(State(state): State<AppState>) -> Json<DemoStatus> {
    let mut demo = state.demo.lock().await;
    demo.activate();
    Json(demo.status())
}

pub async fn deactivate_demo(State(state): State<AppState>) -> Json<DemoStatus> {
    let mut demo = state.demo.lock().await;
    demo.deactivate();
    Json(demo.status())
}

pub async fn list_sessions(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Session>>, AppError> {
    with_sessions(&state, |sessions| {
        let limit = query.limit.unwrap_or(sessions.len());
        display(recent_sessions(sessions, limit))
    })
    .await
    .map(Json)
}

pub async fn sessions_by_date(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<Session>>, AppError> {
    let date = query.date.trim();
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(AppError::bad_request("date must be formatted as YYYY-MM-DD"));
    }
    with_sessions(&state, |sessions| display(&get_sessions_by_date(sessions, date)))
        .await
        .map(Json)
}

pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, AppError> {
    let limit = state.config.stats_top_n;
    with_sessions(&state, |sessions| {
        let flavors = generate_flavor_stats(sessions);
        DashboardResponse {
            total_sessions: sessions.len(),
            recent_sessions: display(recent_sessions(sessions, DASHBOARD_RECENT)),
            flavor_stats: FlavorStats {
                main_flavors: top(flavors.main_flavors, limit),
                all_flavors: top(flavors.all_flavors, limit),
            },
            store_stats: StoreStats {
                stores: top(generate_store_stats(sessions).stores, limit),
            },
            creator_stats: CreatorStats {
                creators: top(generate_creator_stats(sessions).creators, limit),
            },
        }
    })
    .await
    .map(Json)
}

pub async fn flavor_stats(State(state): State<AppState>) -> Result<Json<FlavorStats>, AppError> {
    let limit = state.config.stats_top_n;
    with_sessions(&state, |sessions| {
        let stats = generate_flavor_stats(sessions);
        FlavorStats {
            main_flavors: top(stats.main_flavors, limit),
            all_flavors: top(stats.all_flavors, limit),
        }
    })
    .await
    .map(Json)
}

pub async fn store_stats(State(state): State<AppState>) -> Result<Json<StoreStats>, AppError> {
    let limit = state.config.stats_top_n;
    with_sessions(&state, |sessions| StoreStats {
        stores: top(generate_store_stats(sessions).stores, limit),
    })
    .await
    .map(Json)
}

pub async fn creator_stats(State(state): State<AppState>) -> Result<Json<CreatorStats>, AppError> {
    let limit = state.config.stats_top_n;
    with_sessions(&state, |sessions| CreatorStats {
        creators: top(generate_creator_stats(sessions).creators, limit),
    })
    .await
    .map(Json)
}

pub async fn order_stats(State(state): State<AppState>) -> Result<Json<OrderStats>, AppError> {
    let limit = state.config.stats_top_n;
    with_sessions(&state, |sessions| OrderStats {
        orders: top(generate_order_stats(sessions).orders, limit),
    })
    .await
    .map(Json)
}

pub async fn calendar(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<CalendarDayCount>>, AppError> {
    let cursor = query.cursor()?;
    with_sessions(&state, |sessions| {
        generate_calendar_data(sessions, cursor.year, cursor.month)
    })
    .await
    .map(Json)
}

pub async fn calendar_grid(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthGrid>, AppError> {
    let cursor = query.cursor()?;
    let week_start = state.config.week_start;
    with_sessions(&state, |sessions| {
        let days = generate_calendar_data(sessions, cursor.year, cursor.month);
        MonthGrid {
            year: cursor.year,
            month: cursor.month,
            cells: build_month_grid_with(
                cursor.year,
                cursor.month,
                &days,
                week_start,
                Local::now().date_naive(),
            ),
        }
    })
    .await
    .map(Json)
}

pub async fn chart(
    State(state): State<AppState>,
    Path(dimension): Path<String>,
) -> Result<Json<ChartResponse>, AppError> {
    let limit = state.config.stats_top_n;
    let counts = with_sessions(&state, |sessions| match dimension.as_str() {
        "main_flavors" => Some(aggregate(sessions, aggregate::main_flavor)),
        "all_flavors" => Some(aggregate(sessions, aggregate::all_flavors)),
        "stores" => Some(aggregate(sessions, aggregate::store)),
        "creators" => Some(aggregate(sessions, aggregate::creator)),
        "orders" => Some(aggregate(sessions, aggregate::order_details)),
        _ => None,
    })
    .await?
    .ok_or_else(|| AppError::bad_request(format!("unknown chart dimension '{dimension}'")))?;

    let counts = top(counts, limit);
    Ok(Json(ChartResponse {
        total: total(&counts),
        slices: chart_slices(&counts),
        ranking: ranking_rows(&counts),
        dimension,
    }))
}

fn display(sessions: &[Session]) -> Vec<Session> {
    sessions.iter().map(with_sorted_flavors).collect()
}

async fn with_sessions<T>(
    state: &AppState,
    build: impl FnOnce(&[Session]) -> T,
) -> Result<T, AppError> {
    let demo = state.demo.lock().await;
    match demo.sessions() {
        Some(sessions) => Ok(build(sessions)),
        None => {
            info!("demo data requested while demo mode is off");
            Err(AppError::conflict("demo mode is not active"))
        }
    }
}
