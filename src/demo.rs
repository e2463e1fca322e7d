use crate::aggregate::{self, aggregate};
use crate::bucketing::{bucket_key_in, day_key_in};
use crate::models::{
    CalendarDayCount, CreatorStats, Flavor, FlavorStats, OrderStats, Session, StoreStats,
};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

pub const DEMO_SESSION_COUNT: usize = 50;
pub const DEMO_USER: &str = "demo-user";

const HISTORY_DAYS: i64 = 60;
const MAX_FLAVORS: usize = 3;

const STORE_RATE: f64 = 0.8;
const MIX_RATE: f64 = 0.3;
const CREATOR_RATE: f64 = 0.7;
const NOTES_RATE: f64 = 0.4;
const ORDER_RATE: f64 = 0.2;

const FLAVOR_NAMES: [&str; 20] = [
    "Double Apple",
    "Mint",
    "Blueberry",
    "Grape",
    "Lemon",
    "Orange",
    "Peach",
    "Strawberry",
    "Watermelon",
    "Mango",
    "Pineapple",
    "Cherry",
    "Banana",
    "Coconut",
    "Vanilla",
    "Cinnamon",
    "Cappuccino",
    "Cola",
    "Energy Drink",
    "Rose",
];

const STORE_NAMES: [&str; 8] = [
    "Shisha Cafe Shibuya",
    "Chill Spot Shinjuku",
    "Smoke Lounge Roppongi",
    "Shisha Bar Ikebukuro",
    "Relax Cafe Harajuku",
    "Shisha Alley Ueno",
    "Chill Out Aoyama",
    "Shisha Heaven Ginza",
];

const CREATOR_NAMES: [&str; 8] = [
    "Tanaka", "Sato", "Suzuki", "Takahashi", "Watanabe", "Ito", "Yamamoto", "Nakamura",
];

const BRANDS: [&str; 2] = ["Al Fakher", "Fumari"];

pub fn generate_demo_sessions() -> Vec<Session> {
    generate_demo_sessions_with(&mut rand::thread_rng(), Utc::now(), DEMO_SESSION_COUNT)
}

/// Builds `count` synthetic sessions spread over the 60 days before `now`,
/// newest first.
pub fn generate_demo_sessions_with<R: Rng>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<Session> {
    let mut sessions = Vec::with_capacity(count);

    for i in 0..count {
        let at = now - Duration::days(rng.gen_range(0..HISTORY_DAYS));
        let session_id = format!("session-{i}");

        let flavor_count = rng.gen_range(1..=MAX_FLAVORS);
        let names: Vec<&str> = FLAVOR_NAMES
            .choose_multiple(rng, flavor_count)
            .copied()
            .collect();
        let flavors = names
            .into_iter()
            .enumerate()
            .map(|(j, name)| Flavor {
                id: Some(format!("flavor-{i}-{j}")),
                session_id: Some(session_id.clone()),
                flavor_name: Some(name.to_string()),
                brand: Some(pick(rng, &BRANDS)),
                flavor_order: Some(j as u32 + 1),
                created_at: Some(at),
            })
            .collect();

        let store_name = rng.gen_bool(STORE_RATE).then(|| pick(rng, &STORE_NAMES));
        let mix_name = rng.gen_bool(MIX_RATE).then(|| format!("Special Mix {i}"));
        let creator = rng.gen_bool(CREATOR_RATE).then(|| pick(rng, &CREATOR_NAMES));
        let notes = rng.gen_bool(NOTES_RATE).then(|| format!("Notes for session {i}"));
        let order_details = rng.gen_bool(ORDER_RATE).then(|| format!("Order details {i}"));

        sessions.push(Session {
            id: session_id,
            user_id: DEMO_USER.to_string(),
            created_by: DEMO_USER.to_string(),
            session_date: at,
            store_name,
            mix_name,
            creator,
            flavors,
            notes,
            order_details,
            created_at: at,
            updated_at: at,
        });
    }

    sessions.sort_by(|a, b| b.session_date.cmp(&a.session_date));
    sessions
}

fn pick<R: Rng>(rng: &mut R, names: &[&str]) -> String {
    names[rng.gen_range(0..names.len())].to_string()
}

pub fn generate_flavor_stats(sessions: &[Session]) -> FlavorStats {
    FlavorStats {
        main_flavors: aggregate(sessions, aggregate::main_flavor),
        all_flavors: aggregate(sessions, aggregate::all_flavors),
    }
}

pub fn generate_store_stats(sessions: &[Session]) -> StoreStats {
    StoreStats {
        stores: aggregate(sessions, aggregate::store),
    }
}

pub fn generate_creator_stats(sessions: &[Session]) -> CreatorStats {
    CreatorStats {
        creators: aggregate(sessions, aggregate::creator),
    }
}

pub fn generate_order_stats(sessions: &[Session]) -> OrderStats {
    OrderStats {
        orders: aggregate(sessions, aggregate::order_details),
    }
}

pub fn generate_calendar_data(sessions: &[Session], year: i32, month: u32) -> Vec<CalendarDayCount> {
    generate_calendar_data_in(&Local, sessions, year, month)
}

/// Per-day session counts for one month in `tz`, ordered by date.
pub fn generate_calendar_data_in<Tz: TimeZone>(
    tz: &Tz,
    sessions: &[Session],
    year: i32,
    month: u32,
) -> Vec<CalendarDayCount> {
    let mut days: Vec<CalendarDayCount> = aggregate(sessions, |session| {
        bucket_key_in(tz, &session.session_date, year, month)
    })
    .into_iter()
    .map(|entry| CalendarDayCount {
        date: entry.label,
        count: entry.count,
    })
    .collect();
    days.sort_by(|a, b| a.date.cmp(&b.date));
    days
}

pub fn get_sessions_by_date(sessions: &[Session], date: &str) -> Vec<Session> {
    get_sessions_by_date_in(&Local, sessions, date)
}

pub fn get_sessions_by_date_in<Tz: TimeZone>(
    tz: &Tz,
    sessions: &[Session],
    date: &str,
) -> Vec<Session> {
    sessions
        .iter()
        .filter(|session| day_key_in(tz, &session.session_date) == date)
        .cloned()
        .collect()
}

pub fn recent_sessions(sessions: &[Session], limit: usize) -> &[Session] {
    &sessions[..limit.min(sessions.len())]
}
