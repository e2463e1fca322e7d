use crate::demo::generate_demo_sessions_with;
use crate::models::{DemoStatus, Session};
use chrono::{DateTime, Utc};
use tracing::info;

/// Demo-mode state for one app instance.
///
/// Created inactive at startup. `activate` fabricates a fresh session set and
/// `deactivate` drops it; nothing is kept across the two.
#[derive(Debug, Clone)]
pub struct DemoContext {
    session_count: usize,
    sessions: Vec<Session>,
    generated_at: Option<DateTime<Utc>>,
}

impl DemoContext {
    pub fn new(session_count: usize) -> Self {
        Self {
            session_count,
            sessions: Vec::new(),
            generated_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.generated_at.is_some()
    }

    pub fn sessions(&self) -> Option<&[Session]> {
        self.is_active().then_some(self.sessions.as_slice())
    }

    pub fn activate(&mut self) {
        self.activate_at(Utc::now());
    }

    pub fn activate_at(&mut self, now: DateTime<Utc>) {
        self.sessions =
            generate_demo_sessions_with(&mut rand::thread_rng(), now, self.session_count);
        self.generated_at = Some(now);
        info!("demo mode active with {} sessions", self.sessions.len());
    }

    pub fn deactivate(&mut self) {
        if self.is_active() {
            info!("demo mode cleared");
        }
        self.sessions.clear();
        self.generated_at = None;
    }

    pub fn status(&self) -> DemoStatus {
        DemoStatus {
            active: self.is_active(),
            session_count: self.sessions.len(),
            generated_at: self.generated_at,
        }
    }
}
