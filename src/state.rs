use crate::config::Config;
use crate::context::DemoContext;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub demo: Arc<Mutex<DemoContext>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let mut demo = DemoContext::new(config.demo_session_count);
        if config.demo_autostart {
            demo.activate();
        }
        Self {
            config: Arc::new(config),
            demo: Arc::new(Mutex::new(demo)),
        }
    }
}
