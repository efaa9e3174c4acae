use std::sync::Arc;
use std::time::Instant;

use crate::auth::SessionGate;
use crate::core::Config;
use crate::store::{EmployeeDraft, EmployeeStore};

/// Server state - shared handle on every long-lived component
///
/// Cloned into each handler via axum's `State` extractor; the gate and
/// store sit behind `Arc`, so clones are cheap and all requests observe
/// the same session flag and roster.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | configuration (immutable) |
/// | session | Arc<SessionGate> | process-wide login flag |
/// | store | Arc<EmployeeStore> | in-memory employee roster |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Session gate guarding every employee route
    pub session: Arc<SessionGate>,
    /// Employee record store
    pub store: Arc<EmployeeStore>,
    /// Process start time, reported by the health endpoint
    started_at: Instant,
}

impl ServerState {
    /// Create server state from prebuilt components (used by tests)
    ///
    /// Never seeds demo data; use [`ServerState::initialize`] for that.
    pub fn new(config: Config, session: SessionGate, store: EmployeeStore) -> Self {
        Self {
            config,
            session: Arc::new(session),
            store: Arc::new(store),
            started_at: Instant::now(),
        }
    }

    /// Build state from configuration, seeding the demo roster when enabled
    pub fn initialize(config: &Config) -> Self {
        let session = SessionGate::new(&config.admin_username, &config.admin_password);
        let store = EmployeeStore::new();

        if config.seed_demo_data {
            seed_demo_roster(&store);
        }

        Self::new(config.clone(), session, store)
    }

    /// Seconds since the state was created
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Seed the two demo employees the panel historically ships with
fn seed_demo_roster(store: &EmployeeStore) {
    let demo = [
        EmployeeDraft {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@example.com".into(),
            position: "Developer".into(),
        },
        EmployeeDraft {
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane.smith@example.com".into(),
            position: "Designer".into(),
        },
    ];

    for draft in demo {
        if let Err(e) = store.create(draft) {
            tracing::warn!("Skipping demo seed record: {}", e);
        }
    }
}
