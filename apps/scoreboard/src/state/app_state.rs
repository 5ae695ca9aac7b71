use std::sync::Arc;

use sea_orm::DatabaseConnection;
use time::OffsetDateTime;

use crate::domain::clock::{Clock, SystemClock};

/// Shared handles every operation runs against.
#[derive(Debug, Clone)]
pub struct AppState {
    db: DatabaseConnection,
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }

    /// State over `db` using the UTC wall clock.
    pub fn with_system_clock(db: DatabaseConnection) -> Self {
        Self::new(db, Arc::new(SystemClock))
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }
}
