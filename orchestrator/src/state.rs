//! Session state sharing

use std::sync::Arc;
use tokio::sync::RwLock;
use crate::core::SessionState;

/// Shared session state wrapper
pub type SharedSessionState = Arc<RwLock<SessionState>>;

/// Create new shared session state
pub fn create_shared_state(state: SessionState) -> SharedSessionState {
    Arc::new(RwLock::new(state))
}
