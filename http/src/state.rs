use std::collections::HashMap;
use std::sync::Arc;

use interpreter_application::{AudioSourceFactory, InterpretUseCase, SessionState};
use interpreter_domain::LanguagePair;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::HttpError;

/// Shared handler state: the session store plus the pipeline entry points.
#[derive(Clone)]
pub struct AppState {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<Mutex<SessionState>>>>>,
    pub usecase: Arc<dyn InterpretUseCase>,
    pub sources: Arc<dyn AudioSourceFactory>,
    pub default_pair: LanguagePair,
}

impl AppState {
    pub fn new(
        usecase: Arc<dyn InterpretUseCase>,
        sources: Arc<dyn AudioSourceFactory>,
        default_pair: LanguagePair,
    ) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            usecase,
            sources,
            default_pair,
        }
    }

    pub async fn create_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(SessionState::new(self.default_pair)));
        self.sessions.write().await.insert(id, session);
        id
    }

    pub async fn session(&self, id: Uuid) -> Result<Arc<Mutex<SessionState>>, HttpError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(HttpError::NotFound)
    }
}
