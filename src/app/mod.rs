use crate::ai::{GenerationError, GenerationRequest, QuizDraft};
use crate::data::read_seed_quizzes;
use crate::model::{
    AccessibilityPrefs, AppState, Difficulty, Quiz, StudentResult, UserProfile,
};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod completion;
pub mod generation;
pub mod navigation;
pub mod queries;
pub mod session;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{QuizCardInfo, ResultRow, TeacherStats};
pub use completion::CompletionSummary;
pub use session::{AdvanceOutcome, PlaySession};

#[derive(Serialize, Deserialize)]
pub struct QuizApp {
    pub user: Option<UserProfile>,
    pub quizzes: Vec<Quiz>, // Colección de solo-añadir: nunca se edita ni borra
    pub results: Vec<StudentResult>,
    pub prefs: AccessibilityPrefs,
    pub form_topic: String,
    pub form_difficulty: Difficulty,
    pub form_count: u32,
    pub message: String,
    #[serde(skip)]
    pub state: AppState,
    // La sesión de juego es efímera: al recargar se pierde, no hay reanudación
    #[serde(skip)]
    pub session: Option<PlaySession>,
    #[serde(skip)]
    pub last_completion: Option<CompletionSummary>,
    #[serde(skip)]
    pub pending_generation: Option<GenerationRequest>,
    #[serde(skip)]
    pub generation_rx: Option<Receiver<Result<QuizDraft, GenerationError>>>,
}

impl QuizApp {
    pub fn new() -> Self {
        Self {
            user: None,
            quizzes: read_seed_quizzes(),
            results: Vec::new(),
            prefs: AccessibilityPrefs::default(),
            form_topic: String::new(),
            form_difficulty: Difficulty::Medium,
            form_count: 5,
            message: String::new(),
            state: AppState::RoleSelect,
            session: None,
            last_completion: None,
            pending_generation: None,
            generation_rx: None,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
