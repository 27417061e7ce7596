use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    Teacher,
    Student,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QuestionKind {
    Mcq,
    TrueFalse,
    ShortAnswer,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Media",
            Difficulty::Hard => "Difícil",
        }
    }

    pub fn todas() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: String,
    pub kind: QuestionKind,
    pub prompt: String,   // Enunciado
    #[serde(default)]
    pub options: Vec<String>, // Solo con sentido para Mcq
    pub correct_answer: String,
    pub explanation: String,
    pub points: u32,
}

impl Question {
    /// Comprueba los invariantes del enunciado según su tipo.
    pub fn is_coherent(&self) -> bool {
        if self.points == 0 || self.prompt.trim().is_empty() {
            return false;
        }
        match self.kind {
            QuestionKind::Mcq => {
                self.options.len() >= 2 && self.options.contains(&self.correct_answer)
            }
            QuestionKind::TrueFalse => {
                self.correct_answer == "True" || self.correct_answer == "False"
            }
            QuestionKind::ShortAnswer => !self.correct_answer.trim().is_empty(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub topic: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>, // El orden determina la presentación
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub ai_generated: bool,
}

impl Quiz {
    /// Puntuación máxima alcanzable: suma de los puntos de todas las preguntas.
    pub fn max_score(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }
}

/// Experiencia y nivel acumulados de un estudiante.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    pub xp: u32,
    pub level: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self { xp: 0, level: 1 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserProfile {
    pub name: String,
    pub role: UserRole,
    pub progression: Progression,
}

impl UserProfile {
    pub fn nuevo(role: UserRole) -> Self {
        let name = match role {
            UserRole::Teacher => "Ms. Johnson",
            UserRole::Student => "Alex Explorer",
        };
        Self {
            name: name.to_string(),
            role,
            progression: Progression::default(),
        }
    }
}

/// Registro de una partida completada. Alimenta el panel del profesor.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StudentResult {
    pub student: String,
    pub quiz_id: String,
    pub quiz_title: String,
    pub score: u32,
    pub max_score: u32,
    pub completed_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct AccessibilityPrefs {
    pub dyslexic_mode: bool,
    pub high_contrast: bool,
    pub dark_mode: bool,
}

impl Default for AccessibilityPrefs {
    fn default() -> Self {
        Self {
            dyslexic_mode: false,
            high_contrast: false,
            dark_mode: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    RoleSelect,
    TeacherDashboard,
    CreateQuiz,
    StudentDashboard,
    Quiz,
    QuizResult,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::RoleSelect
    }
}
