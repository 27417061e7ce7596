// src/view_models.rs

use crate::model::Difficulty;

#[derive(Clone, Debug)]
pub struct QuizCardInfo {
    pub idx: usize, // índice 0-based en la colección de quizzes
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub question_count: usize,
    pub total_points: u32,
}

impl QuizCardInfo {
    pub fn preguntas_label(&self) -> String {
        if self.question_count == 1 {
            "1 pregunta".to_string()
        } else {
            format!("{} preguntas", self.question_count)
        }
    }

    pub fn puntos_label(&self) -> String {
        format!("🔥 +{} XP", self.total_points)
    }
}

#[derive(Clone, Debug)]
pub struct ResultRow {
    pub student: String,
    pub quiz_title: String,
    pub score: u32,
    pub max_score: u32,
    pub fecha: String,
}

impl ResultRow {
    pub fn nota_label(&self) -> String {
        format!("{} / {}", self.score, self.max_score)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TeacherStats {
    pub quizzes_activos: usize,
    pub generados_con_ia: usize,
    pub media_clase: Option<f32>, // porcentaje sobre la puntuación máxima
}

impl TeacherStats {
    pub fn media_label(&self) -> String {
        match self.media_clase {
            Some(media) => format!("{media:.0}%"),
            None => "—".to_string(),
        }
    }
}
