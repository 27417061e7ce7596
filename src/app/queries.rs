use super::*;

impl QuizApp {
    pub fn quiz(&self, idx: usize) -> Option<&Quiz> {
        self.quizzes.get(idx)
    }

    /// Nota media de la clase como porcentaje sobre la puntuación máxima.
    pub fn media_clase(&self) -> Option<f32> {
        let notas: Vec<f32> = self
            .results
            .iter()
            .filter(|r| r.max_score > 0)
            .map(|r| r.score as f32 / r.max_score as f32)
            .collect();
        if notas.is_empty() {
            return None;
        }
        Some(notas.iter().sum::<f32>() / notas.len() as f32 * 100.0)
    }

    pub fn total_generados_con_ia(&self) -> usize {
        self.quizzes.iter().filter(|q| q.ai_generated).count()
    }

    /// Fracción de XP acumulada hacia el siguiente nivel, para la barra del
    /// panel del estudiante.
    pub fn fraccion_hasta_siguiente_nivel(&self) -> f32 {
        let xp = self
            .user
            .as_ref()
            .map(|u| u.progression.xp)
            .unwrap_or_default();
        (xp as f32 / completion::LEVEL_THRESHOLD as f32).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudentResult;
    use chrono::Utc;

    fn resultado(score: u32, max_score: u32) -> StudentResult {
        StudentResult {
            student: "Alex Explorer".into(),
            quiz_id: "quiz-test".into(),
            quiz_title: "Quiz de prueba".into(),
            score,
            max_score,
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn sin_resultados_no_hay_media() {
        let app = QuizApp::new();
        assert!(app.media_clase().is_none());
    }

    #[test]
    fn la_media_es_el_porcentaje_sobre_el_maximo() {
        let mut app = QuizApp::new();
        app.results.push(resultado(10, 20));
        app.results.push(resultado(20, 20));
        let media = app.media_clase().unwrap();
        assert!((media - 75.0).abs() < 0.01);
    }
}
