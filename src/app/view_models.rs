use super::*;

impl QuizApp {
    pub fn quiz_cards(&self) -> Vec<QuizCardInfo> {
        self.quizzes
            .iter()
            .enumerate()
            .map(|(idx, quiz)| QuizCardInfo {
                idx,
                title: quiz.title.clone(),
                description: quiz.description.clone(),
                difficulty: quiz.difficulty,
                question_count: quiz.questions.len(),
                total_points: quiz.max_score(),
            })
            .collect()
    }

    /// Resultados recientes, el último primero.
    pub fn result_rows(&self) -> Vec<ResultRow> {
        self.results
            .iter()
            .rev()
            .map(|r| ResultRow {
                student: r.student.clone(),
                quiz_title: r.quiz_title.clone(),
                score: r.score,
                max_score: r.max_score,
                fecha: r.completed_at.format("%d/%m/%Y %H:%M").to_string(),
            })
            .collect()
    }

    pub fn teacher_stats(&self) -> TeacherStats {
        TeacherStats {
            quizzes_activos: self.quizzes.len(),
            generados_con_ia: self.total_generados_con_ia(),
            media_clase: self.media_clase(),
        }
    }
}
