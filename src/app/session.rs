use crate::model::{Question, Quiz};
use serde::{Deserialize, Serialize};

/// Resultado de pedir avance a la sesión.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Next,
    Completed { score: u32, max_score: u32 },
}

/// Sesión de juego de un estudiante sobre un quiz.
///
/// Estados: esperando respuesta para la pregunta actual, pregunta respondida
/// (mostrando la corrección) y completada. Las transiciones inválidas son
/// no-ops silenciosos.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlaySession {
    pub quiz: Quiz,
    pub current_index: usize, // 0-based, solo crece
    pub selected_answer: Option<String>,
    pub answered: bool,
    pub completed: bool,
    pub score: u32,
    pub streak: u32,
    pub input: String, // buffer para respuestas cortas
}

impl PlaySession {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            current_index: 0,
            selected_answer: None,
            answered: false,
            completed: false,
            score: 0,
            streak: 0,
            input: String::new(),
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.quiz.questions[self.current_index]
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.quiz.questions.len()
    }

    /// Registra la respuesta de la pregunta actual y la corrige.
    ///
    /// La comparación es igualdad exacta de cadenas: sin normalizar
    /// mayúsculas ni espacios. Devuelve `false` si la pregunta ya estaba
    /// respondida (o la sesión completada) y no se hizo nada.
    pub fn submit_answer(&mut self, choice: &str) -> bool {
        if self.answered || self.completed {
            return false;
        }
        self.selected_answer = Some(choice.to_string());
        self.answered = true;

        if choice == self.current_question().correct_answer {
            self.score += self.current_question().points;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        true
    }

    /// Avanza a la siguiente pregunta, o completa la sesión si era la última.
    ///
    /// Solo es válido con la pregunta actual ya respondida; en cualquier otro
    /// caso devuelve `None`. El evento de finalización se emite una sola vez.
    pub fn advance(&mut self) -> Option<AdvanceOutcome> {
        if !self.answered || self.completed {
            return None;
        }
        if self.is_last_question() {
            self.completed = true;
            Some(AdvanceOutcome::Completed {
                score: self.score,
                max_score: self.quiz.max_score(),
            })
        } else {
            self.current_index += 1;
            self.selected_answer = None;
            self.answered = false;
            self.input.clear();
            Some(AdvanceOutcome::Next)
        }
    }

    /// Fracción de preguntas ya completadas (la pregunta en curso no cuenta).
    pub fn progress_fraction(&self) -> f32 {
        self.current_index as f32 / self.quiz.questions.len() as f32
    }

    pub fn last_answer_correct(&self) -> bool {
        self.selected_answer.as_deref() == Some(self.current_question().correct_answer.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, QuestionKind};
    use chrono::Utc;

    fn quiz_de_prueba() -> Quiz {
        Quiz {
            id: "quiz-test".into(),
            title: "Quiz de prueba".into(),
            topic: "Pruebas".into(),
            description: "Dos preguntas de diez puntos.".into(),
            difficulty: Difficulty::Easy,
            questions: vec![
                Question {
                    id: "p1".into(),
                    kind: QuestionKind::Mcq,
                    prompt: "¿Planeta rojo?".into(),
                    options: vec!["Marte".into(), "Venus".into()],
                    correct_answer: "Marte".into(),
                    explanation: "Óxido de hierro.".into(),
                    points: 10,
                },
                Question {
                    id: "p2".into(),
                    kind: QuestionKind::TrueFalse,
                    prompt: "El Sol es un planeta.".into(),
                    options: vec![],
                    correct_answer: "False".into(),
                    explanation: "Es una estrella.".into(),
                    points: 10,
                },
            ],
            created_by: "tests".into(),
            created_at: Utc::now(),
            ai_generated: false,
        }
    }

    #[test]
    fn la_puntuacion_maxima_no_depende_de_las_respuestas() {
        let mut sesion = PlaySession::new(quiz_de_prueba());
        sesion.submit_answer("Venus");
        sesion.advance();
        sesion.submit_answer("False");
        let resultado = sesion.advance();
        assert_eq!(
            resultado,
            Some(AdvanceOutcome::Completed {
                score: 10,
                max_score: 20
            })
        );
    }

    #[test]
    fn acertar_suma_puntos_y_racha() {
        let mut sesion = PlaySession::new(quiz_de_prueba());
        assert!(sesion.submit_answer("Marte"));
        assert_eq!(sesion.score, 10);
        assert_eq!(sesion.streak, 1);
    }

    #[test]
    fn fallar_reinicia_la_racha_sin_tocar_la_puntuacion() {
        let mut sesion = PlaySession::new(quiz_de_prueba());
        sesion.submit_answer("Marte");
        sesion.advance();
        sesion.submit_answer("True");
        assert_eq!(sesion.score, 10);
        assert_eq!(sesion.streak, 0);
    }

    #[test]
    fn reenviar_respuesta_es_un_no_op() {
        let mut sesion = PlaySession::new(quiz_de_prueba());
        assert!(sesion.submit_answer("Venus"));
        assert!(!sesion.submit_answer("Marte"));
        assert_eq!(sesion.score, 0);
        assert_eq!(sesion.streak, 0);
        assert_eq!(sesion.selected_answer.as_deref(), Some("Venus"));
    }

    #[test]
    fn la_correccion_es_sensible_a_mayusculas_y_espacios() {
        let mut sesion = PlaySession::new(quiz_de_prueba());
        sesion.submit_answer("marte");
        assert_eq!(sesion.score, 0);
        sesion.advance();
        sesion.submit_answer("False ");
        assert_eq!(sesion.score, 0);
    }

    #[test]
    fn avanzar_sin_responder_es_un_no_op() {
        let mut sesion = PlaySession::new(quiz_de_prueba());
        assert_eq!(sesion.advance(), None);
        assert_eq!(sesion.current_index, 0);
    }

    #[test]
    fn el_evento_de_finalizacion_se_emite_una_sola_vez() {
        let mut sesion = PlaySession::new(quiz_de_prueba());
        sesion.submit_answer("Marte");
        sesion.advance();
        sesion.submit_answer("False");
        assert!(matches!(
            sesion.advance(),
            Some(AdvanceOutcome::Completed { .. })
        ));
        assert_eq!(sesion.advance(), None);
        assert!(!sesion.submit_answer("False"));
    }

    #[test]
    fn la_fraccion_de_progreso_no_llega_a_uno_durante_la_ultima_pregunta() {
        let mut sesion = PlaySession::new(quiz_de_prueba());
        assert_eq!(sesion.progress_fraction(), 0.0);
        sesion.submit_answer("Marte");
        assert_eq!(sesion.progress_fraction(), 0.0);
        sesion.advance();
        assert_eq!(sesion.progress_fraction(), 0.5);
        sesion.submit_answer("False");
        assert!(sesion.progress_fraction() < 1.0);
    }
}
