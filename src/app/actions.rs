use super::*;
use crate::model::AppState;

impl QuizApp {
    /// Crea la sesión de juego para el quiz elegido y entra en la vista de quiz.
    pub fn empezar_quiz(&mut self, quiz_idx: usize) {
        let quiz = match self.quizzes.get(quiz_idx) {
            Some(q) => q.clone(),
            None => return,
        };
        if quiz.questions.is_empty() {
            self.message = "⚠ Este quiz no tiene preguntas.".into();
            return;
        }

        self.session = Some(PlaySession::new(quiz));
        self.last_completion = None;
        self.state = AppState::Quiz;
        self.message.clear();
    }

    pub fn procesar_respuesta(&mut self, respuesta: &str) {
        if respuesta.trim().is_empty() {
            self.message = "⚠ Debes escribir una respuesta antes de enviar.".into();
            return;
        }

        let Some(sesion) = self.session.as_mut() else {
            return;
        };
        if !sesion.submit_answer(respuesta) {
            // Ya estaba respondida: no-op
            return;
        }

        self.message = if self.session.as_ref().is_some_and(|s| s.last_answer_correct()) {
            "✅ ¡Excelente!".into()
        } else {
            "❌ No es correcto.".into()
        };
    }

    /// Pasa a la siguiente pregunta; si era la última, registra la finalización.
    pub fn avanzar_pregunta(&mut self) {
        let resultado = match self.session.as_mut() {
            Some(sesion) => sesion.advance(),
            None => return,
        };

        match resultado {
            Some(AdvanceOutcome::Completed { score, max_score }) => {
                self.registrar_resultado(score, max_score);
            }
            Some(AdvanceOutcome::Next) => {
                self.message.clear();
            }
            None => {} // aún sin responder: no-op
        }
    }

    /// Abandona la sesión en curso sin emitir evento de finalización.
    pub fn salir_del_quiz(&mut self) {
        self.session = None;
        self.state = AppState::StudentDashboard;
        self.message.clear();
    }
}
