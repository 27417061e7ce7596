use super::*;
use crate::model::{AppState, Progression, StudentResult};
use chrono::Utc;

pub const PERFECT_BONUS: u32 = 50;
pub const LEVEL_THRESHOLD: u32 = 1000;

/// Resumen de la última partida, para la vista de resultados.
#[derive(Clone, Debug)]
pub struct CompletionSummary {
    pub quiz_title: String,
    pub score: u32,
    pub max_score: u32,
    pub xp_ganada: u32,
    pub perfecta: bool,
    pub progression: Progression,
}

/// Aplica un evento de finalización a la progresión del estudiante.
///
/// La comprobación de subida de nivel lee la XP *anterior* a esta partida, no
/// la recién sumada, así que cruzar el umbral solo sube de nivel en la
/// siguiente finalización. Es el comportamiento observable de referencia; la
/// resta del umbral se aplica como mucho una vez por evento.
pub fn aplicar_progresion(actual: Progression, score: u32, max_score: u32) -> Progression {
    let xp_previa = actual.xp;

    let mut xp = actual.xp + score;
    if score == max_score {
        xp += PERFECT_BONUS;
    }

    let mut level = actual.level;
    if xp_previa > LEVEL_THRESHOLD {
        level += 1;
        xp -= LEVEL_THRESHOLD;
    }

    Progression { xp, level }
}

impl QuizApp {
    /// Consume la sesión terminada: actualiza progresión, guarda el resultado
    /// y pasa a la vista de resumen.
    pub fn registrar_resultado(&mut self, score: u32, max_score: u32) {
        let Some(sesion) = self.session.take() else {
            return;
        };
        let Some(user) = self.user.as_mut() else {
            return;
        };

        user.progression = aplicar_progresion(user.progression, score, max_score);

        let perfecta = score == max_score;
        self.results.push(StudentResult {
            student: user.name.clone(),
            quiz_id: sesion.quiz.id.clone(),
            quiz_title: sesion.quiz.title.clone(),
            score,
            max_score,
            completed_at: Utc::now(),
        });

        self.last_completion = Some(CompletionSummary {
            quiz_title: sesion.quiz.title.clone(),
            score,
            max_score,
            xp_ganada: score + if perfecta { PERFECT_BONUS } else { 0 },
            perfecta,
            progression: user.progression,
        });
        self.state = AppState::QuizResult;
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, Question, QuestionKind, Quiz, UserProfile, UserRole};

    fn progresion(xp: u32, level: u32) -> Progression {
        Progression { xp, level }
    }

    #[test]
    fn partida_perfecta_suma_bonus_pero_no_sube_nivel_esta_vez() {
        // 950 de XP previa no supera el umbral: el nivel espera a la siguiente
        let resultado = aplicar_progresion(progresion(950, 4), 100, 100);
        assert_eq!(resultado, progresion(1100, 4));
    }

    #[test]
    fn partida_normal_solo_suma_la_puntuacion() {
        let resultado = aplicar_progresion(progresion(0, 1), 10, 20);
        assert_eq!(resultado, progresion(10, 1));
    }

    #[test]
    fn superar_el_umbral_sube_nivel_y_resta_una_sola_vez() {
        let resultado = aplicar_progresion(progresion(1100, 4), 10, 20);
        assert_eq!(resultado, progresion(110, 5));
    }

    #[test]
    fn el_bonus_solo_se_aplica_con_puntuacion_perfecta() {
        let casi = aplicar_progresion(progresion(0, 1), 99, 100);
        assert_eq!(casi.xp, 99);
        let perfecta = aplicar_progresion(progresion(0, 1), 100, 100);
        assert_eq!(perfecta.xp, 150);
    }

    fn quiz_dos_preguntas() -> Quiz {
        Quiz {
            id: "quiz-e2e".into(),
            title: "Quiz de dos preguntas".into(),
            topic: "Pruebas".into(),
            description: "Diez puntos por pregunta.".into(),
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
    fn partida_completa_registra_resultado_y_actualiza_progresion() {
        let mut app = QuizApp::new();
        app.user = Some(UserProfile::nuevo(UserRole::Student));
        app.quizzes.push(quiz_dos_preguntas());

        let idx = app.quizzes.len() - 1;
        app.empezar_quiz(idx);
        app.procesar_respuesta("Marte");
        app.avanzar_pregunta();
        app.procesar_respuesta("True"); // fallo
        app.avanzar_pregunta();

        assert!(app.session.is_none());
        assert_eq!(app.state, AppState::QuizResult);

        let resultado = app.results.last().unwrap();
        assert_eq!((resultado.score, resultado.max_score), (10, 20));

        let progresion = app.user.as_ref().unwrap().progression;
        assert_eq!(progresion, Progression { xp: 10, level: 1 });

        let resumen = app.last_completion.as_ref().unwrap();
        assert!(!resumen.perfecta);
        assert_eq!(resumen.xp_ganada, 10);
    }

    #[test]
    fn salir_antes_de_terminar_no_emite_evento() {
        let mut app = QuizApp::new();
        app.user = Some(UserProfile::nuevo(UserRole::Student));
        app.quizzes.push(quiz_dos_preguntas());

        let idx = app.quizzes.len() - 1;
        app.empezar_quiz(idx);
        app.procesar_respuesta("Marte");
        app.salir_del_quiz();

        assert!(app.results.is_empty());
        assert!(app.last_completion.is_none());
        assert_eq!(
            app.user.as_ref().unwrap().progression,
            Progression::default()
        );
    }
}
