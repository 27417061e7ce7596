//! Frontera con el generador de quizzes por IA.
//!
//! El resto de la aplicación solo conoce [`QuizGenerator`] y los tipos de
//! petición/borrador; el proveedor concreto vive en [`gemini`].

use crate::model::{Difficulty, Question, QuestionKind, Quiz};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub mod gemini;

#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    pub count: u32,
}

/// Borrador de pregunta tal y como lo devuelve el servicio.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "text")]
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    pub explanation: String,
    #[serde(default)]
    pub points: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizDraft {
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionDraft>,
}

#[derive(Debug, Clone)]
pub enum GenerationError {
    MissingApiKey,
    Network(String),
    Http { status: u16, body: String },
    InvalidPayload(String),
    InvalidDraft(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::MissingApiKey => {
                write!(f, "falta la clave de API (MIND_SPARK_API_KEY)")
            }
            GenerationError::Network(err) => write!(f, "error de red: {err}"),
            GenerationError::Http { status, body } => {
                if body.trim().is_empty() {
                    write!(f, "el servicio devolvió HTTP {status}")
                } else {
                    write!(f, "el servicio devolvió HTTP {status}: {}", body.trim())
                }
            }
            GenerationError::InvalidPayload(err) => {
                write!(f, "respuesta del servicio inválida: {err}")
            }
            GenerationError::InvalidDraft(err) => {
                write!(f, "el quiz recibido no es válido: {err}")
            }
        }
    }
}

impl std::error::Error for GenerationError {}

pub trait QuizGenerator {
    fn generate(&self, peticion: &GenerationRequest) -> Result<QuizDraft, GenerationError>;
}

/// Valida el borrador y lo convierte en un [`Quiz`] listo para publicar.
///
/// Cualquier campo ausente o malformado descarta el borrador entero: no se
/// publican quizzes a medias.
pub fn construir_quiz(
    borrador: QuizDraft,
    peticion: &GenerationRequest,
    autor: &str,
) -> Result<Quiz, GenerationError> {
    if borrador.title.trim().is_empty() {
        return Err(GenerationError::InvalidDraft("título vacío".into()));
    }
    if borrador.questions.is_empty() {
        return Err(GenerationError::InvalidDraft("sin preguntas".into()));
    }

    let mut questions = Vec::with_capacity(borrador.questions.len());
    for (i, b) in borrador.questions.into_iter().enumerate() {
        let numero = i + 1;
        let kind = match b.kind.as_str() {
            "MCQ" => QuestionKind::Mcq,
            "TRUE_FALSE" => QuestionKind::TrueFalse,
            "SHORT_ANSWER" => QuestionKind::ShortAnswer,
            otro => {
                return Err(GenerationError::InvalidDraft(format!(
                    "pregunta {numero}: tipo desconocido «{otro}»"
                )));
            }
        };
        if b.prompt.trim().is_empty() {
            return Err(GenerationError::InvalidDraft(format!(
                "pregunta {numero}: enunciado vacío"
            )));
        }
        let points = b.points.unwrap_or(10);
        if points == 0 {
            return Err(GenerationError::InvalidDraft(format!(
                "pregunta {numero}: puntuación cero"
            )));
        }
        match kind {
            QuestionKind::Mcq => {
                if b.options.len() < 2 {
                    return Err(GenerationError::InvalidDraft(format!(
                        "pregunta {numero}: opciones insuficientes"
                    )));
                }
                if !b.options.contains(&b.correct_answer) {
                    return Err(GenerationError::InvalidDraft(format!(
                        "pregunta {numero}: la respuesta correcta no figura entre las opciones"
                    )));
                }
            }
            QuestionKind::TrueFalse => {
                if b.correct_answer != "True" && b.correct_answer != "False" {
                    return Err(GenerationError::InvalidDraft(format!(
                        "pregunta {numero}: respuesta verdadero/falso inválida"
                    )));
                }
            }
            QuestionKind::ShortAnswer => {
                if b.correct_answer.trim().is_empty() {
                    return Err(GenerationError::InvalidDraft(format!(
                        "pregunta {numero}: respuesta correcta vacía"
                    )));
                }
            }
        }

        questions.push(Question {
            id: Uuid::new_v4().to_string(),
            kind,
            prompt: b.prompt,
            options: if kind == QuestionKind::Mcq {
                b.options
            } else {
                Vec::new()
            },
            correct_answer: b.correct_answer,
            explanation: b.explanation,
            points,
        });
    }

    Ok(Quiz {
        id: Uuid::new_v4().to_string(),
        title: borrador.title,
        topic: peticion.topic.clone(),
        description: borrador.description,
        difficulty: peticion.difficulty,
        questions,
        created_by: autor.to_string(),
        created_at: Utc::now(),
        ai_generated: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peticion() -> GenerationRequest {
        GenerationRequest {
            topic: "Astronomía".into(),
            difficulty: Difficulty::Easy,
            count: 3,
        }
    }

    fn borrador_valido() -> QuizDraft {
        QuizDraft {
            title: "Planetas".into(),
            description: "Un paseo por el sistema solar.".into(),
            questions: vec![
                QuestionDraft {
                    kind: "MCQ".into(),
                    prompt: "¿Planeta rojo?".into(),
                    options: vec!["Marte".into(), "Venus".into()],
                    correct_answer: "Marte".into(),
                    explanation: "Óxido de hierro.".into(),
                    points: Some(15),
                },
                QuestionDraft {
                    kind: "TRUE_FALSE".into(),
                    prompt: "El Sol es una estrella.".into(),
                    options: vec![],
                    correct_answer: "True".into(),
                    explanation: "Secuencia principal.".into(),
                    points: None,
                },
            ],
        }
    }

    #[test]
    fn el_borrador_valido_se_convierte_en_quiz() {
        let quiz = construir_quiz(borrador_valido(), &peticion(), "Ms. Johnson").unwrap();
        assert_eq!(quiz.topic, "Astronomía");
        assert_eq!(quiz.questions.len(), 2);
        assert!(quiz.ai_generated);
        assert!(quiz.questions.iter().all(|q| q.is_coherent()));
    }

    #[test]
    fn los_puntos_ausentes_valen_diez() {
        let quiz = construir_quiz(borrador_valido(), &peticion(), "Ms. Johnson").unwrap();
        assert_eq!(quiz.questions[1].points, 10);
        assert_eq!(quiz.max_score(), 25);
    }

    #[test]
    fn tipo_desconocido_descarta_el_borrador() {
        let mut borrador = borrador_valido();
        borrador.questions[0].kind = "ESSAY".into();
        assert!(matches!(
            construir_quiz(borrador, &peticion(), "Ms. Johnson"),
            Err(GenerationError::InvalidDraft(_))
        ));
    }

    #[test]
    fn respuesta_fuera_de_las_opciones_descarta_el_borrador() {
        let mut borrador = borrador_valido();
        borrador.questions[0].correct_answer = "Júpiter".into();
        assert!(construir_quiz(borrador, &peticion(), "Ms. Johnson").is_err());
    }

    #[test]
    fn verdadero_falso_exige_true_o_false() {
        let mut borrador = borrador_valido();
        borrador.questions[1].correct_answer = "Verdadero".into();
        assert!(construir_quiz(borrador, &peticion(), "Ms. Johnson").is_err());
    }

    #[test]
    fn puntuacion_cero_descarta_el_borrador() {
        let mut borrador = borrador_valido();
        borrador.questions[0].points = Some(0);
        assert!(construir_quiz(borrador, &peticion(), "Ms. Johnson").is_err());
    }

    #[test]
    fn sin_preguntas_no_hay_quiz() {
        let mut borrador = borrador_valido();
        borrador.questions.clear();
        assert!(construir_quiz(borrador, &peticion(), "Ms. Johnson").is_err());
    }

    #[test]
    fn las_opciones_solo_se_conservan_en_mcq() {
        let mut borrador = borrador_valido();
        borrador.questions[1].options = vec!["True".into(), "False".into()];
        let quiz = construir_quiz(borrador, &peticion(), "Ms. Johnson").unwrap();
        assert!(quiz.questions[1].options.is_empty());
    }
}
