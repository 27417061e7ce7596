use super::*;
use crate::ai::construir_quiz;
use crate::model::AppState;
use std::sync::mpsc;

#[cfg(not(target_arch = "wasm32"))]
use crate::ai::QuizGenerator;
#[cfg(not(target_arch = "wasm32"))]
use crate::ai::gemini::GeminiGenerator;

impl QuizApp {
    /// Lanza la generación de un quiz con IA desde el formulario de creación.
    ///
    /// Mientras haya una petición en vuelo, volver a pulsar es un no-op: solo
    /// puede haber una generación en curso y no hay cancelación.
    pub fn iniciar_generacion(&mut self) {
        if self.pending_generation.is_some() {
            self.message = "⏳ Ya hay una generación en curso. Espera el resultado.".into();
            return;
        }

        let topic = self.form_topic.trim().to_string();
        if topic.is_empty() {
            self.message = "⚠ Escribe un tema antes de generar.".into();
            return;
        }

        let peticion = GenerationRequest {
            topic,
            difficulty: self.form_difficulty,
            count: self.form_count,
        };

        let (tx, rx) = mpsc::channel::<Result<QuizDraft, GenerationError>>();
        self.generation_rx = Some(rx);
        self.pending_generation = Some(peticion.clone());
        self.message = "⏳ Generando quiz con IA...".into();
        log::info!(
            "Generación lanzada: tema «{}», {} preguntas",
            peticion.topic,
            peticion.count
        );

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let generador = GeminiGenerator::from_env();
            let _ = tx.send(generador.generate(&peticion));
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let resultado = crate::ai::gemini::generate_fetch(&peticion).await;
            let _ = tx.send(resultado);
        });
    }

    /// Recoge el resultado de la generación en vuelo, si ya ha llegado.
    pub fn poll_generacion(&mut self) {
        let maybe_resultado = self
            .generation_rx
            .as_ref()
            .and_then(|rx| rx.try_recv().ok());

        if let Some(resultado) = maybe_resultado {
            self.generation_rx = None;
            self.aplicar_resultado_generacion(resultado);
        }
    }

    pub fn is_generation_pending(&self) -> bool {
        self.pending_generation.is_some()
    }

    /// Valida el borrador recibido y lo publica, o deja al autor en el
    /// formulario con el aviso de fallo. En caso de error la colección no
    /// se toca.
    pub fn aplicar_resultado_generacion(
        &mut self,
        resultado: Result<QuizDraft, GenerationError>,
    ) {
        let Some(peticion) = self.pending_generation.take() else {
            return;
        };

        let autor = self
            .user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Docente".to_string());

        match resultado.and_then(|borrador| construir_quiz(borrador, &peticion, &autor)) {
            Ok(quiz) => {
                log::info!(
                    "Quiz generado: «{}» con {} preguntas",
                    quiz.title,
                    quiz.questions.len()
                );
                self.message = format!("✅ Quiz «{}» creado.", quiz.title);
                self.quizzes.push(quiz);
                self.form_topic.clear();
                self.state = AppState::TeacherDashboard;
            }
            Err(err) => {
                log::warn!("Fallo al generar quiz: {err}");
                // El formulario se conserva tal cual para poder reintentar
                self.message = format!("❌ No se pudo generar el quiz: {err}");
            }
        }
    }
}
