use super::{GenerationError, GenerationRequest, QuizDraft};
use crate::model::Difficulty;
use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use super::QuizGenerator;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Cliente contra el endpoint REST `generateContent` de Gemini.
pub struct GeminiGenerator {
    api_key: Option<String>,
    endpoint: String,
    model: String,
}

impl GeminiGenerator {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        fn var(nombre: &str) -> Option<String> {
            std::env::var(nombre).ok().filter(|s| !s.trim().is_empty())
        }
        Self {
            api_key: var("MIND_SPARK_API_KEY"),
            endpoint: var("MIND_SPARK_AI_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: var("MIND_SPARK_AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    // En WASM no hay variables de entorno: la configuración se fija al compilar.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        fn normalize(value: &str) -> Option<String> {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Self {
            api_key: option_env!("MIND_SPARK_API_KEY").and_then(normalize),
            endpoint: option_env!("MIND_SPARK_AI_ENDPOINT")
                .and_then(normalize)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: option_env!("MIND_SPARK_AI_MODEL")
                .and_then(normalize)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    fn url(&self, api_key: &str) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            api_key
        )
    }
}

fn difficulty_wire_name(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Medium => "Medium",
        Difficulty::Hard => "Hard",
    }
}

fn build_request(peticion: &GenerationRequest) -> GeminiRequest {
    let instruccion = format!(
        "You are an expert educational content creator. Create a fun, engaging quiz for students.\n\
         Difficulty: {}.\n\
         Topic: {}.\n\
         Generate {} questions.\n\
         Mix Multiple Choice (MCQ) and True/False questions.\n\
         For MCQ, provide exactly 4 options.\n\
         Respond with a single JSON object: {{\"title\", \"description\", \"questions\": \
         [{{\"type\": \"MCQ\"|\"TRUE_FALSE\"|\"SHORT_ANSWER\", \"text\", \"options\", \
         \"correctAnswer\", \"explanation\", \"points\"}}]}}.\n\
         Ensure the tone is encouraging and educational.",
        difficulty_wire_name(peticion.difficulty),
        peticion.topic,
        peticion.count,
    );

    GeminiRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: format!("Generate a quiz about {}", peticion.topic),
            }],
        }],
        system_instruction: Content {
            parts: vec![Part { text: instruccion }],
        },
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            temperature: 0.7,
        },
    }
}

/// Extrae el texto del primer candidato y lo interpreta como borrador de quiz.
fn parse_response(body: &str) -> Result<QuizDraft, GenerationError> {
    let envoltura: GeminiResponse = serde_json::from_str(body)
        .map_err(|err| GenerationError::InvalidPayload(format!("JSON inesperado: {err}")))?;

    let texto = envoltura
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or_else(|| GenerationError::InvalidPayload("respuesta sin candidatos".into()))?;

    serde_json::from_str(&texto).map_err(|err| {
        GenerationError::InvalidPayload(format!("el quiz generado no es JSON válido: {err}"))
    })
}

#[cfg(not(target_arch = "wasm32"))]
impl QuizGenerator for GeminiGenerator {
    fn generate(&self, peticion: &GenerationRequest) -> Result<QuizDraft, GenerationError> {
        let api_key = self.api_key.as_deref().ok_or(GenerationError::MissingApiKey)?;
        let payload = build_request(peticion);

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(self.url(api_key))
            .json(&payload)
            .send()
            .map_err(|err| GenerationError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| GenerationError::Network(err.to_string()))?;

        if !status.is_success() {
            return Err(GenerationError::Http {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&body)
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn generate_fetch(peticion: &GenerationRequest) -> Result<QuizDraft, GenerationError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let generador = GeminiGenerator::from_env();
    let api_key = generador
        .api_key
        .as_deref()
        .ok_or(GenerationError::MissingApiKey)?;

    let payload_json = serde_json::to_string(&build_request(peticion)).map_err(|err| {
        GenerationError::InvalidPayload(format!("no se pudo serializar la petición: {err}"))
    })?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload_json));

    let request = Request::new_with_str_and_init(&generador.url(api_key), &opts)
        .map_err(|err| GenerationError::Network(format!("{err:?}")))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|err| GenerationError::Network(format!("{err:?}")))?;

    let window = web_sys::window()
        .ok_or_else(|| GenerationError::Network("no existe window en el entorno WASM".into()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| GenerationError::Network(format!("{err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| GenerationError::Network("la respuesta fetch no es un Response".into()))?;

    let text_promise = response
        .text()
        .map_err(|err| GenerationError::Network(format!("{err:?}")))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| GenerationError::Network(format!("{err:?}")))?
        .as_string()
        .ok_or_else(|| GenerationError::InvalidPayload("el cuerpo no es texto".into()))?;

    if !response.ok() {
        return Err(GenerationError::Http {
            status: response.status(),
            body: text,
        });
    }

    parse_response(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_response_extrae_el_primer_candidato() {
        let body = r#"{
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "{\"title\":\"Planetas\",\"description\":\"demo\",\"questions\":[{\"type\":\"TRUE_FALSE\",\"text\":\"El Sol es una estrella.\",\"correctAnswer\":\"True\",\"explanation\":\"ok\",\"points\":10}]}"
                    }]
                }
            }]
        }"#;
        let borrador = parse_response(body).unwrap();
        assert_eq!(borrador.title, "Planetas");
        assert_eq!(borrador.questions.len(), 1);
        assert_eq!(borrador.questions[0].kind, "TRUE_FALSE");
    }

    #[test]
    fn parse_response_sin_candidatos_es_error() {
        assert!(matches!(
            parse_response(r#"{"candidates": []}"#),
            Err(GenerationError::InvalidPayload(_))
        ));
    }

    #[test]
    fn parse_response_con_texto_no_json_es_error() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"no soy json"}]}}]}"#;
        assert!(parse_response(body).is_err());
    }

    #[test]
    fn la_url_incluye_modelo_y_clave() {
        let generador = GeminiGenerator {
            api_key: Some("k".into()),
            endpoint: "https://example.test/models/".into(),
            model: "gemini-2.5-flash".into(),
        };
        assert_eq!(
            generador.url("k"),
            "https://example.test/models/gemini-2.5-flash:generateContent?key=k"
        );
    }
}
