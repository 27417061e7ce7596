// src/data.rs

use crate::model::Quiz;

/// Carga la colección inicial de quizzes desde el YAML embebido
pub fn read_seed_quizzes() -> Vec<Quiz> {
    let file_content = include_str!("data/seed_quizzes.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear la colección de quizzes YAML")
}

#[cfg(test)]
mod tests {
    use super::read_seed_quizzes;

    #[test]
    fn la_coleccion_inicial_no_esta_vacia() {
        let quizzes = read_seed_quizzes();
        assert!(!quizzes.is_empty());
        for quiz in &quizzes {
            assert!(!quiz.questions.is_empty(), "quiz sin preguntas: {}", quiz.id);
        }
    }

    #[test]
    fn todas_las_preguntas_iniciales_son_coherentes() {
        for quiz in read_seed_quizzes() {
            for q in &quiz.questions {
                assert!(q.is_coherent(), "pregunta incoherente: {}", q.id);
            }
            assert!(quiz.max_score() > 0);
        }
    }
}
