// src/data.rs

use crate::model::QuestionRecord;

/// Carga las preguntas de ejemplo desde el YAML embebido
pub fn default_questions() -> Vec<QuestionRecord> {
    let file_content = include_str!("data/default_questions.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas YAML")
}
