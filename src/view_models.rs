// src/view_models.rs

use crate::model::{Choice, QuestionRecord};
use crate::score::Tier;

/// Fila del listado del editor
#[derive(Clone, Debug)]
pub struct QuestionRow {
    pub id: String,
    pub title: String,
    pub correct: Option<Choice>,
}

impl QuestionRow {
    pub fn from_record(record: &QuestionRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title_text().to_string(),
            correct: record.correct_choice(),
        }
    }

    pub fn label(&self) -> String {
        match self.correct {
            Some(choice) => format!("{}  ({choice})", self.title),
            None => format!("{}  ⚠ sin respuesta correcta", self.title),
        }
    }
}

/// Pregunta en juego, lista para pintar
#[derive(Clone, Debug)]
pub struct QuestionCard {
    pub number: usize,
    pub total: usize,
    pub title: String,
    pub options: Vec<(Choice, String)>,
}

impl QuestionCard {
    pub fn new(record: &QuestionRecord, index: usize, total: usize) -> Self {
        Self {
            number: index + 1,
            total,
            title: record.title_text().to_string(),
            options: Choice::ALL
                .into_iter()
                .map(|c| (c, record.answer(c).to_string()))
                .collect(),
        }
    }
}

/// Insignia que sustituye a las imágenes de resultado
pub fn tier_badge(tier: Tier) -> &'static str {
    match tier {
        Tier::Tier20 => "😢",
        Tier::Tier40 => "😕",
        Tier::Tier60 => "🙂",
        Tier::Tier80 => "😀",
        Tier::Tier100 => "🏆",
    }
}
