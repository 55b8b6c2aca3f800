use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{QuizError, QuizResult};

/// Una de las cuatro opciones que se muestran al jugador.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub const ALL: [Choice; 4] = [Choice::A, Choice::B, Choice::C, Choice::D];

    pub fn letter(self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
            Choice::C => "C",
            Choice::D => "D",
        }
    }

    /// Etiqueta con la que se guarda la respuesta correcta (`"answerA"`...)
    pub fn answer_key(self) -> &'static str {
        match self {
            Choice::A => "answerA",
            Choice::B => "answerB",
            Choice::C => "answerC",
            Choice::D => "answerD",
        }
    }

    pub fn from_answer_key(key: &str) -> Option<Choice> {
        Choice::ALL.into_iter().find(|c| c.answer_key() == key)
    }
}

impl FromStr for Choice {
    type Err = QuizError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Choice::ALL
            .into_iter()
            .find(|c| c.letter() == tag)
            .ok_or_else(|| QuizError::Validation(format!("unknown choice tag '{tag}'")))
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Pregunta tal y como vive en el almacenamiento.
///
/// La lectura es tolerante: un campo con tipo inesperado (`null`, número...)
/// o un elemento que ni siquiera es objeto se lee como registro inválido en
/// vez de invalidar toda la colección. El JSON original se guarda en `raw` y
/// se reescribe tal cual hasta que el registro se sustituye con `update`.
#[derive(Debug, Clone, Default)]
pub struct QuestionRecord {
    pub id: String,
    pub title: Option<String>,
    pub answer_a: String,
    pub answer_b: String,
    pub answer_c: String,
    pub answer_d: String,
    pub correct: Option<String>,
    /// Claves que no son de la pregunta; sobreviven a las ediciones
    pub extra: Map<String, Value>,
    pub(crate) raw: Option<Value>,
}

// `raw` es solo la copia de lo leído, no cuenta para la igualdad
impl PartialEq for QuestionRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.answer_a == other.answer_a
            && self.answer_b == other.answer_b
            && self.answer_c == other.answer_c
            && self.answer_d == other.answer_d
            && self.correct == other.correct
            && self.extra == other.extra
    }
}

impl Eq for QuestionRecord {}

/// Texto mostrable de un valor cualquiera (`null` -> vacío)
fn text_of(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl QuestionRecord {
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Self {
                raw: Some(value),
                ..Default::default()
            };
        }

        let mut extra = value.as_object().cloned().unwrap_or_default();
        let id = match extra.remove("id") {
            Some(Value::String(s)) => s,
            _ => String::new(),
        };
        let title = extra.remove("title").map(text_of);
        let answer_a = extra.remove("answerA").map(text_of).unwrap_or_default();
        let answer_b = extra.remove("answerB").map(text_of).unwrap_or_default();
        let answer_c = extra.remove("answerC").map(text_of).unwrap_or_default();
        let answer_d = extra.remove("answerD").map(text_of).unwrap_or_default();
        let correct = match extra.remove("correct") {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };

        Self {
            id,
            title,
            answer_a,
            answer_b,
            answer_c,
            answer_d,
            correct,
            extra,
            raw: Some(value),
        }
    }

    fn to_value(&self) -> Value {
        let mut map = self.extra.clone();
        if !self.id.is_empty() {
            map.insert("id".into(), Value::String(self.id.clone()));
        }
        if let Some(title) = &self.title {
            map.insert("title".into(), Value::String(title.clone()));
        }
        for choice in Choice::ALL {
            map.insert(
                choice.answer_key().into(),
                Value::String(self.answer(choice).to_string()),
            );
        }
        map.insert(
            "correct".into(),
            self.correct.clone().map(Value::String).unwrap_or(Value::Null),
        );
        Value::Object(map)
    }
}

impl Serialize for QuestionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.raw {
            Some(raw) => raw.serialize(serializer),
            None => self.to_value().serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for QuestionRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(QuestionRecord::from_value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDefect {
    MissingId,
    MissingTitle,
    BadCorrect(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatus {
    Valid,
    Invalid(RecordDefect),
}

impl QuestionRecord {
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn answer(&self, choice: Choice) -> &str {
        match choice {
            Choice::A => &self.answer_a,
            Choice::B => &self.answer_b,
            Choice::C => &self.answer_c,
            Choice::D => &self.answer_d,
        }
    }

    pub fn correct_choice(&self) -> Option<Choice> {
        self.correct.as_deref().and_then(Choice::from_answer_key)
    }

    pub fn status(&self) -> RecordStatus {
        if self.id.is_empty() {
            RecordStatus::Invalid(RecordDefect::MissingId)
        } else if self.title.is_none() {
            RecordStatus::Invalid(RecordDefect::MissingTitle)
        } else if self.correct_choice().is_none() {
            RecordStatus::Invalid(RecordDefect::BadCorrect(self.correct.clone()))
        } else {
            RecordStatus::Valid
        }
    }

    /// Visible en el listado del editor: basta con id y título definidos
    pub fn is_listed(&self) -> bool {
        !self.id.is_empty() && self.title.is_some()
    }

    pub fn is_playable(&self) -> bool {
        self.status() == RecordStatus::Valid
    }
}

/// Campos del formulario de creación/edición (todo menos el id).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub title: String,
    pub answer_a: String,
    pub answer_b: String,
    pub answer_c: String,
    pub answer_d: String,
    /// Valor del radio marcado (`"answerA"`...), `None` si no hay ninguno
    pub correct: Option<String>,
}

impl QuestionDraft {
    pub fn from_record(record: &QuestionRecord) -> Self {
        Self {
            title: record.title_text().to_string(),
            answer_a: record.answer_a.clone(),
            answer_b: record.answer_b.clone(),
            answer_c: record.answer_c.clone(),
            answer_d: record.answer_d.clone(),
            correct: record.correct.clone(),
        }
    }

    pub fn answer_mut(&mut self, choice: Choice) -> &mut String {
        match choice {
            Choice::A => &mut self.answer_a,
            Choice::B => &mut self.answer_b,
            Choice::C => &mut self.answer_c,
            Choice::D => &mut self.answer_d,
        }
    }

    pub fn validate(&self) -> QuizResult<Choice> {
        if self.title.trim().is_empty() {
            return Err(QuizError::Validation("title must not be empty".into()));
        }
        match self.correct.as_deref() {
            None => Err(QuizError::Validation("no correct answer selected".into())),
            Some(key) => Choice::from_answer_key(key).ok_or_else(|| {
                QuizError::Validation(format!("'{key}' is not a valid correct answer"))
            }),
        }
    }

    /// Construye el registro ya validado con el id dado
    pub fn into_record(self, id: String, correct: Choice) -> QuestionRecord {
        QuestionRecord {
            id,
            title: Some(self.title),
            answer_a: self.answer_a,
            answer_b: self.answer_b,
            answer_c: self.answer_c,
            answer_d: self.answer_d,
            correct: Some(correct.answer_key().to_string()),
            extra: Map::new(),
            raw: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Welcome,
    Editor,
    Quiz,
    Summary,
}
