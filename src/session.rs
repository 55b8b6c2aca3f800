// src/session.rs

use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use crate::data::default_questions;
use crate::error::{QuizError, QuizResult};
use crate::model::{Choice, QuestionRecord};
use crate::score::{Tier, classify, score_percent};
use crate::storage::{KeyValueStore, PersistenceGateway};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

/// De dónde saca la sesión sus preguntas al empezar.
pub trait QuestionLoader {
    fn load_snapshot(&mut self) -> Vec<QuestionRecord>;
}

impl<F: FnMut() -> Vec<QuestionRecord>> QuestionLoader for F {
    fn load_snapshot(&mut self) -> Vec<QuestionRecord> {
        self()
    }
}

/// Cargador del modo juego: usa lo guardado y, si no hay nada aprovechable,
/// siembra el almacenamiento con las preguntas de ejemplo.
#[derive(Clone, Debug)]
pub struct SeedingLoader<S> {
    gateway: PersistenceGateway<S>,
}

impl<S: KeyValueStore> SeedingLoader<S> {
    pub fn new(store: S) -> Self {
        Self {
            gateway: PersistenceGateway::new(store),
        }
    }
}

impl<S: KeyValueStore> QuestionLoader for SeedingLoader<S> {
    fn load_snapshot(&mut self) -> Vec<QuestionRecord> {
        match self.gateway.load_questions() {
            Ok(Some(questions)) if !questions.is_empty() => return questions,
            Ok(_) => info!("No stored questions, seeding the built-in set"),
            Err(e) if e.is_recoverable() => {
                warn!("Stored questions unreadable, seeding the built-in set: {e}")
            }
            Err(e) => error!("Unexpected error loading questions, seeding the built-in set: {e}"),
        }
        let defaults = default_questions();
        if let Err(e) = self.gateway.save_questions(&defaults) {
            error!("Failed to seed built-in questions: {e}");
        }
        defaults
    }
}

/// Lo que la UI necesita tras cada respuesta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub was_correct: bool,
    pub state: SessionState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    pub score_percent: u8,
    pub tier: Tier,
}

/// Una partida: copia propia de las preguntas, posición y aciertos.
///
/// Invariante: `score <= current_index <= snapshot.len()`.
pub struct QuizSession<L> {
    loader: L,
    snapshot: Vec<QuestionRecord>,
    current_index: usize,
    score: usize,
    state: SessionState,
}

impl<L: QuestionLoader> QuizSession<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            snapshot: Vec::new(),
            current_index: 0,
            score: 0,
            state: SessionState::NotStarted,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.snapshot.len()
    }

    /// Empieza (o reinicia) una partida con una copia fresca de las preguntas
    pub fn start(&mut self) -> SessionState {
        let loaded = self.loader.load_snapshot();
        let loaded_len = loaded.len();
        self.snapshot = loaded.into_iter().filter(|q| q.is_playable()).collect();
        if self.snapshot.len() < loaded_len {
            warn!(
                "Skipping {} invalid question(s)",
                loaded_len - self.snapshot.len()
            );
        }

        self.current_index = 0;
        self.score = 0;
        self.state = if self.snapshot.is_empty() {
            SessionState::Finished
        } else {
            SessionState::InProgress
        };
        debug!(
            "Session started with {} question(s): {:?}",
            self.snapshot.len(),
            self.state
        );
        self.state
    }

    pub fn current_question(&self) -> QuizResult<&QuestionRecord> {
        match self.state {
            SessionState::NotStarted => Err(QuizError::InvalidState { actual: self.state }),
            SessionState::Finished => Err(QuizError::SessionFinished),
            SessionState::InProgress => self
                .snapshot
                .get(self.current_index)
                .ok_or(QuizError::SessionFinished),
        }
    }

    /// Responde con la letra de la opción (`"A"`..`"D"`)
    pub fn submit_answer(&mut self, choice_tag: &str) -> QuizResult<AnswerOutcome> {
        self.ensure_in_progress()?;
        let choice: Choice = choice_tag.parse()?;
        self.submit_choice(choice)
    }

    pub fn submit_choice(&mut self, choice: Choice) -> QuizResult<AnswerOutcome> {
        self.ensure_in_progress()?;
        let question = self.current_question()?;
        let was_correct = question.correct.as_deref() == Some(choice.answer_key());

        if was_correct {
            self.score += 1;
        }
        self.current_index += 1;
        if self.current_index >= self.snapshot.len() {
            self.state = SessionState::Finished;
        }
        debug!(
            "Answer {choice}: correct={was_correct}, {}/{}",
            self.current_index,
            self.snapshot.len()
        );
        Ok(AnswerOutcome {
            was_correct,
            state: self.state,
        })
    }

    pub fn result(&self) -> QuizResult<QuizScore> {
        if self.state != SessionState::Finished {
            return Err(QuizError::InvalidState { actual: self.state });
        }
        let score_percent = score_percent(self.score, self.snapshot.len());
        Ok(QuizScore {
            correct: self.score,
            total: self.snapshot.len(),
            score_percent,
            tier: classify(score_percent),
        })
    }

    fn ensure_in_progress(&self) -> QuizResult<()> {
        if self.state == SessionState::InProgress {
            Ok(())
        } else {
            Err(QuizError::InvalidState { actual: self.state })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionDraft;
    use crate::repository::QuestionRepository;
    use crate::storage::{MemoryStore, STORAGE_KEY};

    fn question(id: &str, correct: &str) -> QuestionRecord {
        QuestionRecord {
            id: id.into(),
            title: Some(format!("title {id}")),
            answer_a: "a".into(),
            answer_b: "b".into(),
            answer_c: "c".into(),
            answer_d: "d".into(),
            correct: Some(correct.into()),
            ..Default::default()
        }
    }

    fn fixed(questions: Vec<QuestionRecord>) -> impl FnMut() -> Vec<QuestionRecord> {
        move || questions.clone()
    }

    fn three() -> Vec<QuestionRecord> {
        vec![
            question("1", "answerA"),
            question("2", "answerC"),
            question("3", "answerD"),
        ]
    }

    fn assert_invariants<L: QuestionLoader>(session: &QuizSession<L>) {
        assert!(session.score() <= session.current_index());
        assert!(session.current_index() <= session.total());
    }

    #[test]
    fn scoring_scenario_two_of_three() {
        let mut session = QuizSession::new(fixed(three()));
        assert_eq!(session.start(), SessionState::InProgress);

        assert!(session.submit_answer("A").unwrap().was_correct);
        assert!(session.submit_answer("C").unwrap().was_correct);
        let last = session.submit_answer("B").unwrap();
        assert!(!last.was_correct);
        assert_eq!(last.state, SessionState::Finished);

        assert_eq!(session.score(), 2);
        let result = session.result().unwrap();
        assert_eq!(result.score_percent, 67);
        assert_eq!(result.tier, Tier::Tier80);
        assert_eq!((result.correct, result.total), (2, 3));
    }

    #[test]
    fn current_question_follows_the_index() {
        let mut session = QuizSession::new(fixed(three()));
        session.start();
        assert_eq!(session.current_question().unwrap().id, "1");
        session.submit_choice(Choice::B).unwrap();
        assert_eq!(session.current_question().unwrap().id, "2");
    }

    #[test]
    fn submit_after_finish_changes_nothing() {
        let mut session = QuizSession::new(fixed(vec![question("1", "answerA")]));
        session.start();
        session.submit_answer("A").unwrap();
        assert_eq!(session.state(), SessionState::Finished);

        let err = session.submit_answer("A").unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidState {
                actual: SessionState::Finished
            }
        );
        assert_eq!(session.score(), 1);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.current_question().unwrap_err(), QuizError::SessionFinished);
    }

    #[test]
    fn operations_before_start_are_invalid() {
        let mut session = QuizSession::new(fixed(three()));
        assert!(matches!(
            session.submit_answer("A"),
            Err(QuizError::InvalidState { .. })
        ));
        assert!(matches!(
            session.current_question(),
            Err(QuizError::InvalidState { .. })
        ));
        assert!(matches!(session.result(), Err(QuizError::InvalidState { .. })));
    }

    #[test]
    fn unknown_choice_tag_is_rejected_without_advancing() {
        let mut session = QuizSession::new(fixed(three()));
        session.start();
        assert!(matches!(
            session.submit_answer("answerA"),
            Err(QuizError::Validation(_))
        ));
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn empty_snapshot_finishes_at_zero() {
        let mut session = QuizSession::new(fixed(Vec::new()));
        assert_eq!(session.start(), SessionState::Finished);
        let result = session.result().unwrap();
        assert_eq!(result.score_percent, 0);
        assert_eq!(result.tier.as_str(), "tier20");
    }

    #[test]
    fn invalid_records_are_not_played() {
        let mut broken = question("x", "answerA");
        broken.correct = None;
        let mut session = QuizSession::new(fixed(vec![broken.clone(), question("1", "answerB")]));
        session.start();
        assert_eq!(session.total(), 1);
        assert_eq!(session.current_question().unwrap().id, "1");

        let mut only_broken = QuizSession::new(fixed(vec![broken]));
        assert_eq!(only_broken.start(), SessionState::Finished);
        assert_eq!(only_broken.result().unwrap().score_percent, 0);
    }

    #[test]
    fn start_on_empty_store_seeds_three_defaults() {
        let store = MemoryStore::default();
        let mut session = QuizSession::new(SeedingLoader::new(store.clone()));
        session.start();
        assert_eq!(session.total(), 3);

        let seeded = PersistenceGateway::new(store).load_questions().unwrap().unwrap();
        assert_eq!(seeded.len(), 3);
        assert_eq!(seeded[0].id, "default-1");
    }

    #[test]
    fn empty_array_or_garbage_also_seeds() {
        for raw in ["[]", "not json", r#"{"a":1}"#] {
            let store = MemoryStore::with_raw(STORAGE_KEY, raw);
            let mut session = QuizSession::new(SeedingLoader::new(store));
            session.start();
            assert_eq!(session.total(), 3, "raw value {raw}");
        }
    }

    #[test]
    fn stored_questions_are_used_as_is() {
        let store = MemoryStore::default();
        PersistenceGateway::new(store.clone())
            .save_questions(&three())
            .unwrap();
        let mut session = QuizSession::new(SeedingLoader::new(store));
        session.start();
        assert_eq!(session.total(), 3);
        assert_eq!(session.current_question().unwrap().id, "1");
    }

    #[test]
    fn snapshot_is_isolated_from_later_edits() {
        let store = MemoryStore::default();
        let mut repo = QuestionRepository::new(store.clone());
        let q = repo
            .create(QuestionDraft {
                title: "only".into(),
                correct: Some("answerA".into()),
                ..Default::default()
            })
            .unwrap();

        let mut session = QuizSession::new(SeedingLoader::new(store));
        session.start();
        repo.delete(&q.id);
        repo.restore_defaults();

        assert_eq!(session.current_question().unwrap().id, q.id);
        assert!(session.submit_answer("A").unwrap().was_correct);
        assert_eq!(session.result().unwrap().score_percent, 100);
    }

    #[test]
    fn restart_resets_progress() {
        let mut session = QuizSession::new(fixed(three()));
        session.start();
        session.submit_answer("A").unwrap();
        session.start();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn invariants_hold_for_every_answer_sequence() {
        for seq in 0..64u32 {
            let mut session = QuizSession::new(fixed(three()));
            session.start();
            assert_invariants(&session);
            for step in 0..3 {
                let choice = Choice::ALL[((seq >> (2 * step)) & 3) as usize];
                session.submit_choice(choice).unwrap();
                assert_invariants(&session);
            }
            assert_eq!(session.state(), SessionState::Finished);
            assert!(session.submit_choice(Choice::A).is_err());
            assert_invariants(&session);
        }
    }
}
