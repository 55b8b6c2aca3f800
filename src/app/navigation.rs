// Navegación entre vistas y flujo del modo juego

use super::*;
use crate::model::Choice;
use crate::session::{QuizScore, SessionState};

impl<S: KeyValueStore + Clone> QuizApp<S> {
    pub fn ir_a_inicio(&mut self) {
        self.state = AppState::Welcome;
        self.message.clear();
    }

    /// Entra al editor releyendo lo guardado
    pub fn ir_a_editor(&mut self) {
        self.repository.load();
        self.cerrar_dialogo();
        self.state = AppState::Editor;
        self.message.clear();
    }

    pub fn empezar_quiz(&mut self) {
        self.message.clear();
        self.state = match self.session.start() {
            SessionState::Finished => AppState::Summary,
            _ => AppState::Quiz,
        };
    }

    pub fn tarjeta_actual(&self) -> Option<QuestionCard> {
        self.session
            .current_question()
            .ok()
            .map(|q| QuestionCard::new(q, self.session.current_index(), self.session.total()))
    }

    pub fn responder(&mut self, choice: Choice) {
        match self.session.submit_choice(choice) {
            Ok(outcome) if outcome.state == SessionState::Finished => {
                self.state = AppState::Summary;
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("Answer ignored: {e}");
                self.message = format!("⚠ {e}");
            }
        }
    }

    pub fn resultado(&self) -> Option<QuizScore> {
        self.session.result().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Tier;
    use crate::storage::MemoryStore;

    #[test]
    fn playing_the_seeded_quiz() {
        let mut app = QuizApp::with_store(MemoryStore::default());
        app.empezar_quiz();
        assert_eq!(app.state, AppState::Quiz);

        let card = app.tarjeta_actual().unwrap();
        assert_eq!((card.number, card.total), (1, 3));
        assert_eq!(card.title, "What does HTML stand for?");

        app.responder(Choice::C);
        app.responder(Choice::B);
        app.responder(Choice::D);
        assert_eq!(app.state, AppState::Summary);
        assert!(app.tarjeta_actual().is_none());

        let result = app.resultado().unwrap();
        assert_eq!(result.score_percent, 67);
        assert_eq!(result.tier, Tier::Tier80);
    }

    #[test]
    fn editor_sees_seeded_questions_after_playing() {
        let mut app = QuizApp::with_store(MemoryStore::default());
        app.ir_a_editor();
        assert!(app.question_rows().is_empty());

        app.empezar_quiz();
        app.ir_a_editor();
        assert_eq!(app.question_rows().len(), 3);
    }

    #[test]
    fn answering_before_start_shows_message() {
        let mut app = QuizApp::with_store(MemoryStore::default());
        app.responder(Choice::A);
        assert!(!app.message.is_empty());
        assert_eq!(app.state, AppState::Welcome);
    }
}
