mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use crate::storage::KeyValueStore;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl<S: KeyValueStore + Clone> App for QuizApp<S> {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Barra superior: inicio / editor / jugar (no durante una partida)
        top_panel(self, ctx, !matches!(self.state, AppState::Quiz));

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Editor => views::editor::ui_editor(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary(self, ctx),
        }

        if self.editor.open {
            views::editor::question_dialog(self, ctx);
        }
    }
}
