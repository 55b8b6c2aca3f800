pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod repository;
pub mod score;
pub mod session;
pub mod storage;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use error::{QuizError, QuizResult};
pub use repository::QuestionRepository;
pub use score::{Tier, classify};
pub use session::{QuizSession, SeedingLoader, SessionState};
