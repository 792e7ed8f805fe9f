pub mod storage;
pub mod types;

pub use storage::{
    load_answer_sheet, load_careers, load_catalog, load_questions, AnswerSheet, Catalog,
    CAREERS_FILE, QUESTIONS_FILE,
};
pub use types::{Career, TraitWeights};
