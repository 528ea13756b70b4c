pub mod catalog;
pub mod loaders;
pub mod row;

pub use catalog::{CategoryEntry, TopicCatalog, TopicCount};
pub use loaders::{load_catalog, parse_catalog};
pub use row::{CorrectAnswer, Difficulty, GeneratedRow};
