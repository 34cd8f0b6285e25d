pub mod merged;
pub mod question;
pub mod source_file;

pub use merged::{MergeStats, MergedOutput, NumberedQuestion};
pub use question::{QuestionBlock, UniqueQuestionSet};
pub use source_file::SourceFile;
