pub mod deduplicator;
pub mod extractor;
pub mod pdf_renderer;
pub mod text_writer;
pub mod typography;

pub use deduplicator::{AbsorbResult, Deduplicator};
pub use extractor::extract_questions;
pub use pdf_renderer::{DocumentPlan, PdfLayout, PdfRenderer, RenderBlock};
pub use text_writer::TextWriter;
pub use typography::normalize_typography;
