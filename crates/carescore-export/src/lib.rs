//! carescore-export
//!
//! Report generation: assessment + analysis → Markdown (via Tera) → DOCX.

pub mod docx;
pub mod error;
pub mod report;
pub mod render;
pub mod styles;
pub mod templates;
