//! Entry selection and destination writing.

mod engine;
mod writer;

pub(crate) use engine::Selection;
pub(crate) use engine::run;
