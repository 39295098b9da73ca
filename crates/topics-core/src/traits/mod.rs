mod inference;

pub use inference::IInferenceEngine;
