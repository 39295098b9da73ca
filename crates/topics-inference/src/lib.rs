//! # topics-inference
//!
//! Concrete scorer for the topics classifier: a BERT-style text classifier
//! exported to ONNX, run through ONNX Runtime (`ort`), fed by a WordPiece
//! tokenizer and mapped back to category labels via a labels file.

pub mod activation;
pub mod labels;
pub mod onnx_model;
pub mod tokenizer;

pub use labels::LabelMap;
pub use onnx_model::OnnxTopicModel;
pub use tokenizer::WordPieceTokenizer;
