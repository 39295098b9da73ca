//! Span definitions per operation: classification, inference, bundle load.

/// Create a classification span.
#[macro_export]
macro_rules! classify_span {
    ($input:expr) => {
        tracing::info_span!("topics.classify", input = %$input)
    };
}

/// Create an inference span.
#[macro_export]
macro_rules! inference_span {
    ($engine:expr) => {
        tracing::debug_span!("topics.inference", engine = %$engine)
    };
}

/// Create a bundle-load span.
#[macro_export]
macro_rules! bundle_load_span {
    ($dir:expr) => {
        tracing::info_span!("topics.bundle_load", dir = %$dir)
    };
}

