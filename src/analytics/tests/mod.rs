//! Cross-component tests driving the detector, extractor, and strategy
//! together the way an external event loop would.
