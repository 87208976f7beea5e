// Adapters layer: concrete implementations for external systems.
// Local storage and configuration providers live under src/config.

pub mod gemini;
