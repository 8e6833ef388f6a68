/*
 * diagnostic.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Non-fatal diagnostics collected while transforming a document.
 */

//! Non-fatal diagnostics.
//!
//! Transforms never print. They hand warnings to a [`DiagnosticCollector`],
//! and the collected [`Diagnostic`]s travel back to the caller alongside the
//! transformed tree. Fatal problems are errors, not diagnostics.

use serde::{Deserialize, Serialize};

/// The kind of diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    /// A problem that did not stop the transform
    Warning,
}

/// A single diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,

    /// Name of the transform that produced the message
    pub transform: String,

    pub message: String,
}

impl Diagnostic {
    pub fn warning(transform: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Warning,
            transform: transform.into(),
            message: message.into(),
        }
    }

    /// Render as a single human-readable line.
    pub fn to_text(&self) -> String {
        let label = match self.kind {
            DiagnosticKind::Warning => "Warning",
        };
        format!("{} [{}]: {}", label, self.transform, self.message)
    }
}

/// Collector for diagnostic messages produced by one transform.
#[derive(Debug)]
pub struct DiagnosticCollector {
    transform: String,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a collector that tags every message with `transform`.
    pub fn new(transform: impl Into<String>) -> Self {
        Self {
            transform: transform.into(),
            diagnostics: Vec::new(),
        }
    }

    /// Add a warning message
    pub fn warn(&mut self, message: impl Into<String>) {
        self.diagnostics
            .push(Diagnostic::warning(self.transform.clone(), message));
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get a reference to the collected diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the collector and return the diagnostics in emission order
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
