//! Plan diagnostics.
//!
//! Every plan resolves, but some resolve to something the author probably did
//! not mean. This pass points those out without changing the result.

use std::fmt;

use frame_core::{Field, LayoutDirection};

use crate::plan::Plan;

/// A finding about one attribute of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The attribute at `index` derives a position from this node's own
    /// `field`, but no earlier attribute set it. The node's previous size is
    /// used, which may be stale.
    StaleSize { index: usize, field: Field },
    /// The attribute at `index` references the node being laid out.
    SelfReference { index: usize },
    /// `field` written by the attribute at `index` is overwritten by the one at
    /// `by` before anything reads it.
    Overridden { index: usize, by: usize, field: Field },
}

impl Diagnostic {
    /// Index of the attribute the diagnostic is about.
    pub fn index(&self) -> usize {
        match *self {
            Diagnostic::StaleSize { index, .. }
            | Diagnostic::SelfReference { index }
            | Diagnostic::Overridden { index, .. } => index,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::StaleSize { index, field } => {
                write!(f, "attribute {index} reads {field} before any attribute sets it")
            }
            Diagnostic::SelfReference { index } => {
                write!(f, "attribute {index} references the node being laid out")
            }
            Diagnostic::Overridden { index, by, field } => {
                write!(f, "{field} set by attribute {index} is overwritten by attribute {by}")
            }
        }
    }
}

/// Per-field bookkeeping while walking the plan.
#[derive(Default, Clone, Copy)]
struct FieldState {
    /// Index of the last attribute that wrote the field.
    written_by: Option<usize>,
    /// Whether anything read the field since that write.
    read: bool,
}

/// Record a write to one field, reporting an earlier write nothing read.
fn overwrite(
    state: &mut FieldState,
    index: usize,
    field: Field,
    written_by: Option<usize>,
    found: &mut Vec<Diagnostic>,
) {
    if let (Some(previous), false) = (state.written_by, state.read) {
        found.push(Diagnostic::Overridden { index: previous, by: index, field });
    }
    *state = FieldState { written_by, read: false };
}

/// Check `plan` as it would be applied to `target` under `direction`.
///
/// Diagnostics come back in attribute order.
pub fn validate<N: Copy + PartialEq>(
    plan: &Plan<N>,
    target: N,
    direction: LayoutDirection,
) -> Vec<Diagnostic> {
    let mut fields = [FieldState::default(); 4];
    let mut found = Vec::new();

    for (index, attribute) in plan.iter().enumerate() {
        if attribute.peers().any(|peer| peer == target) {
            found.push(Diagnostic::SelfReference { index });
        }

        if let Some(field) = attribute.reads(direction) {
            let state = &mut fields[field.index()];
            if state.written_by.is_none() {
                found.push(Diagnostic::StaleSize { index, field });
            }
            state.read = true;
        }

        for &field in attribute.writes() {
            overwrite(&mut fields[field.index()], index, field, Some(index), &mut found);
        }
        // A span's origin is provisional: it may clobber an earlier explicit
        // write, but overwriting it later is not reported.
        if let Some(field) = attribute.side_write() {
            overwrite(&mut fields[field.index()], index, field, None, &mut found);
        }
    }

    found
}
