//! Dynamic rows
//!
//! A [`RowList`] holds a growable list of identically shaped sub-forms, such
//! as one caption row per uploaded photo. Rows are cloned from a template
//! form, addressed by a [`RowId`] that is never reused, and submitted
//! together: one failing row blocks the whole list.

use std::fmt;

use crate::error::FormError;
use crate::form::{Form, FormReport, Payload, Submission};

/// Stable identifier of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(u64);

impl RowId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-row reports of one submission attempt, in row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowReport {
    rows: Vec<(RowId, FormReport)>,
}

impl RowReport {
    #[must_use]
    pub fn any_errors(&self) -> bool {
        self.rows.iter().any(|(_, report)| report.any_errors())
    }

    /// Report of one row.
    #[must_use]
    pub fn row(&self, id: RowId) -> Option<&FormReport> {
        self.rows
            .iter()
            .find(|(row, _)| *row == id)
            .map(|(_, report)| report)
    }

    /// Ids of rows with at least one failure.
    pub fn failing_rows(&self) -> impl Iterator<Item = RowId> + '_ {
        self.rows
            .iter()
            .filter(|(_, report)| report.any_errors())
            .map(|(id, _)| *id)
    }
}

/// A list of sub-forms built from one template.
#[derive(Debug, Clone)]
pub struct RowList {
    template: Form,
    rows: Vec<(RowId, Form)>,
    next_id: u64,
}

impl RowList {
    /// Creates an empty list. Every added row starts as a reset copy of
    /// `template`.
    #[must_use]
    pub fn new(mut template: Form) -> Self {
        template.reset();
        Self {
            template,
            rows: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends a fresh row and returns its id.
    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push((id, self.template.clone()));
        tracing::trace!(row = %id, "row added");
        id
    }

    /// Removes a row, returning its form.
    pub fn remove_row(&mut self, id: RowId) -> Result<Form, FormError> {
        let index = self
            .rows
            .iter()
            .position(|(row, _)| *row == id)
            .ok_or(FormError::UnknownRow { id: id.0 })?;
        tracing::trace!(row = %id, "row removed");
        Ok(self.rows.remove(index).1)
    }

    pub fn row(&self, id: RowId) -> Result<&Form, FormError> {
        self.rows
            .iter()
            .find(|(row, _)| *row == id)
            .map(|(_, form)| form)
            .ok_or(FormError::UnknownRow { id: id.0 })
    }

    pub fn row_mut(&mut self, id: RowId) -> Result<&mut Form, FormError> {
        self.rows
            .iter_mut()
            .find(|(row, _)| *row == id)
            .map(|(_, form)| form)
            .ok_or(FormError::UnknownRow { id: id.0 })
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = (RowId, &Form)> {
        self.rows.iter().map(|(id, form)| (*id, form))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Removes every row. Ids keep increasing.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Runs every row's validators, in row order.
    pub fn run_validators(&mut self) -> RowReport {
        RowReport {
            rows: self
                .rows
                .iter_mut()
                .map(|(id, form)| (*id, form.run_validators()))
                .collect(),
        }
    }

    /// Row payloads in row order.
    #[must_use]
    pub fn payload(&self) -> Vec<Payload> {
        self.rows.iter().map(|(_, form)| form.payload()).collect()
    }

    /// Validates every row and, only if all pass, calls `action` with the
    /// row payloads.
    pub fn submit<T>(&mut self, action: impl FnOnce(Vec<Payload>) -> T) -> Submission<T, RowReport> {
        let report = self.run_validators();
        if report.any_errors() {
            tracing::debug!(
                rows = ?report.failing_rows().map(RowId::get).collect::<Vec<_>>(),
                "row submission blocked by validation"
            );
            return Submission::Blocked(report);
        }
        tracing::debug!(rows = self.rows.len(), "submitting rows");
        Submission::Sent(action(self.payload()))
    }
}
