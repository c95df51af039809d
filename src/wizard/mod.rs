//! Wizard controller: step navigation, validation gating, submission.
//!
//! The controller is renderer-agnostic. It owns the field states, the step
//! pointer, the per-field error map, and the post-submission snapshot, and it
//! writes accepted submissions through the [`KvStore`] abstraction. The app
//! layer routes key events in and drains [`Notice`]s out.

use std::collections::{BTreeMap, VecDeque};

use chrono::Utc;
use crossterm::event::KeyCode;
use uuid::Uuid;

use crate::storage::{self, KvStore};
use crate::ui::field::FormField;

pub mod schema;
pub mod types;

pub use types::*;

#[cfg(test)]
mod tests;

pub struct Wizard {
    /// Index of the active step, always within [0, STEPS.len())
    current: usize,
    /// Index of the previously active step, for transition direction only
    previous: usize,
    /// Whether the last submission was accepted (confirmation surface shown)
    submitted: bool,
    /// Snapshot of the last accepted submission
    snapshot: Option<Submission>,
    /// Input state per field
    fields: BTreeMap<Field, FormField>,
    /// Validation messages keyed by failing field
    errors: BTreeMap<Field, String>,
    /// Focused position within the active step's field list
    focus: usize,
    /// Pending notices for the presentation layer
    notices: VecDeque<Notice>,
    store: Box<dyn KvStore>,
}

impl Wizard {
    pub fn new(store: Box<dyn KvStore>) -> Self {
        let fields = all_fields()
            .map(|field| {
                let widget = if field.is_toggle() {
                    FormField::toggle()
                } else {
                    FormField::text(field.placeholder())
                };
                (field, widget)
            })
            .collect();

        Self {
            current: 0,
            previous: 0,
            submitted: false,
            snapshot: None,
            fields,
            errors: BTreeMap::new(),
            focus: 0,
            notices: VecDeque::new(),
            store,
        }
    }

    // ─── State accessors ────────────────────────────────────────────────────

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn step(&self) -> &'static StepInfo {
        &STEPS[self.current]
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == STEPS.len()
    }

    /// Direction of the latest transition, for the step header only
    pub fn direction(&self) -> Direction {
        if self.current >= self.previous {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn snapshot(&self) -> Option<&Submission> {
        self.snapshot.as_ref()
    }

    pub fn field(&self, field: Field) -> &FormField {
        &self.fields[&field]
    }

    /// Trimmed value as the validation schema and submission see it
    pub fn value(&self, field: Field) -> String {
        self.fields[&field].value().trim().to_string()
    }

    pub fn bool_value(&self, field: Field) -> bool {
        self.fields[&field].is_on()
    }

    pub fn set_value(&mut self, field: Field, value: &str) {
        if let Some(widget) = self.fields.get_mut(&field) {
            widget.set_value(value);
        }
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    /// Drain pending notices for the presentation layer
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    // ─── Focus handling ─────────────────────────────────────────────────────

    pub fn focused_field(&self) -> Option<Field> {
        self.step().fields.get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        let count = self.step().fields.len();
        if self.focus + 1 < count {
            self.focus += 1;
        }
    }

    pub fn focus_prev(&mut self) {
        if self.focus > 0 {
            self.focus -= 1;
        }
    }

    /// Route an editing key to the focused field.
    ///
    /// Editing a field retires its current validation message; the rule runs
    /// again on the next advance or submit.
    pub fn handle_field_key(&mut self, key: KeyCode) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        let consumed = self
            .fields
            .get_mut(&field)
            .is_some_and(|widget| widget.handle_key(key));
        if consumed {
            self.errors.remove(&field);
        }
        consumed
    }

    // ─── Navigation and submission ──────────────────────────────────────────

    /// Validate one step's declared fields against their entered values.
    ///
    /// Replaces error entries for that step only; other steps' entries are
    /// untouched. On failure, focus moves to the first failing field when the
    /// step is the active one.
    pub fn validate_step(&mut self, index: usize) -> bool {
        let Some(step) = STEPS.get(index) else {
            return false;
        };
        for field in step.fields {
            self.errors.remove(field);
        }
        let failures = schema::validate(step.fields, |field| self.value(field));
        if failures.is_empty() {
            return true;
        }
        if index == self.current {
            if let Some(first) = step
                .fields
                .iter()
                .position(|field| failures.contains_key(field))
            {
                self.focus = first;
            }
        }
        self.errors.extend(failures);
        false
    }

    /// Move forward one step if the active step validates.
    ///
    /// A no-op at the last step; a silent no-op (errors land in the map) when
    /// validation fails.
    pub fn advance(&mut self) {
        if self.current + 1 >= STEPS.len() {
            return;
        }
        if !self.validate_step(self.current) {
            tracing::debug!(step = self.step().title, "advance blocked by validation");
            return;
        }
        self.previous = self.current;
        self.current += 1;
        self.focus = 0;
    }

    /// Move back one step. Never validates and never alters entered values.
    pub fn retreat(&mut self) {
        if self.current == 0 {
            return;
        }
        self.previous = self.current;
        self.current -= 1;
        self.focus = 0;
    }

    /// Validate the full aggregate and persist it.
    ///
    /// Only meaningful from the review step. The storage write is
    /// best-effort: a failure is logged and the submission is still
    /// acknowledged, since the store is a convenience cache rather than the
    /// user contract.
    pub fn submit(&mut self) {
        if !self.is_last_step() {
            return;
        }

        let mut failures = BTreeMap::new();
        for step in &STEPS {
            failures.extend(schema::validate(step.fields, |field| self.value(field)));
        }
        if !failures.is_empty() {
            let count = failures.len();
            let fields: Vec<&str> = failures.keys().map(|field| field.key()).collect();
            self.errors = failures;
            self.notices.push_back(Notice::SubmitBlocked { errors: count });
            tracing::info!(?fields, "submission blocked by validation");
            return;
        }

        let submission = self.collect();
        if let Err(err) = storage::save_submission(self.store.as_ref(), &submission) {
            tracing::warn!(error = %err, "failed to persist submission");
        }

        self.errors.clear();
        self.submitted = true;
        self.notices.push_back(Notice::Submitted {
            name: submission.first_name.clone(),
        });
        tracing::info!(id = %submission.id, "submission accepted");
        self.snapshot = Some(submission);
    }

    /// Clear the form back to its initial state.
    ///
    /// Leaves the persisted storage entry alone; only `enroll clear` removes
    /// that. Calling reset on an already-clean wizard changes nothing beyond
    /// re-announcing the reset.
    pub fn reset(&mut self) {
        for widget in self.fields.values_mut() {
            widget.clear();
        }
        self.errors.clear();
        self.submitted = false;
        self.snapshot = None;
        self.current = 0;
        self.previous = 0;
        self.focus = 0;
        self.notices.push_back(Notice::Reset);
    }

    /// Close the confirmation surface and return to the first step.
    ///
    /// Entered values and the persisted entry are kept; use [`Wizard::reset`]
    /// to start over from blank.
    pub fn acknowledge(&mut self) {
        self.submitted = false;
        self.current = 0;
        self.previous = 0;
        self.focus = 0;
    }

    /// Build the submission record from the entered values
    fn collect(&self) -> Submission {
        Submission {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            first_name: self.value(Field::FirstName),
            last_name: self.value(Field::LastName),
            email: self.value(Field::Email),
            country: self.value(Field::Country),
            state: self.value(Field::State),
            city: self.value(Field::City),
            street: self.value(Field::Street),
            subscribe_newsletter: self.bool_value(Field::Newsletter),
            enable_alerts: self.bool_value(Field::Alerts),
        }
    }
}
