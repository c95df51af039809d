//! Tests for the wizard controller

use crossterm::event::KeyCode;

use super::*;
use crate::storage::{self, KvStore, MemoryStore, StorageError, SUBMISSION_KEY};

fn wizard() -> (Wizard, MemoryStore) {
    let store = MemoryStore::new();
    (Wizard::new(Box::new(store.clone())), store)
}

/// Store whose writes always fail, for the best-effort persistence path
struct FailingStore;

impl KvStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

fn fill_personal(wizard: &mut Wizard) {
    wizard.set_value(Field::FirstName, "Ada");
    wizard.set_value(Field::LastName, "Lovelace");
    wizard.set_value(Field::Email, "ada@example.com");
}

fn fill_address(wizard: &mut Wizard) {
    wizard.set_value(Field::Country, "United Kingdom");
    wizard.set_value(Field::State, "Greater London");
    wizard.set_value(Field::City, "London");
    wizard.set_value(Field::Street, "12 St James's Square");
}

fn advance_to_review(wizard: &mut Wizard) {
    fill_personal(wizard);
    fill_address(wizard);
    wizard.advance(); // Personal -> Address
    wizard.advance(); // Address -> Preferences
    wizard.advance(); // Preferences -> Review
    assert_eq!(wizard.step().id, StepId::Review);
}

#[test]
fn test_new_wizard_starts_clean() {
    let (wizard, _) = wizard();
    assert_eq!(wizard.current_index(), 0);
    assert_eq!(wizard.step().id, StepId::Personal);
    assert!(!wizard.submitted());
    assert!(wizard.snapshot().is_none());
    assert!(wizard.errors().is_empty());
}

#[test]
fn test_advance_blocked_by_empty_required_field() {
    let (mut wizard, _) = wizard();
    wizard.set_value(Field::FirstName, "Ada");
    wizard.set_value(Field::LastName, "Lovelace");
    // email left empty

    wizard.advance();

    assert_eq!(wizard.current_index(), 0);
    assert!(wizard.error(Field::Email).is_some());
    assert!(wizard.error(Field::FirstName).is_none());
}

#[test]
fn test_advance_blocked_by_bad_email_format() {
    let (mut wizard, _) = wizard();
    fill_personal(&mut wizard);
    wizard.set_value(Field::Email, "not-an-email");

    wizard.advance();

    assert_eq!(wizard.current_index(), 0);
    let errors = wizard.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key(&Field::Email));
}

#[test]
fn test_advance_succeeds_with_valid_step() {
    let (mut wizard, _) = wizard();
    fill_personal(&mut wizard);

    wizard.advance();

    assert_eq!(wizard.current_index(), 1);
    assert_eq!(wizard.step().id, StepId::Address);
    assert!(wizard.errors().is_empty());
}

#[test]
fn test_validation_failure_focuses_first_failing_field() {
    let (mut wizard, _) = wizard();
    wizard.set_value(Field::FirstName, "Ada");
    // last name and email empty; last name comes first in the step

    wizard.advance();

    assert_eq!(wizard.focused_field(), Some(Field::LastName));
}

#[test]
fn test_editing_a_field_clears_its_error() {
    let (mut wizard, _) = wizard();
    wizard.advance();
    assert!(wizard.error(Field::FirstName).is_some());

    wizard.handle_field_key(KeyCode::Char('A'));
    assert!(wizard.error(Field::FirstName).is_none());
}

#[test]
fn test_retreat_never_validates_and_keeps_values() {
    let (mut wizard, _) = wizard();
    fill_personal(&mut wizard);
    wizard.advance();
    wizard.set_value(Field::Country, "France");
    // address step is incomplete, retreat must still work

    wizard.retreat();

    assert_eq!(wizard.current_index(), 0);
    assert_eq!(wizard.value(Field::Country), "France");
    assert_eq!(wizard.value(Field::FirstName), "Ada");
}

#[test]
fn test_retreat_at_first_step_is_noop() {
    let (mut wizard, _) = wizard();
    wizard.retreat();
    assert_eq!(wizard.current_index(), 0);
}

#[test]
fn test_advance_at_last_step_is_noop() {
    let (mut wizard, _) = wizard();
    advance_to_review(&mut wizard);

    wizard.advance();

    assert_eq!(wizard.step().id, StepId::Review);
}

#[test]
fn test_preferences_step_has_no_required_fields() {
    let (mut wizard, _) = wizard();
    fill_personal(&mut wizard);
    fill_address(&mut wizard);
    wizard.advance();
    wizard.advance();
    assert_eq!(wizard.step().id, StepId::Preferences);

    // Toggles untouched; advancing must succeed
    wizard.advance();
    assert_eq!(wizard.step().id, StepId::Review);
}

#[test]
fn test_direction_tracks_transitions() {
    let (mut wizard, _) = wizard();
    assert_eq!(wizard.direction(), Direction::Forward);

    fill_personal(&mut wizard);
    wizard.advance();
    assert_eq!(wizard.direction(), Direction::Forward);

    wizard.retreat();
    assert_eq!(wizard.direction(), Direction::Backward);
}

#[test]
fn test_submit_persists_snapshot() {
    let (mut wizard, store) = wizard();
    advance_to_review(&mut wizard);
    wizard.set_value(Field::Newsletter, "true");

    wizard.submit();

    assert!(wizard.submitted());
    let snapshot = wizard.snapshot().expect("snapshot recorded").clone();
    assert_eq!(snapshot.first_name, "Ada");
    assert!(snapshot.subscribe_newsletter);
    assert!(!snapshot.enable_alerts);

    let stored = storage::load_submission(&store)
        .unwrap()
        .expect("entry persisted");
    assert_eq!(stored, snapshot);
}

#[test]
fn test_submit_trims_entered_values() {
    let (mut wizard, _) = wizard();
    advance_to_review(&mut wizard);
    wizard.set_value(Field::FirstName, "  Ada  ");

    wizard.submit();

    assert_eq!(wizard.snapshot().unwrap().first_name, "Ada");
}

#[test]
fn test_submit_succeeds_when_store_write_fails() {
    let mut wizard = Wizard::new(Box::new(FailingStore));
    advance_to_review(&mut wizard);

    wizard.submit();

    // The write failure is logged, never surfaced to the user
    assert!(wizard.submitted());
    assert_eq!(wizard.snapshot().unwrap().first_name, "Ada");
    assert_eq!(
        wizard.take_notices(),
        vec![Notice::Submitted {
            name: "Ada".to_string()
        }]
    );
}

#[test]
fn test_submit_outside_review_step_is_noop() {
    let (mut wizard, store) = wizard();
    fill_personal(&mut wizard);

    wizard.submit();

    assert!(!wizard.submitted());
    assert!(store.get(SUBMISSION_KEY).unwrap().is_none());
}

#[test]
fn test_submit_blocked_reports_all_failing_fields() {
    let (mut wizard, store) = wizard();
    advance_to_review(&mut wizard);
    // invalidate a field from an earlier step after passing it
    wizard.set_value(Field::Email, "nope");

    wizard.submit();

    assert!(!wizard.submitted());
    assert!(wizard.snapshot().is_none());
    assert!(wizard.errors().contains_key(&Field::Email));
    assert!(store.get(SUBMISSION_KEY).unwrap().is_none());

    let notices = wizard.take_notices();
    assert_eq!(notices, vec![Notice::SubmitBlocked { errors: 1 }]);
}

#[test]
fn test_submit_emits_notice() {
    let (mut wizard, _) = wizard();
    advance_to_review(&mut wizard);

    wizard.submit();

    let notices = wizard.take_notices();
    assert_eq!(
        notices,
        vec![Notice::Submitted {
            name: "Ada".to_string()
        }]
    );
    // drained: a second take returns nothing
    assert!(wizard.take_notices().is_empty());
}

#[test]
fn test_reset_clears_everything() {
    let (mut wizard, _) = wizard();
    advance_to_review(&mut wizard);
    wizard.submit();

    wizard.reset();

    assert_eq!(wizard.current_index(), 0);
    assert_eq!(wizard.direction(), Direction::Forward);
    assert!(!wizard.submitted());
    assert!(wizard.snapshot().is_none());
    assert!(wizard.errors().is_empty());
    assert_eq!(wizard.value(Field::FirstName), "");
    assert!(!wizard.bool_value(Field::Newsletter));
}

#[test]
fn test_reset_keeps_persisted_entry() {
    let (mut wizard, store) = wizard();
    advance_to_review(&mut wizard);
    wizard.submit();

    wizard.reset();

    assert!(store.get(SUBMISSION_KEY).unwrap().is_some());
}

#[test]
fn test_reset_on_clean_wizard_is_noop_in_effect() {
    let (mut wizard, _) = wizard();
    wizard.reset();

    assert_eq!(wizard.current_index(), 0);
    assert!(wizard.errors().is_empty());
    assert_eq!(wizard.take_notices(), vec![Notice::Reset]);
}

#[test]
fn test_acknowledge_returns_to_first_step_keeping_data() {
    let (mut wizard, store) = wizard();
    advance_to_review(&mut wizard);
    wizard.submit();

    wizard.acknowledge();

    assert!(!wizard.submitted());
    assert_eq!(wizard.current_index(), 0);
    // entered values and the persisted entry survive
    assert_eq!(wizard.value(Field::FirstName), "Ada");
    assert!(store.get(SUBMISSION_KEY).unwrap().is_some());
}

#[test]
fn test_focus_moves_within_step_bounds() {
    let (mut wizard, _) = wizard();
    assert_eq!(wizard.focused_field(), Some(Field::FirstName));

    wizard.focus_next();
    assert_eq!(wizard.focused_field(), Some(Field::LastName));

    wizard.focus_next();
    wizard.focus_next(); // clamped at the last field
    assert_eq!(wizard.focused_field(), Some(Field::Email));

    wizard.focus_prev();
    wizard.focus_prev();
    wizard.focus_prev(); // clamped at the first field
    assert_eq!(wizard.focused_field(), Some(Field::FirstName));
}

#[test]
fn test_review_step_has_no_focused_field() {
    let (mut wizard, _) = wizard();
    advance_to_review(&mut wizard);
    assert_eq!(wizard.focused_field(), None);
    assert!(!wizard.handle_field_key(KeyCode::Char('x')));
}

#[test]
fn test_typed_input_flows_into_submission() {
    let (mut wizard, _) = wizard();
    for c in "Ada".chars() {
        wizard.handle_field_key(KeyCode::Char(c));
    }
    wizard.focus_next();
    for c in "Lovelace".chars() {
        wizard.handle_field_key(KeyCode::Char(c));
    }
    wizard.focus_next();
    for c in "ada@example.com".chars() {
        wizard.handle_field_key(KeyCode::Char(c));
    }

    wizard.advance();
    assert_eq!(wizard.current_index(), 1);
    assert_eq!(wizard.value(Field::FirstName), "Ada");
}
