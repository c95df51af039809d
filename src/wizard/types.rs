//! Type definitions for the enrollment wizard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single field of the enrollment form.
///
/// The order of variants matches the order fields appear across the steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Country,
    State,
    City,
    Street,
    Newsletter,
    Alerts,
}

impl Field {
    /// Stable key used for logging and error reporting
    pub fn key(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Country => "country",
            Field::State => "state",
            Field::City => "city",
            Field::Street => "street",
            Field::Newsletter => "subscribe_newsletter",
            Field::Alerts => "enable_alerts",
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Country => "Country",
            Field::State => "State / province",
            Field::City => "City",
            Field::Street => "Street address",
            Field::Newsletter => "Subscribe to newsletter",
            Field::Alerts => "Enable alerts",
        }
    }

    /// Placeholder text shown while the input is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FirstName => "Ada",
            Field::LastName => "Lovelace",
            Field::Email => "you@example.com",
            Field::Country => "United Kingdom",
            Field::State => "Greater London",
            Field::City => "London",
            Field::Street => "12 St James's Square",
            Field::Newsletter | Field::Alerts => "",
        }
    }

    /// Whether the field is a boolean preference rather than a text input
    pub fn is_toggle(self) -> bool {
        matches!(self, Field::Newsletter | Field::Alerts)
    }
}

/// Identifier for one step of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepId {
    Personal,
    Address,
    Preferences,
    Review,
}

/// Static definition of one wizard step
#[derive(Debug)]
pub struct StepInfo {
    pub id: StepId,
    pub title: &'static str,
    /// Fields owned by this step, in display order (empty for Review)
    pub fields: &'static [Field],
}

/// The four wizard steps. Fixed at compile time, never reordered.
pub static STEPS: [StepInfo; 4] = [
    StepInfo {
        id: StepId::Personal,
        title: "Personal",
        fields: &[Field::FirstName, Field::LastName, Field::Email],
    },
    StepInfo {
        id: StepId::Address,
        title: "Address",
        fields: &[Field::Country, Field::State, Field::City, Field::Street],
    },
    StepInfo {
        id: StepId::Preferences,
        title: "Preferences",
        fields: &[Field::Newsletter, Field::Alerts],
    },
    StepInfo {
        id: StepId::Review,
        title: "Review",
        fields: &[],
    },
];

/// Every form field across all steps, in step order
pub fn all_fields() -> impl Iterator<Item = Field> {
    STEPS.iter().flat_map(|step| step.fields.iter().copied())
}

/// Direction of the most recent step transition.
///
/// Purely presentational: the step header uses it to pick the transition
/// glyph. Navigation logic never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Fire-and-forget events emitted by the wizard controller.
///
/// The controller knows nothing about how these render; the app drains them
/// into toasts and desktop notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Submission validated and accepted
    Submitted { name: String },
    /// Submission rejected with the given number of field errors
    SubmitBlocked { errors: usize },
    /// Form was cleared back to its initial state
    Reset,
}

/// The complete enrollment record spanning all steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub street: String,
    #[serde(default)]
    pub subscribe_newsletter: bool,
    #[serde(default)]
    pub enable_alerts: bool,
}
