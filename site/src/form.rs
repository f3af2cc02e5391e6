use std::{collections::BTreeMap, fmt, sync::LazyLock, time::Duration};

use regex::Regex;
use tracing::debug;

// how long the confirmation banner stays up after a successful submit
pub const BANNER_DURATION: Duration = Duration::from_millis(3000);

// searched for anywhere in the input, so "Jane <jane@example.com>" is accepted
const EMAIL_SHAPE: &str = r"\S+@\S+\.\S+";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_SHAPE).expect("email pattern is a valid regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    // form control name and element id
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    InvalidEmail,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(Field::Name) => write!(f, "Name is required"),
            Self::Required(Field::Email) => write!(f, "Email is required"),
            Self::Required(Field::Message) => write!(f, "Message is required"),
            Self::InvalidEmail => write!(f, "Email is invalid"),
        }
    }
}

pub type FormErrors = BTreeMap<Field, FieldError>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::Required(field));
    }

    match field {
        Field::Email if !EMAIL_REGEX.is_match(value) => Some(FieldError::InvalidEmail),
        _ => None,
    }
}

// every field is checked independently, so one bad field never hides another
pub fn validate(data: &FormData) -> FormErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, data.get(field)).map(|err| (field, err)))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    // form cleared and banner shown; the caller schedules dismiss_banner after hide_after
    Accepted { hide_after: Duration },
    // errors stored, fields untouched
    Rejected { errors: usize },
}

// contact form controller
//
// nothing is ever sent anywhere; a successful submit only clears the fields and raises the
// confirmation banner for BANNER_DURATION
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: FormData,
    errors: FormErrors,
    submitted: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn value(&self, field: Field) -> &str {
        self.data.get(field)
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    // a keystroke in one of the inputs
    //
    // a stored error for the edited field is dropped straight away; the field is not
    // revalidated until the next submit
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        *self.data.get_mut(field) = value.into();
        self.errors.remove(&field);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = validate(&self.data);

        if errors.is_empty() {
            debug!("contact form accepted");
            self.data = FormData::default();
            self.errors.clear();
            self.submitted = true;
            SubmitOutcome::Accepted {
                hide_after: BANNER_DURATION,
            }
        } else {
            debug!({ errors = ?errors }, "contact form rejected");
            let count = errors.len();
            self.errors = errors;
            SubmitOutcome::Rejected { errors: count }
        }
    }

    // called when a banner timer fires; overlapping timers each just lower the flag
    pub fn dismiss_banner(&mut self) {
        self.submitted = false;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, name);
        form.edit(Field::Email, email);
        form.edit(Field::Message, message);
        form
    }

    #[test]
    fn email_shape() {
        assert_eq!(
            validate_field(Field::Email, "not-an-email"),
            Some(FieldError::InvalidEmail)
        );
        assert_eq!(validate_field(Field::Email, "a@b.co"), None);
        assert_eq!(validate_field(Field::Email, "a@b"), Some(FieldError::InvalidEmail));
        assert_eq!(validate_field(Field::Email, "@b.co"), Some(FieldError::InvalidEmail));
        assert_eq!(validate_field(Field::Email, "a@.co"), Some(FieldError::InvalidEmail));
        assert_eq!(validate_field(Field::Email, "Jane <jane@example.com>"), None);
        assert_eq!(
            validate_field(Field::Email, "   "),
            Some(FieldError::Required(Field::Email))
        );
    }

    #[test]
    fn blank_after_trim_is_required() {
        for field in Field::ALL {
            assert_eq!(
                validate_field(field, " \t\n"),
                Some(FieldError::Required(field))
            );
        }
        assert_eq!(validate_field(Field::Name, " Ada "), None);
        assert_eq!(validate_field(Field::Message, "hi"), None);
    }

    #[test]
    fn error_text() {
        assert_eq!(FieldError::Required(Field::Name).to_string(), "Name is required");
        assert_eq!(FieldError::Required(Field::Email).to_string(), "Email is required");
        assert_eq!(
            FieldError::Required(Field::Message).to_string(),
            "Message is required"
        );
        assert_eq!(FieldError::InvalidEmail.to_string(), "Email is invalid");
    }

    #[test]
    fn valid_submit_clears_fields_and_raises_banner() {
        let mut form = filled("Ada", "ada@example.com", "Let's build something");

        let outcome = form.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                hide_after: Duration::from_millis(3000)
            }
        );
        assert!(form.submitted());
        assert_eq!(form.data(), &FormData::default());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn empty_name_only_flags_name() {
        let mut form = filled("", "ada@example.com", "hello");

        let outcome = form.submit();

        assert_eq!(outcome, SubmitOutcome::Rejected { errors: 1 });
        assert_eq!(form.error(Field::Name), Some(FieldError::Required(Field::Name)));
        assert_eq!(form.error(Field::Email), None);
        assert_eq!(form.error(Field::Message), None);
        assert_eq!(form.value(Field::Email), "ada@example.com");
        assert_eq!(form.value(Field::Message), "hello");
        assert!(!form.submitted());
    }

    #[test]
    fn every_failing_field_is_reported() {
        let mut form = filled(" ", "nope", "");

        assert_eq!(form.submit(), SubmitOutcome::Rejected { errors: 3 });
        assert_eq!(form.error(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(form.value(Field::Email), "nope");
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = ContactForm::new();
        form.submit();
        assert_eq!(form.errors().len(), 3);

        form.edit(Field::Email, "x");

        assert_eq!(form.error(Field::Email), None);
        assert!(form.error(Field::Name).is_some());
        assert!(form.error(Field::Message).is_some());
    }

    #[test]
    fn editing_does_not_revalidate() {
        let mut form = filled("Ada", "ada@example.com", "hi");
        form.edit(Field::Name, "");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn resubmit_reports_current_failures() {
        let mut form = filled("", "", "hello");
        form.submit();
        assert_eq!(form.errors().len(), 2);

        form.edit(Field::Name, "Ada");
        assert_eq!(form.submit(), SubmitOutcome::Rejected { errors: 1 });

        assert_eq!(form.error(Field::Name), None);
        assert_eq!(
            form.error(Field::Email),
            Some(FieldError::Required(Field::Email))
        );
    }

    #[test]
    fn accepted_submit_clears_leftover_errors() {
        let mut form = filled("", "ada@example.com", "hello");
        form.submit();
        form.edit(Field::Name, "Ada");

        assert!(matches!(form.submit(), SubmitOutcome::Accepted { .. }));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn rejected_submit_leaves_banner_alone() {
        let mut form = filled("Ada", "ada@example.com", "hello");
        form.submit();
        assert!(form.submitted());

        // fields were cleared, so an immediate resubmit fails
        form.submit();
        assert!(form.submitted());
    }

    #[tokio::test(start_paused = true)]
    async fn banner_drops_after_three_seconds() {
        let form = Arc::new(Mutex::new(filled("Ada", "ada@example.com", "hello")));

        let hide_after = match form.lock().unwrap().submit() {
            SubmitOutcome::Accepted { hide_after } => hide_after,
            outcome => panic!("unexpected outcome {outcome:?}"),
        };

        // same fire-and-forget shape as the browser timer
        let timer_form = form.clone();
        tokio::spawn(async move {
            tokio::time::sleep(hide_after).await;
            timer_form.lock().unwrap().dismiss_banner();
        });

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(form.lock().unwrap().submitted());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!form.lock().unwrap().submitted());
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_timers_race() {
        let form = Arc::new(Mutex::new(ContactForm::new()));

        for delay in [0, 1000] {
            tokio::time::sleep(Duration::from_millis(delay)).await;

            let mut guard = form.lock().unwrap();
            guard.edit(Field::Name, "Ada");
            guard.edit(Field::Email, "ada@example.com");
            guard.edit(Field::Message, "hello");
            let SubmitOutcome::Accepted { hide_after } = guard.submit() else {
                panic!("submit rejected");
            };
            drop(guard);

            let timer_form = form.clone();
            tokio::spawn(async move {
                tokio::time::sleep(hide_after).await;
                timer_form.lock().unwrap().dismiss_banner();
            });
        }

        // the first timer is not cancelled by the second submit
        tokio::time::sleep(Duration::from_millis(2001)).await;
        assert!(!form.lock().unwrap().submitted());
    }
}
