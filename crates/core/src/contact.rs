//! Contact form model and its simulated submission

use crate::config::ContactConfig;
use crate::delay::Delay;
use crate::error::{CoreError, CoreResult};
use tracing::{debug, info};

/// Fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in form order
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The `name` attribute of the matching input
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Subject)
    }
}

/// The four free-text fields as typed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormDraft {
    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Required fields that are empty or whitespace only
    #[must_use]
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.field(*field).trim().is_empty())
            .collect()
    }

    /// # Errors
    ///
    /// Returns [`CoreError::MissingFields`] listing every empty required field
    pub fn validate(&self) -> CoreResult<()> {
        let fields = self.missing_fields();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(CoreError::MissingFields { fields })
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    /// Submit control disabled while the simulated request is in flight
    Submitting,
    /// Success banner visible
    Sent,
}

/// Identifies one submission so steps of an earlier one can be told apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmissionTicket(u64);

/// Contact view state for one mount
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactFormDraft,
    phase: SubmissionPhase,
    missing: Vec<ContactField>,
    submission: u64,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn draft(&self) -> &ContactFormDraft {
        &self.draft
    }

    #[must_use]
    pub const fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Required fields flagged by the last rejected submit
    #[must_use]
    pub fn missing(&self) -> &[ContactField] {
        &self.missing
    }

    /// Ticket of the most recent submission
    #[must_use]
    pub const fn current_submission(&self) -> SubmissionTicket {
        SubmissionTicket(self.submission)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    #[must_use]
    pub fn shows_banner(&self) -> bool {
        self.phase == SubmissionPhase::Sent
    }

    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set_field(field, value);
        self.missing.retain(|missing| *missing != field);
    }

    /// Start a submission, disabling the submit control.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SubmissionInProgress`] while a submission is in
    /// flight, or [`CoreError::MissingFields`] when required fields are empty.
    /// Missing fields are remembered for inline hints.
    pub fn begin_submit(&mut self) -> CoreResult<SubmissionTicket> {
        if self.is_submitting() {
            return Err(CoreError::SubmissionInProgress);
        }
        if let Err(err) = self.draft.validate() {
            self.missing = self.draft.missing_fields();
            return Err(err);
        }

        self.missing.clear();
        self.phase = SubmissionPhase::Submitting;
        self.submission += 1;
        debug!(submission = self.submission, "contact submission started");
        Ok(self.current_submission())
    }

    /// Apply a step of submission `ticket`. Returns whether the state changed.
    ///
    /// Steps of any earlier submission are dropped, so a newer banner is never
    /// hidden by an older timer.
    pub fn apply_step(&mut self, ticket: SubmissionTicket, step: SubmissionStep) -> bool {
        if ticket != self.current_submission() {
            debug!(submission = ticket.0, "discarding stale submission step");
            return false;
        }
        match step {
            SubmissionStep::Delivered if self.is_submitting() => {
                self.draft.clear();
                self.phase = SubmissionPhase::Sent;
                true
            }
            SubmissionStep::BannerExpired if self.shows_banner() => {
                self.phase = SubmissionPhase::Editing;
                true
            }
            _ => false,
        }
    }
}

/// Milestones of a simulated submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStep {
    /// The fake request finished; success is reported unconditionally
    Delivered,
    /// The success banner's display time is over
    BannerExpired,
}

/// Pretend to send a message.
///
/// There is no request and no failure path: after the configured latency the
/// submission is reported as delivered, and the banner expires after its own
/// duration.
pub async fn simulate_submission<D, F>(delay: &D, config: &ContactConfig, mut on_step: F)
where
    D: Delay + ?Sized,
    F: FnMut(SubmissionStep),
{
    debug!(delay_ms = config.submit_delay_ms, "sending contact message");
    delay.sleep(config.submit_delay()).await;
    info!("contact message sent");
    on_step(SubmissionStep::Delivered);

    delay.sleep(config.banner_duration()).await;
    on_step(SubmissionStep::BannerExpired);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingDelay(RefCell<Vec<Duration>>);

    #[async_trait(?Send)]
    impl Delay for RecordingDelay {
        async fn sleep(&self, duration: Duration) {
            self.0.borrow_mut().push(duration);
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(ContactField::Name, "Ada");
        form.edit(ContactField::Email, "ada@example.com");
        form.edit(ContactField::Message, "Hello there");
        form
    }

    #[test]
    fn subject_is_optional() {
        let form = filled();
        assert!(form.draft().subject.is_empty());
        assert!(form.draft().validate().is_ok());
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut form = filled();
        form.edit(ContactField::Email, "   ");

        let err = form.begin_submit().unwrap_err();

        assert_eq!(
            err,
            CoreError::MissingFields {
                fields: vec![ContactField::Email]
            }
        );
        assert_eq!(form.missing(), [ContactField::Email]);
        assert_eq!(form.phase(), SubmissionPhase::Editing);
    }

    #[test]
    fn editing_clears_the_missing_hint() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_err());
        assert_eq!(
            form.missing(),
            [ContactField::Name, ContactField::Email, ContactField::Message]
        );

        form.edit(ContactField::Name, "Grace");
        assert_eq!(form.missing(), [ContactField::Email, ContactField::Message]);
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(CoreError::SubmissionInProgress));
    }

    #[test]
    fn banner_only_hides_after_success() {
        let mut form = filled();
        let ticket = form.current_submission();
        assert!(!form.apply_step(ticket, SubmissionStep::BannerExpired));
        assert_eq!(form.phase(), SubmissionPhase::Editing);

        assert!(!form.apply_step(ticket, SubmissionStep::Delivered));
        assert_eq!(form.draft().name, "Ada");
    }

    #[test]
    fn earlier_submission_cannot_hide_a_newer_banner() {
        let mut form = filled();
        let first = form.begin_submit().unwrap();
        assert!(form.apply_step(first, SubmissionStep::Delivered));
        assert!(form.shows_banner());

        // Resubmit while the first banner is still up
        form.edit(ContactField::Name, "Grace");
        form.edit(ContactField::Email, "grace@example.com");
        form.edit(ContactField::Message, "Again");
        let second = form.begin_submit().unwrap();
        assert_ne!(first, second);
        assert!(form.apply_step(second, SubmissionStep::Delivered));

        assert!(!form.apply_step(first, SubmissionStep::BannerExpired));
        assert!(form.shows_banner());

        assert!(form.apply_step(second, SubmissionStep::BannerExpired));
        assert_eq!(form.phase(), SubmissionPhase::Editing);
    }

    #[tokio::test(start_paused = true)]
    async fn resubmitted_banner_stays_for_its_full_duration() {
        let config = ContactConfig::default();
        let form = Rc::new(RefCell::new(filled()));
        let start = tokio::time::Instant::now();
        let hidden_at = Rc::new(RefCell::new(None));

        let run = |ticket: SubmissionTicket| {
            let form = form.clone();
            let hidden_at = hidden_at.clone();
            let config = config.clone();
            async move {
                simulate_submission(&crate::delay::TokioDelay, &config, |step| {
                    let changed = form.borrow_mut().apply_step(ticket, step);
                    if changed && step == SubmissionStep::BannerExpired {
                        *hidden_at.borrow_mut() = Some(start.elapsed());
                    }
                })
                .await;
            }
        };

        let first = form.borrow_mut().begin_submit().unwrap();
        let first_run = run(first);
        let second_run = async {
            tokio::time::sleep(Duration::from_millis(1600)).await;
            let mut form_ref = form.borrow_mut();
            form_ref.edit(ContactField::Name, "Grace");
            form_ref.edit(ContactField::Email, "grace@example.com");
            form_ref.edit(ContactField::Message, "Again");
            let second = form_ref.begin_submit().unwrap();
            drop(form_ref);
            run(second).await;
        };
        futures::join!(first_run, second_run);

        let hidden_at = hidden_at.borrow().expect("second banner was hidden");
        assert!(hidden_at >= Duration::from_millis(6100));
        assert_eq!(form.borrow().phase(), SubmissionPhase::Editing);
    }

    #[tokio::test]
    async fn submission_disables_then_clears_then_hides() {
        let form = Rc::new(RefCell::new(filled()));
        let delay = RecordingDelay::default();
        let seen = RefCell::new(Vec::new());

        let ticket = form.borrow_mut().begin_submit().unwrap();
        assert_eq!(form.borrow().draft().name, "Ada");
        assert!(form.borrow().is_submitting());

        simulate_submission(&delay, &ContactConfig::default(), |step| {
            seen.borrow_mut().push((step, form.borrow().phase()));
            assert!(form.borrow_mut().apply_step(ticket, step));
            if step == SubmissionStep::Delivered {
                assert!(form.borrow().shows_banner());
                assert_eq!(*form.borrow().draft(), ContactFormDraft::default());
            }
        })
        .await;

        assert_eq!(
            *seen.borrow(),
            vec![
                (SubmissionStep::Delivered, SubmissionPhase::Submitting),
                (SubmissionStep::BannerExpired, SubmissionPhase::Sent),
            ]
        );
        assert_eq!(form.borrow().phase(), SubmissionPhase::Editing);
        assert_eq!(
            *delay.0.borrow(),
            vec![Duration::from_millis(1500), Duration::from_millis(3000)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn submission_waits_on_the_clock() {
        let start = tokio::time::Instant::now();
        let mut steps = Vec::new();

        simulate_submission(&crate::delay::TokioDelay, &ContactConfig::default(), |step| {
            steps.push((step, start.elapsed()));
        })
        .await;

        assert_eq!(steps.len(), 2);
        assert!(steps[0].1 >= Duration::from_millis(1500));
        assert!(steps[1].1 >= Duration::from_millis(4500));
    }
}
