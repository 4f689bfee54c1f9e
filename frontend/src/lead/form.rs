use std::rc::Rc;

use log::{error, info};
use yew::Reducible;

use super::emailjs::{LeadMailer, TemplateParams};
use super::phone::format_phone_as_typed;
use super::validation::{validate, FormErrors, FormFields};
use crate::config::STATUS_RESET_MS;
use crate::timers::Scheduler;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn message(self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some("Enviando..."),
            SubmissionStatus::Success => Some("Enviado com sucesso!"),
            SubmissionStatus::Error => Some("Erro ao enviar. Tente novamente."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Invalid,
    Delivered,
    Failed,
}

/// Everything the contact form renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    pub fields: FormFields,
    pub errors: FormErrors,
    pub status: SubmissionStatus,
    /// Set while a send is outstanding; the submit button is disabled.
    pub in_flight: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeadFormAction {
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    SetConsent(bool),
    Rejected(FormErrors),
    Sending,
    Delivered,
    Failed,
    ResetStatus,
}

impl Reducible for LeadForm {
    type Action = LeadFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LeadFormAction::SetName(name) => next.fields.name = name,
            LeadFormAction::SetEmail(email) => next.fields.email = email,
            LeadFormAction::SetPhone(raw) => next.fields.phone = format_phone_as_typed(&raw),
            LeadFormAction::SetConsent(consent) => next.fields.consent = consent,
            LeadFormAction::Rejected(errors) => next.errors = errors,
            LeadFormAction::Sending => {
                next.errors = FormErrors::default();
                next.status = SubmissionStatus::Sending;
                next.in_flight = true;
            }
            LeadFormAction::Delivered => {
                next.fields = FormFields::default();
                next.status = SubmissionStatus::Success;
                next.in_flight = false;
            }
            LeadFormAction::Failed => {
                next.status = SubmissionStatus::Error;
                next.in_flight = false;
            }
            // Only a finished submission goes back to idle.
            LeadFormAction::ResetStatus => {
                if matches!(self.status, SubmissionStatus::Success | SubmissionStatus::Error) {
                    next.status = SubmissionStatus::Idle;
                }
            }
        }
        next.into()
    }
}

/// Validates `fields` and, when they pass, hands the lead to `mailer`.
///
/// Progress is reported through `dispatch`: `Rejected` on invalid input,
/// otherwise `Sending` followed by exactly one of `Delivered` or `Failed`.
/// Send errors stop here; the caller only sees the outcome.
pub async fn submit_lead<M, D>(mailer: &M, fields: FormFields, dispatch: D) -> SubmissionOutcome
where
    M: LeadMailer,
    D: Fn(LeadFormAction),
{
    let errors = validate(&fields);
    if !errors.is_empty() {
        dispatch(LeadFormAction::Rejected(errors));
        return SubmissionOutcome::Invalid;
    }

    dispatch(LeadFormAction::Sending);
    info!("Sending lead for {}", fields.name.trim());

    match mailer.send(&TemplateParams::from_fields(&fields)).await {
        Ok(()) => {
            info!("Lead delivered");
            dispatch(LeadFormAction::Delivered);
            SubmissionOutcome::Delivered
        }
        Err(e) => {
            error!("Failed to deliver lead: {}", e);
            dispatch(LeadFormAction::Failed);
            SubmissionOutcome::Failed
        }
    }
}

/// Arms the timer that puts a finished submission back to idle.
pub fn schedule_status_reset<S, D>(scheduler: &S, dispatch: D) -> S::Handle
where
    S: Scheduler,
    D: Fn(LeadFormAction) + 'static,
{
    scheduler.once(
        STATUS_RESET_MS,
        Box::new(move || dispatch(LeadFormAction::ResetStatus)),
    )
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::lead::emailjs::SendError;
    use crate::lead::validation::Field;
    use crate::timers::manual::ManualScheduler;

    struct MockMailer {
        succeed: bool,
        sent: RefCell<Vec<TemplateParams>>,
    }

    impl MockMailer {
        fn new(succeed: bool) -> Self {
            Self { succeed, sent: RefCell::new(Vec::new()) }
        }
    }

    impl LeadMailer for MockMailer {
        async fn send(&self, params: &TemplateParams) -> Result<(), SendError> {
            self.sent.borrow_mut().push(params.clone());
            if self.succeed {
                Ok(())
            } else {
                Err(SendError::Network("connection reset".to_string()))
            }
        }
    }

    /// Reducer state plus the statuses it passed through.
    #[derive(Clone)]
    struct Harness {
        state: Rc<RefCell<Rc<LeadForm>>>,
        statuses: Rc<RefCell<Vec<SubmissionStatus>>>,
    }

    impl Harness {
        fn new() -> Self {
            let state = Rc::new(LeadForm::default());
            let statuses = vec![state.status];
            Self {
                state: Rc::new(RefCell::new(state)),
                statuses: Rc::new(RefCell::new(statuses)),
            }
        }

        fn dispatch(&self, action: LeadFormAction) {
            let current = Rc::clone(&self.state.borrow());
            let next = current.reduce(action);
            let mut statuses = self.statuses.borrow_mut();
            if statuses.last() != Some(&next.status) {
                statuses.push(next.status);
            }
            *self.state.borrow_mut() = next;
        }

        fn dispatcher(&self) -> impl Fn(LeadFormAction) + 'static {
            let harness = self.clone();
            move |action| harness.dispatch(action)
        }

        fn form(&self) -> Rc<LeadForm> {
            Rc::clone(&self.state.borrow())
        }

        fn fill(&self) {
            self.dispatch(LeadFormAction::SetName("Ana".to_string()));
            self.dispatch(LeadFormAction::SetEmail("ana@example.com".to_string()));
            self.dispatch(LeadFormAction::SetPhone("71983181133".to_string()));
            self.dispatch(LeadFormAction::SetConsent(true));
        }
    }

    #[test]
    fn successful_send_clears_fields_and_returns_to_idle() {
        let harness = Harness::new();
        let scheduler = ManualScheduler::default();
        let mailer = MockMailer::new(true);
        harness.fill();

        let outcome = block_on(submit_lead(&mailer, harness.form().fields.clone(), harness.dispatcher()));
        assert_eq!(outcome, SubmissionOutcome::Delivered);
        let _reset = schedule_status_reset(&scheduler, harness.dispatcher());

        let form = harness.form();
        assert_eq!(form.status, SubmissionStatus::Success);
        assert!(!form.in_flight);
        assert_eq!(form.fields, FormFields::default());
        assert_eq!(mailer.sent.borrow()[0].phone, "71983181133");

        scheduler.advance(u64::from(STATUS_RESET_MS) - 1);
        assert_eq!(harness.form().status, SubmissionStatus::Success);
        scheduler.advance(1);
        assert_eq!(harness.form().status, SubmissionStatus::Idle);
        assert_eq!(
            *harness.statuses.borrow(),
            vec![
                SubmissionStatus::Idle,
                SubmissionStatus::Sending,
                SubmissionStatus::Success,
                SubmissionStatus::Idle,
            ]
        );
    }

    #[test]
    fn failed_send_keeps_fields_and_returns_to_idle() {
        let harness = Harness::new();
        let scheduler = ManualScheduler::default();
        let mailer = MockMailer::new(false);
        harness.fill();
        let filled = harness.form().fields.clone();

        let outcome = block_on(submit_lead(&mailer, filled.clone(), harness.dispatcher()));
        assert_eq!(outcome, SubmissionOutcome::Failed);
        let _reset = schedule_status_reset(&scheduler, harness.dispatcher());

        let form = harness.form();
        assert_eq!(form.status, SubmissionStatus::Error);
        assert!(!form.in_flight);
        assert_eq!(form.fields, filled);

        scheduler.advance(u64::from(STATUS_RESET_MS));
        assert_eq!(harness.form().status, SubmissionStatus::Idle);
        assert_eq!(harness.form().fields, filled);
        assert_eq!(
            *harness.statuses.borrow(),
            vec![
                SubmissionStatus::Idle,
                SubmissionStatus::Sending,
                SubmissionStatus::Error,
                SubmissionStatus::Idle,
            ]
        );
    }

    #[test]
    fn invalid_fields_never_reach_the_mailer() {
        let harness = Harness::new();
        let mailer = MockMailer::new(true);
        harness.dispatch(LeadFormAction::SetName("Ana".to_string()));

        let outcome = block_on(submit_lead(&mailer, harness.form().fields.clone(), harness.dispatcher()));

        assert_eq!(outcome, SubmissionOutcome::Invalid);
        assert!(mailer.sent.borrow().is_empty());
        let form = harness.form();
        assert_eq!(form.status, SubmissionStatus::Idle);
        assert_eq!(form.errors.fields().collect::<Vec<_>>(), vec![Field::Email, Field::Consent]);
        assert_eq!(*harness.statuses.borrow(), vec![SubmissionStatus::Idle]);
    }

    #[test]
    fn in_flight_guard_is_cleared_on_resolution_not_after_reset() {
        let form = Rc::new(LeadForm::default());
        let sending = form.reduce(LeadFormAction::Sending);
        assert!(sending.in_flight);
        let failed = sending.reduce(LeadFormAction::Failed);
        assert!(!failed.in_flight);
        assert_eq!(failed.status, SubmissionStatus::Error);
    }

    #[test]
    fn stale_reset_does_not_interrupt_a_retry() {
        let harness = Harness::new();
        let scheduler = ManualScheduler::default();
        harness.dispatch(LeadFormAction::Sending);
        harness.dispatch(LeadFormAction::Failed);
        let _reset = schedule_status_reset(&scheduler, harness.dispatcher());

        scheduler.advance(1_000);
        harness.dispatch(LeadFormAction::Sending);
        scheduler.advance(u64::from(STATUS_RESET_MS) - 1_000);

        let form = harness.form();
        assert_eq!(form.status, SubmissionStatus::Sending);
        assert!(form.in_flight);
    }

    #[test]
    fn reset_only_leaves_finished_states() {
        let idle = Rc::new(LeadForm::default()).reduce(LeadFormAction::ResetStatus);
        assert_eq!(idle.status, SubmissionStatus::Idle);

        let sending = idle.reduce(LeadFormAction::Sending);
        let still_sending = sending.reduce(LeadFormAction::ResetStatus);
        assert_eq!(still_sending.status, SubmissionStatus::Sending);
        assert!(still_sending.in_flight);

        let delivered = still_sending.reduce(LeadFormAction::Delivered);
        assert_eq!(delivered.reduce(LeadFormAction::ResetStatus).status, SubmissionStatus::Idle);
    }

    #[test]
    fn overlong_or_stray_phone_input_masks_back_to_the_stored_value() {
        let form = Rc::new(LeadForm::default())
            .reduce(LeadFormAction::SetPhone("71983181133".to_string()));
        assert_eq!(form.fields.phone, "(71) 98318-1133");

        // The input still shows the raw text, so the view has to re-render
        // even though the masked value did not change.
        for raw in ["(71) 98318-11334", "(71) 98318-1133x"] {
            let retyped = Rc::clone(&form).reduce(LeadFormAction::SetPhone(raw.to_string()));
            assert_eq!(retyped.fields.phone, "(71) 98318-1133");
            assert_eq!(*retyped, *form);
        }
    }

    #[test]
    fn sending_clears_previous_errors() {
        let form = Rc::new(LeadForm::default())
            .reduce(LeadFormAction::Rejected(validate(&FormFields::default())));
        assert_eq!(form.errors.len(), 3);
        let form = form.reduce(LeadFormAction::Sending);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn phone_is_masked_as_it_is_typed() {
        let form = Rc::new(LeadForm::default()).reduce(LeadFormAction::SetPhone("7198".to_string()));
        assert_eq!(form.fields.phone, "(71) 98");
        let typed = format!("{}3181133", form.fields.phone);
        let form = form.reduce(LeadFormAction::SetPhone(typed));
        assert_eq!(form.fields.phone, "(71) 98318-1133");
    }

    #[test]
    fn dropped_reset_timer_never_fires() {
        let harness = Harness::new();
        let scheduler = ManualScheduler::default();
        harness.dispatch(LeadFormAction::Sending);
        harness.dispatch(LeadFormAction::Failed);

        let reset = schedule_status_reset(&scheduler, harness.dispatcher());
        drop(reset);
        scheduler.advance(u64::from(STATUS_RESET_MS) * 2);

        assert_eq!(harness.form().status, SubmissionStatus::Error);
    }

    #[test]
    fn status_messages() {
        assert_eq!(SubmissionStatus::Idle.message(), None);
        assert_eq!(SubmissionStatus::Error.message(), Some("Erro ao enviar. Tente novamente."));
        assert_eq!(SubmissionStatus::Sending.message(), Some("Enviando..."));
    }
}
