use std::rc::Rc;

use log::{debug, info, warn};
use yew::functional::Reducible;

use super::record::{FieldEdit, RegistrationRecord};
use super::step::{first_incomplete, Step};
use crate::config::{MAX_TEAM_MEMBERS, PROGRAM_NAME, TOTAL_STEPS};
use crate::notice::Notice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    Edit(FieldEdit),
    AddMember,
    RemoveMember(usize),
    Next,
    Previous,
    Submit,
    Close,
}

/// Something the user should be told about after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    RosterFull,
    Incomplete(Step),
    Registered(RegistrationRecord),
}

impl WizardOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            WizardOutcome::RosterFull => Notice::destructive(
                "Maximum team size reached",
                format!("You can have maximum {} team members including the leader.", MAX_TEAM_MEMBERS),
            ),
            WizardOutcome::Incomplete(step) => Notice::destructive(
                "Please complete all fields",
                format!("Please fill in the required information on step {}.", step.number()),
            ),
            WizardOutcome::Registered(_) => Notice::normal(
                "Registration Successful! 🎉",
                format!(
                    "Thank you for registering for {}. We'll send you further details via email.",
                    PROGRAM_NAME
                ),
            ),
        }
    }
}

/// Navigation state and the record being filled in.
///
/// A session starts open on step 1. Submitting a complete record or closing
/// discards the record and leaves the session closed.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSession {
    step: Step,
    record: RegistrationRecord,
    closed: bool,
    /// Seed for the motivational quote shown on the last step.
    quote_seed: usize,
    /// Latest outcome, tagged with a counter so repeated outcomes are distinct.
    last_outcome: Option<(u32, WizardOutcome)>,
}

impl WizardSession {
    pub fn open(quote_seed: usize) -> Self {
        Self {
            step: Step::FIRST,
            record: RegistrationRecord::default(),
            closed: false,
            quote_seed,
            last_outcome: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn quote_seed(&self) -> usize {
        self.quote_seed
    }

    pub fn last_outcome(&self) -> Option<&(u32, WizardOutcome)> {
        self.last_outcome.as_ref()
    }

    /// Counter of the latest outcome; changes whenever a new outcome lands.
    pub fn outcome_seq(&self) -> Option<u32> {
        self.last_outcome.as_ref().map(|(seq, _)| *seq)
    }

    pub fn progress(&self) -> f64 {
        f64::from(self.step.number()) / f64::from(TOTAL_STEPS)
    }

    pub fn can_go_next(&self) -> bool {
        !self.closed && self.step != Step::LAST && self.step.is_valid(&self.record)
    }

    pub fn can_go_previous(&self) -> bool {
        !self.closed && self.step != Step::FIRST
    }

    pub fn dispatch(&mut self, action: WizardAction) -> Option<WizardOutcome> {
        if self.closed {
            debug!("Ignoring {:?} on a closed registration session", action);
            return None;
        }
        match action {
            WizardAction::Edit(edit) => {
                self.record.apply(edit);
                None
            }
            WizardAction::AddMember => {
                if self.record.add_member() {
                    None
                } else {
                    warn!("Team roster already has {} members", MAX_TEAM_MEMBERS);
                    Some(WizardOutcome::RosterFull)
                }
            }
            WizardAction::RemoveMember(index) => {
                self.record.remove_member(index);
                None
            }
            WizardAction::Next => {
                if self.can_go_next() {
                    if let Some(next) = self.step.next() {
                        debug!("Registration step {} -> {}", self.step.number(), next.number());
                        self.step = next;
                    }
                }
                None
            }
            WizardAction::Previous => {
                if let Some(previous) = self.step.previous() {
                    debug!("Registration step {} -> {}", self.step.number(), previous.number());
                    self.step = previous;
                }
                None
            }
            WizardAction::Submit => match first_incomplete(&self.record) {
                Some(step) => {
                    warn!("Registration submitted with step {} incomplete", step.number());
                    self.step = step;
                    Some(WizardOutcome::Incomplete(step))
                }
                None => {
                    let record = std::mem::take(&mut self.record);
                    info!("Team '{}' registered with {} members", record.team_name, record.named_member_count());
                    self.discard();
                    Some(WizardOutcome::Registered(record))
                }
            },
            WizardAction::Close => {
                debug!("Registration closed on step {}", self.step.number());
                self.discard();
                None
            }
        }
    }

    fn discard(&mut self) {
        self.step = Step::FIRST;
        self.record = RegistrationRecord::default();
        self.closed = true;
    }
}

impl Reducible for WizardSession {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if let Some(outcome) = next.dispatch(action) {
            let seq = self.last_outcome.as_ref().map_or(0, |(seq, _)| seq.wrapping_add(1));
            next.last_outcome = Some((seq, outcome));
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::Severity;
    use crate::wizard::record::{Experience, ProgramFormat, ProjectDomain};

    fn complete_session() -> WizardSession {
        let mut session = WizardSession::open(0);
        let edits = [
            FieldEdit::LeaderName("Asha".into()),
            FieldEdit::Email("asha@example.com".into()),
            FieldEdit::Whatsapp("+91 98765 43210".into()),
            FieldEdit::State("Kerala".into()),
            FieldEdit::District("Kochi".into()),
            FieldEdit::Institution("Model Engineering College".into()),
            FieldEdit::FieldOfStudy("Computer Science".into()),
            FieldEdit::TeamName("Rocketeers".into()),
            FieldEdit::TeamMember { index: 0, name: "Ravi".into() },
            FieldEdit::ProgramFormat(ProgramFormat::Physical),
            FieldEdit::ProjectDomain(ProjectDomain::Hardware),
            FieldEdit::ProjectDescription("Solar powered cold storage".into()),
            FieldEdit::HasExperience(Experience::Yes),
            FieldEdit::Expectations("Mentorship and lab access".into()),
        ];
        for edit in edits {
            session.dispatch(WizardAction::Edit(edit));
        }
        session
    }

    #[test]
    fn next_then_previous_keeps_the_record() {
        let mut session = WizardSession::open(0);
        session.dispatch(WizardAction::Edit(FieldEdit::LeaderName("Asha".into())));
        session.dispatch(WizardAction::Next);
        assert_eq!(session.step().number(), 2);
        session.dispatch(WizardAction::Previous);
        assert_eq!(session.step().number(), 1);
        assert_eq!(session.record().leader_name, "Asha");
    }

    #[test]
    fn next_is_refused_on_an_invalid_step() {
        let mut session = WizardSession::open(0);
        assert!(!session.can_go_next());
        session.dispatch(WizardAction::Next);
        assert_eq!(session.step(), Step::LeaderName);
    }

    #[test]
    fn next_walks_every_valid_step_and_stops_at_the_end() {
        let mut session = complete_session();
        for expected in 2..=13u8 {
            session.dispatch(WizardAction::Next);
            assert_eq!(session.step().number(), expected);
        }
        session.dispatch(WizardAction::Next);
        assert_eq!(session.step(), Step::LAST);
        assert!(!session.can_go_next());
    }

    #[test]
    fn previous_ignores_validity_and_stops_at_the_start() {
        let mut session = complete_session();
        for _ in 0..4 {
            session.dispatch(WizardAction::Next);
        }
        session.dispatch(WizardAction::Edit(FieldEdit::Email(String::new())));
        session.dispatch(WizardAction::Previous);
        session.dispatch(WizardAction::Previous);
        session.dispatch(WizardAction::Previous);
        assert_eq!(session.step(), Step::Email);
        session.dispatch(WizardAction::Previous);
        session.dispatch(WizardAction::Previous);
        assert_eq!(session.step(), Step::FIRST);
    }

    #[test]
    fn seventh_member_is_rejected_with_a_warning() {
        let mut session = WizardSession::open(0);
        for _ in 0..5 {
            assert_eq!(session.dispatch(WizardAction::AddMember), None);
        }
        let before = session.record().clone();
        let outcome = session.dispatch(WizardAction::AddMember);
        assert_eq!(outcome, Some(WizardOutcome::RosterFull));
        assert_eq!(session.record(), &before);

        let notice = WizardOutcome::RosterFull.notice();
        assert_eq!(notice.title, "Maximum team size reached");
        assert_eq!(notice.body, "You can have maximum 6 team members including the leader.");
        assert_eq!(notice.severity, Severity::Destructive);
    }

    #[test]
    fn remove_never_empties_the_roster() {
        let mut session = WizardSession::open(0);
        session.dispatch(WizardAction::RemoveMember(0));
        assert_eq!(session.record().team_members().len(), 1);
    }

    #[test]
    fn submit_jumps_to_the_lowest_incomplete_step() {
        let mut session = complete_session();
        for _ in 0..12 {
            session.dispatch(WizardAction::Next);
        }
        session.dispatch(WizardAction::Edit(FieldEdit::TeamName(" ".into())));
        session.dispatch(WizardAction::Edit(FieldEdit::Whatsapp("12345".into())));
        let before = session.record().clone();

        let outcome = session.dispatch(WizardAction::Submit);
        assert_eq!(outcome, Some(WizardOutcome::Incomplete(Step::Whatsapp)));
        assert_eq!(session.step().number(), 3);
        assert_eq!(session.record(), &before);
        assert!(!session.is_closed());

        let notice = WizardOutcome::Incomplete(Step::Whatsapp).notice();
        assert_eq!(notice.title, "Please complete all fields");
        assert_eq!(notice.body, "Please fill in the required information on step 3.");
    }

    #[test]
    fn submit_on_fresh_session_reports_step_one() {
        let mut session = WizardSession::open(0);
        assert_eq!(session.dispatch(WizardAction::Submit), Some(WizardOutcome::Incomplete(Step::LeaderName)));
    }

    #[test]
    fn successful_submit_closes_and_discards() {
        let mut session = complete_session();
        let outcome = session.dispatch(WizardAction::Submit);
        match outcome {
            Some(WizardOutcome::Registered(record)) => assert_eq!(record.team_name, "Rocketeers"),
            other => panic!("expected registration, got {:?}", other),
        }
        assert!(session.is_closed());
        assert_eq!(session.record(), &RegistrationRecord::default());
        assert_eq!(session.step(), Step::FIRST);

        assert_eq!(session.dispatch(WizardAction::Edit(FieldEdit::LeaderName("late".into()))), None);
        assert!(session.record().leader_name.is_empty());
    }

    #[test]
    fn close_discards_without_success() {
        let mut session = complete_session();
        assert_eq!(session.dispatch(WizardAction::Close), None);
        assert!(session.is_closed());
        assert_eq!(session.record(), &RegistrationRecord::default());
    }

    #[test]
    fn reducer_tags_each_outcome() {
        let session = Rc::new(WizardSession::open(0));
        let session = session.reduce(WizardAction::Submit);
        let session = session.reduce(WizardAction::Submit);
        let (seq, outcome) = session.last_outcome().expect("outcome recorded");
        assert_eq!(*seq, 1);
        assert_eq!(outcome, &WizardOutcome::Incomplete(Step::LeaderName));
    }

    #[test]
    fn outcome_seq_changes_only_when_an_outcome_lands() {
        let session = Rc::new(WizardSession::open(0));
        assert_eq!(session.outcome_seq(), None);
        let session = session.reduce(WizardAction::Submit);
        assert_eq!(session.outcome_seq(), Some(0));
        let session = session.reduce(WizardAction::Edit(FieldEdit::LeaderName("Asha".into())));
        assert_eq!(session.outcome_seq(), Some(0));
        let session = session.reduce(WizardAction::Submit);
        assert_eq!(session.outcome_seq(), Some(1));
    }

    #[test]
    fn progress_tracks_the_step() {
        let mut session = WizardSession::open(0);
        assert!((session.progress() - 1.0 / 13.0).abs() < f64::EPSILON);
        session.dispatch(WizardAction::Edit(FieldEdit::LeaderName("Asha".into())));
        session.dispatch(WizardAction::Next);
        assert!((session.progress() - 2.0 / 13.0).abs() < f64::EPSILON);
    }
}
