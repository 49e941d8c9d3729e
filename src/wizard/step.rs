use super::record::RegistrationRecord;

/// The thirteen screens of the registration wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    LeaderName,
    Email,
    Whatsapp,
    Location,
    Institution,
    FieldOfStudy,
    TeamName,
    TeamMembers,
    ProgramFormat,
    ProjectDomain,
    ProjectDescription,
    Experience,
    Expectations,
}

impl Step {
    pub const ALL: [Step; 13] = [
        Step::LeaderName,
        Step::Email,
        Step::Whatsapp,
        Step::Location,
        Step::Institution,
        Step::FieldOfStudy,
        Step::TeamName,
        Step::TeamMembers,
        Step::ProgramFormat,
        Step::ProjectDomain,
        Step::ProjectDescription,
        Step::Experience,
        Step::Expectations,
    ];

    pub const FIRST: Step = Step::LeaderName;
    pub const LAST: Step = Step::Expectations;

    /// 1-based position shown to the user.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Step> {
        Step::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    pub fn next(self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Step> {
        Step::from_number(self.number() - 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::LeaderName => "Team Leader Details",
            Step::Email => "Email Address",
            Step::Whatsapp => "WhatsApp Number",
            Step::Location => "Location",
            Step::Institution => "Institution Details",
            Step::FieldOfStudy => "Field of Study",
            Step::TeamName => "Team Name",
            Step::TeamMembers => "Team Members",
            Step::ProgramFormat => "Program Format",
            Step::ProjectDomain => "Project Domain",
            Step::ProjectDescription => "Project Description",
            Step::Experience => "Experience",
            Step::Expectations => "Expectations",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Step::LeaderName => "Every great team starts with a strong leader 🚀",
            Step::Email => "Stay connected with innovation ✉️",
            Step::Whatsapp => "We'll create a WhatsApp group for updates 📱",
            Step::Location => "Help us understand your geographical reach 🗺️",
            Step::Institution => "Knowledge is the foundation of innovation 🎓",
            Step::FieldOfStudy => "What do you study or work on? 📚",
            Step::TeamName => "Your team name builds your passion 💡",
            Step::TeamMembers => "Great minds think together 🤝",
            Step::ProgramFormat => "Choose your learning experience 🎯",
            Step::ProjectDomain => "What's your area of innovation? 🔧",
            Step::ProjectDescription => "Tell us about your innovative idea 💭",
            Step::Experience => "Every expert was once a beginner 🌟",
            Step::Expectations => "Dream big, achieve bigger 🎯",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Step::LeaderName => "👤",
            Step::Email => "✉️",
            Step::Whatsapp => "📞",
            Step::Location => "📍",
            Step::Institution | Step::FieldOfStudy => "🎓",
            Step::TeamName | Step::TeamMembers => "👥",
            Step::ProgramFormat | Step::ProjectDomain | Step::ProjectDescription => "💡",
            Step::Experience => "🚀",
            Step::Expectations => "🎯",
        }
    }

    /// Whether the fields this step owns are complete. Depends on the record only.
    pub fn is_valid(self, record: &RegistrationRecord) -> bool {
        match self {
            Step::LeaderName => filled(&record.leader_name),
            Step::Email => filled(&record.email) && record.email.contains('@'),
            Step::Whatsapp => input_len(&record.whatsapp) >= 10,
            Step::Location => filled(&record.state) && filled(&record.district),
            Step::Institution => filled(&record.institution),
            Step::FieldOfStudy => filled(&record.field_of_study),
            Step::TeamName => filled(&record.team_name),
            Step::TeamMembers => record.named_member_count() > 0,
            Step::ProgramFormat => record.program_format.is_some(),
            Step::ProjectDomain => record.project_domain.is_some(),
            Step::ProjectDescription => filled(&record.project_description),
            Step::Experience => record.has_experience.is_some(),
            Step::Expectations => filled(&record.expectations),
        }
    }
}

/// Strips the whitespace a browser form strips: Unicode spaces and line
/// terminators plus the BOM, but not NEL.
pub(crate) fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c == '\u{FEFF}' || (c != '\u{85}' && c.is_whitespace()))
}

/// Trimmed length in UTF-16 code units, the unit browser inputs count in.
pub(crate) fn input_len(value: &str) -> usize {
    trim_input(value).encode_utf16().count()
}

pub(crate) fn filled(value: &str) -> bool {
    input_len(value) > 0
}

/// The lowest-numbered step whose predicate fails, if any.
pub fn first_incomplete(record: &RegistrationRecord) -> Option<Step> {
    Step::ALL.into_iter().find(|step| !step.is_valid(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::record::{Experience, FieldEdit, ProgramFormat, ProjectDomain};

    fn minimal_edit(step: Step) -> Vec<FieldEdit> {
        match step {
            Step::LeaderName => vec![FieldEdit::LeaderName("Asha".into())],
            Step::Email => vec![FieldEdit::Email("a@b".into())],
            Step::Whatsapp => vec![FieldEdit::Whatsapp("9876543210".into())],
            Step::Location => vec![
                FieldEdit::State("Kerala".into()),
                FieldEdit::District("Kochi".into()),
            ],
            Step::Institution => vec![FieldEdit::Institution("CUSAT".into())],
            Step::FieldOfStudy => vec![FieldEdit::FieldOfStudy("Electronics".into())],
            Step::TeamName => vec![FieldEdit::TeamName("Voltage".into())],
            Step::TeamMembers => vec![FieldEdit::TeamMember { index: 0, name: "Ravi".into() }],
            Step::ProgramFormat => vec![FieldEdit::ProgramFormat(ProgramFormat::Virtual)],
            Step::ProjectDomain => vec![FieldEdit::ProjectDomain(ProjectDomain::Software)],
            Step::ProjectDescription => vec![FieldEdit::ProjectDescription("Smart irrigation".into())],
            Step::Experience => vec![FieldEdit::HasExperience(Experience::No)],
            Step::Expectations => vec![FieldEdit::Expectations("Ship a prototype".into())],
        }
    }

    #[test]
    fn numbering_round_trips_through_all_steps() {
        for (i, step) in Step::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(step.number()), i + 1);
            assert_eq!(Step::from_number(step.number()), Some(step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(14), None);
        assert_eq!(Step::LAST.next(), None);
        assert_eq!(Step::FIRST.previous(), None);
    }

    #[test]
    fn no_step_is_valid_on_a_fresh_record() {
        let record = RegistrationRecord::default();
        for step in Step::ALL {
            assert!(!step.is_valid(&record), "step {} valid on fresh record", step.number());
        }
    }

    #[test]
    fn minimal_edit_makes_exactly_that_step_valid() {
        for step in Step::ALL {
            let mut record = RegistrationRecord::default();
            for edit in minimal_edit(step) {
                record.apply(edit);
            }
            for other in Step::ALL {
                assert_eq!(other.is_valid(&record), other == step, "step {} after editing {}", other.number(), step.number());
            }
        }
    }

    #[test]
    fn email_only_needs_an_at_sign() {
        let mut record = RegistrationRecord::default();
        record.apply(FieldEdit::Email("no-at-sign.example.com".into()));
        assert!(!Step::Email.is_valid(&record));
        record.apply(FieldEdit::Email("@".into()));
        assert!(Step::Email.is_valid(&record));
        record.apply(FieldEdit::Email("   ".into()));
        assert!(!Step::Email.is_valid(&record));
    }

    #[test]
    fn whatsapp_counts_trimmed_characters() {
        let mut record = RegistrationRecord::default();
        record.apply(FieldEdit::Whatsapp("  987654321  ".into()));
        assert!(!Step::Whatsapp.is_valid(&record));
        record.apply(FieldEdit::Whatsapp("+91 98765 43210".into()));
        assert!(Step::Whatsapp.is_valid(&record));
    }

    #[test]
    fn whatsapp_length_counts_utf16_units() {
        let mut record = RegistrationRecord::default();
        record.apply(FieldEdit::Whatsapp("12345678😀".into()));
        assert!(Step::Whatsapp.is_valid(&record));
        record.apply(FieldEdit::Whatsapp("1234567😀".into()));
        assert!(!Step::Whatsapp.is_valid(&record));
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        let mut record = RegistrationRecord::default();
        record.apply(FieldEdit::LeaderName("\u{FEFF}".into()));
        assert!(!Step::LeaderName.is_valid(&record));
        record.apply(FieldEdit::LeaderName("\u{FEFF} \u{3000}Asha\u{2028}".into()));
        assert!(Step::LeaderName.is_valid(&record));
        assert_eq!(trim_input("\u{FEFF} \u{3000}Asha\u{2028}"), "Asha");
    }

    #[test]
    fn next_line_is_not_trimmed() {
        assert_eq!(input_len("\u{85}"), 1);
    }

    #[test]
    fn location_needs_both_state_and_district() {
        let mut record = RegistrationRecord::default();
        record.apply(FieldEdit::State("Goa".into()));
        assert!(!Step::Location.is_valid(&record));
        record.apply(FieldEdit::District(" ".into()));
        assert!(!Step::Location.is_valid(&record));
        record.apply(FieldEdit::District("Panaji".into()));
        assert!(Step::Location.is_valid(&record));
    }

    #[test]
    fn blank_member_slots_do_not_count() {
        let mut record = RegistrationRecord::default();
        record.add_member();
        record.apply(FieldEdit::TeamMember { index: 0, name: "   ".into() });
        assert!(!Step::TeamMembers.is_valid(&record));
        record.apply(FieldEdit::TeamMember { index: 1, name: "Meera".into() });
        assert!(Step::TeamMembers.is_valid(&record));
    }

    #[test]
    fn first_incomplete_reports_lowest_step() {
        let mut record = RegistrationRecord::default();
        assert_eq!(first_incomplete(&record), Some(Step::LeaderName));
        for step in [Step::LeaderName, Step::Email, Step::Whatsapp] {
            for edit in minimal_edit(step) {
                record.apply(edit);
            }
        }
        assert_eq!(first_incomplete(&record), Some(Step::Location));
    }
}
