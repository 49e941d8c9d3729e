use log::warn;

use super::step::filled;
use crate::config::MAX_TEAM_MEMBERS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramFormat {
    Physical,
    Virtual,
}

impl ProgramFormat {
    pub const ALL: [ProgramFormat; 2] = [ProgramFormat::Physical, ProgramFormat::Virtual];

    pub fn key(self) -> &'static str {
        match self {
            ProgramFormat::Physical => "physical",
            ProgramFormat::Virtual => "virtual",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProgramFormat::Physical => "Physical Mode",
            ProgramFormat::Virtual => "Virtual Mode",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            ProgramFormat::Physical => "Attend in-person at FAB LAB",
            ProgramFormat::Virtual => "Join online sessions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectDomain {
    Hardware,
    Software,
    Embedded,
}

impl ProjectDomain {
    pub const ALL: [ProjectDomain; 3] =
        [ProjectDomain::Hardware, ProjectDomain::Software, ProjectDomain::Embedded];

    pub fn key(self) -> &'static str {
        match self {
            ProjectDomain::Hardware => "hardware",
            ProjectDomain::Software => "software",
            ProjectDomain::Embedded => "embedded",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectDomain::Hardware => "Hardware",
            ProjectDomain::Software => "Software",
            ProjectDomain::Embedded => "Embedded Systems",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            ProjectDomain::Hardware => "Physical products, IoT devices, robotics",
            ProjectDomain::Software => "Web apps, mobile apps, AI/ML solutions",
            ProjectDomain::Embedded => "Microcontrollers, firmware, smart devices",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ProjectDomain::Hardware => "🔧",
            ProjectDomain::Software => "💻",
            ProjectDomain::Embedded => "🔌",
        }
    }

    /// Background tint for the domain step.
    pub fn tint(self) -> &'static str {
        match self {
            ProjectDomain::Hardware => "linear-gradient(135deg, rgba(249, 115, 22, 0.2), rgba(239, 68, 68, 0.2))",
            ProjectDomain::Software => "linear-gradient(135deg, rgba(59, 130, 246, 0.2), rgba(168, 85, 247, 0.2))",
            ProjectDomain::Embedded => "linear-gradient(135deg, rgba(34, 197, 94, 0.2), rgba(20, 184, 166, 0.2))",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experience {
    Yes,
    No,
}

impl Experience {
    pub const ALL: [Experience; 2] = [Experience::Yes, Experience::No];

    pub fn key(self) -> &'static str {
        match self {
            Experience::Yes => "yes",
            Experience::No => "no",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Experience::Yes => "Yes",
            Experience::No => "No",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Experience::Yes => "I have worked on startups/innovations before",
            Experience::No => "This will be my first innovation journey",
        }
    }
}

/// One edit to the registration record. Every variant overwrites exactly one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    LeaderName(String),
    Email(String),
    Whatsapp(String),
    State(String),
    District(String),
    Institution(String),
    FieldOfStudy(String),
    TeamName(String),
    TeamMember { index: usize, name: String },
    ProgramFormat(ProgramFormat),
    ProjectDomain(ProjectDomain),
    ProjectDescription(String),
    HasExperience(Experience),
    Expectations(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    pub leader_name: String,
    pub email: String,
    pub whatsapp: String,
    pub state: String,
    pub district: String,
    pub institution: String,
    pub field_of_study: String,
    pub team_name: String,
    team_members: Vec<String>,
    pub program_format: Option<ProgramFormat>,
    pub project_domain: Option<ProjectDomain>,
    pub project_description: String,
    pub has_experience: Option<Experience>,
    pub expectations: String,
}

impl Default for RegistrationRecord {
    fn default() -> Self {
        Self {
            leader_name: String::new(),
            email: String::new(),
            whatsapp: String::new(),
            state: String::new(),
            district: String::new(),
            institution: String::new(),
            field_of_study: String::new(),
            team_name: String::new(),
            team_members: vec![String::new()],
            program_format: None,
            project_domain: None,
            project_description: String::new(),
            has_experience: None,
            expectations: String::new(),
        }
    }
}

impl RegistrationRecord {
    pub fn team_members(&self) -> &[String] {
        &self.team_members
    }

    pub fn named_member_count(&self) -> usize {
        self.team_members.iter().filter(|m| filled(m)).count()
    }

    pub fn can_add_member(&self) -> bool {
        self.team_members.len() < MAX_TEAM_MEMBERS
    }

    pub fn can_remove_member(&self) -> bool {
        self.team_members.len() > 1
    }

    /// Appends a blank slot. Returns false when the roster is already full.
    pub fn add_member(&mut self) -> bool {
        if !self.can_add_member() {
            return false;
        }
        self.team_members.push(String::new());
        true
    }

    /// Removes the slot at `index`; the last remaining slot always stays.
    pub fn remove_member(&mut self, index: usize) -> bool {
        if !self.can_remove_member() || index >= self.team_members.len() {
            return false;
        }
        self.team_members.remove(index);
        true
    }

    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::LeaderName(v) => self.leader_name = v,
            FieldEdit::Email(v) => self.email = v,
            FieldEdit::Whatsapp(v) => self.whatsapp = v,
            FieldEdit::State(v) => self.state = v,
            FieldEdit::District(v) => self.district = v,
            FieldEdit::Institution(v) => self.institution = v,
            FieldEdit::FieldOfStudy(v) => self.field_of_study = v,
            FieldEdit::TeamName(v) => self.team_name = v,
            FieldEdit::TeamMember { index, name } => match self.team_members.get_mut(index) {
                Some(slot) => *slot = name,
                None => warn!("Ignoring edit for missing team member slot {}", index),
            },
            FieldEdit::ProgramFormat(v) => self.program_format = Some(v),
            FieldEdit::ProjectDomain(v) => self.project_domain = Some(v),
            FieldEdit::ProjectDescription(v) => self.project_description = v,
            FieldEdit::HasExperience(v) => self.has_experience = Some(v),
            FieldEdit::Expectations(v) => self.expectations = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_record_has_one_blank_member() {
        let record = RegistrationRecord::default();
        assert_eq!(record.team_members(), &[String::new()]);
        assert_eq!(record.named_member_count(), 0);
        assert!(record.program_format.is_none());
    }

    #[test]
    fn roster_never_grows_past_six() {
        let mut record = RegistrationRecord::default();
        for _ in 0..5 {
            assert!(record.add_member());
        }
        assert_eq!(record.team_members().len(), 6);
        assert!(!record.add_member());
        assert_eq!(record.team_members().len(), 6);
    }

    #[test]
    fn last_member_slot_cannot_be_removed() {
        let mut record = RegistrationRecord::default();
        assert!(!record.remove_member(0));
        assert_eq!(record.team_members().len(), 1);

        record.add_member();
        assert!(!record.remove_member(5));
        assert!(record.remove_member(1));
        assert_eq!(record.team_members().len(), 1);
    }

    #[test]
    fn removal_keeps_insertion_order() {
        let mut record = RegistrationRecord::default();
        record.add_member();
        record.add_member();
        for (index, name) in ["Asha", "Ravi", "Meera"].into_iter().enumerate() {
            record.apply(FieldEdit::TeamMember { index, name: name.to_string() });
        }
        record.remove_member(1);
        assert_eq!(record.team_members(), &["Asha".to_string(), "Meera".to_string()]);
    }

    #[test]
    fn edits_overwrite_a_single_field() {
        let mut record = RegistrationRecord::default();
        record.apply(FieldEdit::TeamName("Rocketeers".into()));
        record.apply(FieldEdit::TeamName("Orbiters".into()));
        record.apply(FieldEdit::ProjectDomain(ProjectDomain::Embedded));
        assert_eq!(record.team_name, "Orbiters");
        assert_eq!(record.project_domain, Some(ProjectDomain::Embedded));
        assert!(record.leader_name.is_empty());
    }

    #[test]
    fn edit_for_missing_member_slot_is_ignored() {
        let mut record = RegistrationRecord::default();
        record.apply(FieldEdit::TeamMember { index: 3, name: "Ghost".into() });
        assert_eq!(record, RegistrationRecord::default());
    }
}
