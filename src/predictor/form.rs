//! # Career Profile Form
//!
//! The answers a user gives on the predictor page, plus the field list the
//! UI walks through when editing them.

use serde::{Deserialize, Serialize};

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 10;
pub const HACKATHONS_MAX: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn toggled(self) -> Self {
        match self {
            YesNo::Yes => YesNo::No,
            YesNo::No => YesNo::Yes,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

/// Choice lists that the form cycles through with left/right.
pub trait Choice: Copy + PartialEq + 'static {
    const OPTIONS: &'static [Self];

    fn label(self) -> &'static str;

    fn step(self, forward: bool) -> Self {
        let len = Self::OPTIONS.len();
        let index = Self::OPTIONS
            .iter()
            .position(|option| *option == self)
            .unwrap_or_default();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        Self::OPTIONS[next]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanyType {
    #[serde(rename = "")]
    Unselected,
    Startup,
    MidSize,
    Large,
    Government,
    Nonprofit,
}

impl Choice for CompanyType {
    const OPTIONS: &'static [Self] = &[
        CompanyType::Unselected,
        CompanyType::Startup,
        CompanyType::MidSize,
        CompanyType::Large,
        CompanyType::Government,
        CompanyType::Nonprofit,
    ];

    fn label(self) -> &'static str {
        match self {
            CompanyType::Unselected => "Select Company Type",
            CompanyType::Startup => "Startup",
            CompanyType::MidSize => "Mid-size Company",
            CompanyType::Large => "Large Corporation",
            CompanyType::Government => "Government",
            CompanyType::Nonprofit => "Non-profit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkFocus {
    Technical,
    Management,
    Both,
}

impl Choice for WorkFocus {
    const OPTIONS: &'static [Self] = &[WorkFocus::Technical, WorkFocus::Management, WorkFocus::Both];

    fn label(self) -> &'static str {
        match self {
            WorkFocus::Technical => "Technical",
            WorkFocus::Management => "Management",
            WorkFocus::Both => "Both",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkStyle {
    #[serde(rename = "hard worker")]
    HardWorker,
    #[serde(rename = "smart worker")]
    SmartWorker,
}

impl Choice for WorkStyle {
    const OPTIONS: &'static [Self] = &[WorkStyle::HardWorker, WorkStyle::SmartWorker];

    fn label(self) -> &'static str {
        match self {
            WorkStyle::HardWorker => "Hard worker",
            WorkStyle::SmartWorker => "Smart worker",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryExpectation {
    Low,
    Moderate,
    High,
}

impl Choice for SalaryExpectation {
    const OPTIONS: &'static [Self] = &[
        SalaryExpectation::Low,
        SalaryExpectation::Moderate,
        SalaryExpectation::High,
    ];

    fn label(self) -> &'static str {
        match self {
            SalaryExpectation::Low => "Low",
            SalaryExpectation::Moderate => "Moderate",
            SalaryExpectation::High => "High",
        }
    }
}

/// Everything the user tells the predictor about themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    // Academic performance
    pub logical_quotient_rating: u8,
    pub hackathons: u8,
    pub coding_skills_rating: u8,
    pub public_speaking_points: u8,

    // Skills & personality
    pub self_learning_capability: YesNo,
    pub extra_courses: YesNo,
    pub taken_inputs_from_seniors: YesNo,
    pub worked_in_teams: YesNo,
    pub introvert: YesNo,

    // Preferences & interests
    pub interested_subjects: String,
    pub interested_career_area: String,
    pub type_of_company_want_to_settle_in: CompanyType,
    pub management_or_technical: WorkFocus,

    // Additional ratings
    pub reading_and_writing_skills: u8,
    pub memory_capability_score: u8,
    pub interested_type_of_books: String,
    pub hard_smart_worker: WorkStyle,
    pub salary_expectation: SalaryExpectation,
}

impl Default for CareerProfile {
    fn default() -> Self {
        Self {
            logical_quotient_rating: 7,
            hackathons: 2,
            coding_skills_rating: 6,
            public_speaking_points: 5,
            self_learning_capability: YesNo::Yes,
            extra_courses: YesNo::Yes,
            taken_inputs_from_seniors: YesNo::Yes,
            worked_in_teams: YesNo::Yes,
            introvert: YesNo::No,
            interested_subjects: String::new(),
            interested_career_area: String::new(),
            type_of_company_want_to_settle_in: CompanyType::Unselected,
            management_or_technical: WorkFocus::Technical,
            reading_and_writing_skills: 7,
            memory_capability_score: 8,
            interested_type_of_books: String::new(),
            hard_smart_worker: WorkStyle::SmartWorker,
            salary_expectation: SalaryExpectation::Moderate,
        }
    }
}

/// Form fields in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    LogicalQuotient,
    Hackathons,
    CodingSkills,
    PublicSpeaking,
    SelfLearning,
    ExtraCourses,
    InputsFromSeniors,
    WorkedInTeams,
    Introvert,
    InterestedSubjects,
    InterestedCareerArea,
    CompanyType,
    ManagementOrTechnical,
    ReadingAndWriting,
    MemoryCapability,
    InterestedBooks,
    WorkStyle,
    SalaryExpectation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Rating,
    Count,
    Toggle,
    Select,
    Text,
}

impl ProfileField {
    pub const ALL: [ProfileField; 18] = [
        ProfileField::LogicalQuotient,
        ProfileField::Hackathons,
        ProfileField::CodingSkills,
        ProfileField::PublicSpeaking,
        ProfileField::SelfLearning,
        ProfileField::ExtraCourses,
        ProfileField::InputsFromSeniors,
        ProfileField::WorkedInTeams,
        ProfileField::Introvert,
        ProfileField::InterestedSubjects,
        ProfileField::InterestedCareerArea,
        ProfileField::CompanyType,
        ProfileField::ManagementOrTechnical,
        ProfileField::ReadingAndWriting,
        ProfileField::MemoryCapability,
        ProfileField::InterestedBooks,
        ProfileField::WorkStyle,
        ProfileField::SalaryExpectation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::LogicalQuotient => "Logical Quotient Rating (1-10)",
            ProfileField::Hackathons => "Number of Hackathons Participated",
            ProfileField::CodingSkills => "Coding Skills Rating (1-10)",
            ProfileField::PublicSpeaking => "Public Speaking Points (1-10)",
            ProfileField::SelfLearning => "Self-learning Capability",
            ProfileField::ExtraCourses => "Extra Courses Taken",
            ProfileField::InputsFromSeniors => "Taken Inputs from Seniors",
            ProfileField::WorkedInTeams => "Worked in Teams",
            ProfileField::Introvert => "Are you an Introvert?",
            ProfileField::InterestedSubjects => "Interested Subjects",
            ProfileField::InterestedCareerArea => "Interested Career Area",
            ProfileField::CompanyType => "Type of Company",
            ProfileField::ManagementOrTechnical => "Management or Technical",
            ProfileField::ReadingAndWriting => "Reading & Writing Skills (1-10)",
            ProfileField::MemoryCapability => "Memory Capability Score (1-10)",
            ProfileField::InterestedBooks => "Interested Type of Books",
            ProfileField::WorkStyle => "Hard or Smart Worker",
            ProfileField::SalaryExpectation => "Salary Expectation",
        }
    }

    /// Section heading the field is grouped under.
    pub fn section(self) -> &'static str {
        match self {
            ProfileField::LogicalQuotient
            | ProfileField::Hackathons
            | ProfileField::CodingSkills
            | ProfileField::PublicSpeaking => "Academic Performance",
            ProfileField::SelfLearning
            | ProfileField::ExtraCourses
            | ProfileField::InputsFromSeniors
            | ProfileField::WorkedInTeams
            | ProfileField::Introvert => "Skills & Personality",
            ProfileField::InterestedSubjects
            | ProfileField::InterestedCareerArea
            | ProfileField::CompanyType
            | ProfileField::ManagementOrTechnical => "Preferences & Interests",
            ProfileField::ReadingAndWriting
            | ProfileField::MemoryCapability
            | ProfileField::InterestedBooks
            | ProfileField::WorkStyle
            | ProfileField::SalaryExpectation => "Additional Information",
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            ProfileField::InterestedSubjects => Some("e.g., Computer Science, Mathematics, Physics"),
            ProfileField::InterestedCareerArea => Some("e.g., Technology, Healthcare, Finance"),
            ProfileField::InterestedBooks => Some("e.g., Science fiction, Self-help, Technical"),
            _ => None,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            ProfileField::LogicalQuotient
            | ProfileField::CodingSkills
            | ProfileField::PublicSpeaking
            | ProfileField::ReadingAndWriting
            | ProfileField::MemoryCapability => FieldKind::Rating,
            ProfileField::Hackathons => FieldKind::Count,
            ProfileField::SelfLearning
            | ProfileField::ExtraCourses
            | ProfileField::InputsFromSeniors
            | ProfileField::WorkedInTeams
            | ProfileField::Introvert => FieldKind::Toggle,
            ProfileField::CompanyType
            | ProfileField::ManagementOrTechnical
            | ProfileField::WorkStyle
            | ProfileField::SalaryExpectation => FieldKind::Select,
            ProfileField::InterestedSubjects
            | ProfileField::InterestedCareerArea
            | ProfileField::InterestedBooks => FieldKind::Text,
        }
    }

    pub fn is_text(self) -> bool {
        self.kind() == FieldKind::Text
    }
}

impl CareerProfile {
    /// Current value of `field`, formatted for display.
    pub fn display_value(&self, field: ProfileField) -> String {
        match field {
            ProfileField::LogicalQuotient => self.logical_quotient_rating.to_string(),
            ProfileField::Hackathons => self.hackathons.to_string(),
            ProfileField::CodingSkills => self.coding_skills_rating.to_string(),
            ProfileField::PublicSpeaking => self.public_speaking_points.to_string(),
            ProfileField::SelfLearning => self.self_learning_capability.label().to_string(),
            ProfileField::ExtraCourses => self.extra_courses.label().to_string(),
            ProfileField::InputsFromSeniors => self.taken_inputs_from_seniors.label().to_string(),
            ProfileField::WorkedInTeams => self.worked_in_teams.label().to_string(),
            ProfileField::Introvert => self.introvert.label().to_string(),
            ProfileField::InterestedSubjects => self.interested_subjects.clone(),
            ProfileField::InterestedCareerArea => self.interested_career_area.clone(),
            ProfileField::CompanyType => self.type_of_company_want_to_settle_in.label().to_string(),
            ProfileField::ManagementOrTechnical => self.management_or_technical.label().to_string(),
            ProfileField::ReadingAndWriting => self.reading_and_writing_skills.to_string(),
            ProfileField::MemoryCapability => self.memory_capability_score.to_string(),
            ProfileField::InterestedBooks => self.interested_type_of_books.clone(),
            ProfileField::WorkStyle => self.hard_smart_worker.label().to_string(),
            ProfileField::SalaryExpectation => self.salary_expectation.label().to_string(),
        }
    }

    /// Step a numeric or choice field up (`forward`) or down. Text fields
    /// are left untouched.
    pub fn adjust(&mut self, field: ProfileField, forward: bool) {
        let delta: i16 = if forward { 1 } else { -1 };
        match field {
            ProfileField::LogicalQuotient => {
                self.logical_quotient_rating = step_rating(self.logical_quotient_rating, delta)
            }
            ProfileField::CodingSkills => {
                self.coding_skills_rating = step_rating(self.coding_skills_rating, delta)
            }
            ProfileField::PublicSpeaking => {
                self.public_speaking_points = step_rating(self.public_speaking_points, delta)
            }
            ProfileField::ReadingAndWriting => {
                self.reading_and_writing_skills = step_rating(self.reading_and_writing_skills, delta)
            }
            ProfileField::MemoryCapability => {
                self.memory_capability_score = step_rating(self.memory_capability_score, delta)
            }
            ProfileField::Hackathons => {
                self.hackathons = clamp_step(self.hackathons, delta, 0, HACKATHONS_MAX)
            }
            ProfileField::SelfLearning => {
                self.self_learning_capability = self.self_learning_capability.toggled()
            }
            ProfileField::ExtraCourses => self.extra_courses = self.extra_courses.toggled(),
            ProfileField::InputsFromSeniors => {
                self.taken_inputs_from_seniors = self.taken_inputs_from_seniors.toggled()
            }
            ProfileField::WorkedInTeams => self.worked_in_teams = self.worked_in_teams.toggled(),
            ProfileField::Introvert => self.introvert = self.introvert.toggled(),
            ProfileField::CompanyType => {
                self.type_of_company_want_to_settle_in =
                    self.type_of_company_want_to_settle_in.step(forward)
            }
            ProfileField::ManagementOrTechnical => {
                self.management_or_technical = self.management_or_technical.step(forward)
            }
            ProfileField::WorkStyle => self.hard_smart_worker = self.hard_smart_worker.step(forward),
            ProfileField::SalaryExpectation => {
                self.salary_expectation = self.salary_expectation.step(forward)
            }
            ProfileField::InterestedSubjects
            | ProfileField::InterestedCareerArea
            | ProfileField::InterestedBooks => {}
        }
    }

    /// Mutable access to a text field's buffer.
    pub fn text_mut(&mut self, field: ProfileField) -> Option<&mut String> {
        match field {
            ProfileField::InterestedSubjects => Some(&mut self.interested_subjects),
            ProfileField::InterestedCareerArea => Some(&mut self.interested_career_area),
            ProfileField::InterestedBooks => Some(&mut self.interested_type_of_books),
            _ => None,
        }
    }

    /// Clamp all numeric answers into their allowed ranges.
    pub fn normalize(&mut self) {
        for rating in [
            &mut self.logical_quotient_rating,
            &mut self.coding_skills_rating,
            &mut self.public_speaking_points,
            &mut self.reading_and_writing_skills,
            &mut self.memory_capability_score,
        ] {
            *rating = (*rating).clamp(RATING_MIN, RATING_MAX);
        }
        self.hackathons = self.hackathons.min(HACKATHONS_MAX);
    }
}

fn step_rating(value: u8, delta: i16) -> u8 {
    clamp_step(value, delta, RATING_MIN, RATING_MAX)
}

fn clamp_step(value: u8, delta: i16, min: u8, max: u8) -> u8 {
    let stepped = (i16::from(value) + delta).clamp(i16::from(min), i16::from(max));
    u8::try_from(stepped).unwrap_or(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_site_form() {
        let profile = CareerProfile::default();
        assert_eq!(profile.logical_quotient_rating, 7);
        assert_eq!(profile.hackathons, 2);
        assert_eq!(profile.coding_skills_rating, 6);
        assert_eq!(profile.public_speaking_points, 5);
        assert_eq!(profile.introvert, YesNo::No);
        assert_eq!(profile.memory_capability_score, 8);
        assert_eq!(profile.management_or_technical, WorkFocus::Technical);
        assert_eq!(profile.hard_smart_worker, WorkStyle::SmartWorker);
        assert_eq!(profile.salary_expectation, SalaryExpectation::Moderate);
        assert!(profile.interested_subjects.is_empty());
    }

    #[test]
    fn test_ratings_clamp_at_bounds() {
        let mut profile = CareerProfile {
            logical_quotient_rating: 10,
            coding_skills_rating: 1,
            ..CareerProfile::default()
        };
        profile.adjust(ProfileField::LogicalQuotient, true);
        profile.adjust(ProfileField::CodingSkills, false);
        assert_eq!(profile.logical_quotient_rating, 10);
        assert_eq!(profile.coding_skills_rating, 1);
    }

    #[test]
    fn test_hackathons_range() {
        let mut profile = CareerProfile {
            hackathons: 0,
            ..CareerProfile::default()
        };
        profile.adjust(ProfileField::Hackathons, false);
        assert_eq!(profile.hackathons, 0);

        profile.hackathons = HACKATHONS_MAX;
        profile.adjust(ProfileField::Hackathons, true);
        assert_eq!(profile.hackathons, HACKATHONS_MAX);
    }

    #[test]
    fn test_toggle_and_select_fields() {
        let mut profile = CareerProfile::default();
        profile.adjust(ProfileField::Introvert, true);
        assert_eq!(profile.introvert, YesNo::Yes);

        profile.adjust(ProfileField::CompanyType, false);
        assert_eq!(profile.type_of_company_want_to_settle_in, CompanyType::Nonprofit);
        profile.adjust(ProfileField::CompanyType, true);
        assert_eq!(profile.type_of_company_want_to_settle_in, CompanyType::Unselected);

        profile.adjust(ProfileField::ManagementOrTechnical, true);
        assert_eq!(profile.management_or_technical, WorkFocus::Management);
    }

    #[test]
    fn test_text_mut_only_for_text_fields() {
        let mut profile = CareerProfile::default();
        assert!(profile.text_mut(ProfileField::Hackathons).is_none());

        if let Some(buffer) = profile.text_mut(ProfileField::InterestedSubjects) {
            buffer.push_str("Physics");
        }
        assert_eq!(profile.display_value(ProfileField::InterestedSubjects), "Physics");
    }

    #[test]
    fn test_normalize_clamps_out_of_range_values() {
        let mut profile = CareerProfile {
            logical_quotient_rating: 0,
            memory_capability_score: 42,
            hackathons: 99,
            ..CareerProfile::default()
        };
        profile.normalize();
        assert_eq!(profile.logical_quotient_rating, RATING_MIN);
        assert_eq!(profile.memory_capability_score, RATING_MAX);
        assert_eq!(profile.hackathons, HACKATHONS_MAX);
    }

    #[test]
    fn test_profile_serializes_with_site_values() {
        let json = serde_json::to_value(CareerProfile::default()).expect("serialize");
        assert_eq!(json["hard_smart_worker"], "smart worker");
        assert_eq!(json["type_of_company_want_to_settle_in"], "");
        assert_eq!(json["self_learning_capability"], "yes");
    }

    #[test]
    fn test_company_type_uses_site_option_values() {
        let values: Vec<serde_json::Value> = CompanyType::OPTIONS
            .iter()
            .map(|company| serde_json::to_value(company).expect("serialize"))
            .collect();
        assert_eq!(values[0], "");
        assert_eq!(values[1], "startup");
        assert_eq!(values[2], "mid-size");

        let unselected: CompanyType = serde_json::from_str("\"\"").expect("deserialize");
        assert_eq!(unselected, CompanyType::Unselected);
    }

    #[test]
    fn test_every_field_has_a_section() {
        for field in ProfileField::ALL {
            assert!(!field.section().is_empty());
            assert!(!field.label().is_empty());
        }
    }
}
