//! Prompt catalog — the fixed, closed set of resume actions.
//!
//! Every action owns a prompt template, a display title (used for the output
//! heading and the download file name), a button label and a success message.

pub mod prompts;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use prompts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Summary,
    InterviewQa,
    StudyLinks,
    CoverLetter,
    ImprovementTips,
    CareerRoles,
    SkillGap,
    LinkedinSummary,
    ProjectHighlights,
    AtsScore,
    ApplicationEmail,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown action '{0}'")]
pub struct UnknownAction(pub String);

/// Button-facing description of an action, in page order.
#[derive(Debug, Clone, Serialize)]
pub struct ActionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub row: u8,
}

impl Action {
    /// All actions in button order: six on the first row, five on the second.
    pub const ALL: [Action; 11] = [
        Action::Summary,
        Action::InterviewQa,
        Action::StudyLinks,
        Action::CoverLetter,
        Action::ImprovementTips,
        Action::AtsScore,
        Action::CareerRoles,
        Action::SkillGap,
        Action::LinkedinSummary,
        Action::ProjectHighlights,
        Action::ApplicationEmail,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Action::Summary => "summary",
            Action::InterviewQa => "interview-qa",
            Action::StudyLinks => "study-links",
            Action::CoverLetter => "cover-letter",
            Action::ImprovementTips => "improvement-tips",
            Action::CareerRoles => "career-roles",
            Action::SkillGap => "skill-gap",
            Action::LinkedinSummary => "linkedin-summary",
            Action::ProjectHighlights => "project-highlights",
            Action::AtsScore => "ats-score",
            Action::ApplicationEmail => "application-email",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Action::Summary => "Resume Summary",
            Action::InterviewQa => "Interview Questions & Answers",
            Action::StudyLinks => "Suggested Study Links",
            Action::CoverLetter => "Cover Letter",
            Action::ImprovementTips => "Resume Improvement Tips",
            Action::CareerRoles => "Career Role Suggestions",
            Action::SkillGap => "Skill Gap Analysis",
            Action::LinkedinSummary => "LinkedIn Profile Summary",
            Action::ProjectHighlights => "Project Highlights",
            Action::AtsScore => "ATS Compatibility Report",
            Action::ApplicationEmail => "Application Email Template",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Summary => "Generate Summary",
            Action::InterviewQa => "Interview Q&A",
            Action::StudyLinks => "Study Links",
            Action::CoverLetter => "Cover Letter",
            Action::ImprovementTips => "Resume Tips",
            Action::CareerRoles => "Career Role Match",
            Action::SkillGap => "Skill Gap Analysis",
            Action::LinkedinSummary => "LinkedIn Summary",
            Action::ProjectHighlights => "Extract Projects",
            Action::AtsScore => "ATS Score",
            Action::ApplicationEmail => "Application Email",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Action::Summary => "Summary generated successfully!",
            Action::InterviewQa => "Interview Q&A generated successfully!",
            Action::StudyLinks => "Study links generated successfully!",
            Action::CoverLetter => "Cover letter generated successfully!",
            Action::ImprovementTips => "Improvement tips generated successfully!",
            Action::CareerRoles => "Career roles generated successfully!",
            Action::SkillGap => "Skill gap analysis generated!",
            Action::LinkedinSummary => "LinkedIn summary generated!",
            Action::ProjectHighlights => "Projects extracted successfully!",
            Action::AtsScore => "ATS report generated!",
            Action::ApplicationEmail => "Email generated successfully!",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            Action::Summary => SUMMARY_PROMPT,
            Action::InterviewQa => INTERVIEW_QA_PROMPT,
            Action::StudyLinks => STUDY_LINKS_PROMPT,
            Action::CoverLetter => COVER_LETTER_PROMPT,
            Action::ImprovementTips => IMPROVEMENT_TIPS_PROMPT,
            Action::CareerRoles => CAREER_ROLES_PROMPT,
            Action::SkillGap => SKILL_GAP_PROMPT,
            Action::LinkedinSummary => LINKEDIN_SUMMARY_PROMPT,
            Action::ProjectHighlights => PROJECT_HIGHLIGHTS_PROMPT,
            Action::AtsScore => ATS_SCORE_PROMPT,
            Action::ApplicationEmail => APPLICATION_EMAIL_PROMPT,
        }
    }

    /// Fills the action's template with the resume text.
    pub fn prompt(self, resume_text: &str) -> String {
        self.template().replace("{resume_text}", resume_text)
    }

    /// First row holds the six core actions, the second row the rest.
    pub fn row(self) -> u8 {
        match self {
            Action::Summary
            | Action::InterviewQa
            | Action::StudyLinks
            | Action::CoverLetter
            | Action::ImprovementTips
            | Action::AtsScore => 1,
            _ => 2,
        }
    }

    pub fn descriptor(self) -> ActionDescriptor {
        ActionDescriptor {
            id: self.id(),
            label: self.label(),
            title: self.title(),
            row: self.row(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

/// The catalog in button order.
pub fn catalog() -> Vec<ActionDescriptor> {
    Action::ALL.into_iter().map(Action::descriptor).collect()
}
