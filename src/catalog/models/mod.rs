
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RecError;

/// Ordinal skill rating used in student records.
///
/// Source data encodes these as the words "weak", "average", and "strong";
/// profile text uses the numeric ordinal so that skill levels survive
/// tokenization as distinct terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Weak,
    Average,
    Strong,
}

impl SkillLevel {
    /// Numeric value on the 1-3 scale.
    #[inline]
    pub fn ordinal(self) -> u8 {
        match self {
            SkillLevel::Weak => 1,
            SkillLevel::Average => 2,
            SkillLevel::Strong => 3,
        }
    }
}

impl FromStr for SkillLevel {
    type Err = RecError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weak" => Ok(SkillLevel::Weak),
            "average" => Ok(SkillLevel::Average),
            "strong" => Ok(SkillLevel::Strong),
            other => Err(RecError::Data(format!(
                "Invalid skill level: '{}' (expected weak, average, or strong)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SkillLevel {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            SkillLevel::Weak => write!(f, "weak"),
            SkillLevel::Average => write!(f, "average"),
            SkillLevel::Strong => write!(f, "strong"),
        }
    }
}

/// A student with structured attributes and free-text history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub interested_domain: String,
    pub future_career: String,
    pub projects: String,
    pub experience: String,
    pub certifications: String,
    pub technical_skills: String,
    pub python: SkillLevel,
    pub sql: SkillLevel,
    pub java: SkillLevel,
}

impl Student {
    /// Derived profile text: structured attributes rendered as strings,
    /// followed by the free-text fields, space-joined.
    ///
    /// Empty fields still contribute their slot so the composition never
    /// depends on which fields happen to be present.
    #[inline]
    pub fn profile(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} {} {}",
            self.interested_domain,
            self.projects,
            self.future_career,
            self.experience,
            self.certifications,
            self.technical_skills,
            self.python.ordinal(),
            self.sql.ordinal(),
            self.java.ordinal()
        )
    }
}

/// A recommendable course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub about: String,
    pub description: String,
}

impl Course {
    /// Derived document text: name plus description fields, space-joined.
    /// Missing fields are stored as empty strings upstream, so the join is
    /// always well formed.
    #[inline]
    pub fn document(&self) -> String {
        [
            self.name.as_str(),
            self.about.as_str(),
            self.description.as_str(),
        ]
        .join(" ")
    }
}

/// Raw student row as it appears in the tabular source. Skill columns are
/// parsed into [`SkillLevel`] during conversion; free-text columns default
/// to empty when absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub interested_domain: String,
    pub future_career: String,
    #[serde(default)]
    pub projects: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub certifications: String,
    #[serde(default)]
    pub technical_skills: String,
    pub python: String,
    pub sql: String,
    pub java: String,
}

impl TryFrom<StudentRecord> for Student {
    type Error = RecError;

    #[inline]
    fn try_from(record: StudentRecord) -> Result<Self, Self::Error> {
        let python = record.python.parse()?;
        let sql = record.sql.parse()?;
        let java = record.java.parse()?;
        Ok(Student {
            id: record.id,
            interested_domain: record.interested_domain,
            future_career: record.future_career,
            projects: record.projects,
            experience: record.experience,
            certifications: record.certifications,
            technical_skills: record.technical_skills,
            python,
            sql,
            java,
        })
    }
}

/// Raw course row as it appears in the tabular source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub description: String,
}

impl From<CourseRecord> for Course {
    #[inline]
    fn from(record: CourseRecord) -> Self {
        Course {
            id: record.id,
            name: record.name,
            about: record.about,
            description: record.description,
        }
    }
}
