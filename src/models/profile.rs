//! Student profile model and its skill/subject tags.

use serde::{de, Deserialize, Deserializer, Serialize};

/// Fixed set of categories a skill tag may belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Programming,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
    Database,
    DevOps,
    Design,
    Other,
}

/// A user-managed competency label. Matching against catalogs uses `name` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTag {
    pub name: String,
    pub category: SkillCategory,
}

/// A subject the student is taking or has taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectTag {
    pub name: String,
    #[serde(deserialize_with = "semester_number")]
    pub semester: u8,
}

/// One profile per account, created lazily on first save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub name: String,
    pub dob: String,
    pub semester: u8,
    pub college: String,
    pub branch: String,
    pub skills: Vec<SkillTag>,
    pub subjects: Vec<SubjectTag>,
    pub updated_at: String,
}

impl Profile {
    /// Skill names in declaration order, as fed to the recommendation engine.
    pub fn skill_names(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.name.clone()).collect()
    }
}

/// Request body for creating or overwriting a profile.
///
/// Omitted lists keep their stored value; an explicit empty list clears it.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveProfileRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default, deserialize_with = "semester_number")]
    pub semester: u8,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub skills: Option<Vec<SkillTag>>,
    #[serde(default)]
    pub subjects: Option<Vec<SubjectTag>>,
}

/// Request body for replacing the skill list.
#[derive(Debug, Clone, Deserialize)]
pub struct SetSkillsRequest {
    pub skills: Vec<SkillTag>,
}

/// Request body for replacing the subject list.
#[derive(Debug, Clone, Deserialize)]
pub struct SetSubjectsRequest {
    pub subjects: Vec<SubjectTag>,
}

/// Semesters arrive either as numbers or as numeric strings (form inputs).
fn semester_number<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u8),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("semester must be a number, got {:?}", text))),
    }
}

pub const MIN_SEMESTER: u8 = 1;
pub const MAX_SEMESTER: u8 = 8;

fn check_semester(semester: u8, what: &str) -> Result<(), String> {
    if (MIN_SEMESTER..=MAX_SEMESTER).contains(&semester) {
        Ok(())
    } else {
        Err(format!(
            "{} semester must be between {} and {}",
            what, MIN_SEMESTER, MAX_SEMESTER
        ))
    }
}

/// Validate a skill list, returning the first problem found.
pub fn validate_skills(skills: &[SkillTag]) -> Result<(), String> {
    if skills.iter().any(|s| s.name.trim().is_empty()) {
        return Err("Skill name is required".to_string());
    }
    Ok(())
}

/// Validate a subject list, returning the first problem found.
pub fn validate_subjects(subjects: &[SubjectTag]) -> Result<(), String> {
    for subject in subjects {
        if subject.name.trim().is_empty() {
            return Err("Subject name is required".to_string());
        }
        check_semester(subject.semester, "Subject")?;
    }
    Ok(())
}

impl SaveProfileRequest {
    /// Check required scalar fields and any supplied lists.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("Name", &self.name),
            ("Date of birth", &self.dob),
            ("College", &self.college),
            ("Branch", &self.branch),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(format!("{} is required", label));
            }
        }
        check_semester(self.semester, "Profile")?;
        if let Some(skills) = &self.skills {
            validate_skills(skills)?;
        }
        if let Some(subjects) = &self.subjects {
            validate_subjects(subjects)?;
        }
        Ok(())
    }
}
