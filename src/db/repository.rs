//! Database repository for accounts and profiles.
//!
//! Uses prepared statements; every write is a single atomic statement.

use chrono::Utc;
use serde::de::DeserializeOwned;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Account, Profile, SaveProfileRequest, SkillTag, SubjectTag};

/// The independently replaceable lists on a profile.
#[derive(Debug, Clone, Copy)]
enum ProfileList {
    Skills,
    Subjects,
}

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== ACCOUNT OPERATIONS ====================

    /// Insert a new account. Username and email uniqueness is enforced by the schema.
    pub async fn create_account(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Account, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "INSERT INTO accounts (id, username, email, password_hash, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(&now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(Account {
                id,
                username: username.to_string(),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
                created_at: now,
            }),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(AppError::DuplicateIdentity)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Look up an account by username.
    pub async fn find_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AppError> {
        let row = sqlx::query(
            "SELECT id, username, email, password_hash, created_at FROM accounts WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(account_from_row))
    }

    /// Look up an account by id.
    pub async fn get_account(&self, id: &str) -> Result<Option<Account>, AppError> {
        let row = sqlx::query(
            "SELECT id, username, email, password_hash, created_at FROM accounts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(account_from_row))
    }

    // ==================== PROFILE OPERATIONS ====================

    /// Fetch a profile if one exists.
    pub async fn find_profile(&self, user_id: &str) -> Result<Option<Profile>, AppError> {
        let row = sqlx::query(
            "SELECT user_id, name, dob, semester, college, branch, skills, subjects, updated_at FROM profiles WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(profile_from_row))
    }

    /// Fetch a profile, failing with `NotFound` if it was never saved.
    pub async fn get_profile(&self, user_id: &str) -> Result<Profile, AppError> {
        self.find_profile(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student details not found".to_string()))
    }

    /// Create or overwrite a profile.
    ///
    /// Scalar fields are always overwritten. Lists are replaced when present in
    /// the request and kept otherwise (empty on first save).
    pub async fn save_profile(
        &self,
        user_id: &str,
        request: &SaveProfileRequest,
    ) -> Result<Profile, AppError> {
        let now = Utc::now().to_rfc3339();
        let skills_json = request
            .skills
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let subjects_json = request
            .subjects
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, name, dob, semester, college, branch, skills, subjects, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, COALESCE(?7, '[]'), COALESCE(?8, '[]'), ?9)
            ON CONFLICT(user_id) DO UPDATE SET
                name = excluded.name,
                dob = excluded.dob,
                semester = excluded.semester,
                college = excluded.college,
                branch = excluded.branch,
                skills = COALESCE(?7, profiles.skills),
                subjects = COALESCE(?8, profiles.subjects),
                updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(&request.name)
        .bind(&request.dob)
        .bind(i64::from(request.semester))
        .bind(&request.college)
        .bind(&request.branch)
        .bind(&skills_json)
        .bind(&subjects_json)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.get_profile(user_id).await
    }

    /// Replace the skill list of an existing profile.
    pub async fn set_skills(
        &self,
        user_id: &str,
        skills: &[SkillTag],
    ) -> Result<Vec<SkillTag>, AppError> {
        self.replace_list(user_id, ProfileList::Skills, &serde_json::to_string(skills)?)
            .await?;
        Ok(skills.to_vec())
    }

    /// Replace the subject list of an existing profile.
    pub async fn set_subjects(
        &self,
        user_id: &str,
        subjects: &[SubjectTag],
    ) -> Result<Vec<SubjectTag>, AppError> {
        self.replace_list(user_id, ProfileList::Subjects, &serde_json::to_string(subjects)?)
            .await?;
        Ok(subjects.to_vec())
    }

    /// Partial update of one JSON list column; never creates a profile.
    async fn replace_list(
        &self,
        user_id: &str,
        list: ProfileList,
        json: &str,
    ) -> Result<(), AppError> {
        let sql = match list {
            ProfileList::Skills => {
                "UPDATE profiles SET skills = ?, updated_at = ? WHERE user_id = ?"
            }
            ProfileList::Subjects => {
                "UPDATE profiles SET subjects = ?, updated_at = ? WHERE user_id = ?"
            }
        };

        let now = Utc::now().to_rfc3339();
        let result = sqlx::query(sql)
            .bind(json)
            .bind(&now)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Student not found".to_string()));
        }
        Ok(())
    }
}

// Helper functions for row conversion

fn account_from_row(row: &sqlx::sqlite::SqliteRow) -> Account {
    Account {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
    }
}

fn profile_from_row(row: &sqlx::sqlite::SqliteRow) -> Profile {
    let semester: i64 = row.get("semester");
    let skills_str: String = row.get("skills");
    let subjects_str: String = row.get("subjects");
    Profile {
        user_id: row.get("user_id"),
        name: row.get("name"),
        dob: row.get("dob"),
        semester: u8::try_from(semester).unwrap_or_default(),
        college: row.get("college"),
        branch: row.get("branch"),
        skills: parse_json_list(&skills_str),
        subjects: parse_json_list(&subjects_str),
        updated_at: row.get("updated_at"),
    }
}

fn parse_json_list<T: DeserializeOwned>(s: &str) -> Vec<T> {
    serde_json::from_str(s).unwrap_or_default()
}
