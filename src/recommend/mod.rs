//! Skill-based recommendation engine.
//!
//! A pure function of the embedded catalogs and a list of skill names. A catalog
//! entry matches when any of its tags, lowercased, contains a lowercased user
//! skill or is contained in one. Matches keep catalog order; when nothing
//! matches a fixed positional slice of the catalog is returned instead. Results
//! are truncated to a per-catalog cap.

mod catalog;

pub use catalog::*;

use std::ops::Range;

use serde::Serialize;

pub const PROJECT_CAP: usize = 6;
pub const COMPANY_CAP: usize = 8;
pub const PROBLEM_CAP: usize = 6;

/// Portfolio, Weather, Calculator, Todo.
const PROJECT_FALLBACK: Range<usize> = 4..8;
/// Airbnb, Accenture, TCS.
const COMPANY_FALLBACK: Range<usize> = 5..8;
/// Two Sum through Longest Substring.
const PROBLEM_FALLBACK: Range<usize> = 0..4;

/// The three recommendation lists for one skill set.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub projects: Vec<&'static Project>,
    pub companies: Vec<&'static Company>,
    pub problems: Vec<&'static Problem>,
}

/// Catalog entries expose the tag list they are matched on.
trait Tagged {
    fn tags(&self) -> &'static [&'static str];
}

impl Tagged for Project {
    fn tags(&self) -> &'static [&'static str] {
        self.skills
    }
}

impl Tagged for Company {
    fn tags(&self) -> &'static [&'static str] {
        self.required_skills
    }
}

impl Tagged for Problem {
    fn tags(&self) -> &'static [&'static str] {
        self.skills
    }
}

/// Lowercase user skills, dropping blank ones (a blank skill would match everything).
fn normalize<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    skills
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

/// Bidirectional substring test between a lowercased user skill and a catalog tag.
pub fn tags_match(user_skill: &str, catalog_tag: &str) -> bool {
    let user_skill = user_skill.to_lowercase();
    let catalog_tag = catalog_tag.to_lowercase();
    catalog_tag.contains(&user_skill) || user_skill.contains(&catalog_tag)
}

fn select<E: Tagged>(
    catalog: &'static [E],
    skills: &[String],
    fallback: Range<usize>,
    cap: usize,
) -> Vec<&'static E> {
    let mut matched: Vec<&'static E> = catalog
        .iter()
        .filter(|entry| {
            entry
                .tags()
                .iter()
                .any(|tag| skills.iter().any(|skill| tags_match(skill, tag)))
        })
        .collect();

    if matched.is_empty() {
        matched = catalog[fallback].iter().collect();
    }

    matched.truncate(cap);
    matched
}

pub fn recommend_projects<S: AsRef<str>>(skills: &[S]) -> Vec<&'static Project> {
    select(&PROJECTS, &normalize(skills), PROJECT_FALLBACK, PROJECT_CAP)
}

pub fn recommend_companies<S: AsRef<str>>(skills: &[S]) -> Vec<&'static Company> {
    select(&COMPANIES, &normalize(skills), COMPANY_FALLBACK, COMPANY_CAP)
}

pub fn recommend_problems<S: AsRef<str>>(skills: &[S]) -> Vec<&'static Problem> {
    select(&PROBLEMS, &normalize(skills), PROBLEM_FALLBACK, PROBLEM_CAP)
}

/// Run all three catalogs against the same skill set.
pub fn recommend<S: AsRef<str>>(skills: &[S]) -> Recommendations {
    let recommendations = Recommendations {
        projects: recommend_projects(skills),
        companies: recommend_companies(skills),
        problems: recommend_problems(skills),
    };
    tracing::debug!(
        skills = skills.len(),
        projects = recommendations.projects.len(),
        companies = recommendations.companies.len(),
        problems = recommendations.problems.len(),
        "Generated recommendations"
    );
    recommendations
}
