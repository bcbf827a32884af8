//! The validated CV entity graph.
//!
//! Values are only ever built by `validation::validate`, which guarantees that
//! required strings are non-empty and optional strings are either absent or
//! non-empty. List order is the order of the source document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub summary: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub details: Option<String>,
    pub gpa: Option<String>,
}

/// One position held at a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
}

/// A company and the roles held there, in the order they were listed.
///
/// `roles` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyExperience {
    pub company: String,
    pub location: Option<String>,
    pub roles: Vec<Role>,
}

/// A single skill. Grouping by category happens at composition time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub category: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub link: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,
    pub position: String,
    pub company: String,
    pub contact: Option<String>,
    pub relation: Option<String>,
}

/// Content of a user-defined section: free text or a list of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionBody {
    Text(String),
    Items(Vec<String>),
}

/// A user-defined section, kept in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomSection {
    pub title: String,
    pub body: SectionBody,
}

/// Root of the entity graph.
///
/// `education` and `experience` are always present (possibly empty). Every
/// other section is `None` when absent from the source and `Some(vec![])`
/// when present but empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cv {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub experience: Vec<CompanyExperience>,
    pub skills: Option<Vec<Skill>>,
    pub projects: Option<Vec<Project>>,
    pub certifications: Option<Vec<Certificate>>,
    pub languages: Option<Vec<Language>>,
    pub references: Option<Vec<Reference>>,
    pub publications: Option<Vec<String>>,
    pub awards: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub custom_sections: Option<Vec<CustomSection>>,
}
