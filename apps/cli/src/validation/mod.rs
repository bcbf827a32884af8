//! Structural validation of a parsed CV document.
//!
//! `validate` walks the generic YAML tree against the descriptor table in
//! `crate::schema` and either returns a fully-populated [`Cv`] or every field
//! error it found. It never stops at the first problem. Checks are presence,
//! scalar type, and email/URL format only; no cross-field or date checks.

pub mod formats;

use std::fmt;

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::models::{
    Certificate, CompanyExperience, Cv, CustomSection, Education, Language, PersonalInfo, Project,
    Reference, Role, SectionBody, Skill,
};
use crate::schema::{self, EntityDescriptor, FieldDescriptor, FieldKind};
use crate::source;

use formats::{is_valid_email, is_valid_url};

// ────────────────────────────────────────────────────────────────────────────
// Result types
// ────────────────────────────────────────────────────────────────────────────

/// A single structural problem, addressed by dotted/indexed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// e.g. `personal_info.email`, `experience[1].roles[0].title`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// All errors found in one validation pass, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub(crate) fn paths(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.path.as_str()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ────────────────────────────────────────────────────────────────────────────
// Public entry points
// ────────────────────────────────────────────────────────────────────────────

/// Validates a parsed document and builds the CV graph.
pub fn validate(value: &Value) -> Result<Cv, ValidationErrors> {
    let mut v = Validator::default();
    let cv = v.cv(value);
    match cv {
        Some(cv) if v.errors.is_empty() => Ok(cv),
        _ => {
            debug_assert!(!v.errors.is_empty(), "validation failed without errors");
            Err(ValidationErrors(v.errors))
        }
    }
}

/// Predicate form: `(is_valid, errors)`.
pub fn check(value: &Value) -> (bool, Vec<FieldError>) {
    match validate(value) {
        Ok(_) => (true, Vec::new()),
        Err(errors) => (false, errors.0),
    }
}

/// Parses YAML text and validates it. A syntax error is reported as a single
/// entry at the `<source>` path.
pub fn validate_str(text: &str) -> Result<Cv, ValidationErrors> {
    let value = source::parse_str(text).map_err(|e| {
        ValidationErrors(vec![FieldError {
            path: "<source>".to_string(),
            message: e.to_string(),
        }])
    })?;
    validate(&value)
}

// ────────────────────────────────────────────────────────────────────────────
// Paths
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct FieldPath(String);

impl FieldPath {
    fn key(&self, key: &str) -> FieldPath {
        if self.0.is_empty() {
            FieldPath(key.to_string())
        } else {
            FieldPath(format!("{}.{}", self.0, key))
        }
    }

    fn index(&self, i: usize) -> FieldPath {
        FieldPath(format!("{}[{}]", self.0, i))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Walker
// ────────────────────────────────────────────────────────────────────────────

const MSG_REQUIRED: &str = "field required";
const MSG_EMPTY: &str = "field must not be empty";
const MSG_STRING: &str = "input should be a valid string";
const MSG_LIST: &str = "input should be a valid list";
const MSG_MAPPING: &str = "input should be a valid mapping";
const MSG_EMAIL: &str = "value is not a valid email address";
const MSG_URL: &str = "input should be a valid URL";
const MSG_NO_ROLES: &str = "list must contain at least one role";

/// A mapping being read against one entity descriptor.
struct Record<'v> {
    map: &'v Mapping,
    desc: &'static EntityDescriptor,
    path: FieldPath,
}

impl<'v> Record<'v> {
    /// Present, non-null value for `key`.
    fn raw(&self, key: &str) -> Option<&'v Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn field(&self, key: &str) -> FieldDescriptor {
        match self.desc.field(key) {
            Some(f) => *f,
            None => {
                debug_assert!(false, "no descriptor for {}.{}", self.desc.name, key);
                FieldDescriptor {
                    key: "",
                    kind: FieldKind::Text,
                    required: false,
                    description: "",
                }
            }
        }
    }
}

#[derive(Default)]
struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    fn push(&mut self, path: &FieldPath, message: &str) {
        let err = FieldError {
            path: path.to_string(),
            message: message.to_string(),
        };
        // The legacy experience form reads some keys twice.
        if !self.errors.contains(&err) {
            self.errors.push(err);
        }
    }

    fn open<'v>(
        &mut self,
        value: &'v Value,
        desc: &'static EntityDescriptor,
        path: FieldPath,
    ) -> Option<Record<'v>> {
        match value.as_mapping() {
            Some(map) => Some(Record { map, desc, path }),
            None => {
                self.push(&path, MSG_MAPPING);
                None
            }
        }
    }

    /// Reads a string field. Returns `None` when absent or invalid; an error is
    /// recorded unless the field is optional and absent.
    fn text(&mut self, rec: &Record<'_>, key: &str) -> Option<String> {
        let field = rec.field(key);
        let path = rec.path.key(key);
        let Some(value) = rec.raw(key) else {
            if field.required {
                self.push(&path, MSG_REQUIRED);
            }
            return None;
        };
        let Some(s) = value.as_str() else {
            self.push(&path, MSG_STRING);
            return None;
        };
        let s = s.trim();
        if s.is_empty() {
            if field.required {
                self.push(&path, MSG_EMPTY);
            }
            return None;
        }
        match field.kind {
            FieldKind::Email if !is_valid_email(s) => {
                self.push(&path, MSG_EMAIL);
                None
            }
            FieldKind::Url if !is_valid_url(s) => {
                self.push(&path, MSG_URL);
                None
            }
            _ => Some(s.to_string()),
        }
    }

    fn text_list(&mut self, rec: &Record<'_>, key: &str) -> Option<Vec<String>> {
        let field = rec.field(key);
        let path = rec.path.key(key);
        let Some(value) = rec.raw(key) else {
            if field.required {
                self.push(&path, MSG_REQUIRED);
            }
            return None;
        };
        self.strings(value, &path)
    }

    /// Reads a list of strings, trimmed, with blank items dropped.
    fn strings(&mut self, value: &Value, path: &FieldPath) -> Option<Vec<String>> {
        let Some(seq) = value.as_sequence() else {
            self.push(path, MSG_LIST);
            return None;
        };
        let mut items = Vec::with_capacity(seq.len());
        let mut ok = true;
        for (i, item) in seq.iter().enumerate() {
            match item.as_str().map(str::trim) {
                Some("") => {}
                Some(s) => items.push(s.to_string()),
                None => {
                    self.push(&path.index(i), MSG_STRING);
                    ok = false;
                }
            }
        }
        ok.then_some(items)
    }

    /// Reads a list of nested entities, building each with `build`.
    /// Returns `Some` only if every element built cleanly.
    fn entities<T>(
        &mut self,
        rec: &Record<'_>,
        key: &str,
        mut build: impl FnMut(&mut Self, &Value, FieldPath) -> Option<T>,
    ) -> Option<Vec<T>> {
        let field = rec.field(key);
        let path = rec.path.key(key);
        let Some(value) = rec.raw(key) else {
            if field.required {
                self.push(&path, MSG_REQUIRED);
            }
            return None;
        };
        let Some(seq) = value.as_sequence() else {
            self.push(&path, MSG_LIST);
            return None;
        };
        let mut items = Vec::with_capacity(seq.len());
        let mut ok = true;
        for (i, item) in seq.iter().enumerate() {
            match build(self, item, path.index(i)) {
                Some(entity) => items.push(entity),
                None => ok = false,
            }
        }
        ok.then_some(items)
    }

    // ── Entities ────────────────────────────────────────────────────────────

    fn cv(&mut self, value: &Value) -> Option<Cv> {
        let rec = self.open(value, &schema::CV, FieldPath::default())?;

        let personal_info = match rec.raw("personal_info") {
            Some(v) => self.personal_info(v, rec.path.key("personal_info")),
            None => {
                self.push(&rec.path.key("personal_info"), MSG_REQUIRED);
                None
            }
        };
        let education = self.entities(&rec, "education", Self::education);
        let experience = self.entities(&rec, "experience", Self::company);
        let skills = self.entities(&rec, "skills", Self::skill);
        let projects = self.entities(&rec, "projects", Self::project);
        let certifications = self.entities(&rec, "certifications", Self::certificate);
        let languages = self.entities(&rec, "languages", Self::language);
        let references = self.entities(&rec, "references", Self::reference);
        let publications = self.text_list(&rec, "publications");
        let awards = self.text_list(&rec, "awards");
        let interests = self.text_list(&rec, "interests");
        let custom_sections = self.custom_sections(&rec);

        Some(Cv {
            personal_info: personal_info?,
            education: education?,
            experience: experience?,
            skills,
            projects,
            certifications,
            languages,
            references,
            publications,
            awards,
            interests,
            custom_sections,
        })
    }

    fn personal_info(&mut self, value: &Value, path: FieldPath) -> Option<PersonalInfo> {
        let rec = self.open(value, &schema::PERSONAL_INFO, path)?;
        let name = self.text(&rec, "name");
        let email = self.text(&rec, "email");
        let phone = self.text(&rec, "phone");
        let location = self.text(&rec, "location");
        let website = self.text(&rec, "website");
        let linkedin = self.text(&rec, "linkedin");
        let github = self.text(&rec, "github");
        let summary = self.text(&rec, "summary");
        let title = self.text(&rec, "title");
        Some(PersonalInfo {
            name: name?,
            email: email?,
            phone,
            location,
            website,
            linkedin,
            github,
            summary,
            title,
        })
    }

    fn education(&mut self, value: &Value, path: FieldPath) -> Option<Education> {
        let rec = self.open(value, &schema::EDUCATION, path)?;
        let institution = self.text(&rec, "institution");
        let degree = self.text(&rec, "degree");
        let start_date = self.text(&rec, "start_date");
        let end_date = self.text(&rec, "end_date");
        let location = self.text(&rec, "location");
        let details = self.text(&rec, "details");
        let gpa = self.text(&rec, "gpa");
        Some(Education {
            institution: institution?,
            degree: degree?,
            start_date: start_date?,
            end_date,
            location,
            details,
            gpa,
        })
    }

    fn company(&mut self, value: &Value, path: FieldPath) -> Option<CompanyExperience> {
        let rec = self.open(value, &schema::COMPANY_EXPERIENCE, path.clone())?;

        // Flat `{company, title, ...}` entries from older files become a
        // single-role company.
        if rec.raw("roles").is_none() && rec.raw("title").is_some() {
            let company = self.text(&rec, "company");
            let location = self.text(&rec, "location");
            let role = self.role(value, path);
            return Some(CompanyExperience {
                company: company?,
                location,
                roles: vec![Role {
                    location: None,
                    ..role?
                }],
            });
        }

        let company = self.text(&rec, "company");
        let location = self.text(&rec, "location");
        let roles = self.entities(&rec, "roles", Self::role);
        if roles.as_ref().is_some_and(|r| r.is_empty()) {
            self.push(&rec.path.key("roles"), MSG_NO_ROLES);
            return None;
        }
        Some(CompanyExperience {
            company: company?,
            location,
            roles: roles?,
        })
    }

    fn role(&mut self, value: &Value, path: FieldPath) -> Option<Role> {
        let rec = self.open(value, &schema::ROLE, path)?;
        let title = self.text(&rec, "title");
        let start_date = self.text(&rec, "start_date");
        let end_date = self.text(&rec, "end_date");
        let location = self.text(&rec, "location");
        let description = self.text(&rec, "description");
        let achievements = self.text_list(&rec, "achievements");
        Some(Role {
            title: title?,
            start_date: start_date?,
            end_date,
            location,
            description,
            achievements,
        })
    }

    fn skill(&mut self, value: &Value, path: FieldPath) -> Option<Skill> {
        let rec = self.open(value, &schema::SKILL, path)?;
        let category = self.text(&rec, "category");
        let name = self.text(&rec, "name");
        Some(Skill {
            category: category?,
            name: name?,
        })
    }

    fn project(&mut self, value: &Value, path: FieldPath) -> Option<Project> {
        let rec = self.open(value, &schema::PROJECT, path)?;
        let name = self.text(&rec, "name");
        let description = self.text(&rec, "description");
        let technologies = self.text_list(&rec, "technologies");
        let link = self.text(&rec, "link");
        let start_date = self.text(&rec, "start_date");
        let end_date = self.text(&rec, "end_date");
        let achievements = self.text_list(&rec, "achievements");
        Some(Project {
            name: name?,
            description,
            technologies,
            link,
            start_date,
            end_date,
            achievements,
        })
    }

    fn certificate(&mut self, value: &Value, path: FieldPath) -> Option<Certificate> {
        let rec = self.open(value, &schema::CERTIFICATE, path)?;
        let name = self.text(&rec, "name");
        let issuer = self.text(&rec, "issuer");
        let date = self.text(&rec, "date");
        let description = self.text(&rec, "description");
        let link = self.text(&rec, "link");
        Some(Certificate {
            name: name?,
            issuer: issuer?,
            date,
            description,
            link,
        })
    }

    fn language(&mut self, value: &Value, path: FieldPath) -> Option<Language> {
        let rec = self.open(value, &schema::LANGUAGE, path)?;
        let name = self.text(&rec, "name");
        let proficiency = self.text(&rec, "proficiency");
        Some(Language {
            name: name?,
            proficiency: proficiency?,
        })
    }

    fn reference(&mut self, value: &Value, path: FieldPath) -> Option<Reference> {
        let rec = self.open(value, &schema::REFERENCE, path)?;
        let name = self.text(&rec, "name");
        let position = self.text(&rec, "position");
        let company = self.text(&rec, "company");
        let contact = self.text(&rec, "contact");
        let relation = self.text(&rec, "relation");
        Some(Reference {
            name: name?,
            position: position?,
            company: company?,
            contact,
            relation,
        })
    }

    fn custom_sections(&mut self, rec: &Record<'_>) -> Option<Vec<CustomSection>> {
        let path = rec.path.key("custom_sections");
        let value = rec.raw("custom_sections")?;
        let Some(map) = value.as_mapping() else {
            self.push(&path, MSG_MAPPING);
            return None;
        };

        let mut sections = Vec::with_capacity(map.len());
        let mut ok = true;
        for (key, body) in map {
            let Some(title) = key.as_str().map(str::trim).filter(|t| !t.is_empty()) else {
                self.push(&path, "section titles must be non-empty strings");
                ok = false;
                continue;
            };
            let section_path = path.key(title);
            let body = match body {
                Value::String(text) => Some(SectionBody::Text(text.trim().to_string())),
                Value::Sequence(_) => self.strings(body, &section_path).map(SectionBody::Items),
                _ => {
                    self.push(&section_path, "input should be a string or a list of strings");
                    None
                }
            };
            match body {
                Some(body) => sections.push(CustomSection {
                    title: title.to_string(),
                    body,
                }),
                None => ok = false,
            }
        }
        ok.then_some(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).expect("test fixture parses")
    }

    fn errors_for(yaml: &str) -> Vec<FieldError> {
        match validate(&parse(yaml)) {
            Ok(cv) => panic!("expected errors, got {cv:?}"),
            Err(e) => e.0,
        }
    }

    const MINIMAL: &str = r#"
personal_info:
  name: Jane Doe
  email: jane@x.com
education: []
experience: []
"#;

    #[test]
    fn test_minimal_document_validates() {
        let cv = validate(&parse(MINIMAL)).unwrap();
        assert_eq!(cv.personal_info.name, "Jane Doe");
        assert!(cv.education.is_empty());
        assert!(cv.experience.is_empty());
        assert!(cv.skills.is_none());
        assert!(cv.custom_sections.is_none());
    }

    #[test]
    fn test_collects_all_errors_in_one_pass() {
        let errors = errors_for(
            r#"
personal_info:
  name: Jane Doe
education:
  - institution: MIT
    start_date: "2015"
experience: []
"#,
        );
        let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["personal_info.email", "education[0].degree"]);
        assert!(errors.iter().all(|e| e.message == MSG_REQUIRED));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let errors = errors_for(
            r#"
personal_info: { name: Jane, email: not-an-email }
education: []
experience: []
"#,
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "personal_info.email");
        assert_eq!(errors[0].message, MSG_EMAIL);
    }

    #[test]
    fn test_invalid_urls_rejected() {
        let errors = errors_for(
            r#"
personal_info:
  name: Jane
  email: jane@x.com
  website: janedoe.dev
  github: https://github.com/jane
  linkedin: "linkedin/jane"
education: []
experience: []
"#,
        );
        let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["personal_info.website", "personal_info.linkedin"]);
    }

    #[test]
    fn test_missing_top_level_sections() {
        let errors = errors_for("personal_info: { name: Jane, email: jane@x.com }");
        let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["education", "experience"]);
    }

    #[test]
    fn test_missing_personal_info() {
        let errors = errors_for("education: []\nexperience: []");
        assert_eq!(errors[0].path, "personal_info");
        assert_eq!(errors[0].message, MSG_REQUIRED);
    }

    #[test]
    fn test_root_must_be_mapping() {
        let errors = errors_for("- just\n- a list");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "<root>");
        assert_eq!(errors[0].message, MSG_MAPPING);
    }

    #[test]
    fn test_wrong_scalar_type() {
        let errors = errors_for(
            r#"
personal_info: { name: Jane, email: jane@x.com, phone: 5551234 }
education:
  - { institution: MIT, degree: BSc, start_date: 2015 }
experience: {}
"#,
        );
        let pairs: Vec<_> = errors
            .iter()
            .map(|e| (e.path.as_str(), e.message.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("personal_info.phone", MSG_STRING),
                ("education[0].start_date", MSG_STRING),
                ("experience", MSG_LIST),
            ]
        );
    }

    #[test]
    fn test_blank_required_field_rejected() {
        let errors = errors_for(
            r#"
personal_info: { name: "   ", email: jane@x.com }
education: []
experience: []
"#,
        );
        assert_eq!(errors[0].path, "personal_info.name");
        assert_eq!(errors[0].message, MSG_EMPTY);
    }

    #[test]
    fn test_blank_optional_field_normalised_to_none() {
        let cv = validate(&parse(
            r#"
personal_info: { name: Jane, email: jane@x.com, title: "", phone: ~ }
education: []
experience: []
"#,
        ))
        .unwrap();
        assert_eq!(cv.personal_info.title, None);
        assert_eq!(cv.personal_info.phone, None);
    }

    #[test]
    fn test_nested_role_paths() {
        let errors = errors_for(
            r#"
personal_info: { name: Jane, email: jane@x.com }
education: []
experience:
  - company: Acme
    roles:
      - title: Engineer
        start_date: "2020"
  - company: Initech
    roles:
      - start_date: "2018"
        achievements: [shipped, 42]
"#,
        );
        let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["experience[1].roles[0].title", "experience[1].roles[0].achievements[1]"]
        );
    }

    #[test]
    fn test_company_requires_at_least_one_role() {
        let errors = errors_for(
            r#"
personal_info: { name: Jane, email: jane@x.com }
education: []
experience:
  - company: Acme
    roles: []
"#,
        );
        assert_eq!(errors[0].path, "experience[0].roles");
        assert_eq!(errors[0].message, MSG_NO_ROLES);
    }

    #[test]
    fn test_company_without_roles_or_title() {
        let errors = errors_for(
            r#"
personal_info: { name: Jane, email: jane@x.com }
education: []
experience:
  - company: Acme
"#,
        );
        assert_eq!(errors[0].path, "experience[0].roles");
        assert_eq!(errors[0].message, MSG_REQUIRED);
    }

    #[test]
    fn test_legacy_flat_experience_becomes_single_role() {
        let cv = validate(&parse(
            r#"
personal_info: { name: Jane, email: jane@x.com }
education: []
experience:
  - company: Acme
    title: Engineer
    start_date: "2019"
    location: Berlin
    achievements: [Shipped v2]
"#,
        ))
        .unwrap();
        let company = &cv.experience[0];
        assert_eq!(company.company, "Acme");
        assert_eq!(company.location.as_deref(), Some("Berlin"));
        assert_eq!(company.roles.len(), 1);
        assert_eq!(company.roles[0].title, "Engineer");
        assert_eq!(company.roles[0].location, None);
        assert_eq!(company.roles[0].achievements.as_deref(), Some(&["Shipped v2".to_string()][..]));
    }

    #[test]
    fn test_legacy_form_reports_missing_start_date_once() {
        let errors = errors_for(
            r#"
personal_info: { name: Jane, email: jane@x.com }
education: []
experience:
  - { company: Acme, title: Engineer, location: 7 }
"#,
        );
        let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["experience[0].location", "experience[0].start_date"]);
    }

    #[test]
    fn test_present_empty_optional_list_kept() {
        let cv = validate(&parse(&format!("{MINIMAL}skills: []\n"))).unwrap();
        assert_eq!(cv.skills, Some(vec![]));
    }

    #[test]
    fn test_blank_list_items_dropped() {
        let cv = validate(&parse(
            r#"
personal_info: { name: Jane, email: jane@x.com }
education: []
experience:
  - company: Acme
    roles:
      - title: Engineer
        start_date: "2020"
        achievements: ["", "  Shipped v1  ", " "]
interests: [""]
"#,
        ))
        .unwrap();
        assert_eq!(
            cv.experience[0].roles[0].achievements,
            Some(vec!["Shipped v1".to_string()])
        );
        assert_eq!(cv.interests, Some(vec![]));

        let blocks = crate::layout::compose(&cv, &crate::styles::Theme::Classic.stylesheet());
        assert!(!blocks.iter().any(|b| matches!(
            b,
            crate::layout::LayoutBlock::Paragraph { text, .. } if text.is_empty()
        )));
    }

    #[test]
    fn test_order_preserved() {
        let cv = validate(&parse(
            r#"
personal_info: { name: Jane, email: jane@x.com }
education:
  - { institution: B, degree: Two, start_date: "2012" }
  - { institution: A, degree: One, start_date: "2010" }
experience: []
skills:
  - { category: Z, name: zeta }
  - { category: A, name: alpha }
"#,
        ))
        .unwrap();
        assert_eq!(cv.education[0].institution, "B");
        assert_eq!(cv.education[1].institution, "A");
        let skills = cv.skills.unwrap();
        assert_eq!(skills[0].category, "Z");
    }

    #[test]
    fn test_custom_sections_in_source_order() {
        let cv = validate(&parse(&format!(
            "{MINIMAL}custom_sections:\n  Volunteering: [Food bank, Coding club]\n  Hobbies: |\n    Climbing\n"
        )))
        .unwrap();
        let sections = cv.custom_sections.unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Volunteering");
        assert_eq!(
            sections[0].body,
            SectionBody::Items(vec!["Food bank".to_string(), "Coding club".to_string()])
        );
        assert_eq!(sections[1].body, SectionBody::Text("Climbing".to_string()));
    }

    #[test]
    fn test_custom_section_bad_item_path() {
        let errors = errors_for(&format!(
            "{MINIMAL}custom_sections:\n  Volunteering: [ok, 3]\n  Other: 12\n"
        ));
        let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["custom_sections.Volunteering[1]", "custom_sections.Other"]
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let cv = validate(&parse(&format!("{MINIMAL}hobbies_typo: yes\n")));
        assert!(cv.is_ok());
    }

    #[test]
    fn test_check_predicate() {
        let (ok, errors) = check(&parse(MINIMAL));
        assert!(ok);
        assert!(errors.is_empty());

        let (ok, errors) = check(&parse("education: []\nexperience: []"));
        assert!(!ok);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_validate_str_reports_syntax_error() {
        let err = validate_str("personal_info: [unclosed").unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.errors()[0].path, "<source>");
    }

    #[test]
    fn test_validation_errors_display_one_per_line() {
        let err = validate_str("education: []").unwrap_err();
        assert_eq!(
            err.to_string(),
            "personal_info: field required\nexperience: field required"
        );
    }
}
