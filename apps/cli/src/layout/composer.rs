//! Walks a validated CV and emits the ordered block sequence.
//!
//! Sections are visited in a fixed order: personal info, work experience,
//! education, skills, projects, certifications, languages, publications,
//! awards, interests, references, custom sections. A section that is absent
//! from the CV emits nothing. An optional list that is present but empty
//! emits its heading only. The required `education` and `experience` lists
//! are skipped entirely when empty.
//!
//! `compose` is pure: the same CV always yields the same blocks.

use crate::layout::blocks::LayoutBlock;
use crate::models::{
    Certificate, CompanyExperience, Cv, CustomSection, Education, Language, PersonalInfo, Project,
    Reference, SectionBody, Skill,
};
use crate::styles::{Role, StyleSheet};

const PRESENT: &str = "Present";

const SPACE_AFTER_SUMMARY: f32 = 12.0;
const SPACE_AFTER_ROLE: f32 = 4.0;
const SPACE_AFTER_ENTRY: f32 = 6.0;
const SPACE_AFTER_SKILL_GROUP: f32 = 4.0;

/// Builds the block sequence for `cv`. The stylesheet is only consulted for
/// diagnostics; formatting is applied by the renderer through each block's role.
pub fn compose(cv: &Cv, stylesheet: &StyleSheet) -> Vec<LayoutBlock> {
    let mut c = Composer::default();

    c.personal_info(&cv.personal_info);
    if !cv.experience.is_empty() {
        c.section("Work Experience", &cv.experience, Composer::company);
    }
    if !cv.education.is_empty() {
        c.section("Education", &cv.education, Composer::education);
    }
    if let Some(skills) = &cv.skills {
        c.skills(skills);
    }
    if let Some(projects) = &cv.projects {
        c.section("Projects", projects, Composer::project);
    }
    if let Some(certs) = &cv.certifications {
        c.section("Certifications", certs, Composer::certificate);
    }
    if let Some(languages) = &cv.languages {
        c.languages(languages);
    }
    if let Some(items) = &cv.publications {
        c.bullet_section("Publications", items);
    }
    if let Some(items) = &cv.awards {
        c.bullet_section("Awards", items);
    }
    if let Some(interests) = &cv.interests {
        c.heading("Interests");
        if !interests.is_empty() {
            c.paragraph(interests.join(", "), Role::Body);
        }
    }
    if let Some(refs) = &cv.references {
        c.section("References", refs, Composer::reference);
    }
    for custom in cv.custom_sections.iter().flatten() {
        c.custom(custom);
    }

    tracing::debug!(
        theme = %stylesheet.theme(),
        blocks = c.blocks.len(),
        "Composed layout blocks"
    );
    c.blocks
}

#[derive(Default)]
struct Composer {
    blocks: Vec<LayoutBlock>,
}

impl Composer {
    fn heading(&mut self, text: &str) {
        self.blocks.push(LayoutBlock::heading(text, Role::SectionHeading));
    }

    fn paragraph(&mut self, text: impl Into<String>, role: Role) {
        self.blocks.push(LayoutBlock::paragraph(text, role));
    }

    fn spacer(&mut self, size: f32) {
        self.blocks.push(LayoutBlock::Spacer(size));
    }

    fn bullets(&mut self, items: &[String], role: Role) {
        if !items.is_empty() {
            self.blocks.push(LayoutBlock::bullets(items.to_vec(), role));
        }
    }

    /// Heading, then each entry followed by the entry spacer.
    fn section<T>(&mut self, title: &str, items: &[T], mut format: impl FnMut(&mut Self, &T)) {
        self.heading(title);
        for item in items {
            format(self, item);
            self.spacer(SPACE_AFTER_ENTRY);
        }
    }

    fn bullet_section(&mut self, title: &str, items: &[String]) {
        self.heading(title);
        self.bullets(items, Role::BulletItem);
    }

    // ── Sections ────────────────────────────────────────────────────────────

    fn personal_info(&mut self, info: &PersonalInfo) {
        self.blocks.push(LayoutBlock::heading(&info.name, Role::Name));

        if let Some(title) = &info.title {
            self.paragraph(title, Role::ContactInfo);
        }

        let contact: Vec<String> = [
            ("Email", Some(&info.email)),
            ("Phone", info.phone.as_ref()),
            ("Location", info.location.as_ref()),
            ("Website", info.website.as_ref()),
            ("LinkedIn", info.linkedin.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| format!("{label}: {v}")))
        .collect();
        self.paragraph(contact.join(" | "), Role::ContactInfo);

        if let Some(summary) = &info.summary {
            self.heading("Summary");
            for line in summary.lines().map(str::trim).filter(|l| !l.is_empty()) {
                self.paragraph(line, Role::Body);
            }
            self.spacer(SPACE_AFTER_SUMMARY);
        }
    }

    fn company(&mut self, company: &CompanyExperience) {
        self.paragraph(
            with_suffix(&company.company, company.location.as_deref(), " (", ")"),
            Role::ExperienceTitle,
        );

        for role in &company.roles {
            self.paragraph(&role.title, Role::RoleTitle);
            let dates = date_range(&role.start_date, role.end_date.as_deref());
            self.paragraph(
                with_suffix(&dates, role.location.as_deref(), " | ", ""),
                Role::ExperienceDetails,
            );
            if let Some(description) = &role.description {
                self.paragraph(description, Role::Body);
            }
            if let Some(achievements) = &role.achievements {
                self.bullets(achievements, Role::Body);
            }
            self.spacer(SPACE_AFTER_ROLE);
        }
    }

    fn education(&mut self, edu: &Education) {
        self.paragraph(
            format!("{} - {}", edu.degree, edu.institution),
            Role::ExperienceTitle,
        );
        let dates = date_range(&edu.start_date, edu.end_date.as_deref());
        self.paragraph(
            with_suffix(&dates, edu.location.as_deref(), " | ", ""),
            Role::ExperienceDetails,
        );
        if let Some(details) = &edu.details {
            self.paragraph(details, Role::Body);
        }
        if let Some(gpa) = &edu.gpa {
            self.paragraph(format!("GPA: {gpa}"), Role::Body);
        }
    }

    fn skills(&mut self, skills: &[Skill]) {
        self.heading("Skills");
        for (category, names) in group_skills(skills) {
            self.paragraph(category, Role::ExperienceTitle);
            self.paragraph(names.join(", "), Role::Body);
            self.spacer(SPACE_AFTER_SKILL_GROUP);
        }
    }

    fn project(&mut self, project: &Project) {
        self.paragraph(
            with_suffix(&project.name, project.link.as_deref(), " (", ")"),
            Role::ExperienceTitle,
        );
        if let Some(start) = &project.start_date {
            let dates = match &project.end_date {
                Some(end) => format!("{start} - {end}"),
                None => start.clone(),
            };
            self.paragraph(dates, Role::ExperienceDetails);
        }
        if let Some(description) = &project.description {
            self.paragraph(description, Role::Body);
        }
        if let Some(tech) = project.technologies.as_ref().filter(|t| !t.is_empty()) {
            self.paragraph(format!("Technologies: {}", tech.join(", ")), Role::Body);
        }
        if let Some(achievements) = &project.achievements {
            self.bullets(achievements, Role::Body);
        }
    }

    fn certificate(&mut self, cert: &Certificate) {
        self.paragraph(
            format!("{} - {}", cert.name, cert.issuer),
            Role::ExperienceTitle,
        );
        if let Some(date) = &cert.date {
            self.paragraph(date, Role::ExperienceDetails);
        }
        if let Some(description) = &cert.description {
            self.paragraph(description, Role::Body);
        }
        if let Some(link) = &cert.link {
            self.paragraph(format!("Link: {link}"), Role::Body);
        }
    }

    fn languages(&mut self, languages: &[Language]) {
        self.heading("Languages");
        for lang in languages {
            self.paragraph(format!("{}: {}", lang.name, lang.proficiency), Role::Body);
        }
    }

    fn reference(&mut self, reference: &Reference) {
        self.paragraph(&reference.name, Role::ExperienceTitle);
        self.paragraph(
            format!("{}, {}", reference.position, reference.company),
            Role::ExperienceDetails,
        );
        if let Some(relation) = &reference.relation {
            self.paragraph(format!("Relation: {relation}"), Role::Body);
        }
        if let Some(contact) = &reference.contact {
            self.paragraph(format!("Contact: {contact}"), Role::Body);
        }
    }

    fn custom(&mut self, section: &CustomSection) {
        self.heading(&section.title);
        match &section.body {
            SectionBody::Text(text) => {
                for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
                    self.paragraph(line, Role::Body);
                }
            }
            SectionBody::Items(items) => self.bullets(items, Role::BulletItem),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn date_range(start: &str, end: Option<&str>) -> String {
    format!("{start} - {}", end.unwrap_or(PRESENT))
}

fn with_suffix(base: &str, extra: Option<&str>, open: &str, close: &str) -> String {
    match extra {
        Some(extra) => format!("{base}{open}{extra}{close}"),
        None => base.to_string(),
    }
}

/// Groups skills by category in first-seen order. Names keep their relative
/// order; blanks and repeats within a category are dropped.
pub fn group_skills(skills: &[Skill]) -> Vec<(&str, Vec<&str>)> {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for skill in skills {
        let idx = match groups.iter().position(|(c, _)| *c == skill.category) {
            Some(i) => i,
            None => {
                groups.push((skill.category.as_str(), Vec::new()));
                groups.len() - 1
            }
        };
        let names = &mut groups[idx].1;
        let name = skill.name.as_str();
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    groups
}
