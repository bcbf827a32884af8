//! Descriptor table for the CV entity model.
//!
//! Every entity the validator builds is described here once: field keys, the
//! kind of value each key accepts, whether it is required, and a human
//! description. The validator reads requiredness and value kinds from this
//! table and the exporter renders it as JSON Schema or Markdown, so the two
//! can never drift apart.

pub mod export;

// ────────────────────────────────────────────────────────────────────────────
// Descriptor types
// ────────────────────────────────────────────────────────────────────────────

/// The kind of value a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form display string.
    Text,
    /// String that must look like an email address.
    Email,
    /// String that must be an absolute http(s) URL.
    Url,
    /// Sequence of strings.
    TextList,
    /// Nested entity, by descriptor name.
    Entity(&'static str),
    /// Sequence of nested entities, by descriptor name.
    EntityList(&'static str),
    /// Mapping of section title to text or a list of strings.
    SectionMap,
}

impl FieldKind {
    /// Short human-readable type name used in docs and error context.
    pub fn display_name(&self) -> String {
        match self {
            FieldKind::Text => "string".to_string(),
            FieldKind::Email => "email".to_string(),
            FieldKind::Url => "url".to_string(),
            FieldKind::TextList => "Array of string".to_string(),
            FieldKind::Entity(name) => (*name).to_string(),
            FieldKind::EntityList(name) => format!("Array of {name}"),
            FieldKind::SectionMap => "object".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct EntityDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl EntityDescriptor {
    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn required_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.key)
    }
}

const fn required(key: &'static str, kind: FieldKind, description: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        key,
        kind,
        required: true,
        description,
    }
}

const fn optional(key: &'static str, kind: FieldKind, description: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        key,
        kind,
        required: false,
        description,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entity tables
// ────────────────────────────────────────────────────────────────────────────

pub static PERSONAL_INFO: EntityDescriptor = EntityDescriptor {
    name: "PersonalInfo",
    description: "Name, contact details and summary shown at the top of the CV.",
    fields: &[
        required("name", FieldKind::Text, "Full name"),
        required("email", FieldKind::Email, "Contact email address"),
        optional("phone", FieldKind::Text, "Phone number"),
        optional("location", FieldKind::Text, "City, country or other location"),
        optional("website", FieldKind::Url, "Personal website"),
        optional("linkedin", FieldKind::Url, "LinkedIn profile URL"),
        optional("github", FieldKind::Url, "GitHub profile URL"),
        optional("summary", FieldKind::Text, "Professional summary; one paragraph per line"),
        optional("title", FieldKind::Text, "Professional title shown under the name"),
    ],
};

pub static EDUCATION: EntityDescriptor = EntityDescriptor {
    name: "Education",
    description: "An education entry.",
    fields: &[
        required("institution", FieldKind::Text, "School or university"),
        required("degree", FieldKind::Text, "Degree or qualification"),
        required("start_date", FieldKind::Text, "Start date, as displayed"),
        optional("end_date", FieldKind::Text, "End date, as displayed; omitted means Present"),
        optional("location", FieldKind::Text, "Location of the institution"),
        optional("details", FieldKind::Text, "Additional details"),
        optional("gpa", FieldKind::Text, "Grade point average"),
    ],
};

pub static COMPANY_EXPERIENCE: EntityDescriptor = EntityDescriptor {
    name: "CompanyExperience",
    description: "An employer and the roles held there.",
    fields: &[
        required("company", FieldKind::Text, "Company name"),
        optional("location", FieldKind::Text, "Company location"),
        required("roles", FieldKind::EntityList("Role"), "Roles held, in display order"),
    ],
};

pub static ROLE: EntityDescriptor = EntityDescriptor {
    name: "Role",
    description: "A position held at a company.",
    fields: &[
        required("title", FieldKind::Text, "Job title"),
        required("start_date", FieldKind::Text, "Start date, as displayed"),
        optional("end_date", FieldKind::Text, "End date, as displayed; omitted means Present"),
        optional("location", FieldKind::Text, "Role location, if different from the company"),
        optional("description", FieldKind::Text, "Short description of the role"),
        optional("achievements", FieldKind::TextList, "Bullet-point achievements"),
    ],
};

pub static SKILL: EntityDescriptor = EntityDescriptor {
    name: "Skill",
    description: "A single skill; skills are grouped by category when rendered.",
    fields: &[
        required("category", FieldKind::Text, "Skill category"),
        required("name", FieldKind::Text, "Skill name"),
    ],
};

pub static PROJECT: EntityDescriptor = EntityDescriptor {
    name: "Project",
    description: "A personal or professional project.",
    fields: &[
        required("name", FieldKind::Text, "Project name"),
        optional("description", FieldKind::Text, "Project description"),
        optional("technologies", FieldKind::TextList, "Technologies used"),
        optional("link", FieldKind::Text, "Link to the project"),
        optional("start_date", FieldKind::Text, "Start date, as displayed"),
        optional("end_date", FieldKind::Text, "End date, as displayed"),
        optional("achievements", FieldKind::TextList, "Bullet-point achievements"),
    ],
};

pub static CERTIFICATE: EntityDescriptor = EntityDescriptor {
    name: "Certificate",
    description: "A certification.",
    fields: &[
        required("name", FieldKind::Text, "Certificate name"),
        required("issuer", FieldKind::Text, "Issuing organisation"),
        optional("date", FieldKind::Text, "Date obtained, as displayed"),
        optional("description", FieldKind::Text, "Description"),
        optional("link", FieldKind::Text, "Verification link"),
    ],
};

pub static LANGUAGE: EntityDescriptor = EntityDescriptor {
    name: "Language",
    description: "A spoken language and proficiency.",
    fields: &[
        required("name", FieldKind::Text, "Language"),
        required("proficiency", FieldKind::Text, "Proficiency level"),
    ],
};

pub static REFERENCE: EntityDescriptor = EntityDescriptor {
    name: "Reference",
    description: "A professional reference.",
    fields: &[
        required("name", FieldKind::Text, "Name of the reference"),
        required("position", FieldKind::Text, "Their position"),
        required("company", FieldKind::Text, "Their company"),
        optional("contact", FieldKind::Text, "Contact details"),
        optional("relation", FieldKind::Text, "Professional relation"),
    ],
};

pub static CV: EntityDescriptor = EntityDescriptor {
    name: "CV",
    description: "Main CV document containing all sections.",
    fields: &[
        required("personal_info", FieldKind::Entity("PersonalInfo"), "Personal information"),
        required("education", FieldKind::EntityList("Education"), "Education history"),
        required("experience", FieldKind::EntityList("CompanyExperience"), "Work experience grouped by company"),
        optional("skills", FieldKind::EntityList("Skill"), "Skills"),
        optional("projects", FieldKind::EntityList("Project"), "Projects"),
        optional("certifications", FieldKind::EntityList("Certificate"), "Certifications"),
        optional("languages", FieldKind::EntityList("Language"), "Languages"),
        optional("references", FieldKind::EntityList("Reference"), "References"),
        optional("publications", FieldKind::TextList, "Publications"),
        optional("awards", FieldKind::TextList, "Awards"),
        optional("interests", FieldKind::TextList, "Interests"),
        optional("custom_sections", FieldKind::SectionMap, "Additional titled sections"),
    ],
};

/// Nested entity descriptors, in documentation order.
pub static DEFINITIONS: &[&EntityDescriptor] = &[
    &PERSONAL_INFO,
    &EDUCATION,
    &COMPANY_EXPERIENCE,
    &ROLE,
    &SKILL,
    &PROJECT,
    &CERTIFICATE,
    &LANGUAGE,
    &REFERENCE,
];

/// Looks up a nested entity descriptor by name.
#[cfg(test)]
fn definition(name: &str) -> Option<&'static EntityDescriptor> {
    DEFINITIONS.iter().copied().find(|d| d.name == name)
}
