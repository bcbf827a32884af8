pub mod cv;

pub use cv::{
    Certificate, CompanyExperience, Cv, CustomSection, Education, Language, PersonalInfo, Project,
    Reference, Role, SectionBody, Skill,
};
