//! Minimal theme: small Helvetica, uppercase section headings.

use super::{FontFamily, FormatSpec, Role, TextTransform};

pub fn format_for(role: Role) -> FormatSpec {
    use FontFamily::Helvetica;

    match role {
        Role::Name => FormatSpec {
            space_after: 4.0,
            ..FormatSpec::text(Helvetica, 16.0).bold()
        },
        Role::SectionHeading => FormatSpec {
            text_transform: TextTransform::Uppercase,
            space_before: 10.0,
            space_after: 4.0,
            ..FormatSpec::text(Helvetica, 11.0).bold()
        },
        Role::ContactInfo => FormatSpec {
            space_after: 12.0,
            ..FormatSpec::text(Helvetica, 9.0)
        },
        Role::ExperienceTitle => FormatSpec::text(Helvetica, 10.0).bold(),
        Role::RoleTitle => FormatSpec {
            space_before: 2.0,
            left_indent: 10.0,
            ..FormatSpec::text(Helvetica, 9.0).bold()
        },
        Role::ExperienceDetails => FormatSpec::text(Helvetica, 9.0).italic(),
        Role::Body => FormatSpec {
            space_after: 6.0,
            ..FormatSpec::text(Helvetica, 9.0)
        },
        Role::BulletItem => FormatSpec {
            left_indent: 14.0,
            space_after: 1.0,
            ..FormatSpec::text(Helvetica, 9.0)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_uppercases_headings_only() {
        assert_eq!(
            format_for(Role::SectionHeading).text_transform,
            TextTransform::Uppercase
        );
        assert_eq!(format_for(Role::Body).text_transform, TextTransform::None);
    }
}
