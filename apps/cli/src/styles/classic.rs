//! Classic theme: Times body text, Helvetica name line.

use super::{FontFamily, FormatSpec, Role};

pub fn format_for(role: Role) -> FormatSpec {
    use FontFamily::{Helvetica, Times};

    match role {
        Role::Name => FormatSpec {
            space_after: 4.0,
            ..FormatSpec::text(Helvetica, 16.0).bold()
        },
        Role::SectionHeading => FormatSpec {
            space_before: 12.0,
            space_after: 6.0,
            ..FormatSpec::text(Times, 12.0).bold()
        },
        Role::ContactInfo => FormatSpec {
            space_after: 12.0,
            ..FormatSpec::text(Helvetica, 10.0)
        },
        Role::ExperienceTitle => FormatSpec {
            space_after: 1.0,
            ..FormatSpec::text(Times, 11.0).bold()
        },
        Role::RoleTitle => FormatSpec {
            space_before: 2.0,
            left_indent: 10.0,
            ..FormatSpec::text(Times, 10.0).bold()
        },
        Role::ExperienceDetails => FormatSpec::text(Times, 10.0).italic(),
        Role::Body => FormatSpec {
            space_after: 6.0,
            ..FormatSpec::text(Times, 10.0)
        },
        Role::BulletItem => FormatSpec {
            left_indent: 14.0,
            space_after: 2.0,
            ..FormatSpec::text(Times, 10.0)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_uses_serif_body() {
        assert_eq!(format_for(Role::Body).font, FontFamily::Times);
        assert_eq!(format_for(Role::Name).font, FontFamily::Helvetica);
        assert!(format_for(Role::ExperienceDetails).italic);
    }
}
