//! Modern theme: Helvetica, dark blue accents, headings on a filled band.

use super::{FontFamily, FormatSpec, Rgb, Role};

pub fn format_for(role: Role) -> FormatSpec {
    use FontFamily::Helvetica;

    match role {
        Role::Name => FormatSpec {
            color: Rgb::DARK_BLUE,
            space_after: 4.0,
            ..FormatSpec::text(Helvetica, 18.0).bold()
        },
        Role::SectionHeading => FormatSpec {
            color: Rgb::WHITE,
            background: Some(Rgb::DARK_BLUE),
            padding: 3.0,
            space_before: 12.0,
            space_after: 6.0,
            ..FormatSpec::text(Helvetica, 14.0).bold()
        },
        Role::ContactInfo => FormatSpec {
            color: Rgb::DARK_GREY,
            space_after: 12.0,
            ..FormatSpec::text(Helvetica, 10.0)
        },
        Role::ExperienceTitle => FormatSpec {
            color: Rgb::DARK_BLUE,
            space_after: 1.0,
            ..FormatSpec::text(Helvetica, 12.0).bold()
        },
        Role::RoleTitle => FormatSpec {
            color: Rgb::DARK_BLUE,
            space_before: 2.0,
            left_indent: 10.0,
            ..FormatSpec::text(Helvetica, 11.0).bold()
        },
        Role::ExperienceDetails => FormatSpec {
            color: Rgb::DARK_GREY,
            ..FormatSpec::text(Helvetica, 10.0).italic()
        },
        Role::Body => FormatSpec {
            space_after: 6.0,
            ..FormatSpec::text(Helvetica, 10.0)
        },
        Role::BulletItem => FormatSpec {
            left_indent: 14.0,
            space_after: 2.0,
            ..FormatSpec::text(Helvetica, 10.0)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modern_heading_band() {
        let heading = format_for(Role::SectionHeading);
        assert_eq!(heading.background, Some(Rgb::DARK_BLUE));
        assert_eq!(heading.color, Rgb::WHITE);
        assert!(heading.padding > 0.0);
    }
}
