//! Short course descriptions shown in report tables

/// Description used for courses missing from [`COURSE_DETAILS`]
pub const FALLBACK_DETAIL: &str =
    "Undergraduate program offering strong career opportunities in this field.";

/// Built-in one-line descriptions keyed by course name
const COURSE_DETAILS: &[(&str, &str)] = &[
    ("MBBS", "Professional medical degree to become a licensed doctor."),
    ("BDS", "Dental science program focused on oral health and dentistry."),
    ("BAMS", "Medical degree based on Ayurvedic treatment and traditional medicine."),
    ("BHMS", "Medical program focused on homeopathic systems of treatment."),
    ("B.Sc Nursing", "Healthcare program focused on patient care and clinical practice."),
    ("B.Pharm", "Pharmacy degree dealing with medicines and drug development."),
    (
        "B.Sc Biotechnology",
        "Study of biological processes used in healthcare, agriculture, and research.",
    ),
    (
        "B.Sc Microbiology",
        "Focuses on microorganisms and their role in health, environment, and industry.",
    ),
    (
        "B.Sc Research",
        "Research-oriented science program preparing for higher studies and innovation.",
    ),
    ("B.Tech", "Engineering degree covering applied technology and problem-solving skills."),
    ("BE", "Engineering program focused on core technical and practical skills."),
    ("BCA", "Computer applications program focused on software development and IT systems."),
    (
        "B.Sc Computer Science",
        "Core computer science degree covering programming and system design.",
    ),
    ("Data Science", "Focuses on data analysis, statistics, and machine learning."),
    ("AI & ML", "Specialization in artificial intelligence and machine learning technologies."),
    ("Cyber Security", "Focuses on protecting systems, networks, and digital information."),
    ("B.Com", "Commerce degree covering accounting, finance, and business fundamentals."),
    ("CA", "Professional course in accounting, taxation, and auditing."),
    ("CMA", "Cost and management accounting program for financial decision-making."),
    ("BBA", "Business administration program focusing on management and leadership skills."),
    ("BBM", "Business management degree with practical business exposure."),
    ("BMS", "Management program focused on organizational and business operations."),
    ("BA Economics", "Study of economic systems, markets, and financial policies."),
    (
        "B.Sc Statistics",
        "Program focused on data analysis, probability, and statistical methods.",
    ),
    ("Fashion Design", "Creative program focused on clothing, textiles, and fashion industry."),
    ("Graphic Design", "Design program focusing on visual communication and digital creativity."),
    ("Journalism", "Program focused on media, reporting, and communication skills."),
    ("Mass Communication", "Study of media platforms, advertising, and public communication."),
    ("BFA", "Fine arts program focusing on creative and visual art forms."),
];

/// Description of a course, or [`FALLBACK_DETAIL`]
#[must_use]
pub fn course_detail(course: &str) -> &'static str {
    COURSE_DETAILS
        .iter()
        .find(|(name, _)| *name == course)
        .map_or(FALLBACK_DETAIL, |(_, detail)| detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_course() {
        assert_eq!(
            course_detail("MBBS"),
            "Professional medical degree to become a licensed doctor."
        );
    }

    #[test]
    fn test_unknown_course_falls_back() {
        assert_eq!(course_detail("Underwater Welding"), FALLBACK_DETAIL);
        assert_eq!(course_detail("bca"), FALLBACK_DETAIL);
    }
}
