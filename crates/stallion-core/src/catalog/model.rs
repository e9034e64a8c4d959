//! Catalog domain models: colleges, campuses, courses, announcements.

use serde::{Deserialize, Serialize};

/// An MMSU academic unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum College {
    #[serde(rename = "College of Agriculture, Food and Sustainable Development")]
    Agriculture,
    #[serde(rename = "College of Aquatic Science and Applied Technology")]
    AquaticScience,
    #[serde(rename = "College of Arts and Sciences")]
    ArtsAndSciences,
    #[serde(rename = "College of Business, Economics and Accountancy")]
    Business,
    #[serde(rename = "College of Computing and Information Sciences")]
    Computing,
    #[serde(rename = "College of Engineering")]
    Engineering,
    #[serde(rename = "College of Health Sciences")]
    HealthSciences,
    #[serde(rename = "College of Industrial Technology")]
    IndustrialTechnology,
    #[serde(rename = "College of Teacher Education")]
    TeacherEducation,
    #[serde(rename = "College of Medicine")]
    Medicine,
    #[serde(rename = "College of Law")]
    Law,
    #[serde(rename = "College of Dentistry")]
    Dentistry,
    #[serde(rename = "College of Veterinary Medicine")]
    VeterinaryMedicine,
    #[serde(rename = "Graduate School")]
    GraduateSchool,
}

impl College {
    /// Every college, in catalog display order.
    pub const ALL: [College; 14] = [
        College::Agriculture,
        College::AquaticScience,
        College::ArtsAndSciences,
        College::Business,
        College::Computing,
        College::Engineering,
        College::HealthSciences,
        College::IndustrialTechnology,
        College::TeacherEducation,
        College::Medicine,
        College::Law,
        College::Dentistry,
        College::VeterinaryMedicine,
        College::GraduateSchool,
    ];

    /// Full display title of the college.
    pub fn title(&self) -> &'static str {
        match self {
            College::Agriculture => "College of Agriculture, Food and Sustainable Development",
            College::AquaticScience => "College of Aquatic Science and Applied Technology",
            College::ArtsAndSciences => "College of Arts and Sciences",
            College::Business => "College of Business, Economics and Accountancy",
            College::Computing => "College of Computing and Information Sciences",
            College::Engineering => "College of Engineering",
            College::HealthSciences => "College of Health Sciences",
            College::IndustrialTechnology => "College of Industrial Technology",
            College::TeacherEducation => "College of Teacher Education",
            College::Medicine => "College of Medicine",
            College::Law => "College of Law",
            College::Dentistry => "College of Dentistry",
            College::VeterinaryMedicine => "College of Veterinary Medicine",
            College::GraduateSchool => "Graduate School",
        }
    }
}

impl std::fmt::Display for College {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for College {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        College::ALL
            .iter()
            .copied()
            .find(|college| college.title().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown college: '{s}'"))
    }
}

/// An MMSU campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Campus {
    Batac,
    Laoag,
    Currimao,
    Dingras,
}

impl Campus {
    pub const ALL: [Campus; 4] = [Campus::Batac, Campus::Laoag, Campus::Currimao, Campus::Dingras];
}

impl std::fmt::Display for Campus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Campus::Batac => "Batac",
            Campus::Laoag => "Laoag",
            Campus::Currimao => "Currimao",
            Campus::Dingras => "Dingras",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Campus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Campus::ALL
            .iter()
            .copied()
            .find(|campus| campus.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown campus: '{s}'"))
    }
}

/// A catalog course offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub code: String,
    pub title: String,
    pub college: College,
    pub description: String,
    pub credits: u8,
}

/// Category of a university announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnouncementCategory {
    Academic,
    Event,
    Scholarship,
    Enrollment,
}

impl std::fmt::Display for AnnouncementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AnnouncementCategory::Academic => "Academic",
            AnnouncementCategory::Event => "Event",
            AnnouncementCategory::Scholarship => "Scholarship",
            AnnouncementCategory::Enrollment => "Enrollment",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for AnnouncementCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            AnnouncementCategory::Academic,
            AnnouncementCategory::Event,
            AnnouncementCategory::Scholarship,
            AnnouncementCategory::Enrollment,
        ]
        .iter()
        .copied()
        .find(|category| category.to_string().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| format!("unknown announcement category: '{s}'"))
    }
}

/// A university announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub date: String,
    pub content: String,
    pub category: AnnouncementCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_college_titles_round_trip_through_from_str() {
        for college in College::ALL {
            let parsed: College = college.title().parse().unwrap();
            assert_eq!(parsed, college);
        }
    }

    #[test]
    fn test_college_serde_uses_full_title() {
        let json = serde_json::to_string(&College::Computing).unwrap();
        assert_eq!(json, "\"College of Computing and Information Sciences\"");
        let back: College = serde_json::from_str(&json).unwrap();
        assert_eq!(back, College::Computing);
    }

    #[test]
    fn test_unknown_college_is_rejected() {
        assert!("College of Wizardry".parse::<College>().is_err());
    }

    #[test]
    fn test_campus_parse_is_case_insensitive() {
        assert_eq!("batac".parse::<Campus>().unwrap(), Campus::Batac);
        assert!("Vigan".parse::<Campus>().is_err());
    }
}
