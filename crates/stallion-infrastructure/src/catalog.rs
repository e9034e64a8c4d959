//! Bundled catalog data source.
//!
//! Serves the course offerings and announcements that ship with the
//! application. The data mirrors the official catalog snapshot for the
//! 2025-2026 academic year; a future revision may load it from the
//! registrar's API instead.

use async_trait::async_trait;

use stallion_core::catalog::{
    Announcement, AnnouncementCategory, CatalogSource, College, Course,
};
use stallion_core::error::Result;

/// Catalog source backed by data compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl BundledCatalog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogSource for BundledCatalog {
    async fn courses(&self) -> Result<Vec<Course>> {
        Ok(bundled_courses())
    }

    async fn announcements(&self) -> Result<Vec<Announcement>> {
        Ok(bundled_announcements())
    }
}

fn course(
    id: &str,
    code: &str,
    title: &str,
    college: College,
    description: &str,
    credits: u8,
) -> Course {
    Course {
        id: id.to_string(),
        code: code.to_string(),
        title: title.to_string(),
        college,
        description: description.to_string(),
        credits,
    }
}

fn bundled_courses() -> Vec<Course> {
    vec![
        course(
            "c1",
            "AGRI 101",
            "Fundamentals of Crop Science",
            College::Agriculture,
            "Basic principles of plant growth and management.",
            3,
        ),
        course(
            "c2",
            "FOODSCI 201",
            "Food Chemistry",
            College::Agriculture,
            "Chemical processes and interactions of all biological and non-biological components of foods.",
            3,
        ),
        course(
            "c3",
            "AQUACUL 101",
            "Introduction to Aquaculture",
            College::AquaticScience,
            "Principles and practices of farming aquatic organisms.",
            3,
        ),
        course(
            "c4",
            "MARBIO 202",
            "Marine Ecology",
            College::AquaticScience,
            "Study of the interactions among marine organisms and their environment.",
            4,
        ),
        course(
            "c5",
            "BIO 101",
            "General Biology",
            College::ArtsAndSciences,
            "Study of life and living organisms.",
            4,
        ),
        course(
            "c6",
            "MATH 101",
            "College Algebra",
            College::ArtsAndSciences,
            "Functions and graphs, systems of equations.",
            3,
        ),
        course(
            "c7",
            "ACCTG 101",
            "Financial Accounting 1",
            College::Business,
            "Principles and procedures of the accounting cycle.",
            3,
        ),
        course(
            "c8",
            "ECON 201",
            "Microeconomics",
            College::Business,
            "Individual consumer and producer behavior.",
            3,
        ),
        course(
            "c9",
            "IT 101",
            "Introduction to Computing",
            College::Computing,
            "Fundamental concepts of computer hardware and software.",
            3,
        ),
        course(
            "c10",
            "CMPSC 146",
            "Software Engineering",
            College::Computing,
            "Systematic approach to software development.",
            3,
        ),
        course(
            "c11",
            "ENGG 101",
            "Engineering Graphics",
            College::Engineering,
            "Principles of drafting and visualization.",
            2,
        ),
        course(
            "c12",
            "CE 201",
            "Statics of Rigid Bodies",
            College::Engineering,
            "Analysis of force systems in equilibrium.",
            3,
        ),
        course(
            "c13",
            "NURS 101",
            "Fundamentals of Nursing",
            College::HealthSciences,
            "Basic nursing concepts and skills.",
            5,
        ),
        course(
            "c14",
            "PHARM 201",
            "Pharmacology 1",
            College::HealthSciences,
            "Study of drug action and usage.",
            3,
        ),
        course(
            "c15",
            "AUTO 101",
            "Automotive Technology",
            College::IndustrialTechnology,
            "Principles of automotive maintenance and repair.",
            3,
        ),
        course(
            "c16",
            "EDUC 101",
            "Child and Adolescent Development",
            College::TeacherEducation,
            "Phases of growth and development of students.",
            3,
        ),
        course(
            "c17",
            "MED 101",
            "Gross Anatomy",
            College::Medicine,
            "Detailed study of human structures.",
            8,
        ),
        course(
            "c18",
            "LAW 101",
            "Constitutional Law 1",
            College::Law,
            "Study of the Philippine Constitution.",
            4,
        ),
        course(
            "c19",
            "DENT 101",
            "Oral Anatomy",
            College::Dentistry,
            "Anatomy and morphology of human teeth.",
            4,
        ),
        course(
            "c20",
            "VETMED 101",
            "Veterinary Anatomy 1",
            College::VeterinaryMedicine,
            "Systemic anatomy of domestic animals.",
            5,
        ),
        course(
            "c21",
            "GRAD 501",
            "Research Methodology",
            College::GraduateSchool,
            "Advanced research techniques and ethics.",
            3,
        ),
    ]
}

fn announcement(
    id: &str,
    title: &str,
    date: &str,
    content: &str,
    category: AnnouncementCategory,
) -> Announcement {
    Announcement {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        content: content.to_string(),
        category,
    }
}

fn bundled_announcements() -> Vec<Announcement> {
    vec![
        announcement(
            "a1",
            "Second Semester Enrollment AY 2025-2026",
            "January 12, 2026",
            "Final week for adding/dropping subjects. Please visit your college registrar.",
            AnnouncementCategory::Enrollment,
        ),
        announcement(
            "a2",
            "2026 Scholarship Renewal",
            "January 18, 2026",
            "Submit your 1st Semester grades to the Office of Student Affairs for renewal.",
            AnnouncementCategory::Scholarship,
        ),
        announcement(
            "a3",
            "MMSU 48th Foundation Anniversary",
            "January 20, 2026",
            "Happy Foundation Day, Stallions! Join us for the grand celebration at the Sunken Garden.",
            AnnouncementCategory::Event,
        ),
        announcement(
            "a4",
            "Luzon-wide Student Summit 2026",
            "January 05, 2026",
            "MMSU delegates requested to attend the orientation at the CIT Amphitheater.",
            AnnouncementCategory::Event,
        ),
        announcement(
            "a5",
            "Final Grade Encoding 1st Sem",
            "December 20, 2025",
            "All faculty must complete grade encoding by 11:59 PM tonight.",
            AnnouncementCategory::Academic,
        ),
        announcement(
            "a6",
            "Christmas Break Schedule",
            "December 15, 2025",
            "Offices will be closed from Dec 22 until Jan 03 for the holiday season.",
            AnnouncementCategory::Event,
        ),
        announcement(
            "a7",
            "Inter-College Sports Fest Results",
            "November 30, 2025",
            "CCIS reigns supreme in E-Sports; CBEA takes the overall championship.",
            AnnouncementCategory::Event,
        ),
        announcement(
            "a8",
            "Midterm Assessment Period",
            "October 15, 2025",
            "Prepare for midterm examinations. Good luck, Stallions!",
            AnnouncementCategory::Academic,
        ),
        announcement(
            "a9",
            "CHED Merit Scholarship Application",
            "September 10, 2025",
            "Accepting applications for the new batch of scholars for the next semester.",
            AnnouncementCategory::Scholarship,
        ),
    ]
}
