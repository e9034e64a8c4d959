//! Catalog listing commands.

use anyhow::{Result, anyhow, bail};
use colored::Colorize;

use stallion_core::catalog::{
    AnnouncementCategory, CatalogSource, College, announcements_in_category, courses_for_college,
};
use stallion_infrastructure::BundledCatalog;

/// Resolves a college from a full title or a unique partial match.
pub(crate) fn resolve_college(query: &str) -> Result<College> {
    if let Ok(college) = query.parse::<College>() {
        return Ok(college);
    }

    let needle = query.trim().to_lowercase();
    let matches: Vec<College> = College::ALL
        .iter()
        .copied()
        .filter(|college| college.title().to_lowercase().contains(&needle))
        .collect();

    match matches.as_slice() {
        [college] => Ok(*college),
        [] => bail!("no college matches '{query}'"),
        many => {
            let titles: Vec<&str> = many.iter().map(|college| college.title()).collect();
            bail!("'{query}' is ambiguous: {}", titles.join("; "))
        }
    }
}

pub async fn courses(college: Option<&str>) -> Result<()> {
    let source = BundledCatalog::new();
    let mut courses = source.courses().await?;

    if let Some(query) = college {
        let college = resolve_college(query)?;
        courses = courses_for_college(&courses, college);
        println!("{}", college.title().bold());
        println!();
    }

    for course in &courses {
        println!(
            "{}  {} ({} units)",
            course.code.bold(),
            course.title,
            course.credits
        );
        if college.is_none() {
            println!("    {}", course.college.title().bright_black());
        }
        println!("    {}", course.description.bright_black());
    }

    Ok(())
}

pub async fn announcements(category: Option<&str>) -> Result<()> {
    let source = BundledCatalog::new();
    let mut announcements = source.announcements().await?;

    if let Some(query) = category {
        let category: AnnouncementCategory = query.parse().map_err(|e: String| anyhow!(e))?;
        announcements = announcements_in_category(&announcements, category);
    }

    for announcement in &announcements {
        println!(
            "{}  {}  {}",
            announcement.date.bright_black(),
            format!("[{}]", announcement.category).yellow(),
            announcement.title.bold()
        );
        println!("    {}", announcement.content);
    }

    Ok(())
}
