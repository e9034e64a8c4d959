//! Profile subcommands.

use anyhow::{Result, anyhow};
use clap::Subcommand;
use colored::Colorize;

use stallion_core::catalog::Campus;
use stallion_core::identity::IdentityGate;
use stallion_core::profile::{ProfileRepository, Theme};
use stallion_infrastructure::TomlProfileRepository;

use super::catalog::resolve_college;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the stored profile
    Show,
    /// Update profile fields
    Set {
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Contact address
        #[arg(long)]
        email: Option<String>,
        /// College (full or partial name)
        #[arg(long)]
        college: Option<String>,
        /// Home campus (Batac, Laoag, Currimao, Dingras)
        #[arg(long)]
        campus: Option<String>,
        /// Display theme (light, dark)
        #[arg(long)]
        theme: Option<String>,
        /// Student number (YY-XXXXXX)
        #[arg(long)]
        student_id: Option<String>,
    },
}

pub async fn run(action: ProfileAction) -> Result<()> {
    let repo = TomlProfileRepository::new()?;

    match action {
        ProfileAction::Show => {
            let profile = repo.load().await?;
            println!("{}  {}", "Name:".bold(), profile.name);
            if !profile.email.is_empty() {
                println!("{}  {}", "Email:".bold(), profile.email);
            }
            println!("{}  {}", "College:".bold(), profile.college);
            println!("{}  {}", "Campus:".bold(), profile.campus);
            println!("{}  {}", "Theme:".bold(), profile.theme);
            match &profile.student_id {
                Some(student_id) => println!("{}  {}", "Student ID:".bold(), student_id),
                None => println!("{}  {}", "Student ID:".bold(), "not set".bright_black()),
            }
        }
        ProfileAction::Set {
            name,
            email,
            college,
            campus,
            theme,
            student_id,
        } => {
            let mut profile = repo.load().await?;

            if let Some(name) = name {
                profile.name = name;
            }
            if let Some(email) = email {
                profile.email = email;
            }
            if let Some(query) = college {
                profile.college = resolve_college(&query)?;
            }
            if let Some(campus) = campus {
                profile.campus = campus.parse::<Campus>().map_err(|e| anyhow!(e))?;
            }
            if let Some(theme) = theme {
                profile.theme = theme.parse::<Theme>().map_err(|e| anyhow!(e))?;
            }
            if let Some(student_id) = student_id {
                // Same format gate as the chat's tutoring unlock.
                let mut gate = IdentityGate::new();
                gate.verify(&student_id)?;
                profile.student_id = Some(student_id);
                profile.is_logged_in = true;
            }

            repo.save(&profile).await?;
            println!("{}", "Profile updated.".green());
        }
    }

    Ok(())
}
