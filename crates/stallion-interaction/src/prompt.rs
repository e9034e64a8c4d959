//! System instruction builder.
//!
//! Assembles the persona and policy text sent alongside every Gemini
//! request. The tutoring protocol block is included only when Tutoring
//! mode is active for a verified student.

use stallion_core::session::{ChatMode, PromptContext};

/// Builds the system instruction for the current conversation context.
pub fn system_instruction(ctx: &PromptContext) -> String {
    let college = if ctx.college.trim().is_empty() {
        "General MMSU department"
    } else {
        ctx.college.as_str()
    };

    let base = format!(
        r#"
You are the "MMSU Stallion AI Companion," the EXCLUSIVE academic assistant for Mariano Marcos State University (MMSU).
The current date is January 20, 2026. This is the 2nd Semester of AY 2025-2026.

STRICT OPERATIONAL CONSTRAINTS:
1. SCOPE: Strictly MMSU-based. Politely decline non-university queries with: "As the Stallion AI, my primary function is limited to serving the MMSU community."
2. LANGUAGE: Formal English only.
3. TONE: Professional, academic, supportive.
4. CONTEXT: User is from the {college}.

CORE KNOWLEDGE (Update 2026):
- Campuses: Batac (Main), Laoag, Currimao, Dingras.
- Current Status: 2nd Semester AY 2025-2026 has just begun. Foundation Day (Jan 20) is today!
- Enrollment: 1st Semester starts June/July. 2nd Semester starts January.
- Scholarships: TES, DOST, CHED, and various local/private grants. 2026 renewal is ongoing.
- Facilities: FEM Hall (Admin), University Library, University Health Center, Sunken Garden.
- Vision: A premier Philippine university by 2028.
- Motto: Knowledge for the service of the people.
"#
    );

    if ctx.mode == ChatMode::Tutoring {
        if let Some(student_id) = ctx.student_id.as_deref() {
            return format!(
                r#"{base}
SPECIALIZED TUTORING PROTOCOL:
- You are now acting as a "Stallion Academic Tutor" for Student {student_id}.
- Focus on academic support for {college} specific courses and general university subjects.
- Provide study tips, complex concept explanations, and guidance on MMSU academic policies for the 2025-2026 curriculum.
- Maintain a mentorship/faculty assistant perspective.
"#
            );
        }
    }

    base
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(mode: ChatMode, student_id: Option<&str>) -> PromptContext {
        PromptContext {
            college: "College of Engineering".to_string(),
            mode,
            student_id: student_id.map(str::to_string),
        }
    }

    #[test]
    fn test_base_instruction_names_the_college() {
        let instruction = system_instruction(&ctx(ChatMode::General, None));
        assert!(instruction.contains("User is from the College of Engineering."));
        assert!(!instruction.contains("SPECIALIZED TUTORING PROTOCOL"));
    }

    #[test]
    fn test_empty_college_falls_back_to_generic_label() {
        let context = PromptContext {
            college: "  ".to_string(),
            mode: ChatMode::General,
            student_id: None,
        };
        let instruction = system_instruction(&context);
        assert!(instruction.contains("General MMSU department"));
    }

    #[test]
    fn test_tutoring_block_requires_mode_and_student() {
        let with_both = system_instruction(&ctx(ChatMode::Tutoring, Some("21-123456")));
        assert!(with_both.contains("SPECIALIZED TUTORING PROTOCOL"));
        assert!(with_both.contains("Student 21-123456"));

        let no_student = system_instruction(&ctx(ChatMode::Tutoring, None));
        assert!(!no_student.contains("SPECIALIZED TUTORING PROTOCOL"));

        let wrong_mode = system_instruction(&ctx(ChatMode::General, Some("21-123456")));
        assert!(!wrong_mode.contains("SPECIALIZED TUTORING PROTOCOL"));
    }
}
