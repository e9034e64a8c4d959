//! Interactive chat REPL.
//!
//! Drives the conversation session engine, the mode controller, and the
//! identity gate from a rustyline loop. The engine owns all conversation
//! state; this module only renders it.

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use stallion_core::identity::IdentityGate;
use stallion_core::profile::ProfileRepository;
use stallion_core::quick_action::actions_for_mode;
use stallion_core::session::{
    ChatMessage, ChatMode, ChatSession, ModeController, ModeTransition, PromptContext, TurnOutcome,
};
use stallion_infrastructure::TomlProfileRepository;
use stallion_interaction::GeminiBackend;

pub async fn run() -> Result<()> {
    let repo = TomlProfileRepository::new()?;
    let profile = repo.load().await?;
    let college = profile.college.to_string();

    let backend = Arc::new(GeminiBackend::try_from_env().await?);
    let session = ChatSession::new(backend, &college);
    let mut controller = ModeController::new();
    let mut gate = IdentityGate::new();

    // A previously stored student number re-unlocks Tutoring, but only if
    // it still passes the format gate.
    if let Some(stored) = profile.student_id.as_deref() {
        let _ = gate.verify(stored);
    }

    let mut rl = DefaultEditor::new()?;

    println!("{}", "=== MMSU Stallion AI Companion ===".bright_magenta().bold());
    println!("{}", format!("College: {college}").bright_black());
    println!("{}", "Type '/help' for commands, 'quit' to exit.".bright_black());
    println!();
    if let Some(welcome) = session.log().await.last() {
        print_reply(welcome);
    }

    loop {
        let prompt_label = match controller.mode() {
            ChatMode::General => ">> ",
            ChatMode::Tutoring => "tutor>> ",
        };

        match rl.readline(prompt_label) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye, Stallion!".bright_green());
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Some(command) = trimmed.strip_prefix('/') {
                    handle_command(command, &session, &mut controller, &mut gate, &college).await;
                } else {
                    submit_turn(&session, &controller, &gate, &college, trimmed).await;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

async fn handle_command(
    command: &str,
    session: &ChatSession,
    controller: &mut ModeController,
    gate: &mut IdentityGate,
    college: &str,
) {
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let argument = parts.next();

    match name {
        "help" => print_help(),
        "general" => match controller.request(ChatMode::General, gate) {
            ModeTransition::Switched => {
                println!("{}", "General assistance mode active.".green());
            }
            _ => println!("{}", "Already in General mode.".bright_black()),
        },
        "tutor" => match controller.request(ChatMode::Tutoring, gate) {
            ModeTransition::Switched => {
                println!("{}", "Academic tutoring mode active.".green());
            }
            ModeTransition::VerificationRequired => {
                println!(
                    "{}",
                    "Tutoring access requires your student number. \
Use '/verify YY-XXXXXX' to unlock it."
                        .yellow()
                );
            }
            ModeTransition::Unchanged => {
                println!("{}", "Already in Tutoring mode.".bright_black());
            }
        },
        "verify" => match argument {
            Some(candidate) => match gate.verify(candidate) {
                Ok(()) => {
                    println!("{}", format!("Student {candidate} verified.").green());
                    // Complete the suspended transition into Tutoring.
                    if controller.request(ChatMode::Tutoring, gate) == ModeTransition::Switched {
                        println!("{}", "Academic tutoring mode active.".green());
                    }
                }
                Err(err) => println!("{}", err.to_string().red()),
            },
            None => println!("{}", "Usage: /verify YY-XXXXXX".bright_black()),
        },
        "actions" => {
            for (index, action) in actions_for_mode(controller.mode()).iter().enumerate() {
                println!(
                    "{} {} {}",
                    format!("[{}]", index + 1).bold(),
                    action.icon,
                    action.label
                );
                println!("    {}", action.prompt.bright_black());
            }
            println!("{}", "Run one with '/action <number>'.".bright_black());
        }
        "action" => {
            let actions = actions_for_mode(controller.mode());
            let selected = argument
                .and_then(|raw| raw.parse::<usize>().ok())
                .and_then(|index| index.checked_sub(1))
                .and_then(|index| actions.get(index));
            match selected {
                Some(action) => submit_turn(session, controller, gate, college, action.prompt).await,
                None => println!(
                    "{}",
                    format!("Usage: /action <1-{}>", actions.len()).bright_black()
                ),
            }
        }
        "reset" => {
            session.reset(college).await;
            println!("{}", "Conversation restarted.".bright_black());
            if let Some(welcome) = session.log().await.last() {
                print_reply(welcome);
            }
        }
        _ => println!("{}", "Unknown command".bright_black()),
    }
}

async fn submit_turn(
    session: &ChatSession,
    controller: &ModeController,
    gate: &IdentityGate,
    college: &str,
    text: &str,
) {
    let ctx = PromptContext {
        college: college.to_string(),
        mode: controller.mode(),
        student_id: gate.student_id().map(str::to_string),
    };

    println!("{}", format!("> {text}").green());

    match session.submit(text, &ctx).await {
        TurnOutcome::Completed => {
            let log = session.log().await;
            if let Some(reply) = log.last() {
                print_reply(reply);
            }
        }
        TurnOutcome::Busy => {
            println!("{}", "A reply is still on the way. Please wait.".yellow());
        }
        TurnOutcome::Ignored => {}
    }
}

fn print_reply(message: &ChatMessage) {
    for line in message.content.lines() {
        println!("{}", line.bright_blue());
    }
    if !message.citations.is_empty() {
        println!("{}", "Verified Sources:".bright_black());
        for citation in &message.citations {
            println!(
                "  {} {}",
                citation.title.bright_cyan(),
                citation.uri.bright_black()
            );
        }
    }
    println!();
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  /general          switch to open assistance");
    println!("  /tutor            switch to academic tutoring (verified students)");
    println!("  /verify <id>      verify your student number (YY-XXXXXX)");
    println!("  /actions          list quick actions for the current mode");
    println!("  /action <number>  submit a quick action prompt");
    println!("  /reset            restart the conversation");
    println!("  quit              exit the chat");
}
