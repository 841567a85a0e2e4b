//! The `quizdeck take` command.
//!
//! Two modes: scripted (`--answers 1,0,2` fills the answer map and
//! submits immediately) and interactive, where a 1-second interval drives
//! the session countdown while stdin lines are read concurrently. Quitting
//! the interactive session before submitting discards it — no partial
//! result is ever saved.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use quizdeck_core::engine::{QuizEngine, SaveStatus, Submission};
use quizdeck_core::model::User;
use quizdeck_core::session::{QuizSession, Tick};

use super::build_engine;

pub async fn execute(
    catalog_path: PathBuf,
    quiz_id: u32,
    answers: Option<String>,
    user_id: Option<String>,
    user_name: Option<String>,
    store_path: PathBuf,
) -> Result<()> {
    let engine = build_engine(&catalog_path, store_path)?;

    let user = user_id.map(|id| User {
        display_name: user_name.unwrap_or_else(|| id.clone()),
        id,
    });
    if user.is_none() {
        println!("Taking anonymously: the result will be scored but not saved.\n");
    }

    let mut session = engine.start_session(quiz_id, user.as_ref())?;

    match answers {
        Some(list) => {
            apply_scripted_answers(&mut session, &list)?;
        }
        None => {
            if !run_interactive(&mut session).await? {
                println!("Session discarded; nothing was saved.");
                return Ok(());
            }
        }
    }

    let submission = engine.submit_session(&mut session).await;
    print_submission(&engine, &submission);

    Ok(())
}

/// Fill the answer map from a comma-separated option index list, in
/// question order. Fewer entries than questions leaves the rest
/// unanswered (scored as incorrect).
fn apply_scripted_answers(session: &mut QuizSession, list: &str) -> Result<()> {
    let indexes: Vec<usize> = list
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<usize>()
                .with_context(|| format!("invalid answer index: '{}'", s.trim()))
        })
        .collect::<Result<_>>()?;

    anyhow::ensure!(
        indexes.len() <= session.quiz().total_questions(),
        "{} answers given but the quiz has {} questions",
        indexes.len(),
        session.quiz().total_questions()
    );

    for (position, option) in indexes.into_iter().enumerate() {
        session.jump_to(position);
        let question_id = session.current_question().id;
        session.select_answer(question_id, option)?;
    }
    session.jump_to(0);
    Ok(())
}

/// Run the interactive timed session. Returns `false` if the user quit
/// before submitting (session discarded), `true` if the session should be
/// submitted (explicit submit or timeout).
async fn run_interactive(session: &mut QuizSession) -> Result<bool> {
    println!(
        "{} — {} questions, {} minute limit",
        session.quiz().title,
        session.quiz().total_questions(),
        session.quiz().time_limit_minutes
    );
    println!("Answer with a/b/c/… , then: n(ext) p(rev) g(oto) N, s(ubmit), q(uit)\n");
    print_question(session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let period = Duration::from_secs(1);
    let mut clock = tokio::time::interval_at(tokio::time::Instant::now() + period, period);

    loop {
        tokio::select! {
            _ = clock.tick() => {
                match session.tick() {
                    Tick::Expired => {
                        println!("\nTime is up — submitting whatever was answered.");
                        return Ok(true);
                    }
                    Tick::Remaining(secs) if secs % 60 == 0 => {
                        println!("  [{} remaining]", format_clock(secs));
                    }
                    _ => {}
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed: treat like quitting.
                    return Ok(false);
                };
                match handle_input(session, line.trim()) {
                    InputOutcome::Continue => {}
                    InputOutcome::Redisplay => print_question(session),
                    InputOutcome::Submit => return Ok(true),
                    InputOutcome::Quit => return Ok(false),
                }
            }
        }
    }
}

enum InputOutcome {
    Continue,
    Redisplay,
    Submit,
    Quit,
}

fn handle_input(session: &mut QuizSession, input: &str) -> InputOutcome {
    match input {
        "" => InputOutcome::Continue,
        "q" | "quit" => InputOutcome::Quit,
        "s" | "submit" => InputOutcome::Submit,
        "n" | "next" => {
            let before = session.current_index();
            session.advance();
            if session.current_index() == before {
                if !session.is_answered(session.current_question().id) {
                    println!("Answer the current question first.");
                    InputOutcome::Continue
                } else {
                    println!("Already at the last question; 's' to submit.");
                    InputOutcome::Continue
                }
            } else {
                InputOutcome::Redisplay
            }
        }
        "p" | "prev" => {
            session.retreat();
            InputOutcome::Redisplay
        }
        other => {
            if let Some(rest) = other.strip_prefix("g ") {
                match rest.trim().parse::<usize>() {
                    Ok(number) if number >= 1 => {
                        session.jump_to(number - 1);
                        return InputOutcome::Redisplay;
                    }
                    _ => {
                        println!("Usage: g <question number>");
                        return InputOutcome::Continue;
                    }
                }
            }

            match parse_option(other, session.current_question().options.len()) {
                Some(option) => {
                    let question_id = session.current_question().id;
                    match session.select_answer(question_id, option) {
                        Ok(()) => {
                            let question = session.current_question();
                            if option == question.correct_option {
                                println!("Correct.");
                            } else {
                                println!(
                                    "Incorrect — the answer was {}.",
                                    option_letter(question.correct_option)
                                );
                            }
                            if !question.explanation.is_empty() {
                                println!("  {}", question.explanation);
                            }
                            InputOutcome::Continue
                        }
                        Err(e) => {
                            println!("{e}");
                            InputOutcome::Continue
                        }
                    }
                }
                None => {
                    println!("Unrecognized input '{other}'.");
                    InputOutcome::Continue
                }
            }
        }
    }
}

/// Accept "a".."z" or a 1-based number as an option selection.
fn parse_option(input: &str, option_count: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    if bytes.len() == 1 && bytes[0].is_ascii_alphabetic() {
        let index = (bytes[0].to_ascii_lowercase() - b'a') as usize;
        return (index < option_count).then_some(index);
    }
    input
        .parse::<usize>()
        .ok()
        .filter(|&n| n >= 1 && n <= option_count)
        .map(|n| n - 1)
}

fn option_letter(index: usize) -> char {
    (b'a' + index as u8) as char
}

fn print_question(session: &QuizSession) {
    let question = session.current_question();
    println!(
        "\nQuestion {}/{} [{} answered, {} on the clock]",
        session.current_index() + 1,
        session.quiz().total_questions(),
        session.answered_count(),
        format_clock(session.remaining_seconds())
    );
    println!("{}", question.prompt);
    for (index, option) in question.options.iter().enumerate() {
        let marker = if session.answer_for(question.id) == Some(index) {
            "*"
        } else {
            " "
        };
        println!(" {marker}{}. {option}", option_letter(index));
    }
}

fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn print_submission(engine: &QuizEngine, submission: &Submission) {
    let result = &submission.result;
    let title = engine
        .catalog()
        .quiz_by_id(result.quiz_id)
        .map(|q| q.title.as_str())
        .unwrap_or("unknown quiz");

    println!("\n=== {title} ===");
    println!(
        "Score: {}% (grade {}) — {}/{} correct in {}m",
        result.score,
        result.grade(),
        result.correct_answers,
        result.total_questions,
        result.time_spent_minutes
    );

    for record in &result.answers {
        let mark = if record.is_correct { "+" } else { "-" };
        let selected = match record.selected {
            Some(index) => option_letter(index).to_string(),
            None => "unanswered".to_string(),
        };
        println!(
            " {mark} question {}: {} (correct: {})",
            record.question_id,
            selected,
            option_letter(record.correct_option)
        );
    }

    match &submission.save {
        SaveStatus::Saved => println!("\nResult saved (id {}).", result.id),
        SaveStatus::Anonymous => println!("\nAnonymous attempt — result not saved."),
        SaveStatus::AlreadySubmitted => {}
        SaveStatus::Failed(e) => {
            println!("\nWarning: the result was scored but could not be saved: {e}");
        }
    }
}
