//! The `quizdeck show` command — full review of one past result.

use std::path::PathBuf;

use anyhow::Result;
use uuid::Uuid;

use super::build_engine;

pub async fn execute(catalog_path: PathBuf, store_path: PathBuf, result_id: Uuid) -> Result<()> {
    let engine = build_engine(&catalog_path, store_path)?;

    let Some(result) = engine.result_by_id(result_id).await else {
        anyhow::bail!("result not found: {result_id}");
    };

    let quiz = engine.catalog().quiz_by_id(result.quiz_id);
    let title = quiz.map(|q| q.title.as_str()).unwrap_or("unknown quiz");

    println!("{title} — completed {}", result.completed_at.format("%Y-%m-%d %H:%M"));
    println!(
        "Score {}% (grade {}), {}/{} correct, {}m spent",
        result.score,
        result.grade(),
        result.correct_answers,
        result.total_questions,
        result.time_spent_minutes
    );

    // The answer records carry everything a review needs; the catalog is
    // only consulted for prompt text.
    for record in &result.answers {
        let prompt = quiz
            .and_then(|q| q.question_by_id(record.question_id))
            .map(|q| q.prompt.as_str())
            .unwrap_or("(prompt unavailable)");
        let mark = if record.is_correct { "+" } else { "-" };
        println!("\n {mark} {prompt}");
        match record.selected {
            Some(index) => println!("   answered option {index}"),
            None => println!("   unanswered"),
        }
        if !record.is_correct {
            println!("   correct option was {}", record.correct_option);
        }
        if !record.explanation.is_empty() {
            println!("   {}", record.explanation);
        }
    }

    Ok(())
}
