use std::fmt::Write as _;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizdeck_core::catalog::parse_catalog_str;

fn make_catalog_toml(quizzes: usize, questions_per_quiz: usize) -> String {
    let mut toml = String::from(
        r#"
[[subjects]]
id = 1
name = "Bench"
description = "Benchmark subject"
"#,
    );
    for quiz in 0..quizzes {
        write!(
            toml,
            r#"
[[quizzes]]
id = {id}
subject_id = 1
title = "Quiz {id}"
time_limit_minutes = 30
"#,
            id = quiz + 1
        )
        .unwrap();
        for question in 0..questions_per_quiz {
            write!(
                toml,
                r#"
[[quizzes.questions]]
id = {id}
prompt = "Question {id}"
options = ["a", "b", "c", "d"]
correct_option = {correct}
explanation = "Because."
"#,
                id = question + 1,
                correct = question % 4
            )
            .unwrap();
        }
    }
    toml
}

fn bench_parse_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_catalog");
    let path = PathBuf::from("bench.toml");

    for &(quizzes, questions) in &[(5usize, 10usize), (50, 20)] {
        let toml = make_catalog_toml(quizzes, questions);
        group.bench_function(format!("quizzes={quizzes},questions={questions}"), |b| {
            b.iter(|| parse_catalog_str(black_box(&toml), &path).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_catalog);
criterion_main!(benches);
