//! The `quizdeck init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("catalog")?;
    let starter_path = std::path::Path::new("catalog/starter.toml");
    if starter_path.exists() {
        println!("catalog/starter.toml already exists, skipping.");
    } else {
        std::fs::write(starter_path, STARTER_CATALOG)?;
        println!("Created catalog/starter.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizdeck validate");
    println!("  2. Run: quizdeck quizzes");
    println!("  3. Run: quizdeck take --quiz 1 --user you");

    Ok(())
}

const STARTER_CATALOG: &str = r##"# quizdeck starter catalog

[[subjects]]
id = 1
name = "Mathematics"
description = "Multiple-choice quizzes covering core mathematics"
color = "#007bff"
icon = "calculator"

[[subjects]]
id = 2
name = "Physics"
description = "Multiple-choice quizzes covering introductory physics"
color = "#28a745"
icon = "atom"

[[quizzes]]
id = 1
subject_id = 1
title = "Basic Algebra"
description = "Linear equations and arithmetic"
time_limit_minutes = 30

[[quizzes.questions]]
id = 1
prompt = "If 2x + 5 = 13, what is x?"
options = ["x = 3", "x = 4", "x = 5", "x = 6"]
correct_option = 1
explanation = "2x = 13 - 5 = 8, so x = 4."

[[quizzes.questions]]
id = 2
prompt = "What is (3 + 4) * 2?"
options = ["14", "10", "11", "12"]
correct_option = 0
explanation = "3 + 4 = 7, and 7 * 2 = 14."

[[quizzes.questions]]
id = 3
prompt = "What is 15% of 200?"
options = ["20", "25", "30", "35"]
correct_option = 2
explanation = "200 * 0.15 = 30."

[[quizzes]]
id = 2
subject_id = 2
title = "Mechanics"
description = "Forces and motion"
time_limit_minutes = 20

[[quizzes.questions]]
id = 1
prompt = "Newton's second law relates force to what?"
options = ["Mass and velocity", "Mass and acceleration", "Energy and time"]
correct_option = 1
explanation = "F = ma: force equals mass times acceleration."

[[quizzes.questions]]
id = 2
prompt = "What is the SI unit of force?"
options = ["Joule", "Watt", "Newton", "Pascal"]
correct_option = 2
explanation = "Force is measured in newtons (N)."
"##;
