//! Pathfinder terminal front end.
//!
//! Thin presentation layer over the assessment wizard: phase-appropriate
//! prompts in, rendered results out. All sequencing lives in the
//! controller.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use pathfinder::config::AppConfig;
use pathfinder::wizard::{AnswerOutcome, AssessmentWizard};
use pathfinder_core::reflection::ReflectionField;
use pathfinder_core::scores::ScoreCategory;
use pathfinder_llm::GeminiProvider;

fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        anyhow::bail!("input closed");
    }
    Ok(line.trim().to_string())
}

fn run_quiz(wizard: &mut AssessmentWizard) -> anyhow::Result<()> {
    let total = wizard.questions().len();
    loop {
        let Some(question) = wizard.current_question() else {
            break;
        };
        let number = question.id;
        let text = question.text.clone();
        let options: Vec<String> = question.options.iter().map(|o| o.label.clone()).collect();

        println!("\n[{}/{}] {}", number, total, text);
        for (i, label) in options.iter().enumerate() {
            println!("  {}. {}", i + 1, label);
        }

        let choice = loop {
            let line = read_line("Your choice: ")?;
            match line.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => break n - 1,
                _ => println!("Enter a number between 1 and {}.", options.len()),
            }
        };

        if wizard.answer(choice)? == AnswerOutcome::QuizComplete {
            break;
        }
    }
    Ok(())
}

/// Collect the four narrative fields. Returns false when the user chose to
/// go back to the quiz instead of submitting.
fn collect_reflection(wizard: &mut AssessmentWizard) -> anyhow::Result<bool> {
    println!("\nYour story — every field is optional, press Enter to skip.");
    for field in ReflectionField::ALL {
        let value = read_line(&format!("{} ", field.prompt()))?;
        wizard.set_reflection(field, value)?;
    }
    loop {
        let line = read_line("Submit for analysis? [Y]es / [b]ack to the quiz: ")?;
        match line.to_ascii_lowercase().as_str() {
            "" | "y" | "yes" => return Ok(true),
            "b" | "back" => return Ok(false),
            _ => println!("Please answer y or b."),
        }
    }
}

fn render_results(wizard: &AssessmentWizard) {
    let (Some(analysis), Some(scores)) = (wizard.analysis(), wizard.scores()) else {
        return;
    };

    println!("\n=== {} ===", analysis.persona);
    println!("{}\n", analysis.summary);

    println!("Your profile:");
    for category in ScoreCategory::ALL {
        println!("  {:<12} {}", category.label(), scores.get(category));
    }

    println!("\nTop career matches:");
    for (i, career) in analysis.top_careers.iter().enumerate() {
        println!("\n{}. {}", i + 1, career.title);
        println!("   {}", career.description);
        println!("   Salary: {}   Growth: {}", career.salary_range, career.growth_potential);
        println!("   Why you: {}", career.reasoning);
    }

    if !analysis.motivational_videos.is_empty() {
        println!("\nWatch next:");
        for video in &analysis.motivational_videos {
            println!("  {} — {}", video.title, video.url);
        }
    }

    if !analysis.search_sources.is_empty() {
        println!("\nSources:");
        for source in &analysis.search_sources {
            println!("  {} — {}", source.title, source.uri);
        }
    }

    println!("\n{}", analysis.empathetic_note);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pathfinder=info".into()),
        )
        .init();

    let config = AppConfig::from_env();
    let provider = Arc::new(GeminiProvider::new(config.provider));
    let mut wizard = AssessmentWizard::new(provider);

    println!("Pathfinder — career assessment");
    println!("Five questions, your story, and real-time career matches.\n");

    loop {
        let line = read_line("Press Enter to start (q to quit): ")?;
        if line.eq_ignore_ascii_case("q") {
            break;
        }

        wizard.start()?;
        loop {
            run_quiz(&mut wizard)?;
            if collect_reflection(&mut wizard)? {
                break;
            }
            wizard.back_to_quiz()?;
        }

        println!("\nSynthesizing your narrative with psychometric data...");
        wizard.submit_reflection()?;

        match wizard.await_analysis().await {
            Ok(()) => {
                render_results(&wizard);
                break;
            }
            Err(e) => {
                // The wizard is already back at the start with everything
                // discarded; a retry means a full re-run.
                println!("\nSomething went wrong with the AI analysis: {}", e);
                println!("Please try again from the beginning.\n");
            }
        }
    }

    Ok(())
}
