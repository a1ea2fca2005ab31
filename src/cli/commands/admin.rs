//! Admin command handler
//!
//! Authenticates against the `[admin]` config section, then applies one
//! edit. Removals ask for confirmation unless `--yes` was given.

use super::{confirm, open_store, report_store_error};
use crate::args::AdminSubcommand;
use career_guide::admin::{Admin, AdminError, Outcome};
use career_guide::config::Config;
use career_guide::error;
use career_guide::query::Overview;

fn fail(err: &AdminError) -> ! {
    match err {
        AdminError::Store(store_err) => report_store_error(store_err),
        other => {
            error!("{other}");
            eprintln!("✗ {other}");
        }
    }
    std::process::exit(1);
}

/// Status line for an edit. A duplicate addition or an absent removal gets
/// the same neutral line as any other no-op.
fn outcome_message(outcome: Outcome, done: &str) -> String {
    match outcome {
        Outcome::Applied => format!("✓ {done}"),
        Outcome::Unchanged => "• No change".to_string(),
        Outcome::NeedsConfirmation => "✗ Cancelled, nothing was changed".to_string(),
    }
}

/// Print the result of an edit
fn report_outcome(outcome: Outcome, done: &str) {
    println!("{}", outcome_message(outcome, done));
}

/// Run a removal, prompting once if it needs confirmation
fn removal(
    yes: bool,
    question: &str,
    op: impl Fn(bool) -> Result<Outcome, AdminError>,
) -> Outcome {
    let outcome = op(yes).unwrap_or_else(|e| fail(&e));
    if outcome == Outcome::NeedsConfirmation && confirm(question) {
        return op(true).unwrap_or_else(|e| fail(&e));
    }
    outcome
}

fn print_overview(overview: &Overview) {
    println!("\n=== Catalog Overview ===\n");
    println!("  Boards:               {}", overview.boards);
    println!("  Streams:              {}", overview.streams);
    println!("  Subject combinations: {}", overview.subject_combinations);
    println!("  Course categories:    {}", overview.categories);
    println!("  Courses:              {}", overview.courses);
    println!("  Eligibility rules:    {}", overview.eligibility_rules);
}

/// Log in and dispatch admin subcommands
pub fn run(username: &str, password: &str, subcommand: AdminSubcommand, config: &Config) {
    let store = open_store(config);
    let admin =
        Admin::login(&store, &config.credentials(), username, password).unwrap_or_else(|e| fail(&e));

    match subcommand {
        AdminSubcommand::Overview => {
            print_overview(&admin.overview().unwrap_or_else(|e| fail(&e)));
        }
        AdminSubcommand::AddBoard { board } => report_outcome(
            admin.add_board(&board).unwrap_or_else(|e| fail(&e)),
            &format!("Added board '{board}'"),
        ),
        AdminSubcommand::RemoveBoard { board, yes } => report_outcome(
            removal(
                yes,
                &format!("Remove board '{board}' and its stream list?"),
                |ok| admin.remove_board(&board, ok),
            ),
            &format!("Removed board '{board}'"),
        ),
        AdminSubcommand::AddStream { board, stream } => report_outcome(
            admin.add_stream(&board, &stream).unwrap_or_else(|e| fail(&e)),
            &format!("Added stream '{stream}' to '{board}'"),
        ),
        AdminSubcommand::RemoveStream { board, stream, yes } => report_outcome(
            removal(
                yes,
                &format!("Remove stream '{stream}' from '{board}'?"),
                |ok| admin.remove_stream(&board, &stream, ok),
            ),
            &format!("Removed stream '{stream}' from '{board}'"),
        ),
        AdminSubcommand::AddSubject { stream, subjects } => report_outcome(
            admin
                .add_subject_combination(&stream, &subjects)
                .unwrap_or_else(|e| fail(&e)),
            &format!("Added '{subjects}' to '{stream}'"),
        ),
        AdminSubcommand::RemoveSubject {
            stream,
            subjects,
            yes,
        } => report_outcome(
            removal(
                yes,
                &format!("Remove '{subjects}' from '{stream}' together with its category mapping?"),
                |ok| admin.remove_subject_combination(&stream, &subjects, ok),
            ),
            &format!("Removed '{subjects}' from '{stream}'"),
        ),
        AdminSubcommand::AddCategory { subjects, category } => report_outcome(
            admin
                .add_category(&subjects, &category)
                .unwrap_or_else(|e| fail(&e)),
            &format!("Mapped '{category}' to '{subjects}'"),
        ),
        AdminSubcommand::RemoveCategory {
            subjects,
            category,
            yes,
        } => report_outcome(
            removal(
                yes,
                &format!("Unmap '{category}' from '{subjects}'?"),
                |ok| admin.remove_category(&subjects, &category, ok),
            ),
            &format!("Unmapped '{category}' from '{subjects}'"),
        ),
        AdminSubcommand::AddCourse { category, course } => report_outcome(
            admin
                .add_course(&category, &course)
                .unwrap_or_else(|e| fail(&e)),
            &format!("Added '{course}' to '{category}'"),
        ),
        AdminSubcommand::RemoveCourse {
            category,
            course,
            yes,
        } => report_outcome(
            removal(
                yes,
                &format!("Remove '{course}' from '{category}' together with its eligibility rule?"),
                |ok| admin.remove_course(&category, &course, ok),
            ),
            &format!("Removed '{course}' from '{category}'"),
        ),
        AdminSubcommand::SetEligibility { course, min_score } => report_outcome(
            admin
                .set_eligibility(&course, min_score)
                .unwrap_or_else(|e| fail(&e)),
            &format!("Set minimum score of '{course}' to {min_score}%"),
        ),
        AdminSubcommand::RemoveEligibility { course, yes } => report_outcome(
            removal(
                yes,
                &format!("Remove the eligibility rule of '{course}'?"),
                |ok| admin.remove_eligibility(&course, ok),
            ),
            &format!("Removed eligibility rule of '{course}' (default 50% applies)"),
        ),
    }
}
