use crate::routes::{build_response, HealthScoreResponse};
use chrono::NaiveDate;
use clap::Args;
use el_matador::config::AppConfig;
use el_matador::error::AppError;
use el_matador::finance::health::{FinancialProfile, InsightSettings};
use el_matador::finance::ExpenseCsvImporter;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Financial profile JSON document (camelCase or snake_case fields)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Optional `Category,Amount` CSV that replaces the profile's expenses
    #[arg(long)]
    pub(crate) expenses_csv: Option<PathBuf>,
    /// Evaluation date for projections (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Include cash-flow and emergency fund insights
    #[arg(long)]
    pub(crate) insights: bool,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date for projections (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Skip the insight section for each household
    #[arg(long)]
    pub(crate) skip_insights: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        profile,
        expenses_csv,
        as_of,
        insights,
        json,
    } = args;

    let settings = AppConfig::load()?.insights;
    let profile = load_profile(profile, expenses_csv)?;
    let response = build_response(&profile, as_of, insights, &settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        render_health_report("Financial health report", &response);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        as_of,
        skip_insights,
    } = args;

    println!("El Matador financial health demo");
    let settings = InsightSettings::default();
    for (name, profile) in reference_households() {
        let response = build_response(&profile, as_of, !skip_insights, &settings);
        println!();
        render_health_report(name, &response);
    }

    Ok(())
}

fn load_profile(
    path: PathBuf,
    expenses_csv: Option<PathBuf>,
) -> Result<FinancialProfile, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let mut profile: FinancialProfile = serde_json::from_str(&raw)?;

    if let Some(csv_path) = expenses_csv {
        profile.monthly_expenses = ExpenseCsvImporter::from_path(csv_path)?;
    }

    Ok(profile)
}

pub(crate) fn reference_households() -> Vec<(&'static str, FinancialProfile)> {
    vec![
        (
            "Fully funded household",
            FinancialProfile {
                monthly_income: 6000.0,
                has_savings: true,
                savings_amount: 12000.0,
                ..FinancialProfile::default()
            }
            .with_expense("housing", 1500.0)
            .with_expense("food", 400.0)
            .with_goal("retirement")
            .with_goal("investment")
            .with_goal("house"),
        ),
        ("Blank profile", FinancialProfile::default()),
        (
            "Debt-heavy household",
            FinancialProfile {
                monthly_income: 5000.0,
                monthly_debt: 2500.0,
                ..FinancialProfile::default()
            }
            .with_expense("housing", 2000.0)
            .with_expense("food", 500.0)
            .with_goal("retirement"),
        ),
        (
            "Steady saver",
            FinancialProfile {
                monthly_income: 5000.0,
                monthly_debt: 250.0,
                has_savings: true,
                savings_amount: 3000.0,
                ..FinancialProfile::default()
            }
            .with_expense("housing", 1000.0)
            .with_goal("retirement")
            .with_goal("education"),
        ),
    ]
}

fn render_health_report(title: &str, response: &HealthScoreResponse) {
    let score = &response.score;

    println!("{title} (as of {})", response.as_of);
    println!(
        "Score: {}/100 - {} [{}]",
        score.total, score.level_label, score.color
    );

    println!("Breakdown");
    for component in &score.components {
        println!(
            "- {}: {}/{} ({})",
            component.dimension.label(),
            component.points,
            component.max_points,
            component.detail
        );
    }

    println!("Tip: {}", score.tip);

    let Some(insights) = &response.insights else {
        return;
    };

    println!(
        "Cash flow: ${:.0}/month after ${:.0} expenses",
        insights.monthly_cash_flow, insights.total_expenses
    );
    if !insights.expense_shares.is_empty() {
        println!("Expenses");
        for share in &insights.expense_shares {
            println!(
                "  - {}: ${:.0} ({:.0}% of spending)",
                share.category,
                share.amount,
                share.share_of_expenses * 100.0
            );
        }
    }

    match (insights.months_to_emergency_target, insights.emergency_target_date) {
        (Some(0), _) => println!("Emergency fund: target reached"),
        (Some(months), Some(date)) => println!(
            "Emergency fund: ${:.0} to go, about {} month(s) (by {})",
            insights.emergency_fund_gap, months, date
        ),
        _ => println!(
            "Emergency fund: ${:.0} to go, no monthly surplus to close the gap",
            insights.emergency_fund_gap
        ),
    }

    println!("Observations");
    for line in &insights.observations {
        println!("  - {line}");
    }
    println!("Recommended actions");
    for action in &insights.recommended_actions {
        println!("  - {action}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use el_matador::finance::health::{score_profile, HealthLevel};

    #[test]
    fn reference_households_cover_each_outcome() {
        let scored: Vec<(u8, HealthLevel)> = reference_households()
            .iter()
            .map(|(_, profile)| {
                let result = score_profile(profile);
                (result.total(), result.level())
            })
            .collect();

        assert_eq!(
            scored,
            vec![
                (100, HealthLevel::Excellent),
                (0, HealthLevel::DangerZone),
                (20, HealthLevel::DangerZone),
                (85, HealthLevel::Good),
            ]
        );
    }

    #[test]
    fn demo_runs_without_insights() {
        let args = DemoArgs {
            as_of: NaiveDate::from_ymd_opt(2025, 1, 15),
            skip_insights: true,
        };
        run_demo(args).expect("demo renders");
    }

    #[test]
    fn missing_profile_file_is_io_error() {
        let err = load_profile(PathBuf::from("/no/such/profile.json"), None)
            .expect_err("missing file fails");
        assert!(matches!(err, AppError::Io(_)));
    }
}
