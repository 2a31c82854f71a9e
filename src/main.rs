//! Mortgage Engine CLI
//!
//! Command-line front end for the loan calculators and the rent-vs-buy engine

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use mortgage_engine::amortization::{
    analyze_extra_payments, analyze_refinance, summarize_loan, ExtraPaymentPlan, RefinanceRequest,
};
use mortgage_engine::export::{write_schedule_csv, write_series_csv, ExportEnvelope};
use mortgage_engine::inputs::load_scenario_json;
use mortgage_engine::projection::format_dollars;
use mortgage_engine::risk::{LoanApplication, MonthlyDebts, RiskAssessor};
use mortgage_engine::store::{
    save_calculation, CalculationHistory, ExtraPaymentInput, JsonFileStore, SavedAnalysis,
    SavedExtraPayment, SavedRefinance, EXTRA_PAYMENT_PREFIX, REFINANCE_PREFIX, RENT_VS_BUY_PREFIX,
};
use mortgage_engine::{Assumptions, ScenarioInput, ScenarioRunner, SensitivityParameter};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mortgage_engine", version, about = "Mortgage calculators and rent-vs-buy analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Directory with decision_thresholds.csv and risk_bands.csv
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly payment and lifetime totals for a purchase loan
    Payment(LoanArgs),
    /// Full amortization table as CSV
    Schedule(LoanArgs),
    /// Compare buying against renting
    RentVsBuy(RentVsBuyArgs),
    /// Sweep one rent-vs-buy input and report break-even and savings
    Sensitivity(SensitivityArgs),
    /// LTV and DTI review of a loan application
    Risk(RiskArgs),
    /// Effect of paying extra principal
    ExtraPayment(ExtraPaymentArgs),
    /// Compare the current loan with a refinance offer
    Refinance(RefinanceArgs),
    /// Quick pre-approval check
    Preapproval(PreapprovalArgs),
}

#[derive(Args)]
struct LoanArgs {
    #[arg(long)]
    price: f64,
    #[arg(long, default_value_t = 0.0)]
    down_payment: f64,
    /// Annual rate in percent
    #[arg(long)]
    rate: f64,
    #[arg(long, default_value_t = 30)]
    years: u32,
    /// Append the calculation to this history file
    #[arg(long)]
    history: Option<PathBuf>,
}

#[derive(Args)]
struct RentVsBuyArgs {
    /// Scenario JSON; defaults to the calculator's starting values
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    home_price: Option<f64>,
    #[arg(long)]
    monthly_rent: Option<f64>,
    /// Write the yearly comparison to this CSV file
    #[arg(long)]
    series_csv: Option<PathBuf>,
    /// Write a JSON export into this directory
    #[arg(long)]
    export_dir: Option<PathBuf>,
    /// Save the analysis to this store file
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(Args)]
struct SensitivityArgs {
    #[arg(long)]
    input: Option<PathBuf>,
    /// home-price, monthly-rent, down-payment, interest-rate,
    /// home-appreciation, rent-increase or investment-return
    #[arg(long)]
    parameter: SensitivityParameter,
    #[arg(long, value_delimiter = ',', required = true)]
    values: Vec<f64>,
}

#[derive(Args)]
struct RiskArgs {
    #[arg(long)]
    loan_amount: f64,
    #[arg(long)]
    property_value: f64,
    #[arg(long)]
    annual_income: f64,
    #[arg(long)]
    rate: f64,
    #[arg(long, default_value_t = 30)]
    years: u32,
    #[arg(long, default_value_t = 0.0)]
    credit_cards: f64,
    #[arg(long, default_value_t = 0.0)]
    student_loans: f64,
    #[arg(long, default_value_t = 0.0)]
    auto_loans: f64,
    #[arg(long, default_value_t = 0.0)]
    other_debts: f64,
}

#[derive(Args)]
struct ExtraPaymentArgs {
    #[arg(long)]
    balance: f64,
    #[arg(long)]
    rate: f64,
    #[arg(long)]
    years: u32,
    #[arg(long, default_value_t = 0.0)]
    monthly: f64,
    #[arg(long, default_value_t = 0.0)]
    yearly: f64,
    #[arg(long, default_value_t = 0.0)]
    one_time: f64,
    #[arg(long, default_value_t = 12)]
    one_time_at: u32,
    /// Save the analysis to this store file
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(Args)]
struct RefinanceArgs {
    #[arg(long)]
    balance: f64,
    #[arg(long)]
    current_rate: f64,
    #[arg(long)]
    remaining_years: u32,
    #[arg(long)]
    new_rate: f64,
    #[arg(long, default_value_t = 30)]
    new_years: u32,
    #[arg(long, default_value_t = 0.0)]
    closing_costs: f64,
    #[arg(long, default_value_t = 0.0)]
    cash_out: f64,
    /// Save the analysis to this store file
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(Args)]
struct PreapprovalArgs {
    #[arg(long)]
    annual_income: f64,
    #[arg(long)]
    loan_amount: f64,
    #[arg(long, default_value_t = 0.0)]
    monthly_debts: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => Assumptions::standard(),
    };

    match cli.command {
        Commands::Payment(args) => {
            let summary = summarize_loan(args.price, args.down_payment, args.rate, args.years)?;
            if let Some(path) = &args.history {
                let store = JsonFileStore::open(path)
                    .with_context(|| format!("opening history {}", path.display()))?;
                CalculationHistory::new(store).record(summary.clone())?;
            }
            if cli.json {
                #[derive(Serialize)]
                #[serde(rename_all = "camelCase")]
                struct Totals {
                    loan_amount: f64,
                    monthly_payment: f64,
                    total_payment: f64,
                    total_interest: f64,
                }
                print_json(&Totals {
                    loan_amount: summary.loan_amount,
                    monthly_payment: summary.monthly_payment,
                    total_payment: summary.total_payment,
                    total_interest: summary.total_interest,
                })?;
            } else {
                println!("Loan amount:     {}", format_dollars(summary.loan_amount));
                println!("Monthly payment: ${:.2}", summary.monthly_payment);
                println!("Total paid:      {}", format_dollars(summary.total_payment));
                println!("Total interest:  {}", format_dollars(summary.total_interest));
            }
        }
        Commands::Schedule(args) => {
            let summary = summarize_loan(args.price, args.down_payment, args.rate, args.years)?;
            if cli.json {
                print_json(&summary.amortization_schedule)?;
            } else {
                write_schedule_csv(std::io::stdout().lock(), &summary.amortization_schedule)?;
            }
        }
        Commands::RentVsBuy(args) => {
            let mut input = read_scenario(args.input.as_ref())?;
            if let Some(price) = args.home_price {
                input.home_price = price;
            }
            if let Some(rent) = args.monthly_rent {
                input.monthly_rent = rent;
            }

            let runner = ScenarioRunner::with_assumptions(assumptions);
            let result = runner.run(&input)?;

            if let Some(path) = &args.series_csv {
                let file = std::fs::File::create(path)
                    .with_context(|| format!("creating {}", path.display()))?;
                write_series_csv(file, &result.yearly_comparison)?;
            }
            if let Some(dir) = &args.export_dir {
                let envelope = ExportEnvelope::new(&input, &result, Utc::now());
                envelope.write_to_dir(dir, "rent-vs-buy-analysis")?;
            }
            if let Some(path) = &args.save {
                let mut store = JsonFileStore::open(path)
                    .with_context(|| format!("opening store {}", path.display()))?;
                let saved = SavedAnalysis::new(input.clone(), result.clone(), Utc::now());
                let key = save_calculation(&mut store, RENT_VS_BUY_PREFIX, &saved)?;
                log::info!("saved as {}", key);
            }

            if cli.json {
                print_json(&result)?;
            } else {
                let rec = &result.recommendation;
                println!("Decision:   {} ({}% confident)", rec.decision, rec.confidence);
                println!("{}", rec.primary_reason);
                for consideration in &rec.considerations {
                    println!("  - {}", consideration);
                }
                println!();
                println!(
                    "Monthly:    buy {} / rent {}",
                    format_dollars(result.buying.total_monthly_cost),
                    format_dollars(result.renting.total_monthly_cost)
                );
                println!("Break-even: year {}", result.break_even_point);
                println!("{:>4} {:>14} {:>14}", "Year", "Buy NW", "Rent NW");
                for row in &result.yearly_comparison {
                    println!(
                        "{:>4} {:>14} {:>14}",
                        row.year,
                        format_dollars(row.buying_net_worth),
                        format_dollars(row.renting_net_worth)
                    );
                }
            }
        }
        Commands::Sensitivity(args) => {
            let input = read_scenario(args.input.as_ref())?;
            let runner = ScenarioRunner::with_assumptions(assumptions);
            let points = runner.sensitivity(&input, args.parameter, &args.values)?;
            if cli.json {
                print_json(&points)?;
            } else {
                println!("{:>10} {:>10} {:>14} {:>8}", args.parameter.name(), "Break-even", "10y savings", "Decision");
                for p in &points {
                    println!(
                        "{:>10} {:>10} {:>14} {:>8}",
                        p.value,
                        p.break_even_point,
                        format_dollars(p.ten_year_savings),
                        p.decision
                    );
                }
            }
        }
        Commands::Risk(args) => {
            let application = LoanApplication {
                loan_amount: args.loan_amount,
                property_value: args.property_value,
                annual_income: args.annual_income,
                interest_rate_percent: args.rate,
                loan_term_years: args.years,
                monthly_debts: MonthlyDebts {
                    credit_cards: args.credit_cards,
                    student_loans: args.student_loans,
                    auto_loans: args.auto_loans,
                    other_debts: args.other_debts,
                },
            };
            let assessment = RiskAssessor::new(assumptions.risk).assess(&application)?;
            if cli.json {
                print_json(&assessment)?;
            } else {
                println!("Monthly payment: ${:.2}", assessment.monthly_payment);
                println!("LTV: {}% ({})", assessment.loan_to_value, assessment.ltv_risk.ltv_label());
                println!("DTI: {}% ({})", assessment.debt_to_income, assessment.dti_risk.dti_label());
                println!("DTI incl. other debts: {:.2}%", assessment.total_debt_to_income);
            }
        }
        Commands::ExtraPayment(args) => {
            let plan = if args.monthly > 0.0 {
                ExtraPaymentPlan::Monthly { amount: args.monthly }
            } else if args.yearly > 0.0 {
                ExtraPaymentPlan::Yearly { amount: args.yearly }
            } else if args.one_time > 0.0 {
                ExtraPaymentPlan::OneTime { amount: args.one_time, payment_number: args.one_time_at }
            } else {
                ExtraPaymentPlan::None
            };
            let analysis = analyze_extra_payments(args.balance, args.rate, args.years, plan)?;
            if let Some(path) = &args.save {
                let mut store = JsonFileStore::open(path)
                    .with_context(|| format!("opening store {}", path.display()))?;
                let input = ExtraPaymentInput {
                    balance: args.balance,
                    annual_rate_percent: args.rate,
                    term_years: args.years,
                    plan,
                };
                let saved = SavedExtraPayment::new(input, analysis.clone(), Utc::now());
                let key = save_calculation(&mut store, EXTRA_PAYMENT_PREFIX, &saved)?;
                log::info!("saved as {}", key);
            }
            if cli.json {
                print_json(&analysis)?;
            } else {
                let s = &analysis.savings;
                println!("Payoff:         {:.1} years (was {:.1})",
                    analysis.with_extra_payment.years_to_payoff, analysis.original_loan.years_to_payoff);
                println!("Interest saved: {} ({:.1}%)", format_dollars(s.interest_saved), s.percentage_saved);
                println!("Months saved:   {}", s.months_saved);
                for scenario in &analysis.scenarios {
                    println!(
                        "  +${:<5} a month saves {} months and {}",
                        scenario.extra_payment,
                        scenario.months_saved,
                        format_dollars(scenario.interest_saved)
                    );
                }
            }
        }
        Commands::Refinance(args) => {
            let request = RefinanceRequest {
                current_balance: args.balance,
                current_rate_percent: args.current_rate,
                remaining_years: args.remaining_years,
                new_rate_percent: args.new_rate,
                new_term_years: args.new_years,
                closing_costs: args.closing_costs,
                cash_out: args.cash_out,
            };
            let analysis = analyze_refinance(&request, assumptions.decision.refinance_max_break_even_months)?;
            if let Some(path) = &args.save {
                let mut store = JsonFileStore::open(path)
                    .with_context(|| format!("opening store {}", path.display()))?;
                let saved = SavedRefinance::new(request, analysis.clone(), Utc::now());
                let key = save_calculation(&mut store, REFINANCE_PREFIX, &saved)?;
                log::info!("saved as {}", key);
            }
            if cli.json {
                print_json(&analysis)?;
            } else {
                println!("Current payment: ${:.2}", analysis.current_loan.monthly_payment);
                println!("New payment:     ${:.2}", analysis.new_loan.monthly_payment);
                match analysis.break_even.break_even_months {
                    Some(months) => println!("Break-even:      {} months", months),
                    None => println!("Break-even:      never"),
                }
                println!("Lifetime savings: {}", format_dollars(analysis.savings.lifetime_savings));
                println!("{}", analysis.message);
            }
        }
        Commands::Preapproval(args) => {
            let eligible = RiskAssessor::new(assumptions.risk).preapproval_eligible(
                args.annual_income,
                args.loan_amount,
                args.monthly_debts,
            );
            if cli.json {
                print_json(&serde_json::json!({ "eligible": eligible }))?;
            } else if eligible {
                println!("Eligible for pre-approval");
            } else {
                println!("Not eligible for pre-approval");
            }
        }
    }

    Ok(())
}

fn read_scenario(path: Option<&PathBuf>) -> Result<ScenarioInput> {
    match path {
        Some(path) => load_scenario_json(path).with_context(|| format!("reading scenario {}", path.display())),
        None => Ok(ScenarioInput::default()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
