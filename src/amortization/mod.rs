//! Loan amortization: payments, balances, schedules and payoff strategies

mod engine;
mod extra;
mod refinance;

pub use engine::{
    amortize, monthly_payment, remaining_balance, schedule, summarize_loan, AmortizationResult,
    LoanSummary, PaymentLine,
};
pub use extra::{
    analyze_extra_payments, ExtraPaymentAnalysis, ExtraPaymentLine, ExtraPaymentPlan,
    ExtraPaymentScenario, LoanDetails, PayoffSavings, TotalBreakdown, YearlyBreakdown,
    STANDARD_MONTHLY_EXTRAS,
};
pub use refinance::{
    analyze_refinance, RefinanceAnalysis, RefinanceBreakEven, RefinanceLoan, RefinanceRequest,
    RefinanceSavings, RefinanceVerdict,
};
