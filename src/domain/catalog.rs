//! Built-in credit and fraud tables.

use super::types::{Domain, DomainKind, ExplanationTable, RangeTable};

pub fn credit() -> Domain {
    let ranges = RangeTable::new()
        .with_range(300.0, 580.0, ["high_risk", "low_credit"])
        .with_range(580.0, 850.0, ["low_risk", "high_credit"]);

    let explanations = ExplanationTable::new()
        .with("high_risk", "High risk for credit lending.")
        .with("low_credit", "Low credit score.")
        .with("low_risk", "Low risk for credit lending.")
        .with("high_credit", "High credit score.");

    Domain::new(DomainKind::Credit.key(), ranges, explanations)
}

pub fn fraud() -> Domain {
    let ranges = RangeTable::new()
        .with_range(0.0, 0.5, ["low_risk_fraud", "transaction_safe"])
        .with_range(0.5, 1.0, ["high_risk_fraud", "transaction_risky"]);

    let explanations = ExplanationTable::new()
        .with("low_risk_fraud", "Low risk of fraud.")
        .with("transaction_safe", "Transaction is safe.")
        .with("high_risk_fraud", "High risk of fraud.")
        .with("transaction_risky", "Transaction is risky.");

    Domain::new(DomainKind::Fraud.key(), ranges, explanations)
}

pub fn domain(kind: DomainKind) -> Domain {
    match kind {
        DomainKind::Credit => credit(),
        DomainKind::Fraud => fraud(),
    }
}
