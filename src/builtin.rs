//! Built-in task catalog and roles
//!
//! The default data set for a small nonprofit: thirty financial-control
//! duties across ten categories and the seven roles that usually share them.
//! Conflicts are declared as the domain states them; several are one-sided
//! and are reported by [`TaskCatalog::asymmetric_conflicts`].

use crate::core::models::{
    CatalogError, Role, RoleType, SymmetryPolicy, TaskCatalog, TaskEntry, Workspace,
};
use crate::core::ports::CatalogSource;

/// Category labels in display order
pub const CATEGORIES: &[&str] = &[
    "Cash Receipt",
    "Disbursement",
    "Banking",
    "Payroll",
    "Accounting",
    "Reporting",
    "Assets",
    "Oversight",
    "AP/AR",
    "Compliance",
];

type TaskRow = (&'static str, &'static str, &'static str, u8, &'static [&'static str]);

#[rustfmt::skip]
const TASKS: &[TaskRow] = &[
    // Cash receipts
    ("open_mail", "Open Mail/Receive Checks", "Cash Receipt", 7,
        &["prepare_deposits", "record_receipts", "bank_reconciliation"]),
    ("prepare_deposits", "Prepare Bank Deposits", "Cash Receipt", 8,
        &["open_mail", "record_receipts", "bank_reconciliation", "online_banking"]),
    ("record_receipts", "Record Cash Receipts in Accounting", "Cash Receipt", 9,
        &["open_mail", "prepare_deposits", "bank_reconciliation"]),
    ("issue_donation_receipts", "Issue Donation Receipts", "Cash Receipt", 6,
        &["record_receipts"]),
    // Disbursements
    ("approve_invoices", "Approve Invoices for Payment", "Disbursement", 9,
        &["prepare_checks", "sign_checks", "record_payments"]),
    ("prepare_checks", "Prepare Checks/Electronic Payments", "Disbursement", 8,
        &["approve_invoices", "sign_checks", "record_payments", "online_banking"]),
    ("sign_checks", "Sign Checks/Authorize Payments", "Disbursement", 10,
        &["prepare_checks", "approve_invoices", "record_payments", "online_banking"]),
    ("record_payments", "Record Payments in Accounting", "Disbursement", 9,
        &["prepare_checks", "approve_invoices", "sign_checks"]),
    // Banking and reconciliation
    ("online_banking", "Online Banking Access", "Banking", 10,
        &["prepare_deposits", "prepare_checks", "sign_checks", "bank_reconciliation"]),
    ("bank_reconciliation", "Perform Bank Reconciliation", "Banking", 10,
        &["open_mail", "prepare_deposits", "record_receipts", "record_payments", "online_banking"]),
    ("review_reconciliation", "Review Bank Reconciliation", "Banking", 8,
        &["bank_reconciliation"]),
    // Payroll
    ("approve_timesheets", "Approve Timesheets", "Payroll", 8,
        &["process_payroll", "record_payroll"]),
    ("process_payroll", "Process Payroll", "Payroll", 9,
        &["approve_timesheets", "record_payroll", "sign_checks"]),
    ("record_payroll", "Record Payroll in Accounting", "Payroll", 8,
        &["approve_timesheets", "process_payroll"]),
    ("maintain_employee_records", "Maintain Employee Records", "Payroll", 7,
        &["process_payroll"]),
    // General ledger
    ("maintain_general_ledger", "Maintain General Ledger", "Accounting", 9,
        &["record_receipts", "record_payments", "record_payroll"]),
    ("post_journal_entries", "Post Journal Entries", "Accounting", 8,
        &["review_journal_entries"]),
    ("review_journal_entries", "Review Journal Entries", "Accounting", 7,
        &["post_journal_entries"]),
    // Reporting
    ("prepare_financial_statements", "Prepare Financial Statements", "Reporting", 8,
        &["review_financial_statements"]),
    ("review_financial_statements", "Review Financial Statements", "Reporting", 9,
        &["prepare_financial_statements"]),
    ("prepare_budget", "Prepare Annual Budget", "Reporting", 7, &["approve_budget"]),
    ("approve_budget", "Approve Budget", "Reporting", 9, &["prepare_budget"]),
    // Assets
    ("maintain_asset_records", "Maintain Fixed Asset Records", "Assets", 6,
        &["physical_asset_verification"]),
    ("physical_asset_verification", "Physical Asset Verification", "Assets", 7,
        &["maintain_asset_records"]),
    // Oversight
    ("review_monthly_reports", "Review Monthly Financial Reports", "Oversight", 8,
        &["prepare_financial_statements", "maintain_general_ledger"]),
    ("monitor_budget_variance", "Monitor Budget vs. Actual", "Oversight", 7,
        &["prepare_budget", "post_journal_entries"]),
    // Payables and receivables
    ("maintain_ap", "Maintain Accounts Payable Records", "AP/AR", 7,
        &["approve_invoices", "prepare_checks"]),
    ("maintain_ar", "Maintain Accounts Receivable Records", "AP/AR", 7,
        &["record_receipts", "issue_donation_receipts"]),
    // Compliance
    ("prepare_990", "Prepare Form 990", "Compliance", 8, &["review_990"]),
    ("review_990", "Review Form 990", "Compliance", 9, &["prepare_990"]),
];

/// The built-in task records, unvalidated
#[must_use]
pub fn task_entries() -> Vec<TaskEntry> {
    TASKS
        .iter()
        .map(|&(id, name, category, risk_weight, conflicts)| TaskEntry {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            risk_weight,
            conflicts_with: conflicts.iter().map(|c| (*c).to_string()).collect(),
        })
        .collect()
}

/// Build the built-in catalog under the given symmetry policy
///
/// The built-in data declares some conflicts on one side only, so
/// [`SymmetryPolicy::Strict`] rejects it.
pub fn catalog(policy: SymmetryPolicy) -> Result<TaskCatalog, CatalogError> {
    TaskCatalog::from_entries(
        CATEGORIES.iter().map(|c| (*c).to_string()).collect(),
        task_entries(),
        policy,
    )
}

/// The roles every new workspace starts with
#[must_use]
pub fn roles() -> Vec<Role> {
    vec![
        Role::new("treasurer", "Treasurer", RoleType::Board, "dollar-sign", "blue"),
        Role::new("exec_director", "Executive Director", RoleType::Staff, "building", "green"),
        Role::new(
            "outsourced_bookkeeper",
            "Outsourced Bookkeeper",
            RoleType::External,
            "file-text",
            "teal",
        ),
        Role::new("board_chair", "Board Chair", RoleType::Board, "users", "indigo"),
        Role::new(
            "finance_committee",
            "Finance Committee Member",
            RoleType::Board,
            "user-circle",
            "purple",
        ),
        Role::new("program_staff", "Program Staff", RoleType::Staff, "briefcase", "emerald"),
        Role::new("admin_staff", "Administrative Staff", RoleType::Staff, "user", "cyan"),
    ]
}

/// A fresh workspace with the built-in roles and one empty scenario
#[must_use]
pub fn workspace() -> Workspace {
    Workspace::new(roles())
}

/// [`CatalogSource`] serving the built-in catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load_catalog(&self, policy: SymmetryPolicy) -> anyhow::Result<TaskCatalog> {
        Ok(catalog(policy)?)
    }
}
