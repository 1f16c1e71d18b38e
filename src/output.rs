//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{Priority, Recommendation, RiskLevel, RiskReport, Role, role_name};
use crate::core::services::UNKNOWN_ROLE;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Color a risk level: green, yellow or red
#[must_use]
pub fn colored_level(level: RiskLevel) -> ColoredString {
    let label = level.to_string();
    match level {
        RiskLevel::Low => label.green(),
        RiskLevel::Medium => label.yellow(),
        RiskLevel::High => label.red().bold(),
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Risk report for one scenario
#[derive(Debug, Serialize)]
pub struct ScoreResult {
    /// Scenario key
    pub scenario: String,
    /// Scenario display name
    pub name: String,
    /// The report
    #[serde(flatten)]
    pub report: RiskReport,
    /// Roles, for resolving names in human output
    #[serde(skip)]
    pub roles: Vec<Role>,
}

impl ScoreResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn role(&self, id: &str) -> String {
        role_name(&self.roles, id).unwrap_or(UNKNOWN_ROLE).to_string()
    }

    fn render_human(&self) {
        let report = &self.report;
        println!("Risk details: {} ({})\n", self.name, self.scenario);
        println!("  Score: {}/100  Level: {}\n", report.score, colored_level(report.level));

        if !report.violations.is_empty() {
            println!("Segregation violations ({}):", report.violations.len());
            for v in &report.violations {
                println!("  {}", self.role(&v.role).bold());
                println!("    • {}", v.first.name);
                println!("    • {}", v.second.name);
                println!("    Severity: {}/10\n", v.severity);
            }
        }

        if !report.combinations.is_empty() {
            println!("High-risk combinations ({}):", report.combinations.len());
            for c in &report.combinations {
                println!("  {}", self.role(&c.role).bold());
                println!("    {}", c.description);
                println!("    Severity: {}/10\n", c.severity);
            }
        }

        if !report.unassigned_critical.is_empty() {
            println!("Unassigned critical tasks ({}):", report.unassigned_critical.len());
            for t in &report.unassigned_critical {
                println!("  {}  (risk weight: {}/10)", t.name, t.risk_weight);
            }
            println!();
        }

        if !report.overloaded_roles.is_empty() {
            println!("Overloaded roles:");
            for o in &report.overloaded_roles {
                println!("  {} has {} tasks", self.role(&o.role_id), o.count);
            }
            println!();
        }

        if report.is_clear() {
            println!("{}", "No major control issues detected".green());
        }
    }
}

/// One row of a scenario comparison
#[derive(Debug, Serialize)]
pub struct ScenarioSummary {
    /// Scenario key
    pub key: String,
    /// Display name
    pub name: String,
    /// Clamped score
    pub score: u8,
    /// Risk level
    pub level: RiskLevel,
    /// Whether this is the active scenario
    pub active: bool,
}

/// Side-by-side scores for every scenario
#[derive(Debug, Serialize)]
pub struct ScenarioComparison {
    /// One row per scenario
    pub scenarios: Vec<ScenarioSummary>,
}

impl ScenarioComparison {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.scenarios.is_empty() {
                    println!("No scenarios.");
                    return;
                }
                println!("Scenarios:\n");
                for s in &self.scenarios {
                    let marker = if s.active { "*" } else { " " };
                    println!(
                        "{marker} {:<28} {:>3}  {:<6}  [{}]",
                        s.name,
                        s.score,
                        colored_level(s.level),
                        s.key
                    );
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Ordered recommendations for one scenario
#[derive(Debug, Serialize)]
pub struct RecommendationList {
    /// Scenario key
    pub scenario: String,
    /// Recommendations, most urgent first
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.recommendations.is_empty() {
            println!("{}", "No major control issues detected".green());
            println!("Current task assignments follow good internal control practices.");
            return;
        }

        println!("Recommendations ({}):\n", self.recommendations.len());
        for (i, r) in self.recommendations.iter().enumerate() {
            let priority = match r.priority {
                Priority::High => r.priority.to_string().red(),
                Priority::Medium => r.priority.to_string().yellow(),
                Priority::Low => r.priority.to_string().blue(),
            };
            println!("{:>2}. [{}] {}", i + 1, priority, r.kind);
            println!("    {}\n", r.description);
        }
    }
}

/// A role and its workload
#[derive(Debug, Serialize)]
pub struct RoleInfo {
    /// Role id
    pub id: String,
    /// Display name
    pub name: String,
    /// Board, Staff or External
    #[serde(rename = "type")]
    pub role_type: String,
    /// Tasks held in the scenario
    pub tasks: usize,
    /// Workload label
    pub status: String,
}

/// Roles with workload for one scenario
#[derive(Debug, Serialize)]
pub struct RoleList {
    /// Scenario key
    pub scenario: String,
    /// Roles in list order
    pub roles: Vec<RoleInfo>,
}

impl RoleList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Roles ({}):\n", self.scenario);
                for r in &self.roles {
                    let noun = if r.tasks == 1 { "task" } else { "tasks" };
                    println!(
                        "  {:<28} {:<9} {:>2} {noun:<5}  {}",
                        r.name, r.role_type, r.tasks, r.status
                    );
                    println!("  {}", r.id.dimmed());
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// A task with its current holder
#[derive(Debug, Serialize)]
pub struct TaskInfo {
    /// Task id
    pub id: String,
    /// Display name
    pub name: String,
    /// Risk weight
    pub risk_weight: u8,
    /// Holder's display name, if assigned
    pub assigned_to: Option<String>,
    /// Whether the task is part of a violation
    pub conflicted: bool,
}

/// Tasks of one category
#[derive(Debug, Serialize)]
pub struct TaskGroup {
    /// Category label
    pub category: String,
    /// Tasks in catalog order
    pub tasks: Vec<TaskInfo>,
}

/// Tasks grouped by category
#[derive(Debug, Serialize)]
pub struct TaskList {
    /// Scenario key
    pub scenario: String,
    /// Groups in category order
    pub groups: Vec<TaskGroup>,
}

impl TaskList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.groups.iter().all(|g| g.tasks.is_empty()) {
                    println!("No tasks found.");
                    return;
                }
                for group in self.groups.iter().filter(|g| !g.tasks.is_empty()) {
                    println!("{}", group.category.bold());
                    for t in &group.tasks {
                        let holder = t.assigned_to.as_deref().unwrap_or("(unassigned)");
                        let flag = if t.conflicted { "!".red() } else { " ".normal() };
                        println!("  {flag} {:<40} {:>2}  {holder}", t.name, t.risk_weight);
                        println!("    {}", t.id.dimmed());
                    }
                    println!();
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// A conflict declared on one side only
#[derive(Debug, Serialize)]
pub struct AsymmetricConflict {
    /// Task declaring the conflict
    pub task: String,
    /// Task that does not declare it back
    pub missing_reverse: String,
}

/// Catalog data-quality report
#[derive(Debug, Serialize)]
pub struct CatalogCheckResult {
    /// Number of tasks
    pub tasks: usize,
    /// Number of categories
    pub categories: usize,
    /// One-sided conflict declarations
    pub asymmetric: Vec<AsymmetricConflict>,
}

impl CatalogCheckResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Catalog: {} tasks in {} categories", self.tasks, self.categories);
                if self.asymmetric.is_empty() {
                    println!("All conflicts are declared on both sides.");
                    return;
                }
                println!("\nOne-sided conflicts ({}):", self.asymmetric.len());
                for a in &self.asymmetric {
                    println!(
                        "  {} -> {} (not declared on {})",
                        a.task, a.missing_reverse, a.missing_reverse
                    );
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// A successful result with a message
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
