use crate::types::DbId;
use crate::validation::Violation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {}", format_violations(.0))]
    Validation(Vec<Violation>),

    #[error("Rule table lookup failed: no {table} entry named {name:?}")]
    RuleLookup { table: &'static str, name: String },

    #[error("Reference data incomplete: {table} entry {name:?} has no {field}")]
    IncompleteRuleData {
        table: &'static str,
        name: String,
        field: &'static str,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
