//! Structural validation of problem instances.
//!
//! Checks an [`Instance`] before scheduling. Detects:
//! - Duplicate operation or job ids
//! - Job references to unknown operations
//! - Duration tables of inconsistent length
//! - Instances with operations but no machines
//! - Jobs without operations
//! - Negative durations
//!
//! Validation is advisory: the encoder and simulator assume well-formed
//! instances and fail fast on malformed ones, so run this once at the
//! boundary where instance data enters the system.

use std::collections::HashSet;

use crate::models::Instance;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two operations or two jobs share the same id.
    DuplicateId,
    /// A job references an operation that is not in the table.
    UnknownOperation,
    /// An operation's duration table differs in length from the first one.
    MachineCountMismatch,
    /// Operations exist but their duration tables are empty.
    NoMachines,
    /// A job has no operations.
    EmptyJob,
    /// A duration is negative.
    NegativeDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an instance.
///
/// Checks:
/// 1. No duplicate operation ids
/// 2. No duplicate job ids
/// 3. Every duration table has the same length, and that length is nonzero
/// 4. No negative durations
/// 5. Every job has at least one operation
/// 6. Every job only references operations present in the table
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();

    let mut operation_ids = HashSet::new();
    for op in &instance.operations {
        if !operation_ids.insert(op.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate operation id: {}", op.id),
            ));
        }
    }

    let mut job_ids = HashSet::new();
    for job in &instance.jobs {
        if !job_ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job id: {}", job.id),
            ));
        }
    }

    let machine_count = instance.machine_count();
    if machine_count == 0 && !instance.operations.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoMachines,
            "Operations have empty duration tables: no machines to schedule on",
        ));
    }
    for op in &instance.operations {
        if op.durations.len() != machine_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::MachineCountMismatch,
                format!(
                    "Operation '{}' has {} durations, expected {machine_count}",
                    op.id,
                    op.durations.len()
                ),
            ));
        }
        for (machine, &d) in op.durations.iter().enumerate() {
            if d < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeDuration,
                    format!(
                        "Operation '{}' has negative duration {d} on machine {machine}",
                        op.id
                    ),
                ));
            }
        }
    }

    for job in &instance.jobs {
        if job.operations.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyJob,
                format!("Job '{}' has no operations", job.id),
            ));
        }
        for op_id in &job.operations {
            if !operation_ids.contains(op_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownOperation,
                    format!("Job '{}' references unknown operation '{op_id}'", job.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
