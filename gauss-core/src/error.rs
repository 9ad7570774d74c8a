use thiserror::Error;

pub type Result<T> = core::result::Result<T, GaussError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GaussError {
    #[error("Invalid matrix dimensions: {0}")]
    InvalidDimensions(String),

    /// A pivot was zero during forward elimination. Carries the pivot row.
    #[error("Elimination failure in row {row}")]
    EliminationFailure { row: usize },

    /// A diagonal entry was zero during back substitution.
    #[error("Back substitution failure in row {row}")]
    BackSubstitutionFailure { row: usize },
}

impl GaussError {
    /// Row index carried by the solver failures, `None` for shape errors.
    pub fn row(&self) -> Option<usize> {
        match self {
            GaussError::EliminationFailure { row } | GaussError::BackSubstitutionFailure { row } => {
                Some(*row)
            }
            GaussError::InvalidDimensions(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GaussError;

    #[test]
    fn test_failure_messages_name_operation_and_row() {
        assert_eq!(
            GaussError::EliminationFailure { row: 0 }.to_string(),
            "Elimination failure in row 0"
        );
        assert_eq!(
            GaussError::BackSubstitutionFailure { row: 3 }.to_string(),
            "Back substitution failure in row 3"
        );
    }

    #[test]
    fn test_row_accessor() {
        assert_eq!(GaussError::EliminationFailure { row: 2 }.row(), Some(2));
        assert_eq!(GaussError::InvalidDimensions("x".into()).row(), None);
    }
}
