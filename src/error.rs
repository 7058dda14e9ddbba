use std::fmt;

/// Ошибки генерации мира
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Сетка слишком мала для diamond-square (минимум 2×2)
    InvalidDimension { rows: usize, columns: usize },
    /// Несогласованные пороги высот в конфигурации
    InvalidConfiguration(String),
    /// Лимит попыток исчерпан, нужного числа вершин так и не нашлось
    InsufficientSummits { attempts: usize, required: usize },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::InvalidDimension { rows, columns } => {
                write!(f, "grid {rows}×{columns} is too small, need at least 2×2")
            }
            GenerationError::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {reason}")
            }
            GenerationError::InsufficientSummits { attempts, required } => {
                write!(
                    f,
                    "no height field with {required} summits after {attempts} attempts"
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {}
