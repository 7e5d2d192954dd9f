use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SklResult<T> = Result<T, SklError>;
pub type ParserResult<T> = SklResult<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SklErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl SklErrorCategory {
    pub const fn exit_mapping(self) -> ExitMapping {
        match self {
            Self::Success => ExitMapping {
                exit_code: 0,
                category_name: "Success",
                legacy_class: "SUCCESS",
            },
            Self::InputValidationError => ExitMapping {
                exit_code: 2,
                category_name: "InputValidationError",
                legacy_class: "INPUT_FATAL",
            },
            Self::IoSystemError => ExitMapping {
                exit_code: 3,
                category_name: "IoSystemError",
                legacy_class: "IO_FATAL",
            },
            Self::ComputationError => ExitMapping {
                exit_code: 4,
                category_name: "ComputationError",
                legacy_class: "RUN_FATAL",
            },
            Self::InternalError => ExitMapping {
                exit_code: 5,
                category_name: "InternalError",
                legacy_class: "SYS_FATAL",
            },
        }
    }

    pub const fn exit_code(self) -> i32 {
        self.exit_mapping().exit_code
    }

    pub const fn category_name(self) -> &'static str {
        self.exit_mapping().category_name
    }

    pub const fn legacy_class(self) -> &'static str {
        self.exit_mapping().legacy_class
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

/// Exit-code mapping for a fatal error category. The class string is the
/// coarse tag printed alongside the numeric exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitMapping {
    pub exit_code: i32,
    pub category_name: &'static str,
    pub legacy_class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SklError {
    category: SklErrorCategory,
    code: &'static str,
    message: String,
}

impl SklError {
    pub fn new(
        category: SklErrorCategory,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            code,
            message: message.into(),
        }
    }

    pub fn input_validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(SklErrorCategory::InputValidationError, code, message)
    }

    pub fn io_system(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(SklErrorCategory::IoSystemError, code, message)
    }

    pub fn computation(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(SklErrorCategory::ComputationError, code, message)
    }

    pub fn internal(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(SklErrorCategory::InternalError, code, message)
    }

    pub const fn category(&self) -> SklErrorCategory {
        self.category
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category.is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.code, self.message)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

impl Display for SklError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.category_name(),
            self.code,
            self.message
        )
    }
}

impl Error for SklError {}
