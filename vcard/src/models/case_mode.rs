// src/models/case_mode.rs

/// How category labels are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMode {
    /// Labels match only when identical after trimming.
    #[default]
    Exact,
    /// Labels are lowercased on both sides before matching.
    Insensitive,
}

impl CaseMode {
    #[inline]
    #[must_use]
    pub const fn from_flag(ignore_case: bool) -> Self {
        if ignore_case {
            Self::Insensitive
        } else {
            Self::Exact
        }
    }

    #[inline]
    #[must_use]
    pub fn normalize(self, label: &str) -> String {
        match self {
            Self::Exact => label.to_owned(),
            Self::Insensitive => label.to_lowercase(),
        }
    }
}
