use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::entry::{EntryFilter, EntrySort};
use crate::domain::types::{CategoryId, TypeConstraintError};

/// Query string accepted by section listings.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EntryListForm {
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(length(max = 100))]
    pub q: Option<String>,
    pub sort: Option<String>,
    pub category: Option<String>,
}

/// Validated listing parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryListPayload {
    pub page: usize,
    pub sort: EntrySort,
    pub filter: EntryFilter,
}

impl Default for EntryListPayload {
    fn default() -> Self {
        Self {
            page: 1,
            sort: EntrySort::default(),
            filter: EntryFilter::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EntryListFormError {
    #[error("Entry list query validation failed: {0}")]
    Validation(String),
    #[error("Entry list query contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for EntryListFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for EntryListFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// Trims the value and drops it when nothing is left.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<EntryListForm> for EntryListPayload {
    type Error = EntryListFormError;

    fn try_from(value: EntryListForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let sort = match non_blank(value.sort) {
            Some(sort) => sort.parse()?,
            None => EntrySort::default(),
        };

        Ok(Self {
            page: value.page.unwrap_or(1),
            sort,
            filter: EntryFilter {
                search: non_blank(value.q),
                category: non_blank(value.category).map(CategoryId::new),
            },
        })
    }
}
