//! Grid coordinates of a placed question.

use serde::{Deserialize, Serialize};

/// Widest supported grid: a row holds at most two columns.
pub const MAX_COLUMN: u32 = 1;

/// Largest page, row or order value storage can hold (a signed 32-bit
/// column).
pub const MAX_POSITION: u32 = i32::MAX.unsigned_abs();

/// Position of a question inside a multi-page form.
///
/// Field order matters: the derived [`Ord`] sorts by page, then row, then
/// column, then order-in-cell, which is the render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    page: u32,
    row: u32,
    column: u32,
    order: u32,
}

/// Validation errors for [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutValidationError {
    #[error("page numbers start at 1")]
    PageZero,
    #[error("column {0} is outside the two-column grid")]
    ColumnOutOfRange(u32),
    #[error("{field} {value} exceeds {MAX_POSITION}")]
    TooLarge { field: &'static str, value: u32 },
}

impl LayoutValidationError {
    /// Wire name of the builder field that failed.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::PageZero => "page",
            Self::ColumnOutOfRange(_) => "columnNumber",
            Self::TooLarge { field, .. } => *field,
        }
    }
}

const fn bounded(field: &'static str, value: u32) -> Result<u32, LayoutValidationError> {
    if value > MAX_POSITION {
        Err(LayoutValidationError::TooLarge { field, value })
    } else {
        Ok(value)
    }
}

impl Layout {
    /// Validate and build a layout.
    ///
    /// # Errors
    /// Rejects page 0, columns beyond [`MAX_COLUMN`] and page, row or order
    /// values beyond [`MAX_POSITION`].
    pub fn new(
        page: u32,
        row: u32,
        column: u32,
        order: u32,
    ) -> Result<Self, LayoutValidationError> {
        if page == 0 {
            return Err(LayoutValidationError::PageZero);
        }
        if column > MAX_COLUMN {
            return Err(LayoutValidationError::ColumnOutOfRange(column));
        }
        Ok(Self {
            page: bounded("page", page)?,
            row: bounded("rowNumber", row)?,
            column,
            order: bounded("orderInCell", order)?,
        })
    }

    /// Layout for a builder draft, where an unset page arrives as 0 and means
    /// the first page.
    ///
    /// # Errors
    /// Same rules as [`Layout::new`].
    pub fn from_draft(
        page: u32,
        row: u32,
        column: u32,
        order: u32,
    ) -> Result<Self, LayoutValidationError> {
        Self::new(page.max(1), row, column, order)
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    #[must_use]
    pub const fn order(&self) -> u32 {
        self.order
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            page: 1,
            row: 0,
            column: 0,
            order: 0,
        }
    }
}
