//! Sort-field whitelist and ORDER BY construction for task listings.
//!
//! User-supplied sort input never reaches SQL text directly: it is parsed
//! into [`TaskSortField`] / [`SortDirection`], and only the fixed column
//! names of those variants are interpolated into queries. Anything outside
//! the whitelist silently falls back to the caller's default.

/// Sortable task fields.
///
/// `Custom` is the manual ordering maintained by the reorder endpoint; it
/// always sorts by `order_index` ascending regardless of the requested
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSortField {
    CreatedAt,
    DueDate,
    Status,
    OrderIndex,
    Custom,
}

impl TaskSortField {
    /// Parse a wire-format sort field (`createdAt`, `dueDate`, ...).
    ///
    /// Returns `None` for anything outside the whitelist so the caller can
    /// apply its endpoint-specific default.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "createdAt" => Some(Self::CreatedAt),
            "dueDate" => Some(Self::DueDate),
            "status" => Some(Self::Status),
            "orderIndex" => Some(Self::OrderIndex),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Parse with a fallback default for absent or non-whitelisted input.
    pub fn parse_or(s: Option<&str>, default: Self) -> Self {
        s.and_then(Self::parse).unwrap_or(default)
    }

    /// The database column this field sorts by.
    pub fn column(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::DueDate => "due_date",
            Self::Status => "status",
            Self::OrderIndex | Self::Custom => "order_index",
        }
    }
}

/// Sort direction, default ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse `ASC`/`DESC` case-insensitively; anything else is ascending.
    pub fn parse_or_asc(s: Option<&str>) -> Self {
        match s {
            Some(s) if s.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Build an ORDER BY fragment (without the `ORDER BY` keyword) for a task
/// listing.
///
/// `Custom` pins the direction to ascending: the manual order is a single
/// sequence, not a reversible sort key.
pub fn order_by_clause(field: TaskSortField, direction: SortDirection) -> String {
    match field {
        TaskSortField::Custom => "order_index ASC".to_string(),
        _ => format!("{} {}", field.column(), direction.as_sql()),
    }
}
