use std::cmp::Ordering;

use super::model::{Company, Field, FieldValue};

// ---------------------------------------------------------------------------
// Sort state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Arrow shown next to the active column header.
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Ascending => "↑",
            Direction::Descending => "↓",
        }
    }
}

/// Active sort column and direction. `key == None` keeps the dataset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<Field>,
    pub direction: Direction,
}

impl SortState {
    pub fn by(key: Field, direction: Direction) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Result of clicking a column header: the active column flips direction,
    /// any other column becomes active in ascending order.
    pub fn toggled(self, key: Field) -> Self {
        if self.key == Some(key) {
            Self::by(key, self.direction.flipped())
        } else {
            Self::by(key, Direction::Ascending)
        }
    }

    /// Order two companies. Returns `Equal` when no key is set.
    pub fn compare(&self, a: &Company, b: &Company) -> Ordering {
        let Some(key) = self.key else {
            return Ordering::Equal;
        };
        let ord = compare_values(a.value(key), b.value(key));
        match self.direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

fn compare_values(a: FieldValue<'_>, b: FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(&y),
        (FieldValue::Text(x), FieldValue::Text(y)) => locale_compare(x, y),
        (x, y) => locale_compare(&text_of(x), &text_of(y)),
    }
}

fn text_of(value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Text(s) => s.to_string(),
        FieldValue::Number(n) => n.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Locale-aware text comparison (German)
// ---------------------------------------------------------------------------

/// Compare two strings the way a German collation orders them: letters first
/// by base character ignoring case and accents, then by accents, then
/// lowercase before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

fn base_key(s: &str) -> Vec<char> {
    let mut key = Vec::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match c {
            'ä' | 'à' | 'á' | 'â' | 'ã' | 'å' => key.push('a'),
            'ö' | 'ò' | 'ó' | 'ô' | 'õ' | 'ø' => key.push('o'),
            'ü' | 'ù' | 'ú' | 'û' => key.push('u'),
            'é' | 'è' | 'ê' | 'ë' => key.push('e'),
            'í' | 'ì' | 'î' | 'ï' => key.push('i'),
            'ç' => key.push('c'),
            'ñ' => key.push('n'),
            'ß' => key.extend(['s', 's']),
            other => key.push(other),
        }
    }
    key
}

fn accent_key(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Lowercase sorts before uppercase, so map lowercase to `false`.
fn case_key(s: &str) -> Vec<bool> {
    s.chars().map(char::is_uppercase).collect()
}
