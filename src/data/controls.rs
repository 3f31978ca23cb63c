use super::filter::{ClosedRange, Selection, SelectionMode};

// ---------------------------------------------------------------------------
// Choice-list widget logic
// ---------------------------------------------------------------------------

/// Toggle `value`: add it when absent, remove it when present.
///
/// A single-select panel only takes a value while it is empty; with a value
/// already chosen, toggling any other value leaves it unchanged.
pub fn toggle(selection: &Selection, value: &str) -> Selection {
    let mode = selection.mode();
    if selection.contains(value) {
        let rest = selection.values().iter().filter(|v| v.as_str() != value);
        return Selection::of(mode, rest.cloned());
    }
    match mode {
        SelectionMode::Multi => {
            let values = selection.values().iter().cloned().chain([value.to_string()]);
            Selection::of(mode, values)
        }
        SelectionMode::Single if selection.is_unconstrained() => Selection::of(mode, [value]),
        SelectionMode::Single => selection.clone(),
    }
}

/// "Select all": every option of the panel. A single-select panel cannot hold
/// several values, so it drops its constraint, which matches everything too.
pub fn select_all(selection: &Selection, options: &[String]) -> Selection {
    match selection.mode() {
        SelectionMode::Multi => Selection::of(SelectionMode::Multi, options.iter().cloned()),
        SelectionMode::Single => Selection::any(SelectionMode::Single),
    }
}

/// "Reset": empty selection, read downstream as no constraint.
pub fn clear(selection: &Selection) -> Selection {
    Selection::any(selection.mode())
}

// ---------------------------------------------------------------------------
// Range control normalization
// ---------------------------------------------------------------------------

/// Which handle of a range control was edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Lower,
    Upper,
}

/// Numeric types a range control can drive.
pub trait RangeValue: Copy + PartialOrd {
    /// Convert an entered integer, saturating at the type's limits.
    fn from_entered(value: i64) -> Self;
}

impl RangeValue for u32 {
    fn from_entered(value: i64) -> Self {
        value.clamp(0, i64::from(u32::MAX)) as u32
    }
}

impl RangeValue for i32 {
    fn from_entered(value: i64) -> Self {
        value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

impl RangeValue for f64 {
    fn from_entered(value: i64) -> Self {
        value as f64
    }
}

/// A two-handle range input bound to a fixed domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeControl<T> {
    pub domain: ClosedRange<T>,
}

impl<T: RangeValue> RangeControl<T> {
    pub fn new(domain: ClosedRange<T>) -> Self {
        Self { domain }
    }

    /// Apply a new value to one handle.
    ///
    /// The value is clamped into the domain. If the handles would cross, the
    /// untouched handle moves onto the new value, collapsing the range.
    pub fn set_endpoint(
        &self,
        current: ClosedRange<T>,
        endpoint: Endpoint,
        value: T,
    ) -> ClosedRange<T> {
        let v = self.domain.clamp(value);
        let (mut lower, mut upper) = (current.min(), current.max());
        match endpoint {
            Endpoint::Lower => lower = v,
            Endpoint::Upper => upper = v,
        }
        if lower > upper {
            match endpoint {
                Endpoint::Lower => upper = v,
                Endpoint::Upper => lower = v,
            }
        }
        ClosedRange::new(lower, upper)
    }

    /// Interpret typed text for a handle. Non-numeric input falls back to the
    /// domain minimum for the lower handle and the maximum for the upper one.
    pub fn parse_input(&self, text: &str, endpoint: Endpoint) -> T {
        match leading_integer(text) {
            Some(n) => T::from_entered(n),
            None => match endpoint {
                Endpoint::Lower => self.domain.min(),
                Endpoint::Upper => self.domain.max(),
            },
        }
    }

    /// Parse text and apply it to a handle in one step.
    pub fn enter(&self, current: ClosedRange<T>, endpoint: Endpoint, text: &str) -> ClosedRange<T> {
        let value = self.parse_input(text, endpoint);
        self.set_endpoint(current, endpoint, value)
    }
}

/// Integer prefix of `text`: optional sign then digits ("12abc" -> 12).
fn leading_integer(text: &str) -> Option<i64> {
    let t = text.trim_start();
    let (negative, rest) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    // Overlong input saturates rather than failing.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi(values: &[&str]) -> Selection {
        Selection::of(SelectionMode::Multi, values.iter().copied())
    }

    #[test]
    fn toggle_adds_then_removes() {
        let s = multi(&["GmbH"]);
        let added = toggle(&s, "AG");
        assert!(added.contains("AG") && added.contains("GmbH"));
        assert_eq!(toggle(&added, "AG"), s);
    }

    #[test]
    fn single_select_keeps_its_value_until_cleared() {
        let s = Selection::any(SelectionMode::Single);
        let nord = toggle(&s, "Nord");
        assert!(nord.contains("Nord"));

        let other = toggle(&nord, "Süd");
        assert_eq!(other, nord);
        assert_eq!(toggle(&other, "Süd"), nord);

        assert!(toggle(&nord, "Nord").is_unconstrained());
    }

    #[test]
    fn select_all_and_clear() {
        let options = vec!["GmbH".to_string(), "AG".to_string()];
        let all = select_all(&multi(&[]), &options);
        assert_eq!(all.values().len(), 2);
        assert!(clear(&all).is_unconstrained());
        assert_eq!(clear(&all).mode(), SelectionMode::Multi);

        let single = Selection::of(SelectionMode::Single, ["Nord"]);
        assert!(select_all(&single, &options).is_unconstrained());
    }

    #[test]
    fn lower_above_upper_collapses() {
        let control = RangeControl::new(ClosedRange::new(0u32, 500));
        let r = control.set_endpoint(ClosedRange::new(10, 100), Endpoint::Lower, 250);
        assert_eq!((r.min(), r.max()), (250, 250));
    }

    #[test]
    fn upper_below_lower_collapses() {
        let control = RangeControl::new(ClosedRange::new(1980, 2025));
        let r = control.set_endpoint(ClosedRange::new(2000, 2020), Endpoint::Upper, 1990);
        assert_eq!((r.min(), r.max()), (1990, 1990));
    }

    #[test]
    fn values_are_clamped_into_the_domain() {
        let control = RangeControl::new(ClosedRange::new(0u32, 500));
        let r = control.set_endpoint(ClosedRange::new(0, 100), Endpoint::Upper, 9_999);
        assert_eq!((r.min(), r.max()), (0, 500));
        let r = control.set_endpoint(ClosedRange::new(0, 100), Endpoint::Lower, 50);
        assert_eq!((r.min(), r.max()), (50, 100));
    }

    #[test]
    fn non_numeric_input_falls_back_to_domain_edges() {
        let control = RangeControl::new(ClosedRange::new(1980, 2025));
        assert_eq!(control.parse_input("abc", Endpoint::Lower), 1980);
        assert_eq!(control.parse_input("", Endpoint::Upper), 2025);
        assert_eq!(control.parse_input("2001xyz", Endpoint::Upper), 2001);
        assert_eq!(control.parse_input(" -5", Endpoint::Lower), -5);

        let r = control.enter(ClosedRange::new(1990, 2000), Endpoint::Upper, "nope");
        assert_eq!((r.min(), r.max()), (1990, 2025));
    }

    #[test]
    fn negative_entries_saturate_for_unsigned() {
        let control = RangeControl::new(ClosedRange::new(0u32, 500));
        assert_eq!(control.parse_input("-12", Endpoint::Lower), 0);
    }
}
