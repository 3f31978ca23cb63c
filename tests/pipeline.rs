use bizselect::config::Domains;
use bizselect::data::controls::Endpoint;
use bizselect::data::filter::{ClosedRange, FilterState};
use bizselect::data::loader::load_file;
use bizselect::data::model::{CategoryField, Company, Field};
use bizselect::data::options::option_counts;
use bizselect::data::pipeline;
use bizselect::data::sort::{Direction, SortState};
use bizselect::data::view::{Action, ViewState};
use proptest::prelude::*;

fn domains() -> Domains {
    Domains {
        revenue: ClosedRange::new(0.0, 10_000_000.0),
        headcount: ClosedRange::new(0, 500),
        founding_year: ClosedRange::new(1980, 2025),
    }
}

fn fixture() -> Vec<Company> {
    load_file("tests/fixtures/firmen.json".as_ref())
        .unwrap()
        .companies()
        .to_vec()
}

fn names(rows: &[&Company]) -> Vec<String> {
    rows.iter().map(|c| c.name.clone()).collect()
}

#[test]
fn default_view_applies_the_default_ranges() {
    let data = fixture();
    let view = ViewState::new(&domains());
    let rows = pipeline::run(&data, &view.filter, &view.sort);

    // Harz Energie has 620 staff and was founded in 1979.
    assert_eq!(rows.len(), data.len() - 1);
    assert!(!names(&rows).contains(&"Harz Energie GmbH".to_string()));
}

#[test]
fn combined_filters_through_the_reducer() {
    let d = domains();
    let data = fixture();
    let view = ViewState::new(&d)
        .reduce(Action::Toggle(CategoryField::Industry, "Tech".into()), &d)
        .reduce(Action::Revenue(Endpoint::Lower, 1_000_000.0), &d);
    let rows = pipeline::run(&data, &view.filter, &view.sort);
    assert_eq!(names(&rows), vec!["Alpen Werke AG", "Isar Digital AG"]);
}

#[test]
fn type_multi_select_is_an_or() {
    let d = domains();
    let data = fixture();
    let view = ViewState::new(&d)
        .reduce(Action::Toggle(CategoryField::Type, "UG".into()), &d)
        .reduce(Action::Toggle(CategoryField::Type, "KG".into()), &d);
    let rows = pipeline::run(&data, &view.filter, &view.sort);
    assert_eq!(names(&rows), vec!["Elbe Logistik KG", "Spree Handel UG"]);
}

#[test]
fn name_sort_is_locale_aware() {
    let d = domains();
    let data = fixture();
    let view = ViewState::new(&d).reduce(Action::SortBy(Field::Name), &d);
    let rows = pipeline::run(&data, &view.filter, &view.sort);
    let sorted = names(&rows);
    assert_eq!(sorted[0], "Alpen Werke AG");
    // "Ä" sorts next to "A", not after "Z".
    assert_eq!(sorted[1], "Ärzte Verbund GmbH");
}

#[test]
fn equal_revenues_keep_dataset_order_in_both_directions() {
    let data = fixture();
    let filter = FilterState::new(&domains());
    for direction in [Direction::Ascending, Direction::Descending] {
        let rows = pipeline::run(&data, &filter, &SortState::by(Field::Revenue, direction));
        let tied: Vec<_> = rows
            .iter()
            .filter(|c| c.revenue == 500_000.0)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(tied, vec!["Nordlicht Systeme GmbH", "Main Consulting GmbH"]);
    }
}

#[test]
fn reset_returns_the_default_view() {
    let d = domains();
    let data = fixture();
    let view = ViewState::new(&d)
        .reduce(Action::Toggle(CategoryField::Region, "Süd".into()), &d)
        .reduce(Action::SortBy(Field::Revenue), &d)
        .reduce(Action::Reset, &d);
    let rows = pipeline::run(&data, &view.filter, &view.sort);
    let expected = pipeline::run(&data, &FilterState::new(&d), &SortState::default());
    assert_eq!(rows, expected);
}

#[test]
fn option_counts_ignore_active_filters() {
    let data = fixture();
    let counts = option_counts(&data, CategoryField::Region);
    let nord = counts.iter().find(|o| o.value == "Nord").unwrap();
    assert_eq!(nord.count, 2);
    assert_eq!(counts[0].value, "Nord");
    assert_eq!(counts[1].value, "Süd");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

const TYPES: [&str; 3] = ["GmbH", "AG", "KG"];
const REGIONS: [&str; 3] = ["Nord", "Süd", "Ost"];
const INDUSTRIES: [&str; 3] = ["Tech", "Handel", "Bau"];

fn company_strategy() -> impl Strategy<Value = Company> {
    (
        0usize..3,
        0usize..3,
        0usize..3,
        0u32..20,
        0u32..600,
        1970i32..2030,
        0u32..1000,
    )
        .prop_map(|(t, r, i, revenue, headcount, year, id)| Company {
            name: format!("Firma {id}"),
            company_type: TYPES[t].to_string(),
            region: REGIONS[r].to_string(),
            industry: INDUSTRIES[i].to_string(),
            revenue: f64::from(revenue) * 100_000.0,
            headcount,
            founding_year: year,
        })
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0usize..3).prop_map(|t| Action::Toggle(CategoryField::Type, TYPES[t].to_string())),
        (0usize..3).prop_map(|r| Action::Toggle(CategoryField::Region, REGIONS[r].to_string())),
        (0usize..3)
            .prop_map(|i| Action::Toggle(CategoryField::Industry, INDUSTRIES[i].to_string())),
        Just(Action::ClearSelection(CategoryField::Type)),
        (any::<bool>(), 0u32..30).prop_map(|(lower, v)| {
            let end = if lower { Endpoint::Lower } else { Endpoint::Upper };
            Action::Revenue(end, f64::from(v) * 500_000.0)
        }),
        (any::<bool>(), 0u32..700).prop_map(|(lower, v)| {
            let end = if lower { Endpoint::Lower } else { Endpoint::Upper };
            Action::Headcount(end, v)
        }),
        (any::<bool>(), 1960i32..2040).prop_map(|(lower, v)| {
            let end = if lower { Endpoint::Lower } else { Endpoint::Upper };
            Action::FoundingYear(end, v)
        }),
        prop::sample::select(Field::ALL.to_vec()).prop_map(Action::SortBy),
    ]
}

proptest! {
    #[test]
    fn output_is_exactly_the_matching_records(
        data in prop::collection::vec(company_strategy(), 0..40),
        actions in prop::collection::vec(action_strategy(), 0..12),
    ) {
        let d = domains();
        let view = actions
            .into_iter()
            .fold(ViewState::new(&d), |view, action| view.reduce(action, &d));
        let rows = pipeline::run(&data, &view.filter, &view.sort);

        for c in &rows {
            prop_assert!(view.filter.matches(c));
        }
        let kept = data.iter().filter(|c| view.filter.matches(c)).count();
        prop_assert_eq!(rows.len(), kept);
        for c in &data {
            let in_output = rows.iter().any(|r| std::ptr::eq(*r, c));
            prop_assert_eq!(in_output, view.filter.matches(c));
        }
    }

    #[test]
    fn ranges_stay_ordered_and_inside_domains(
        actions in prop::collection::vec(action_strategy(), 0..20),
    ) {
        let d = domains();
        let view = actions
            .into_iter()
            .fold(ViewState::new(&d), |view, action| view.reduce(action, &d));
        let f = &view.filter;
        prop_assert!(f.headcount.min() <= f.headcount.max());
        prop_assert!(d.headcount.contains(f.headcount.min()) && d.headcount.contains(f.headcount.max()));
        prop_assert!(f.founding_year.min() <= f.founding_year.max());
        if let (Some(lo), Some(hi)) = (f.revenue.min, f.revenue.max) {
            prop_assert!(lo <= hi);
        }
    }

    #[test]
    fn sort_is_stable(
        data in prop::collection::vec(company_strategy(), 0..40),
        field in prop::sample::select(Field::ALL.to_vec()),
        descending in any::<bool>(),
    ) {
        let direction = if descending { Direction::Descending } else { Direction::Ascending };
        let sort = SortState::by(field, direction);
        let rows = pipeline::run(&data, &FilterState::new(&domains()), &sort);
        let position = |c: &Company| data.iter().position(|d| std::ptr::eq(d, c)).unwrap();

        for pair in rows.windows(2) {
            let ord = sort.compare(pair[0], pair[1]);
            prop_assert_ne!(ord, std::cmp::Ordering::Greater);
            if ord == std::cmp::Ordering::Equal {
                prop_assert!(position(pair[0]) < position(pair[1]));
            }
        }
    }

    #[test]
    fn toggling_a_value_twice_is_a_no_op(
        field in prop::sample::select(CategoryField::ALL.to_vec()),
        start in prop::collection::vec(0usize..3, 0..4),
        pick in 0usize..3,
    ) {
        let d = domains();
        let values = match field {
            CategoryField::Type => TYPES,
            CategoryField::Region => REGIONS,
            CategoryField::Industry => INDUSTRIES,
        };
        let view = start.into_iter().fold(ViewState::new(&d), |view, i| {
            view.reduce(Action::Toggle(field, values[i].to_string()), &d)
        });
        let toggle = Action::Toggle(field, values[pick].to_string());
        let twice = view.reduce(toggle.clone(), &d).reduce(toggle, &d);
        prop_assert_eq!(twice, view);
    }

    #[test]
    fn lower_past_upper_collapses_to_a_point(upper in 0u32..500, extra in 1u32..100) {
        let d = domains();
        let value = (upper + extra).min(500);
        prop_assume!(value > upper);
        let view = ViewState::new(&d)
            .reduce(Action::Headcount(Endpoint::Upper, upper), &d)
            .reduce(Action::Headcount(Endpoint::Lower, value), &d);
        prop_assert_eq!(view.filter.headcount, ClosedRange::new(value, value));
    }
}
