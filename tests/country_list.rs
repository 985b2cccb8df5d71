mod common;

use common::{chile, country, peru};
use country_list::country::Country;
use country_list::ui::country_list::{CountryList, RowChange, RowView};

#[test]
fn peru_row_matches_expected_layout() {
    let row = RowView::from_country(&peru());
    assert_eq!(row.title, "Peru, Americas");
    assert_eq!(row.code, "PE");
    assert_eq!(row.capital, "Lima");
}

#[test]
fn blank_fields_render_as_empty_strings() {
    let row = RowView::from_country(&Country::default());
    assert_eq!(row.title, "");
    assert_eq!(row.code, "");
    assert_eq!(row.capital, "");
}

#[test]
fn first_submission_inserts_every_row() {
    let mut list = CountryList::new();
    let changes = list.submit(vec![peru(), chile()]);
    assert_eq!(changes, vec![RowChange::Inserted(0), RowChange::Inserted(1)]);
    assert_eq!(list.len(), 2);
}

#[test]
fn identical_list_triggers_no_row_updates() {
    let mut list = CountryList::new();
    list.submit(vec![peru(), chile()]);
    let changes = list.submit(vec![peru(), chile()]);
    assert!(changes.is_empty());
    assert_eq!(list.rows()[1].code, "CL");
}

#[test]
fn only_changed_rows_are_rebuilt() {
    let mut list = CountryList::new();
    list.submit(vec![peru(), chile()]);

    let renamed = country("Republic of Chile", "Americas", "CL", "Santiago");
    let changes = list.submit(vec![peru(), renamed]);
    assert_eq!(changes, vec![RowChange::Changed(1)]);
    assert_eq!(list.rows()[0].title, "Peru, Americas");
    assert_eq!(list.rows()[1].title, "Republic of Chile, Americas");
}

#[test]
fn same_code_is_same_row_even_with_different_fields() {
    let mut list = CountryList::new();
    list.submit(vec![peru()]);
    let changes = list.submit(vec![country("Peru", "South America", "PE", "Lima")]);
    assert_eq!(changes, vec![RowChange::Changed(0)]);
}

#[test]
fn shrinking_list_removes_trailing_rows() {
    let mut list = CountryList::new();
    list.submit(vec![peru(), chile()]);
    let changes = list.submit(vec![chile()]);
    assert_eq!(
        changes,
        vec![RowChange::Replaced(0), RowChange::Removed(1)]
    );
    assert_eq!(list.rows(), &[RowView::from_country(&chile())]);
}
