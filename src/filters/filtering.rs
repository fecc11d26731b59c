use itertools::Itertools;

use crate::documents::{device_class, DeviceClass, VersionEntry};

pub const BLACK_AND_WHITE: &str = "Black & White";
pub const COLOR: &str = "Color";

pub const DEVICE_FILTER_OPTIONS: [&str; 2] = [BLACK_AND_WHITE, COLOR];
pub const GENDER_FILTER_OPTIONS: [&str; 3] = ["Female", "Male", "Other"];
pub const STAGE_FILTER_OPTIONS: [&str; 8] = [
    "Baby", "Child", "Teen", "Adult", "Senior", "Parent", "Pet", "Costume",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterCategory {
    Device,
    Gender,
    Stages,
}

/// Checkbox selections of the character grid filters. Lists keep insertion
/// order; only membership matters for evaluation.
#[derive(Clone, Debug)]
pub struct FilterSet {
    pub device: Vec<String>,
    pub gender: Vec<String>,
    pub stages: Vec<String>,
}

impl Default for FilterSet {
    fn default() -> Self {
        FilterSet {
            device: all_of(&DEVICE_FILTER_OPTIONS),
            gender: all_of(&GENDER_FILTER_OPTIONS),
            stages: all_of(&STAGE_FILTER_OPTIONS),
        }
    }
}

impl FilterSet {
    pub fn toggle(&mut self, category: FilterCategory, value: &str, checked: bool) {
        let selection = match category {
            FilterCategory::Device => &mut self.device,
            FilterCategory::Gender => &mut self.gender,
            FilterCategory::Stages => &mut self.stages,
        };
        *selection = update_filters(value, checked, selection);
    }

    /// Tells the grid whether external filtering needs to run at all. With
    /// every option selected in every category all records pass.
    pub fn is_active(&self) -> bool {
        is_partial_selection(&self.device, &DEVICE_FILTER_OPTIONS)
            || is_none_selected(&self.device)
            || is_partial_selection(&self.gender, &GENDER_FILTER_OPTIONS)
            || is_none_selected(&self.gender)
            || is_partial_selection(&self.stages, &STAGE_FILTER_OPTIONS)
            || is_none_selected(&self.stages)
    }

    /// A record passes when every category accepts it. Categories are
    /// independent of each other.
    pub fn passes(&self, versions: &[VersionEntry]) -> bool {
        self.passes_device(versions) && self.passes_gender(versions) && self.passes_stages(versions)
    }

    fn passes_device(&self, versions: &[VersionEntry]) -> bool {
        passes_filter(
            versions,
            &self.device,
            &DEVICE_FILTER_OPTIONS,
            |entry| vec![entry.version.as_str()],
            Some(device_class_rule),
        )
    }

    fn passes_gender(&self, versions: &[VersionEntry]) -> bool {
        passes_filter(
            versions,
            &self.gender,
            &GENDER_FILTER_OPTIONS,
            |entry| vec![entry.gender.as_str()],
            None,
        )
    }

    fn passes_stages(&self, versions: &[VersionEntry]) -> bool {
        // Version entries exist but none carries stage metadata: tolerated
        // rather than filtered out.
        let has_defined_stage = versions.iter().any(|entry| entry.has_stage());
        if !versions.is_empty() && !has_defined_stage {
            return true;
        }
        passes_filter(
            versions,
            &self.stages,
            &STAGE_FILTER_OPTIONS,
            |entry| vec![entry.stage.as_str()],
            None,
        )
    }
}

/// Decides whether a record passes one filter category. Records without items
/// fail. A full selection passes unconditionally, an empty one fails
/// unconditionally, and a partial selection needs an intersection with the
/// record's values unless the category brings its own rule.
pub fn passes_filter<T>(
    items: &[T],
    selected: &[String],
    all_options: &[&str],
    values_of: fn(&T) -> Vec<&str>,
    special_rule: Option<fn(&[String], &[&str]) -> bool>,
) -> bool {
    if items.is_empty() {
        return false;
    }
    let values = items
        .iter()
        .flat_map(values_of)
        .filter(|value| !value.is_empty())
        .unique()
        .collect_vec();
    if selected.len() == all_options.len() {
        return true;
    }
    if selected.is_empty() {
        return false;
    }
    match special_rule {
        Some(rule) => rule(selected, &values),
        None => values
            .iter()
            .any(|value| selected.iter().any(|sel| sel == value)),
    }
}

/// Device filtering goes through the device generation of each version
/// instead of comparing option labels to raw version ids.
pub fn device_class_rule(selected: &[String], versions: &[&str]) -> bool {
    let black_and_white_selected = selected.iter().any(|sel| sel == BLACK_AND_WHITE);
    let color_selected = selected.iter().any(|sel| sel == COLOR);
    let has_black_and_white = versions
        .iter()
        .any(|version| device_class(version) == Some(DeviceClass::BlackAndWhite));
    let has_color = versions
        .iter()
        .any(|version| device_class(version) == Some(DeviceClass::Color));
    (black_and_white_selected && has_black_and_white) || (color_selected && has_color)
}

pub fn is_partial_selection(selected: &[String], all_options: &[&str]) -> bool {
    !selected.is_empty() && selected.len() < all_options.len()
}

pub fn is_none_selected(selected: &[String]) -> bool {
    selected.is_empty()
}

/// Checkbox toggle: add the value on check, drop it on uncheck.
pub fn update_filters(value: &str, checked: bool, selected: &[String]) -> Vec<String> {
    match checked {
        true => selected
            .iter()
            .cloned()
            .chain([value.to_owned()])
            .collect(),
        false => selected
            .iter()
            .filter(|sel| *sel != value)
            .cloned()
            .collect(),
    }
}

fn all_of(options: &[&str]) -> Vec<String> {
    options.iter().map(|option| option.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(version: &str, gender: &str, stage: &str) -> VersionEntry {
        VersionEntry {
            version: version.to_owned(),
            gender: gender.to_owned(),
            stage: stage.to_owned(),
            ..Default::default()
        }
    }

    fn selection(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn records_without_items_fail_even_under_full_selection() {
        let selected = all_of(&GENDER_FILTER_OPTIONS);
        assert!(!passes_filter::<VersionEntry>(
            &[],
            &selected,
            &GENDER_FILTER_OPTIONS,
            |entry| vec![entry.gender.as_str()],
            None,
        ));
    }

    #[test]
    fn full_selection_passes_even_without_values() {
        // The record has items but none of them carries a gender.
        let versions = vec![version("v1", "", "")];
        let selected = all_of(&GENDER_FILTER_OPTIONS);
        assert!(passes_filter(
            &versions,
            &selected,
            &GENDER_FILTER_OPTIONS,
            |entry| vec![entry.gender.as_str()],
            None,
        ));
    }

    #[test]
    fn empty_selection_fails_even_with_values() {
        let versions = vec![version("v1", "Male", "Adult")];
        assert!(!passes_filter(
            &versions,
            &[],
            &GENDER_FILTER_OPTIONS,
            |entry| vec![entry.gender.as_str()],
            None,
        ));
    }

    #[test]
    fn partial_selection_needs_an_intersection() {
        let versions = vec![version("v1", "Male", "Adult")];
        assert!(passes_filter(
            &versions,
            &selection(&["Male", "Other"]),
            &GENDER_FILTER_OPTIONS,
            |entry| vec![entry.gender.as_str()],
            None,
        ));
        assert!(!passes_filter(
            &versions,
            &selection(&["Female"]),
            &GENDER_FILTER_OPTIONS,
            |entry| vec![entry.gender.as_str()],
            None,
        ));
    }

    #[test]
    fn device_rule_matches_generations_not_labels() {
        let mut filters = FilterSet::default();
        let black_and_white_only = vec![version("v1", "Male", "Adult")];
        let color_only = vec![version("uni", "Female", "Adult")];

        filters.device = selection(&[COLOR]);
        assert!(!filters.passes_device(&black_and_white_only));
        assert!(filters.passes_device(&color_only));

        filters.device = selection(&[BLACK_AND_WHITE]);
        assert!(filters.passes_device(&black_and_white_only));
        assert!(!filters.passes_device(&color_only));

        filters.device = selection(&[BLACK_AND_WHITE, COLOR]);
        assert!(filters.passes_device(&black_and_white_only));
        assert!(filters.passes_device(&color_only));
    }

    #[test]
    fn versions_without_stage_metadata_always_pass_the_stage_filter() {
        let mut filters = FilterSet::default();
        filters.stages = selection(&["Adult"]);
        let no_stages = vec![version("v1", "Male", ""), version("v2", "Male", "")];
        assert!(filters.passes_stages(&no_stages));

        filters.stages = vec![];
        assert!(filters.passes_stages(&no_stages));
    }

    #[test]
    fn defined_stages_filter_normally() {
        let mut filters = FilterSet::default();
        filters.stages = selection(&["Adult"]);
        assert!(filters.passes_stages(&[version("v1", "Male", "Adult")]));
        assert!(!filters.passes_stages(&[version("v1", "Male", "Baby")]));
    }

    #[test]
    fn record_must_satisfy_every_category() {
        let mut filters = FilterSet::default();
        filters.device = selection(&[COLOR]);
        filters.gender = selection(&["Female"]);

        let versions = vec![version("uni", "Female", "Adult")];
        assert!(filters.passes(&versions));

        filters.gender = selection(&["Male"]);
        assert!(!filters.passes(&versions));
    }

    #[test]
    fn toggle_round_trip_restores_the_selection() {
        let mut filters = FilterSet::default();
        let before = filters.gender.clone();

        filters.toggle(FilterCategory::Gender, "Male", false);
        assert!(!filters.gender.iter().any(|sel| sel == "Male"));

        filters.toggle(FilterCategory::Gender, "Male", true);
        let mut restored = filters.gender.clone();
        let mut expected = before;
        restored.sort();
        expected.sort();
        assert_eq!(restored, expected);
    }

    #[test]
    fn unchecking_an_absent_value_is_a_no_op() {
        let selected = selection(&["Female"]);
        let unchanged = update_filters("Male", false, &selected);
        assert_eq!(unchanged, selected);
        let again = update_filters("Male", false, &unchanged);
        assert_eq!(again, selected);
    }

    #[test]
    fn filters_are_inactive_only_when_everything_is_selected() {
        let mut filters = FilterSet::default();
        assert!(!filters.is_active());

        filters.toggle(FilterCategory::Device, COLOR, false);
        assert!(filters.is_active());

        filters.toggle(FilterCategory::Device, COLOR, true);
        assert!(!filters.is_active());

        filters.stages = vec![];
        assert!(filters.is_active());
    }
}
