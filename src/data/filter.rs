use std::collections::BTreeSet;

use super::model::CityDataset;

// ---------------------------------------------------------------------------
// City filter: which rows survive the current checklist selection
// ---------------------------------------------------------------------------

/// Set of selected city names. An empty set selects nothing.
pub type CitySelection = BTreeSet<String>;

/// Return indices of rows whose city is selected, in file order.
pub fn filtered_indices(dataset: &CityDataset, selected: &CitySelection) -> Vec<usize> {
    if selected.is_empty() {
        return Vec::new();
    }
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| selected.contains(&r.city))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv;

    fn dataset() -> CityDataset {
        let csv = "City,Rank,Cost of a bottle of water(City),Life expectancy(years) (Country),\
Pollution(Index score) (City),Happiness levels(Country),Latitude,Longitude
Oslo,1,2.0,82.0,15.0,7.4,59.9,10.7
Lima,2,0.6,76.0,60.0,5.8,-12.0,-77.0
Oslo,3,2.1,82.0,16.0,7.4,59.9,10.7
Pune,4,0.2,69.0,80.0,4.0,18.5,73.8
";
        read_csv(csv.as_bytes()).unwrap()
    }

    fn selection(cities: &[&str]) -> CitySelection {
        cities.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn count_matches_rows_with_selected_city() {
        let ds = dataset();
        let subsets: [&[&str]; 5] = [
            &[],
            &["Oslo"],
            &["Lima", "Pune"],
            &["Oslo", "Pune"],
            &["Oslo", "Lima", "Pune"],
        ];
        for subset in subsets {
            let sel = selection(subset);
            let expected = ds.records.iter().filter(|r| sel.contains(&r.city)).count();
            assert_eq!(filtered_indices(&ds, &sel).len(), expected, "subset {subset:?}");
        }
    }

    #[test]
    fn keeps_file_order() {
        let ds = dataset();
        assert_eq!(filtered_indices(&ds, &selection(&["Pune", "Oslo"])), vec![0, 2, 3]);
    }

    #[test]
    fn unknown_city_matches_nothing() {
        let ds = dataset();
        assert!(filtered_indices(&ds, &selection(&["Atlantis"])).is_empty());
    }
}
