use chrono::NaiveDate;
use pdt_features::{
    ColumnOrder, FeatureVector, Flag, Observation, TrafficLevel, Weather,
};

#[test]
fn march_friday_survey_encodes_to_training_row() {
    let obs = Observation {
        date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        shredded_units: 12,
        out_of_stock_before_7pm: Flag::No,
        traffic: TrafficLevel::Neutral,
        weather: Weather::Cold,
        public_event: Flag::No,
    };
    let vector = FeatureVector::assemble(&ColumnOrder::Default, &obs).unwrap();

    assert_eq!(vector.get("OutOfStockBefore7pm"), Some(0.0));
    assert_eq!(vector.get("Human_Traffic"), Some(0.0));
    assert_eq!(vector.get("Weather"), Some(1.0));
    assert_eq!(vector.get("Public_Event"), Some(0.0));
    assert_eq!(vector.get("day_of_week"), Some(4.0));
    assert_eq!(vector.get("day_of_month"), Some(15.0));
    assert_eq!(vector.get("week_of_year"), Some(11.0));
}

#[test]
fn year_end_survey_crosses_into_next_iso_year() {
    let obs = Observation {
        date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        shredded_units: 0,
        out_of_stock_before_7pm: Flag::Yes,
        traffic: TrafficLevel::MuchHigher,
        weather: Weather::Rainy,
        public_event: Flag::Yes,
    };
    let vector = FeatureVector::assemble(&ColumnOrder::Default, &obs).unwrap();

    assert_eq!(vector.get("week_of_year"), Some(1.0));
    assert_eq!(vector.get("day_of_week"), Some(1.0));
    assert_eq!(vector.get("day_of_month"), Some(31.0));
    assert_eq!(vector.get("OutOfStockBefore7pm"), Some(1.0));
    assert_eq!(vector.get("Human_Traffic"), Some(2.0));
    assert_eq!(vector.get("Weather"), Some(2.0));
    assert_eq!(vector.get("Public_Event"), Some(1.0));
}
