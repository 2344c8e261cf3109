use gtv_heatmap::api::parse_dataset;
use gtv_heatmap::models::{DatasetError, MonthlyVariance};

#[test]
fn parse_sample_json() {
    let sample = r#"
    {
      "baseTemperature": 8.66,
      "monthlyVariance": [
        {"year": 1753, "month": 1, "variance": -1.366},
        {"year": 1753, "month": 2, "variance": -2.223},
        {"year": 2015, "month": 12, "variance": 1.237}
      ]
    }
    "#;

    let data = parse_dataset(sample).unwrap();
    assert_eq!(data.base_temperature, 8.66);
    assert_eq!(data.monthly_variance.len(), 3);
    // source order is kept
    assert_eq!(
        data.monthly_variance[1],
        MonthlyVariance {
            year: 1753,
            month: 2,
            variance: -2.223
        }
    );
    assert_eq!(data.monthly_variance[2].year, 2015);
}

#[test]
fn malformed_json_is_error() {
    let err = parse_dataset(r#"{"baseTemperature": 8.66"#).unwrap_err();
    assert!(format!("{:#}", err).contains("decode json"));

    // wrong shape: monthlyVariance missing
    assert!(parse_dataset(r#"{"baseTemperature": 8.66}"#).is_err());
}

#[test]
fn empty_dataset_is_error() {
    let err = parse_dataset(r#"{"baseTemperature": 8.66, "monthlyVariance": []}"#).unwrap_err();
    assert_eq!(
        err.downcast_ref::<DatasetError>(),
        Some(&DatasetError::Empty)
    );
}

#[test]
fn month_out_of_range_is_error() {
    let err = parse_dataset(
        r#"{"baseTemperature": 8.66, "monthlyVariance": [{"year": 1900, "month": 13, "variance": 0.1}]}"#,
    )
    .unwrap_err();
    assert_eq!(
        err.downcast_ref::<DatasetError>(),
        Some(&DatasetError::InvalidMonth {
            index: 0,
            year: 1900,
            month: 13
        })
    );
}

#[test]
fn non_finite_values_are_rejected() {
    use gtv_heatmap::models::Dataset;

    let rec = |variance| MonthlyVariance {
        year: 1900,
        month: 1,
        variance,
    };

    let nan_base = Dataset {
        base_temperature: f64::NAN,
        monthly_variance: vec![rec(0.1)],
    };
    assert_eq!(
        nan_base.validate(),
        Err(DatasetError::NonFiniteValue {
            index: 0,
            field: "baseTemperature"
        })
    );

    let inf_variance = Dataset {
        base_temperature: 8.66,
        monthly_variance: vec![rec(0.1), rec(0.2), rec(f64::INFINITY)],
    };
    assert_eq!(
        inf_variance.validate(),
        Err(DatasetError::NonFiniteValue {
            index: 2,
            field: "variance"
        })
    );
}
