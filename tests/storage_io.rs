use gtv_heatmap::storage;
use std::fs;
use tempfile::tempdir;

#[test]
fn save_csv_and_json() {
    let data = storage::load_json(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/sample.json")).unwrap();
    let dir = tempdir().unwrap();

    let csv_path = dir.path().join("gtv.csv");
    storage::save_csv(&data, &csv_path).unwrap();
    let csv_txt = fs::read_to_string(&csv_path).unwrap();
    assert!(csv_txt.starts_with("year,month,variance,temperature"));
    assert_eq!(csv_txt.lines().count(), 1 + data.monthly_variance.len());
    assert!(csv_txt.lines().nth(1).unwrap().starts_with("1850,1,-0.68,"));

    let json_path = dir.path().join("gtv.json");
    storage::save_json(&data, &json_path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(v["baseTemperature"], 8.66);
    assert_eq!(
        v["monthlyVariance"].as_array().unwrap().len(),
        data.monthly_variance.len()
    );
}

#[test]
fn missing_file_is_error() {
    let dir = tempdir().unwrap();
    assert!(storage::load_json(dir.path().join("nope.json")).is_err());
}
