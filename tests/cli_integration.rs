use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const SAMPLE_CSV: &str = "reviewId,title,category,productId,price
1,Great headphones,Tech,P001,59.99
2,Decent blender,Home,P002,75.00
3,Cheap speakers,Tech,P003,49.99
4,Smartwatch deluxe,Tech,P004,120.00
5,,Tech,P005,200.00
6,Great value kettle,Home,P006,35.50
7,Not great not terrible,Home,P002,75.00
";

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

/// Temp dir doubling as HOME so no user config leaks into the run
fn sandbox(csv: &str) -> (TempDir, PathBuf) {
    let root = tempfile::tempdir().expect("create temp dir");
    let csv_path = root.path().join("reviews.csv");
    write_file(&csv_path, csv);
    (root, csv_path)
}

fn run_reviewstats(args: &[&str], home: &Path) -> (bool, Vec<u8>, Vec<u8>) {
    let bin = std::env::var("CARGO_BIN_EXE_reviewstats").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("reviewstats.exe");
        } else {
            path.push("reviewstats");
        }
        path.to_string_lossy().into_owned()
    });
    let output = Command::new(bin)
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("run reviewstats");
    (output.status.success(), output.stdout, output.stderr)
}

fn json_stdout(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("json")
}

#[test]
fn price_json_filters_inclusive_range_in_order() {
    let (root, csv) = sandbox(SAMPLE_CSV);
    let (ok, stdout, stderr) = run_reviewstats(
        &["price", "--min", "20", "--max", "100", "-j", "-f", csv.to_str().unwrap()],
        root.path(),
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json = json_stdout(&stdout);
    let ids: Vec<i64> = json
        .as_array()
        .expect("array output")
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 6, 7]);
}

#[test]
fn count_csv_lists_products_sorted() {
    let (root, csv) = sandbox(SAMPLE_CSV);
    let (ok, stdout, stderr) = run_reviewstats(
        &["count", "--csv", "-f", csv.to_str().unwrap()],
        root.path(),
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let output = String::from_utf8(stdout).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "productId,reviews");
    assert_eq!(lines[1], "P001,1");
    assert_eq!(lines[2], "P002,2");
    assert_eq!(lines.len(), 7, "header + 6 products");
}

#[test]
fn count_json_desc_order() {
    let (root, csv) = sandbox(SAMPLE_CSV);
    let (ok, stdout, _) = run_reviewstats(
        &["count", "-j", "--order", "desc", "-f", csv.to_str().unwrap()],
        root.path(),
    );
    assert!(ok);

    let json = json_stdout(&stdout);
    let arr = json.as_array().expect("array output");
    assert_eq!(arr[0]["product_id"].as_str(), Some("P006"));
    let total: u64 = arr.iter().map(|c| c["reviews"].as_u64().unwrap()).sum();
    assert_eq!(total, 7);
}

#[test]
fn search_is_case_insensitive_and_skips_missing_titles() {
    let (root, csv) = sandbox(SAMPLE_CSV);
    let (ok, stdout, _) = run_reviewstats(
        &["search", "GREAT", "-j", "-f", csv.to_str().unwrap()],
        root.path(),
    );
    assert!(ok);

    let json = json_stdout(&stdout);
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["Great headphones", "Great value kettle", "Not great not terrible"]
    );
}

#[test]
fn titles_default_to_tech_over_50() {
    let (root, csv) = sandbox(SAMPLE_CSV);
    let (ok, stdout, _) = run_reviewstats(
        &["titles", "-j", "-f", csv.to_str().unwrap()],
        root.path(),
    );
    assert!(ok);

    let json = json_stdout(&stdout);
    assert_eq!(
        json,
        serde_json::json!(["GREAT HEADPHONES", "SMARTWATCH DELUXE"])
    );
}

#[test]
fn products_sorted_by_price_with_stable_ties() {
    let (root, csv) = sandbox(SAMPLE_CSV);
    let (ok, stdout, _) = run_reviewstats(
        &["products", "--category", "home", "--under", "100", "--csv", "-f", csv.to_str().unwrap()],
        root.path(),
    );
    assert!(ok);

    let output = String::from_utf8(stdout).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();
    // 35.50 first, then the two 75.00 reviews in file order (ids 2 and 7, both P002)
    assert_eq!(lines, vec!["Product", "P006", "P002", "P002"]);
}

#[test]
fn products_without_matches_is_empty_array() {
    let (root, csv) = sandbox(SAMPLE_CSV);
    let (ok, stdout, _) = run_reviewstats(
        &["products", "--category", "Fitness", "-j", "-f", csv.to_str().unwrap()],
        root.path(),
    );
    assert!(ok);
    assert_eq!(json_stdout(&stdout), serde_json::json!([]));
}

#[test]
fn report_json_contains_every_section() {
    let (root, csv) = sandbox(SAMPLE_CSV);
    let (ok, stdout, stderr) = run_reviewstats(&["-j", "-f", csv.to_str().unwrap()], root.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json = json_stdout(&stdout);
    assert_eq!(json["reviews"].as_array().unwrap().len(), 7);
    assert_eq!(json["price_range"]["min"].as_f64(), Some(20.0));
    assert_eq!(json["price_range"]["max"].as_f64(), Some(100.0));
    assert_eq!(json["price_range"]["reviews"].as_array().unwrap().len(), 5);
    assert_eq!(json["keyword"]["keyword"].as_str(), Some("great"));
    assert_eq!(json["keyword"]["reviews"].as_array().unwrap().len(), 3);
    assert_eq!(json["counts"].as_array().unwrap().len(), 6);
    assert_eq!(
        json["tech_titles_over_50"],
        serde_json::json!(["GREAT HEADPHONES", "SMARTWATCH DELUXE"])
    );
    assert_eq!(
        json["home_product_ids_under_100"],
        serde_json::json!(["P006", "P002", "P002"])
    );
}

#[test]
fn report_table_prints_section_titles() {
    let (root, csv) = sandbox(SAMPLE_CSV);
    let (ok, stdout, _) = run_reviewstats(
        &["report", "--no-color", "-f", csv.to_str().unwrap()],
        root.path(),
    );
    assert!(ok);

    let output = String::from_utf8(stdout).expect("utf8");
    assert!(output.contains("Loaded Reviews"));
    assert!(output.contains("Reviews with price between 20 and 100"));
    assert!(output.contains("Count by Product ID"));
    assert!(output.contains("Reviews containing 'great'"));
    assert!(output.contains("7 reviews loaded"));
}

#[test]
fn report_uses_config_defaults() {
    let (root, csv) = sandbox(SAMPLE_CSV);
    write_file(
        &root.path().join(".reviewstats.toml"),
        &format!(
            "file = {:?}\nmin_price = 100.0\nmax_price = 250.0\nkeyword = \"blender\"\n",
            csv.to_str().unwrap()
        ),
    );

    let (ok, stdout, stderr) = run_reviewstats(&["-j"], root.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json = json_stdout(&stdout);
    assert_eq!(json["price_range"]["reviews"].as_array().unwrap().len(), 2);
    assert_eq!(json["keyword"]["reviews"][0]["id"].as_i64(), Some(2));
}

#[test]
fn report_csv_is_rejected() {
    let (root, csv) = sandbox(SAMPLE_CSV);
    let (ok, _, stderr) = run_reviewstats(
        &["report", "--csv", "-f", csv.to_str().unwrap()],
        root.path(),
    );
    assert!(!ok);
    let err = String::from_utf8_lossy(&stderr);
    assert!(err.contains("not supported"), "stderr: {err}");
}

#[test]
fn list_csv_round_trips_through_loader() {
    let (root, csv) = sandbox(SAMPLE_CSV);
    let (ok, stdout, _) = run_reviewstats(
        &["list", "--csv", "-f", csv.to_str().unwrap()],
        root.path(),
    );
    assert!(ok);

    let exported = root.path().join("exported.csv");
    fs::write(&exported, &stdout).expect("write export");
    let (ok, stdout, stderr) = run_reviewstats(
        &["list", "-j", "-f", exported.to_str().unwrap()],
        root.path(),
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let json = json_stdout(&stdout);
    assert_eq!(json.as_array().unwrap().len(), 7);
    assert!(json[4]["title"].is_null());
}

#[test]
fn bundled_dataset_used_without_file() {
    let root = tempfile::tempdir().expect("create temp dir");
    let (ok, stdout, stderr) = run_reviewstats(&["list", "-j"], root.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    assert_eq!(json_stdout(&stdout).as_array().unwrap().len(), 10);
}

#[test]
fn quoted_values_after_blanks_load() {
    let (root, csv) = sandbox(
        "reviewId,title,category,productId,price\n9, \"Lamp, warm light\",Home,P008, \"18.99\"\n",
    );
    let (ok, stdout, stderr) = run_reviewstats(
        &["search", "lamp", "-j", "-f", csv.to_str().unwrap()],
        root.path(),
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let json = json_stdout(&stdout);
    assert_eq!(json[0]["title"], "Lamp, warm light");
    assert_eq!(json[0]["price"], 18.99);
}

#[test]
fn invalid_price_exits_with_error() {
    let (root, csv) = sandbox(
        "reviewId,title,category,productId,price\n1,Fine,Tech,P001,10\n2,Bad,Tech,P002,ten\n",
    );
    let (ok, stdout, stderr) = run_reviewstats(
        &["list", "-j", "-f", csv.to_str().unwrap()],
        root.path(),
    );
    assert!(!ok, "should fail on non-numeric price");
    assert!(stdout.is_empty(), "no partial output");
    let err = String::from_utf8_lossy(&stderr);
    assert!(err.contains("line 3"), "stderr: {err}");
    assert!(err.contains("invalid price \"ten\""), "stderr: {err}");
}

#[test]
fn missing_file_exits_with_error() {
    let root = tempfile::tempdir().expect("create temp dir");
    let missing = root.path().join("nope.csv");
    let (ok, _, stderr) = run_reviewstats(&["list", "-f", missing.to_str().unwrap()], root.path());
    assert!(!ok);
    let err = String::from_utf8_lossy(&stderr);
    assert!(err.starts_with("Error: "), "stderr: {err}");
    assert!(err.contains("nope.csv"), "stderr: {err}");
}

#[test]
fn missing_column_exits_with_error() {
    let (root, csv) = sandbox("reviewId,title,category,price\n1,a,Tech,10\n");
    let (ok, _, stderr) = run_reviewstats(&["count", "-f", csv.to_str().unwrap()], root.path());
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("productId"));
}

#[test]
fn inverted_price_range_is_empty_not_error() {
    let (root, csv) = sandbox(SAMPLE_CSV);
    let (ok, stdout, _) = run_reviewstats(
        &["price", "--min", "100", "--max", "20", "-j", "-f", csv.to_str().unwrap()],
        root.path(),
    );
    assert!(ok);
    assert_eq!(json_stdout(&stdout), serde_json::json!([]));
}

#[test]
fn unsupported_locale_exits_with_error() {
    let (root, csv) = sandbox(SAMPLE_CSV);
    let (ok, _, stderr) = run_reviewstats(
        &["list", "--locale", "xx", "-f", csv.to_str().unwrap()],
        root.path(),
    );
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Unsupported locale: xx"));
}
