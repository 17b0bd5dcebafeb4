// Tests for the anomaly scan
//
// Reference "baedea" against the three analysis words of the end-to-end
// scenario.

use super::*;

const REFERENCE: &str = "baedea";
const ANALYSIS: [&str; 3] = ["aabaee", "eebeae", "eebaeb"];

fn offsets(report: &TarzanReport, symbols: &str) -> Vec<usize> {
    report
        .get(symbols)
        .unwrap_or_default()
        .iter()
        .map(|pair| pair.offset)
        .collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} got {}",
        expected,
        actual
    );
}

#[test]
fn test_preprocess_preserves_order() {
    let trees = preprocess(REFERENCE, &ANALYSIS);
    let texts: Vec<String> = trees.iter().map(SuffixTree::text_string).collect();
    assert_eq!(texts, ANALYSIS);
    assert!(trees
        .iter()
        .all(|tree| tree.node(tree.root()).children().count() > 0));
}

#[test]
fn test_thresholds_are_mean_plus_half_stddev() {
    let scanner = AnomalyScanner::new(REFERENCE, &ANALYSIS).unwrap();
    let thresholds = scanner.thresholds();

    assert_eq!(thresholds.len(), 3);
    assert_close(thresholds[0].mean, -43.5);
    assert_close(thresholds[0].std_dev, 40.342_836_346_053_37);
    assert_close(thresholds[0].value, -23.328_581_826_973_316);
    assert_close(thresholds[1].value, -15.386_187_771_244_11);
    assert_close(thresholds[2].value, -32.370_068_908_454_094);
}

#[test]
fn test_scan_reports_anomalous_windows() {
    let scanner = AnomalyScanner::new(REFERENCE, &ANALYSIS).unwrap();
    let report = scanner.scan(2).unwrap();

    assert_eq!(report.len(), 3);
    assert_eq!(offsets(&report, "aabaee"), vec![0, 1, 2, 3]);
    assert_eq!(offsets(&report, "eebeae"), vec![0, 1, 2]);
    assert_eq!(offsets(&report, "eebaeb"), vec![0, 1, 2, 3, 4]);

    let aabaee = report.get("aabaee").unwrap();
    assert_eq!(aabaee[0], SurprisePair::new(0, -103.0));
    assert_eq!(aabaee[1], SurprisePair::new(1, -75.0));
    assert_close(aabaee[2].surprise, -50.333_333_333_333_33);
    assert_close(aabaee[3].surprise, -25.666_666_666_666_664);
}

#[test]
fn test_longer_window_has_fewer_offsets() {
    let scanner = AnomalyScanner::new(REFERENCE, &ANALYSIS).unwrap();
    let report = scanner.scan(3).unwrap();
    assert_eq!(offsets(&report, "eebaeb"), vec![0, 1, 2, 3]);
}

#[test]
fn test_threshold_factor_changes_sensitivity() {
    let scanner = AnomalyScanner::new(REFERENCE, &ANALYSIS).unwrap();

    // factor 1.0 admits the -8 window of "aabaee"
    let strict = scanner.scan_with(2, 1.0).unwrap();
    assert_eq!(offsets(&strict, "aabaee"), vec![0, 1, 2, 3, 4]);

    // factor 0.0 compares against the mean alone
    let permissive = scanner.scan_with(2, 0.0).unwrap();
    assert_eq!(offsets(&permissive, "aabaee"), vec![0, 1, 2]);
    assert_eq!(offsets(&permissive, "eebaeb"), vec![0, 1, 4]);

    let configured = scanner.clone().with_threshold_factor(0.0);
    assert_eq!(configured.threshold_factor(), 0.0);
    assert_eq!(configured.scan(2).unwrap(), permissive);
}

#[test]
fn test_identical_strings_share_an_entry() {
    let scanner = AnomalyScanner::new(REFERENCE, &["aabaee", "aabaee"]).unwrap();
    let report = scanner.scan(2).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(offsets(&report, "aabaee"), vec![0, 1, 2, 3, 0, 1, 2, 3]);
}

#[test]
fn test_self_comparison_reports_nothing() {
    let scanner = AnomalyScanner::new(REFERENCE, &[REFERENCE]).unwrap();
    assert!(scanner.scan(2).unwrap().is_empty());

    let scanner = AnomalyScanner::new("cccccc", &["cccccc"]).unwrap();
    assert!(scanner.scan(2).unwrap().is_empty());
}

#[test]
fn test_zero_variance_reports_every_nonzero_window() {
    // every node of "bcbc" has surprise 0.5, so the threshold is 0.5 too
    let scanner = AnomalyScanner::new("abcb", &["bcbc"]).unwrap();
    let thresholds = scanner.thresholds();
    assert_close(thresholds[0].std_dev, 0.0);
    assert_eq!(offsets(&scanner.scan(2).unwrap(), "bcbc"), vec![0, 1, 2]);
}

#[test]
fn test_invalid_symbol_strings() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        AnomalyScanner::new(REFERENCE, &empty),
        Err(TarzanError::NoAnalysisSeries)
    ));
    assert!(matches!(
        AnomalyScanner::new("", &ANALYSIS),
        Err(TarzanError::EmptySymbolString { role: "reference" })
    ));
    assert!(matches!(
        AnomalyScanner::new(REFERENCE, &["ab", ""]),
        Err(TarzanError::EmptySymbolString { role: "analysis" })
    ));
}

#[test]
fn test_invalid_scanning_windows() {
    let scanner = AnomalyScanner::new(REFERENCE, &["aabaee", "abc"]).unwrap();
    assert!(matches!(scanner.scan(0), Err(TarzanError::ZeroScanningWindow)));
    assert!(matches!(
        scanner.scan(4),
        Err(TarzanError::ScanningWindowTooLong {
            window: 4,
            shortest: 3
        })
    ));
    assert!(scanner.scan(3).is_ok());
}

#[test]
fn test_unannotated_trees_report_nothing() {
    let scanner = AnomalyScanner::from_trees(vec![SuffixTree::new("aabaee")]);
    assert!(scanner.scan(2).unwrap().is_empty());
}

#[test]
fn test_no_trees_scan_to_empty_report() {
    let scanner = AnomalyScanner::from_trees(Vec::new());
    assert!(scanner.scan(5).unwrap().is_empty());
    assert!(scanner.thresholds().is_empty());
}

#[test]
fn test_invalid_threshold_factor_is_rejected() {
    let scanner = AnomalyScanner::new(REFERENCE, &ANALYSIS).unwrap();

    for factor in [f64::NAN, f64::INFINITY, -0.5] {
        assert!(matches!(
            scanner.scan_with(2, factor),
            Err(TarzanError::InvalidConfig(_))
        ));
    }

    let nan = scanner.clone().with_threshold_factor(f64::NAN);
    assert!(matches!(nan.scan(2), Err(TarzanError::InvalidConfig(_))));
}

#[test]
fn test_report_keeps_analysis_order() {
    let scanner = AnomalyScanner::new(REFERENCE, &["eebeae", "aabaee"]).unwrap();
    let report = scanner.scan(2).unwrap();

    let keys: Vec<&str> = report.iter().map(|(symbols, _)| symbols).collect();
    assert_eq!(keys, vec!["eebeae", "aabaee"]);
}
