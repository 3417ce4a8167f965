//! End-to-end command-line scenarios

use quadrant_pi::cli::execute;
use quadrant_pi::Error;

#[test]
fn test_zero_iterations_rejected() {
    let err = execute(["prog", "5.0", "0"]).unwrap_err();

    assert!(matches!(err, Error::InvalidIterations));
    assert_eq!(
        err.to_string(),
        "Iterations N must be an integer greater or equal to one."
    );
}

#[test]
fn test_negative_radius_rejected() {
    let err = execute(["prog", "-1.0", "100"]).unwrap_err();

    assert!(matches!(err, Error::InvalidRadius));
    assert_eq!(err.to_string(), "Radius R must not be negative or zero.");
}

#[test]
fn test_valid_run_prints_report() {
    let output = execute(["prog", "5.0", "1000"]).unwrap();

    assert!(output.contains("-- SIMULATION RESULTS --"));
    assert!(output.contains("-- AREA --"));
    assert!(output.contains("area approximation:"));
    assert!(output.contains("real area: 19.634954."));
    assert!(output.contains("-- PI --"));
    assert!(output.contains("'real' PI: 3.141593."));
    assert_eq!(output.matches("relative deviation:").count(), 2);
}

#[test]
fn test_missing_argument_prints_usage() {
    let err = execute(["prog", "5.0"]).unwrap_err();

    match err {
        Error::Usage(text) => assert!(text.starts_with("Syntax: prog R N.")),
        other => panic!("expected usage error, got {:?}", other),
    }
}

#[test]
fn test_extra_argument_prints_usage() {
    let err = execute(["prog", "5.0", "10", "20"]).unwrap_err();
    assert!(matches!(err, Error::Usage(_)));
}

#[test]
fn test_no_arguments_prints_usage() {
    let err = execute(["prog"]).unwrap_err();
    assert!(matches!(err, Error::Usage(_)));
}

#[test]
fn test_malformed_radius() {
    let err = execute(["prog", "five", "10"]).unwrap_err();
    assert!(matches!(err, Error::Parse { name: "radius R", .. }));
}

#[test]
fn test_malformed_iterations() {
    let err = execute(["prog", "5.0", "many"]).unwrap_err();
    assert!(matches!(err, Error::Parse { name: "iterations N", .. }));
}

#[test]
fn test_json_format() {
    let output = execute(["prog", "2.0", "500", "--format", "json"]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["simulation"]["iterations"], 500);
    let inside = parsed["simulation"]["inside_count"].as_u64().unwrap();
    assert!(inside <= 500);
}

#[test]
fn test_unknown_format() {
    let err = execute(["prog", "2.0", "500", "--format", "xml"]).unwrap_err();
    assert!(matches!(err, Error::UnknownFormat(name) if name == "xml"));
}

#[test]
fn test_overflowing_radius_rejected() {
    let err = execute(["prog", "1e200", "1000"]).unwrap_err();
    assert!(matches!(err, Error::RadiusTooLarge));
}
