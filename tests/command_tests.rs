use oc_dfg_studio::commands::{
    execute_dfg, execute_graph, resolve_default_file, resolve_inputs, DfgArgs, GraphArgs, InputArgs,
};
use oc_dfg_studio::output::read_dfg;
use oc_dfg_studio::parser::DfgEdge;
use oc_dfg_studio::utils::InputError;
use std::path::Path;

const EVENT_LOG: &str = "\
case_id,activity,timestamp
order-1,Create Order,2024-05-01T09:00:00Z
order-1,Ship Order,2024-05-02T09:00:00Z
";

const OCEL: &str = r#"{
  "objects": [
    {"id": "order-1", "type": "order", "attributes": {"total": 10}},
    {"id": "item-1", "type": "item", "attributes": {}}
  ],
  "events": [
    {"id": "evt-1", "activity": "Create Order", "timestamp": "2024-05-01T09:00:00Z", "omap": ["order-1", "item-1"]},
    {"id": "evt-2", "activity": "Ship Order", "timestamp": "2024-05-02T09:00:00Z", "omap": ["order-1"]}
  ]
}"#;

fn write_raw_dir(dir: &Path, ocel: &str) {
    std::fs::write(dir.join("orders.csv"), EVENT_LOG).unwrap();
    std::fs::write(dir.join("orders.ocel.json"), ocel).unwrap();
}

#[test]
fn test_resolve_default_file_picks_first_by_name() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("b.csv"), "").unwrap();
    std::fs::write(temp_dir.path().join("a.csv"), "").unwrap();
    std::fs::write(temp_dir.path().join(".hidden.csv"), "").unwrap();
    std::fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

    let found = resolve_default_file(temp_dir.path(), "*.csv").unwrap();
    assert_eq!(found.file_name().unwrap(), "a.csv");
}

#[test]
fn test_resolve_default_file_missing_input() {
    let temp_dir = tempfile::tempdir().unwrap();

    let err = resolve_default_file(temp_dir.path(), "*.ocel.json").unwrap_err();
    assert!(matches!(err, InputError::MissingInput { .. }));
    assert!(err.to_string().contains("*.ocel.json"));

    let missing_dir = temp_dir.path().join("does-not-exist");
    assert!(resolve_default_file(&missing_dir, "*.csv").is_err());
}

#[test]
fn test_missing_ocel_fails_before_processing() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("orders.csv"), EVENT_LOG).unwrap();
    let out_dir = temp_dir.path().join("out");

    let args = DfgArgs {
        inputs: InputArgs {
            raw_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        },
        dfg_out: out_dir.join("oc_dfg.json"),
        report_out: out_dir.join("report.md"),
        print_summary: false,
    };

    let err = execute_dfg(&args).unwrap_err();
    assert!(err.downcast_ref::<InputError>().is_some());
    assert!(!out_dir.exists());
}

#[test]
fn test_explicit_paths_override_discovery() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_raw_dir(temp_dir.path(), OCEL);
    let explicit = temp_dir.path().join("other.ocel.json");
    std::fs::write(&explicit, OCEL).unwrap();

    let resolved = resolve_inputs(&InputArgs {
        raw_dir: temp_dir.path().join("unused"),
        event_log: Some(temp_dir.path().join("orders.csv")),
        ocel: Some(explicit),
    })
    .unwrap();

    assert_eq!(resolved.ocel.file_name().unwrap(), "other.ocel.json");
    assert_eq!(resolved.log_name(), "orders");
}

#[test]
fn test_execute_dfg_end_to_end() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_raw_dir(temp_dir.path(), OCEL);

    let args = DfgArgs {
        inputs: InputArgs {
            raw_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        },
        dfg_out: temp_dir.path().join("processed/oc_dfg.json"),
        report_out: temp_dir.path().join("processed/oc_dfg_report.md"),
        print_summary: false,
    };

    let (dfg_path, report_path) = execute_dfg(&args).unwrap();

    let document = read_dfg(&dfg_path).unwrap();
    assert_eq!(document.meta.object_types, vec!["order"]);
    assert!(document.meta.event_log_path.ends_with("orders.csv"));
    assert_eq!(
        document.oc_dfg["order"],
        vec![DfgEdge::new("Create Order", "Ship Order", 1)]
    );

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("- Event log rows: 2"));
    assert!(report.contains("- OCEL objects: 2"));
    assert!(report.contains("- item: 1"));
    assert!(report.contains("### item\n- No transitions"));
    assert!(report.contains("- Create Order -> Ship Order (count=1)"));
}

#[test]
fn test_execute_dfg_rejects_malformed_timestamp() {
    let temp_dir = tempfile::tempdir().unwrap();
    let broken = OCEL.replace("2024-05-02T09:00:00Z", "02/05/2024");
    write_raw_dir(temp_dir.path(), &broken);

    let args = DfgArgs {
        inputs: InputArgs {
            raw_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        },
        dfg_out: temp_dir.path().join("oc_dfg.json"),
        report_out: temp_dir.path().join("report.md"),
        print_summary: false,
    };

    let err = execute_dfg(&args).unwrap_err();
    assert!(format!("{:#}", err).contains("evt-2"));
    assert!(!temp_dir.path().join("oc_dfg.json").exists());
}

#[test]
fn test_execute_graph_writes_both_images() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_raw_dir(temp_dir.path(), OCEL);
    let out_dir = temp_dir.path().join("graphs");

    let args = GraphArgs {
        inputs: InputArgs {
            raw_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        },
        out_dir: out_dir.clone(),
        ..Default::default()
    };

    let (dfg_png, pn_png) = execute_graph(&args).unwrap();

    assert_eq!(dfg_png, out_dir.join("orders-oc-dfg.png"));
    assert_eq!(pn_png, out_dir.join("orders-oc-pn.png"));

    let dfg_img = image::open(&dfg_png).unwrap();
    assert_eq!((dfg_img.width(), dfg_img.height()), (1200, 520));
    let pn_img = image::open(&pn_png).unwrap();
    assert_eq!((pn_img.width(), pn_img.height()), (1200, 540));
}

#[test]
fn test_execute_graph_with_no_events() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_raw_dir(temp_dir.path(), r#"{"objects": [], "events": []}"#);

    let args = GraphArgs {
        inputs: InputArgs {
            raw_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        },
        out_dir: temp_dir.path().join("graphs"),
        width: 800,
    };

    let (dfg_png, _) = execute_graph(&args).unwrap();
    let img = image::open(&dfg_png).unwrap();
    assert_eq!(img.width(), 800);
}
