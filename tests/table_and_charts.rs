//! 결과표 열 구성과 차트 열 조회 테스트.
use engine_bench_toolbox::bench::chart::{ChartSpec, SeriesSpec};
use engine_bench_toolbox::bench::table::{self, format_value, ResultTable};
use engine_bench_toolbox::bench::{charts_for, tabulate_scenario, ChartError, EngineConstants, Scenario};

#[test]
fn part_a_table_has_bench_sheet_columns() {
    let t = tabulate_scenario(Scenario::VariableSpeed, &EngineConstants::default()).unwrap();
    assert_eq!(
        t.labels(),
        vec![
            "Speed (RPM)",
            "Torque (N * m)",
            "Power Shaft (W)",
            "Power Input (W)",
            "Efficiency (%)",
            "MEP (kPa)",
            "BSFC (g/(W*h))",
            "Exhaust Heat (W)",
            "Fins Heat (W)",
            "Air Mass Flow (kg/s)",
            "Fuel Mass Flow (kg/s)",
            "Delta T (delta_K)",
        ]
    );
    assert_eq!(t.row_count(), 6);
    let speed = t.column(table::COL_SPEED).unwrap();
    assert!((speed[5] - 4000.0).abs() < 1e-9);
    let dt = t.column(table::COL_DELTA_T).unwrap();
    assert_eq!(dt, &[247.0, 247.0, 247.0, 291.0, 330.0, 350.0]);
}

#[test]
fn part_b_table_leads_with_load_and_has_filled_torque() {
    let t = tabulate_scenario(Scenario::VariableLoad, &EngineConstants::default()).unwrap();
    assert_eq!(t.labels()[0], table::COL_PERCENT_LOAD);
    assert_eq!(t.column(table::COL_PERCENT_LOAD).unwrap()[0], 0.75);
    let torque = t.column(table::COL_TORQUE).unwrap();
    assert!((torque[5] - 3.6).abs() < 1e-9);
    let mep = t.column(table::COL_MEP).unwrap();
    assert!((mep[0] - 169.646).abs() < 1e-3);
    assert!((mep[1] - 226.195).abs() < 1e-3);
    assert_eq!(t.row(0).len(), t.columns().len());
}

#[test]
fn every_scenario_chart_resolves() {
    for scenario in Scenario::ALL {
        let t = tabulate_scenario(scenario, &EngineConstants::default()).unwrap();
        let charts = charts_for(scenario);
        assert_eq!(charts.len(), 3);
        for spec in &charts {
            let data = spec.resolve(&t).expect("columns exist");
            assert_eq!(data.lines.len(), spec.series.len());
            assert!(data.lines.iter().all(|l| l.points.len() == 6));
        }
    }
}

#[test]
fn part_b_power_chart_is_against_torque() {
    let t = tabulate_scenario(Scenario::VariableLoad, &EngineConstants::default()).unwrap();
    let chart = charts_for(Scenario::VariableLoad)[0].resolve(&t).unwrap();
    assert_eq!(chart.x_label, "Torque (N * m)");
    assert!(chart.has_legend());
    let shaft = &chart.lines[2];
    assert_eq!(shaft.legend.as_deref(), Some("Output Power: Shaft (mechanical)"));
    assert!((shaft.points[2][0] - 2.25).abs() < 1e-9);
}

#[test]
fn fuel_flow_chart_has_no_legend() {
    let t = tabulate_scenario(Scenario::VariableSpeed, &EngineConstants::default()).unwrap();
    let chart = charts_for(Scenario::VariableSpeed)[1].resolve(&t).unwrap();
    assert!(!chart.has_legend());
}

#[test]
fn missing_column_is_reported() {
    let spec = ChartSpec {
        title: "Broken",
        x_column: table::COL_SPEED,
        x_label: "Speed (RPM)",
        y_label: "?",
        series: vec![SeriesSpec {
            column: "Nope",
            legend: None,
        }],
    };
    let mut t = ResultTable::default();
    t.push(table::COL_SPEED, vec![1.0, 2.0]);
    assert_eq!(
        spec.resolve(&t).unwrap_err(),
        ChartError::MissingColumn {
            chart: "Broken".into(),
            column: "Nope".into()
        }
    );
}

#[test]
fn pretty_table_has_a_row_per_sample() {
    let t = tabulate_scenario(Scenario::VariableSpeed, &EngineConstants::default()).unwrap();
    let pretty = t.to_pretty_table(3);
    assert_eq!(pretty.len(), 6);
    let text = pretty.to_string();
    assert!(text.contains("Power Shaft (W)"));
    assert!(text.contains("282.743"));
}

#[test]
fn small_magnitudes_use_scientific_notation() {
    assert_eq!(format_value(282.743_338, 2), "282.74");
    assert_eq!(format_value(0.0015, 3), "1.50e-3");
    assert_eq!(format_value(0.0, 2), "0.00");
}
