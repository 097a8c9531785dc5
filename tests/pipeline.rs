use route_plots::{Config, PlotError, pipeline};

use serde_pickle::SerOptions;
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

fn test_config(dir: &Path) -> Config {
    Config {
        weights_csv: dir.join("weights.csv"),
        stats_csv: dir.join("ls.csv"),
        routes_dir: dir.join("routes"),
        plots_dir: dir.join("plots"),
    }
}

fn write_weights_csv(dir: &Path) {
    fs::write(
        dir.join("weights.csv"),
        "map;mst_weight;dfs_weight;random_min\n\
         3;300;330;360\n\
         1;100;110;120\n\
         2;200;220;240\n",
    )
    .unwrap();
}

fn write_stats_csv(dir: &Path) {
    fs::write(
        dir.join("ls.csv"),
        "map;mst_weight;dfs_steps;dfs_mean;dfs_min;random_steps;random_mean;random_min;mod_random_steps;mod_random_mean;mod_random_min\n\
         10;100;5;120;110;8;150;130;6;140;125\n\
         20;210;7;260;230;9;300;270;8;280;250\n",
    )
    .unwrap();
}

fn write_route(path: &Path, points: &[(f64, f64)]) {
    let mut file = File::create(path).unwrap();
    serde_pickle::to_writer(&mut file, &points.to_vec(), SerOptions::new()).unwrap();
}

fn assert_image(path: &Path) {
    assert!(path.exists(), "missing image: {}", path.display());
    assert!(fs::metadata(path).unwrap().len() > 0);
}

#[test]
fn weights_pipeline_with_empty_routes_dir() {
    let dir = TempDir::new().unwrap();
    write_weights_csv(dir.path());
    fs::create_dir(dir.path().join("routes")).unwrap();

    let config = test_config(dir.path());
    let route_count = pipeline::run_weights(&config).unwrap();

    assert_eq!(route_count, 0);
    assert_image(&config.plots_dir.join("weights.png"));
    // nothing but the weight chart was written
    assert_eq!(fs::read_dir(&config.plots_dir).unwrap().count(), 1);
}

#[test]
fn weights_pipeline_renders_route_polygons() {
    let dir = TempDir::new().unwrap();
    write_weights_csv(dir.path());
    let routes = dir.path().join("routes");
    fs::create_dir(&routes).unwrap();
    write_route(
        &routes.join("dfs_4_route.bin"),
        &[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
    );
    write_route(
        &routes.join("rand_3_route.bin"),
        &[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)],
    );
    fs::write(routes.join("ignored.txt"), b"not a route").unwrap();

    let config = test_config(dir.path());
    let route_count = pipeline::run_weights(&config).unwrap();

    assert_eq!(route_count, 2);
    assert_image(&config.plots_dir.join("weights.png"));
    assert_image(&config.plots_dir.join("dfs_4_route.png"));
    assert_image(&config.plots_dir.join("rand_3_route.png"));
}

#[test]
fn weights_pipeline_skips_corrupt_route_and_continues() {
    let dir = TempDir::new().unwrap();
    write_weights_csv(dir.path());
    let routes = dir.path().join("routes");
    fs::create_dir(&routes).unwrap();
    fs::write(routes.join("corrupt_route.bin"), b"\xff\xfe garbage").unwrap();
    write_route(
        &routes.join("good_route.bin"),
        &[(0.0, 0.0), (3.0, 0.0), (1.5, 2.0)],
    );

    let config = test_config(dir.path());
    let route_count = pipeline::run_weights(&config).unwrap();

    assert_eq!(route_count, 1);
    assert_image(&config.plots_dir.join("good_route.png"));
    assert!(!config.plots_dir.join("corrupt_route.png").exists());
}

#[test]
fn weights_pipeline_fails_without_input_table() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("routes")).unwrap();

    let config = test_config(dir.path());
    let result = pipeline::run_weights(&config);

    assert!(result.is_err());
    assert!(!config.plots_dir.join("weights.png").exists());
}

#[test]
fn stats_pipeline_writes_three_group_charts() {
    let dir = TempDir::new().unwrap();
    write_stats_csv(dir.path());

    let config = test_config(dir.path());
    pipeline::run_stats(&config).unwrap();

    assert_image(&config.plots_dir.join("mean_weights.png"));
    assert_image(&config.plots_dir.join("steps.png"));
    assert_image(&config.plots_dir.join("min_weight.png"));
}

#[test]
fn stats_pipeline_fails_before_writing_chart_with_missing_column() {
    let dir = TempDir::new().unwrap();
    // dfs_steps is absent
    fs::write(
        dir.path().join("ls.csv"),
        "map;mst_weight;dfs_mean;dfs_min;random_steps;random_mean;random_min;mod_random_steps;mod_random_mean;mod_random_min\n\
         10;100;120;110;8;150;130;6;140;125\n",
    )
    .unwrap();

    let config = test_config(dir.path());
    let result = pipeline::run_stats(&config);

    match result {
        Err(PlotError::MissingColumn { name }) => assert_eq!(name, "dfs_steps"),
        other => panic!("unexpected: {other:?}"),
    }
    // the failed group left no partial file behind
    assert!(!config.plots_dir.join("steps.png").exists());
    assert!(!config.plots_dir.join("min_weight.png").exists());
}
