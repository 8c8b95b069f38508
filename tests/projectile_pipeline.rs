// tests/projectile_pipeline.rs
//! End-to-end: config -> simulation -> canvas -> file

use lumen::io::{save_png, write_ppm};
use lumen::physics::{simulate, SimulationConfig};
use lumen::Color;

#[test]
fn test_config_file_drives_simulation_and_export() {
    println!("=== Projectile pipeline ===");

    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("sim.toml");
    std::fs::write(
        &config_path,
        r#"
            speed = 6.0
            gravity = [0.0, -0.2, 0.0]

            [canvas]
            width = 200
            height = 120

            [color]
            red = 0.0
            green = 1.0
            blue = 0.0
        "#,
    )
    .unwrap();

    let config = SimulationConfig::load(&config_path).unwrap();
    let run = simulate(&config).unwrap();
    println!("ticks = {}, plotted = {}", run.ticks, run.plotted);

    assert!(run.last.position.y <= 0.0);
    assert!(run.plotted > 0);
    assert_eq!(run.canvas.pixel_at(0, 119).unwrap(), Color::new(0.0, 1.0, 0.0));

    let ppm_path = dir.path().join("out.ppm");
    write_ppm(&run.canvas, &ppm_path).unwrap();
    let text = std::fs::read_to_string(&ppm_path).unwrap();
    assert!(text.starts_with("P3\n200 120\n255\n"));
    assert_eq!(text.lines().count(), 3 + 120);
    assert!(text.contains("0 255 0"));

    let png_path = dir.path().join("out.png");
    save_png(&run.canvas, &png_path).unwrap();
    assert!(std::fs::metadata(&png_path).unwrap().len() > 0);
}

#[test]
fn test_missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SimulationConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read config file"));
}
