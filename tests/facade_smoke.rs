use antigrav_engine::Simulation;

#[test]
fn headless_simulation_runs_commands_and_steps() {
    let mut sim = Simulation::new(400, 300);
    assert_eq!(sim.width(), 400);
    assert_eq!(sim.height(), 300);

    for _ in 0..10 {
        sim.spawn_random();
    }
    let id = sim.spawn(50.0, 50.0, Some(12.0), Some("#ff0066".to_string()));
    assert!(id > 0);
    sim.spawn_at(100.0, 100.0);
    assert_eq!(sim.body_count(), 12);

    for _ in 0..120 {
        sim.step();
    }
    assert_eq!(sim.frame(), 120);

    for i in 0..sim.body_count() {
        let x = sim.body_x(i).unwrap();
        let y = sim.body_y(i).unwrap();
        assert!((0.0..=400.0).contains(&x));
        assert!((0.0..=300.0).contains(&y));
    }
    assert!(sim.body_x(999).is_none());

    sim.clear();
    assert_eq!(sim.body_count(), 0);
}

#[test]
fn gravity_text_input_is_validated() {
    let mut sim = Simulation::new(200, 200);
    sim.set_gravity("1.75");
    assert_eq!(sim.gravity(), 1.75);

    sim.set_gravity("not a number");
    assert_eq!(sim.gravity(), 1.75);
}

#[test]
fn zone_toggle_reports_state_and_tracks_pointer() {
    let mut sim = Simulation::new(500, 300);
    assert!(sim.toggle_anti_gravity_zone());
    assert!(sim.zone_active());
    assert_eq!((sim.zone_x(), sim.zone_y()), (250.0, 150.0));

    sim.update_pointer(40.0, 60.0);
    assert_eq!((sim.zone_x(), sim.zone_y()), (40.0, 60.0));

    assert!(!sim.toggle_anti_gravity_zone());
    assert!(!sim.zone_active());
}

#[test]
fn drag_round_trip_through_facade() {
    let mut sim = Simulation::new(400, 400);
    sim.spawn(100.0, 100.0, None, None);

    assert!(!sim.begin_drag(300.0, 300.0));
    assert!(sim.begin_drag(100.0, 100.0));

    sim.update_pointer(222.0, 111.0);
    sim.step();
    assert_eq!(sim.body_x(0), Some(222.0));
    assert_eq!(sim.body_y(0), Some(111.0));

    sim.end_drag();
    sim.step();
    assert!(sim.body_y(0).unwrap() > 111.0);
}

#[test]
fn settings_json_configures_construction() {
    let json = r#"{"gravity": 0, "bodyRadius": 8, "seed": 99}"#;
    let mut sim = Simulation::with_settings(300, 300, json).unwrap();
    assert_eq!(sim.gravity(), 0.0);

    sim.spawn_at(150.0, 150.0);
    let exported = sim.settings_json();
    assert!(exported.contains("\"bodyRadius\":8"));
    assert!(exported.contains("\"seed\":99"));
}

#[test]
fn perf_smoke_step() {
    let mut sim = Simulation::new(640, 480);
    sim.enable_perf_metrics(true);
    for _ in 0..200 {
        sim.spawn_random();
    }
    sim.step();
    let stats = sim.get_perf_stats();
    assert!(stats.update_ms() >= 0.0);
    assert_eq!(stats.body_count(), 200);
    assert_eq!(stats.frame(), 1);
}
