use clatter_engine::Simulation;

#[test]
fn facade_smoke_register_step_and_read_back() {
    let mut sim = Simulation::new();

    assert_eq!(sim.add_body(100.0, 200.0, 60.0), 0);
    assert_eq!(sim.add_body(220.0, 200.0, 60.0), 1);
    assert_eq!(sim.add_body(0.0, 0.0, -5.0), -1); // skipped, no id burned
    assert_eq!(sim.add_body(340.0, 200.0, 60.0), 2);
    assert_eq!(sim.body_count(), 3);

    sim.set_pointer(100.0, 200.0);
    for tick in 0..60 {
        sim.step(tick as f64 * 16.0);
    }

    // The pointer sat on body 0: it must have moved, and the buffer the
    // render host reads mirrors the per-body getters.
    assert!(sim.body_x(0) != 0.0);
    assert_eq!(sim.offsets_len(), 3);
    for i in 0..3 {
        assert!(sim.body_x(i).is_finite());
        assert!(sim.body_x(i).abs() <= 300.0);
    }
    assert_eq!(sim.frame(), 60);

    // Released input decays everything back toward rest.
    sim.clear_pointer();
    for tick in 60..2060 {
        sim.step(tick as f64 * 16.0);
    }
    for i in 0..3 {
        assert!(sim.body_x(i).abs() < 0.01);
    }
}

#[test]
fn playback_queue_drains_per_step() {
    let mut sim = Simulation::new();
    sim.add_body(100.0, 200.0, 60.0);
    sim.add_body(200.0, 200.0, 60.0);

    // Slam the pair together hard enough to be audible.
    sim.set_pointer(40.0, 200.0);
    let mut saw_playback = false;
    for tick in 0..120 {
        sim.step(tick as f64 * 16.0);
        for i in 0..sim.playback_count() {
            saw_playback = true;
            assert!(sim.playback_voice(i) < 8);
            let volume = sim.playback_volume(i);
            assert!(volume >= 0.05 && volume <= 0.6);
            sim.voice_ended(sim.playback_voice(i));
        }
    }
    assert!(saw_playback);
    assert_eq!(sim.idle_voices(), 8);
}
