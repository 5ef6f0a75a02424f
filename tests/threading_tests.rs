use physics_json::{IdRegistry, PhysicsJson};
use std::sync::Arc;
use std::thread;

const SCENARIO: &str = include_str!("data/scenario.physics3.json");

#[test]
fn test_reader_and_registry_are_sync_and_send() {
    fn assert_sync_send<T: Sync + Send>() {}
    assert_sync_send::<PhysicsJson>();
    assert_sync_send::<IdRegistry>();
}

#[test]
fn test_shared_reader_across_threads() {
    let physics = Arc::new(PhysicsJson::parse_str(SCENARIO, Arc::new(IdRegistry::new())).unwrap());

    let mut handles = vec![];
    for _ in 0..4 {
        let physics = Arc::clone(&physics);
        handles.push(thread::spawn(move || physics.particle_position(0, 1).unwrap()));
    }

    for handle in handles {
        assert_eq!(handle.join().unwrap(), physics.particle_position(0, 1).unwrap());
    }
}

#[test]
fn test_concurrent_interning_yields_one_handle_per_name() {
    let ids = Arc::new(IdRegistry::new());

    let mut handles = vec![];
    for worker in 0..8 {
        let ids = Arc::clone(&ids);
        handles.push(thread::spawn(move || {
            let name = format!("ParamHair{}", worker % 2);
            ids.get_id(&name)
        }));
    }

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids.find("ParamHair0"), Some(results[0]));
    assert_eq!(ids.find("ParamHair1"), Some(results[1]));
}
