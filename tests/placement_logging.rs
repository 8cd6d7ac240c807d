//! Placement exhaustion must reach the `log` channel, not just the
//! returned `failures`. The logger is process-global, so this binary
//! holds a single test.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{BoardGenerator, GameConfig, ShipKind};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn test_exhausted_placement_is_logged_as_warning() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    // A five-cell carrier can never fit on a 3x3 grid.
    let config = GameConfig::default()
        .with_grid_size(3)
        .with_placement_attempts(20)
        .with_fleet([ShipKind::AircraftCarrier, ShipKind::PatrolBoat]);
    let generator = BoardGenerator::new(&config).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let generated = generator.generate(&mut rng).unwrap();
    assert_eq!(generated.failures.len(), 1);

    let records = CAPTURE.records.lock().unwrap();
    let warnings: Vec<&str> = records
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, msg)| msg.as_str())
        .collect();
    assert!(
        warnings.contains(&"Failed to place Aircraft Carrier after 20 attempts"),
        "{:?}",
        warnings
    );
    assert!(
        warnings.contains(&"Ship length validation failed for Aircraft Carrier: expected 5, got 0"),
        "{:?}",
        warnings
    );
    // The patrol boat went down without complaint.
    assert!(!warnings.iter().any(|w| w.contains("Patrol Boat")));
    assert!(records
        .iter()
        .any(|(level, msg)| *level == Level::Debug && msg.starts_with("Placed Patrol Boat")));
}
