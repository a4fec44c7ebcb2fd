mod classification_tests;
mod formatter_tests;

use std::sync::Once;

use parking_lot::{Mutex, MutexGuard};

static INIT_LOGGING: Once = Once::new();

pub(crate) fn init_logging() {
    INIT_LOGGING.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}

// The area code table is process-wide state and the harness runs tests on
// parallel threads; tests that install a configuration serialize on this
// and clear the table before releasing it.
static CONFIG_GUARD: Mutex<()> = Mutex::new(());

pub(crate) fn config_lock() -> MutexGuard<'static, ()> {
    CONFIG_GUARD.lock()
}
