use std::panic;
use std::sync::atomic::{AtomicUsize, Ordering};

use matrix_rain::term::renderer::install_panic_hook_with;

static RESTORED: AtomicUsize = AtomicUsize::new(0);

#[test]
fn panic_hook_restores_terminal() {
    install_panic_hook_with(|| {
        RESTORED.fetch_add(1, Ordering::SeqCst);
    });

    let result = panic::catch_unwind(|| panic!("frame render failed"));
    let _ = panic::take_hook();

    assert!(result.is_err());
    assert_eq!(RESTORED.load(Ordering::SeqCst), 1);
}
