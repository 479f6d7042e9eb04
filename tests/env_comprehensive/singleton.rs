//! Singleton Tests
//!
//! This is the only module in the suite that touches the process-wide
//! environment, so the whole lifecycle is checked in one test.

use crate::*;

#[test]
fn test_global_is_single_instance() {
    init_tracing();

    let first = Env::global();
    assert!(Env::is_installed());

    // A second construction returns the existing instance instead of new state.
    let second = Env::builder().install().unwrap();
    let third = Env::global();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first, third));
    assert!(std::ptr::eq(first, optionvars::env()));
    assert!(std::ptr::eq(first.option_vars(), optionvars::option_vars()));

    first.option_vars().set("singleton", "shared").unwrap();
    assert_eq!(second.option_vars().get("singleton").unwrap(), "shared");
    assert_eq!(optionvars::option_vars().pop("singleton").unwrap(), "shared");
}
