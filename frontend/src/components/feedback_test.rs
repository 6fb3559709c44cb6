use super::*;

#[test]
fn label_swaps_while_acknowledged() {
    assert_eq!(button_label("Save Settings", true), "Saved ✓");
    assert_eq!(button_label("Save Settings", false), "Save Settings");
}

#[test]
fn feedback_lasts_under_a_second() {
    assert_eq!(FEEDBACK_MS, 900);
}
