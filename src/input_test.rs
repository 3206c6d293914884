use super::*;

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert_eq!(m, Modifiers::NONE);
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
}

#[test]
fn from_bits_decodes_shift_and_ctrl() {
    let m = Modifiers::from_bits(SHIFT_BIT | CTRL_BIT);
    assert!(m.shift);
    assert!(m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
}

#[test]
fn from_bits_ignores_unknown_bits() {
    let m = Modifiers::from_bits(0x0000_00ff | ALT_BIT);
    assert_eq!(m, Modifiers { alt: true, ..Default::default() });
}

#[test]
fn bits_round_trip() {
    for bits in [0, SHIFT_BIT, CTRL_BIT, ALT_BIT | META_BIT, SHIFT_BIT | CTRL_BIT | ALT_BIT | META_BIT] {
        assert_eq!(Modifiers::from_bits(bits).bits(), bits);
    }
}
