use super::*;

fn press(code: &str, key: &str) -> KeyPress {
    KeyPress { code: code.to_owned(), key: key.to_owned(), alt: true, shift: true, ..KeyPress::default() }
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn default_chord_is_alt_shift_d() {
    assert_eq!("alt+shift+d".parse::<KeyChord>(), Ok(KeyChord::default()));
    assert_eq!(KeyChord::default().to_string(), "alt+shift+d");
}

#[test]
fn parse_accepts_aliases_and_case() {
    let chord: KeyChord = "Control + Cmd + K".parse().expect("chord");
    assert!(chord.ctrl && chord.meta);
    assert!(!chord.alt && !chord.shift);
    assert_eq!(chord.key, 'k');
    assert_eq!(chord.to_string(), "ctrl+meta+k");
}

#[test]
fn parse_rejects_bad_input() {
    assert_eq!("".parse::<KeyChord>(), Err(ChordError::Empty));
    assert_eq!("+ +".parse::<KeyChord>(), Err(ChordError::Empty));
    assert_eq!("d".parse::<KeyChord>(), Err(ChordError::NoModifier));
    assert_eq!("hyper+d".parse::<KeyChord>(), Err(ChordError::UnknownModifier("hyper".to_owned())));
    assert_eq!("alt+enter".parse::<KeyChord>(), Err(ChordError::InvalidKey("enter".to_owned())));
    assert_eq!("alt+é".parse::<KeyChord>(), Err(ChordError::InvalidKey("é".to_owned())));
}

// =============================================================
// Matching
// =============================================================

#[test]
fn matches_on_physical_code() {
    // macOS Option+Shift+D produces a symbol in `key`.
    assert!(KeyChord::default().matches(&press("KeyD", "Î")));
}

#[test]
fn matches_on_key_value_case_insensitive() {
    assert!(KeyChord::default().matches(&press("", "D")));
    assert!(KeyChord::default().matches(&press("", "d")));
}

#[test]
fn digit_chords_match_digit_code() {
    let chord: KeyChord = "ctrl+1".parse().expect("chord");
    let p = KeyPress { code: "Digit1".to_owned(), key: "!".to_owned(), ctrl: true, ..KeyPress::default() };
    assert!(chord.matches(&p));
}

#[test]
fn modifier_set_must_be_exact() {
    let mut p = press("KeyD", "d");
    p.ctrl = true;
    assert!(!KeyChord::default().matches(&p));

    let mut p = press("KeyD", "d");
    p.shift = false;
    assert!(!KeyChord::default().matches(&p));
}

#[test]
fn other_keys_do_not_match() {
    assert!(!KeyChord::default().matches(&press("KeyF", "f")));
}

#[test]
fn repeat_and_editable_focus_are_ignored() {
    let mut p = press("KeyD", "d");
    p.repeat = true;
    assert!(!KeyChord::default().matches(&p));

    let mut p = press("KeyD", "d");
    p.in_editable = true;
    assert!(!KeyChord::default().matches(&p));
}
