//! Translation between raw button codes and the symbolic button vocabulary.
//!
//! Letters are named by their uppercase character ("A"), digits by the digit
//! ("7"), everything else by a fixed symbolic name ("Escape", "LMB", ...).
//! Codes outside the vocabulary are reported as `Key_<code>`.

use log::trace;
use winit::event::MouseButton;
use winit::keyboard::{KeyCode, NativeKeyCode};

use crate::core::errors::UnrecognizedButton;
use crate::core::input::button_code::ButtonCode;

const LETTER_KEYS: [KeyCode; 26] = [
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
    KeyCode::KeyM,
    KeyCode::KeyN,
    KeyCode::KeyO,
    KeyCode::KeyP,
    KeyCode::KeyQ,
    KeyCode::KeyR,
    KeyCode::KeyS,
    KeyCode::KeyT,
    KeyCode::KeyU,
    KeyCode::KeyV,
    KeyCode::KeyW,
    KeyCode::KeyX,
    KeyCode::KeyY,
    KeyCode::KeyZ,
];

const DIGIT_KEYS: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

// Several codes may share a name (left/right modifiers). The first entry for a
// name is its primary code.
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("Shift", KeyCode::ShiftLeft),
    ("Shift", KeyCode::ShiftRight),
    ("Alt", KeyCode::AltLeft),
    ("Alt", KeyCode::AltRight),
    ("Control", KeyCode::ControlLeft),
    ("Control", KeyCode::ControlRight),
    ("Escape", KeyCode::Escape),
    ("Return", KeyCode::Enter),
    ("Tab", KeyCode::Tab),
    ("BackSpace", KeyCode::Backspace),
    (" ", KeyCode::Space),
    ("Up", KeyCode::ArrowUp),
    ("Down", KeyCode::ArrowDown),
    ("Left", KeyCode::ArrowLeft),
    ("Right", KeyCode::ArrowRight),
    ("CapsLock", KeyCode::CapsLock),
    ("F1", KeyCode::F1),
    ("F2", KeyCode::F2),
    ("F3", KeyCode::F3),
    ("F4", KeyCode::F4),
    ("F5", KeyCode::F5),
    ("F6", KeyCode::F6),
    ("F7", KeyCode::F7),
    ("F8", KeyCode::F8),
    ("F9", KeyCode::F9),
    ("F10", KeyCode::F10),
    ("F11", KeyCode::F11),
    ("F12", KeyCode::F12),
    ("Insert", KeyCode::Insert),
    ("Delete", KeyCode::Delete),
    ("Home", KeyCode::Home),
    ("End", KeyCode::End),
    ("PageUp", KeyCode::PageUp),
    ("PageDown", KeyCode::PageDown),
    ("Numpad0", KeyCode::Numpad0),
    ("Numpad1", KeyCode::Numpad1),
    ("Numpad2", KeyCode::Numpad2),
    ("Numpad3", KeyCode::Numpad3),
    ("Numpad4", KeyCode::Numpad4),
    ("Numpad5", KeyCode::Numpad5),
    ("Numpad6", KeyCode::Numpad6),
    ("Numpad7", KeyCode::Numpad7),
    ("Numpad8", KeyCode::Numpad8),
    ("Numpad9", KeyCode::Numpad9),
    ("NumpadDecimal", KeyCode::NumpadDecimal),
    ("NumpadDivide", KeyCode::NumpadDivide),
    ("NumpadMultiply", KeyCode::NumpadMultiply),
    ("NumpadSubtract", KeyCode::NumpadSubtract),
    ("NumpadAdd", KeyCode::NumpadAdd),
    ("NumpadEnter", KeyCode::NumpadEnter),
];

const NAMED_MOUSE_BUTTONS: &[(&str, MouseButton)] = &[
    ("LMB", MouseButton::Left),
    ("MMB", MouseButton::Middle),
    ("RMB", MouseButton::Right),
];

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8; 10] = b"0123456789";

/// Symbolic name for `code`, or `UnrecognizedButton` when it has none.
pub fn button_code_to_name(code: ButtonCode) -> Result<String, UnrecognizedButton> {
    match code {
        ButtonCode::Key(key) => {
            if let Some(index) = LETTER_KEYS.iter().position(|&k| k == key) {
                return Ok(char::from(LETTERS[index]).to_string());
            }
            if let Some(index) = DIGIT_KEYS.iter().position(|&k| k == key) {
                return Ok(char::from(DIGITS[index]).to_string());
            }
            NAMED_KEYS
                .iter()
                .find(|(_, k)| *k == key)
                .map(|(name, _)| (*name).to_owned())
                .ok_or_else(|| UnrecognizedButton::Code(raw_code(code)))
        }
        ButtonCode::Mouse(button) => NAMED_MOUSE_BUTTONS
            .iter()
            .find(|(_, b)| *b == button)
            .map(|(name, _)| (*name).to_owned())
            .ok_or_else(|| UnrecognizedButton::Code(raw_code(code))),
        ButtonCode::Native(_) => Err(UnrecognizedButton::Code(raw_code(code))),
    }
}

/// Like `button_code_to_name`, but substitutes `Key_<code>` for codes outside
/// the vocabulary so event delivery never stops on an unknown key.
#[must_use]
pub fn button_name(code: ButtonCode) -> String {
    match button_code_to_name(code) {
        Ok(name) => name,
        Err(err) => {
            trace!("Input: {err}.");
            format!("Key_{}", raw_code(code))
        }
    }
}

/// Every raw code carrying `name`. Single letters are matched case-insensitively.
pub fn name_to_button_codes(name: &str) -> Result<Vec<ButtonCode>, UnrecognizedButton> {
    if let [byte] = name.as_bytes() {
        let upper = byte.to_ascii_uppercase();
        if let Some(index) = LETTERS.iter().position(|&c| c == upper) {
            return Ok(vec![ButtonCode::Key(LETTER_KEYS[index])]);
        }
        if let Some(index) = DIGITS.iter().position(|&c| c == upper) {
            return Ok(vec![ButtonCode::Key(DIGIT_KEYS[index])]);
        }
    }

    let codes: Vec<ButtonCode> = NAMED_KEYS
        .iter()
        .filter(|(n, _)| *n == name)
        .map(|(_, key)| ButtonCode::Key(*key))
        .chain(
            NAMED_MOUSE_BUTTONS
                .iter()
                .filter(|(n, _)| *n == name)
                .map(|(_, button)| ButtonCode::Mouse(*button)),
        )
        .collect();

    if codes.is_empty() {
        return Err(UnrecognizedButton::Name(name.to_owned()));
    }

    Ok(codes)
}

fn raw_code(code: ButtonCode) -> String {
    match code {
        ButtonCode::Key(key) => format!("{key:?}"),
        ButtonCode::Mouse(MouseButton::Other(id)) => id.to_string(),
        ButtonCode::Mouse(button) => format!("{button:?}"),
        ButtonCode::Native(native) => match native {
            NativeKeyCode::Android(code) | NativeKeyCode::Xkb(code) => code.to_string(),
            NativeKeyCode::MacOS(code) | NativeKeyCode::Windows(code) => code.to_string(),
            NativeKeyCode::Unidentified => "Unidentified".to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_use_their_character() {
        assert_eq!(button_name(ButtonCode::Key(KeyCode::KeyW)), "W");
        assert_eq!(button_name(ButtonCode::Key(KeyCode::Digit7)), "7");
    }

    #[test]
    fn named_keys_and_mouse_buttons_use_vocabulary() {
        assert_eq!(button_name(ButtonCode::Key(KeyCode::Escape)), "Escape");
        assert_eq!(button_name(ButtonCode::Key(KeyCode::Space)), " ");
        assert_eq!(button_name(ButtonCode::Key(KeyCode::NumpadEnter)), "NumpadEnter");
        assert_eq!(button_name(ButtonCode::Mouse(MouseButton::Left)), "LMB");
        assert_eq!(button_name(ButtonCode::Mouse(MouseButton::Right)), "RMB");
    }

    #[test]
    fn right_modifiers_share_left_names() {
        assert_eq!(button_name(ButtonCode::Key(KeyCode::ShiftRight)), "Shift");
        assert_eq!(button_name(ButtonCode::Key(KeyCode::ControlRight)), "Control");
        assert_eq!(button_name(ButtonCode::Key(KeyCode::AltRight)), "Alt");
    }

    #[test]
    fn unknown_codes_fall_back_to_synthetic_name() {
        assert!(button_code_to_name(ButtonCode::Key(KeyCode::F13)).is_err());
        assert_eq!(button_name(ButtonCode::Key(KeyCode::F13)), "Key_F13");
        assert_eq!(
            button_name(ButtonCode::Native(NativeKeyCode::Xkb(166))),
            "Key_166"
        );
        assert_eq!(button_name(ButtonCode::Mouse(MouseButton::Other(9))), "Key_9");
    }

    #[test]
    fn single_letter_names_are_case_insensitive() {
        assert_eq!(
            name_to_button_codes("w"),
            Ok(vec![ButtonCode::Key(KeyCode::KeyW)])
        );
        assert_eq!(
            name_to_button_codes("W"),
            Ok(vec![ButtonCode::Key(KeyCode::KeyW)])
        );
    }

    #[test]
    fn modifier_names_resolve_to_both_sides() {
        assert_eq!(
            name_to_button_codes("Shift"),
            Ok(vec![
                ButtonCode::Key(KeyCode::ShiftLeft),
                ButtonCode::Key(KeyCode::ShiftRight)
            ])
        );
    }

    #[test]
    fn unknown_names_are_reported() {
        assert_eq!(
            name_to_button_codes("Hyper"),
            Err(UnrecognizedButton::Name("Hyper".to_owned()))
        );
    }

    #[test]
    fn every_named_key_round_trips_to_its_primary_code() {
        for (name, key) in NAMED_KEYS {
            let codes = name_to_button_codes(name).expect("vocabulary name resolves");
            assert!(codes.contains(&ButtonCode::Key(*key)));
            assert_eq!(button_name(ButtonCode::Key(*key)), *name);
        }
    }
}
