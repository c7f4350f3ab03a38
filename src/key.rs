// src/key.rs - Classification of raw terminal bytes into key events

use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

/// A classified keystroke. Tab, Enter and Backspace get their own
/// variants even though they arrive as control bytes, so the dispatch
/// layer never has to remember that Tab is C-i on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Alt(char),
    AltBackspace,
    Arrow(Arrow),
    ShiftArrow(Arrow),
    Enter,
    Tab,
    Backspace,
    Unknown(u8),
}

fn arrow_of(byte: u8) -> Option<Arrow> {
    match byte {
        b'A' => Some(Arrow::Up),
        b'B' => Some(Arrow::Down),
        b'C' => Some(Arrow::Right),
        b'D' => Some(Arrow::Left),
        _ => None,
    }
}

/// Classify the front of a raw byte sequence. Returns the key and how
/// many bytes it consumed, or `None` when the sequence is a prefix of a
/// longer escape sequence and more bytes are needed.
///
/// Recognized forms: `ESC [ A..D` arrows, `ESC [ 1 ; 2 A..D`
/// shift-arrows, `ESC <ch>` meta, control bytes 0x00..0x1a (0x09 is Tab,
/// 0x0a and 0x0d are Enter), 0x08/0x7f backspace. This is a pure
/// function over the bytes; the blocking read lives in `read_key`.
pub fn classify(bytes: &[u8]) -> Option<(Key, usize)> {
    let first = *bytes.first()?;

    if first == 0x1b {
        let next = *bytes.get(1)?;
        if next != b'[' {
            return Some(match next {
                0x7f => (Key::AltBackspace, 2),
                b => (Key::Alt(b as char), 2),
            });
        }
        let third = *bytes.get(2)?;
        if let Some(arrow) = arrow_of(third) {
            return Some((Key::Arrow(arrow), 3));
        }
        if third.is_ascii_digit() {
            // Modified key: ESC [ 1 ; <mod> <final>. Only the shift
            // modifier (2) on arrows is meaningful to us.
            let semi = *bytes.get(3)?;
            if semi != b';' {
                return Some((Key::Unknown(semi), 4));
            }
            let modifier = *bytes.get(4)?;
            let last = *bytes.get(5)?;
            if modifier == b'2'
                && let Some(arrow) = arrow_of(last)
            {
                return Some((Key::ShiftArrow(arrow), 6));
            }
            return Some((Key::Unknown(last), 6));
        }
        return Some((Key::Unknown(third), 3));
    }

    let key = match first {
        0x0a | 0x0d => Key::Enter,
        0x09 => Key::Tab,
        0x08 | 0x7f => Key::Backspace,
        0x00 => Key::Ctrl(' '),
        0x01..=0x1a => Key::Ctrl((first - 0x01 + b'a') as char),
        0x20..=0x7e => Key::Char(first as char),
        b => Key::Unknown(b),
    };
    Some((key, 1))
}

/// Block until a whole key arrives on `input`. Bytes are pulled one at a
/// time and fed to `classify`, mirroring how the terminal delivers
/// escape sequences.
pub fn read_key(input: &mut impl Read) -> std::io::Result<Key> {
    let mut bytes = Vec::with_capacity(6);
    loop {
        let mut byte = [0u8; 1];
        input.read_exact(&mut byte)?;
        bytes.push(byte[0]);
        if let Some((key, _)) = classify(&bytes) {
            return Ok(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_characters() {
        assert_eq!(classify(b"a"), Some((Key::Char('a'), 1)));
        assert_eq!(classify(b" "), Some((Key::Char(' '), 1)));
        assert_eq!(classify(b"~"), Some((Key::Char('~'), 1)));
    }

    #[test]
    fn test_control_letters() {
        assert_eq!(classify(&[0x01]), Some((Key::Ctrl('a'), 1)));
        assert_eq!(classify(&[0x13]), Some((Key::Ctrl('s'), 1)));
        assert_eq!(classify(&[0x18]), Some((Key::Ctrl('x'), 1)));
    }

    #[test]
    fn test_special_control_bytes() {
        // Tab is C-i, Enter is C-j or CR, backspace is C-h or DEL.
        assert_eq!(classify(&[0x09]), Some((Key::Tab, 1)));
        assert_eq!(classify(&[0x0a]), Some((Key::Enter, 1)));
        assert_eq!(classify(&[0x0d]), Some((Key::Enter, 1)));
        assert_eq!(classify(&[0x08]), Some((Key::Backspace, 1)));
        assert_eq!(classify(&[0x7f]), Some((Key::Backspace, 1)));
        assert_eq!(classify(&[0x00]), Some((Key::Ctrl(' '), 1)));
    }

    #[test]
    fn test_arrows() {
        assert_eq!(classify(b"\x1b[A"), Some((Key::Arrow(Arrow::Up), 3)));
        assert_eq!(classify(b"\x1b[B"), Some((Key::Arrow(Arrow::Down), 3)));
        assert_eq!(classify(b"\x1b[C"), Some((Key::Arrow(Arrow::Right), 3)));
        assert_eq!(classify(b"\x1b[D"), Some((Key::Arrow(Arrow::Left), 3)));
    }

    #[test]
    fn test_shift_arrows() {
        assert_eq!(
            classify(b"\x1b[1;2A"),
            Some((Key::ShiftArrow(Arrow::Up), 6))
        );
        assert_eq!(
            classify(b"\x1b[1;2D"),
            Some((Key::ShiftArrow(Arrow::Left), 6))
        );
    }

    #[test]
    fn test_alt_keys() {
        assert_eq!(classify(b"\x1bf"), Some((Key::Alt('f'), 2)));
        assert_eq!(classify(b"\x1b<"), Some((Key::Alt('<'), 2)));
        assert_eq!(classify(&[0x1b, 0x7f]), Some((Key::AltBackspace, 2)));
    }

    #[test]
    fn test_incomplete_sequences_need_more_bytes() {
        assert_eq!(classify(b"\x1b"), None);
        assert_eq!(classify(b"\x1b["), None);
        assert_eq!(classify(b"\x1b[1;2"), None);
        assert_eq!(classify(b""), None);
    }

    #[test]
    fn test_unrecognized_csi_is_unknown() {
        let (key, _) = classify(b"\x1b[Z").unwrap();
        assert!(matches!(key, Key::Unknown(_)));
    }

    #[test]
    fn test_read_key_reassembles_split_sequence() {
        let mut input: &[u8] = b"\x1b[1;2Cx";
        assert_eq!(read_key(&mut input).unwrap(), Key::ShiftArrow(Arrow::Right));
        assert_eq!(read_key(&mut input).unwrap(), Key::Char('x'));
    }
}
