// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#[cfg(test)]
mod tests {
    use crate::{assert_eq2, Keypress, ReadlineKeyDescriptor};

    fn descriptor() -> ReadlineKeyDescriptor { ReadlineKeyDescriptor::default() }

    #[test]
    fn test_code_lookup_resolves_left_arrow() {
        let raw = ReadlineKeyDescriptor {
            code: Some("[D".to_owned()),
            ..descriptor()
        };
        let keypress = Keypress::from_readline(Some(&raw), None);
        assert_eq2!(keypress.to_string(), "leftarrow");
        assert_eq2!(keypress.is_special_key(), true);
    }

    #[test]
    fn test_code_lookup_matches_by_substring_containment() {
        // Containment, not equality: the raw code only has to contain the
        // table fragment somewhere.
        let raw = ReadlineKeyDescriptor {
            code: Some("x[Dy".to_owned()),
            ..descriptor()
        };
        let keypress = Keypress::from_readline(Some(&raw), None);
        assert_eq2!(keypress.to_string(), "leftarrow");
    }

    #[test]
    fn test_code_beats_name_beats_sequence() {
        // The descriptor matches all three tables with three different keys;
        // code must win.
        let raw = ReadlineKeyDescriptor {
            code: Some("[A".to_owned()),
            name: Some("backspace".to_owned()),
            sequence: Some("\x1b[B".to_owned()),
            ..descriptor()
        };
        let keypress = Keypress::from_readline(Some(&raw), None);
        assert_eq2!(keypress.to_string(), "uparrow");

        // Without a code, name wins over sequence.
        let raw = ReadlineKeyDescriptor {
            name: Some("backspace".to_owned()),
            sequence: Some("\x1b[B".to_owned()),
            ..descriptor()
        };
        let keypress = Keypress::from_readline(Some(&raw), None);
        assert_eq2!(keypress.to_string(), "backspace");
    }

    #[test]
    fn test_name_lookup_is_exact_match() {
        let raw = ReadlineKeyDescriptor {
            name: Some("spaces".to_owned()),
            ..descriptor()
        };
        let keypress = Keypress::from_readline(Some(&raw), Some("s"));
        // "spaces" is not "space": no special key, falls through to plain.
        assert_eq2!(keypress.to_string(), "s");
        assert_eq2!(keypress.is_special_key(), false);
    }

    #[test]
    fn test_sequence_lookup_resolves_page_up() {
        let raw = ReadlineKeyDescriptor {
            sequence: Some("\x1b[5~".to_owned()),
            ..descriptor()
        };
        let keypress = Keypress::from_readline(Some(&raw), None);
        assert_eq2!(keypress.to_string(), "pageup");
    }

    #[test]
    fn test_bare_escape_sequence_resolves_escape_not_arrow() {
        // "\x1b" alone must resolve to escape even though every arrow
        // sequence contains it; table order keeps the bare entry last.
        let raw = ReadlineKeyDescriptor {
            sequence: Some("\x1b".to_owned()),
            ..descriptor()
        };
        let keypress = Keypress::from_readline(Some(&raw), None);
        assert_eq2!(keypress.to_string(), "escape");
    }

    #[test]
    fn test_resolved_special_key_gets_modifier_flags_applied() {
        let raw = ReadlineKeyDescriptor {
            code: Some("[A".to_owned()),
            ctrl: true,
            shift: true,
            ..descriptor()
        };
        let keypress = Keypress::from_readline(Some(&raw), None);
        assert_eq2!(keypress.to_string(), "shift+ctrl+uparrow");
    }

    #[test]
    fn test_chorded_ctrl_uses_name_as_input() {
        let raw = ReadlineKeyDescriptor {
            name: Some("q".to_owned()),
            ctrl: true,
            ..descriptor()
        };
        let keypress = Keypress::from_readline(Some(&raw), None);
        assert_eq2!(keypress.to_string(), "ctrl+q");
        assert_eq2!(keypress.input(), "q");
        assert_eq2!(keypress.is_modifier_key(), true);
        assert_eq2!(keypress.is_special_key(), false);
    }

    #[test]
    fn test_chorded_meta_ignores_the_input_parameter() {
        // The literal input parameter is not trustworthy for chords; the
        // character travels in `name`.
        let raw = ReadlineKeyDescriptor {
            name: Some("b".to_owned()),
            meta: true,
            ..descriptor()
        };
        let keypress = Keypress::from_readline(Some(&raw), Some("\u{2}"));
        assert_eq2!(keypress.to_string(), "meta+b");
        assert_eq2!(keypress.input(), "b");
    }

    #[test]
    fn test_plain_path_applies_shift_and_literal_input() {
        let raw = ReadlineKeyDescriptor {
            name: Some("a".to_owned()),
            shift: true,
            ..descriptor()
        };
        let keypress = Keypress::from_readline(Some(&raw), Some("A"));
        assert_eq2!(keypress.to_string(), "shift+a");
        assert_eq2!(keypress.input(), "a");
    }

    #[test]
    fn test_absent_descriptor_yields_plain_input() {
        let keypress = Keypress::from_readline(None, Some("z"));
        assert_eq2!(keypress.to_string(), "z");
        assert_eq2!(keypress.key(), "");
    }

    #[test]
    fn test_absent_everything_yields_empty_keypress() {
        let keypress = Keypress::from_readline(None, None);
        assert_eq2!(keypress.to_string(), "");
        assert_eq2!(keypress.is_special_key(), false);
        assert_eq2!(keypress.is_modifier_key(), false);
    }

    #[test]
    fn test_unrecognized_fields_fall_through_without_error() {
        let raw = ReadlineKeyDescriptor {
            code: Some("[99z".to_owned()),
            name: Some("definitely-not-a-key".to_owned()),
            sequence: Some("zzz".to_owned()),
            ..descriptor()
        };
        let keypress = Keypress::from_readline(Some(&raw), None);
        assert_eq2!(keypress.to_string(), "");
    }
}
