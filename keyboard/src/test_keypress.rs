// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use crate::{assert_eq2, key_creator, Keypress, ModifierKey, SpecialKey};

    #[test]
    fn test_every_special_key_round_trips_to_its_token() {
        for special_key in SpecialKey::iter() {
            let keypress =
                Keypress::build_immutable(Some(key_creator::special(special_key)), None);
            assert_eq2!(keypress.to_string(), special_key.to_string());
            assert_eq2!(keypress.is_special_key(), true);
            assert_eq2!(keypress.is_modifier_key(), false);
        }
    }

    #[test]
    fn test_spot_check_canonical_tokens() {
        let uparrow = Keypress::build_immutable(Some(key_creator::up_arrow()), None);
        assert_eq2!(uparrow.to_string(), "uparrow");

        let escape = Keypress::build_immutable(Some(key_creator::escape()), None);
        assert_eq2!(escape.to_string(), "escape");

        let pagedown = Keypress::build_immutable(Some(key_creator::page_down()), None);
        assert_eq2!(pagedown.to_string(), "pagedown");
    }

    #[test]
    fn test_modifier_order_is_fixed_regardless_of_set_order() {
        // Every subset of {shift, ctrl, meta}, applied in scrambled order
        // (meta first, then ctrl, then shift), must serialize in the fixed
        // order shift, ctrl, meta.
        for shift in [false, true] {
            for ctrl in [false, true] {
                for meta in [false, true] {
                    let mut key = key_creator::tab();
                    key.set_modifier_flag(ModifierKey::Meta, meta);
                    key.set_modifier_flag(ModifierKey::Ctrl, ctrl);
                    key.set_modifier_flag(ModifierKey::Shift, shift);
                    let keypress = Keypress::build_immutable(Some(key), None);

                    let mut expected: Vec<&str> = vec![];
                    if shift {
                        expected.push("shift");
                    }
                    if ctrl {
                        expected.push("ctrl");
                    }
                    if meta {
                        expected.push("meta");
                    }
                    expected.push("tab");

                    assert_eq2!(keypress.to_string(), expected.join("+"));
                }
            }
        }
    }

    #[test]
    fn test_empty_construction_is_idempotent() {
        let keypress = Keypress::build_immutable(None, None);
        assert_eq2!(keypress.to_string(), "");
        assert_eq2!(keypress.is_special_key(), false);
        assert_eq2!(keypress.is_modifier_key(), false);
        assert_eq2!(keypress.input(), "");
        assert_eq2!(keypress.key(), "");
    }

    #[test]
    fn test_set_modifier_key_is_copy_on_write() {
        let original = Keypress::build_immutable(Some(key_creator::tab()), None);
        let changed = original.set_modifier_key(ModifierKey::Shift, true);

        assert_eq2!(original.to_string(), "tab");
        assert_eq2!(changed.to_string(), "shift+tab");

        // Flipping back also leaves its source untouched.
        let reverted = changed.set_modifier_key(ModifierKey::Shift, false);
        assert_eq2!(changed.to_string(), "shift+tab");
        assert_eq2!(reverted.to_string(), "tab");
    }

    #[test]
    fn test_set_modifier_key_without_key_state_is_a_noop_copy() {
        let original = Keypress::build_immutable(None, Some("a"));
        let copy = original.set_modifier_key(ModifierKey::Ctrl, true);
        assert_eq2!(copy.to_string(), "a");
        assert_eq2!(copy.key(), "");
        assert_eq2!(copy, original);
    }

    #[test]
    fn test_ctrl_plus_character() {
        let keypress = Keypress::build_immutable(Some(key_creator::ctrl()), Some("a"));
        assert_eq2!(keypress.to_string(), "ctrl+a");
        assert_eq2!(keypress.input(), "a");
        assert_eq2!(keypress.is_modifier_key(), true);
        assert_eq2!(keypress.is_special_key(), false);
    }

    #[test]
    fn test_bare_modifier_serializes_to_its_name() {
        let keypress = Keypress::build_immutable(Some(key_creator::ctrl()), None);
        assert_eq2!(keypress.to_string(), "ctrl");
        assert_eq2!(keypress.is_modifier_key(), true);
        assert_eq2!(keypress.is_special_key(), false);
    }

    #[test]
    fn test_accessors_are_total_and_lower_cased() {
        let keypress = Keypress::build_immutable(Some(key_creator::shift()), Some("X"));
        assert_eq2!(keypress.input(), "x");
        assert_eq2!(keypress.key(), "shift");
        assert_eq2!(keypress.to_string(), "shift+x");
    }

    #[test]
    fn test_matches_compares_canonical_strings() {
        let keypress =
            Keypress::build_immutable(Some(key_creator::tab().with_shift()), None);
        assert_eq2!(keypress.matches("shift+tab"), true);
        assert_eq2!(keypress.matches("tab"), false);
        assert_eq2!(keypress.matches(""), false);
    }

    #[test]
    fn test_special_key_wins_over_input_in_canonical_form() {
        let keypress =
            Keypress::build_immutable(Some(key_creator::return_key()), Some("\r"));
        assert_eq2!(keypress.to_string(), "return");
        assert_eq2!(keypress.input(), "\r");
    }
}
