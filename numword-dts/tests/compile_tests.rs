mod common;

use numword_core::engine::ContinuationRule;
use numword_core::{Keycode, ModFlags, NumWordConfig};
use numword_dts::{compile_dts, Compiler, DtsError};
use pretty_assertions::assert_eq;

use common::{behaviors, BASIC_KEYMAP};

#[test]
fn test_compile_basic_keymap() {
    let definitions = compile_dts(BASIC_KEYMAP).expect("Failed to compile keymap");
    assert_eq!(definitions.len(), 1);

    let definition = &definitions[0];
    assert_eq!(definition.slot, 0);
    assert_eq!(definition.label.as_deref(), Some("num_word"));
    assert_eq!(definition.name, "num_word");

    let config = &definition.config;
    assert_eq!(config.mods, ModFlags::empty());
    assert_eq!(config.layer, Some(2));
    assert!(config.ignore_numbers);
    assert!(!config.ignore_alphas);
    assert!(!config.ignore_modifiers);
    assert_eq!(config.continuations.len(), 9);
    assert_eq!(config.continuations[0], ContinuationRule::from(Keycode::key(0x2A)));
    assert_eq!(config.continuations[2], ContinuationRule::from(Keycode::key(0x37)));
}

#[test]
fn test_defaults_when_properties_absent() {
    let input = behaviors(
        r#"
        nw: num_word {
            compatible = "zmk,behavior-num-word";
        };
"#,
    );
    let definitions = compile_dts(&input).unwrap();
    assert_eq!(definitions[0].config, NumWordConfig::default());
}

#[test]
fn test_layer_minus_one_means_none() {
    let input = behaviors(
        r#"
        nw: num_word {
            compatible = "zmk,behavior-num-word";
            layers = <(-1)>;
            mods = <(MOD_LSFT|MOD_RALT)>;
        };
"#,
    );
    let definitions = compile_dts(&input).unwrap();
    let config = &definitions[0].config;
    assert_eq!(config.layer, None);
    assert_eq!(config.mods, ModFlags::LSFT | ModFlags::RALT);
}

#[test]
fn test_continue_list_wrappers_and_raw_values() {
    let input = behaviors(
        r#"
        nw: num_word {
            compatible = "zmk,behavior-num-word";
            continue-list = <LS(MINUS) LS(LC(N1)) UNDERSCORE 0x0007002D>;
        };
"#,
    );
    let definitions = compile_dts(&input).unwrap();
    let rules = &definitions[0].config.continuations;

    assert_eq!(rules[0], ContinuationRule::new(0x07, 0x2D, ModFlags::LSFT));
    assert_eq!(
        rules[1],
        ContinuationRule::new(0x07, 0x1E, ModFlags::LSFT | ModFlags::LCTL)
    );
    assert_eq!(rules[2], ContinuationRule::new(0x07, 0x2D, ModFlags::LSFT));
    assert_eq!(rules[3], ContinuationRule::new(0x07, 0x2D, ModFlags::empty()));
}

#[test]
fn test_slots_follow_document_order() {
    let input = behaviors(
        r#"
        nw: num_word {
            compatible = "zmk,behavior-num-word";
            layers = <1>;
        };
        other {
            unrelated = <1>;
        };
        nw_shift: num_word_shift {
            compatible = "zmk,behavior-num-word";
            mods = <MOD_LSFT>;
        };
"#,
    );
    let definitions = compile_dts(&input).unwrap();
    let summary: Vec<(usize, Option<&str>)> = definitions
        .iter()
        .map(|d| (d.slot, d.label.as_deref()))
        .collect();
    assert_eq!(summary, vec![(0, Some("nw")), (1, Some("nw_shift"))]);
}

#[test]
fn test_override_block_replaces_properties() {
    let input = format!(
        "{}\n&nw {{\n    layers = <4>;\n    ignore-alphas;\n}};\n",
        behaviors(
            r#"
        nw: num_word {
            compatible = "zmk,behavior-num-word";
            layers = <2>;
        };
"#
        )
    );
    let definitions = compile_dts(&input).unwrap();
    let config = &definitions[0].config;
    assert_eq!(config.layer, Some(4));
    assert!(config.ignore_alphas);
}

#[test]
fn test_override_of_unknown_label() {
    let input = "&missing {\n    layers = <1>;\n};\n";
    match compile_dts(input) {
        Err(DtsError::UnknownLabel(label)) => assert_eq!(label, "missing"),
        other => panic!("Expected unknown label error, got {:?}", other),
    }
}

#[test]
fn test_unknown_key_in_continue_list() {
    let input = "/ {\n    nw: num_word {\n        compatible = \"zmk,behavior-num-word\";\n        continue-list = <BSPC NOT_A_KEY>;\n    };\n};\n";
    match compile_dts(input) {
        Err(DtsError::UnknownKey { line, name }) => {
            assert_eq!(line, 4);
            assert_eq!(name, "NOT_A_KEY");
        }
        other => panic!("Expected unknown key error, got {:?}", other),
    }
}

#[test]
fn test_unknown_key_reports_cell_line() {
    let input = "/ {\n    nw: num_word {\n        compatible = \"zmk,behavior-num-word\";\n        continue-list = <BSPC\n            DEL\n            LS(NOPE)\n        >;\n    };\n};\n";
    match compile_dts(input) {
        Err(DtsError::UnknownKey { line, name }) => {
            assert_eq!(line, 6);
            assert_eq!(name, "NOPE");
        }
        other => panic!("Expected unknown key error, got {:?}", other),
    }
}

#[test]
fn test_block_comments_in_keymap() {
    let input = r#"
/*
 * Copyright (c) 2024 The ZMK Contributors
 * SPDX-License-Identifier: MIT
 */
/ {
    /* behaviors */
    behaviors {
        nw: num_word { /* trailing ** comment **/
            compatible = "zmk,behavior-num-word";
            continue-list = <BSPC /* back */ DEL>;
        };
    };
};
"#;
    let definitions = compile_dts(input).expect("Failed to compile keymap with comments");
    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].config.continuations.len(), 2);
}

#[test]
fn test_invalid_property_values() {
    let cases = [
        ("layers = <128>;", "layers"),
        ("layers = <1 2>;", "layers"),
        ("mods = <0x100>;", "mods"),
        ("ignore-alphas = <1>;", "ignore-alphas"),
        ("continue-list = <&kp>;", "continue-list"),
    ];

    for (body, expected) in cases {
        let input = behaviors(&format!(
            "        nw: num_word {{\n            compatible = \"zmk,behavior-num-word\";\n            {}\n        }};",
            body
        ));
        match compile_dts(&input) {
            Err(DtsError::InvalidProperty { node, property, .. }) => {
                assert_eq!(node, "num_word", "case: {}", body);
                assert_eq!(property, expected, "case: {}", body);
            }
            other => panic!("Expected invalid property for '{}', got {:?}", body, other),
        }
    }
}

#[test]
fn test_parse_error_reports_line() {
    let input = "/ {\n    nw: num_word {\n        layers = <2>\n    };\n};\n";
    match compile_dts(input) {
        Err(DtsError::Parse { line, message }) => {
            assert_eq!(line, 4);
            assert!(message.contains("Semicolon"), "message: {}", message);
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_lexer_error_on_stray_character() {
    let input = "/ {\n    nw: num_word {\n        layers = <2> $;\n    };\n};\n";
    match compile_dts(input) {
        Err(DtsError::Parse { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("Unexpected token"), "message: {}", message);
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_no_behaviors() {
    let compiler = Compiler::default();
    let ast = numword_dts::parser::Parser::new("/ {\n};\n").parse().unwrap();
    assert!(compiler.compile(ast).unwrap().is_empty());
}
