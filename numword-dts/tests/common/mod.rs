#![allow(dead_code)]

/// A keymap with one num-word behavior, as a board config would declare it
pub const BASIC_KEYMAP: &str = r#"
#include <behaviors.dtsi>
#include <dt-bindings/zmk/keys.h>

/ {
    behaviors {
        num_word: num_word {
            compatible = "zmk,behavior-num-word";
            label = "NUM_WORD";
            #binding-cells = <0>;
            layers = <2>;
            continue-list = <BSPC DEL DOT COMMA PLUS MINUS STAR FSLH EQUAL>;
            ignore-numbers;
        };
    };

    keymap {
        compatible = "zmk,keymap";
        default_layer {
            bindings = <&kp A &num_word>;
        };
    };
};
"#;

/// Wraps behavior nodes in a root and `behaviors` node
pub fn behaviors(body: &str) -> String {
    format!("/ {{\n    behaviors {{\n{}\n    }};\n}};\n", body)
}
