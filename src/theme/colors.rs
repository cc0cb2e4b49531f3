//! Color constants for the card preview and form.

// === CANVAS ===
pub const CANVAS: &str = "#ddeefc";

// === CARD FACES ===
pub const CARD_FRONT: &str = "PaleTurquoise";
pub const CARD_BACK: &str = "LightPink";
pub const CARD_SHADOW: &str = "rgba(90, 116, 148, 0.4)";
pub const FOCUS_BORDER: &str = "rgba(255, 255, 255, 0.65)";

// === FORM ===
pub const FORM_BACKGROUND: &str = "white";
pub const INPUT_BORDER: &str = "#ced6e0";
pub const INPUT_TEXT: &str = "#1a3b5d";

/// `:root` block exposing the palette as CSS custom properties
pub fn root_variables() -> String {
    let vars = [
        ("canvas", CANVAS),
        ("card-front", CARD_FRONT),
        ("card-back", CARD_BACK),
        ("card-shadow", CARD_SHADOW),
        ("focus-border", FOCUS_BORDER),
        ("form-background", FORM_BACKGROUND),
        ("input-border", INPUT_BORDER),
        ("input-text", INPUT_TEXT),
    ];

    let mut css = String::from(":root {\n");
    for (name, value) in vars {
        css.push_str(&format!("  --{}: {};\n", name, value));
    }
    css.push_str("}\n");
    css
}
