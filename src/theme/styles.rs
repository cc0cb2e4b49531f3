//! Global CSS styles for Card Flip.
//!
//! Palette variables come from `colors.rs`; geometry of the focus outline and
//! the face rotations are inline styles derived per render.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  margin: 0;
  font-family: 'Source Sans Pro', 'Helvetica Neue', Arial, sans-serif;
  color: var(--input-text);
}

/* === Root Container === */
.app-container {
  background-color: var(--canvas);
  width: 100vw;
  height: 100vh;
  display: flex;
  justify-content: center;
  align-items: center;
}

/* === Card Form Widget === */
.card-form {
  border-radius: 4px;
  display: flex;
  flex-direction: column;
}

/* === Card Preview === */
.card-preview {
  position: relative;
  width: 430px;
  height: 270px;
  left: 34px;
  top: 24px;
}

.card-face {
  position: absolute;
  width: 100%;
  height: 100%;
  border-radius: 6px;
  box-shadow: 0 30px 60px 0 var(--card-shadow);
  display: flex;
  padding: 24px;
  flex-direction: column;
  justify-content: space-between;
  backface-visibility: hidden;
  transition: transform 0.8s;
  transform-style: preserve-3d;
}

.card-face--front {
  background-color: var(--card-front);
}

.card-face--back {
  justify-content: center;
  background-color: var(--card-back);
}

.card-row {
  display: flex;
  justify-content: space-between;
}

.card-number {
  font-size: 30px;
  letter-spacing: 4px;
  margin: 0 auto;
}

.card-cvc {
  background-color: white;
  border-radius: 4px;
  padding: 8px;
  text-align: right;
  height: 34px;
}

/* === Focus Outline === */
.focus-outline {
  position: absolute;
  border: 2px solid var(--focus-border);
  border-radius: 4px;
  transition: all 0.35s;
}

/* === Form === */
.form-block {
  display: flex;
  flex-direction: column;
  box-shadow: 0 30px 60px 0 var(--card-shadow);
  width: 500px;
  height: 600px;
  padding: 60px 18px 18px;
  background-color: var(--form-background);
}

.input-block {
  margin-top: 24px;
}

.input-row {
  display: flex;
  gap: 12px;
}

.input-field {
  width: 100%;
  height: 50px;
  border-radius: 5px;
  box-shadow: none;
  border: 1px solid var(--input-border);
  transition: all 0.3s ease-in-out;
  font-size: 18px;
  padding: 5px 15px;
  background: none;
  color: var(--input-text);
  background-color: white;
}

.select-field {
  height: 50px;
  font-size: 18px;
}
"#;
