//! CSS custom-property emission for a generated palette.

use crate::Palette;

impl Palette {
    /// Renders the palette as a CSS custom-property block under
    /// `theme_selector`. The accent variables take `color_name`; the gray
    /// scale always publishes as `--gray-*`.
    pub fn to_css(&self, color_name: &str, theme_selector: &str) -> String {
        let mut css = String::new();

        css.push_str(&format!("{} {{\n", theme_selector));

        // Accent scale (1-12)
        for (i, color) in self.accent_scale.iter().enumerate() {
            css.push_str(&format!("  --{}-{}: {};\n", color_name, i + 1, color.to_hex()));
        }
        css.push('\n');

        // Accent alpha scale (a1-a12)
        for (i, color) in self.accent_scale_alpha.iter().enumerate() {
            css.push_str(&format!("  --{}-a{}: {};\n", color_name, i + 1, color.to_hex()));
        }
        css.push('\n');

        // Gray scale (1-12)
        for (i, color) in self.gray_scale.iter().enumerate() {
            css.push_str(&format!("  --gray-{}: {};\n", i + 1, color.to_hex()));
        }
        css.push('\n');

        // Gray alpha scale (a1-a12)
        for (i, color) in self.gray_scale_alpha.iter().enumerate() {
            css.push_str(&format!("  --gray-a{}: {};\n", i + 1, color.to_hex()));
        }
        css.push('\n');

        css.push_str(&format!(
            "  --{}-contrast: {};\n",
            color_name,
            self.accent_contrast.to_hex()
        ));
        css.push_str(&format!(
            "  --{}-surface: {};\n",
            color_name,
            self.accent_surface.to_hex()
        ));
        // Step 9 doubles as the indicator and track color.
        css.push_str(&format!(
            "  --{}-indicator: {};\n",
            color_name,
            self.accent_scale[8].to_hex()
        ));
        css.push_str(&format!(
            "  --{}-track: {};\n",
            color_name,
            self.accent_scale[8].to_hex()
        ));

        css.push_str(&format!("  --background: {};\n", self.background.to_hex()));
        css.push_str("}\n");

        css
    }
}

#[cfg(test)]
mod tests {
    use crate::{generate, Appearance};

    #[test]
    fn emits_every_variable_group() {
        let palette = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#FFFFFF").unwrap();
        let css = palette.to_css("indigo", ":root, .light-theme");

        assert!(css.starts_with(":root, .light-theme {\n"));
        assert!(css.contains("  --indigo-1: #"));
        assert!(css.contains("  --indigo-12: #"));
        assert!(css.contains("  --indigo-a12: #"));
        assert!(css.contains("  --gray-1: #"));
        assert!(css.contains("  --gray-a1: #"));
        assert!(css.contains("  --indigo-contrast: #FFFFFF;\n"));
        assert!(css.contains(&format!(
            "  --indigo-surface: {};\n",
            palette.accent_surface.to_hex()
        )));
        assert!(css.contains(&format!(
            "  --indigo-indicator: {};\n",
            palette.accent_scale[8].to_hex()
        )));
        assert!(css.contains("  --background: #FFFFFF;\n"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn alpha_variables_carry_eight_digit_hex() {
        let palette = generate(Appearance::Dark, "#0090FF", "#8B8D98", "#111111").unwrap();
        let css = palette.to_css("blue", ".dark-theme");

        let alpha_line = css
            .lines()
            .find(|line| line.trim_start().starts_with("--blue-a9:"))
            .unwrap();
        let value = alpha_line.split(": ").nth(1).unwrap().trim_end_matches(';');
        assert_eq!(value.len(), 9, "{alpha_line}");
    }
}
