//! The built-in template catalog.
//!
//! Two static tables (light and dark appearance) of named 12-step scales,
//! parsed from their `color(display-p3 ...)` tokens into OKLCH on first
//! access. The parsed catalogs are process-wide singletons; a malformed
//! token is a data error and aborts initialization.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::color::{parse_p3_token, rgb_to_oklch, Oklch};
use crate::Appearance;

mod tables;

/// The neutral families. A seed that lands closest to one of these must not
/// blend with another near-identical gray, and the gray seed synthesizes
/// against this subset only.
pub(crate) const GRAY_SCALE_NAMES: &[&str] = &["gray", "mauve", "slate", "sage", "olive", "sand"];

pub(crate) type TemplateScale = [Oklch; 12];

pub(crate) struct Catalog {
    pub scales: IndexMap<&'static str, TemplateScale>,
    pub gray_scales: IndexMap<&'static str, TemplateScale>,
}

impl Catalog {
    fn build(appearance: Appearance) -> Catalog {
        let mut scales = IndexMap::new();

        for (name, light, dark) in tables::TEMPLATE_SCALES {
            let tokens = match appearance {
                Appearance::Light => light,
                Appearance::Dark => dark,
            };
            let steps: TemplateScale = core::array::from_fn(|i| {
                let rgb = parse_p3_token(tokens[i]).expect("malformed display-p3 template token");
                rgb_to_oklch(rgb)
            });
            scales.insert(*name, steps);
        }

        let gray_scales = scales
            .iter()
            .filter(|(name, _)| is_gray(name))
            .map(|(name, scale)| (*name, *scale))
            .collect();

        Catalog {
            scales,
            gray_scales,
        }
    }
}

pub(crate) fn is_gray(name: &str) -> bool {
    GRAY_SCALE_NAMES.contains(&name)
}

static LIGHT: Lazy<Catalog> = Lazy::new(|| Catalog::build(Appearance::Light));
static DARK: Lazy<Catalog> = Lazy::new(|| Catalog::build(Appearance::Dark));

pub(crate) fn catalog(appearance: Appearance) -> &'static Catalog {
    match appearance {
        Appearance::Light => &LIGHT,
        Appearance::Dark => &DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_load_every_family() {
        for appearance in [Appearance::Light, Appearance::Dark] {
            let catalog = catalog(appearance);
            assert_eq!(catalog.scales.len(), 31);
            assert_eq!(catalog.gray_scales.len(), GRAY_SCALE_NAMES.len());
            assert!(catalog.scales.contains_key("blue"));
            assert!(catalog.scales.contains_key("slate"));
        }
    }

    #[test]
    fn iteration_order_is_stable() {
        let names: Vec<&str> = catalog(Appearance::Light).scales.keys().copied().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        // Families are inserted alphabetically, so distance ties between
        // scales always resolve the same way.
        assert_eq!(names, sorted);
        assert_eq!(names[0], "amber");
    }

    #[test]
    fn light_scales_darken_and_dark_scales_lighten() {
        let light = catalog(Appearance::Light);
        let dark = catalog(Appearance::Dark);

        for (name, scale) in &light.scales {
            assert!(
                scale[0].l > scale[11].l,
                "light {name} does not run light to dark"
            );
            assert!(scale[0].l > 0.9, "light {name} step 1 is not near-white");
        }
        for (name, scale) in &dark.scales {
            assert!(
                scale[0].l < scale[11].l,
                "dark {name} does not run dark to light"
            );
            assert!(scale[0].l < 0.3, "dark {name} step 1 is not near-black");
        }
    }

    #[test]
    fn gray_families_are_near_neutral() {
        for (_, scale) in &catalog(Appearance::Light).gray_scales {
            for step in scale {
                assert!(step.c < 0.03);
            }
        }
    }
}
