//! Process-wide icon lookup, built once at bootstrap and read-only after.
//!
//! Resolution is an explicit no-match rather than a panic: a page asking for
//! an unregistered glyph renders a placeholder and keeps going.

use std::{collections::HashMap, fmt};

use leptos::prelude::*;
use name_variant::NamedVariant;

use crate::error::{Error, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, NamedVariant)]
pub enum IconFamily {
    Solid,
    Brands,
}

impl fmt::Display for IconFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.variant_name().to_ascii_lowercase())
    }
}

/// One vector glyph. The path data is opaque to the shell; it is emitted
/// verbatim into an inline `<svg>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDefinition {
    family: IconFamily,
    name: &'static str,
    view_box: &'static str,
    path: &'static str,
}

impl IconDefinition {
    pub const fn new(
        family: IconFamily,
        name: &'static str,
        view_box: &'static str,
        path: &'static str,
    ) -> Self {
        Self {
            family,
            name,
            view_box,
            path,
        }
    }

    pub fn family(&self) -> IconFamily {
        self.family
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Inline SVG markup for the glyph, sized by the surrounding element and
    /// colored with `currentColor`.
    pub fn markup(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{}\" \
             fill=\"currentColor\" aria-hidden=\"true\"><path d=\"{}\"/></svg>",
            self.view_box, self.path,
        )
    }
}

#[derive(Debug, Default, Clone)]
pub struct IconRegistry {
    families: HashMap<IconFamily, HashMap<&'static str, IconDefinition>>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's fixed icon set: four solid glyphs and four platform
    /// brands. This is the only construction path; there is no second
    /// registration pass that could shadow an earlier definition.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for icon in &glyph::BUILTIN {
            registry.register(icon.clone())?;
        }
        Ok(registry)
    }

    /// Adds one definition, rejecting duplicates within a family instead of
    /// silently overwriting.
    pub fn register(&mut self, icon: IconDefinition) -> Result<()> {
        let family = self.families.entry(icon.family).or_default();
        if family.contains_key(icon.name) {
            return Err(Error::DuplicateIcon {
                family: icon.family,
                name: icon.name.to_owned(),
            });
        }
        family.insert(icon.name, icon);
        Ok(())
    }

    /// Pure lookup; never mutates the registry.
    pub fn resolve(&self, family: IconFamily, name: &str) -> Option<&IconDefinition> {
        self.families.get(&family)?.get(name)
    }

    pub fn len(&self) -> usize {
        self.families.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renders a registered glyph inline. A name with no registered definition
/// logs a warning and degrades to an empty placeholder span; the rest of the
/// page renders normally.
#[component]
pub fn Icon(family: IconFamily, #[prop(into)] name: String) -> impl IntoView {
    let registry = expect_context::<IconRegistry>();
    match registry.resolve(family, &name) {
        Some(icon) => view! { <span class="icon" inner_html=icon.markup()></span> }.into_any(),
        None => {
            log::warn!("no {family} icon registered under {name:?}");
            view! { <span class="icon icon--missing" aria-hidden="true"></span> }.into_any()
        }
    }
}

mod glyph {
    use super::{IconDefinition, IconFamily};

    const SOLID: IconFamily = IconFamily::Solid;
    const BRANDS: IconFamily = IconFamily::Brands;

    pub(super) static BUILTIN: [IconDefinition; 8] = [
        IconDefinition::new(
            SOLID,
            "arrow-up-right-from-square",
            "0 0 512 512",
            "M320 0c-17.7 0-32 14.3-32 32s14.3 32 32 32h82.7L201.4 265.4c-12.5 \
             12.5-12.5 32.8 0 45.3s32.8 12.5 45.3 0L448 109.3V192c0 17.7 14.3 32 \
             32 32s32-14.3 32-32V32c0-17.7-14.3-32-32-32H320zM80 32C35.8 32 0 \
             67.8 0 112V432c0 44.2 35.8 80 80 80H400c44.2 0 80-35.8 \
             80-80V320c0-17.7-14.3-32-32-32s-32 14.3-32 32V432c0 8.8-7.2 16-16 \
             16H80c-8.8 0-16-7.2-16-16V112c0-8.8 7.2-16 16-16H192c17.7 0 32-14.3 \
             32-32s-14.3-32-32-32H80z",
        ),
        IconDefinition::new(
            SOLID,
            "arrow-up",
            "0 0 384 512",
            "M214.6 41.4c-12.5-12.5-32.8-12.5-45.3 0l-160 160c-12.5 12.5-12.5 \
             32.8 0 45.3s32.8 12.5 45.3 0L160 141.2V448c0 17.7 14.3 32 32 \
             32s32-14.3 32-32V141.2L329.4 246.6c12.5 12.5 32.8 12.5 45.3 \
             0s12.5-32.8 0-45.3l-160-160z",
        ),
        IconDefinition::new(
            SOLID,
            "arrow-down",
            "0 0 384 512",
            "M169.4 470.6c12.5 12.5 32.8 12.5 45.3 0l160-160c12.5-12.5 \
             12.5-32.8 0-45.3s-32.8-12.5-45.3 0L224 370.8V64c0-17.7-14.3-32 \
             -32-32s-32 14.3-32 32V370.8L54.6 265.4c-12.5-12.5-32.8-12.5-45.3 \
             0s-12.5 32.8 0 45.3l160 160z",
        ),
        IconDefinition::new(
            SOLID,
            "mug-saucer",
            "0 0 576 512",
            "M96 64c0-17.7 14.3-32 32-32H448h64c70.7 0 128 57.3 128 128s-57.3 \
             128-128 128H480c0 53-43 96-96 96H192c-53 0-96-43-96-96V64zM480 \
             224h32c35.3 0 64-28.7 64-64s-28.7-64-64-64H480V224zM32 416H544c17.7 \
             0 32 14.3 32 32s-14.3 32-32 32H32c-17.7 0-32-14.3-32-32s14.3-32 \
             32-32z",
        ),
        IconDefinition::new(
            BRANDS,
            "youtube",
            "0 0 576 512",
            "M549.7 124.1c-6.3-23.7-24.8-42.3-48.3-48.6C458.8 64 288 64 288 \
             64S117.2 64 74.6 75.5c-23.5 6.3-42 24.9-48.3 48.6-11.4 42.9-11.4 \
             132.3-11.4 132.3s0 89.4 11.4 132.3c6.3 23.7 24.8 41.5 48.3 47.8C117.2 \
             448 288 448 288 448s170.8 0 213.4-11.5c23.5-6.3 42-24.2 48.3-47.8 \
             11.4-42.9 11.4-132.3 11.4-132.3s0-89.4-11.4-132.3zm-317.5 \
             213.5V175.2l142.7 81.2-142.7 81.2z",
        ),
        IconDefinition::new(
            BRANDS,
            "spotify",
            "0 0 496 512",
            "M248 8C111.1 8 0 119.1 0 256s111.1 248 248 248 248-111.1 248-248S384.9 \
             8 248 8zm100.7 364.9c-4.2 0-6.8-1.3-10.7-3.6-62.4-37.6-135-39.2-206.7 \
             -24.5-3.9 1-9 2.6-11.9 2.6-9.7 0-15.8-7.7-15.8-15.8 0-10.3 6.1-15.2 \
             13.6-16.8 81.9-18.1 165.6-16.5 237 26.2 6.1 3.9 9.7 7.4 9.7 16.5s-7.1 \
             15.4-15.2 15.4zm26.9-65.6c-5.2 0-8.7-2.3-12.3-4.2-62.5-37-155.7-51.9 \
             -238.6-29.4-4.8 1.3-7.4 2.6-11.9 2.6-10.7 0-19.4-8.7-19.4-19.4s5.2 \
             -17.8 15.5-20.7c27.8-7.8 56.2-13.6 97.8-13.6 64.9 0 127.6 16.1 177 \
             45.5 8.1 4.8 11.3 11 11.3 19.7-.1 10.8-8.5 19.5-19.4 19.5zm31-76.2c \
             -5.2 0-8.4-1.3-12.9-3.9-71.2-42.5-198.5-52.7-280.9-29.7-3.6 1-8.1 \
             2.6-12.9 2.6-13.2 0-23.3-10.3-23.3-23.6 0-13.6 8.4-21.3 17.4-23.9 \
             35.2-10.3 74.6-15.2 117.5-15.2 73 0 149.5 15.2 205.4 47.8 7.8 4.5 \
             12.9 10.7 12.9 22.6 0 13.6-11 23.3-23.2 23.3z",
        ),
        IconDefinition::new(
            BRANDS,
            "apple",
            "0 0 384 512",
            "M318.7 268.7c-.2-36.7 16.4-64.4 50-84.8-18.8-26.9-47.2-41.7-84.7 \
             -44.6-35.5-2.8-74.3 20.7-88.5 20.7-15 0-49.4-19.7-76.4-19.7C63.3 \
             141.2 4 184.8 4 273.5q0 39.3 14.4 81.2c12.8 36.7 59 126.7 107.2 \
             125.2 25.2-.6 43-17.9 75.8-17.9 31.8 0 48.3 17.9 76.4 17.9 48.6-.7 \
             90.4-82.5 102.6-119.3-65.2-30.7-61.7-90-61.7-91.9zm-56.6-164.2c27.3 \
             -32.4 24.8-61.9 24-72.5-24.1 1.4-52 16.4-67.9 34.9-17.5 19.8-27.8 \
             44.3-25.6 71.9 26.1 2 49.9-11.4 69.5-34.3z",
        ),
        IconDefinition::new(
            BRANDS,
            "patreon",
            "0 0 512 512",
            "M512 194.8c0 101.3-82.4 183.8-183.8 183.8-101.7 0-184.4-82.4-184.4 \
             -183.8 0-101.6 82.7-184.3 184.4-184.3C429.6 10.5 512 93.2 512 \
             194.8zM0 501.5h90v-491H0v491z",
        ),
    ];
}
