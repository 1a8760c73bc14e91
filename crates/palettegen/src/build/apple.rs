//! The Apple-flavored artifact builder.
//!
//! Emits two things under the output directory:
//!
//! - `<Namespace>.xcassets/` — an asset catalog with one `<Name>.colorset/`
//!   per entry, each holding a `Contents.json` color descriptor (with a
//!   second, dark-appearance stanza when the entry has an alternate value)
//! - `<Namespace>.swift` — string-name constants plus `UIColor` constants
//!   grouped under section banners, wrapped in an enum namespace
//!
//! Rendering is split from filesystem work: [`color_set_descriptor`] and
//! [`render_source`] are pure and unit-tested in isolation.

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::Environment;
use serde::Serialize;
use tracing::debug;

use crate::color::ColorEntry;
use crate::hex::{self, HexComponents};
use crate::templates;
use crate::util::lowercase_first;

use super::{ArtifactBuilder, BuildError};

const ASSET_CATALOG_EXT: &str = ".xcassets";
const COLOR_SET_EXT: &str = ".colorset";
const CONTENTS_FILENAME: &str = "Contents.json";

const FRAMEWORK_NAME: &str = "UIKit";
const CLASS_NAME: &str = "UIColor";

/// Builds an asset catalog and accompanying Swift source file.
pub struct AppleBuilder {
    output_dir: PathBuf,
    bundle_name: String,
    public_access: bool,
}

impl AppleBuilder {
    /// `bundle_name` is the name of a static var on Swift's `Bundle` the
    /// generated lookups resolve against, usually `main`.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        bundle_name: impl Into<String>,
        public_access: bool,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            bundle_name: bundle_name.into(),
            public_access,
        }
    }

    fn build_asset_catalog(
        &self,
        colors: &[ColorEntry],
        namespace: &str,
    ) -> Result<(), BuildError> {
        let catalog_dir = self
            .output_dir
            .join(format!("{namespace}{ASSET_CATALOG_EXT}"));
        replace_dir(&catalog_dir)?;
        fs::write(catalog_dir.join(CONTENTS_FILENAME), catalog_manifest()?)?;

        for color in colors {
            let set_dir = catalog_dir.join(format!("{}{COLOR_SET_EXT}", color.name));
            replace_dir(&set_dir)?;
            fs::write(set_dir.join(CONTENTS_FILENAME), color_set_descriptor(color)?)?;
            debug!(name = %color.name, "wrote color set");
        }

        Ok(())
    }

    fn build_accompanying_code(
        &self,
        colors: &[ColorEntry],
        namespace: &str,
    ) -> Result<(), BuildError> {
        let rendered = render_source(
            colors,
            namespace,
            &self.bundle_name,
            self.public_access,
        )?;
        let path = self.output_dir.join(format!("{namespace}.swift"));
        fs::write(&path, rendered)?;
        debug!(path = %path.display(), "wrote source file");
        Ok(())
    }
}

impl ArtifactBuilder for AppleBuilder {
    fn build(&self, colors: &[ColorEntry], namespace: &str) -> Result<(), BuildError> {
        self.build_asset_catalog(colors, namespace)?;
        self.build_accompanying_code(colors, namespace)
    }
}

/// Removes `dir` if present and recreates it empty.
fn replace_dir(dir: &Path) -> Result<(), BuildError> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

// =============================================================================
// Descriptor rendering (Contents.json)
// =============================================================================

#[derive(Serialize)]
struct CatalogInfo {
    version: u32,
    author: &'static str,
}

impl Default for CatalogInfo {
    fn default() -> Self {
        Self {
            version: 1,
            author: "xcode",
        }
    }
}

/// The fixed manifest at the catalog root.
#[derive(Default, Serialize)]
struct CatalogManifest {
    info: CatalogInfo,
}

#[derive(Serialize)]
struct ColorSet {
    info: CatalogInfo,
    colors: Vec<ColorVariant>,
}

#[derive(Serialize)]
struct ColorVariant {
    #[serde(skip_serializing_if = "Option::is_none")]
    appearances: Option<Vec<Appearance>>,
    idiom: &'static str,
    color: ColorPayload,
}

#[derive(Serialize)]
struct Appearance {
    appearance: &'static str,
    value: &'static str,
}

#[derive(Serialize)]
struct ColorPayload {
    #[serde(rename = "color-space")]
    color_space: &'static str,
    components: Components,
}

#[derive(Serialize)]
struct Components {
    red: String,
    alpha: String,
    blue: String,
    green: String,
}

impl ColorVariant {
    fn universal(c: HexComponents) -> Self {
        Self {
            appearances: None,
            idiom: "universal",
            color: ColorPayload::srgb(c),
        }
    }

    fn dark(c: HexComponents) -> Self {
        Self {
            appearances: Some(vec![Appearance {
                appearance: "luminosity",
                value: "dark",
            }]),
            idiom: "universal",
            color: ColorPayload::srgb(c),
        }
    }
}

impl ColorPayload {
    fn srgb(c: HexComponents) -> Self {
        Self {
            color_space: "srgb",
            components: Components {
                red: format!("0x{}", c.red),
                alpha: c.alpha,
                blue: format!("0x{}", c.blue),
                green: format!("0x{}", c.green),
            },
        }
    }
}

fn catalog_manifest() -> Result<String, BuildError> {
    Ok(serde_json::to_string_pretty(&CatalogManifest::default())?)
}

/// Renders one entry's `Contents.json` descriptor.
///
/// A second, dark-appearance stanza is emitted iff the entry carries an
/// alternate value.
fn color_set_descriptor(color: &ColorEntry) -> Result<String, BuildError> {
    let mut variants = vec![ColorVariant::universal(hex::decompose(&color.value)?)];
    if let Some(alternate) = &color.alternate_value {
        variants.push(ColorVariant::dark(hex::decompose(alternate)?));
    }

    let set = ColorSet {
        info: CatalogInfo::default(),
        colors: variants,
    };
    Ok(serde_json::to_string_pretty(&set)?)
}

// =============================================================================
// Source rendering (<Namespace>.swift)
// =============================================================================

#[derive(Serialize)]
struct SourceContext<'a> {
    namespace: &'a str,
    framework: &'static str,
    class_name: &'static str,
    bundle: &'a str,
    acl: &'static str,
    defined: Vec<SourceColor>,
    aliases: Vec<SourceColor>,
}

#[derive(Serialize)]
struct SourceColor {
    name: String,
    constant_name: String,
    comment: String,
}

impl From<&ColorEntry> for SourceColor {
    fn from(color: &ColorEntry) -> Self {
        let comment = match &color.comments {
            Some(comments) => format!("/// {} - {}", color.value, comments),
            None => format!("/// {}", color.value),
        };
        Self {
            name: color.name.clone(),
            constant_name: lowercase_first(&color.name),
            comment,
        }
    }
}

/// Renders the accompanying Swift source for `colors`.
///
/// The list is partitioned into defined and alias slices up front; each
/// non-empty slice gets its section banner exactly once. The input ordering
/// (defined first, then aliases, names ascending) is preserved verbatim.
fn render_source(
    colors: &[ColorEntry],
    namespace: &str,
    bundle: &str,
    public_access: bool,
) -> Result<String, BuildError> {
    let (defined, aliases): (Vec<&ColorEntry>, Vec<&ColorEntry>) =
        colors.iter().partition(|c| !c.is_alias);

    let context = SourceContext {
        namespace,
        framework: FRAMEWORK_NAME,
        class_name: CLASS_NAME,
        bundle,
        acl: if public_access { "public " } else { "" },
        defined: defined.iter().copied().map(SourceColor::from).collect(),
        aliases: aliases.iter().copied().map(SourceColor::from).collect(),
    };

    let mut env = Environment::new();
    env.add_template("source.swift", templates::SWIFT_SOURCE)?;
    Ok(env.get_template("source.swift")?.render(&context)?)
}
