// src/serebii/assets.rs
//! Sprite locations derived purely from an entry identifier.

/// (remote style directory, local file prefix)
const SPRITE_STYLES: [(&str, &str); 3] = [("green", "g"), ("rb", "rb"), ("yellow", "y")];

/// Normal sprite and the alternate "g" variant.
const SPRITE_VARIANTS: [&str; 2] = ["", "-g"];

/// One downloadable asset: where it lives remotely and what to call it locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub url: String,
    pub file_name: String,
}

/// The six sprite assets for `id`, in a fixed order (style-major).
pub fn locate_assets(base_url: &str, id: &str) -> Vec<AssetRef> {
    let base = base_url.trim_end_matches('/');
    SPRITE_STYLES
        .iter()
        .flat_map(|(style, prefix)| {
            SPRITE_VARIANTS.iter().map(move |variant| AssetRef {
                url: format!("{}/pokearth/sprites/{}/{}{}.png", base, style, id, variant),
                file_name: format!("{}{}{}.png", prefix, id, variant),
            })
        })
        .collect()
}
