mod icon;
mod layout;

use anyhow::Context;
use icon::render_pos_icon;
use std::fs;
use std::path::Path;

const OUTPUT_DIR: &str = "src-tauri/icons";

/// The three icons the app bundle needs. The 256 px icon keeps the
/// `@2x` name because it is the retina variant of the 128 px one.
const ICON_FILES: [(u32, &str); 3] = [
    (32, "32x32.png"),
    (128, "128x128.png"),
    (256, "128x128@2x.png"),
];

fn main() -> anyhow::Result<()> {
    generate_icons(Path::new(OUTPUT_DIR))?;
    println!("All icons created successfully!");
    Ok(())
}

/// Render every configured size into `out_dir`, creating it if needed.
/// Existing files are overwritten. Stops at the first filesystem error.
fn generate_icons(out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    for (size, name) in ICON_FILES {
        let path = out_dir.join(name);
        let img = render_pos_icon(size);
        img.save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {} ({}x{})", path.display(), size, size);
    }

    Ok(())
}
