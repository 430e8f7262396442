use anyhow::*;
use fs_extra::copy_items;
use fs_extra::dir::CopyOptions;
use std::env;
use std::path::PathBuf;

// Ships the textures and models next to the build output so a binary started
// from `target/` finds them under `OUT_DIR/assets`.
fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=assets");
    println!("cargo:rerun-if-env-changed=CITY_NGIN_ASSETS");

    let out_dir = env::var("OUT_DIR")?;
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let assets_src = manifest_dir.join("assets");
    if !assets_src.exists() {
        println!("cargo:warning=no assets/ folder, the scene needs CITY_NGIN_ASSETS at runtime");
        return Ok(());
    }

    let mut copy_options = CopyOptions::new();
    copy_options.overwrite = true;
    copy_items(&[assets_src], &out_dir, &copy_options)?;
    println!("cargo:rustc-env=CITY_NGIN_BUNDLED_ASSETS={out_dir}/assets");

    Ok(())
}
