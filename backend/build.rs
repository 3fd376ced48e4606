use std::fs;
use std::path::Path;

/// Copies the trunk output in `../frontend/dist` to `static/dist` so it can be
/// embedded into the server binary.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .unwrap();
    }

    // `include_dir!("static/dist")` in main.rs fails to compile when the path is
    // missing. Without a trunk build the server then serves 404s for the UI
    // while the API keeps working.
    fs::create_dir_all(out_dir.join("dist")).unwrap();

    println!("cargo:rerun-if-changed=../frontend/dist");
}
