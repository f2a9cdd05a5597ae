// File: crates/chart-render-skia/build.rs
// Summary: Links the Windows system libraries Skia's PNG path needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, pulled in by Skia's font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
