// File: crates/bench-chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used by Skia's font lookup
        println!("cargo:rustc-link-lib=advapi32");
    }
}
